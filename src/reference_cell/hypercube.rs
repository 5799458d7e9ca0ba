//! Axis-aligned boxes
use super::{AffineMap, FlatteningMap};
use crate::error::{Error, Result};
use crate::traits::ReferenceCell;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned box `[l_0, u_0] x ... x [l_{n-1}, u_{n-1}]`
///
/// The topology is numbered as a tensor product of intervals. Vertex `v` has coordinate `u_i` on
/// axis `i` if bit `n - 1 - i` of `v` is set and `l_i` otherwise. Entities are grouped by a 0/1
/// word with a 1 for each axis along which the entity extends. Words are taken in lexicographic
/// order, and within a word the entities run over the values of the fixed axes with the first axis
/// slowest. Each entity of dimension `d` is numbered by a running counter over all words with `d`
/// ones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hypercube {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

/// A topological entity of a [Hypercube]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HypercubeEntity {
    /// The value of each fixed axis, `None` for free axes
    coords: Vec<Option<usize>>,
}

impl HypercubeEntity {
    /// Topological dimension
    pub fn dim(&self) -> usize {
        self.coords.iter().filter(|c| c.is_none()).count()
    }

    /// Is `other` contained in the closure of this entity?
    pub fn contains(&self, other: &HypercubeEntity) -> bool {
        self.coords
            .iter()
            .zip(&other.coords)
            .all(|(a, b)| a.is_none() || a == b)
    }

    /// Vertex indices, in ascending order
    pub fn vertices(&self) -> Vec<usize> {
        let n = self.coords.len();
        let free = self
            .coords
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        let base = self
            .coords
            .iter()
            .enumerate()
            .map(|(i, c)| c.unwrap_or(0) << (n - 1 - i))
            .sum::<usize>();
        (0..1usize << free.len())
            .map(|v| {
                base + free
                    .iter()
                    .enumerate()
                    .map(|(j, axis)| ((v >> (free.len() - 1 - j)) & 1) << (n - 1 - axis))
                    .sum::<usize>()
            })
            .collect()
    }
}

/// Bits of `value` as a word of length `len`, most significant first
fn bits(value: usize, len: usize) -> Vec<usize> {
    (0..len).map(|i| (value >> (len - 1 - i)) & 1).collect()
}

impl Hypercube {
    /// The unit hypercube `[0, 1]^dim`
    pub fn unit(dim: usize) -> Self {
        Self {
            lower: vec![0.0; dim],
            upper: vec![1.0; dim],
        }
    }

    /// A box with the given lower and upper corners
    pub fn from_bounds(lower: &[f64], upper: &[f64]) -> Result<Self> {
        if lower.len() != upper.len() {
            return Err(Error::PointDimensionMismatch {
                expected: lower.len(),
                got: upper.len(),
            });
        }
        if let Some(i) = lower.iter().chain(upper).position(|x| !x.is_finite()) {
            return Err(Error::NonFiniteBound {
                axis: i % lower.len(),
            });
        }
        Ok(Self {
            lower: lower.to_vec(),
            upper: upper.to_vec(),
        })
    }

    /// Lower corner
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Upper corner
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        1 << self.lower.len()
    }

    /// Coordinates of a vertex
    pub fn vertex(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.vertex_count() {
            return None;
        }
        let n = self.lower.len();
        Some(
            bits(index, n)
                .iter()
                .enumerate()
                .map(|(i, b)| if *b == 1 { self.upper[i] } else { self.lower[i] })
                .collect(),
        )
    }

    /// The entities, grouped by their 0/1 word, with words in lexicographic order
    pub fn tensor_entities(&self) -> Vec<(Vec<usize>, Vec<HypercubeEntity>)> {
        let n = self.lower.len();
        (0..1usize << n)
            .map(|k| {
                let key = bits(k, n);
                let fixed = key.iter().filter(|t| **t == 0).count();
                let entities = (0..1usize << fixed)
                    .map(|v| {
                        let mut values = bits(v, fixed).into_iter();
                        HypercubeEntity {
                            coords: key
                                .iter()
                                .map(|t| if *t == 1 { None } else { values.next() })
                                .collect(),
                        }
                    })
                    .collect();
                (key, entities)
            })
            .collect()
    }

    /// The entities of a given topological dimension, in the order of their index
    pub fn entities(&self, dim: usize) -> Vec<HypercubeEntity> {
        self.tensor_entities()
            .into_iter()
            .filter(|(key, _)| key.iter().sum::<usize>() == dim)
            .flat_map(|(_, e)| e)
            .collect()
    }

    /// An entity
    pub fn entity(&self, dim: usize, index: usize) -> Option<HypercubeEntity> {
        self.entities(dim).into_iter().nth(index)
    }

    /// The number of entities of each topological dimension
    pub fn entity_counts(&self) -> Vec<usize> {
        (0..=self.lower.len())
            .map(|d| self.entities(d).len())
            .collect()
    }

    /// Indices of the entities of dimension `sub_dim` in the closure of an entity
    pub fn sub_entities(&self, dim: usize, index: usize, sub_dim: usize) -> Option<Vec<usize>> {
        let entity = self.entity(dim, index)?;
        Some(
            self.entities(sub_dim)
                .iter()
                .enumerate()
                .filter(|(_, e)| entity.contains(e))
                .map(|(i, _)| i)
                .collect(),
        )
    }

    /// The affine map from the reference coordinates of an entity into cell coordinates
    pub fn transform(&self, entity: &HypercubeEntity) -> Result<AffineMap> {
        let n = self.lower.len();
        let origin = entity
            .coords
            .iter()
            .enumerate()
            .map(|(i, c)| match c {
                Some(1) => self.upper[i],
                _ => self.lower[i],
            })
            .collect();
        let axes = (0..n)
            .filter(|i| entity.coords[*i].is_none())
            .map(|i| {
                let mut axis = vec![0.0; n];
                axis[i] = self.upper[i] - self.lower[i];
                axis
            })
            .collect();
        AffineMap::new(origin, axes)
    }
}

impl ReferenceCell for Hypercube {
    type Dim = usize;

    fn dim(&self) -> usize {
        self.lower.len()
    }

    fn cell_dim(&self) -> usize {
        self.lower.len()
    }

    fn dims(&self) -> Vec<usize> {
        (0..=self.lower.len()).collect()
    }

    fn entity_count(&self, dim: &usize) -> usize {
        if *dim > self.lower.len() {
            0
        } else {
            self.entities(*dim).len()
        }
    }

    fn entity_transform(&self, dim: &usize, index: usize) -> Result<AffineMap> {
        let entity = self.entity(*dim, index).ok_or(Error::InvalidEntity {
            dim: format!("{dim}"),
            index,
        })?;
        self.transform(&entity)
    }

    fn flatten(&self) -> Result<(Hypercube, FlatteningMap<usize>)> {
        let mut map = FlatteningMap::new();
        for (d, count) in self.entity_counts().iter().enumerate() {
            for i in 0..*count {
                map.insert(d, i, d, i);
            }
        }
        Ok((self.clone(), map))
    }
}
