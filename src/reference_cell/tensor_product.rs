//! Tensor products of intervals
use super::{AffineMap, FlatteningMap, Hypercube};
use crate::error::{Error, Result};
use crate::traits::ReferenceCell;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A tensor product of unit intervals
///
/// Entities are identified by a 0/1 word with one entry per factor: 1 if the entity extends along
/// that factor, 0 if it is a vertex of that factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TensorProductCell {
    factors: usize,
}

impl TensorProductCell {
    /// A product of `factors` unit intervals
    pub fn new(factors: usize) -> Self {
        Self { factors }
    }

    /// The unit square, as a product of two intervals
    pub fn quadrilateral() -> Self {
        Self::new(2)
    }

    /// The unit cube, as a product of three intervals
    pub fn hexahedron() -> Self {
        Self::new(3)
    }

    fn is_key(&self, dim: &[usize]) -> bool {
        dim.len() == self.factors && dim.iter().all(|t| *t <= 1)
    }
}

impl ReferenceCell for TensorProductCell {
    type Dim = Vec<usize>;

    fn dim(&self) -> usize {
        self.factors
    }

    fn cell_dim(&self) -> Vec<usize> {
        vec![1; self.factors]
    }

    fn dims(&self) -> Vec<Vec<usize>> {
        Hypercube::unit(self.factors)
            .tensor_entities()
            .into_iter()
            .map(|(key, _)| key)
            .collect()
    }

    fn entity_count(&self, dim: &Vec<usize>) -> usize {
        if self.is_key(dim) {
            1 << dim.iter().filter(|t| **t == 0).count()
        } else {
            0
        }
    }

    fn entity_transform(&self, dim: &Vec<usize>, index: usize) -> Result<AffineMap> {
        let cube = Hypercube::unit(self.factors);
        let entity = cube
            .tensor_entities()
            .into_iter()
            .find(|(key, _)| key == dim)
            .and_then(|(_, entities)| entities.into_iter().nth(index))
            .ok_or_else(|| Error::InvalidEntity {
                dim: format!("{dim:?}"),
                index,
            })?;
        cube.transform(&entity)
    }

    fn flatten(&self) -> Result<(Hypercube, FlatteningMap<Vec<usize>>)> {
        let cube = Hypercube::unit(self.factors);
        let mut map = FlatteningMap::new();
        let mut counters = vec![0; self.factors + 1];
        for (key, entities) in cube.tensor_entities() {
            let flat_dim = key.iter().sum::<usize>();
            for i in 0..entities.len() {
                map.insert(flat_dim, counters[flat_dim], key.clone(), i);
                counters[flat_dim] += 1;
            }
        }
        Ok((cube, map))
    }
}
