//! Reference cells
//!
//! The basis is constructed on a [Hypercube]. Other cells are supported by flattening them to a
//! hypercube and keeping a [FlatteningMap] between the two topologies.

mod hypercube;
mod ndelement_cell;
mod tensor_product;

pub use hypercube::{Hypercube, HypercubeEntity};
pub use tensor_product::TensorProductCell;

use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// An affine map `x -> origin + sum_i x_i axes[i]`
#[derive(Debug, Clone, PartialEq)]
pub struct AffineMap {
    origin: Vec<f64>,
    axes: Vec<Vec<f64>>,
}

impl AffineMap {
    /// Create an affine map
    ///
    /// Every axis must have the same length as the origin.
    pub fn new(origin: Vec<f64>, axes: Vec<Vec<f64>>) -> Result<Self> {
        for a in &axes {
            if a.len() != origin.len() {
                return Err(Error::PointDimensionMismatch {
                    expected: origin.len(),
                    got: a.len(),
                });
            }
        }
        Ok(Self { origin, axes })
    }

    /// The identity map in `dim` dimensions
    pub fn identity(dim: usize) -> Self {
        Self {
            origin: vec![0.0; dim],
            axes: (0..dim)
                .map(|i| (0..dim).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
                .collect(),
        }
    }

    /// Dimension of the domain
    pub fn domain_dim(&self) -> usize {
        self.axes.len()
    }

    /// Dimension of the range
    pub fn range_dim(&self) -> usize {
        self.origin.len()
    }

    /// Apply the map to a point
    pub fn apply(&self, point: &[f64]) -> Result<Vec<f64>> {
        if point.len() != self.domain_dim() {
            return Err(Error::PointDimensionMismatch {
                expected: self.domain_dim(),
                got: point.len(),
            });
        }
        let mut image = self.origin.clone();
        for (p, axis) in point.iter().zip(&self.axes) {
            for (i, a) in image.iter_mut().zip(axis) {
                *i += p * a;
            }
        }
        Ok(image)
    }
}

/// Correspondence between the entities of a flattened hypercube and the entities of a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatteningMap<D: Ord> {
    to_cell: BTreeMap<(usize, usize), (D, usize)>,
}

impl<D: Ord> Default for FlatteningMap<D> {
    fn default() -> Self {
        Self {
            to_cell: BTreeMap::new(),
        }
    }
}

impl<D: Ord + Clone> FlatteningMap<D> {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that flat entity `(flat_dim, flat_index)` is the cell entity `(dim, index)`
    pub fn insert(&mut self, flat_dim: usize, flat_index: usize, dim: D, index: usize) {
        self.to_cell.insert((flat_dim, flat_index), (dim, index));
    }

    /// The cell entity that a flat entity corresponds to
    pub fn unflatten(&self, flat_dim: usize, flat_index: usize) -> Option<(&D, usize)> {
        self.to_cell
            .get(&(flat_dim, flat_index))
            .map(|(d, i)| (d, *i))
    }

    /// The flat entity that a cell entity corresponds to
    pub fn flatten(&self, dim: &D, index: usize) -> Option<(usize, usize)> {
        self.to_cell
            .iter()
            .find(|(_, (d, i))| d == dim && *i == index)
            .map(|(flat, _)| *flat)
    }

    /// Number of entities in the map
    pub fn len(&self) -> usize {
        self.to_cell.len()
    }

    /// Is the map empty?
    pub fn is_empty(&self) -> bool {
        self.to_cell.is_empty()
    }

    /// Iterate over `((flat dim, flat index), (dim, index))`
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), (&D, usize))> {
        self.to_cell.iter().map(|(f, (d, i))| (*f, (d, *i)))
    }
}
