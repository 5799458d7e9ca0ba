//! Reference cell
use crate::error::Result;
use crate::reference_cell::{AffineMap, FlatteningMap, Hypercube};
use std::fmt::Debug;

/// A reference cell that can be flattened to a hypercube
pub trait ReferenceCell: Debug {
    /// Key identifying the dimension of a topological entity
    ///
    /// For flat cells this is the topological dimension. For a tensor product cell it is a word
    /// with one entry per factor.
    type Dim: Clone + Debug + Ord;

    /// The spatial dimension
    fn dim(&self) -> usize;

    /// The dimension key of the cell itself
    fn cell_dim(&self) -> Self::Dim;

    /// All dimension keys, in ascending order
    fn dims(&self) -> Vec<Self::Dim>;

    /// The number of entities with a given dimension key
    fn entity_count(&self, dim: &Self::Dim) -> usize;

    /// The affine map from the reference coordinates of an entity into cell coordinates
    fn entity_transform(&self, dim: &Self::Dim, index: usize) -> Result<AffineMap>;

    /// The flattened hypercube and the correspondence between its entities and the entities of
    /// this cell
    fn flatten(&self) -> Result<(Hypercube, FlatteningMap<Self::Dim>)>;
}
