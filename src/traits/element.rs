//! Finite elements
use crate::error::Result;
use crate::types::{MapType, MultiIndex};
use rlst::DynArray;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// A vector-valued finite element with a modal basis
pub trait FiniteElement {
    /// Key identifying the dimension of a topological entity of the cell
    type Dim: Clone + Debug + Ord;

    /// The polynomial degree
    fn degree(&self) -> usize;

    /// The value shape
    fn value_shape(&self) -> &[usize];

    /// The push forward map
    fn map_type(&self) -> MapType;

    /// The degree of the differential form
    fn form_degree(&self) -> usize;

    /// The number of basis functions
    fn dim(&self) -> usize;

    /// The dofs associated with an entity
    fn entity_dofs(&self, dim: &Self::Dim, index: usize) -> Option<&[usize]>;

    /// The dofs associated with the closure of an entity
    fn entity_closure_dofs(&self, dim: &Self::Dim, index: usize) -> Option<&[usize]>;

    /// Tabulate the basis and its derivatives up to total order `order` at points on an entity
    fn tabulate(
        &self,
        order: usize,
        points: &DynArray<f64, 2>,
        entity: Option<(Self::Dim, usize)>,
    ) -> Result<BTreeMap<MultiIndex, DynArray<f64, 3>>>;
}
