//! Degrees of freedom
//!
//! Allocation of dofs to the entities of a flattened cell, closure dofs, and remapping of both onto
//! the topology of the original cell.

mod allocation;
mod remap;

pub use allocation::{
    allocate, edge_dof_count, face_dof_count, interior_dof_count, monomial_count,
    triangular_number,
};
pub use remap::unflatten_entity_dofs;

use crate::reference_cell::Hypercube;
use crate::types::EntityDofs;
use itertools::Itertools;

/// For each entity, the sorted dofs of every entity in its closure
pub fn closure_dofs(cell: &Hypercube, entity_dofs: &EntityDofs<usize>) -> EntityDofs<usize> {
    let counts = cell.entity_counts();
    let mut closure = EntityDofs::with_entity_counts(counts.iter().copied().enumerate());
    for (dim, count) in counts.iter().enumerate() {
        for index in 0..*count {
            let dofs = (0..=dim)
                .flat_map(|sub_dim| {
                    cell.sub_entities(dim, index, sub_dim)
                        .unwrap_or_default()
                        .into_iter()
                        .map(move |s| (sub_dim, s))
                })
                .flat_map(|(sub_dim, s)| {
                    entity_dofs
                        .get(&sub_dim, s)
                        .unwrap_or_default()
                        .iter()
                        .copied()
                })
                .sorted()
                .collect();
            closure.set(&dim, index, dofs);
        }
    }
    closure
}
