//! Remapping dofs from a flattened cell onto the original cell
use crate::error::{Error, Result};
use crate::reference_cell::FlatteningMap;
use crate::types::EntityDofs;

/// Re-key entity dofs computed on a flattened cell by the entities of the original cell
///
/// The dof indices themselves are unchanged.
pub fn unflatten_entity_dofs<D: Ord + Clone>(
    flat_dofs: &EntityDofs<usize>,
    map: &FlatteningMap<D>,
) -> Result<EntityDofs<D>> {
    let mut dofs = EntityDofs::with_entity_counts(std::iter::empty());
    for (flat_dim, flat_index, d) in flat_dofs.iter() {
        let (dim, index) =
            map.unflatten(*flat_dim, flat_index)
                .ok_or(Error::IncompleteFlatteningMap {
                    dim: *flat_dim,
                    index: flat_index,
                })?;
        dofs.set(dim, index, d.to_vec());
    }
    Ok(dofs)
}
