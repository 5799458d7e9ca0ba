//! Map from topological entities to degrees of freedom
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Degrees of freedom associated with each entity of a cell
///
/// `D` identifies a topological dimension: `usize` for flat cells, a tuple-like key for tensor
/// product cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityDofs<D: Ord> {
    dofs: BTreeMap<D, Vec<Vec<usize>>>,
}

impl<D: Ord + Clone> EntityDofs<D> {
    /// Create with an empty dof list for every entity
    pub fn with_entity_counts(counts: impl IntoIterator<Item = (D, usize)>) -> Self {
        Self {
            dofs: counts
                .into_iter()
                .map(|(dim, n)| (dim, vec![vec![]; n]))
                .collect(),
        }
    }

    /// Set the dofs of an entity, growing the entity list if needed
    pub fn set(&mut self, dim: &D, index: usize, dofs: Vec<usize>) {
        let entities = self.dofs.entry(dim.clone()).or_default();
        if entities.len() <= index {
            entities.resize(index + 1, vec![]);
        }
        entities[index] = dofs;
    }

    /// The dofs of an entity
    pub fn get(&self, dim: &D, index: usize) -> Option<&[usize]> {
        self.dofs
            .get(dim)
            .and_then(|e| e.get(index))
            .map(|d| d.as_slice())
    }

    /// The dofs of every entity with the given dimension
    pub fn entities(&self, dim: &D) -> Option<&[Vec<usize>]> {
        self.dofs.get(dim).map(|e| e.as_slice())
    }

    /// Dimension keys, in ascending order
    pub fn dims(&self) -> impl Iterator<Item = &D> {
        self.dofs.keys()
    }

    /// Iterate over `(dimension, entity index, dofs)`
    pub fn iter(&self) -> impl Iterator<Item = (&D, usize, &[usize])> {
        self.dofs.iter().flat_map(|(dim, entities)| {
            entities
                .iter()
                .enumerate()
                .map(move |(i, dofs)| (dim, i, dofs.as_slice()))
        })
    }

    /// Total number of dofs over all entities
    pub fn dof_count(&self) -> usize {
        self.iter().map(|(_, _, dofs)| dofs.len()).sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut dofs = EntityDofs::with_entity_counts([(0, 4), (1, 4), (2, 1)]);
        assert_eq!(dofs.get(&1, 2), Some(&[][..]));
        dofs.set(&1, 2, vec![3, 4]);
        assert_eq!(dofs.get(&1, 2), Some(&[3, 4][..]));
        assert_eq!(dofs.get(&3, 0), None);
        assert_eq!(dofs.get(&2, 1), None);
        assert_eq!(dofs.dof_count(), 2);

        dofs.set(&3, 1, vec![5]);
        assert_eq!(dofs.entities(&3).unwrap().len(), 2);
        assert_eq!(dofs.dims().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }
}
