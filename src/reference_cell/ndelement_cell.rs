//! Flattening of ndelement's reference cells
use super::{AffineMap, FlatteningMap, Hypercube};
use crate::error::{Error, Result};
use crate::traits::ReferenceCell;
use itertools::Itertools;
use ndelement::{reference_cell, types::ReferenceCellType};

/// Dimension of the hypercube that a cell is, or an error if it is not a hypercube
fn hypercube_dim(cell: ReferenceCellType) -> Result<usize> {
    match cell {
        ReferenceCellType::Point => Ok(0),
        ReferenceCellType::Interval => Ok(1),
        ReferenceCellType::Quadrilateral => Ok(2),
        ReferenceCellType::Hexahedron => Ok(3),
        _ => Err(Error::UnsupportedCell {
            cell: format!("{cell:?}"),
        }),
    }
}

/// Position of an ndelement vertex on the unit hypercube
///
/// ndelement numbers the vertices of a hypercube with the first axis varying fastest.
fn vertex_bits(vertex: usize, dim: usize) -> Vec<usize> {
    (0..dim).map(|k| (vertex >> k) & 1).collect()
}

/// The index of the same vertex in the numbering used by [Hypercube]
fn flat_vertex(vertex: usize, dim: usize) -> usize {
    vertex_bits(vertex, dim)
        .iter()
        .enumerate()
        .map(|(k, b)| b << (dim - 1 - k))
        .sum()
}

impl ReferenceCell for ReferenceCellType {
    type Dim = usize;

    fn dim(&self) -> usize {
        reference_cell::dim(*self)
    }

    fn cell_dim(&self) -> usize {
        reference_cell::dim(*self)
    }

    fn dims(&self) -> Vec<usize> {
        (0..=reference_cell::dim(*self)).collect()
    }

    fn entity_count(&self, dim: &usize) -> usize {
        reference_cell::entity_counts(*self)
            .get(*dim)
            .copied()
            .unwrap_or(0)
    }

    fn entity_transform(&self, dim: &usize, index: usize) -> Result<AffineMap> {
        let tdim = hypercube_dim(*self)?;
        let conn = reference_cell::connectivity(*self);
        let vertices = conn
            .get(*dim)
            .and_then(|e| e.get(index))
            .map(|e| &e[0])
            .ok_or_else(|| Error::InvalidEntity {
                dim: format!("{dim}"),
                index,
            })?;
        let point = |v: usize| {
            vertex_bits(v, tdim)
                .into_iter()
                .map(|b| b as f64)
                .collect::<Vec<_>>()
        };
        let origin = point(vertices[0]);
        let axes = (0..*dim)
            .map(|k| {
                point(vertices[1 << k])
                    .iter()
                    .zip(&origin)
                    .map(|(a, b)| a - b)
                    .collect()
            })
            .collect();
        AffineMap::new(origin, axes)
    }

    fn flatten(&self) -> Result<(Hypercube, FlatteningMap<usize>)> {
        let tdim = hypercube_dim(*self)?;
        let cube = Hypercube::unit(tdim);
        let conn = reference_cell::connectivity(*self);
        let mut map = FlatteningMap::new();
        for (d, entities) in conn.iter().enumerate().take(tdim + 1) {
            let flat_entities = cube.entities(d);
            for (i, e) in entities.iter().enumerate() {
                let vertices = e[0]
                    .iter()
                    .map(|v| flat_vertex(*v, tdim))
                    .sorted()
                    .collect::<Vec<_>>();
                if let Some(flat_index) = flat_entities
                    .iter()
                    .position(|fe| fe.vertices() == vertices)
                {
                    map.insert(d, flat_index, d, i);
                }
            }
        }
        Ok((cube, map))
    }
}
