//! Dof counts per entity
use crate::error::{Error, Result};
use crate::reference_cell::Hypercube;
use crate::types::EntityDofs;

/// The triangular number `n(n + 1)/2`
pub fn triangular_number(n: usize) -> usize {
    n * (n + 1) / 2
}

/// The number of monomials of total degree `i` in three variables
pub fn monomial_count(i: usize) -> usize {
    (i + 2) * (i + 1) / 2
}

/// Dofs on each edge
pub fn edge_dof_count(degree: usize) -> usize {
    degree
}

/// Dofs on each face of a cell of dimension `dim`
pub fn face_dof_count(degree: usize, dim: usize) -> usize {
    match (dim, degree) {
        (_, 0 | 1) => 0,
        (3, d) if d >= 4 => 3 * d - 4,
        (_, d) => 2 * triangular_number(d - 2) + d,
    }
}

/// Dofs in the interior of a hexahedron
pub fn interior_dof_count(degree: usize) -> usize {
    match degree {
        0..=3 => 0,
        4 => 6,
        5 => 11,
        d => 6 + 3 * (d - 4) + (0..=d - 5).map(|i| 3 * monomial_count(i)).sum::<usize>(),
    }
}

/// Allocate dofs to the edges, faces and interior of a flattened cell
///
/// Dofs are numbered contiguously, visiting edges, then faces, then the interior, each in
/// ascending entity index. Entities that are not given any dofs have an empty list.
pub fn allocate(degree: usize, cell: &Hypercube) -> Result<EntityDofs<usize>> {
    if degree < 1 {
        return Err(Error::InvalidDegree { degree });
    }
    let dim = cell.lower().len();
    if dim != 2 && dim != 3 {
        return Err(Error::InvalidDimension { dim });
    }

    let counts = cell.entity_counts();
    let mut dofs = EntityDofs::with_entity_counts(counts.iter().copied().enumerate());
    let mut next = 0;
    let mut assign = |d: usize, count: usize| {
        for e in 0..counts[d] {
            dofs.set(&d, e, (next..next + count).collect());
            next += count;
        }
    };

    assign(1, edge_dof_count(degree));
    assign(2, face_dof_count(degree, dim));
    if dim == 3 {
        assign(3, interior_dof_count(degree));
    }
    Ok(dofs)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(triangular_number(0), 0);
        assert_eq!(triangular_number(3), 6);
        assert_eq!(monomial_count(0), 1);
        assert_eq!(monomial_count(2), 6);

        assert_eq!(face_dof_count(1, 2), 0);
        assert_eq!(face_dof_count(2, 2), 2);
        assert_eq!(face_dof_count(3, 2), 5);
        assert_eq!(face_dof_count(4, 2), 10);
        assert_eq!(face_dof_count(3, 3), 5);
        assert_eq!(face_dof_count(4, 3), 8);
        assert_eq!(face_dof_count(5, 3), 11);

        assert_eq!(interior_dof_count(3), 0);
        assert_eq!(interior_dof_count(4), 6);
        assert_eq!(interior_dof_count(5), 11);
        assert_eq!(interior_dof_count(6), 6 + 6 + 3 + 9);
    }

    #[test]
    fn test_errors() {
        let square = Hypercube::unit(2);
        assert!(matches!(
            allocate(0, &square),
            Err(Error::InvalidDegree { degree: 0 })
        ));
        assert!(matches!(
            allocate(1, &Hypercube::unit(1)),
            Err(Error::InvalidDimension { dim: 1 })
        ));
        assert!(matches!(
            allocate(1, &Hypercube::unit(4)),
            Err(Error::InvalidDimension { dim: 4 })
        ));
    }

    macro_rules! test_partition {
        ($dim:literal, $degree:literal) => {
            paste::item! {
                #[test]
                fn [<test_partition_ $dim d_degree $degree>]() {
                    let cell = Hypercube::unit($dim);
                    let dofs = allocate($degree, &cell).unwrap();
                    let mut all = dofs.iter().flat_map(|(_, _, d)| d.to_vec()).collect::<Vec<_>>();
                    let n = all.len();
                    all.sort();
                    all.dedup();
                    assert_eq!(all.len(), n);
                    assert_eq!(all, (0..n).collect::<Vec<_>>());

                    for v in 0..cell.entity_counts()[0] {
                        assert!(dofs.get(&0, v).unwrap().is_empty());
                    }
                    for e in 0..cell.entity_counts()[1] {
                        assert_eq!(dofs.get(&1, e).unwrap().len(), $degree);
                    }
                }
            }
        };
    }

    test_partition!(2, 1);
    test_partition!(2, 2);
    test_partition!(2, 3);
    test_partition!(2, 6);
    test_partition!(3, 1);
    test_partition!(3, 2);
    test_partition!(3, 4);
    test_partition!(3, 5);
    test_partition!(3, 7);

    #[test]
    fn test_square_degree_1() {
        let dofs = allocate(1, &Hypercube::unit(2)).unwrap();
        assert_eq!(dofs.dof_count(), 4);
        assert_eq!(dofs.get(&1, 2), Some(&[2][..]));
        assert!(dofs.get(&2, 0).unwrap().is_empty());
    }

    #[test]
    fn test_cube_interior() {
        let cube = Hypercube::unit(3);
        assert_eq!(allocate(4, &cube).unwrap().get(&3, 0).unwrap().len(), 6);
        assert_eq!(allocate(5, &cube).unwrap().get(&3, 0).unwrap().len(), 11);
        assert!(allocate(3, &cube).unwrap().get(&3, 0).unwrap().is_empty());
    }
}
