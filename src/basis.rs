//! Basis term generators
//!
//! Each generator is a pure function of the degree and the blending factors of the flattened cell,
//! and returns the terms of one family in a fixed order. The order of the terms fixes the dof
//! numbering of the element.

mod axis;
mod edge;
mod face;
mod interior;

pub use axis::{Axis, Blending};
pub use edge::{e_lambda_2d, e_lambda_3d, e_lambda_full_2d, e_lambda_tilde_2d};
pub use face::{
    f_lambda_2d, f_lambda_2d_pieces, f_lambda_2d_tilde, f_lambda_2d_trim, f_lambda_3d,
    f_lambda_3d_pieces, f_lambda_3d_tilde, f_lambda_3d_trim, face_splits,
};
pub use interior::{i_lambda_3d, i_lambda_3d_full, i_lambda_tilde_3d, interior_triples};

use crate::polynomial::{Polynomial, VectorPolynomial};

fn vector2(a: Polynomial, b: Polynomial) -> VectorPolynomial {
    VectorPolynomial::new(vec![a, b])
}

fn vector3(a: Polynomial, b: Polynomial, c: Polynomial) -> VectorPolynomial {
    VectorPolynomial::new(vec![a, b, c])
}

/// The edge, face and interior terms, in that order
///
/// On a quadrilateral these are the edge terms followed by the face terms. On a hexahedron the
/// interior terms follow.
pub fn terms(degree: usize, blending: &Blending) -> Vec<VectorPolynomial> {
    let (x, y) = (blending.x(), blending.y());
    match blending.z() {
        None => e_lambda_2d(degree, x, y)
            .chain(f_lambda_2d(degree, x, y))
            .collect(),
        Some(z) => e_lambda_3d(degree, x, y, z)
            .chain(f_lambda_3d(degree, x, y, z))
            .chain(i_lambda_3d_full(degree, x, y, z))
            .collect(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dofs::allocate;
    use crate::reference_cell::Hypercube;
    use num::{BigRational, Zero};
    use std::collections::BTreeMap;

    /// Rank of a set of vector polynomials, by Gaussian elimination on their coefficients
    fn rank(terms: &[VectorPolynomial]) -> usize {
        let mut columns = BTreeMap::new();
        for t in terms {
            for (i, c) in t.components().iter().enumerate() {
                for (m, _) in c.terms() {
                    let n = columns.len();
                    columns.entry((i, *m)).or_insert(n);
                }
            }
        }
        let mut rows = terms
            .iter()
            .map(|t| {
                let mut row = vec![BigRational::zero(); columns.len()];
                for (i, c) in t.components().iter().enumerate() {
                    for (m, v) in c.terms() {
                        row[columns[&(i, *m)]] = v.clone();
                    }
                }
                row
            })
            .collect::<Vec<_>>();

        let mut rank = 0;
        for col in 0..columns.len() {
            let Some(pivot) = (rank..rows.len()).find(|r| !rows[*r][col].is_zero()) else {
                continue;
            };
            rows.swap(rank, pivot);
            for r in 0..rows.len() {
                if r != rank && !rows[r][col].is_zero() {
                    let factor = &rows[r][col] / &rows[rank][col];
                    let pivot_row = rows[rank].clone();
                    for (a, b) in rows[r].iter_mut().zip(&pivot_row) {
                        *a -= &factor * b;
                    }
                }
            }
            rank += 1;
        }
        rank
    }

    #[test]
    fn test_term_count_matches_dofs() {
        for dim in [2, 3] {
            let cell = Hypercube::unit(dim);
            let max_degree = if dim == 2 { 6 } else { 3 };
            for degree in 1..=max_degree {
                let b = Blending::new(&cell, degree).unwrap();
                assert_eq!(
                    terms(degree, &b).len(),
                    allocate(degree, &cell).unwrap().dof_count()
                );
            }
        }
    }

    #[test]
    fn test_hexahedron_high_degree_counts() {
        let cell = Hypercube::unit(3);
        let b = Blending::new(&cell, 4).unwrap();
        assert_eq!(terms(4, &b).len(), 117);
        assert_eq!(allocate(4, &cell).unwrap().dof_count(), 102);
    }

    #[test]
    fn test_linear_independence() {
        let square = Hypercube::from_bounds(&[-1.0, -1.0], &[1.0, 1.0]).unwrap();
        for degree in 1..5 {
            let t = terms(degree, &Blending::new(&square, degree).unwrap());
            assert_eq!(rank(&t), t.len());
        }
        let cube = Hypercube::unit(3);
        let t = terms(1, &Blending::new(&cube, 1).unwrap());
        assert_eq!(rank(&t), 12);
    }
}
