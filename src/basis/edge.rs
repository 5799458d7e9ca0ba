//! Edge terms
use super::{vector2, vector3, Axis};
use crate::polynomial::{product, Polynomial, VectorPolynomial};
use num::{BigInt, BigRational};

/// Edge terms on a quadrilateral: `4 * degree` terms
///
/// Four blocks, each running over `j < degree`: `(0, -P_j(y) dx_0)`, `(0, -P_j(y) dx_1)`,
/// `(-P_j(x) dy_0, 0)` and `(-P_j(x) dy_1, 0)`.
pub fn e_lambda_2d<'a>(
    degree: usize,
    x: &'a Axis,
    y: &'a Axis,
) -> impl Iterator<Item = VectorPolynomial> + Clone + 'a {
    let along_y = move |k: usize| {
        (0..degree).map(move |j| vector2(Polynomial::zero(), -(y.leg(j) * x.d(k))))
    };
    let along_x = move |k: usize| {
        (0..degree).map(move |j| vector2(-(x.leg(j) * y.d(k)), Polynomial::zero()))
    };
    along_y(0)
        .chain(along_y(1))
        .chain(along_x(0))
        .chain(along_x(1))
}

/// The four closing edge terms on a quadrilateral
pub fn e_lambda_tilde_2d<'a>(
    degree: usize,
    x: &'a Axis,
    y: &'a Axis,
) -> impl Iterator<Item = VectorPolynomial> + Clone + 'a {
    let scale = BigRational::new(BigInt::from(1), BigInt::from(degree + 1));
    let (top, low) = (degree, degree.saturating_sub(1));
    let xx = (x.leg(low) * x.both()).scale(&scale);
    let yy = (y.leg(low) * y.both()).scale(&scale);
    [
        vector2(-(x.leg(top) * y.d(0)), -&xx),
        vector2(-(x.leg(top) * y.d(1)), xx),
        vector2(-&yy, -(y.leg(top) * x.d(0))),
        vector2(yy, -(y.leg(top) * x.d(1))),
    ]
    .into_iter()
}

/// Edge terms on a quadrilateral followed by the four closing terms
pub fn e_lambda_full_2d<'a>(
    degree: usize,
    x: &'a Axis,
    y: &'a Axis,
) -> impl Iterator<Item = VectorPolynomial> + Clone + 'a {
    e_lambda_2d(degree, x, y).chain(e_lambda_tilde_2d(degree, x, y))
}

/// The twelve edge terms of a hexahedron at one Legendre degree
fn e_lambda_3d_piece(n: usize, x: &Axis, y: &Axis, z: &Axis) -> [VectorPolynomial; 12] {
    let zero = Polynomial::zero;
    [
        vector3(zero(), zero(), product([z.leg(n), x.d(0), y.d(1)])),
        vector3(zero(), zero(), product([z.leg(n), x.d(1), y.d(1)])),
        vector3(zero(), zero(), product([z.leg(n), x.d(1), y.d(0)])),
        vector3(zero(), zero(), product([z.leg(n), x.d(0), y.d(0)])),
        vector3(zero(), product([y.leg(n), x.d(0), z.d(1)]), zero()),
        vector3(zero(), product([y.leg(n), x.d(1), z.d(1)]), zero()),
        vector3(zero(), product([y.leg(n), x.d(1), z.d(0)]), zero()),
        vector3(zero(), product([y.leg(n), x.d(0), z.d(0)]), zero()),
        vector3(product([x.leg(n), y.d(0), z.d(0)]), zero(), zero()),
        vector3(product([x.leg(n), y.d(1), z.d(0)]), zero(), zero()),
        vector3(product([x.leg(n), y.d(1), z.d(1)]), zero(), zero()),
        vector3(product([x.leg(n), y.d(0), z.d(1)]), zero(), zero()),
    ]
}

/// Edge terms on a hexahedron: twelve terms for each Legendre degree below `degree`
pub fn e_lambda_3d<'a>(
    degree: usize,
    x: &'a Axis,
    y: &'a Axis,
    z: &'a Axis,
) -> impl Iterator<Item = VectorPolynomial> + Clone + 'a {
    (0..degree).flat_map(move |n| e_lambda_3d_piece(n, x, y, z))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::basis::Blending;
    use crate::reference_cell::Hypercube;
    use approx::assert_relative_eq;

    fn values(term: &VectorPolynomial, point: &[f64]) -> Vec<f64> {
        term.components()
            .iter()
            .map(|c| c.evaluate_f64(point).unwrap())
            .collect()
    }

    #[test]
    fn test_e_lambda_2d_degree_1() {
        let cell = Hypercube::from_bounds(&[-1.0, -1.0], &[1.0, 1.0]).unwrap();
        let b = Blending::new(&cell, 1).unwrap();
        let terms = e_lambda_2d(1, b.x(), b.y()).collect::<Vec<_>>();
        assert_eq!(terms.len(), 4);
        let expected = [[0.0, -0.5], [0.0, -0.5], [-0.5, 0.0], [-0.5, 0.0]];
        for (t, e) in terms.iter().zip(&expected) {
            let v = values(t, &[0.0, 0.0]);
            assert_relative_eq!(v[0], e[0]);
            assert_relative_eq!(v[1], e[1]);
        }
        // The first term vanishes on the edge x = 1
        assert_relative_eq!(values(&terms[0], &[1.0, 0.3])[1], 0.0);
    }

    #[test]
    fn test_e_lambda_2d_order() {
        let b = Blending::new(&Hypercube::unit(2), 3).unwrap();
        let terms = e_lambda_2d(3, b.x(), b.y()).collect::<Vec<_>>();
        assert_eq!(terms.len(), 12);
        for t in &terms[..6] {
            assert!(t.components()[0].is_zero());
        }
        for t in &terms[6..] {
            assert!(t.components()[1].is_zero());
        }
        // Legendre degree increases within each block
        assert_eq!(terms[2].components()[1].degree(), 3);
        assert_eq!(terms[3].components()[1].degree(), 1);
    }

    #[test]
    fn test_e_lambda_tilde_2d() {
        let b = Blending::new(&Hypercube::unit(2), 2).unwrap();
        let tilde = e_lambda_tilde_2d(2, b.x(), b.y()).collect::<Vec<_>>();
        assert_eq!(tilde.len(), 4);
        assert!(tilde.iter().all(|t| !t.components()[0].is_zero()));
        assert_eq!(tilde[0].components()[1], -&tilde[1].components()[1]);
        assert_eq!(tilde[2].components()[0], -&tilde[3].components()[0]);

        let full = e_lambda_full_2d(2, b.x(), b.y());
        assert_eq!(full.clone().count(), 12);
        assert_eq!(full.skip(8).collect::<Vec<_>>(), tilde);
    }

    #[test]
    fn test_e_lambda_3d() {
        let b = Blending::new(&Hypercube::unit(3), 2).unwrap();
        let z = b.z().unwrap();
        let terms = e_lambda_3d(2, b.x(), b.y(), z);
        assert_eq!(terms.clone().count(), 24);
        for (i, t) in terms.enumerate() {
            assert_eq!(t.len(), 3);
            let axis = 2 - (i % 12) / 4;
            for (c, p) in t.components().iter().enumerate() {
                assert_eq!(p.is_zero(), c != axis);
            }
        }
    }

    #[test]
    fn test_e_lambda_3d_vanishes_on_other_edges() {
        // The first term is supported on the edge x = 0, y = 1
        let b = Blending::new(&Hypercube::unit(3), 1).unwrap();
        let first = e_lambda_3d(1, b.x(), b.y(), b.z().unwrap())
            .next()
            .unwrap();
        assert_relative_eq!(values(&first, &[0.0, 1.0, 0.5])[2], 1.0);
        assert_relative_eq!(values(&first, &[1.0, 1.0, 0.5])[2], 0.0);
        assert_relative_eq!(values(&first, &[0.0, 0.0, 0.5])[2], 0.0);
    }
}
