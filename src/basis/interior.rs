//! Interior terms of a hexahedron
use super::{vector3, Axis};
use crate::polynomial::{product, Polynomial, VectorPolynomial};

/// Legendre degree triples `(a, b, c)` with `a + b + c = degree - 4`
///
/// The order is that of three nested loops over `a`, `b` and `c` with bounds `degree - 3`,
/// `degree - 3 - a` and `degree - 3 - a - b`. It fixes the dof numbering.
pub fn interior_triples(degree: usize) -> Vec<(usize, usize, usize)> {
    if degree < 4 {
        return vec![];
    }
    let mut triples = vec![];
    for a in 0..degree - 3 {
        for b in 0..degree - 3 - a {
            for c in 0..degree - 3 - a - b {
                if a + b + c == degree - 4 {
                    triples.push((a, b, c));
                }
            }
        }
    }
    triples
}

/// Interior terms: three for each triple, scaled by the full blending pairs of the other two axes
pub fn i_lambda_3d<'a>(
    degree: usize,
    x: &'a Axis,
    y: &'a Axis,
    z: &'a Axis,
) -> impl Iterator<Item = VectorPolynomial> + Clone + 'a {
    interior_triples(degree).into_iter().flat_map(move |(a, b, c)| {
        let l = product([x.leg(a), y.leg(b), z.leg(c)]);
        let zero = Polynomial::zero;
        [
            vector3(product([&l, y.both(), z.both()]), zero(), zero()),
            vector3(zero(), product([&l, x.both(), z.both()]), zero()),
            vector3(zero(), zero(), product([&l, x.both(), y.both()])),
        ]
    })
}

/// The closing interior terms
///
/// Six terms using `P_{degree-4}`, then for each `j` in `[1, degree - 3)` two coupled terms, or
/// three above degree 5. There are none below degree 4.
pub fn i_lambda_tilde_3d(degree: usize, x: &Axis, y: &Axis, z: &Axis) -> Vec<VectorPolynomial> {
    if degree < 4 {
        return vec![];
    }
    let zero = Polynomial::zero;
    let m = degree - 4;
    let yz = y.both() * z.both();
    let xz = x.both() * z.both();
    let xy = x.both() * y.both();
    let mut terms = vec![
        vector3(y.leg(m) * &yz, zero(), zero()),
        vector3(z.leg(m) * &yz, zero(), zero()),
        vector3(zero(), x.leg(m) * &xz, zero()),
        vector3(zero(), z.leg(m) * &xz, zero()),
        vector3(zero(), zero(), x.leg(m) * &xy),
        vector3(zero(), zero(), y.leg(m) * &xy),
    ];
    for j in 1..degree - 3 {
        terms.push(vector3(
            product([x.leg(j), y.leg(degree - j - 4), &yz]),
            -product([x.leg(j - 1), y.leg(degree - j - 3), &xz]),
            zero(),
        ));
        terms.push(vector3(
            product([x.leg(j), z.leg(degree - j - 4), &yz]),
            zero(),
            -product([x.leg(j - 1), z.leg(degree - j - 3), &xy]),
        ));
        if degree > 5 {
            terms.push(vector3(
                zero(),
                product([y.leg(j), z.leg(degree - j - 4), &xz]),
                -product([y.leg(j - 1), z.leg(degree - j - 3), &xy]),
            ));
        }
    }
    terms
}

/// All interior terms
pub fn i_lambda_3d_full<'a>(
    degree: usize,
    x: &'a Axis,
    y: &'a Axis,
    z: &'a Axis,
) -> impl Iterator<Item = VectorPolynomial> + Clone + 'a {
    i_lambda_3d(degree, x, y, z).chain(i_lambda_tilde_3d(degree, x, y, z))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::basis::Blending;
    use crate::dofs::monomial_count;
    use crate::reference_cell::Hypercube;
    use num::{BigInt, BigRational};

    #[test]
    fn test_triples() {
        assert!(interior_triples(3).is_empty());
        assert_eq!(interior_triples(4), vec![(0, 0, 0)]);
        assert_eq!(
            interior_triples(6),
            vec![
                (0, 0, 2),
                (0, 1, 1),
                (0, 2, 0),
                (1, 0, 1),
                (1, 1, 0),
                (2, 0, 0)
            ]
        );
        for degree in 4..9 {
            assert_eq!(interior_triples(degree).len(), monomial_count(degree - 4));
        }
    }

    #[test]
    fn test_counts() {
        let cube = Hypercube::unit(3);
        for (degree, tilde) in [(3, 0), (4, 6), (5, 8), (6, 12), (7, 15)] {
            let b = Blending::new(&cube, degree).unwrap();
            let z = b.z().unwrap();
            assert_eq!(i_lambda_tilde_3d(degree, b.x(), b.y(), z).len(), tilde);
            assert_eq!(
                i_lambda_3d_full(degree, b.x(), b.y(), z).count(),
                3 * interior_triples(degree).len() + tilde
            );
        }
    }

    #[test]
    fn test_tangential_vanishing() {
        // Component i vanishes on every face orthogonal to another axis
        let b = Blending::new(&Hypercube::unit(3), 6).unwrap();
        let terms = i_lambda_3d_full(6, b.x(), b.y(), b.z().unwrap()).collect::<Vec<_>>();
        for t in &terms {
            for (i, c) in t.components().iter().enumerate() {
                for axis in (0..3).filter(|a| *a != i) {
                    for value in [0.0, 1.0] {
                        let mut p = [0.3, 0.6, 0.7];
                        p[axis] = value;
                        assert_eq!(c.evaluate_f64(&p), Some(0.0));
                    }
                }
            }
        }
    }

    #[test]
    fn test_z_component_blending() {
        // The z component of a primary term is scaled by the x and y pairs
        let b = Blending::new(&Hypercube::unit(3), 4).unwrap();
        let terms = i_lambda_3d(4, b.x(), b.y(), b.z().unwrap()).collect::<Vec<_>>();
        assert_eq!(terms.len(), 3);
        let w = &terms[2].components()[2];
        assert_eq!(w.evaluate_f64(&[0.0, 0.5, 0.3]), Some(0.0));
        assert_eq!(w.evaluate_f64(&[0.25, 0.5, 0.3]), Some(0.046875));
    }

    #[test]
    fn test_values() {
        // Every term at (1/5, 2/7, 8/11). Six closing terms coincide with primary terms here.
        let point = [(1, 5), (2, 7), (8, 11)]
            .map(|(n, d)| BigRational::new(BigInt::from(n), BigInt::from(d)));
        let expected = [
            ["-5520/717409", "0", "0"],
            ["0", "-2208/366025", "0"],
            ["0", "0", "-184/29645"],
            ["-3600/456533", "0", "0"],
            ["0", "-288/46585", "0"],
            ["0", "0", "-24/3773"],
            ["-240/26411", "0", "0"],
            ["0", "-96/13475", "0"],
            ["0", "0", "-88/12005"],
            ["-720/65219", "0", "0"],
            ["0", "-288/33275", "0"],
            ["0", "0", "-24/2695"],
            ["432/41503", "0", "0"],
            ["0", "864/105875", "0"],
            ["0", "0", "72/8575"],
            ["48/29645", "0", "0"],
            ["0", "96/75625", "0"],
            ["0", "0", "8/6125"],
            ["-240/26411", "0", "0"],
            ["-5520/717409", "0", "0"],
            ["0", "96/75625", "0"],
            ["0", "-2208/366025", "0"],
            ["0", "0", "8/6125"],
            ["0", "0", "-88/12005"],
            ["432/41503", "96/13475", "0"],
            ["-720/65219", "0", "184/29645"],
            ["0", "-288/46585", "184/29645"],
            ["48/29645", "-864/105875", "0"],
            ["48/29645", "0", "24/2695"],
            ["0", "-96/13475", "24/3773"],
        ];
        let b = Blending::new(&Hypercube::unit(3), 6).unwrap();
        let terms = i_lambda_3d_full(6, b.x(), b.y(), b.z().unwrap()).collect::<Vec<_>>();
        assert_eq!(terms.len(), expected.len());
        for (i, (t, e)) in terms.iter().zip(&expected).enumerate() {
            for (c, value) in e.iter().enumerate() {
                assert_eq!(
                    t.components()[c].evaluate(&point),
                    value.parse::<BigRational>().unwrap(),
                    "term {i}, component {c}"
                );
            }
        }
    }
}
