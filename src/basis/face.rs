//! Face terms
use super::{vector2, vector3, Axis};
use crate::polynomial::{product, Polynomial, VectorPolynomial};

/// Legendre degree pairs `(j, k)` with `j + k = current_degree - 2`
///
/// Degree 2 is the base case `[(0, 0)]`. Below degree 2 there are no face terms.
pub fn face_splits(current_degree: usize) -> Vec<(usize, usize)> {
    match current_degree {
        0 | 1 => vec![],
        2 => vec![(0, 0)],
        c => (0..=c - 2).map(|j| (j, c - 2 - j)).collect(),
    }
}

/// The face terms of a quadrilateral for one value of `current_degree`
pub fn f_lambda_2d_pieces(current_degree: usize, x: &Axis, y: &Axis) -> Vec<VectorPolynomial> {
    face_splits(current_degree)
        .into_iter()
        .flat_map(|(j, k)| {
            let l = x.leg(j) * y.leg(k);
            [
                vector2(&l * y.both(), Polynomial::zero()),
                vector2(Polynomial::zero(), &l * x.both()),
            ]
        })
        .collect()
}

/// Face terms of a quadrilateral for every `current_degree` in `[2, degree)`
pub fn f_lambda_2d_trim<'a>(
    degree: usize,
    x: &'a Axis,
    y: &'a Axis,
) -> impl Iterator<Item = VectorPolynomial> + Clone + 'a {
    (2..degree).flat_map(move |c| f_lambda_2d_pieces(c, x, y))
}

/// The closing face terms of a quadrilateral: `degree` terms, or none below degree 2
pub fn f_lambda_2d_tilde(degree: usize, x: &Axis, y: &Axis) -> Vec<VectorPolynomial> {
    if degree < 2 {
        return vec![];
    }
    let mut terms = vec![
        vector2(y.leg(degree - 2) * y.both(), Polynomial::zero()),
        vector2(Polynomial::zero(), x.leg(degree - 2) * x.both()),
    ];
    for k in 1..degree - 1 {
        terms.push(vector2(
            product([x.leg(k), y.leg(degree - k - 2), y.both()]),
            -product([x.leg(k - 1), y.leg(degree - k - 1), x.both()]),
        ));
    }
    terms
}

/// All face terms of a quadrilateral
pub fn f_lambda_2d<'a>(
    degree: usize,
    x: &'a Axis,
    y: &'a Axis,
) -> impl Iterator<Item = VectorPolynomial> + Clone + 'a {
    f_lambda_2d_trim(degree, x, y).chain(f_lambda_2d_tilde(degree, x, y))
}

/// The twelve face terms of a hexahedron for one split `(j, k)`
fn f_lambda_3d_block(j: usize, k: usize, x: &Axis, y: &Axis, z: &Axis) -> [VectorPolynomial; 12] {
    let zero = Polynomial::zero;
    [
        vector3(product([x.leg(j), y.leg(k), z.d(0), y.both()]), zero(), zero()),
        vector3(product([x.leg(j), y.leg(k), z.d(1), y.both()]), zero(), zero()),
        vector3(product([x.leg(j), z.leg(k), y.d(0), z.both()]), zero(), zero()),
        vector3(product([x.leg(j), z.leg(k), y.d(1), z.both()]), zero(), zero()),
        vector3(zero(), product([y.leg(j), x.leg(k), z.d(0), x.both()]), zero()),
        vector3(zero(), product([y.leg(j), x.leg(k), z.d(1), x.both()]), zero()),
        vector3(zero(), product([y.leg(j), z.leg(k), x.d(0), z.both()]), zero()),
        vector3(zero(), product([y.leg(j), z.leg(k), x.d(1), z.both()]), zero()),
        vector3(zero(), zero(), product([z.leg(j), y.leg(k), y.d(0), x.both()])),
        vector3(zero(), zero(), product([z.leg(j), y.leg(k), y.d(1), x.both()])),
        vector3(zero(), zero(), product([z.leg(j), x.leg(k), x.d(0), y.both()])),
        vector3(zero(), zero(), product([z.leg(j), x.leg(k), x.d(1), y.both()])),
    ]
}

/// The face terms of a hexahedron for one value of `current_degree`
pub fn f_lambda_3d_pieces(
    current_degree: usize,
    x: &Axis,
    y: &Axis,
    z: &Axis,
) -> Vec<VectorPolynomial> {
    face_splits(current_degree)
        .into_iter()
        .flat_map(|(j, k)| f_lambda_3d_block(j, k, x, y, z))
        .collect()
}

/// Face terms of a hexahedron for every `current_degree` in `[2, degree)`
pub fn f_lambda_3d_trim<'a>(
    degree: usize,
    x: &'a Axis,
    y: &'a Axis,
    z: &'a Axis,
) -> impl Iterator<Item = VectorPolynomial> + Clone + 'a {
    (2..degree).flat_map(move |c| f_lambda_3d_pieces(c, x, y, z))
}

/// The closing face terms of a hexahedron
///
/// Twelve terms using `P_{degree-2}`, then six coupled terms for each `j` in `[1, degree - 1)`.
/// There are none below degree 2.
pub fn f_lambda_3d_tilde(degree: usize, x: &Axis, y: &Axis, z: &Axis) -> Vec<VectorPolynomial> {
    if degree < 2 {
        return vec![];
    }
    let zero = Polynomial::zero;
    let m = degree - 2;
    let mut terms = vec![
        vector3(product([y.leg(m), z.d(0), y.both()]), zero(), zero()),
        vector3(product([y.leg(m), z.d(1), y.both()]), zero(), zero()),
        vector3(product([z.leg(m), y.d(0), z.both()]), zero(), zero()),
        vector3(product([z.leg(m), y.d(1), z.both()]), zero(), zero()),
        vector3(zero(), product([x.leg(m), z.d(0), x.both()]), zero()),
        vector3(zero(), product([x.leg(m), z.d(1), x.both()]), zero()),
        vector3(zero(), product([z.leg(m), x.d(0), z.both()]), zero()),
        vector3(zero(), product([z.leg(m), x.d(1), z.both()]), zero()),
        vector3(zero(), zero(), product([x.leg(m), y.d(0), x.both()])),
        vector3(zero(), zero(), product([x.leg(m), y.d(1), x.both()])),
        vector3(zero(), zero(), product([y.leg(m), x.d(0), y.both()])),
        vector3(zero(), zero(), product([y.leg(m), x.d(1), y.both()])),
    ];
    for j in 1..degree - 1 {
        for k in 0..2 {
            terms.push(vector3(
                product([x.leg(j), y.leg(degree - j - 2), z.d(k), y.both()]),
                -product([x.leg(j - 1), y.leg(degree - j - 1), z.d(k), x.both()]),
                zero(),
            ));
            terms.push(vector3(
                product([x.leg(j), z.leg(degree - j - 2), y.d(k), z.both()]),
                zero(),
                -product([x.leg(j - 1), z.leg(degree - j - 1), y.d(k), x.both()]),
            ));
            terms.push(vector3(
                zero(),
                product([y.leg(j), z.leg(degree - j - 2), x.d(k), z.both()]),
                -product([y.leg(j - 1), z.leg(degree - j - 1), x.d(k), y.both()]),
            ));
        }
    }
    terms
}

/// All face terms of a hexahedron
pub fn f_lambda_3d<'a>(
    degree: usize,
    x: &'a Axis,
    y: &'a Axis,
    z: &'a Axis,
) -> impl Iterator<Item = VectorPolynomial> + Clone + 'a {
    f_lambda_3d_trim(degree, x, y, z).chain(f_lambda_3d_tilde(degree, x, y, z))
}
