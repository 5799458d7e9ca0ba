//! Blending factors
use crate::error::{Error, Result};
use crate::polynomial::{legendre_table, rational_from_f64, Polynomial, Variable};
use crate::reference_cell::Hypercube;
use num::{BigInt, BigRational};

/// The blending factors and Legendre polynomials along one axis of a box
///
/// For an axis spanning `[l, u]`, the blending pair is `((u - x)/(u - l), (x - l)/(u - l))` and the
/// Legendre polynomials are evaluated at `2x - (l + u)`.
#[derive(Debug, Clone)]
pub struct Axis {
    d: [Polynomial; 2],
    both: Polynomial,
    mid: Polynomial,
    legendre: Vec<Polynomial>,
}

impl Axis {
    /// Create the factors for variable `v` on `[lower, upper]`, with Legendre polynomials up to
    /// `degree`
    pub fn new(v: Variable, lower: f64, upper: f64, degree: usize) -> Result<Self> {
        if lower == upper {
            return Err(Error::DegenerateCell { axis: v.index() });
        }
        let bound = |value: f64| {
            rational_from_f64(value).ok_or(Error::NonFiniteBound { axis: v.index() })
        };
        let l = bound(lower)?;
        let u = bound(upper)?;
        let x = Polynomial::variable(v);

        let width = &u - &l;
        let inv_width = BigRational::from_integer(BigInt::from(1)) / &width;
        let d0 = (&Polynomial::constant(u.clone()) - &x).scale(&inv_width);
        let d1 = (&x - &Polynomial::constant(l.clone())).scale(&inv_width);
        let both = &d0 * &d1;
        let mid = &x.scale(&BigRational::from_integer(BigInt::from(2)))
            - &Polynomial::constant(&l + &u);
        let legendre = legendre_table(degree, &mid);
        Ok(Self {
            d: [d0, d1],
            both,
            mid,
            legendre,
        })
    }

    /// Half `i` of the blending pair: 0 vanishes on the upper face, 1 on the lower face
    pub fn d(&self, i: usize) -> &Polynomial {
        &self.d[i]
    }

    /// The product of both halves of the blending pair
    pub fn both(&self) -> &Polynomial {
        &self.both
    }

    /// The midpoint substitute `2x - (l + u)`
    pub fn mid(&self) -> &Polynomial {
        &self.mid
    }

    /// The Legendre polynomial `P_n` of the midpoint substitute
    ///
    /// `n` must not exceed the degree the axis was created with.
    pub fn leg(&self, n: usize) -> &Polynomial {
        &self.legendre[n]
    }
}

/// Blending factors along every axis of a flattened cell
#[derive(Debug, Clone)]
pub struct Blending {
    axes: Vec<Axis>,
}

impl Blending {
    /// Build the factors from the first and last vertex of a 2- or 3-dimensional box
    pub fn new(cell: &Hypercube, degree: usize) -> Result<Self> {
        let dim = cell.lower().len();
        if dim != 2 && dim != 3 {
            return Err(Error::InvalidDimension { dim });
        }
        let axes = Variable::ALL
            .iter()
            .take(dim)
            .map(|v| {
                Axis::new(
                    *v,
                    cell.lower()[v.index()],
                    cell.upper()[v.index()],
                    degree,
                )
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { axes })
    }

    /// Number of axes
    pub fn dim(&self) -> usize {
        self.axes.len()
    }

    /// The `x` axis
    pub fn x(&self) -> &Axis {
        &self.axes[0]
    }

    /// The `y` axis
    pub fn y(&self) -> &Axis {
        &self.axes[1]
    }

    /// The `z` axis, if the cell is 3-dimensional
    pub fn z(&self) -> Option<&Axis> {
        self.axes.get(2)
    }
}
