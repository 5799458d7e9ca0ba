//! Polynomials in `x`, `y` and `z` with exact rational coefficients
//!
//! These are the symbolic expressions that the basis is built from. Coefficients are kept as
//! [BigRational]s so that differentiation is exact and tabulated values are rounded only once.

mod legendre;
mod vector;

pub use legendre::{legendre, legendre_table};
pub use vector::VectorPolynomial;

use num::{BigInt, BigRational, One, ToPrimitive, Zero};
use std::collections::BTreeMap;
use std::ops::{Add, Mul, Neg, Sub};

/// A coordinate variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variable {
    /// First coordinate
    X,
    /// Second coordinate
    Y,
    /// Third coordinate
    Z,
}

impl Variable {
    /// All variables, in coordinate order
    pub const ALL: [Variable; 3] = [Variable::X, Variable::Y, Variable::Z];

    /// Index of the coordinate this variable stands for
    pub fn index(self) -> usize {
        match self {
            Variable::X => 0,
            Variable::Y => 1,
            Variable::Z => 2,
        }
    }
}

/// Exponents of `x`, `y` and `z`
type Monomial = [u32; 3];

/// A polynomial in `x`, `y` and `z`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polynomial {
    terms: BTreeMap<Monomial, BigRational>,
}

/// Convert a float to an exact rational
pub fn rational_from_f64(value: f64) -> Option<BigRational> {
    BigRational::from_float(value)
}

impl Polynomial {
    /// The zero polynomial
    pub fn zero() -> Self {
        Self::default()
    }

    /// A constant polynomial
    pub fn constant(value: BigRational) -> Self {
        let mut p = Self::zero();
        p.add_term([0, 0, 0], value);
        p
    }

    /// A constant integer polynomial
    pub fn from_integer(value: i64) -> Self {
        Self::constant(BigRational::from_integer(BigInt::from(value)))
    }

    /// The polynomial `v`
    pub fn variable(v: Variable) -> Self {
        let mut exponents = [0; 3];
        exponents[v.index()] = 1;
        let mut p = Self::zero();
        p.add_term(exponents, BigRational::one());
        p
    }

    /// Is this the zero polynomial?
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total degree (0 for the zero polynomial)
    pub fn degree(&self) -> u32 {
        self.terms
            .keys()
            .map(|m| m.iter().sum())
            .max()
            .unwrap_or(0)
    }

    /// The coefficient of `x^i y^j z^k`
    pub fn coefficient(&self, exponents: [u32; 3]) -> BigRational {
        self.terms
            .get(&exponents)
            .cloned()
            .unwrap_or_else(BigRational::zero)
    }

    /// Iterate over the non-zero terms
    pub fn terms(&self) -> impl Iterator<Item = (&[u32; 3], &BigRational)> {
        self.terms.iter()
    }

    fn add_term(&mut self, exponents: Monomial, value: BigRational) {
        if value.is_zero() {
            return;
        }
        let entry = self.terms.entry(exponents).or_insert_with(BigRational::zero);
        *entry += value;
        if entry.is_zero() {
            self.terms.remove(&exponents);
        }
    }

    /// Multiply by a scalar
    pub fn scale(&self, factor: &BigRational) -> Self {
        if factor.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (*m, c * factor))
                .collect(),
        }
    }

    /// The `order`-th partial derivative with respect to `v`
    pub fn diff(&self, v: Variable, order: usize) -> Self {
        let i = v.index();
        let mut result = Self::zero();
        for (m, c) in &self.terms {
            if (m[i] as usize) < order {
                continue;
            }
            let mut factor = BigInt::one();
            for k in 0..order {
                factor *= BigInt::from(m[i] as usize - k);
            }
            let mut exponents = *m;
            exponents[i] -= order as u32;
            result.add_term(exponents, c * BigRational::from_integer(factor));
        }
        result
    }

    /// Evaluate exactly at a point
    ///
    /// Variables with no coordinate in `point` are taken to be zero.
    pub fn evaluate(&self, point: &[BigRational]) -> BigRational {
        let mut value = BigRational::zero();
        for (m, c) in &self.terms {
            let mut term = c.clone();
            for (v, e) in m.iter().enumerate() {
                if *e == 0 {
                    continue;
                }
                match point.get(v) {
                    Some(x) => term *= num::pow(x.clone(), *e as usize),
                    None => term = BigRational::zero(),
                }
            }
            value += term;
        }
        value
    }

    /// Evaluate at a point given in floating point
    ///
    /// The point is converted to rationals exactly and the result is rounded once. Returns `None`
    /// if a coordinate is not finite.
    pub fn evaluate_f64(&self, point: &[f64]) -> Option<f64> {
        let exact = point
            .iter()
            .map(|x| rational_from_f64(*x))
            .collect::<Option<Vec<_>>>()?;
        self.evaluate(&exact).to_f64()
    }
}

/// Product of a list of polynomials
pub fn product<'a>(factors: impl IntoIterator<Item = &'a Polynomial>) -> Polynomial {
    factors
        .into_iter()
        .fold(Polynomial::from_integer(1), |acc, f| &acc * f)
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;
    fn add(self, other: &Polynomial) -> Polynomial {
        let mut result = self.clone();
        for (m, c) in &other.terms {
            result.add_term(*m, c.clone());
        }
        result
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;
    fn sub(self, other: &Polynomial) -> Polynomial {
        let mut result = self.clone();
        for (m, c) in &other.terms {
            result.add_term(*m, -c.clone());
        }
        result
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;
    fn mul(self, other: &Polynomial) -> Polynomial {
        let mut result = Polynomial::zero();
        for (m0, c0) in &self.terms {
            for (m1, c1) in &other.terms {
                result.add_term([m0[0] + m1[0], m0[1] + m1[1], m0[2] + m1[2]], c0 * c1);
            }
        }
        result
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        Polynomial {
            terms: self.terms.iter().map(|(m, c)| (*m, -c.clone())).collect(),
        }
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        -&self
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait<Polynomial> for Polynomial {
            type Output = Polynomial;
            fn $method(self, other: Polynomial) -> Polynomial {
                (&self).$method(&other)
            }
        }
        impl $trait<&Polynomial> for Polynomial {
            type Output = Polynomial;
            fn $method(self, other: &Polynomial) -> Polynomial {
                (&self).$method(other)
            }
        }
        impl $trait<Polynomial> for &Polynomial {
            type Output = Polynomial;
            fn $method(self, other: Polynomial) -> Polynomial {
                self.$method(&other)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
