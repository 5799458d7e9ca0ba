//! Vector-valued polynomials
use super::{Polynomial, Variable};

/// A vector whose components are polynomials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorPolynomial {
    components: Vec<Polynomial>,
}

impl VectorPolynomial {
    /// Create from components
    pub fn new(components: Vec<Polynomial>) -> Self {
        Self { components }
    }

    /// The components
    pub fn components(&self) -> &[Polynomial] {
        &self.components
    }

    /// A component
    pub fn component(&self, i: usize) -> Option<&Polynomial> {
        self.components.get(i)
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Is this a vector with no components?
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Rotate the first two components by 90 degrees: `(a, b, ..) -> (-b, a)`
    pub fn rotate(&self) -> Self {
        let a = self.component(0).cloned().unwrap_or_default();
        let b = self.component(1).cloned().unwrap_or_default();
        Self {
            components: vec![-b, a],
        }
    }

    /// Differentiate every component
    pub fn diff(&self, v: Variable, order: usize) -> Self {
        Self {
            components: self.components.iter().map(|c| c.diff(v, order)).collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rotate() {
        let x = Polynomial::variable(Variable::X);
        let y = Polynomial::variable(Variable::Y);
        let z = Polynomial::variable(Variable::Z);

        let v = VectorPolynomial::new(vec![x.clone(), y.clone()]);
        assert_eq!(v.rotate(), VectorPolynomial::new(vec![-&y, x.clone()]));

        // The third component is dropped
        let w = VectorPolynomial::new(vec![x.clone(), y.clone(), z]);
        assert_eq!(w.rotate(), VectorPolynomial::new(vec![-&y, x]));
    }

    #[test]
    fn test_diff() {
        let x = Polynomial::variable(Variable::X);
        let v = VectorPolynomial::new(vec![Polynomial::zero(), Polynomial::zero(), x.clone()]);
        assert_eq!(v.len(), 3);
        assert!(v.component(0).unwrap().is_zero());
        assert!(v.component(1).unwrap().is_zero());
        assert_eq!(v.component(2), Some(&x));
        assert!(v.diff(Variable::Y, 1).components().iter().all(|c| c.is_zero()));
    }
}
