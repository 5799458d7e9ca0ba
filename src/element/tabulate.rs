//! Tabulation
use super::TrimmedSerendipity;
use crate::error::{Error, Result};
use crate::polynomial::{rational_from_f64, Variable, VectorPolynomial};
use crate::traits::ReferenceCell;
use crate::types::MultiIndex;
use log::trace;
use num::{BigRational, ToPrimitive};
use rlst::DynArray;
use std::collections::BTreeMap;
use std::rc::Rc;

/// The derivative multi-indices of total order `order`: `[order, 0], [order - 1, 1], ..., [0, order]`
pub fn multi_indices(order: usize) -> impl Iterator<Item = MultiIndex> {
    (0..=order).map(move |k| [order - k, k])
}

impl<C: ReferenceCell> TrimmedSerendipity<C> {
    /// The basis differentiated `alpha[0]` times by `x` and `alpha[1]` times by `y`
    ///
    /// Each derivative is computed from the derivative one order lower and cached.
    pub fn derivative(&self, alpha: MultiIndex) -> Rc<Vec<VectorPolynomial>> {
        if alpha == [0, 0] {
            return Rc::clone(&self.basis);
        }
        if let Some(d) = self.derivatives.borrow().get(&alpha) {
            return Rc::clone(d);
        }
        trace!("Computing derivative {alpha:?} of the basis");
        let (parent, v) = if alpha[1] > 0 {
            ([alpha[0], alpha[1] - 1], Variable::Y)
        } else {
            ([alpha[0] - 1, 0], Variable::X)
        };
        let d = Rc::new(
            self.derivative(parent)
                .iter()
                .map(|f| f.diff(v, 1))
                .collect::<Vec<_>>(),
        );
        self.derivatives.borrow_mut().insert(alpha, Rc::clone(&d));
        d
    }

    /// The multi-indices whose derivatives have been cached, in ascending order
    pub fn cached_derivatives(&self) -> Vec<MultiIndex> {
        let mut alphas = self.derivatives.borrow().keys().copied().collect::<Vec<_>>();
        alphas.sort();
        alphas
    }

    /// Tabulate the basis and its derivatives up to total order `order`
    ///
    /// `points` has shape `[entity dimension, number of points]` and holds points in the reference
    /// coordinates of `entity`, which defaults to the cell itself. Each table has shape
    /// `[basis functions, 2, number of points]`. Points outside the entity are not rejected.
    pub fn tabulate(
        &self,
        order: usize,
        points: &DynArray<f64, 2>,
        entity: Option<(C::Dim, usize)>,
    ) -> Result<BTreeMap<MultiIndex, DynArray<f64, 3>>> {
        let (dim, index) = entity.unwrap_or_else(|| (self.cell.cell_dim(), 0));
        let transform = self.cell.entity_transform(&dim, index)?;
        let [tdim, npts] = points.shape();
        if tdim != transform.domain_dim() {
            return Err(Error::PointDimensionMismatch {
                expected: transform.domain_dim(),
                got: tdim,
            });
        }
        let mapped = (0..npts)
            .map(|p| {
                let point = (0..tdim).map(|i| points[[i, p]]).collect::<Vec<_>>();
                transform
                    .apply(&point)?
                    .iter()
                    .map(|x| rational_from_f64(*x).ok_or(Error::NonFinitePoint { point: p }))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let mut tables = BTreeMap::new();
        for o in 0..=order {
            for alpha in multi_indices(o) {
                tables.insert(alpha, evaluate(&self.derivative(alpha), &mapped));
            }
        }
        Ok(tables)
    }
}

/// Evaluate the first two components of every function at every point
fn evaluate(functions: &[VectorPolynomial], points: &[Vec<BigRational>]) -> DynArray<f64, 3> {
    let mut table = DynArray::<f64, 3>::from_shape([functions.len(), 2, points.len()]);
    for (j, f) in functions.iter().enumerate() {
        for (c, component) in f.components().iter().take(2).enumerate() {
            for (p, point) in points.iter().enumerate() {
                table[[j, c, p]] = component.evaluate(point).to_f64().unwrap_or(f64::NAN);
            }
        }
    }
    table
}
