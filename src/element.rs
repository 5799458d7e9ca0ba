//! Trimmed serendipity elements
mod family;
#[cfg(feature = "serde")]
mod serializable;
mod tabulate;

pub use family::TrimmedSerendipityFamily;
pub use tabulate::multi_indices;

use crate::basis::{self, Blending};
use crate::dofs::{allocate, closure_dofs, unflatten_entity_dofs};
use crate::error::{Error, Result};
use crate::polynomial::VectorPolynomial;
use crate::reference_cell::Hypercube;
use crate::traits::{FiniteElement, ReferenceCell};
use crate::types::{ElementKind, EntityDofs, MapType, MultiIndex};
use log::{debug, warn};
use rlst::DynArray;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;
use std::rc::Rc;

/// A trimmed serendipity element
///
/// The basis is built symbolically from closed-form edge, face and interior terms on the flattened
/// cell. There is no nodal basis or dual set: the element is defined by its modal basis alone.
///
/// Derivatives of the basis are computed on demand and cached for the lifetime of the element, so
/// an element is not `Sync`.
#[derive(Debug)]
pub struct TrimmedSerendipity<C: ReferenceCell> {
    cell: C,
    flat_cell: Hypercube,
    kind: ElementKind,
    degree: usize,
    basis: Rc<Vec<VectorPolynomial>>,
    derivatives: RefCell<HashMap<MultiIndex, Rc<Vec<VectorPolynomial>>>>,
    entity_dofs: EntityDofs<C::Dim>,
    entity_closure_dofs: EntityDofs<C::Dim>,
}

impl<C: ReferenceCell> TrimmedSerendipity<C> {
    /// Create an element
    ///
    /// Fails if `degree` is 0, if the cell does not flatten to a 2- or 3-dimensional hypercube,
    /// or if the flattened cell has zero width along an axis.
    pub fn new(cell: C, degree: usize, kind: ElementKind) -> Result<Self> {
        if degree < 1 {
            return Err(Error::InvalidDegree { degree });
        }
        let (flat_cell, flattening) = cell.flatten()?;
        let dim = flat_cell.lower().len();
        if dim != 2 && dim != 3 {
            return Err(Error::InvalidDimension { dim });
        }

        let blending = Blending::new(&flat_cell, degree)?;
        let mut terms = basis::terms(degree, &blending);
        if kind == ElementKind::Edge {
            debug!("Built {} edge terms of degree {degree} in {dim}D", terms.len());
        } else {
            terms = terms.iter().map(|t| t.rotate()).collect();
            debug!("Built {} rotated face terms of degree {degree} in {dim}D", terms.len());
        }

        let flat_dofs = allocate(degree, &flat_cell)?;
        if flat_dofs.dof_count() != terms.len() {
            warn!(
                "Trimmed serendipity element of degree {degree} in {dim}D has {} basis functions but {} dofs",
                terms.len(),
                flat_dofs.dof_count()
            );
        }
        let flat_closure_dofs = closure_dofs(&flat_cell, &flat_dofs);
        let entity_dofs = unflatten_entity_dofs(&flat_dofs, &flattening)?;
        let entity_closure_dofs = unflatten_entity_dofs(&flat_closure_dofs, &flattening)?;

        Ok(Self {
            cell,
            flat_cell,
            kind,
            degree,
            basis: Rc::new(terms),
            derivatives: RefCell::new(HashMap::new()),
            entity_dofs,
            entity_closure_dofs,
        })
    }

    /// Create a curl-conforming element
    pub fn edge(cell: C, degree: usize) -> Result<Self> {
        Self::new(cell, degree, ElementKind::Edge)
    }

    /// Create a divergence-conforming element
    pub fn face(cell: C, degree: usize) -> Result<Self> {
        Self::new(cell, degree, ElementKind::Face)
    }

    /// The reference cell
    pub fn cell(&self) -> &C {
        &self.cell
    }

    /// The hypercube the basis is constructed on
    pub fn flat_cell(&self) -> &Hypercube {
        &self.flat_cell
    }

    /// The element kind
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The polynomial degree
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The symbolic basis functions
    pub fn basis(&self) -> &[VectorPolynomial] {
        &self.basis
    }

    /// The value shape
    ///
    /// This is `[2]` for hexahedra too: only the first two components are tabulated.
    pub fn value_shape(&self) -> &[usize] {
        &[2]
    }

    /// The push forward map
    pub fn map_type(&self) -> MapType {
        self.kind.map_type()
    }

    /// The degree of the differential form
    pub fn form_degree(&self) -> usize {
        1
    }

    /// The number of basis functions
    pub fn dim(&self) -> usize {
        self.basis.len()
    }

    /// The dofs associated with an entity
    pub fn entity_dofs(&self, dim: &C::Dim, index: usize) -> Option<&[usize]> {
        self.entity_dofs.get(dim, index)
    }

    /// The dofs associated with the closure of an entity
    pub fn entity_closure_dofs(&self, dim: &C::Dim, index: usize) -> Option<&[usize]> {
        self.entity_closure_dofs.get(dim, index)
    }

    /// The dofs of every entity
    pub fn entity_dof_map(&self) -> &EntityDofs<C::Dim> {
        &self.entity_dofs
    }

    /// The closure dofs of every entity
    pub fn entity_closure_dof_map(&self) -> &EntityDofs<C::Dim> {
        &self.entity_closure_dofs
    }

    /// The nodal basis. Trimmed serendipity elements do not have one.
    pub fn nodal_basis(&self) -> Result<Vec<VectorPolynomial>> {
        Err(Error::Unsupported {
            operation: "nodal_basis",
        })
    }

    /// The dual set. Trimmed serendipity elements do not have one.
    pub fn dual_set(&self) -> Result<Infallible> {
        Err(Error::Unsupported {
            operation: "dual_set",
        })
    }

    /// The coefficients of the basis in terms of an orthonormal set. Not available for trimmed
    /// serendipity elements.
    pub fn coefficients(&self) -> Result<DynArray<f64, 2>> {
        Err(Error::Unsupported {
            operation: "coefficients",
        })
    }

    /// Derivative matrices of an orthonormal set. Not available for trimmed serendipity elements.
    pub fn dmats(&self) -> Result<Vec<DynArray<f64, 2>>> {
        Err(Error::Unsupported { operation: "dmats" })
    }

    /// The number of members of the polynomial set. Not available for trimmed serendipity
    /// elements.
    pub fn num_members(&self, _degree: usize) -> Result<usize> {
        Err(Error::Unsupported {
            operation: "num_members",
        })
    }
}

impl<C: ReferenceCell> FiniteElement for TrimmedSerendipity<C> {
    type Dim = C::Dim;

    fn degree(&self) -> usize {
        self.degree
    }

    fn value_shape(&self) -> &[usize] {
        TrimmedSerendipity::value_shape(self)
    }

    fn map_type(&self) -> MapType {
        self.kind.map_type()
    }

    fn form_degree(&self) -> usize {
        1
    }

    fn dim(&self) -> usize {
        self.basis.len()
    }

    fn entity_dofs(&self, dim: &C::Dim, index: usize) -> Option<&[usize]> {
        self.entity_dofs.get(dim, index)
    }

    fn entity_closure_dofs(&self, dim: &C::Dim, index: usize) -> Option<&[usize]> {
        self.entity_closure_dofs.get(dim, index)
    }

    fn tabulate(
        &self,
        order: usize,
        points: &DynArray<f64, 2>,
        entity: Option<(C::Dim, usize)>,
    ) -> Result<BTreeMap<MultiIndex, DynArray<f64, 3>>> {
        TrimmedSerendipity::tabulate(self, order, points, entity)
    }
}
