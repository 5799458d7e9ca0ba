//! Element families
use super::TrimmedSerendipity;
use crate::error::{Error, Result};
use crate::traits::ReferenceCell;
use crate::types::ElementKind;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A trimmed serendipity element of fixed degree and kind, for any cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrimmedSerendipityFamily {
    degree: usize,
    kind: ElementKind,
}

impl TrimmedSerendipityFamily {
    /// Create a family
    pub fn new(degree: usize, kind: ElementKind) -> Result<Self> {
        if degree < 1 {
            return Err(Error::InvalidDegree { degree });
        }
        Ok(Self { degree, kind })
    }

    /// The polynomial degree
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The element kind
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Create the element on a cell
    pub fn element<C: ReferenceCell>(&self, cell: C) -> Result<TrimmedSerendipity<C>> {
        TrimmedSerendipity::new(cell, self.degree, self.kind)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reference_cell::{Hypercube, TensorProductCell};
    use ndelement::types::ReferenceCellType;

    #[test]
    fn test_family() {
        let family = TrimmedSerendipityFamily::new(3, ElementKind::Face).unwrap();
        assert_eq!(family.degree(), 3);
        assert_eq!(family.kind(), ElementKind::Face);

        let a = family.element(ReferenceCellType::Quadrilateral).unwrap();
        let b = family.element(TensorProductCell::quadrilateral()).unwrap();
        let c = family.element(Hypercube::unit(2)).unwrap();
        assert_eq!(a.dim(), 17);
        assert_eq!(b.dim(), a.dim());
        assert_eq!(c.basis(), a.basis());
        assert_eq!(a.kind(), ElementKind::Face);
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(
            TrimmedSerendipityFamily::new(0, ElementKind::Edge),
            Err(Error::InvalidDegree { degree: 0 })
        ));
        let family = TrimmedSerendipityFamily::new(1, ElementKind::Edge).unwrap();
        assert!(family
            .element(ReferenceCellType::Triangle)
            .is_err_and(|e| e.is_config_error()));
    }
}
