//! Types

mod entity_dofs;
pub use entity_dofs::EntityDofs;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Partial derivative orders with respect to `x` and `y`
pub type MultiIndex = [usize; 2];

/// The two members of the trimmed serendipity family
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementKind {
    /// Curl-conforming element built directly from the edge, face and interior terms
    Edge,
    /// Divergence-conforming element: the edge element rotated by 90 degrees
    Face,
}

impl ElementKind {
    /// The map used to push this element forward to a physical cell
    pub fn map_type(&self) -> MapType {
        match self {
            ElementKind::Edge => MapType::CovariantPiola,
            ElementKind::Face => MapType::ContravariantPiola,
        }
    }
}

/// Push forward map
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MapType {
    /// Covariant Piola map (preserves tangential continuity)
    CovariantPiola,
    /// Contravariant Piola map (preserves normal continuity)
    ContravariantPiola,
}
