//! Traits

mod element;
#[cfg(feature = "serde")]
mod io;
mod reference_cell;

pub use element::FiniteElement;
#[cfg(feature = "serde")]
pub use io::{ConvertToSerializable, RONExport, RONImport};
pub use reference_cell::ReferenceCell;
