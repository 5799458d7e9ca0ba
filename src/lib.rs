//! Trimmed serendipity finite elements
//!
//! Curl-conforming (edge) and divergence-conforming (face) trimmed serendipity elements on
//! quadrilaterals and hexahedra. The basis is built in closed form with exact rational
//! arithmetic and can be tabulated, with its derivatives, at arbitrary points.
//!
//! ```
//! use ndserendipity::{reference_cell::Hypercube, TrimmedSerendipity};
//! use rlst::DynArray;
//!
//! let element = TrimmedSerendipity::edge(Hypercube::unit(2), 2).unwrap();
//! assert_eq!(element.dim(), 10);
//!
//! let mut points = DynArray::<f64, 2>::from_shape([2, 1]);
//! points[[0, 0]] = 0.5;
//! points[[1, 0]] = 0.25;
//! let tables = element.tabulate(1, &points, None).unwrap();
//! assert_eq!(tables[&[1, 0]].shape(), [10, 2, 1]);
//! ```
#![cfg_attr(feature = "strict", deny(warnings), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod basis;
pub mod dofs;
pub mod element;
pub mod error;
#[cfg(feature = "serde")]
mod io;
pub mod polynomial;
pub mod reference_cell;
pub mod traits;
pub mod types;

pub use element::{TrimmedSerendipity, TrimmedSerendipityFamily};
pub use error::{Error, Result};
pub use types::{ElementKind, MapType};
