//! Error types
use thiserror::Error;

/// Errors raised when building or using a trimmed serendipity element
#[derive(Debug, Error)]
pub enum Error {
    /// The polynomial degree is below 1
    #[error("trimmed serendipity elements are only valid for degree >= 1 (got {degree})")]
    InvalidDegree {
        /// The requested degree
        degree: usize,
    },

    /// The flattened cell is not 2- or 3-dimensional
    #[error("trimmed serendipity elements are only valid in dimensions 2 and 3 (got {dim})")]
    InvalidDimension {
        /// Spatial dimension of the flattened cell
        dim: usize,
    },

    /// The cell is not a hypercube
    #[error("unsupported cell: {cell}")]
    UnsupportedCell {
        /// Description of the cell
        cell: String,
    },

    /// A flattened cell has zero width along an axis
    #[error("degenerate cell: zero width along axis {axis}")]
    DegenerateCell {
        /// The degenerate axis
        axis: usize,
    },

    /// A flattened cell has a NaN or infinite bound along an axis
    #[error("cell bound along axis {axis} is not finite")]
    NonFiniteBound {
        /// The axis with the non-finite bound
        axis: usize,
    },

    /// The operation is deliberately not provided by this element family
    #[error("{operation} is not implemented for trimmed serendipity elements")]
    Unsupported {
        /// Name of the operation
        operation: &'static str,
    },

    /// No entity with this dimension and index exists
    #[error("cell has no entity {index} of dimension {dim}")]
    InvalidEntity {
        /// Dimension key, formatted
        dim: String,
        /// Entity index
        index: usize,
    },

    /// The points passed to a transform have the wrong dimension
    #[error("point dimension mismatch: expected {expected}, got {got}")]
    PointDimensionMismatch {
        /// Dimension of the entity
        expected: usize,
        /// Dimension of the points
        got: usize,
    },

    /// A coordinate is NaN or infinite
    #[error("point {point} has a non-finite coordinate")]
    NonFinitePoint {
        /// Index of the point
        point: usize,
    },

    /// A flat entity has no counterpart in the flattening map
    #[error("flattening map has no entry for flat entity {index} of dimension {dim}")]
    IncompleteFlatteningMap {
        /// Flat dimension
        dim: usize,
        /// Flat entity index
        index: usize,
    },

    /// Reading or writing a file failed
    #[cfg(feature = "serde")]
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Conversion to or from RON failed
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type used throughout this crate
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if the element could not be built from its inputs.
    ///
    /// This includes `InvalidDegree`, `InvalidDimension`, `UnsupportedCell`, `DegenerateCell` and
    /// `NonFiniteBound`.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidDegree { .. }
                | Error::InvalidDimension { .. }
                | Error::UnsupportedCell { .. }
                | Error::DegenerateCell { .. }
                | Error::NonFiniteBound { .. }
        )
    }

    /// Returns `true` if a valid element was asked for something it does not provide.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported { .. })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDegree { degree: 0 };
        assert_eq!(
            err.to_string(),
            "trimmed serendipity elements are only valid for degree >= 1 (got 0)"
        );
        let err = Error::Unsupported {
            operation: "get_dual_set",
        };
        assert_eq!(
            err.to_string(),
            "get_dual_set is not implemented for trimmed serendipity elements"
        );
    }

    #[test]
    fn test_categories() {
        let config_err = Error::InvalidDimension { dim: 4 };
        let unsupported = Error::Unsupported {
            operation: "dmats",
        };

        assert!(config_err.is_config_error());
        assert!(!config_err.is_unsupported());
        assert!(unsupported.is_unsupported());
        assert!(!unsupported.is_config_error());
        assert!(!Error::NonFinitePoint { point: 0 }.is_config_error());
        assert!(Error::NonFiniteBound { axis: 1 }.is_config_error());
    }
}
