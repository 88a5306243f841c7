/// Crate-level error type for framing and windowing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid parameter value (negative length, oversized window, ...).
    #[error("invalid parameter `{name}`: got {value}, {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// Input array or scalar argument has the wrong rank or extent.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// Axis does not name a dimension of the input, after resolving negatives.
    #[error("axis {axis} is out of range for an array of rank {ndim}")]
    AxisOutOfRange { axis: isize, ndim: usize },

    /// A required length is zero.
    #[error("invalid size for `{name}`: {value} ({reason})")]
    InvalidSize {
        name: &'static str,
        value: usize,
        reason: &'static str,
    },

    /// Array construction failed in ndarray.
    #[error(transparent)]
    Layout(#[from] ndarray::ShapeError),
}

impl Error {
    /// True for rank and extent violations.
    pub fn is_shape(&self) -> bool {
        matches!(self, Error::ShapeMismatch { .. })
    }

    /// True when an axis could not be resolved.
    pub fn is_range(&self) -> bool {
        matches!(self, Error::AxisOutOfRange { .. })
    }

    /// True for out-of-domain parameter values such as a zero hop.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Error::InvalidSize { .. } | Error::InvalidParameter { .. }
        )
    }
}

/// Convenience Result type for sigframe operations.
pub type Result<T> = std::result::Result<T, Error>;
