mod framing;
mod validation;

// Rounding and padding helpers
pub use framing::{ceil_div, floor_div, pad_center};

// Argument validation
pub use validation::{positive_length, positive_length_i64, resolve_axis, scalar};
