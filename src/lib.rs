//! Signal framing and windowing for short-time spectral analysis.
//!
//! Sigframe slices a time-domain signal into overlapping fixed-length frames
//! and optionally tapers each frame with a window function, producing the
//! input of a per-frame Fourier transform. Signals may have any rank: the
//! framed (time) axis is chosen by the caller and every other axis is carried
//! through unchanged.
//!
//! # Quick Start
//!
//! ```rust
//! use ndarray::Array2;
//! use sigframe::{frame, window, windowing};
//!
//! // Two channels of one second at 16 kHz
//! let pcm = Array2::<f32>::zeros((2, 16000));
//!
//! // 25 ms frames every 10 ms, padding the tail so no sample is lost
//! let frames = frame::frame(&pcm, 400, 160, true, 0.0, -1).unwrap();
//! assert_eq!(frames.shape(), &[2, 100, 400]);
//!
//! // Taper every frame with a Hann window
//! let w: Vec<f32> = window::hann(400);
//! let tapered = windowing::apply_window(&frames, &w, -1).unwrap();
//! assert_eq!(tapered.shape(), frames.shape());
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`frame`] | Framing of N-d signals, batch and 1-D variants, frame parameters |
//! | [`shape`] | Frame counts, padded lengths and static shape inference |
//! | [`window`] | Window functions (Hann, Hamming, Blackman, Bartlett, rectangular) |
//! | [`windowing`] | Window application and windowed analysis frames |
//! | [`utils`] | Axis resolution, scalar arguments, rounding and padding helpers |
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. Errors are reported before any output is
//! built and fall into three groups, see [`Error::is_shape`],
//! [`Error::is_range`] and [`Error::is_domain`].
//!
//! # Logging
//!
//! Framing geometry is reported through the [`log`] facade at `debug` level.
//! The library never installs a logger.

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod frame;
pub mod shape;
pub mod utils;
pub mod window;
pub mod windowing;
