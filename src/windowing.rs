//! Window application on framed signals.
//!
//! [`apply_window`] scales every frame element-wise along its frame-length
//! axis. [`analysis_frames`] chains window construction, centre padding of
//! the window to the FFT size, framing and window application, producing
//! frames that are ready for a per-frame Fourier transform.

use crate::frame::frame;
use crate::shape::rank_error;
use crate::utils::{pad_center, positive_length, resolve_axis};
use crate::window::{WindowType, get_window};
use ndarray::{ArrayBase, ArrayD, Axis, Data, DataMut, Dimension};
use num_traits::{Float, Zero};
use std::ops::Mul;

/// Zero-pad a window symmetrically to `frame_length`.
///
/// When the difference in length is odd the leading side receives the extra
/// zero.
///
/// # Errors
/// Returns [`crate::Error::InvalidParameter`] if the window is longer than
/// `frame_length`.
///
/// # Example
/// ```
/// use sigframe::windowing::pad_window;
///
/// let w = pad_window(&[1.0f32, 1.0, 1.0], 6).unwrap();
/// assert_eq!(w, vec![0.0, 0.0, 1.0, 1.0, 1.0, 0.0]);
/// ```
pub fn pad_window<T: Copy + Zero>(window: &[T], frame_length: usize) -> crate::Result<Vec<T>> {
    if window.len() > frame_length {
        return Err(crate::Error::InvalidParameter {
            name: "window",
            value: format!("length {}", window.len()),
            reason: format!("must not exceed frame_length {frame_length}"),
        });
    }
    Ok(pad_center(window, frame_length, T::zero()))
}

/// Multiply every lane along `axis` by `window`, in place.
///
/// `axis` is the frame-length axis of the framed array, usually `-1` when
/// the last axis of the signal was framed.
///
/// # Errors
/// * [`crate::Error::ShapeMismatch`] for a rank-0 array, or if the window
///   length differs from the length of `axis`
/// * [`crate::Error::AxisOutOfRange`] if `axis` does not name a dimension
pub fn apply_window_mut<S, D, T>(
    frames: &mut ArrayBase<S, D>,
    window: &[T],
    axis: isize,
) -> crate::Result<()>
where
    S: DataMut<Elem = T>,
    D: Dimension,
    T: Copy + Mul<Output = T>,
{
    if frames.ndim() == 0 {
        return Err(rank_error(0));
    }
    let axis = resolve_axis(axis, frames.ndim())?;
    let frame_length = frames.len_of(Axis(axis));
    if frame_length != window.len() {
        return Err(crate::Error::ShapeMismatch {
            expected: format!("window of length {frame_length}"),
            got: format!("length {}", window.len()),
        });
    }

    for mut lane in frames.lanes_mut(Axis(axis)) {
        lane.iter_mut()
            .zip(window)
            .for_each(|(x, &w)| *x = *x * w);
    }
    Ok(())
}

/// Multiply every lane along `axis` by `window`.
///
/// Element `j` of each frame becomes `frame[j] * window[j]`, independent of
/// all other indices.
///
/// # Example
/// ```
/// use ndarray::array;
/// use sigframe::windowing::apply_window;
///
/// let frames = array![[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]];
/// let out = apply_window(&frames, &[0.0, 1.0, 0.5], -1).unwrap();
/// assert_eq!(out.into_raw_vec_and_offset().0, vec![0.0, 2.0, 1.5, 0.0, 5.0, 3.0]);
/// ```
pub fn apply_window<S, D, T>(
    frames: &ArrayBase<S, D>,
    window: &[T],
    axis: isize,
) -> crate::Result<ArrayD<T>>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Copy + Mul<Output = T>,
{
    let mut out = frames.to_owned().into_dyn();
    apply_window_mut(&mut out, window, axis)?;
    Ok(out)
}

/// Configuration for [`analysis_frames`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig<T> {
    /// Frame length, which is also the FFT size downstream.
    pub n_fft: usize,
    /// Hop between frames; `None` means `win_length / 4`.
    pub hop_length: Option<usize>,
    /// Length of the window before centre padding; `None` means `n_fft`.
    pub win_length: Option<usize>,
    pub window: WindowType,
    pub pad_end: bool,
    pub pad_value: T,
}

impl<T: Zero> Default for AnalysisConfig<T> {
    fn default() -> Self {
        Self {
            n_fft: 400,
            hop_length: Some(160),
            win_length: Some(400),
            window: WindowType::Hann,
            pad_end: false,
            pad_value: T::zero(),
        }
    }
}

impl<T> AnalysisConfig<T> {
    /// Effective window length.
    pub fn win_length(&self) -> usize {
        self.win_length.unwrap_or(self.n_fft)
    }

    /// Effective hop length.
    pub fn hop_length(&self) -> usize {
        self.hop_length.unwrap_or(self.win_length() / 4)
    }
}

/// Frame the last axis of `signal` and apply the configured window.
///
/// The window is built with `win_length` samples and centre padded with
/// zeros to `n_fft`. The output has shape `[..., num_frames, n_fft]`.
///
/// # Errors
/// Everything [`frame`] reports, plus a domain error if `n_fft` or the
/// window length is zero or the window is longer than `n_fft`.
///
/// # Example
/// ```
/// use ndarray::Array1;
/// use sigframe::windowing::{AnalysisConfig, analysis_frames};
///
/// let y = Array1::<f32>::ones(16000);
/// let frames = analysis_frames(&y, &AnalysisConfig::default()).unwrap();
/// assert_eq!(frames.shape(), &[98, 400]);
/// ```
pub fn analysis_frames<S, D, T>(
    signal: &ArrayBase<S, D>,
    config: &AnalysisConfig<T>,
) -> crate::Result<ArrayD<T>>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Float,
{
    if signal.ndim() == 0 {
        return Err(rank_error(0));
    }
    positive_length(config.n_fft, "n_fft")?;
    let win_length = positive_length(config.win_length(), "win_length")?;
    let window = pad_window(&get_window::<T>(config.window, win_length), config.n_fft)?;

    let mut frames = frame(
        signal,
        config.n_fft,
        config.hop_length(),
        config.pad_end,
        config.pad_value,
        -1,
    )?;
    apply_window_mut(&mut frames, &window, -1)?;
    Ok(frames)
}
