//! Signal framing.
//!
//! A signal of shape `[..outer, length, ..inner]` is sliced along its time
//! axis into frames of `frame_length` samples spaced `hop_length` apart. The
//! result has shape `[..outer, num_frames, frame_length, ..inner]`.

use crate::shape::{frame_count, frame_shape};
use crate::utils::{positive_length, positive_length_i64, resolve_axis, scalar};
use ndarray::{Array2, Array3, ArrayBase, ArrayD, ArrayView1, Data, Dimension, Ix2, Ix3, IxDyn};
use num_traits::Zero;

/// Parameters of a framing operation.
///
/// # Example
/// ```
/// use sigframe::frame::FrameParams;
///
/// let params = FrameParams::<f32>::new(512, 128).with_padding(0.0).with_axis(1);
/// assert!(params.pad_end);
/// assert_eq!(params.axis, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams<T> {
    /// Samples per frame.
    pub frame_length: usize,
    /// Samples between the starts of consecutive frames.
    pub hop_length: usize,
    /// Pad the end of the signal so the last partial frame is kept.
    pub pad_end: bool,
    /// Value written where the padded signal has no samples.
    pub pad_value: T,
    /// Time axis; negative values count from the end.
    pub axis: isize,
}

impl<T: Zero> FrameParams<T> {
    /// Framing along the last axis with no end padding.
    pub fn new(frame_length: usize, hop_length: usize) -> Self {
        Self {
            frame_length,
            hop_length,
            pad_end: false,
            pad_value: T::zero(),
            axis: -1,
        }
    }
}

impl<T> FrameParams<T> {
    /// Enable end padding with `pad_value`.
    pub fn with_padding(self, pad_value: T) -> Self {
        Self {
            pad_end: true,
            pad_value,
            ..self
        }
    }

    /// Frame along `axis` instead of the last axis.
    pub fn with_axis(self, axis: isize) -> Self {
        Self { axis, ..self }
    }
}

impl<T: Copy> FrameParams<T> {
    /// Build parameters from array-valued arguments.
    ///
    /// Every argument must be a rank-0 array. All ranks are checked before
    /// any value, so a non-scalar argument is always reported as a shape
    /// error even if another argument is also out of its domain.
    ///
    /// # Errors
    /// * [`crate::Error::ShapeMismatch`] if an argument is not a scalar
    /// * [`crate::Error::InvalidParameter`] if a length is zero or negative
    ///
    /// # Example
    /// ```
    /// use ndarray::arr0;
    /// use sigframe::frame::FrameParams;
    ///
    /// let params = FrameParams::from_tensors(
    ///     &arr0(4i64).into_dyn(),
    ///     &arr0(2i64).into_dyn(),
    ///     true,
    ///     &arr0(0.0f32).into_dyn(),
    ///     &arr0(-1i64).into_dyn(),
    /// )
    /// .unwrap();
    /// assert_eq!(params.frame_length, 4);
    /// ```
    pub fn from_tensors(
        frame_length: &ArrayD<i64>,
        hop_length: &ArrayD<i64>,
        pad_end: bool,
        pad_value: &ArrayD<T>,
        axis: &ArrayD<i64>,
    ) -> crate::Result<Self> {
        let frame_length = scalar(frame_length, "frame_length")?;
        let hop_length = scalar(hop_length, "hop_length")?;
        let pad_value = scalar(pad_value, "pad_value")?;
        let axis = scalar(axis, "axis")?;

        let frame_length = positive_length_i64(frame_length, "frame_length")?;
        let hop_length = positive_length_i64(hop_length, "hop_length")?;
        let axis = isize::try_from(axis).map_err(|_| crate::Error::InvalidParameter {
            name: "axis",
            value: axis.to_string(),
            reason: "does not fit in isize".to_string(),
        })?;

        Ok(Self {
            frame_length,
            hop_length,
            pad_end,
            pad_value,
            axis,
        })
    }
}

/// Compute the starting sample of every frame.
///
/// # Arguments
/// * `len` - Length of the time axis
/// * `frame_length` - Length of each frame
/// * `hop_length` - Number of samples to advance between frames
/// * `pad_end` - Count the frames of an end-padded signal
///
/// # Example
/// ```
/// use sigframe::frame::frame_starts;
///
/// assert_eq!(frame_starts(9, 4, 2, false).unwrap(), vec![0, 2, 4]);
/// assert_eq!(frame_starts(9, 4, 2, true).unwrap(), vec![0, 2, 4, 6, 8]);
/// ```
pub fn frame_starts(
    len: usize,
    frame_length: usize,
    hop_length: usize,
    pad_end: bool,
) -> crate::Result<Vec<usize>> {
    positive_length(frame_length, "frame_length")?;
    positive_length(hop_length, "hop_length")?;
    let n_frames = frame_count(len, frame_length, hop_length, pad_end);
    Ok((0..n_frames).map(|i| i * hop_length).collect())
}

/// Expand `signal`'s `axis` dimension into overlapping frames.
///
/// Frame `i` holds samples `[i * hop_length, i * hop_length + frame_length)`
/// of the time axis, for every combination of the other indices. The time
/// axis is replaced by two axes, `[num_frames, frame_length]`.
///
/// With `pad_end`, `num_frames = ceil(len / hop_length)` and positions past
/// the end of the signal read `pad_value`. Without it, only frames lying
/// entirely inside the signal are produced; a signal shorter than
/// `frame_length` gives an empty frame axis.
///
/// # Arguments
/// * `signal` - Input array of rank >= 1
/// * `frame_length` - Length of each frame (must be > 0)
/// * `hop_length` - Number of samples to advance between frames (must be > 0)
/// * `pad_end` - Pad the end of the time axis to keep the partial frames
/// * `pad_value` - Fill value for padding
/// * `axis` - Time axis; negative values count from the end
///
/// # Errors
/// * [`crate::Error::ShapeMismatch`] for a rank-0 signal
/// * [`crate::Error::InvalidSize`] for a zero frame or hop length
/// * [`crate::Error::AxisOutOfRange`] if `axis` does not name a dimension
///
/// # Example
/// ```
/// use ndarray::{Ix2, array};
/// use sigframe::frame::frame;
///
/// let y = array![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
/// let frames = frame(&y, 4, 2, false, 0.0, -1).unwrap();
/// assert_eq!(frames.shape(), &[3, 4]);
///
/// let padded = frame(&y, 4, 2, true, 0.0, -1).unwrap();
/// let padded = padded.into_dimensionality::<Ix2>().unwrap();
/// assert_eq!(padded.dim(), (5, 4));
/// assert_eq!(padded.row(4).to_vec(), vec![9.0, 0.0, 0.0, 0.0]);
/// ```
pub fn frame<S, D, T>(
    signal: &ArrayBase<S, D>,
    frame_length: usize,
    hop_length: usize,
    pad_end: bool,
    pad_value: T,
    axis: isize,
) -> crate::Result<ArrayD<T>>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Copy,
{
    let out_shape = frame_shape(signal.shape(), frame_length, hop_length, pad_end, axis)?;
    let axis = resolve_axis(axis, signal.ndim())?;

    let shape = signal.shape();
    let outer: usize = shape[..axis].iter().product();
    let length = shape[axis];
    let inner: usize = shape[axis + 1..].iter().product();
    let num_frames = out_shape[axis];
    log::debug!(
        "framing axis {axis} of {shape:?}: length={length}, frame_length={frame_length}, \
         hop_length={hop_length}, pad_end={pad_end}, num_frames={num_frames}"
    );

    // Row-major, the signal is (outer, length, inner) and a frame is one
    // contiguous run of frame_length * inner elements.
    let standard = signal.as_standard_layout();
    let samples = standard
        .as_slice()
        .ok_or_else(|| crate::Error::ShapeMismatch {
            expected: "contiguous signal data".to_string(),
            got: format!("strides {:?}", standard.strides()),
        })?;

    let lane_size = length * inner;
    let frame_size = frame_length * inner;
    let mut frames = Vec::with_capacity(outer * num_frames * frame_size);
    for lane in samples.chunks_exact(lane_size.max(1)).take(outer) {
        for i in 0..num_frames {
            let start = i * hop_length;
            let begin = (start * inner).min(lane_size);
            let end = ((start + frame_length) * inner).min(lane_size);
            frames.extend_from_slice(&lane[begin..end]);
            frames.resize(frames.len() + frame_size - (end - begin), pad_value);
        }
    }

    Ok(ArrayD::from_shape_vec(IxDyn(&out_shape), frames)?)
}

/// [`frame`] with bundled parameters.
pub fn frame_with_params<S, D, T>(
    signal: &ArrayBase<S, D>,
    params: &FrameParams<T>,
) -> crate::Result<ArrayD<T>>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Copy,
{
    frame(
        signal,
        params.frame_length,
        params.hop_length,
        params.pad_end,
        params.pad_value,
        params.axis,
    )
}

/// Frame a `[batch, time]` signal into `[batch, num_frames, frame_length]`.
///
/// The time axis is always the last one and the end is always zero padded,
/// so every sample appears in at least one frame. Equivalent to
/// `frame(signal, frame_length, hop_length, true, 0, -1)`.
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use sigframe::frame::frame_batch;
///
/// let pcm = Array2::<f32>::zeros((2, 9152));
/// let frames = frame_batch(&pcm, 512, 180).unwrap();
/// assert_eq!(frames.dim(), (2, 51, 512));
/// ```
pub fn frame_batch<S, T>(
    signal: &ArrayBase<S, Ix2>,
    frame_length: usize,
    hop_length: usize,
) -> crate::Result<Array3<T>>
where
    S: Data<Elem = T>,
    T: Copy + Zero,
{
    let frames = frame(signal, frame_length, hop_length, true, T::zero(), -1)?;
    Ok(frames.into_dimensionality::<Ix3>()?)
}

/// Frame a one-dimensional signal into `[num_frames, frame_length]`.
///
/// # Example
/// ```
/// use sigframe::frame::frame_signal;
///
/// let signal = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let frames = frame_signal(&signal, 4, 2, false, 0.0).unwrap();
/// assert_eq!(frames.nrows(), 2);
/// assert_eq!(frames.ncols(), 4);
/// ```
pub fn frame_signal<T: Copy>(
    y: &[T],
    frame_length: usize,
    hop_length: usize,
    pad_end: bool,
    pad_value: T,
) -> crate::Result<Array2<T>> {
    let frames = frame(
        &ArrayView1::from(y),
        frame_length,
        hop_length,
        pad_end,
        pad_value,
        -1,
    )?;
    Ok(frames.into_dimensionality::<Ix2>()?)
}
