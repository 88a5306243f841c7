//! Frame-count arithmetic and static shape inference.
//!
//! These helpers compute the geometry of a framing operation without touching
//! any sample data. [`frame_shape`] works on fully known shapes and is what
//! [`crate::frame::frame`] uses to pre-size its output. [`infer_frame_shape`]
//! accepts partially known shapes and degrades to unknown dimensions instead
//! of failing.

use crate::utils::{ceil_div, positive_length, resolve_axis};

/// A dimension that may not be known until the signal is available.
pub type StaticDim = Option<usize>;

/// Number of frames produced from `length` samples.
///
/// With `pad_end`, this is `ceil(length / hop_length)`: every sample starts
/// or lands in some frame. Without it, only frames lying entirely inside the
/// signal are counted, and a signal shorter than one frame yields zero.
///
/// `frame_length` and `hop_length` must be at least one.
///
/// # Example
/// ```
/// use sigframe::shape::frame_count;
///
/// assert_eq!(frame_count(9, 4, 2, false), 3);
/// assert_eq!(frame_count(9, 4, 2, true), 5);
/// assert_eq!(frame_count(3, 4, 2, false), 0);
/// ```
pub fn frame_count(length: usize, frame_length: usize, hop_length: usize, pad_end: bool) -> usize {
    if pad_end {
        ceil_div(length as i64, hop_length as i64).max(0) as usize
    } else if frame_length > length {
        0
    } else {
        1 + (length - frame_length) / hop_length
    }
}

/// Length of the time axis spanned by the frames of an end-padded signal.
///
/// Equals `frame_length + hop_length * (num_frames - 1)` for the padded frame
/// count, which is the shortest extension that completes the last frame. The
/// number of pad samples is `padded_length(..).saturating_sub(length)`: when
/// the hop exceeds the frame length the span can end before the signal does,
/// and those trailing samples are simply not covered. An empty signal has no
/// frames and is not padded.
pub fn padded_length(length: usize, frame_length: usize, hop_length: usize) -> usize {
    match frame_count(length, frame_length, hop_length, true) {
        0 => length,
        n => frame_length + hop_length * (n - 1),
    }
}

/// Concrete output shape of framing `shape` along `axis`.
///
/// # Errors
/// Shape error for a rank-0 input, domain error for a zero length, range
/// error for an axis outside the input rank.
pub fn frame_shape(
    shape: &[usize],
    frame_length: usize,
    hop_length: usize,
    pad_end: bool,
    axis: isize,
) -> crate::Result<Vec<usize>> {
    if shape.is_empty() {
        return Err(rank_error(0));
    }
    positive_length(frame_length, "frame_length")?;
    positive_length(hop_length, "hop_length")?;
    let axis = resolve_axis(axis, shape.len())?;

    let num_frames = frame_count(shape[axis], frame_length, hop_length, pad_end);
    let mut out = Vec::with_capacity(shape.len() + 1);
    out.extend_from_slice(&shape[..axis]);
    out.push(num_frames);
    out.push(frame_length);
    out.extend_from_slice(&shape[axis + 1..]);
    Ok(out)
}

/// Infer the output shape of a framing operation ahead of execution.
///
/// `shape` is `None` when even the rank is unknown; individual dimensions and
/// the scalar parameters may also be unknown. Whatever cannot be derived is
/// reported as `None`:
///
/// * unknown rank → `Ok(None)`
/// * unknown axis → `rank + 1` unknown dimensions
/// * unknown time dimension, frame length or hop → unknown frame count
///
/// Values that *are* known are validated with the same rules as framing
/// itself, so a bad axis or a zero hop is reported here rather than later.
///
/// # Example
/// ```
/// use sigframe::shape::{StaticDim, infer_frame_shape};
///
/// let shape: [StaticDim; 3] = [None, Some(9), Some(2)];
/// let out = infer_frame_shape(Some(&shape[..]), Some(4), Some(2), false, Some(1)).unwrap();
/// assert_eq!(out, Some(vec![None, Some(3), Some(4), Some(2)]));
/// ```
pub fn infer_frame_shape(
    shape: Option<&[StaticDim]>,
    frame_length: Option<usize>,
    hop_length: Option<usize>,
    pad_end: bool,
    axis: Option<isize>,
) -> crate::Result<Option<Vec<StaticDim>>> {
    let Some(shape) = shape else {
        return Ok(None);
    };
    if shape.is_empty() {
        return Err(rank_error(0));
    }
    if let Some(l) = frame_length {
        positive_length(l, "frame_length")?;
    }
    if let Some(h) = hop_length {
        positive_length(h, "hop_length")?;
    }
    let Some(axis) = axis else {
        return Ok(Some(vec![None; shape.len() + 1]));
    };
    let axis = resolve_axis(axis, shape.len())?;

    let num_frames = match (shape[axis], frame_length, hop_length) {
        (Some(len), Some(l), Some(h)) => Some(frame_count(len, l, h, pad_end)),
        _ => None,
    };
    log::trace!("inferred frame count {num_frames:?} for axis {axis} of {shape:?}");

    let mut out = Vec::with_capacity(shape.len() + 1);
    out.extend_from_slice(&shape[..axis]);
    out.push(num_frames);
    out.push(frame_length);
    out.extend_from_slice(&shape[axis + 1..]);
    Ok(Some(out))
}

pub(crate) fn rank_error(ndim: usize) -> crate::Error {
    crate::Error::ShapeMismatch {
        expected: "signal of rank >= 1".to_string(),
        got: format!("rank {ndim}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_count_without_padding() {
        assert_eq!(frame_count(9, 4, 2, false), 3);
        assert_eq!(frame_count(8, 4, 2, false), 3);
        assert_eq!(frame_count(4, 4, 2, false), 1);
        assert_eq!(frame_count(3, 4, 2, false), 0);
        assert_eq!(frame_count(0, 1, 1, false), 0);
        assert_eq!(frame_count(10, 2, 5, false), 2);
    }

    #[test]
    fn test_frame_count_with_padding() {
        assert_eq!(frame_count(9, 4, 2, true), 5);
        assert_eq!(frame_count(8, 4, 2, true), 4);
        assert_eq!(frame_count(1, 4, 2, true), 1);
        assert_eq!(frame_count(0, 4, 2, true), 0);
    }

    #[test]
    fn test_padded_length() {
        assert_eq!(padded_length(9, 4, 2), 12);
        assert_eq!(padded_length(8, 4, 4), 8);
        assert_eq!(padded_length(0, 4, 2), 0);
        // hop larger than frame: last frame starts at 6 and ends at 8
        assert_eq!(padded_length(7, 2, 3), 8);
        // span ends before the signal; nothing to pad
        assert_eq!(padded_length(8, 1, 3), 7);
    }

    #[test]
    fn test_frame_shape_inner_axis() {
        let out = frame_shape(&[2, 9, 3], 4, 2, false, 1).unwrap();
        assert_eq!(out, vec![2, 3, 4, 3]);
        let out = frame_shape(&[2, 9, 3], 4, 2, true, -2).unwrap();
        assert_eq!(out, vec![2, 5, 4, 3]);
    }

    #[test]
    fn test_frame_shape_errors() {
        assert!(frame_shape(&[], 4, 2, false, -1).unwrap_err().is_shape());
        assert!(frame_shape(&[9], 0, 2, false, -1).unwrap_err().is_domain());
        assert!(frame_shape(&[9], 4, 0, false, -1).unwrap_err().is_domain());
        assert!(frame_shape(&[2, 9], 4, 2, false, 5).unwrap_err().is_range());
        assert!(frame_shape(&[2, 9], 4, 2, false, -3).unwrap_err().is_range());
    }

    #[test]
    fn test_infer_unknown_rank() {
        assert_eq!(
            infer_frame_shape(None, Some(4), Some(2), true, Some(-1)).unwrap(),
            None
        );
    }

    #[test]
    fn test_infer_unknown_axis() {
        let shape: [StaticDim; 2] = [Some(2), Some(9)];
        let out = infer_frame_shape(Some(&shape[..]), Some(4), Some(2), true, None).unwrap();
        assert_eq!(out, Some(vec![None, None, None]));
    }

    #[test]
    fn test_infer_unknown_parameters() {
        let shape: [StaticDim; 2] = [Some(2), Some(9)];
        let out = infer_frame_shape(Some(&shape[..]), None, Some(2), false, Some(-1)).unwrap();
        assert_eq!(out, Some(vec![Some(2), None, None]));

        let out = infer_frame_shape(Some(&shape[..]), Some(4), None, false, Some(-1)).unwrap();
        assert_eq!(out, Some(vec![Some(2), None, Some(4)]));

        let shape: [StaticDim; 2] = [Some(2), None];
        let out = infer_frame_shape(Some(&shape[..]), Some(4), Some(2), true, Some(-1)).unwrap();
        assert_eq!(out, Some(vec![Some(2), None, Some(4)]));
    }

    #[test]
    fn test_infer_matches_concrete() {
        let shape: [StaticDim; 2] = [Some(3), Some(100)];
        let out = infer_frame_shape(Some(&shape[..]), Some(16), Some(5), true, Some(1)).unwrap();
        let concrete = frame_shape(&[3, 100], 16, 5, true, 1).unwrap();
        let known: Vec<usize> = out.unwrap().into_iter().map(|d| d.unwrap()).collect();
        assert_eq!(known, concrete);
    }

    #[test]
    fn test_infer_rejects_known_bad_values() {
        let shape: [StaticDim; 2] = [Some(2), Some(9)];
        assert!(
            infer_frame_shape(Some(&shape[..]), Some(4), Some(2), false, Some(5))
                .unwrap_err()
                .is_range()
        );
        assert!(
            infer_frame_shape(Some(&shape[..]), Some(0), None, false, None)
                .unwrap_err()
                .is_domain()
        );
        assert!(
            infer_frame_shape(Some(&[] as &[StaticDim]), Some(4), Some(2), false, Some(0))
                .unwrap_err()
                .is_shape()
        );
    }
}
