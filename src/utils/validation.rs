use ndarray::{ArrayBase, Data, Dimension};

/// Resolve a possibly negative axis against an array rank.
///
/// Negative axes count from the end, so `-1` names the last dimension.
///
/// # Errors
/// Returns [`crate::Error::AxisOutOfRange`] if the resolved axis is not in
/// `[0, ndim)`.
pub fn resolve_axis(axis: isize, ndim: usize) -> crate::Result<usize> {
    let resolved = if axis < 0 {
        ndim as isize + axis
    } else {
        axis
    };
    if resolved < 0 || resolved >= ndim as isize {
        return Err(crate::Error::AxisOutOfRange { axis, ndim });
    }
    Ok(resolved as usize)
}

/// Check that a length parameter is at least one.
pub fn positive_length(value: usize, name: &'static str) -> crate::Result<usize> {
    if value == 0 {
        return Err(crate::Error::InvalidSize {
            name,
            value,
            reason: "must be > 0",
        });
    }
    Ok(value)
}

/// Convert a signed length parameter, rejecting zero and negative values.
pub fn positive_length_i64(value: i64, name: &'static str) -> crate::Result<usize> {
    if value <= 0 {
        return Err(crate::Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: "must be > 0".to_string(),
        });
    }
    usize::try_from(value).map_err(|_| crate::Error::InvalidParameter {
        name,
        value: value.to_string(),
        reason: "does not fit in usize".to_string(),
    })
}

/// Extract the value of a rank-0 array.
///
/// # Errors
/// Returns [`crate::Error::ShapeMismatch`] if `arg` is not a scalar.
///
/// # Example
/// ```
/// use ndarray::arr0;
/// use sigframe::utils::scalar;
///
/// assert_eq!(scalar(&arr0(7i64), "frame_length").unwrap(), 7);
/// ```
pub fn scalar<S, D, T>(arg: &ArrayBase<S, D>, name: &'static str) -> crate::Result<T>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Copy,
{
    if arg.ndim() != 0 {
        return Err(crate::Error::ShapeMismatch {
            expected: format!("`{name}` to be a scalar (rank 0)"),
            got: format!("rank {} with shape {:?}", arg.ndim(), arg.shape()),
        });
    }
    arg.iter()
        .next()
        .copied()
        .ok_or_else(|| crate::Error::ShapeMismatch {
            expected: format!("`{name}` to hold one element"),
            got: "an empty array".to_string(),
        })
}
