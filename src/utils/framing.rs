/// Pad an array to a specified length, centering the data.
///
/// When the total padding is odd, the leading side receives the extra
/// element. If the array is longer than `length`, it is trimmed from both
/// ends instead.
///
/// # Example
/// ```
/// use sigframe::utils::pad_center;
///
/// assert_eq!(pad_center(&[1, 1, 1], 6, 0), vec![0, 0, 1, 1, 1, 0]);
/// assert_eq!(pad_center(&[1, 2, 3, 4, 5], 3, 0), vec![2, 3, 4]);
/// ```
pub fn pad_center<T: Clone>(data: &[T], length: usize, fill_value: T) -> Vec<T> {
    if data.len() >= length {
        let start = (data.len() - length) / 2;
        return data[start..start + length].to_vec();
    }

    let pad_total = length - data.len();
    let pad_left = pad_total.div_ceil(2);

    let mut result = Vec::with_capacity(length);
    result.resize(pad_left, fill_value.clone());
    result.extend_from_slice(data);
    result.resize(length, fill_value);
    result
}

/// Integer division rounding toward negative infinity.
///
/// `b` must be non-zero.
pub fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if (a % b != 0) && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

/// Integer division rounding toward positive infinity.
///
/// Computed as `-floor(-a / b)` so no floating point is involved.
pub fn ceil_div(a: i64, b: i64) -> i64 {
    -floor_div(-a, b)
}
