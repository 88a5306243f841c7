//! Window functions.
//!
//! All windows are periodic (the "fftbins" convention): a window of length
//! `n` is the first `n` points of a symmetric window of length `n + 1`, which
//! is what short-time spectral analysis expects.

use num_traits::Float;
use std::f64::consts::PI;

fn cast<T: Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

fn periodic<T: Float>(n: usize, f: impl Fn(f64) -> f64) -> Vec<T> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![T::one()];
    }
    let m = n as f64;
    (0..n).map(|i| cast(f(i as f64 / m))).collect()
}

/// Compute a periodic Hann (raised cosine) window.
///
/// The Hann window is one of the most commonly used windows in spectral
/// analysis. It has good frequency resolution and moderate spectral leakage.
///
/// # Arguments
/// * `n` - Window length
///
/// # Returns
/// Hann window of length `n`
///
/// # Example
/// ```
/// use sigframe::window::hann;
///
/// let w: Vec<f32> = hann(4);
/// assert_eq!(w, vec![0.0, 0.5, 1.0, 0.5]);
/// ```
pub fn hann<T: Float>(n: usize) -> Vec<T> {
    periodic(n, |x| 0.5 - 0.5 * (2.0 * PI * x).cos())
}

/// Compute a Hamming window.
///
/// Similar to Hann, with coefficients that reduce the first side lobe.
///
/// # Arguments
/// * `n` - Window length
///
/// # Returns
/// Hamming window of length `n`
pub fn hamming<T: Float>(n: usize) -> Vec<T> {
    periodic(n, |x| 0.54 - 0.46 * (2.0 * PI * x).cos())
}

/// Compute a Blackman window.
///
/// Better side lobe suppression than Hann or Hamming, at the cost of a wider
/// main lobe.
///
/// # Arguments
/// * `n` - Window length
///
/// # Returns
/// Blackman window of length `n`
pub fn blackman<T: Float>(n: usize) -> Vec<T> {
    periodic(n, |x| {
        let a = 2.0 * PI * x;
        0.42 - 0.5 * a.cos() + 0.08 * (2.0 * a).cos()
    })
}

/// Compute a Bartlett (triangular) window.
///
/// # Arguments
/// * `n` - Window length
///
/// # Returns
/// Bartlett window of length `n`, peaking at 1 in the middle
pub fn bartlett<T: Float>(n: usize) -> Vec<T> {
    periodic(n, |x| 1.0 - (2.0 * x - 1.0).abs())
}

/// Compute a rectangular window (all ones).
///
/// Multiplying by this window leaves frames unchanged.
///
/// # Arguments
/// * `n` - Window length
///
/// # Returns
/// Vector of `n` ones
pub fn rectangular<T: Float>(n: usize) -> Vec<T> {
    vec![T::one(); n]
}

/// Window type specification for [`get_window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    #[default]
    Hann,
    Hamming,
    Blackman,
    Bartlett,
    Rectangular,
}

impl WindowType {
    /// Parse a window type from a string.
    ///
    /// # Arguments
    /// * `name` - Window name (case-insensitive)
    ///
    /// # Returns
    /// Some(WindowType) if recognized, None otherwise
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "hann" | "hanning" => Some(WindowType::Hann),
            "hamming" => Some(WindowType::Hamming),
            "blackman" => Some(WindowType::Blackman),
            "bartlett" | "triangle" => Some(WindowType::Bartlett),
            "rectangular" | "boxcar" | "ones" => Some(WindowType::Rectangular),
            _ => None,
        }
    }
}

/// Get a window of the specified type and length.
///
/// # Example
/// ```
/// use sigframe::window::{WindowType, get_window, get_window_from_str};
///
/// let w1: Vec<f64> = get_window(WindowType::Hann, 512);
/// let w2: Vec<f32> = get_window_from_str("hamming", 512).unwrap();
/// assert_eq!(w1.len(), w2.len());
/// ```
pub fn get_window<T: Float>(window: WindowType, n: usize) -> Vec<T> {
    log::trace!("building {window:?} window of length {n}");
    match window {
        WindowType::Hann => hann(n),
        WindowType::Hamming => hamming(n),
        WindowType::Blackman => blackman(n),
        WindowType::Bartlett => bartlett(n),
        WindowType::Rectangular => rectangular(n),
    }
}

/// Get a window from a string specification.
///
/// Returns `None` if the name is not recognized.
pub fn get_window_from_str<T: Float>(name: &str, n: usize) -> Option<Vec<T>> {
    WindowType::parse(name).map(|wtype| get_window(wtype, n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_window_lengths() {
        for kind in [
            WindowType::Hann,
            WindowType::Hamming,
            WindowType::Blackman,
            WindowType::Bartlett,
            WindowType::Rectangular,
        ] {
            assert_eq!(get_window::<f32>(kind, 0).len(), 0);
            assert_eq!(get_window::<f32>(kind, 1), vec![1.0]);
            assert_eq!(get_window::<f64>(kind, 16).len(), 16);
        }
    }

    #[test]
    fn test_hann_is_periodic() {
        let w: Vec<f64> = hann(8);
        assert_relative_eq!(w[0], 0.0);
        assert_relative_eq!(w[4], 1.0, epsilon = 1e-12);
        // symmetric about the centre sample
        for i in 1..4 {
            assert_relative_eq!(w[4 - i], w[4 + i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_hamming_endpoints() {
        let w: Vec<f32> = hamming(8);
        assert_relative_eq!(w[0], 0.08, epsilon = 1e-6);
        assert_relative_eq!(w[4], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_blackman_peak() {
        let w: Vec<f64> = blackman(16);
        assert_relative_eq!(w[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(w[8], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bartlett_shape() {
        let w: Vec<f32> = bartlett(4);
        assert_eq!(w, vec![0.0, 0.5, 1.0, 0.5]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(WindowType::parse("HANN"), Some(WindowType::Hann));
        assert_eq!(WindowType::parse("hanning"), Some(WindowType::Hann));
        assert_eq!(WindowType::parse("triangle"), Some(WindowType::Bartlett));
        assert_eq!(WindowType::parse("boxcar"), Some(WindowType::Rectangular));
        assert_eq!(WindowType::parse("kaiser"), None);
        assert!(get_window_from_str::<f32>("nope", 8).is_none());
    }
}
