//! Quantization of continuous draws onto a fixed step grid.

/// Snaps `value` to the nearest integer multiple of the quantum `q`.
///
/// A zero quantum is not special-cased: the division follows IEEE-754
/// semantics and the result is `NaN`.
///
/// # Examples
///
/// ```
/// use samplespec::quantize;
///
/// assert_eq!(quantize(0.25, 0.6), 0.5);
/// assert_eq!(quantize(1.0, 89.7), 90.0);
/// ```
#[must_use]
pub fn quantize(q: f64, value: f64) -> f64 {
    q * (value / q).round()
}

/// Applies [`quantize`] element-wise, in place.
pub fn quantize_slice(q: f64, values: &mut [f64]) {
    for value in values {
        *value = quantize(q, *value);
    }
}
