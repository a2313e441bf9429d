//! Numeric helpers shared by the physics and the scrollbar math

/// Limit `value` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: when `min > max` the result
/// is `max`, which is what layout code wants for collapsed ranges.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Linear interpolation from `start` toward `end`
#[inline]
pub fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    start + (end - start) * amount
}

/// `|a - b| <= tolerance`
#[inline]
pub fn almost_equals(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Round to a number of decimal places
#[inline]
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}
