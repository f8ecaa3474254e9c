//! Clamp-and-report parameter validation.
//!
//! Effect setters never reject a value. Anything outside the allowed range is
//! replaced by the nearest bound and the replacement becomes the new state.
//! The clamp is reported as a `tracing` warning when the `tracing` feature is
//! enabled; whichever subscriber the host installs decides where it goes.

/// Clamp `value` into `[min, max]`, reporting when it had to be changed.
///
/// NaN has no nearest bound and maps to `min`.
///
/// # Example
///
/// ```rust
/// use ripple_core::validate_param;
///
/// assert_eq!(validate_param("Gain", 2.0, 0.0, 5.0), 2.0);
/// assert_eq!(validate_param("Gain", 7.5, 0.0, 5.0), 5.0);
/// assert_eq!(validate_param("Gain", -1.0, 0.0, 5.0), 0.0);
/// assert_eq!(validate_param("Gain", f32::NAN, 0.0, 5.0), 0.0);
/// ```
#[inline]
pub fn validate_param(name: &str, value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "inverted range for {name}");

    let clamped = if value.is_nan() {
        min
    } else if value < min {
        min
    } else if value > max {
        max
    } else {
        return value;
    };

    #[cfg(feature = "tracing")]
    tracing::warn!(
        param = name,
        requested = value,
        clamped,
        min,
        max,
        "parameter out of range, clamped"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = name;

    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_passes_through() {
        assert_eq!(validate_param("Decay", 0.5, 0.0, 0.95), 0.5);
        assert_eq!(validate_param("Decay", 0.0, 0.0, 0.95), 0.0);
        assert_eq!(validate_param("Decay", 0.95, 0.0, 0.95), 0.95);
    }

    #[test]
    fn clamps_to_nearest_bound() {
        assert_eq!(validate_param("Delay", 0.01, 0.1, 2.0), 0.1);
        assert_eq!(validate_param("Delay", 10.0, 0.1, 2.0), 2.0);
    }

    #[test]
    fn infinities_clamp() {
        assert_eq!(validate_param("Gain", f32::INFINITY, 0.0, 5.0), 5.0);
        assert_eq!(validate_param("Gain", f32::NEG_INFINITY, 0.0, 5.0), 0.0);
    }

    #[test]
    fn nan_maps_to_min() {
        assert_eq!(validate_param("Decay", f32::NAN, 0.0, 0.95), 0.0);
    }
}
