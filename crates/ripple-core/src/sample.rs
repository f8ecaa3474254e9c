//! 16-bit sample conversions.
//!
//! Effects do their mix arithmetic in `f32` and land back on `i16` through
//! [`clip_to_short`], which saturates instead of wrapping.

/// Sample rate assumed when none is configured, in Hz.
pub const DEFAULT_SAMPLE_RATE: f32 = 44100.0;

const I16_MIN: f32 = i16::MIN as f32;
const I16_MAX: f32 = i16::MAX as f32;

/// Saturate an intermediate mix value to the 16-bit signed range.
///
/// Values above 32767 become 32767, values below -32768 become -32768, and
/// in-range values are truncated toward zero. NaN maps to silence.
///
/// # Example
///
/// ```rust
/// use ripple_core::clip_to_short;
///
/// assert_eq!(clip_to_short(1234.9), 1234);
/// assert_eq!(clip_to_short(-1234.9), -1234);
/// assert_eq!(clip_to_short(40000.0), 32767);
/// assert_eq!(clip_to_short(-40000.0), -32768);
/// ```
#[inline]
pub fn clip_to_short(value: f32) -> i16 {
    if value.is_nan() {
        0
    } else if value >= I16_MAX {
        i16::MAX
    } else if value <= I16_MIN {
        i16::MIN
    } else {
        value as i16
    }
}

/// Convert a sample to the normalized `[-1.0, 1.0)` float range.
#[inline]
pub fn i16_to_f32(sample: i16) -> f32 {
    f32::from(sample) / 32768.0
}

/// Convert a normalized float sample to 16-bit, saturating out-of-range input.
#[inline]
pub fn f32_to_i16(sample: f32) -> i16 {
    clip_to_short(libm::roundf(sample * 32768.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_in_range_truncates() {
        assert_eq!(clip_to_short(0.0), 0);
        assert_eq!(clip_to_short(1.5), 1);
        assert_eq!(clip_to_short(-1.5), -1);
        assert_eq!(clip_to_short(32767.0), 32767);
        assert_eq!(clip_to_short(-32768.0), -32768);
    }

    #[test]
    fn clip_saturates_at_bounds() {
        assert_eq!(clip_to_short(32768.0), i16::MAX);
        assert_eq!(clip_to_short(1.0e9), i16::MAX);
        assert_eq!(clip_to_short(-32769.0), i16::MIN);
        assert_eq!(clip_to_short(f32::NEG_INFINITY), i16::MIN);
        assert_eq!(clip_to_short(f32::INFINITY), i16::MAX);
    }

    #[test]
    fn clip_nan_is_silence() {
        assert_eq!(clip_to_short(f32::NAN), 0);
    }

    #[test]
    fn float_conversion_roundtrip() {
        for s in [i16::MIN, -12345, -1, 0, 1, 12345, i16::MAX] {
            assert_eq!(f32_to_i16(i16_to_f32(s)), s);
        }
    }

    #[test]
    fn float_conversion_saturates() {
        assert_eq!(f32_to_i16(1.0), i16::MAX);
        assert_eq!(f32_to_i16(-2.0), i16::MIN);
    }
}
