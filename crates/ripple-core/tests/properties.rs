//! Property-based tests for ripple-core primitives.
//!
//! Tests sample clipping, parameter validation, and delay line integrity
//! using proptest for randomized input generation.

use proptest::prelude::*;
use ripple_core::{DelayLine, clip_to_short, validate_param};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Clipping is monotonic and agrees with truncation inside the range.
    #[test]
    fn clip_is_monotonic(a in -1.0e6f32..1.0e6f32, b in -1.0e6f32..1.0e6f32) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(clip_to_short(lo) <= clip_to_short(hi));
    }

    /// In-range values truncate toward zero.
    #[test]
    fn clip_truncates_in_range(v in -32768.0f32..32767.0f32) {
        prop_assert_eq!(clip_to_short(v), v.trunc() as i16);
    }

    /// Every integral sample value survives clipping unchanged.
    #[test]
    fn clip_is_identity_on_samples(s in any::<i16>()) {
        prop_assert_eq!(clip_to_short(f32::from(s)), s);
    }

    /// Validated values always land inside the range.
    #[test]
    fn validate_stays_in_range(
        value in prop::num::f32::ANY,
        min in -100.0f32..100.0f32,
        span in 0.0f32..100.0f32,
    ) {
        let max = min + span;
        let v = validate_param("p", value, min, max);
        prop_assert!(v >= min && v <= max, "{} not in [{}, {}]", v, min, max);
    }

    /// A delay line of length L returns each written sample exactly L
    /// writes later.
    #[test]
    fn delay_line_integrity(
        len in 1usize..256,
        input in prop::collection::vec(any::<i16>(), 0..1024),
    ) {
        let mut line = DelayLine::with_len(len);
        for (i, &s) in input.iter().enumerate() {
            let expected = if i >= len { input[i - len] } else { 0 };
            prop_assert_eq!(line.read(), expected);
            line.write_advance(s);
        }
    }
}
