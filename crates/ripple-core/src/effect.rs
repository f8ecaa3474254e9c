//! Core Effect trait and related types.
//!
//! The [`Effect`] trait is the foundation of the processing core. Every effect
//! variant implements it, and [`EffectChain`](crate::EffectChain) folds sample
//! blocks through a sequence of them.
//!
//! ## Design Decisions
//!
//! - **16-bit blocks**: Effects consume one block of `i16` PCM at a time.
//!   The block size is chosen by the caller and may change between calls.
//!
//! - **Borrowed input, `Cow` output**: `process` never mutates the block it
//!   is given. An effect that leaves the block unchanged (disabled, or a
//!   parameter setting that is an identity) returns `Cow::Borrowed(input)`
//!   and allocates nothing.
//!
//! - **Object-safe**: The trait is object-safe so chains can hold
//!   `Box<dyn Effect>` values of different variants.
//!
//! - **Enable gate**: Every effect carries an enabled flag. A disabled effect
//!   is an exact identity, so disabling an effect is indistinguishable from
//!   removing it from the chain.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::borrow::Cow;
use core::fmt;

/// Stable identifier of an effect instance.
///
/// Assigned at construction and never changed. Chains use it for lookup and
/// removal; the display [`name`](Effect::name) plays no part in identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EffectId(pub u32);

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Core trait for all audio effects.
///
/// # Contract
///
/// - `process` returns a block with exactly `input.len()` samples.
/// - When [`is_enabled`](Self::is_enabled) is `false`, `process` returns
///   the input unchanged and leaves internal state untouched.
/// - An empty block yields an empty block.
/// - `process` never panics for any input block.
///
/// # Thread Safety
///
/// There is no internal locking. Parameter setters and `process` must not
/// run concurrently on the same instance; callers that drive an effect from
/// both an audio callback and a UI thread serialise access themselves.
///
/// # Example
///
/// ```rust
/// use std::borrow::Cow;
/// use ripple_core::{Effect, EffectId};
///
/// struct Half {
///     enabled: bool,
/// }
///
/// impl Effect for Half {
///     fn id(&self) -> EffectId {
///         EffectId(7)
///     }
///
///     fn name(&self) -> &str {
///         "Half"
///     }
///
///     fn is_enabled(&self) -> bool {
///         self.enabled
///     }
///
///     fn set_enabled(&mut self, enabled: bool) {
///         self.enabled = enabled;
///     }
///
///     fn process<'a>(&mut self, input: &'a [i16]) -> Cow<'a, [i16]> {
///         if !self.enabled {
///             return Cow::Borrowed(input);
///         }
///         Cow::Owned(input.iter().map(|s| s / 2).collect())
///     }
/// }
///
/// let mut half = Half { enabled: true };
/// assert_eq!(half.process(&[100, -50]).as_ref(), &[50, -25]);
/// ```
pub trait Effect {
    /// Stable identifier, set at construction.
    fn id(&self) -> EffectId;

    /// Display label. Not used for identity.
    fn name(&self) -> &str;

    /// Whether the effect currently transforms audio.
    fn is_enabled(&self) -> bool;

    /// Flip the enable gate.
    ///
    /// Effects with internal buffers allocate them here the first time they
    /// are enabled, so the first enabled `process` call does not have to.
    fn set_enabled(&mut self, enabled: bool);

    /// Process one block of samples.
    ///
    /// Returns `Cow::Borrowed(input)` when the block passes through
    /// unchanged, and a newly allocated block of the same length otherwise.
    fn process<'a>(&mut self, input: &'a [i16]) -> Cow<'a, [i16]>;

    /// Reset internal state.
    ///
    /// Clears history (delay lines and the like) without changing
    /// parameters. Default is a no-op for stateless effects.
    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use super::*;
    use alloc::vec;

    struct Offset {
        amount: i16,
        enabled: bool,
    }

    impl Effect for Offset {
        fn id(&self) -> EffectId {
            EffectId(1)
        }
        fn name(&self) -> &str {
            "Offset"
        }
        fn is_enabled(&self) -> bool {
            self.enabled
        }
        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }
        fn process<'a>(&mut self, input: &'a [i16]) -> Cow<'a, [i16]> {
            if !self.enabled {
                return Cow::Borrowed(input);
            }
            Cow::Owned(input.iter().map(|s| s.saturating_add(self.amount)).collect())
        }
    }

    #[test]
    fn disabled_effect_borrows_input() {
        let mut fx = Offset {
            amount: 5,
            enabled: false,
        };
        let input = [1, 2, 3];
        let out = fx.process(&input);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert!(core::ptr::eq(out.as_ref(), &input[..]));
    }

    #[test]
    fn enabled_effect_allocates_same_length() {
        let mut fx = Offset {
            amount: 5,
            enabled: true,
        };
        let out = fx.process(&[1, 2, 3]);
        assert_eq!(out.into_owned(), vec![6, 7, 8]);
    }

    #[test]
    fn default_reset_is_noop() {
        let mut fx = Offset {
            amount: 1,
            enabled: true,
        };
        fx.reset();
        assert_eq!(fx.process(&[0]).as_ref(), &[1]);
    }

    #[test]
    fn effect_id_display() {
        assert_eq!(alloc::format!("{}", EffectId(42)), "42");
    }
}
