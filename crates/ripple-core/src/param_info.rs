//! Parameter introspection for discoverable effect parameters.
//!
//! This module provides the [`ParameterInfo`] trait and supporting types that
//! let collaborators (a configuration UI, a preset loader, the CLI) discover
//! and set an effect's parameters without knowing its concrete type.
//!
//! # Design
//!
//! Parameters are accessed by zero-based index. Each one is described by a
//! [`ParamDescriptor`] carrying its range, default, and display unit. Setters
//! clamp into the descriptor's range; see [`validate_param`](crate::validate_param).
//!
//! # Example
//!
//! ```rust
//! use ripple_core::{ParameterInfo, ParamDescriptor, ParamUnit};
//!
//! struct Trim {
//!     amount: f32,
//! }
//!
//! impl ParameterInfo for Trim {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::new("Amount", "Amt", ParamUnit::Ratio, 0.0, 2.0, 1.0)),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f32 {
//!         match index {
//!             0 => self.amount,
//!             _ => 0.0,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f32) {
//!         if index == 0 {
//!             self.amount = value.clamp(0.0, 2.0);
//!         }
//!     }
//! }
//!
//! let mut trim = Trim { amount: 1.0 };
//! let idx = trim.find_param_by_name("amt").unwrap();
//! trim.set_param(idx, 9.0);
//! assert_eq!(trim.get_param(idx), 2.0);
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::format;
use alloc::string::String;

/// Trait for effects that expose introspectable parameters.
///
/// # Parameter Indexing
///
/// The index of a parameter must be stable for the lifetime of the effect
/// instance. Use [`param_count`](Self::param_count) to determine valid
/// indices.
pub trait ParameterInfo {
    /// Returns the number of parameters this effect exposes.
    fn param_count(&self) -> usize;

    /// Returns the descriptor for the parameter at the given index.
    ///
    /// Returns `None` if `index >= param_count()`.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Gets the current value of the parameter at the given index.
    ///
    /// Returns `0.0` for out-of-range indices.
    fn get_param(&self, index: usize) -> f32;

    /// Sets the value of the parameter at the given index.
    ///
    /// Implementations clamp the value to the descriptor's range.
    /// Out-of-range indices are ignored.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches against [`ParamDescriptor::name`],
    /// [`ParamDescriptor::short_name`] and [`ParamDescriptor::string_id`].
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || desc.string_id.eq_ignore_ascii_case(name)
            })
        })
    }
}

/// Describes a single parameter's metadata for display and validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Delay Time").
    pub name: &'static str,

    /// Short name for compact displays, 8 characters or less.
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value.
    pub min: f32,

    /// Maximum allowed value.
    pub max: f32,

    /// Value a freshly constructed effect starts with.
    pub default: f32,

    /// Recommended increment for stepped controls.
    pub step: f32,

    /// Lowercase key used in presets and on the command line
    /// (e.g., `"delay"`, `"decay"`). Empty means unassigned.
    pub string_id: &'static str,
}

impl ParamDescriptor {
    /// Create a descriptor with the given range and default.
    ///
    /// `step` defaults to one hundredth of the range and `string_id` is
    /// left unassigned; see [`with_step`](Self::with_step) and
    /// [`with_id`](Self::with_id).
    pub fn new(
        name: &'static str,
        short_name: &'static str,
        unit: ParamUnit,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit,
            min,
            max,
            default,
            step: (max - min) / 100.0,
            string_id: "",
        }
    }

    /// Time parameter in seconds.
    pub fn time_seconds(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self::new(name, short_name, ParamUnit::Seconds, min, max, default).with_step(0.01)
    }

    /// Linear multiplier parameter (1.0 = unity).
    pub fn ratio(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self::new(name, short_name, ParamUnit::Ratio, min, max, default).with_step(0.05)
    }

    /// Sets the preset/CLI key.
    ///
    /// Builder style; call after a factory method.
    pub const fn with_id(mut self, string_id: &'static str) -> Self {
        self.string_id = string_id;
        self
    }

    /// Sets the recommended step.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Clamps a value to this parameter's valid range.
    ///
    /// Silent; use [`validate`](Self::validate) from setters so the clamp is
    /// reported.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ripple_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::ratio("Gain", "Gain", 0.0, 5.0, 1.0);
    /// assert_eq!(desc.clamp(2.0), 2.0);
    /// assert_eq!(desc.clamp(-1.0), 0.0);
    /// assert_eq!(desc.clamp(9.0), 5.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Clamps a value to this parameter's range, reporting the clamp.
    #[inline]
    pub fn validate(&self, value: f32) -> f32 {
        crate::validate_param(self.name, value, self.min, self.max)
    }

    /// Format a value with this parameter's unit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ripple_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::time_seconds("Delay", "Delay", 0.1, 2.0, 0.5);
    /// assert_eq!(desc.format_value(0.25), "0.25 s");
    /// ```
    pub fn format_value(&self, value: f32) -> String {
        match self.unit {
            ParamUnit::Seconds => format!("{value:.2} s"),
            ParamUnit::Ratio => format!("{value:.2}x"),
            ParamUnit::Percent => format!("{:.0}%", value * 100.0),
            ParamUnit::None => format!("{value:.2}"),
        }
    }
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Seconds, for delay times.
    Seconds,

    /// Linear multiplier, 1.0 = unity.
    Ratio,

    /// Fraction shown as a percentage (0.5 → "50%"), for feedback amounts.
    Percent,

    /// Unitless.
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TwoParams {
        values: [f32; 2],
    }

    impl ParameterInfo for TwoParams {
        fn param_count(&self) -> usize {
            2
        }

        fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
            match index {
                0 => Some(
                    ParamDescriptor::time_seconds("Delay Time", "Delay", 0.1, 2.0, 0.5)
                        .with_id("delay"),
                ),
                1 => Some(
                    ParamDescriptor::new("Decay", "Decay", ParamUnit::Percent, 0.0, 0.95, 0.5)
                        .with_id("decay"),
                ),
                _ => None,
            }
        }

        fn get_param(&self, index: usize) -> f32 {
            self.values.get(index).copied().unwrap_or(0.0)
        }

        fn set_param(&mut self, index: usize, value: f32) {
            if let Some(desc) = self.param_info(index) {
                self.values[index] = desc.clamp(value);
            }
        }
    }

    #[test]
    fn find_param_matches_any_name_case_insensitively() {
        let p = TwoParams { values: [0.5, 0.5] };
        assert_eq!(p.find_param_by_name("delay time"), Some(0));
        assert_eq!(p.find_param_by_name("DELAY"), Some(0));
        assert_eq!(p.find_param_by_name("decay"), Some(1));
        assert_eq!(p.find_param_by_name("mix"), None);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut p = TwoParams { values: [0.5, 0.5] };
        p.set_param(5, 1.0);
        assert_eq!(p.get_param(5), 0.0);
        assert!(p.param_info(2).is_none());
    }

    #[test]
    fn format_units() {
        let pct = ParamDescriptor::new("Decay", "Decay", ParamUnit::Percent, 0.0, 0.95, 0.5);
        assert_eq!(pct.format_value(0.5), "50%");
        let ratio = ParamDescriptor::ratio("Gain", "Gain", 0.0, 5.0, 1.0);
        assert_eq!(ratio.format_value(2.0), "2.00x");
    }
}
