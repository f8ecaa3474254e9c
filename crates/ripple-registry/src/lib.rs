//! Effect lookup by kind name.
//!
//! Presets, the CLI and UI racks name effects by a short lowercase kind
//! (`"gain"`, `"echo"`). [`EffectRegistry`] maps that kind to a descriptor
//! for listings and to a constructor that returns a boxed effect at its
//! default settings.
//!
//! # Example
//!
//! ```rust
//! use ripple_core::{Effect, EffectId, EffectWithParams};
//! use ripple_registry::EffectRegistry;
//!
//! let registry = EffectRegistry::new();
//!
//! for desc in registry.all_effects() {
//!     println!("{:6} {}", desc.kind, desc.description);
//! }
//!
//! let mut gain = registry.create("gain", EffectId(1), 44100.0).unwrap();
//! let idx = registry.param_index_by_name("gain", "gain").unwrap();
//! gain.effect_set_param(idx, 2.0);
//! assert_eq!(gain.process(&[100]).as_ref(), &[200]);
//! ```
//!
//! # no_std
//!
//! Builds without `std` when default features are off; only `alloc` is
//! needed for the boxed effects and descriptor lists.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

use ripple_core::{BoxedEffect, DEFAULT_SAMPLE_RATE, EffectId, EffectWithParams};
use ripple_effects::{EchoEffect, GainEffect};

/// Broad grouping used when listing effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectCategory {
    /// Level and utility processing.
    Utility,
    /// Effects built on a delay line.
    TimeBased,
}

impl EffectCategory {
    /// Label for listings.
    pub const fn name(&self) -> &'static str {
        match self {
            EffectCategory::Utility => "Utility",
            EffectCategory::TimeBased => "Time-Based",
        }
    }
}

/// Static facts about one effect kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectDescriptor {
    /// Lowercase key used in presets and chain strings.
    pub kind: &'static str,
    /// Display name, matching [`Effect::name`](ripple_core::Effect::name).
    pub name: &'static str,
    /// One-line summary.
    pub description: &'static str,
    /// Listing group.
    pub category: EffectCategory,
    /// How many parameters the effect exposes.
    pub param_count: usize,
}

/// Builds an effect from its id and the stream's sample rate.
type Constructor = fn(EffectId, f32) -> BoxedEffect;

struct Builtin {
    descriptor: EffectDescriptor,
    construct: Constructor,
}

fn new_gain(id: EffectId, _sample_rate: f32) -> BoxedEffect {
    Box::new(GainEffect::new(id))
}

fn new_echo(id: EffectId, sample_rate: f32) -> BoxedEffect {
    Box::new(EchoEffect::new(id, sample_rate))
}

static BUILTINS: [Builtin; 2] = [
    Builtin {
        descriptor: EffectDescriptor {
            kind: "gain",
            name: "Gain",
            description: "Linear volume scaling with 16-bit saturation",
            category: EffectCategory::Utility,
            param_count: 1,
        },
        construct: new_gain,
    },
    Builtin {
        descriptor: EffectDescriptor {
            kind: "echo",
            name: "Echo",
            description: "Single-tap echo with decaying repeat",
            category: EffectCategory::TimeBased,
            param_count: 2,
        },
        construct: new_echo,
    },
];

/// Every effect kind this build knows how to construct.
///
/// Constructed effects carry their own defaults, including the enable
/// gate: gain comes up enabled, echo comes up disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct EffectRegistry {
    _private: (),
}

impl EffectRegistry {
    /// Registry of the built-in effects.
    pub const fn new() -> Self {
        Self { _private: () }
    }

    fn entry(kind: &str) -> Option<&'static Builtin> {
        BUILTINS.iter().find(|b| b.descriptor.kind == kind)
    }

    /// All descriptors, in listing order.
    pub fn all_effects(&self) -> Vec<&EffectDescriptor> {
        BUILTINS.iter().map(|b| &b.descriptor).collect()
    }

    /// Descriptors in one category.
    pub fn effects_in_category(&self, category: EffectCategory) -> Vec<&EffectDescriptor> {
        BUILTINS
            .iter()
            .map(|b| &b.descriptor)
            .filter(|d| d.category == category)
            .collect()
    }

    /// Descriptor for a kind. Kinds are matched exactly.
    pub fn get(&self, kind: &str) -> Option<&EffectDescriptor> {
        Self::entry(kind).map(|b| &b.descriptor)
    }

    /// A new effect of `kind` with default parameters, or `None` for an
    /// unknown kind.
    pub fn create(&self, kind: &str, id: EffectId, sample_rate: f32) -> Option<BoxedEffect> {
        Self::entry(kind).map(|b| (b.construct)(id, sample_rate))
    }

    /// Resolve a parameter name to its index for `kind`.
    ///
    /// Builds a throwaway instance to read its descriptors. Matching
    /// follows [`ParameterInfo::find_param_by_name`](ripple_core::ParameterInfo::find_param_by_name).
    pub fn param_index_by_name(&self, kind: &str, param_name: &str) -> Option<usize> {
        self.create(kind, EffectId::default(), DEFAULT_SAMPLE_RATE)?
            .effect_find_param(param_name)
    }

    /// Number of kinds.
    pub fn len(&self) -> usize {
        BUILTINS.len()
    }

    /// Always false for the built-in set.
    pub fn is_empty(&self) -> bool {
        BUILTINS.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_core::Effect;

    #[test]
    fn knows_gain_and_echo() {
        let registry = EffectRegistry::new();
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        let kinds: Vec<_> = registry.all_effects().iter().map(|d| d.kind).collect();
        assert_eq!(kinds, ["gain", "echo"]);
    }

    #[test]
    fn lookup_is_exact() {
        let registry = EffectRegistry::new();
        assert_eq!(registry.get("echo").map(|d| d.name), Some("Echo"));
        assert!(registry.get("Echo").is_none());
        assert!(registry.get("reverb").is_none());
    }

    #[test]
    fn created_effects_keep_their_defaults() {
        let registry = EffectRegistry::new();

        let gain = registry.create("gain", EffectId(4), 44100.0).unwrap();
        assert_eq!(gain.id(), EffectId(4));
        assert_eq!(gain.name(), "Gain");
        assert!(gain.is_enabled());

        let echo = registry.create("echo", EffectId(5), 8000.0).unwrap();
        assert_eq!(echo.name(), "Echo");
        assert!(!echo.is_enabled());

        assert!(registry.create("fuzz", EffectId(6), 44100.0).is_none());
    }

    #[test]
    fn categories_partition_the_set() {
        let registry = EffectRegistry::new();
        let utility = registry.effects_in_category(EffectCategory::Utility);
        let timed = registry.effects_in_category(EffectCategory::TimeBased);
        assert_eq!(utility.len() + timed.len(), registry.len());
        assert_eq!(utility[0].kind, "gain");
        assert_eq!(timed[0].kind, "echo");
        assert_eq!(EffectCategory::TimeBased.name(), "Time-Based");
    }

    #[test]
    fn param_names_resolve_per_kind() {
        let registry = EffectRegistry::new();
        assert_eq!(registry.param_index_by_name("gain", "gain"), Some(0));
        assert_eq!(registry.param_index_by_name("echo", "delay"), Some(0));
        assert_eq!(registry.param_index_by_name("echo", "DECAY"), Some(1));
        assert_eq!(registry.param_index_by_name("echo", "mix"), None);
        assert_eq!(registry.param_index_by_name("fuzz", "drive"), None);
    }

    #[test]
    fn descriptors_agree_with_instances() {
        let registry = EffectRegistry::new();
        for desc in registry.all_effects() {
            let mut effect = registry
                .create(desc.kind, EffectId(1), 44100.0)
                .unwrap_or_else(|| panic!("cannot create {}", desc.kind));
            assert_eq!(effect.effect_param_count(), desc.param_count, "{}", desc.kind);
            assert_eq!(effect.name(), desc.name);

            effect.set_enabled(true);
            assert_eq!(effect.process(&[1000, -1000, 0]).len(), 3, "{}", desc.kind);
        }
    }
}
