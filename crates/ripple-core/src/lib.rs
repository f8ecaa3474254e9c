//! Ripple Core - effect primitives for 16-bit PCM audio
//!
//! This crate provides the foundational building blocks for processing blocks
//! of 16-bit signed PCM samples through a runtime-configurable chain of effects.
//!
//! # Core Abstractions
//!
//! ## Effect System
//!
//! - [`Effect`] - Object-safe trait for all audio effects
//! - [`EffectWithParams`] - Effect plus runtime parameter access, for boxed effects
//! - [`EffectChain`] - Ordered, id-addressed sequence of boxed effects
//!
//! ## Parameters
//!
//! - [`ParamDescriptor`] - Range, default and display metadata for one parameter
//! - [`ParameterInfo`] - Index-based parameter discovery and get/set
//! - [`validate_param`] - Clamp-and-report validation used by every setter
//!
//! ## Buffers
//!
//! - [`DelayLine`] - Fixed-capacity circular sample buffer with a persistent cursor
//! - [`clip_to_short`] - Saturating float-to-sample conversion
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc`). Disable the default
//! features in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ripple-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::borrow::Cow;
//! use ripple_core::{Effect, EffectChain, EffectId, ParamDescriptor, ParameterInfo};
//!
//! struct Invert {
//!     id: EffectId,
//!     enabled: bool,
//! }
//!
//! impl Effect for Invert {
//!     fn id(&self) -> EffectId { self.id }
//!     fn name(&self) -> &str { "Invert" }
//!     fn is_enabled(&self) -> bool { self.enabled }
//!     fn set_enabled(&mut self, enabled: bool) { self.enabled = enabled; }
//!     fn process<'a>(&mut self, input: &'a [i16]) -> Cow<'a, [i16]> {
//!         if !self.enabled {
//!             return Cow::Borrowed(input);
//!         }
//!         Cow::Owned(input.iter().map(|s| s.saturating_neg()).collect())
//!     }
//! }
//!
//! impl ParameterInfo for Invert {
//!     fn param_count(&self) -> usize { 0 }
//!     fn param_info(&self, _: usize) -> Option<ParamDescriptor> { None }
//!     fn get_param(&self, _: usize) -> f32 { 0.0 }
//!     fn set_param(&mut self, _: usize, _: f32) {}
//! }
//!
//! let mut chain = EffectChain::new();
//! chain.add(Box::new(Invert { id: EffectId(1), enabled: true }));
//! assert_eq!(chain.apply_all(&[100, -200]).as_ref(), &[-100, 200]);
//! ```
//!
//! # Design Principles
//!
//! - **Inputs are borrowed, never mutated**: `process` reads `&[i16]` and
//!   returns a `Cow`, so pass-through costs no allocation
//! - **Clamp, don't fail**: out-of-range parameters are clamped and reported
//!   through `tracing`, never returned as errors
//! - **Single owner**: no internal locking; callers serialise access

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod chain;
pub mod delay;
pub mod effect;
pub mod effect_with_params;
pub mod param_info;
pub mod sample;
pub mod validate;

// Re-export main types at crate root
pub use chain::{BoxedEffect, EffectChain, EffectSummary};
pub use delay::DelayLine;
pub use effect::{Effect, EffectId};
pub use effect_with_params::EffectWithParams;
pub use param_info::{ParamDescriptor, ParamUnit, ParameterInfo};
pub use sample::{DEFAULT_SAMPLE_RATE, clip_to_short, f32_to_i16, i16_to_f32};
pub use validate::validate_param;
