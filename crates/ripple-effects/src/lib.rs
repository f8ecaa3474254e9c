//! Ripple Effects - effect implementations for 16-bit PCM blocks
//!
//! This crate provides the effect variants built on ripple-core:
//!
//! - [`GainEffect`] - Linear volume scaling with saturation
//! - [`EchoEffect`] - Single-tap echo with a decaying, dry-fed delay line
//!
//! ## Example
//!
//! ```rust
//! use ripple_core::{Effect, EffectChain, EffectId};
//! use ripple_effects::{EchoEffect, GainEffect};
//!
//! let mut gain = GainEffect::new(EffectId(1));
//! gain.set_gain(2.0);
//!
//! let mut echo = EchoEffect::new(EffectId(2), 44100.0);
//! echo.set_delay(0.1);
//! echo.set_enabled(true);
//!
//! let mut chain = EffectChain::new();
//! chain.add(Box::new(gain));
//! chain.add(Box::new(echo));
//!
//! let mut block = vec![0i16; 4411];
//! block[0] = 1000;
//! let out = chain.apply_all(&block);
//! assert_eq!(out[0], 2000);
//! assert_eq!(out[4410], 1000);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod echo;
pub mod gain;

// Re-export main types at crate root
pub use echo::EchoEffect;
pub use gain::GainEffect;
