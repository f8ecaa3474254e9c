//! Configuration and preset management for ripple effects.
//!
//! This crate is the configuration surface of the effect core: it turns TOML
//! presets and `kind:param=value` style settings into a running effect chain,
//! and exposes that chain to UI collaborators through [`EffectRack`].
//!
//! # Features
//!
//! - **Preset System**: Load and save effect chains as TOML files
//! - **Effect Rack**: Add, remove, toggle and tune effects by id at runtime
//! - **Value Parsing**: Parameter values with `%`, `dB`, `ms` and `s` suffixes
//!
//! # Example
//!
//! ```rust
//! use ripple_config::{EffectConfig, EffectRack, Preset};
//!
//! let preset = Preset::new("Slapback")
//!     .with_effect(EffectConfig::new("gain").with_param("gain", "6dB"))
//!     .with_effect(EffectConfig::new("echo").with_param("delay", "100ms"));
//!
//! let mut rack = EffectRack::from_preset(&preset).unwrap();
//! assert_eq!(rack.effects().len(), 2);
//!
//! let out = rack.process(&[1000, 0, 0]);
//! assert_eq!(out.len(), 3);
//! ```

mod effect_config;
mod error;
mod preset;
mod rack;

pub use effect_config::{EffectConfig, parse_param_value};
pub use error::{ConfigError, FileOp};
pub use preset::Preset;
pub use rack::{EffectRack, RackEntry};

/// Re-export commonly used types from ripple-registry
pub use ripple_registry::{EffectCategory, EffectDescriptor, EffectRegistry};
