//! Runtime effect rack.
//!
//! [`EffectRack`] wraps an [`EffectChain`] with everything a configuration
//! front-end needs: effects are created by kind name through the registry,
//! addressed by the id the rack hands out, and tuned by parameter name.
//!
//! # Example
//!
//! ```rust
//! use ripple_config::EffectRack;
//!
//! let mut rack = EffectRack::new(44100.0);
//! let gain = rack.add_effect("gain").unwrap();
//! let echo = rack.add_effect("echo").unwrap();
//!
//! rack.set_param(gain, "gain", 2.0).unwrap();
//! rack.set_param(echo, "delay", 0.1).unwrap();
//! rack.set_enabled(echo, true).unwrap();
//!
//! let mut block = vec![0i16; 4411];
//! block[0] = 1000;
//! let out = rack.process(&block);
//! assert_eq!(out[0], 2000);
//! assert_eq!(out[4410], 1000);
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

use ripple_core::{BoxedEffect, Effect, EffectChain, EffectId, EffectWithParams};
use ripple_registry::EffectRegistry;

use crate::effect_config::{EffectConfig, parse_param_value};
use crate::error::ConfigError;
use crate::preset::Preset;

/// Display snapshot of one rack slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RackEntry {
    /// Id handed out when the effect was added.
    pub id: EffectId,
    /// Display label.
    pub name: String,
    /// Registry kind the effect was created from.
    pub kind: &'static str,
    /// Enable gate state.
    pub enabled: bool,
}

/// An effect chain managed by kind name and effect id.
///
/// Ids are assigned sequentially from 1 and never reused within a rack.
pub struct EffectRack {
    chain: EffectChain,
    kinds: HashMap<EffectId, &'static str>,
    registry: EffectRegistry,
    sample_rate: f32,
    next_id: u32,
}

impl EffectRack {
    /// Create an empty rack for audio at `sample_rate` Hz.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            chain: EffectChain::new(),
            kinds: HashMap::new(),
            registry: EffectRegistry::new(),
            sample_rate,
            next_id: 1,
        }
    }

    /// Build a rack from a preset, adding its effects in order.
    ///
    /// # Errors
    ///
    /// Fails on the first unknown effect kind, unknown parameter name, or
    /// unparsable parameter value.
    pub fn from_preset(preset: &Preset) -> Result<Self, ConfigError> {
        let mut rack = Self::new(preset.sample_rate as f32);
        for config in &preset.effects {
            rack.add_effect_config(config)?;
        }
        tracing::info!(preset = %preset.name, effects = rack.len(), "rack built from preset");
        Ok(rack)
    }

    /// Add an effect by kind with default parameters.
    ///
    /// The effect keeps its variant's initial enable state (gain on, echo
    /// off). A `!` prefix adds it disabled regardless.
    pub fn add_effect(&mut self, kind: &str) -> Result<EffectId, ConfigError> {
        let config = EffectConfig::new(kind);
        let gate = (!config.enabled).then_some(false);
        self.insert(&config, gate)
    }

    /// Add an effect from a configuration, applying its parameters and then
    /// its enable gate.
    pub fn add_effect_config(&mut self, config: &EffectConfig) -> Result<EffectId, ConfigError> {
        self.insert(config, Some(config.enabled))
    }

    fn insert(
        &mut self,
        config: &EffectConfig,
        gate: Option<bool>,
    ) -> Result<EffectId, ConfigError> {
        let descriptor = self
            .registry
            .get(&config.kind)
            .ok_or_else(|| ConfigError::UnknownEffect(config.kind.clone()))?;
        let kind = descriptor.kind;

        let id = EffectId(self.next_id);
        let mut effect = self
            .registry
            .create(kind, id, self.sample_rate)
            .ok_or_else(|| ConfigError::UnknownEffect(kind.to_string()))?;

        for (name, raw) in &config.params {
            let value = parse_param_value(raw).ok_or_else(|| {
                ConfigError::invalid_param(kind, name, format!("cannot parse value '{raw}'"))
            })?;
            set_named_param(&mut effect, kind, name, value)?;
        }
        if let Some(enabled) = gate {
            effect.set_enabled(enabled);
        }

        self.next_id += 1;
        self.kinds.insert(id, kind);
        self.chain.add(effect);
        Ok(id)
    }

    /// Remove an effect. Returns `false` if the id is not in the rack.
    pub fn remove(&mut self, id: EffectId) -> bool {
        if self.chain.remove(id).is_some() {
            self.kinds.remove(&id);
            true
        } else {
            false
        }
    }

    /// Snapshot of every slot in chain order.
    pub fn effects(&self) -> Vec<RackEntry> {
        self.chain
            .iter()
            .map(|effect| RackEntry {
                id: effect.id(),
                name: effect.name().to_string(),
                kind: self.kinds.get(&effect.id()).copied().unwrap_or_default(),
                enabled: effect.is_enabled(),
            })
            .collect()
    }

    /// Set a parameter by name, returning the value actually stored.
    ///
    /// Out-of-range values are clamped by the effect, so the returned value
    /// may differ from `value`.
    pub fn set_param(&mut self, id: EffectId, name: &str, value: f32) -> Result<f32, ConfigError> {
        let kind = self.kind_of(id)?;
        let effect = self
            .chain
            .get_mut(id)
            .ok_or(ConfigError::UnknownEffectId(id))?;
        set_named_param(effect, kind, name, value)
    }

    /// Read a parameter by name.
    pub fn get_param(&self, id: EffectId, name: &str) -> Result<f32, ConfigError> {
        let kind = self.kind_of(id)?;
        let effect = self.chain.get(id).ok_or(ConfigError::UnknownEffectId(id))?;
        let index = effect
            .effect_find_param(name)
            .ok_or_else(|| ConfigError::invalid_param(kind, name, "unknown parameter"))?;
        Ok(effect.effect_get_param(index))
    }

    /// Switch an effect on or off.
    pub fn set_enabled(&mut self, id: EffectId, enabled: bool) -> Result<(), ConfigError> {
        if self.chain.set_enabled(id, enabled) {
            tracing::debug!(%id, enabled, "effect toggled");
            Ok(())
        } else {
            Err(ConfigError::UnknownEffectId(id))
        }
    }

    /// Flip an effect's enable gate, returning the new state.
    pub fn toggle(&mut self, id: EffectId) -> Result<bool, ConfigError> {
        let enabled = !self
            .chain
            .get(id)
            .ok_or(ConfigError::UnknownEffectId(id))?
            .is_enabled();
        self.set_enabled(id, enabled)?;
        Ok(enabled)
    }

    /// Process one block through the rack's chain.
    pub fn process<'a>(&mut self, input: &'a [i16]) -> Cow<'a, [i16]> {
        self.chain.apply_all(input)
    }

    /// Capture the rack as a preset.
    ///
    /// Every parameter is written as a plain number under its preset key.
    pub fn to_preset(&self, name: impl Into<String>) -> Preset {
        let mut preset = Preset::new(name).with_sample_rate(self.sample_rate as u32);
        for effect in self.chain.iter() {
            let kind = self.kinds.get(&effect.id()).copied().unwrap_or_default();
            let mut config = EffectConfig::new(kind).with_enabled(effect.is_enabled());
            for index in 0..effect.effect_param_count() {
                if let Some(desc) = effect.effect_param_info(index) {
                    let key = if desc.string_id.is_empty() {
                        desc.name.to_lowercase()
                    } else {
                        desc.string_id.to_string()
                    };
                    config.set_param(key, effect.effect_get_param(index).to_string());
                }
            }
            preset.effects.push(config);
        }
        preset
    }

    /// Clear the internal state of every effect.
    pub fn reset(&mut self) {
        self.chain.reset();
    }

    /// The underlying chain.
    pub fn chain(&self) -> &EffectChain {
        &self.chain
    }

    /// Mutable access to the underlying chain.
    ///
    /// Effects added directly to the chain have no kind and are listed with
    /// an empty `kind` by [`effects`](Self::effects).
    pub fn chain_mut(&mut self) -> &mut EffectChain {
        &mut self.chain
    }

    /// Sample rate effects are created for.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Number of effects in the rack.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// True if the rack holds no effects.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    fn kind_of(&self, id: EffectId) -> Result<&'static str, ConfigError> {
        self.kinds
            .get(&id)
            .copied()
            .ok_or(ConfigError::UnknownEffectId(id))
    }
}

fn set_named_param(
    effect: &mut BoxedEffect,
    kind: &str,
    name: &str,
    value: f32,
) -> Result<f32, ConfigError> {
    let index = effect
        .effect_find_param(name)
        .ok_or_else(|| ConfigError::invalid_param(kind, name, "unknown parameter"))?;
    effect.effect_set_param(index, value);
    Ok(effect.effect_get_param(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_not_reused() {
        let mut rack = EffectRack::new(44100.0);
        let a = rack.add_effect("gain").unwrap();
        let b = rack.add_effect("echo").unwrap();
        assert_eq!((a, b), (EffectId(1), EffectId(2)));

        assert!(rack.remove(a));
        let c = rack.add_effect("gain").unwrap();
        assert_eq!(c, EffectId(3));
        assert!(!rack.remove(a));
    }

    #[test]
    fn effects_lists_kind_and_state() {
        let mut rack = EffectRack::new(44100.0);
        rack.add_effect("gain").unwrap();
        rack.add_effect("!echo").unwrap();

        let entries = rack.effects();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, "gain");
        assert_eq!(entries[0].name, "Gain");
        assert!(entries[0].enabled);
        assert_eq!(entries[1].kind, "echo");
        assert!(!entries[1].enabled);
    }

    #[test]
    fn added_effects_keep_variant_enable_state() {
        let mut rack = EffectRack::new(44100.0);
        let gain = rack.add_effect("gain").unwrap();
        let echo = rack.add_effect("echo").unwrap();
        assert!(rack.chain().get(gain).unwrap().is_enabled());
        assert!(!rack.chain().get(echo).unwrap().is_enabled());

        let input = [1000, -1000, 0];
        assert_eq!(rack.process(&input).as_ref(), &input);
    }

    #[test]
    fn configured_echo_is_enabled_unless_marked_off() {
        let mut rack = EffectRack::new(44100.0);
        let on = rack.add_effect_config(&EffectConfig::new("echo")).unwrap();
        let off = rack.add_effect_config(&EffectConfig::new("!echo")).unwrap();
        assert!(rack.chain().get(on).unwrap().is_enabled());
        assert!(!rack.chain().get(off).unwrap().is_enabled());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let mut rack = EffectRack::new(44100.0);
        let err = rack.add_effect("reverb").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEffect(ref k) if k == "reverb"));
        assert!(rack.is_empty());
    }

    #[test]
    fn bad_param_in_config_is_rejected() {
        let mut rack = EffectRack::new(44100.0);
        let err = rack
            .add_effect_config(&EffectConfig::new("echo").with_param("mix", "0.5"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { ref param, .. } if param == "mix"));

        let err = rack
            .add_effect_config(&EffectConfig::new("echo").with_param("delay", "soon"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { .. }));
        assert!(rack.is_empty());
    }

    #[test]
    fn set_param_returns_clamped_value() {
        let mut rack = EffectRack::new(44100.0);
        let id = rack.add_effect("gain").unwrap();
        assert_eq!(rack.set_param(id, "gain", 9.0).unwrap(), 5.0);
        assert_eq!(rack.get_param(id, "Gain").unwrap(), 5.0);

        assert!(matches!(
            rack.set_param(EffectId(42), "gain", 1.0),
            Err(ConfigError::UnknownEffectId(EffectId(42)))
        ));
        assert!(rack.set_param(id, "delay", 1.0).is_err());
    }

    #[test]
    fn toggle_flips_state() {
        let mut rack = EffectRack::new(44100.0);
        let id = rack.add_effect("gain").unwrap();
        assert!(!rack.toggle(id).unwrap());
        assert!(rack.toggle(id).unwrap());
        assert!(rack.toggle(EffectId(9)).is_err());
        assert!(rack.set_enabled(EffectId(9), true).is_err());
    }

    #[test]
    fn to_preset_captures_params() {
        let mut rack = EffectRack::new(22050.0);
        let echo = rack.add_effect("echo").unwrap();
        rack.set_param(echo, "delay", 0.25).unwrap();
        rack.set_param(echo, "decay", 0.4).unwrap();
        rack.set_enabled(echo, false).unwrap();

        let preset = rack.to_preset("Captured");
        assert_eq!(preset.sample_rate, 22050);
        assert_eq!(preset.effects.len(), 1);
        let config = &preset.effects[0];
        assert_eq!(config.kind, "echo");
        assert!(!config.enabled);
        assert_eq!(config.parse_param("delay"), Some(0.25));
        assert_eq!(config.parse_param("decay"), Some(0.4));
    }
}
