//! TOML presets: a named, ordered list of effect slots.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::effect_config::EffectConfig;
use crate::error::{ConfigError, FileOp};

/// A saved effect chain.
///
/// Slots are applied in file order. The sample rate is the rate the chain
/// was tuned at; callers processing audio at another rate overwrite it
/// before building a rack.
///
/// ```toml
/// name = "Slapback"
/// description = "Short single repeat"
/// sample_rate = 44100
///
/// [[effects]]
/// type = "gain"
/// [effects.params]
/// gain = "1.5"
///
/// [[effects]]
/// type = "echo"
/// [effects.params]
/// delay = "120ms"
/// decay = "40%"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Display name.
    pub name: String,

    /// Free-form notes, omitted from the file when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate in Hz. 44100 when the file leaves it out.
    #[serde(default = "Preset::fallback_rate")]
    pub sample_rate: u32,

    /// Slots in chain order.
    #[serde(default)]
    pub effects: Vec<EffectConfig>,
}

impl Preset {
    const fn fallback_rate() -> u32 {
        44100
    }

    /// An empty preset at 44100 Hz.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: Self::fallback_rate(),
            effects: Vec::new(),
        }
    }

    /// Builder: attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Builder: append a slot.
    pub fn with_effect(mut self, effect: EffectConfig) -> Self {
        self.effects.push(effect);
        self
    }

    /// Read and parse a preset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ConfigError::io(FileOp::Read, path, e))?;
        let preset = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), name = %preset.name, slots = preset.len(), "preset loaded");
        Ok(preset)
    }

    /// Parse preset text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(ConfigError::from)
    }

    /// Write the preset, creating missing parent directories first.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = self.to_toml()?;

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| ConfigError::io(FileOp::CreateDir, dir, e))?;
        }
        fs::write(path, text).map_err(|e| ConfigError::io(FileOp::Write, path, e))?;
        tracing::debug!(path = %path.display(), name = %self.name, "preset saved");
        Ok(())
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::from)
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// True if there are no slots.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Slot kinds in order, disabled ones `!`-prefixed.
    pub fn kinds(&self) -> Vec<String> {
        self.effects.iter().map(EffectConfig::display_kind).collect()
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
