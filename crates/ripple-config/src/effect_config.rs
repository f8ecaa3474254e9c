//! One effect slot as it appears in a preset.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A registry kind plus the parameter values to apply to it.
///
/// Writing the kind as `!echo` keeps the slot in the chain but switches it
/// off. Parameter values stay as text until the rack applies them, so a
/// preset can say `"120ms"` or `"40%"` instead of bare numbers. They are
/// held in a `BTreeMap` so a saved preset lists them in a stable order.
///
/// # Example
///
/// ```rust
/// use ripple_config::EffectConfig;
///
/// let slot = EffectConfig::new("echo")
///     .with_param("delay", "250ms")
///     .with_param("decay", "40%");
///
/// assert_eq!(slot.kind, "echo");
/// assert!(slot.enabled);
/// assert_eq!(slot.parse_param("delay"), Some(0.25));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EffectConfig {
    /// Registry kind, e.g. `"gain"` or `"echo"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Enable gate. A slot that omits it is on.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,

    /// Parameter key to unparsed value.
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

const fn enabled_by_default() -> bool {
    true
}

impl EffectConfig {
    /// Slot for `kind` with no parameters. A leading `!` disables it.
    pub fn new(kind: impl Into<String>) -> Self {
        let kind = kind.into();
        let (kind, enabled) = match kind.strip_prefix('!') {
            Some(rest) => (rest.to_owned(), false),
            None => (kind, true),
        };
        Self {
            kind,
            enabled,
            params: BTreeMap::new(),
        }
    }

    /// Builder form of [`set_param`](Self::set_param).
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_param(key, value);
        self
    }

    /// Builder form of the enable gate.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Raw text of a parameter.
    pub fn get_param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Store a parameter, replacing any earlier value for the key.
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// A parameter converted with [`parse_param_value`].
    pub fn parse_param(&self, key: &str) -> Option<f32> {
        self.get_param(key).and_then(parse_param_value)
    }

    /// The kind as written in a chain list, `!`-prefixed when disabled.
    pub fn display_kind(&self) -> String {
        if self.enabled {
            self.kind.clone()
        } else {
            format!("!{}", self.kind)
        }
    }
}

/// Unit suffixes, longest first so `ms` wins over `s`.
const UNIT_SUFFIXES: &[(&str, fn(f32) -> f32)] = &[
    ("ms", |v| v / 1000.0),
    ("dB", db_to_linear),
    ("db", db_to_linear),
    ("%", |v| v / 100.0),
    ("s", |v| v),
];

fn db_to_linear(db: f32) -> f32 {
    libm::powf(10.0, db / 20.0)
}

/// Convert a parameter string to the number an effect expects.
///
/// | Text | Value |
/// |------|-------|
/// | `0.5` | 0.5 |
/// | `40%` | 0.4 |
/// | `-6dB` | ≈0.501 (linear gain) |
/// | `120ms` | 0.12 (seconds) |
/// | `1.5s` | 1.5 (seconds) |
///
/// Whitespace around the number or between number and unit is ignored.
/// Returns `None` for anything else.
pub fn parse_param_value(value: &str) -> Option<f32> {
    let value = value.trim();
    for (suffix, convert) in UNIT_SUFFIXES {
        if let Some(number) = value.strip_suffix(suffix) {
            return number.trim().parse::<f32>().ok().map(*convert);
        }
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_kind_is_enabled_and_empty() {
        let slot = EffectConfig::new("gain");
        assert_eq!(slot.kind, "gain");
        assert!(slot.enabled);
        assert!(slot.params.is_empty());
    }

    #[test]
    fn bang_prefix_disables() {
        let slot = EffectConfig::new("!echo");
        assert_eq!(slot.kind, "echo");
        assert!(!slot.enabled);
        assert_eq!(slot.display_kind(), "!echo");
        assert_eq!(slot.with_enabled(true).display_kind(), "echo");
    }

    #[test]
    fn later_param_replaces_earlier() {
        let mut slot = EffectConfig::new("echo").with_param("delay", "0.3");
        slot.set_param("delay", "0.7");
        assert_eq!(slot.get_param("delay"), Some("0.7"));
        assert_eq!(slot.get_param("decay"), None);
        assert_eq!(slot.parse_param("decay"), None);
    }

    #[test]
    fn numbers_and_units() {
        assert_eq!(parse_param_value("0.25"), Some(0.25));
        assert_eq!(parse_param_value(" -1 "), Some(-1.0));
        assert_eq!(parse_param_value("40%"), Some(0.4));
        assert_eq!(parse_param_value("250ms"), Some(0.25));
        assert_eq!(parse_param_value("2s"), Some(2.0));
        assert_eq!(parse_param_value("0.5 s"), Some(0.5));
    }

    #[test]
    fn decibels_become_linear_gain() {
        assert!((parse_param_value("0dB").unwrap() - 1.0).abs() < 1e-6);
        assert!((parse_param_value("20db").unwrap() - 10.0).abs() < 1e-4);
        assert!((parse_param_value("-6 dB").unwrap() - 0.501).abs() < 1e-3);
    }

    #[test]
    fn junk_is_rejected() {
        for text in ["", "loud", "%", "ms", "1.2.3", "x%"] {
            assert_eq!(parse_param_value(text), None, "{text:?}");
        }
    }

    #[test]
    fn toml_fills_missing_fields() {
        let slot: EffectConfig = toml::from_str("type = \"echo\"").unwrap();
        assert!(slot.enabled);
        assert!(slot.params.is_empty());

        let off: EffectConfig = toml::from_str("type = \"gain\"\nenabled = false").unwrap();
        assert!(!off.enabled);
    }
}
