//! Chain specification parsing.
//!
//! Format: `kind:param=value,param=value|kind:param=value`. A `!` before the
//! kind adds the effect disabled. Values accept the same units as presets.

use ripple_config::EffectConfig;

/// Error type for chain specification parsing.
#[derive(Debug, thiserror::Error)]
pub enum ChainSpecError {
    /// The specification names no effects.
    #[error("empty effect chain")]
    Empty,

    /// A segment has no effect kind before the colon.
    #[error("missing effect type in '{0}'")]
    MissingType(String),

    /// A parameter is not written as `key=value`.
    #[error("invalid parameter format: '{0}' (expected key=value)")]
    InvalidParam(String),
}

/// Parse a chain specification into effect configurations, in chain order.
pub fn parse_chain(spec: &str) -> Result<Vec<EffectConfig>, ChainSpecError> {
    let mut configs = Vec::new();

    for effect_spec in spec.split('|') {
        let effect_spec = effect_spec.trim();
        if effect_spec.is_empty() {
            continue;
        }
        configs.push(parse_effect_spec(effect_spec)?);
    }

    if configs.is_empty() {
        return Err(ChainSpecError::Empty);
    }
    Ok(configs)
}

/// Parse a single `kind:param=value,...` segment.
fn parse_effect_spec(spec: &str) -> Result<EffectConfig, ChainSpecError> {
    let (kind, params) = match spec.split_once(':') {
        Some((kind, params)) => (kind.trim(), params),
        None => (spec, ""),
    };
    if kind.trim_start_matches('!').is_empty() {
        return Err(ChainSpecError::MissingType(spec.to_string()));
    }

    let mut config = EffectConfig::new(kind);
    for param in params.split(',') {
        let param = param.trim();
        if param.is_empty() {
            continue;
        }
        let (key, value) = param
            .split_once('=')
            .ok_or_else(|| ChainSpecError::InvalidParam(param.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(ChainSpecError::InvalidParam(param.to_string()));
        }
        config.set_param(key, value.trim());
    }
    Ok(config)
}
