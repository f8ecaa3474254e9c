//! Linear gain stage.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::borrow::Cow;

use ripple_core::{Effect, EffectId, ParamDescriptor, ParameterInfo, clip_to_short};

/// Multiplies every sample by a gain factor and saturates to 16 bits.
///
/// Starts enabled at unity gain. Unity gain (and the disabled state) is an
/// exact identity and hands the input block back without copying.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Default |
/// |-------|------|-------|---------|
/// | 0 | Gain | 0.0–5.0 | 1.0 |
///
/// # Example
///
/// ```rust
/// use ripple_core::{Effect, EffectId};
/// use ripple_effects::GainEffect;
///
/// let mut gain = GainEffect::new(EffectId(1));
/// gain.set_gain(2.0);
/// assert_eq!(gain.process(&[100, -20000]).as_ref(), &[200, -32768]);
/// ```
#[derive(Debug, Clone)]
pub struct GainEffect {
    id: EffectId,
    gain: f32,
    enabled: bool,
}

impl GainEffect {
    /// Lowest accepted gain (silence).
    pub const MIN_GAIN: f32 = 0.0;
    /// Highest accepted gain.
    pub const MAX_GAIN: f32 = 5.0;
    /// Gain of a new instance.
    pub const DEFAULT_GAIN: f32 = 1.0;

    /// Create an enabled gain stage at unity.
    pub fn new(id: EffectId) -> Self {
        Self {
            id,
            gain: Self::DEFAULT_GAIN,
            enabled: true,
        }
    }

    /// Set the gain factor, clamped to `0.0..=5.0`.
    pub fn set_gain(&mut self, gain: f32) {
        self.gain = Self::gain_param().validate(gain);
    }

    /// Current gain factor.
    pub fn gain(&self) -> f32 {
        self.gain
    }

    fn gain_param() -> ParamDescriptor {
        ParamDescriptor::ratio(
            "Gain",
            "Gain",
            Self::MIN_GAIN,
            Self::MAX_GAIN,
            Self::DEFAULT_GAIN,
        )
        .with_id("gain")
    }
}

impl Effect for GainEffect {
    fn id(&self) -> EffectId {
        self.id
    }

    fn name(&self) -> &str {
        "Gain"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn process<'a>(&mut self, input: &'a [i16]) -> Cow<'a, [i16]> {
        if !self.enabled || self.gain == 1.0 {
            return Cow::Borrowed(input);
        }
        let gain = self.gain;
        Cow::Owned(
            input
                .iter()
                .map(|&s| clip_to_short(f32::from(s) * gain))
                .collect(),
        )
    }
}

impl ParameterInfo for GainEffect {
    fn param_count(&self) -> usize {
        1
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(Self::gain_param()),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.gain,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        if index == 0 {
            self.set_gain(value);
        }
    }
}
