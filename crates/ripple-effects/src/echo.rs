//! Single-tap echo over a circular delay line.
//!
//! Each output sample is the dry input plus the sample written one delay
//! length earlier, scaled by the decay factor. The line is fed with the dry
//! input only, so each sound repeats once rather than recirculating.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::borrow::Cow;
use alloc::vec::Vec;

use ripple_core::{
    DEFAULT_SAMPLE_RATE, DelayLine, Effect, EffectId, ParamDescriptor, ParamUnit, ParameterInfo,
    clip_to_short,
};

/// Echo effect with configurable delay time and decay.
///
/// Starts disabled. The delay line is sized lazily: on the first enable, the
/// first enabled `process`, or the first [`set_delay`](Self::set_delay),
/// whichever comes first. The write cursor persists across `process` calls,
/// so the echo position does not depend on how the caller blocks its audio.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Default |
/// |-------|------|-------|---------|
/// | 0 | Delay | 0.1–2.0 s | 0.5 |
/// | 1 | Decay | 0.0–0.95 | 0.5 |
///
/// # Example
///
/// ```rust
/// use ripple_core::{Effect, EffectId};
/// use ripple_effects::EchoEffect;
///
/// let mut echo = EchoEffect::new(EffectId(1), 1000.0);
/// echo.set_delay(0.1); // 100 samples at 1 kHz
/// echo.set_decay(0.5);
/// echo.set_enabled(true);
///
/// let mut block = vec![0i16; 101];
/// block[0] = 800;
/// let out = echo.process(&block);
/// assert_eq!(out[0], 800);
/// assert_eq!(out[100], 400);
/// ```
#[derive(Debug, Clone)]
pub struct EchoEffect {
    id: EffectId,
    enabled: bool,
    sample_rate: f32,
    delay_seconds: f32,
    decay: f32,
    line: DelayLine,
}

impl EchoEffect {
    /// Shortest accepted delay, in seconds.
    pub const MIN_DELAY: f32 = 0.1;
    /// Longest accepted delay, in seconds.
    pub const MAX_DELAY: f32 = 2.0;
    /// Delay of a new instance, in seconds.
    pub const DEFAULT_DELAY: f32 = 0.5;
    /// Highest accepted decay. Kept below 1.0 so an echo is always quieter.
    pub const MAX_DECAY: f32 = 0.95;
    /// Decay of a new instance.
    pub const DEFAULT_DECAY: f32 = 0.5;
    /// Highest sample rate accepted by [`new`](Self::new), in Hz.
    pub const MAX_SAMPLE_RATE: f32 = 384_000.0;

    /// Create a disabled echo for audio at `sample_rate` Hz.
    ///
    /// A rate that is not in `(0, MAX_SAMPLE_RATE]` falls back to 44100 Hz.
    pub fn new(id: EffectId, sample_rate: f32) -> Self {
        let sample_rate = if sample_rate > 0.0 && sample_rate <= Self::MAX_SAMPLE_RATE {
            sample_rate
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!(sample_rate, "invalid sample rate, using default");
            DEFAULT_SAMPLE_RATE
        };
        Self {
            id,
            enabled: false,
            sample_rate,
            delay_seconds: Self::DEFAULT_DELAY,
            decay: Self::DEFAULT_DECAY,
            line: DelayLine::new(),
        }
    }

    /// Set the delay time in seconds, clamped to `0.1..=2.0`.
    ///
    /// If the resulting length in samples differs from the current line,
    /// the line is reallocated to silence and all pending echoes are lost.
    pub fn set_delay(&mut self, seconds: f32) {
        self.delay_seconds = Self::delay_param().validate(seconds);
        self.ensure_line_len();
    }

    /// Current delay time in seconds.
    pub fn delay(&self) -> f32 {
        self.delay_seconds
    }

    /// Set the decay (echo level), clamped to `0.0..=0.95`.
    pub fn set_decay(&mut self, decay: f32) {
        self.decay = Self::decay_param().validate(decay);
    }

    /// Current decay.
    pub fn decay(&self) -> f32 {
        self.decay
    }

    /// Delay length in samples for the current delay time and sample rate.
    pub fn delay_samples(&self) -> usize {
        libm::roundf(self.sample_rate * self.delay_seconds) as usize
    }

    /// Sample rate this echo was built for, in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Allocated delay line length; 0 until the line is first sized.
    pub fn buffer_len(&self) -> usize {
        self.line.len()
    }

    fn delay_param() -> ParamDescriptor {
        ParamDescriptor::time_seconds(
            "Delay",
            "Delay",
            Self::MIN_DELAY,
            Self::MAX_DELAY,
            Self::DEFAULT_DELAY,
        )
        .with_id("delay")
    }

    fn decay_param() -> ParamDescriptor {
        ParamDescriptor::new(
            "Decay",
            "Decay",
            ParamUnit::Percent,
            0.0,
            Self::MAX_DECAY,
            Self::DEFAULT_DECAY,
        )
        .with_step(0.01)
        .with_id("decay")
    }

    fn ensure_line_len(&mut self) {
        let len = self.delay_samples();
        if len != self.line.len() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                id = %self.id,
                from = self.line.len(),
                to = len,
                "echo delay line reallocated"
            );
            self.line.resize_silent(len);
        }
    }
}

impl Effect for EchoEffect {
    fn id(&self) -> EffectId {
        self.id
    }

    fn name(&self) -> &str {
        "Echo"
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if enabled && self.line.is_empty() {
            self.ensure_line_len();
        }
    }

    fn process<'a>(&mut self, input: &'a [i16]) -> Cow<'a, [i16]> {
        if !self.enabled || input.is_empty() {
            return Cow::Borrowed(input);
        }
        if self.line.is_empty() {
            self.ensure_line_len();
        }

        let decay = self.decay;
        let mut output = Vec::with_capacity(input.len());
        for &dry in input {
            let echo = self.line.read();
            let mixed = f32::from(dry) + libm::roundf(f32::from(echo) * decay);
            output.push(clip_to_short(mixed));
            self.line.write_advance(dry);
        }
        Cow::Owned(output)
    }

    fn reset(&mut self) {
        self.line.clear();
    }
}

impl ParameterInfo for EchoEffect {
    fn param_count(&self) -> usize {
        2
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(Self::delay_param()),
            1 => Some(Self::decay_param()),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.delay_seconds,
            1 => self.decay,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            0 => self.set_delay(value),
            1 => self.set_decay(value),
            _ => {}
        }
    }
}
