//! Ordered, id-addressed effect chain.
//!
//! [`EffectChain`] owns a sequence of boxed effects and folds each block
//! through them in order: the output of one effect is the input of the next.
//! Order matters (echo-then-gain differs from gain-then-echo).
//!
//! # Example
//!
//! ```rust,ignore
//! use ripple_core::{EffectChain, EffectId};
//! use ripple_effects::{EchoEffect, GainEffect};
//!
//! let mut chain = EffectChain::new();
//! chain.add(Box::new(GainEffect::new(EffectId(1))));
//! chain.add(Box::new(EchoEffect::new(EffectId(2), 44100.0)));
//!
//! let processed = chain.apply_all(&block);
//! chain.remove(EffectId(1));
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::effect::{Effect, EffectId};
use crate::effect_with_params::EffectWithParams;

/// Boxed effect as stored in a chain.
pub type BoxedEffect = Box<dyn EffectWithParams + Send>;

/// Display snapshot of one chain entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectSummary {
    /// Stable effect identifier.
    pub id: EffectId,
    /// Display label.
    pub name: String,
    /// Enable gate state.
    pub enabled: bool,
}

/// An ordered chain of effects processed as a unit.
///
/// Identifiers are expected to be unique but are not enforced: lookups by id
/// return the last matching entry, removal takes the first.
#[derive(Default)]
pub struct EffectChain {
    effects: Vec<BoxedEffect>,
}

impl EffectChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    /// Append an effect to the end of the chain.
    pub fn add(&mut self, effect: BoxedEffect) {
        #[cfg(feature = "tracing")]
        tracing::debug!(id = %effect.id(), name = effect.name(), "chain_add");
        self.effects.push(effect);
    }

    /// Remove the first effect with a matching id.
    ///
    /// Returns the removed effect, or `None` if no entry matched.
    pub fn remove(&mut self, id: EffectId) -> Option<BoxedEffect> {
        let index = self.effects.iter().position(|e| e.id() == id)?;
        let effect = self.effects.remove(index);
        #[cfg(feature = "tracing")]
        tracing::debug!(id = %id, index, "chain_remove");
        Some(effect)
    }

    /// Fold a block through every effect in order.
    ///
    /// Disabled effects pass the block through unchanged. If nothing in the
    /// chain modified the block, the input itself is returned borrowed.
    pub fn apply_all<'a>(&mut self, input: &'a [i16]) -> Cow<'a, [i16]> {
        let mut block = Cow::Borrowed(input);
        for effect in &mut self.effects {
            block = match block {
                Cow::Borrowed(samples) => effect.process(samples),
                Cow::Owned(samples) => {
                    let processed = match effect.process(&samples) {
                        Cow::Owned(next) => Some(next),
                        Cow::Borrowed(_) => None,
                    };
                    Cow::Owned(processed.unwrap_or(samples))
                }
            };
        }
        block
    }

    /// Process a block into a caller-owned output buffer.
    ///
    /// `output` must be the same length as `input`.
    pub fn process_into(&mut self, input: &[i16], output: &mut [i16]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        let processed = self.apply_all(input);
        output.copy_from_slice(&processed);
    }

    /// Look up an effect by id (last match wins).
    pub fn get(&self, id: EffectId) -> Option<&BoxedEffect> {
        self.effects.iter().rev().find(|e| e.id() == id)
    }

    /// Look up an effect mutably by id (last match wins).
    pub fn get_mut(&mut self, id: EffectId) -> Option<&mut BoxedEffect> {
        self.effects.iter_mut().rev().find(|e| e.id() == id)
    }

    /// Set the enable gate of an effect. Returns `false` if the id is unknown.
    pub fn set_enabled(&mut self, id: EffectId, enabled: bool) -> bool {
        match self.get_mut(id) {
            Some(effect) => {
                effect.set_enabled(enabled);
                true
            }
            None => false,
        }
    }

    /// Index of the first effect with a matching id.
    pub fn position(&self, id: EffectId) -> Option<usize> {
        self.effects.iter().position(|e| e.id() == id)
    }

    /// True if an effect with this id is in the chain.
    pub fn contains(&self, id: EffectId) -> bool {
        self.position(id).is_some()
    }

    /// Move the effect at `from` so that it ends up at index `to`.
    ///
    /// Returns `false` (and changes nothing) if either index is out of range.
    pub fn move_effect(&mut self, from: usize, to: usize) -> bool {
        let len = self.effects.len();
        if from >= len || to >= len {
            return false;
        }
        let effect = self.effects.remove(from);
        self.effects.insert(to, effect);
        true
    }

    /// Iterate effects in chain order.
    pub fn iter(&self) -> impl Iterator<Item = &BoxedEffect> {
        self.effects.iter()
    }

    /// Snapshot of id, name and enabled state for each effect, in chain order.
    pub fn summaries(&self) -> Vec<EffectSummary> {
        self.effects
            .iter()
            .map(|e| EffectSummary {
                id: e.id(),
                name: String::from(e.name()),
                enabled: e.is_enabled(),
            })
            .collect()
    }

    /// Reset the internal state of every effect.
    pub fn reset(&mut self) {
        for effect in &mut self.effects {
            effect.reset();
        }
    }

    /// Remove every effect.
    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// Number of effects in the chain.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// True if the chain holds no effects.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
