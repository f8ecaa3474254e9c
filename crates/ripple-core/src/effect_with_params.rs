//! Combined `Effect` + `ParameterInfo` trait for boxed effects.
//!
//! [`EffectWithParams`] lets a `Box<dyn ...>` expose both processing and
//! parameter access through one vtable. A blanket impl covers every concrete
//! type that implements both traits, so effect authors never implement it
//! by hand.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::string::String;

use crate::effect::Effect;
use crate::param_info::{ParamDescriptor, ParameterInfo};

/// Parameter access for boxed effects.
///
/// Methods are prefixed so they never shadow the [`ParameterInfo`] methods on
/// concrete types.
pub trait EffectWithParams: Effect {
    /// Get the parameter count.
    fn effect_param_count(&self) -> usize;

    /// Get parameter info by index.
    fn effect_param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Get parameter value by index.
    fn effect_get_param(&self, index: usize) -> f32;

    /// Set parameter value by index (clamped by the effect).
    fn effect_set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by name, short name, or key.
    fn effect_find_param(&self, name: &str) -> Option<usize>;

    /// Format a parameter's current value as display text.
    fn effect_format_param(&self, index: usize) -> Option<String>;
}

impl<T: Effect + ParameterInfo> EffectWithParams for T {
    fn effect_param_count(&self) -> usize {
        self.param_count()
    }

    fn effect_param_info(&self, index: usize) -> Option<ParamDescriptor> {
        self.param_info(index)
    }

    fn effect_get_param(&self, index: usize) -> f32 {
        self.get_param(index)
    }

    fn effect_set_param(&mut self, index: usize, value: f32) {
        self.set_param(index, value);
    }

    fn effect_find_param(&self, name: &str) -> Option<usize> {
        self.find_param_by_name(name)
    }

    fn effect_format_param(&self, index: usize) -> Option<String> {
        self.param_info(index)
            .map(|desc| desc.format_value(self.get_param(index)))
    }
}
