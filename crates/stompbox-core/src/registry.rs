//! Effect registry owned by the host.
//!
//! The host registers every effect type it can load, keyed by the id in its
//! [`EffectConfig`], together with a factory function. Switching effects
//! creates a fresh, initialized instance through [`EffectRegistry::create`].
//!
//! There is no global registry: the host owns this object and decides its
//! lifetime.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = EffectRegistry::new();
//! registry.register(&overdrive::CONFIG, overdrive::create)?;
//! registry.register(&chorus::CONFIG, chorus::create)?;
//!
//! let mut effect = registry.create("overdrive", 48_000.0)?;
//! ```

use crate::config::EffectConfig;
use crate::effect::Effect;
use crate::error::{Result, StompboxError};

/// Factory function creating an uninitialized effect instance.
pub type EffectFactory = fn() -> Box<dyn Effect>;

/// One registered effect type.
#[derive(Debug, Clone, Copy)]
pub struct RegisteredEffect {
    /// Effect configuration.
    pub config: &'static EffectConfig,
    factory: EffectFactory,
}

/// Maps effect ids to factories, in registration order.
#[derive(Debug, Default)]
pub struct EffectRegistry {
    entries: Vec<RegisteredEffect>,
}

impl EffectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an effect type.
    ///
    /// Fails if an effect with the same id is already registered.
    pub fn register(&mut self, config: &'static EffectConfig, factory: EffectFactory) -> Result<()> {
        if self.get(config.id).is_some() {
            return Err(StompboxError::DuplicateEffect(config.id));
        }

        self.entries.push(RegisteredEffect { config, factory });

        log::debug!(
            "registered effect '{}' ({}, {:?}, v{})",
            config.id,
            config.name,
            config.category,
            config.version
        );
        Ok(())
    }

    /// Create and initialize an instance of the effect registered as `id`.
    pub fn create(&self, id: &str, sample_rate: f32) -> Result<Box<dyn Effect>> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(StompboxError::InvalidSampleRate(sample_rate));
        }

        let entry = self
            .get(id)
            .ok_or_else(|| StompboxError::UnknownEffect(id.to_string()))?;

        let mut effect = (entry.factory)();
        effect.init(sample_rate);

        log::debug!("created effect '{id}' at {sample_rate} Hz");
        Ok(effect)
    }

    /// Look up a registered effect by id.
    pub fn get(&self, id: &str) -> Option<&RegisteredEffect> {
        self.entries.iter().find(|entry| entry.config.id == id)
    }

    /// Whether an effect with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of registered effects.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no effects are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over registered effects in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredEffect> + '_ {
        self.entries.iter()
    }

    /// Position of an effect in registration order, for cycling through
    /// effects with a selector knob or footswitch.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.config.id == id)
    }
}
