//! # Stompbox
//!
//! Effect-module framework for embedded guitar pedals.
//!
//! ## Architecture
//!
//! ```text
//! Your Effect (implements Processable + Lightable + Drawable)
//!        ↓
//! EffectModule (parameters, mappings, output cache, bypass flag)
//!        ↓
//! Host: audio engine, knob scanner, MIDI input, display
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stompbox::prelude::*;
//!
//! pub static CONFIG: EffectConfig = EffectConfig::new("boost", "Boost")
//!     .with_category(Category::Dynamics);
//!
//! static PARAMETERS: [ParameterDescriptor; 1] =
//!     [ParameterDescriptor::magnitude("Level").with_default(64).with_knob(0)];
//!
//! pub struct Boost { module: EffectModule }
//!
//! impl HasModule for Boost {
//!     fn module(&self) -> &EffectModule { &self.module }
//!     fn module_mut(&mut self) -> &mut EffectModule { &mut self.module }
//! }
//!
//! impl Processable for Boost { /* process_mono override */ }
//! impl Lightable for Boost {}
//! impl Drawable for Boost {}
//!
//! let mut registry = EffectRegistry::new();
//! registry.register(&CONFIG, || Box::new(Boost { module: EffectModule::new(&CONFIG, &PARAMETERS) }))?;
//! ```

// Re-export sub-crates
pub use stompbox_core as core;

/// Prelude module for convenient imports.
///
/// Import everything you need to build an effect:
/// ```rust,ignore
/// use stompbox::prelude::*;
/// ```
pub mod prelude {
    pub use stompbox_core::{
        // Effect contract
        Drawable, Effect, EffectModule, HasModule, Lightable, Processable,
        // Configuration
        Category, EffectConfig,
        // Parameters
        ParameterDescriptor, ParameterId, ParameterStore, ValueType,
        // Control surface and MIDI
        ControlHandle, ControlMappingIndex, KnobId, MidiCc,
        // Audio
        AudioFrame, AudioMode, AudioSampleCache,
        // Bypass
        ActivationState,
        // Display
        DrawSurface, Rect,
        // Host
        EffectFactory, EffectRegistry, ModuleDescription,
        // Error types
        StompboxError,
    };
}
