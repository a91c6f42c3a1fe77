//! # stompbox-core
//!
//! Core abstractions for pluggable effect modules on an embedded audio
//! platform such as a guitar pedal.
//!
//! Every effect satisfies the same contract, so the surrounding host (knob
//! scanner, MIDI input, display renderer, audio engine) can treat all effects
//! interchangeably: read and write their parameters, feed them audio one
//! sample at a time, and render their state.
//!
//! ## Main Traits
//!
//! - [`Effect`] - A complete, loadable effect
//! - [`Processable`] - Initialization and per-sample processing
//! - [`Lightable`] - Output LED brightness
//! - [`Drawable`] - UI animation and drawing
//! - [`DrawSurface`] - Caller-owned display the UI draws into
//!
//! ## Types
//!
//! - [`EffectModule`] - Shared state every effect carries
//! - [`ParameterDescriptor`] - Parameter metadata
//! - [`ParameterStore`] - Raw byte storage with typed views
//! - [`ControlMappingIndex`] - Knob / MIDI CC to parameter resolution
//! - [`ControlHandle`] - Control-context access to a running effect
//! - [`AudioSampleCache`] - Last output sample
//! - [`ActivationState`] - Active / bypassed flag
//! - [`EffectRegistry`] - Host-owned effect factory table
//! - [`ModuleDescription`] - Serializable metadata snapshot
//!
//! ## Real-time safety
//!
//! Processing methods, output getters and parameter accessors never block,
//! allocate or log. Allocation happens only in [`EffectModule::init`], the
//! registry and [`EffectModule::describe`].

pub mod activation;
pub mod audio;
pub mod config;
pub mod control;
pub mod control_mapping;
pub mod conversion;
pub mod description;
pub mod display;
pub mod effect;
pub mod error;
pub mod parameter_info;
pub mod parameter_store;
pub mod registry;
pub mod types;

// Re-exports for convenience
pub use activation::ActivationState;
pub use audio::{AudioFrame, AudioMode, AudioSampleCache};
pub use config::{Category, EffectConfig};
pub use control::ControlHandle;
pub use control_mapping::ControlMappingIndex;
pub use description::{ModuleDescription, ParameterDescription};
pub use display::DrawSurface;
pub use effect::{Drawable, Effect, EffectModule, HasModule, Lightable, Processable};
pub use error::{Result, StompboxError};
pub use parameter_info::{ParameterDescriptor, ValueType};
pub use parameter_store::ParameterStore;
pub use registry::{EffectFactory, EffectRegistry, RegisteredEffect};
pub use types::{KnobId, MidiCc, ParameterId, Rect, MAX_BIN_COUNT, MIDI_CC_COUNT, RAW_MAX};
