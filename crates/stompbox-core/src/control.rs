//! Control-context access to a running effect.
//!
//! The audio engine owns the effect and calls its processing methods with
//! `&mut` access. Knob scanning, MIDI input and the footswitch run in a
//! different context and go through a [`ControlHandle`] instead: a cheap,
//! cloneable view sharing the effect's parameter bytes and bypass flag.
//!
//! # Example
//!
//! ```ignore
//! let mut effect = registry.create("overdrive", 48_000.0)?;
//! let controls = effect.module().control_handle();
//!
//! // Control context
//! controls.apply_knob(0, 100);
//! controls.apply_midi_cc(15, 64);
//! controls.toggle_active();
//!
//! // Audio context
//! let out = effect.process_frame(AudioFrame::mono(input));
//! ```

use std::sync::Arc;

use crate::activation::ActivationState;
use crate::control_mapping::ControlMappingIndex;
use crate::parameter_info::ParameterDescriptor;
use crate::parameter_store::ParameterStore;
use crate::types::{KnobId, MidiCc, ParameterId};

/// Shared handle to an effect's parameters, mappings and bypass flag.
#[derive(Debug, Clone, Default)]
pub struct ControlHandle {
    parameters: ParameterStore,
    mapping: Arc<ControlMappingIndex>,
    activation: ActivationState,
}

impl ControlHandle {
    /// Build storage and mapping index for a descriptor table.
    pub fn new(descriptors: &'static [ParameterDescriptor], activation: ActivationState) -> Self {
        Self {
            parameters: ParameterStore::new(descriptors),
            mapping: Arc::new(ControlMappingIndex::new(descriptors)),
            activation,
        }
    }

    /// Parameter storage.
    #[inline]
    pub fn parameters(&self) -> &ParameterStore {
        &self.parameters
    }

    /// Knob / MIDI CC mapping index.
    #[inline]
    pub fn mapping(&self) -> &ControlMappingIndex {
        &self.mapping
    }

    /// Bypass flag.
    #[inline]
    pub fn activation(&self) -> &ActivationState {
        &self.activation
    }

    /// Parameter driven by `knob`, if any.
    pub fn resolve_knob(&self, knob: KnobId) -> Option<ParameterId> {
        self.mapping.resolve_knob(knob)
    }

    /// Parameter driven by MIDI CC `cc`, if any.
    pub fn resolve_midi_cc(&self, cc: MidiCc) -> Option<ParameterId> {
        self.mapping.resolve_midi_cc(cc)
    }

    /// Set the parameter mapped to `knob` to a raw value.
    ///
    /// Returns the parameter that changed, or `None` if the knob is unmapped.
    pub fn apply_knob(&self, knob: KnobId, raw: u8) -> Option<ParameterId> {
        let id = self.resolve_knob(knob)?;
        self.parameters.set_raw(id, raw);
        Some(id)
    }

    /// Set the parameter mapped to MIDI CC `cc` to the controller value.
    ///
    /// Returns the parameter that changed, or `None` if the CC is unmapped.
    pub fn apply_midi_cc(&self, cc: MidiCc, value: u8) -> Option<ParameterId> {
        let id = self.resolve_midi_cc(cc)?;
        self.parameters.set_raw(id, value);
        Some(id)
    }

    /// Set whether the effect is active.
    pub fn set_active(&self, active: bool) {
        self.activation.set_active(active);
    }

    /// Returns `true` if the effect is active.
    pub fn is_active(&self) -> bool {
        self.activation.is_active()
    }

    /// Flip the bypass state and return the new value.
    pub fn toggle_active(&self) -> bool {
        self.activation.toggle()
    }
}
