//! Read-only module descriptions for display and editor hosts.
//!
//! [`ModuleDescription`] is a serializable snapshot of an effect's metadata
//! and current raw values, e.g. for a companion editor or a MIDI
//! implementation chart. It is an export only: there is no way to load one
//! back into an effect.

use serde::Serialize;

use crate::audio::AudioMode;
use crate::config::Category;
use crate::effect::EffectModule;
use crate::error::Result;
use crate::parameter_info::ValueType;
use crate::types::{KnobId, MidiCc, ParameterId};

/// Snapshot of one parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterDescription {
    pub id: ParameterId,
    pub name: &'static str,
    pub value_type: ValueType,
    /// Present for binned parameters only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_count: Option<u8>,
    pub default_value: u8,
    pub raw: u8,
    pub knob: Option<KnobId>,
    pub midi_cc: Option<MidiCc>,
}

/// Snapshot of one effect instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleDescription {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub audio_mode: AudioMode,
    pub version: &'static str,
    pub sample_rate: f32,
    pub active: bool,
    pub parameters: Vec<ParameterDescription>,
}

impl ModuleDescription {
    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl EffectModule {
    /// Capture metadata and current parameter values.
    ///
    /// Allocates; don't call from the audio path.
    pub fn describe(&self) -> ModuleDescription {
        let store = self.parameters();
        let parameters = store
            .iter()
            .enumerate()
            .map(|(id, (desc, raw))| ParameterDescription {
                id,
                name: desc.name,
                value_type: desc.value_type,
                bin_count: store.bin_count(id),
                default_value: desc.effective_default(),
                raw,
                knob: desc.knob,
                midi_cc: desc.midi_cc,
            })
            .collect();

        let config = self.config();
        ModuleDescription {
            id: config.id,
            name: config.name,
            category: config.category,
            audio_mode: config.audio_mode,
            version: config.version,
            sample_rate: self.sample_rate(),
            active: self.is_active(),
            parameters,
        }
    }
}
