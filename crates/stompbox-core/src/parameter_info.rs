//! Parameter metadata types.
//!
//! This module provides types for describing parameter metadata:
//! - [`ParameterDescriptor`] - Complete parameter description (name, type, default, mappings)
//! - [`ValueType`] - How the raw byte is meant to be interpreted
//!
//! Descriptor tables are plain `static` arrays built with `const fn` builders.
//! They are handed to the effect at construction and never change afterwards.
//!
//! # Example
//!
//! ```ignore
//! use stompbox_core::ParameterDescriptor;
//!
//! static PARAMETERS: [ParameterDescriptor; 3] = [
//!     ParameterDescriptor::magnitude("Time").with_default(64).with_knob(0).with_midi_cc(14),
//!     ParameterDescriptor::magnitude("Feedback").with_default(40).with_knob(1),
//!     ParameterDescriptor::binned("Mode", 3).with_default(0),
//! ];
//! ```

use serde::Serialize;

use crate::types::{KnobId, MidiCc, MAX_BIN_COUNT, RAW_MAX};

/// Interpretation of a parameter's raw 0..=127 value.
///
/// The discriminants match the numeric type codes exposed to hosts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum ValueType {
    /// Raw byte value (0..=127)
    #[default]
    Raw = 0,
    /// Float magnitude (0.0..=1.0)
    Magnitude = 1,
    /// On / off
    Bool = 2,
    /// One of `bin_count` discrete choices, numbered from 1
    Binned = 3,
}

impl ValueType {
    /// Sentinel type code for unknown parameters.
    pub const UNKNOWN_CODE: i32 = -1;

    /// Numeric type code (Raw=0, Magnitude=1, Bool=2, Binned=3).
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Look up a value type by its numeric code.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ValueType::Raw),
            1 => Some(ValueType::Magnitude),
            2 => Some(ValueType::Bool),
            3 => Some(ValueType::Binned),
            _ => None,
        }
    }
}

/// Metadata describing a single effect parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterDescriptor {
    /// Name displayed on the screen while editing the parameter.
    pub name: &'static str,
    /// How the raw value is interpreted.
    pub value_type: ValueType,
    /// Number of distinct choices. Only meaningful for [`ValueType::Binned`].
    pub bin_count: u8,
    /// Raw value applied when the effect is initialized.
    pub default_value: u8,
    /// Physical knob controlling this parameter, if any.
    pub knob: Option<KnobId>,
    /// MIDI CC controlling this parameter, if any.
    pub midi_cc: Option<MidiCc>,
}

impl ParameterDescriptor {
    /// Create a raw (0..=127) parameter.
    pub const fn raw(name: &'static str) -> Self {
        Self::with_type(name, ValueType::Raw, 1)
    }

    /// Create a magnitude (0.0..=1.0) parameter.
    pub const fn magnitude(name: &'static str) -> Self {
        Self::with_type(name, ValueType::Magnitude, 1)
    }

    /// Create an on/off parameter.
    pub const fn boolean(name: &'static str) -> Self {
        Self::with_type(name, ValueType::Bool, 2)
    }

    /// Create a binned parameter with `bin_count` choices.
    ///
    /// Bin counts outside `1..=128` are clamped when the value is converted.
    pub const fn binned(name: &'static str, bin_count: u8) -> Self {
        Self::with_type(name, ValueType::Binned, bin_count)
    }

    const fn with_type(name: &'static str, value_type: ValueType, bin_count: u8) -> Self {
        Self {
            name,
            value_type,
            bin_count,
            default_value: 0,
            knob: None,
            midi_cc: None,
        }
    }

    /// Set the raw default value.
    pub const fn with_default(mut self, default_value: u8) -> Self {
        self.default_value = default_value;
        self
    }

    /// Map the parameter to a physical knob.
    pub const fn with_knob(mut self, knob: KnobId) -> Self {
        self.knob = Some(knob);
        self
    }

    /// Map the parameter to a MIDI CC number.
    ///
    /// Numbers above 127 are not valid controllers and never resolve.
    pub const fn with_midi_cc(mut self, cc: MidiCc) -> Self {
        self.midi_cc = Some(cc);
        self
    }

    /// Bin count used for conversions, clamped to `1..=128`.
    pub const fn effective_bin_count(&self) -> u8 {
        if self.bin_count == 0 {
            1
        } else if self.bin_count > MAX_BIN_COUNT {
            MAX_BIN_COUNT
        } else {
            self.bin_count
        }
    }

    /// Default raw value clamped to `0..=127`.
    pub const fn effective_default(&self) -> u8 {
        if self.default_value > RAW_MAX {
            RAW_MAX
        } else {
            self.default_value
        }
    }

    /// Whether the descriptor needed clamping to become usable.
    ///
    /// Only binned parameters care about their bin count.
    pub const fn needs_sanitizing(&self) -> bool {
        let bad_bins = matches!(self.value_type, ValueType::Binned)
            && self.effective_bin_count() != self.bin_count;
        bad_bins || self.default_value > RAW_MAX
    }
}
