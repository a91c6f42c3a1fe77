//! Knob and MIDI CC to parameter resolution.
//!
//! [`ControlMappingIndex`] answers "which parameter does this physical knob
//! (or MIDI controller) drive?" for one descriptor table. Several parameters
//! may share a mapping; the lowest parameter id wins.
//!
//! Knob lookups scan the descriptor table. MIDI CC lookups go through a
//! 128-entry table built once at initialization, since controller messages
//! can arrive in dense bursts.

use crate::parameter_info::ParameterDescriptor;
use crate::types::{KnobId, MidiCc, ParameterId, MIDI_CC_COUNT};

/// Resolves control-surface knobs and MIDI CCs to parameter ids.
#[derive(Debug, Clone)]
pub struct ControlMappingIndex {
    descriptors: &'static [ParameterDescriptor],
    midi_cc: [Option<u16>; MIDI_CC_COUNT],
}

impl ControlMappingIndex {
    /// Build the index for a descriptor table.
    pub fn new(descriptors: &'static [ParameterDescriptor]) -> Self {
        let mut midi_cc = [None; MIDI_CC_COUNT];

        for (id, desc) in descriptors.iter().enumerate() {
            let Some(cc) = desc.midi_cc else { continue };
            let Some(slot) = midi_cc.get_mut(cc as usize) else {
                log::warn!("parameter '{}' maps to invalid MIDI CC {cc}", desc.name);
                continue;
            };
            let current = *slot;
            match current {
                None => *slot = u16::try_from(id).ok(),
                Some(first) => log::debug!(
                    "MIDI CC {cc} is shared; '{}' shadowed by parameter {first}",
                    desc.name
                ),
            }
        }

        Self {
            descriptors,
            midi_cc,
        }
    }

    /// Create an index that resolves nothing.
    pub fn empty() -> Self {
        Self::new(&[])
    }

    /// Returns the first parameter mapped to `knob`, if any.
    pub fn resolve_knob(&self, knob: KnobId) -> Option<ParameterId> {
        self.descriptors
            .iter()
            .position(|desc| desc.knob == Some(knob))
    }

    /// Returns the first parameter mapped to MIDI CC `cc`, if any.
    ///
    /// Only controller numbers 0..=127 exist on the wire. A descriptor mapped
    /// above 127 is reported when the index is built and never resolves, even
    /// though a scan of the descriptor table would find it.
    #[inline]
    pub fn resolve_midi_cc(&self, cc: MidiCc) -> Option<ParameterId> {
        self.midi_cc
            .get(cc as usize)
            .copied()
            .flatten()
            .map(usize::from)
    }

    /// Iterate over `(knob, parameter)` pairs that resolve, in knob order.
    ///
    /// Shadowed duplicates are skipped.
    pub fn knob_assignments(&self) -> impl Iterator<Item = (KnobId, ParameterId)> + '_ {
        (0..=KnobId::MAX).filter_map(|knob| self.resolve_knob(knob).map(|id| (knob, id)))
    }
}

impl Default for ControlMappingIndex {
    fn default() -> Self {
        Self::empty()
    }
}
