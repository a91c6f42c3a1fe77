//! Raw parameter storage with typed views.
//!
//! [`ParameterStore`] owns one byte per parameter, indexed 1:1 with the
//! effect's descriptor table. The byte is the single source of truth; the
//! magnitude, bool and binned accessors are projections computed by
//! [`crate::conversion`] on every call.
//!
//! # Invalid identifiers
//!
//! Nothing here can fail. Setters with an out-of-range id do nothing, and
//! getters return a sentinel (`0`, `0.0`, `false`, or `None`). Bool and binned
//! access on a parameter declared with a different [`ValueType`] is treated the
//! same way as an invalid id.
//!
//! # Thread Safety
//!
//! Parameters are read by the audio context while the control context (knob
//! scan, MIDI, UI) writes them. Each value is an [`AtomicU8`] accessed with
//! `Ordering::Relaxed`: a single parameter can never be observed torn, but
//! there is no consistent snapshot across several parameters. Cloning the
//! store shares the same storage, which is how the control context gets its
//! handle.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::conversion;
use crate::parameter_info::{ParameterDescriptor, ValueType};
use crate::types::ParameterId;

/// Shared raw value storage for all parameters of one effect instance.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    descriptors: &'static [ParameterDescriptor],
    values: Arc<[AtomicU8]>,
}

impl ParameterStore {
    /// Create a store for the given descriptor table, applying defaults.
    ///
    /// This allocates; call it at initialization, never from the audio path.
    pub fn new(descriptors: &'static [ParameterDescriptor]) -> Self {
        let values = descriptors
            .iter()
            .map(|desc| AtomicU8::new(desc.effective_default()))
            .collect();
        Self {
            descriptors,
            values,
        }
    }

    /// Create a store with no parameters.
    ///
    /// Every setter is a no-op and every getter returns its sentinel.
    pub fn empty() -> Self {
        Self::new(&[])
    }

    /// Returns the number of parameters.
    #[inline]
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Returns the descriptor table.
    #[inline]
    pub fn descriptors(&self) -> &'static [ParameterDescriptor] {
        self.descriptors
    }

    /// Returns the descriptor for a parameter.
    #[inline]
    pub fn descriptor(&self, id: ParameterId) -> Option<&'static ParameterDescriptor> {
        self.descriptors.get(id)
    }

    /// Returns the parameter's value type.
    pub fn value_type(&self, id: ParameterId) -> Option<ValueType> {
        self.descriptor(id).map(|desc| desc.value_type)
    }

    /// Returns the bin count of a binned parameter.
    ///
    /// `None` for invalid ids and for parameters that aren't binned.
    pub fn bin_count(&self, id: ParameterId) -> Option<u8> {
        self.binned_descriptor(id)
            .map(ParameterDescriptor::effective_bin_count)
    }

    /// Returns the descriptor for `id` if it is a binned parameter.
    #[inline]
    fn binned_descriptor(&self, id: ParameterId) -> Option<&'static ParameterDescriptor> {
        self.descriptor(id)
            .filter(|desc| desc.value_type == ValueType::Binned)
    }

    /// Returns `true` if `id` is a bool parameter.
    #[inline]
    fn is_bool(&self, id: ParameterId) -> bool {
        self.value_type(id) == Some(ValueType::Bool)
    }

    // =========================================================================
    // Raw
    // =========================================================================

    /// Gets the raw value (0..=127). Returns 0 for invalid ids.
    #[inline]
    pub fn get_raw(&self, id: ParameterId) -> u8 {
        self.values
            .get(id)
            .map_or(0, |value| value.load(Ordering::Relaxed))
    }

    /// Sets the raw value, clamped to 0..=127. No effect for invalid ids.
    #[inline]
    pub fn set_raw(&self, id: ParameterId, raw: u8) {
        if let Some(value) = self.values.get(id) {
            value.store(conversion::clamp_raw(raw), Ordering::Relaxed);
        }
    }

    // =========================================================================
    // Magnitude
    // =========================================================================

    /// Gets the value as a magnitude in `[0.0, 1.0]`. Returns 0.0 for invalid ids.
    #[inline]
    pub fn get_magnitude(&self, id: ParameterId) -> f32 {
        conversion::raw_to_magnitude(self.get_raw(id))
    }

    /// Sets the value from a magnitude, clamped to `[0.0, 1.0]`.
    #[inline]
    pub fn set_magnitude(&self, id: ParameterId, magnitude: f32) {
        self.set_raw(id, conversion::magnitude_to_raw(magnitude));
    }

    // =========================================================================
    // Bool
    // =========================================================================

    /// Gets a bool parameter (raw >= 64).
    ///
    /// Returns false for invalid ids and for parameters that aren't bools.
    #[inline]
    pub fn get_bool(&self, id: ParameterId) -> bool {
        self.is_bool(id) && conversion::raw_to_bool(self.get_raw(id))
    }

    /// Sets a bool parameter (127 for true, 0 for false).
    ///
    /// No effect for invalid ids and for parameters that aren't bools.
    #[inline]
    pub fn set_bool(&self, id: ParameterId, value: bool) {
        if self.is_bool(id) {
            self.set_raw(id, conversion::bool_to_raw(value));
        }
    }

    // =========================================================================
    // Binned
    // =========================================================================

    /// Gets the bin (1..=bin_count) of a binned parameter.
    ///
    /// Returns 0 for invalid ids and for parameters that aren't binned.
    #[inline]
    pub fn get_binned(&self, id: ParameterId) -> u8 {
        match self.binned_descriptor(id) {
            Some(desc) => conversion::raw_to_bin(self.get_raw(id), desc.bin_count),
            None => 0,
        }
    }

    /// Sets a binned parameter to the given bin, clamped to 1..=bin_count.
    ///
    /// No effect for invalid ids and for parameters that aren't binned.
    #[inline]
    pub fn set_binned(&self, id: ParameterId, bin: u8) {
        if let Some(desc) = self.binned_descriptor(id) {
            self.set_raw(id, conversion::bin_to_raw(bin, desc.bin_count));
        }
    }

    // =========================================================================
    // Bulk
    // =========================================================================

    /// Restores every parameter to its descriptor default.
    pub fn reset_to_defaults(&self) {
        for (value, desc) in self.values.iter().zip(self.descriptors) {
            value.store(desc.effective_default(), Ordering::Relaxed);
        }
    }

    /// Iterate over `(descriptor, raw value)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static ParameterDescriptor, u8)> + '_ {
        self.descriptors
            .iter()
            .zip(self.values.iter())
            .map(|(desc, value)| (desc, value.load(Ordering::Relaxed)))
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::empty()
    }
}
