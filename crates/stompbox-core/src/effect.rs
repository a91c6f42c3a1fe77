//! The effect-module contract.
//!
//! [`EffectModule`] is the shared state every effect carries: configuration,
//! parameter storage, control mappings, the output sample cache and the bypass
//! flag. Per-effect behavior is layered on top through three capability
//! traits, each with a default implementation:
//!
//! - [`Processable`] - initialization and per-sample audio processing
//! - [`Lightable`] - output LED brightness
//! - [`Drawable`] - UI animation and custom drawing
//!
//! Anything implementing all three (plus `Send`) is an [`Effect`] and can be
//! loaded by the host through a [`Box<dyn Effect>`]. `EffectModule` itself
//! implements them with the defaults, so a bare module is a working
//! pass-through effect.
//!
//! # Lifecycle
//!
//! 1. Construct the effect (`EffectModule::new` inside its constructor).
//! 2. Call [`Processable::init`] exactly once with the engine's sample rate.
//!    This allocates parameter storage and applies defaults. Before `init`,
//!    the effect has zero parameters.
//! 3. Call either [`Processable::process_mono`] or [`Processable::process_stereo`]
//!    once per sample, never both on one instance. [`Processable::process_frame`]
//!    picks the right one from the effect's [`AudioMode`].
//!
//! # Example
//!
//! ```ignore
//! use stompbox_core::*;
//!
//! static CONFIG: EffectConfig = EffectConfig::new("boost", "Boost");
//! static PARAMETERS: [ParameterDescriptor; 1] =
//!     [ParameterDescriptor::magnitude("Level").with_default(64).with_knob(0)];
//!
//! struct Boost {
//!     module: EffectModule,
//! }
//!
//! impl HasModule for Boost {
//!     fn module(&self) -> &EffectModule { &self.module }
//!     fn module_mut(&mut self) -> &mut EffectModule { &mut self.module }
//! }
//!
//! impl Processable for Boost {
//!     fn process_mono(&mut self, input: f32) {
//!         let module = self.module_mut();
//!         let out = if module.is_active() {
//!             input * (1.0 + 3.0 * module.parameter_magnitude(0))
//!         } else {
//!             input
//!         };
//!         module.write_output(out, out);
//!     }
//! }
//!
//! impl Lightable for Boost {}
//! impl Drawable for Boost {}
//! ```

use crate::activation::ActivationState;
use crate::audio::{AudioFrame, AudioMode, AudioSampleCache};
use crate::config::EffectConfig;
use crate::control::ControlHandle;
use crate::control_mapping::ControlMappingIndex;
use crate::display::DrawSurface;
use crate::parameter_info::{ParameterDescriptor, ValueType};
use crate::parameter_store::ParameterStore;
use crate::types::{KnobId, MidiCc, ParameterId, Rect};

// =============================================================================
// EffectModule
// =============================================================================

/// Shared state of one effect instance.
#[derive(Debug)]
pub struct EffectModule {
    config: &'static EffectConfig,
    descriptors: &'static [ParameterDescriptor],
    controls: ControlHandle,
    audio: AudioSampleCache,
    sample_rate: f32,
    initialized: bool,
}

impl EffectModule {
    /// Create an uninitialized module.
    ///
    /// The descriptor table is fixed for the module's lifetime. Parameters
    /// become accessible once [`init`](Self::init) has run.
    pub fn new(config: &'static EffectConfig, descriptors: &'static [ParameterDescriptor]) -> Self {
        Self {
            config,
            descriptors,
            controls: ControlHandle::default(),
            audio: AudioSampleCache::default(),
            sample_rate: 0.0,
            initialized: false,
        }
    }

    /// Allocate parameter storage, apply defaults and build the mapping index.
    ///
    /// Runs once; later calls are ignored so that control handles already
    /// handed out keep pointing at live storage.
    pub fn init(&mut self, sample_rate: f32) {
        if self.initialized {
            log::warn!(
                "'{}' already initialized at {} Hz; ignoring init at {sample_rate} Hz",
                self.config.name,
                self.sample_rate
            );
            return;
        }

        for (id, desc) in self.descriptors.iter().enumerate() {
            if desc.needs_sanitizing() {
                log::warn!(
                    "'{}' parameter {id} ('{}') clamped: bins {} -> {}, default {} -> {}",
                    self.config.name,
                    desc.name,
                    desc.bin_count,
                    desc.effective_bin_count(),
                    desc.default_value,
                    desc.effective_default()
                );
            }
        }

        let activation = self.controls.activation().clone();
        self.controls = ControlHandle::new(self.descriptors, activation);
        self.sample_rate = sample_rate;
        self.initialized = true;

        log::debug!(
            "initialized '{}' with {} parameters at {sample_rate} Hz",
            self.config.name,
            self.descriptors.len()
        );
    }

    /// Whether [`init`](Self::init) has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Sample rate passed to [`init`](Self::init), or 0.0 before initialization.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Static configuration of this effect type.
    pub fn config(&self) -> &'static EffectConfig {
        self.config
    }

    /// Effect name for display.
    pub fn name(&self) -> &'static str {
        self.config.name
    }

    /// Audio entry point this effect is driven through.
    pub fn audio_mode(&self) -> AudioMode {
        self.config.audio_mode
    }

    // =========================================================================
    // Parameter metadata
    // =========================================================================

    /// Number of parameters (0 before initialization).
    #[inline]
    pub fn parameter_count(&self) -> usize {
        self.controls.parameters().count()
    }

    /// Parameter display name, or `""` for invalid ids.
    pub fn parameter_name(&self, id: ParameterId) -> &'static str {
        self.controls
            .parameters()
            .descriptor(id)
            .map_or("", |desc| desc.name)
    }

    /// Parameter value type, or `None` for invalid ids.
    pub fn parameter_type(&self, id: ParameterId) -> Option<ValueType> {
        self.controls.parameters().value_type(id)
    }

    /// Numeric parameter type code, or -1 for invalid ids.
    pub fn parameter_type_code(&self, id: ParameterId) -> i32 {
        self.parameter_type(id)
            .map_or(ValueType::UNKNOWN_CODE, ValueType::code)
    }

    /// Bin count of a binned parameter; `None` otherwise.
    pub fn parameter_bin_count(&self, id: ParameterId) -> Option<u8> {
        self.controls.parameters().bin_count(id)
    }

    // =========================================================================
    // Parameter values
    // =========================================================================

    /// Raw value (0..=127), or 0 for invalid ids.
    #[inline]
    pub fn parameter_raw(&self, id: ParameterId) -> u8 {
        self.controls.parameters().get_raw(id)
    }

    /// Value as a magnitude in `[0.0, 1.0]`, or 0.0 for invalid ids.
    #[inline]
    pub fn parameter_magnitude(&self, id: ParameterId) -> f32 {
        self.controls.parameters().get_magnitude(id)
    }

    /// Value as a bool, or `false` for invalid or non-bool ids.
    #[inline]
    pub fn parameter_bool(&self, id: ParameterId) -> bool {
        self.controls.parameters().get_bool(id)
    }

    /// Selected bin (1..=bin_count), or 0 for invalid or non-binned ids.
    #[inline]
    pub fn parameter_binned(&self, id: ParameterId) -> u8 {
        self.controls.parameters().get_binned(id)
    }

    /// Set the raw value (clamped). No effect for invalid ids.
    #[inline]
    pub fn set_parameter_raw(&self, id: ParameterId, raw: u8) {
        self.controls.parameters().set_raw(id, raw);
    }

    /// Set the value from a magnitude (clamped to `[0.0, 1.0]`).
    #[inline]
    pub fn set_parameter_magnitude(&self, id: ParameterId, magnitude: f32) {
        self.controls.parameters().set_magnitude(id, magnitude);
    }

    /// Set a bool parameter. No effect for invalid or non-bool ids.
    #[inline]
    pub fn set_parameter_bool(&self, id: ParameterId, value: bool) {
        self.controls.parameters().set_bool(id, value);
    }

    /// Select a bin (clamped to 1..=bin_count) of a binned parameter.
    #[inline]
    pub fn set_parameter_binned(&self, id: ParameterId, bin: u8) {
        self.controls.parameters().set_binned(id, bin);
    }

    /// Restore every parameter to its default.
    pub fn reset_parameters(&self) {
        self.controls.parameters().reset_to_defaults();
    }

    /// Parameter storage.
    pub fn parameters(&self) -> &ParameterStore {
        self.controls.parameters()
    }

    // =========================================================================
    // Control mappings
    // =========================================================================

    /// Parameter mapped to `knob`, if any.
    pub fn knob_parameter(&self, knob: KnobId) -> Option<ParameterId> {
        self.controls.resolve_knob(knob)
    }

    /// Parameter mapped to MIDI CC `cc`, if any.
    pub fn midi_cc_parameter(&self, cc: MidiCc) -> Option<ParameterId> {
        self.controls.resolve_midi_cc(cc)
    }

    /// Set the parameter mapped to `knob`. See [`ControlHandle::apply_knob`].
    pub fn apply_knob(&self, knob: KnobId, raw: u8) -> Option<ParameterId> {
        self.controls.apply_knob(knob, raw)
    }

    /// Set the parameter mapped to `cc`. See [`ControlHandle::apply_midi_cc`].
    pub fn apply_midi_cc(&self, cc: MidiCc, value: u8) -> Option<ParameterId> {
        self.controls.apply_midi_cc(cc, value)
    }

    /// Mapping index.
    pub fn mapping(&self) -> &ControlMappingIndex {
        self.controls.mapping()
    }

    /// Handle for the control context.
    ///
    /// Take it after initialization; it shares storage with this module.
    pub fn control_handle(&self) -> ControlHandle {
        self.controls.clone()
    }

    // =========================================================================
    // Activation
    // =========================================================================

    /// Set whether the effect is active (`true`) or bypassed (`false`).
    pub fn set_active(&self, active: bool) {
        self.controls.set_active(active);
    }

    /// Returns `true` if the effect is active, `false` if bypassed.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.controls.is_active()
    }

    /// Bypass flag.
    pub fn activation(&self) -> &ActivationState {
        self.controls.activation()
    }

    // =========================================================================
    // Audio output
    // =========================================================================

    /// Store this frame's output. Called from processing overrides.
    #[inline]
    pub fn write_output(&mut self, left: f32, right: f32) {
        self.audio.write(left, right);
    }

    /// Most recent left (or mono) output sample.
    #[inline]
    pub fn audio_left(&self) -> f32 {
        self.audio.left()
    }

    /// Most recent right output sample.
    #[inline]
    pub fn audio_right(&self) -> f32 {
        self.audio.right()
    }

    /// Most recent output frame.
    #[inline]
    pub fn output(&self) -> AudioFrame {
        self.audio.frame()
    }
}

// =============================================================================
// Capability traits
// =============================================================================

/// Access to the shared [`EffectModule`] state of an effect.
pub trait HasModule {
    /// Returns a reference to the module state.
    fn module(&self) -> &EffectModule;

    /// Returns a mutable reference to the module state.
    fn module_mut(&mut self) -> &mut EffectModule;
}

/// Initialization and per-sample audio processing.
///
/// The defaults pass audio through unchanged. Overrides are responsible for
/// honoring [`EffectModule::is_active`] themselves: the framework never
/// bypasses an effect on its behalf.
///
/// Processing methods run on the real-time audio path. They must not block,
/// allocate or log.
pub trait Processable: HasModule {
    /// Initialize for the given sample rate. Must run once before processing.
    ///
    /// Overrides must call `self.module_mut().init(sample_rate)`.
    fn init(&mut self, sample_rate: f32) {
        self.module_mut().init(sample_rate);
    }

    /// Process one mono sample.
    ///
    /// Don't call [`process_stereo`](Self::process_stereo) on the same instance.
    fn process_mono(&mut self, input: f32) {
        self.module_mut().write_output(input, input);
    }

    /// Process one stereo sample pair.
    ///
    /// Don't call [`process_mono`](Self::process_mono) on the same instance.
    fn process_stereo(&mut self, left: f32, right: f32) {
        self.module_mut().write_output(left, right);
    }

    /// Process one frame through the entry point matching the effect's
    /// [`AudioMode`] and return the output.
    ///
    /// Mono effects receive `frame.left`.
    fn process_frame(&mut self, frame: AudioFrame) -> AudioFrame {
        match self.module().audio_mode() {
            AudioMode::Mono => self.process_mono(frame.left),
            AudioMode::Stereo => self.process_stereo(frame.left, frame.right),
        }
        self.module().output()
    }
}

/// Drives the effect's output LED.
pub trait Lightable: HasModule {
    /// LED brightness in `[0.0, 1.0]`.
    ///
    /// Defaults to fully lit while active and dark while bypassed.
    fn output_led_brightness(&self) -> f32 {
        if self.module().is_active() {
            1.0
        } else {
            0.0
        }
    }
}

/// Custom UI for the effect's entry in the host menu.
///
/// Both hooks run in the control context at display refresh rate.
pub trait Drawable: HasModule {
    /// Advance UI animation by `elapsed` seconds since the last call.
    fn update_ui(&mut self, _elapsed: f32) {}

    /// Draw the effect into `bounds` on a caller-owned surface.
    ///
    /// `current_index` / `item_count` give the menu position for context.
    /// `is_editing` is true while the selected value is being edited
    /// directly; it affects highlighting only.
    ///
    /// The default draws nothing, letting the host render its generic
    /// parameter list.
    fn draw_ui(
        &self,
        _display: &mut dyn DrawSurface,
        _current_index: usize,
        _item_count: usize,
        _bounds: Rect,
        _is_editing: bool,
    ) {
    }
}

/// A complete, loadable effect.
///
/// Implemented automatically for every type providing the three capabilities.
pub trait Effect: Processable + Lightable + Drawable + Send {}

impl<T> Effect for T where T: Processable + Lightable + Drawable + Send {}

impl HasModule for EffectModule {
    fn module(&self) -> &EffectModule {
        self
    }

    fn module_mut(&mut self) -> &mut EffectModule {
        self
    }
}

impl Processable for EffectModule {}
impl Lightable for EffectModule {}
impl Drawable for EffectModule {}

#[cfg(test)]
mod tests {
    use super::*;

    static CONFIG: EffectConfig = EffectConfig::new("base", "Base");
    static STEREO_CONFIG: EffectConfig =
        EffectConfig::new("wide", "Wide").with_audio_mode(AudioMode::Stereo);

    static PARAMETERS: [ParameterDescriptor; 3] = [
        ParameterDescriptor::magnitude("Gain").with_default(64),
        ParameterDescriptor::boolean("Boost"),
        ParameterDescriptor::magnitude("Level").with_knob(1).with_midi_cc(7),
    ];

    fn module() -> EffectModule {
        let mut module = EffectModule::new(&CONFIG, &PARAMETERS);
        module.init(48_000.0);
        module
    }

    /// Inverts the signal while active and records stereo calls.
    struct Inverter {
        module: EffectModule,
        stereo_calls: usize,
        elapsed: f32,
    }

    impl Inverter {
        fn new(config: &'static EffectConfig) -> Self {
            Self {
                module: EffectModule::new(config, &PARAMETERS),
                stereo_calls: 0,
                elapsed: 0.0,
            }
        }
    }

    impl HasModule for Inverter {
        fn module(&self) -> &EffectModule {
            &self.module
        }

        fn module_mut(&mut self) -> &mut EffectModule {
            &mut self.module
        }
    }

    impl Processable for Inverter {
        fn process_mono(&mut self, input: f32) {
            let out = if self.module.is_active() { -input } else { input };
            self.module.write_output(out, out);
        }

        fn process_stereo(&mut self, left: f32, right: f32) {
            self.stereo_calls += 1;
            if self.module.is_active() {
                self.module.write_output(right, left);
            } else {
                self.module.write_output(left, right);
            }
        }
    }

    impl Lightable for Inverter {
        fn output_led_brightness(&self) -> f32 {
            if self.module.is_active() {
                self.module.audio_left().abs().min(1.0)
            } else {
                0.0
            }
        }
    }

    impl Drawable for Inverter {
        fn update_ui(&mut self, elapsed: f32) {
            self.elapsed += elapsed;
        }
    }

    #[test]
    fn test_uninitialized_has_no_parameters() {
        let module = EffectModule::new(&CONFIG, &PARAMETERS);
        assert!(!module.is_initialized());
        assert_eq!(module.parameter_count(), 0);
        assert_eq!(module.sample_rate(), 0.0);
        module.set_parameter_raw(0, 10);
        assert_eq!(module.parameter_raw(0), 0);
    }

    #[test]
    fn test_init_applies_defaults() {
        let module = module();
        assert!(module.is_initialized());
        assert_eq!(module.sample_rate(), 48_000.0);
        assert_eq!(module.parameter_count(), 3);
        assert_eq!(module.parameter_raw(0), 64);
        assert_eq!(module.name(), "Base");
    }

    #[test]
    fn test_second_init_is_ignored() {
        let mut module = module();
        module.set_parameter_raw(0, 5);
        let handle = module.control_handle();
        module.init(96_000.0);
        assert_eq!(module.sample_rate(), 48_000.0);
        assert_eq!(module.parameter_raw(0), 5);
        handle.parameters().set_raw(0, 9);
        assert_eq!(module.parameter_raw(0), 9);
    }

    #[test]
    fn test_bypass_set_before_init_survives() {
        let mut module = EffectModule::new(&CONFIG, &PARAMETERS);
        module.set_active(false);
        module.init(44_100.0);
        assert!(!module.is_active());
    }

    #[test]
    fn test_metadata_queries() {
        let module = module();
        assert_eq!(module.parameter_name(1), "Boost");
        assert_eq!(module.parameter_name(9), "");
        assert_eq!(module.parameter_type(1), Some(ValueType::Bool));
        assert_eq!(module.parameter_type_code(0), 1);
        assert_eq!(module.parameter_type_code(9), -1);
        assert_eq!(module.parameter_bin_count(0), None);
    }

    #[test]
    fn test_invalid_id_leaves_values_unchanged() {
        let module = module();
        let before: Vec<u8> = (0..3).map(|id| module.parameter_raw(id)).collect();
        module.set_parameter_raw(999, 42);
        let after: Vec<u8> = (0..3).map(|id| module.parameter_raw(id)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_typed_accessors() {
        let module = module();
        module.set_parameter_magnitude(0, 0.25);
        assert!((module.parameter_magnitude(0) - 0.25).abs() <= 1.0 / 127.0);
        module.set_parameter_bool(1, true);
        assert_eq!(module.parameter_raw(1), 127);
        assert!(module.parameter_bool(1));
        module.set_parameter_raw(1, 63);
        assert!(!module.parameter_bool(1));
        module.set_parameter_raw(1, 64);
        assert!(module.parameter_bool(1));

        module.set_parameter_raw(0, 100);
        module.set_parameter_bool(0, false);
        assert_eq!(module.parameter_raw(0), 100);
        assert!(!module.parameter_bool(0));
    }

    #[test]
    fn test_reset_parameters() {
        let module = module();
        module.set_parameter_raw(0, 1);
        module.reset_parameters();
        assert_eq!(module.parameter_raw(0), 64);
    }

    #[test]
    fn test_mappings() {
        let module = module();
        assert_eq!(module.knob_parameter(1), Some(2));
        assert_eq!(module.knob_parameter(0), None);
        assert_eq!(module.midi_cc_parameter(7), Some(2));
        assert_eq!(module.apply_knob(1, 77), Some(2));
        assert_eq!(module.parameter_raw(2), 77);
        assert_eq!(module.apply_midi_cc(8, 1), None);
    }

    #[test]
    fn test_base_mono_pass_through() {
        let mut module = module();
        module.process_mono(0.37);
        assert_eq!(module.audio_left(), 0.37);
        assert_eq!(module.audio_right(), 0.37);
    }

    #[test]
    fn test_base_stereo_pass_through() {
        let mut module = module();
        module.process_stereo(0.1, -0.2);
        assert_eq!(module.audio_left(), 0.1);
        assert_eq!(module.audio_right(), -0.2);
    }

    #[test]
    fn test_base_ignores_bypass() {
        let mut module = module();
        module.set_active(false);
        module.process_mono(0.5);
        assert_eq!(module.output(), AudioFrame::mono(0.5));
    }

    #[test]
    fn test_default_led_follows_activation() {
        let module = module();
        assert_eq!(module.output_led_brightness(), 1.0);
        module.set_active(false);
        assert_eq!(module.output_led_brightness(), 0.0);
    }

    #[test]
    fn test_override_honors_bypass() {
        let mut effect = Inverter::new(&CONFIG);
        effect.init(48_000.0);

        effect.process_mono(0.5);
        assert_eq!(effect.module().audio_left(), -0.5);

        effect.module().set_active(false);
        effect.process_mono(0.5);
        assert_eq!(effect.module().audio_left(), 0.5);
    }

    #[test]
    fn test_process_frame_dispatches_by_mode() {
        let mut mono = Inverter::new(&CONFIG);
        mono.init(48_000.0);
        let out = mono.process_frame(AudioFrame::new(0.25, 0.9));
        assert_eq!(out, AudioFrame::mono(-0.25));
        assert_eq!(mono.stereo_calls, 0);

        let mut stereo = Inverter::new(&STEREO_CONFIG);
        stereo.init(48_000.0);
        let out = stereo.process_frame(AudioFrame::new(0.25, 0.9));
        assert_eq!(out, AudioFrame::new(0.9, 0.25));
        assert_eq!(stereo.stereo_calls, 1);
    }

    #[test]
    fn test_overridden_led_and_ui() {
        let mut effect = Inverter::new(&CONFIG);
        effect.init(48_000.0);
        effect.process_mono(0.4);
        assert!((effect.output_led_brightness() - 0.4).abs() < 1e-6);

        effect.update_ui(0.016);
        effect.update_ui(0.016);
        assert!((effect.elapsed - 0.032).abs() < 1e-6);
    }

    #[test]
    fn test_boxed_effect() {
        let mut effect: Box<dyn Effect> = Box::new(Inverter::new(&CONFIG));
        effect.init(32_000.0);
        assert_eq!(effect.module().parameter_count(), 3);
        effect.process_mono(1.0);
        assert_eq!(effect.module().audio_right(), -1.0);
    }
}
