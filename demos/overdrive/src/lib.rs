//! Stompbox Overdrive - Example effect module demonstrating every override point.
//!
//! Key points:
//! 1. A `static` descriptor table with knob and MIDI CC mappings
//! 2. `Processable::init` override that derives coefficients from the sample rate
//! 3. `Processable::process_mono` honoring the bypass flag itself
//! 4. `Lightable` animating the LED from the output envelope
//! 5. `Drawable` with a custom menu entry and a smoothed level meter

use stompbox::prelude::*;

// =============================================================================
// Effect Configuration
// =============================================================================

/// Shared effect configuration.
pub static CONFIG: EffectConfig = EffectConfig::new("overdrive", "Overdrive")
    .with_category(Category::Distortion)
    .with_audio_mode(AudioMode::Mono)
    .with_version(env!("CARGO_PKG_VERSION"));

pub const PARAM_DRIVE: ParameterId = 0;
pub const PARAM_TONE: ParameterId = 1;
pub const PARAM_LEVEL: ParameterId = 2;
pub const PARAM_CLIP: ParameterId = 3;
pub const PARAM_BRIGHT: ParameterId = 4;

/// Parameter table: knobs 0-3 on the pedal, CCs 14-18 over MIDI.
pub static PARAMETERS: [ParameterDescriptor; 5] = [
    ParameterDescriptor::magnitude("Drive").with_default(64).with_knob(0).with_midi_cc(14),
    ParameterDescriptor::magnitude("Tone").with_default(80).with_knob(1).with_midi_cc(15),
    ParameterDescriptor::magnitude("Level").with_default(90).with_knob(2).with_midi_cc(16),
    ParameterDescriptor::binned("Clip", 3).with_default(0).with_knob(3).with_midi_cc(17),
    ParameterDescriptor::boolean("Bright").with_default(0).with_midi_cc(18),
];

/// Display names for the Clip bins.
pub const CLIP_NAMES: [&str; 3] = ["Soft", "Hard", "Fuzz"];

const MAX_PRE_GAIN: f32 = 24.0;
const MIN_CUTOFF_HZ: f32 = 500.0;
const CUTOFF_RANGE_HZ: f32 = 7_500.0;
const BRIGHT_FACTOR: f32 = 1.5;
const ENVELOPE_RELEASE_SECONDS: f32 = 0.05;
const METER_RATE: f32 = 12.0;
const LED_FLOOR: f32 = 0.25;

// =============================================================================
// Overdrive
// =============================================================================

/// Clipping curve selected by the Clip parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipMode {
    Soft,
    Hard,
    Fuzz,
}

impl ClipMode {
    /// Map a 1-based bin to a clip mode.
    pub fn from_bin(bin: u8) -> Self {
        match bin {
            2 => ClipMode::Hard,
            3 => ClipMode::Fuzz,
            _ => ClipMode::Soft,
        }
    }

    #[inline]
    fn shape(self, x: f32) -> f32 {
        match self {
            ClipMode::Soft => x.tanh(),
            ClipMode::Hard => x.clamp(-1.0, 1.0),
            ClipMode::Fuzz => x.signum() * (1.0 - (-x.abs()).exp()),
        }
    }
}

/// Mono overdrive with a one-pole tone filter.
pub struct Overdrive {
    module: EffectModule,
    sample_rate: f32,
    tone_state: f32,
    envelope: f32,
    envelope_release: f32,
    meter: f32,
}

impl Overdrive {
    /// Create an uninitialized overdrive.
    pub fn new() -> Self {
        Self {
            module: EffectModule::new(&CONFIG, &PARAMETERS),
            sample_rate: 0.0,
            tone_state: 0.0,
            envelope: 0.0,
            envelope_release: 0.0,
            meter: 0.0,
        }
    }

    /// Currently selected clip mode.
    pub fn clip_mode(&self) -> ClipMode {
        ClipMode::from_bin(self.module.parameter_binned(PARAM_CLIP))
    }

    /// Smoothed level shown on the display.
    pub fn meter(&self) -> f32 {
        self.meter
    }

    fn tone_coefficient(&self) -> f32 {
        let mut cutoff = MIN_CUTOFF_HZ + CUTOFF_RANGE_HZ * self.module.parameter_magnitude(PARAM_TONE);
        if self.module.parameter_bool(PARAM_BRIGHT) {
            cutoff *= BRIGHT_FACTOR;
        }
        let cutoff = cutoff.min(0.45 * self.sample_rate);
        1.0 - (-std::f32::consts::TAU * cutoff / self.sample_rate).exp()
    }

    #[inline]
    fn drive(&mut self, input: f32) -> f32 {
        let pre_gain = 1.0 + MAX_PRE_GAIN * self.module.parameter_magnitude(PARAM_DRIVE);
        let shaped = self.clip_mode().shape(input * pre_gain);
        self.tone_state += self.tone_coefficient() * (shaped - self.tone_state);
        self.tone_state * self.module.parameter_magnitude(PARAM_LEVEL)
    }
}

impl Default for Overdrive {
    fn default() -> Self {
        Self::new()
    }
}

impl HasModule for Overdrive {
    fn module(&self) -> &EffectModule {
        &self.module
    }

    fn module_mut(&mut self) -> &mut EffectModule {
        &mut self.module
    }
}

impl Processable for Overdrive {
    fn init(&mut self, sample_rate: f32) {
        self.module.init(sample_rate);
        self.sample_rate = sample_rate;
        self.envelope_release = (-1.0 / (ENVELOPE_RELEASE_SECONDS * sample_rate)).exp();
    }

    fn process_mono(&mut self, input: f32) {
        let out = if self.module.is_active() {
            self.drive(input)
        } else {
            self.tone_state = 0.0;
            input
        };
        self.envelope = out.abs().max(self.envelope * self.envelope_release);
        self.module.write_output(out, out);
    }
}

impl Lightable for Overdrive {
    fn output_led_brightness(&self) -> f32 {
        if self.module.is_active() {
            LED_FLOOR + (1.0 - LED_FLOOR) * self.envelope.min(1.0)
        } else {
            0.0
        }
    }
}

impl Drawable for Overdrive {
    fn update_ui(&mut self, elapsed: f32) {
        let target = if self.module.is_active() {
            self.envelope.min(1.0)
        } else {
            0.0
        };
        let step = (METER_RATE * elapsed.max(0.0)).min(1.0);
        self.meter += (target - self.meter) * step;
    }

    fn draw_ui(
        &self,
        display: &mut dyn DrawSurface,
        current_index: usize,
        item_count: usize,
        bounds: Rect,
        is_editing: bool,
    ) {
        // Editing inverts the entry
        let ink = !is_editing;
        if is_editing {
            display.fill_rect(bounds, true);
        } else {
            display.clear_rect(bounds);
        }

        let title = format!("{}/{} {}", current_index + 1, item_count, self.module.name());
        display.draw_text(bounds.left + 1, bounds.top + 1, &title, ink);

        let mode = CLIP_NAMES[usize::from(self.module.parameter_binned(PARAM_CLIP).max(1)) - 1];
        let (_, mode_area) = bounds.split_left(bounds.width() * 3 / 4);
        display.draw_text(mode_area.left, bounds.top + 1, mode, ink);

        let bar_height = (bounds.height() / 4).max(1);
        let track = Rect::new(
            bounds.left + 1,
            bounds.bottom - bar_height as i32 - 1,
            bounds.right - 1,
            bounds.bottom - 1,
        );
        display.draw_rect(track, ink);

        let drive = self.module.parameter_magnitude(PARAM_DRIVE);
        let inner = track.inset(1);
        let (filled, _) = inner.split_left((inner.width() as f32 * drive) as u32);
        display.fill_rect(filled, ink);

        if !self.module.is_active() {
            display.draw_text(bounds.left + 1, track.top - 8, "BYPASS", ink);
        }
    }
}

// =============================================================================
// Host Registration
// =============================================================================

/// Factory for the host's effect registry.
pub fn create() -> Box<dyn Effect> {
    Box::new(Overdrive::new())
}

/// Register the overdrive with a host registry.
pub fn register(registry: &mut EffectRegistry) -> Result<(), StompboxError> {
    registry.register(&CONFIG, create)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Op {
        Fill(Rect, bool),
        Outline(Rect, bool),
        Text(String, bool),
    }

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl DrawSurface for RecordingSurface {
        fn width(&self) -> u32 {
            128
        }

        fn height(&self) -> u32 {
            64
        }

        fn fill_rect(&mut self, rect: Rect, on: bool) {
            self.ops.push(Op::Fill(rect, on));
        }

        fn draw_rect(&mut self, rect: Rect, on: bool) {
            self.ops.push(Op::Outline(rect, on));
        }

        fn draw_text(&mut self, _x: i32, _y: i32, text: &str, on: bool) {
            self.ops.push(Op::Text(text.to_string(), on));
        }
    }

    impl RecordingSurface {
        fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(text, _) => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    fn overdrive() -> Overdrive {
        let mut effect = Overdrive::new();
        effect.init(48_000.0);
        effect
    }

    #[test]
    fn test_defaults() {
        let effect = overdrive();
        let module = effect.module();
        assert_eq!(module.parameter_count(), 5);
        assert_eq!(module.parameter_raw(PARAM_DRIVE), 64);
        assert_eq!(module.parameter_bin_count(PARAM_CLIP), Some(3));
        assert_eq!(effect.clip_mode(), ClipMode::Soft);
        assert!(!module.parameter_bool(PARAM_BRIGHT));
    }

    #[test]
    fn test_knob_and_midi_mappings() {
        let effect = overdrive();
        let module = effect.module();
        assert_eq!(module.knob_parameter(3), Some(PARAM_CLIP));
        assert_eq!(module.knob_parameter(4), None);
        assert_eq!(module.midi_cc_parameter(18), Some(PARAM_BRIGHT));

        module.apply_knob(3, 127);
        assert_eq!(effect.clip_mode(), ClipMode::Fuzz);
        module.apply_midi_cc(17, 50);
        assert_eq!(effect.clip_mode(), ClipMode::Hard);
    }

    #[test]
    fn test_bypass_is_pass_through() {
        let mut effect = overdrive();
        effect.module().set_active(false);
        for input in [0.0, 0.2, -0.7, 1.0] {
            effect.process_mono(input);
            assert_eq!(effect.module().audio_left(), input);
            assert_eq!(effect.module().audio_right(), input);
        }
    }

    #[test]
    fn test_active_output_is_bounded() {
        let mut effect = overdrive();
        effect.module().set_parameter_magnitude(PARAM_DRIVE, 1.0);
        effect.module().set_parameter_magnitude(PARAM_LEVEL, 1.0);
        for clip in 1..=3 {
            effect.module().set_parameter_binned(PARAM_CLIP, clip);
            for i in 0..480 {
                let input = (i as f32 * 0.05).sin() * 2.0;
                effect.process_mono(input);
                assert!(effect.module().audio_left().abs() <= 1.0);
            }
        }
    }

    #[test]
    fn test_active_changes_signal() {
        let mut effect = overdrive();
        effect.module().set_parameter_magnitude(PARAM_DRIVE, 1.0);
        effect.module().set_parameter_magnitude(PARAM_LEVEL, 1.0);
        effect.module().set_parameter_magnitude(PARAM_TONE, 1.0);
        let mut last = 0.0;
        for _ in 0..256 {
            effect.process_mono(0.5);
            last = effect.module().audio_left();
        }
        // Heavily driven DC settles near the clip ceiling, not the input
        assert!(last > 0.9, "last = {last}");
    }

    #[test]
    fn test_zero_level_silences() {
        let mut effect = overdrive();
        effect.module().set_parameter_magnitude(PARAM_LEVEL, 0.0);
        effect.process_mono(0.8);
        assert_eq!(effect.module().audio_left(), 0.0);
    }

    #[test]
    fn test_process_frame_uses_mono_entry() {
        let mut effect = overdrive();
        effect.module().set_active(false);
        let out = effect.process_frame(AudioFrame::new(0.3, -0.9));
        assert_eq!(out, AudioFrame::mono(0.3));
    }

    #[test]
    fn test_led_follows_envelope() {
        let mut effect = overdrive();
        effect.process_mono(0.0);
        assert!((effect.output_led_brightness() - LED_FLOOR).abs() < 1e-6);

        effect.module().set_parameter_magnitude(PARAM_LEVEL, 1.0);
        for _ in 0..64 {
            effect.process_mono(0.9);
        }
        assert!(effect.output_led_brightness() > 0.5);

        effect.module().set_active(false);
        assert_eq!(effect.output_led_brightness(), 0.0);
    }

    #[test]
    fn test_meter_moves_toward_envelope() {
        let mut effect = overdrive();
        effect.module().set_parameter_magnitude(PARAM_LEVEL, 1.0);
        for _ in 0..64 {
            effect.process_mono(0.9);
        }
        assert_eq!(effect.meter(), 0.0);
        effect.update_ui(0.016);
        let first = effect.meter();
        assert!(first > 0.0);
        effect.update_ui(0.016);
        assert!(effect.meter() > first);

        effect.module().set_active(false);
        for _ in 0..100 {
            effect.update_ui(0.1);
        }
        assert!(effect.meter() < 1e-3);
    }

    #[test]
    fn test_draw_ui() {
        let effect = overdrive();
        let mut surface = RecordingSurface::default();
        let bounds = Rect::from_origin(0, 16, 128, 32);
        effect.draw_ui(&mut surface, 1, 4, bounds, false);

        assert_eq!(surface.ops[0], Op::Fill(bounds, false));
        assert_eq!(surface.texts(), ["2/4 Overdrive", "Soft"]);
        assert!(surface
            .ops
            .iter()
            .any(|op| matches!(op, Op::Outline(_, true))));
    }

    #[test]
    fn test_draw_ui_drive_bar_inside_track() {
        let effect = overdrive();
        effect.module().set_parameter_raw(PARAM_DRIVE, 127);
        let mut surface = RecordingSurface::default();
        effect.draw_ui(&mut surface, 0, 1, Rect::from_origin(0, 0, 128, 32), false);

        let track = surface
            .ops
            .iter()
            .find_map(|op| match op {
                Op::Outline(rect, true) => Some(*rect),
                _ => None,
            })
            .unwrap();
        let bar = surface
            .ops
            .iter()
            .rev()
            .find_map(|op| match op {
                Op::Fill(rect, true) => Some(*rect),
                _ => None,
            })
            .unwrap();
        assert_eq!(bar, track.inset(1));
    }

    #[test]
    fn test_draw_ui_editing_inverts() {
        let effect = overdrive();
        effect.module().set_active(false);
        let mut surface = RecordingSurface::default();
        let bounds = Rect::from_origin(0, 0, 128, 32);
        effect.draw_ui(&mut surface, 0, 1, bounds, true);

        assert_eq!(surface.ops[0], Op::Fill(bounds, true));
        assert!(surface.texts().contains(&"BYPASS"));
        assert!(surface.ops.iter().skip(1).all(|op| match op {
            Op::Fill(_, on) | Op::Outline(_, on) | Op::Text(_, on) => !on,
        }));
    }

    #[test]
    fn test_registry_round_trip() {
        let mut registry = EffectRegistry::new();
        register(&mut registry).unwrap();
        assert!(register(&mut registry).is_err());

        let mut effect = registry.create("overdrive", 44_100.0).unwrap();
        assert_eq!(effect.module().sample_rate(), 44_100.0);
        effect.module().set_active(false);
        effect.process_mono(0.25);
        assert_eq!(effect.module().audio_left(), 0.25);
    }

    #[test]
    fn test_control_handle_drives_audio_instance() {
        let mut effect = overdrive();
        let controls = effect.module().control_handle();
        controls.apply_knob(2, 0);
        effect.process_mono(0.8);
        assert_eq!(effect.module().audio_left(), 0.0);

        controls.toggle_active();
        effect.process_mono(0.8);
        assert_eq!(effect.module().audio_left(), 0.8);
    }
}
