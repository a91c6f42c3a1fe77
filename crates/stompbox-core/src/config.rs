//! Effect configuration.
//!
//! Every effect module carries a static [`EffectConfig`] describing its
//! identity (registry id, display name, category) and the audio mode it is
//! wired for. All builder methods are `const fn`, so configurations live in
//! `static` items next to the effect's parameter table.
//!
//! # Example
//!
//! ```ignore
//! use stompbox_core::{AudioMode, Category, EffectConfig};
//!
//! pub static CONFIG: EffectConfig = EffectConfig::new("chorus", "Chorus")
//!     .with_category(Category::Modulation)
//!     .with_audio_mode(AudioMode::Stereo)
//!     .with_version(env!("CARGO_PKG_VERSION"));
//! ```

use serde::Serialize;

use crate::audio::AudioMode;

/// Effect family, used by hosts to group effects in menus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Overdrive, Distortion, Fuzz, Amp Simulator
    Distortion,
    /// Delay, Echo, Looper
    Delay,
    /// Chorus, Flanger, Phaser, Tremolo, Vibrato
    Modulation,
    /// Reverb, Room Simulation
    Reverb,
    /// Compressor, Gate, Limiter
    Dynamics,
    /// Wah, EQ, Auto-Filter
    Filter,
    /// Octaver, Harmonizer, Pitch Shift
    Pitch,
    /// Tuner, Volume, Metronome
    Utility,
    /// Anything else
    #[default]
    Other,
}

impl Category {
    /// Short label suitable for a small display.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Distortion => "Drive",
            Category::Delay => "Delay",
            Category::Modulation => "Mod",
            Category::Reverb => "Verb",
            Category::Dynamics => "Dyn",
            Category::Filter => "Filter",
            Category::Pitch => "Pitch",
            Category::Utility => "Util",
            Category::Other => "Other",
        }
    }
}

/// Static configuration for one effect type.
#[derive(Debug, Clone)]
pub struct EffectConfig {
    /// Stable identifier used as the registry key.
    pub id: &'static str,

    /// Effect name displayed on the screen.
    pub name: &'static str,

    /// Effect family.
    pub category: Category,

    /// Audio entry point this effect is driven through.
    pub audio_mode: AudioMode,

    /// Effect version string.
    pub version: &'static str,
}

impl EffectConfig {
    /// Create a new configuration with default settings (mono, uncategorized).
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            category: Category::Other,
            audio_mode: AudioMode::Mono,
            version: "0.0.0",
        }
    }

    /// Set the effect category.
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Set the audio mode.
    pub const fn with_audio_mode(mut self, audio_mode: AudioMode) -> Self {
        self.audio_mode = audio_mode;
        self
    }

    /// Set the version string.
    pub const fn with_version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }
}
