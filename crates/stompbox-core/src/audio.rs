//! Audio sample types.
//!
//! Effects process one sample frame per call. The result of the most recent
//! call is kept in an [`AudioSampleCache`] that the audio engine reads back
//! before the next frame.

use serde::Serialize;

/// Which processing entry point an effect is driven through.
///
/// Fixed per effect type via [`EffectConfig`](crate::EffectConfig). Hosts
/// that go through [`Processable::process_frame`](crate::Processable::process_frame)
/// never mix the mono and stereo entry points on one instance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioMode {
    /// One input sample, duplicated to both outputs by default.
    #[default]
    Mono,
    /// Independent left and right samples.
    Stereo,
}

/// One left/right sample pair.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AudioFrame {
    pub left: f32,
    pub right: f32,
}

impl AudioFrame {
    /// Create a stereo frame.
    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Create a frame carrying the same sample on both channels.
    pub const fn mono(sample: f32) -> Self {
        Self {
            left: sample,
            right: sample,
        }
    }
}

/// Most recently produced output sample.
///
/// Written once per processed frame, read any number of times until the next
/// write. There is no history.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AudioSampleCache {
    left: f32,
    right: f32,
}

impl AudioSampleCache {
    /// Store the output of the current frame.
    #[inline]
    pub fn write(&mut self, left: f32, right: f32) {
        self.left = left;
        self.right = right;
    }

    /// Last left (or mono) output sample.
    #[inline]
    pub fn left(&self) -> f32 {
        self.left
    }

    /// Last right output sample.
    #[inline]
    pub fn right(&self) -> f32 {
        self.right
    }

    /// Last output as a frame.
    #[inline]
    pub fn frame(&self) -> AudioFrame {
        AudioFrame::new(self.left, self.right)
    }
}
