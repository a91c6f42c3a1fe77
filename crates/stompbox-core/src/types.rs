//! Common types used throughout the Stompbox framework.

// =============================================================================
// Raw Value Range
// =============================================================================
//
// Every parameter is stored as a single byte in the MIDI-style range 0..=127.
// Binned conversions partition the half-open span [0, 128) so that every bin
// gets an equal share of the raw range.
// =============================================================================

/// Largest raw parameter value.
pub const RAW_MAX: u8 = 127;

/// Width of the raw value span used for bin partitioning.
pub const RAW_SPAN: u32 = RAW_MAX as u32 + 1;

/// Largest bin count that still gives every bin at least one raw value.
pub const MAX_BIN_COUNT: u8 = 128;

/// Number of addressable MIDI continuous controllers.
pub const MIDI_CC_COUNT: usize = 128;

/// Parameter identifier (index into the effect's descriptor table).
pub type ParameterId = usize;

/// Physical knob identifier on the control surface.
pub type KnobId = u8;

/// MIDI continuous-controller number (0-127).
pub type MidiCc = u8;

/// Rectangle in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Create a rectangle from its top-left corner and size.
    pub const fn from_origin(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            right: left + width as i32,
            bottom: top + height as i32,
        }
    }

    /// Get the width of the rectangle.
    pub fn width(&self) -> u32 {
        (self.right - self.left).max(0) as u32
    }

    /// Get the height of the rectangle.
    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }

    /// Shrink the rectangle by `amount` pixels on every side.
    pub fn inset(&self, amount: i32) -> Self {
        let left = (self.left + amount).min(self.right);
        let top = (self.top + amount).min(self.bottom);
        Self {
            left,
            top,
            right: (self.right - amount).max(left),
            bottom: (self.bottom - amount).max(top),
        }
    }

    /// Split off a slice of the given width from the left edge.
    ///
    /// Returns `(left_part, remainder)`.
    pub fn split_left(&self, width: u32) -> (Self, Self) {
        let split = (self.left + width as i32).min(self.right);
        (
            Self::new(self.left, self.top, split, self.bottom),
            Self::new(split, self.top, self.right, self.bottom),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect::from_origin(4, 8, 20, 10);
        assert_eq!(rect.width(), 20);
        assert_eq!(rect.height(), 10);
        assert_eq!(rect.right, 24);
        assert_eq!(rect.bottom, 18);
    }

    #[test]
    fn test_inverted_rect_has_zero_size() {
        let rect = Rect::new(10, 10, 5, 5);
        assert_eq!(rect.width(), 0);
        assert_eq!(rect.height(), 0);
    }

    #[test]
    fn test_inset_never_inverts() {
        let rect = Rect::from_origin(0, 0, 4, 4).inset(3);
        assert_eq!(rect.width(), 0);
        assert_eq!(rect.height(), 0);

        let rect = Rect::from_origin(0, 0, 10, 6).inset(1);
        assert_eq!(rect, Rect::new(1, 1, 9, 5));
    }

    #[test]
    fn test_split_left() {
        let (label, value) = Rect::from_origin(0, 0, 100, 10).split_left(60);
        assert_eq!(label.width(), 60);
        assert_eq!(value.width(), 40);
        assert_eq!(value.left, 60);

        let (all, rest) = Rect::from_origin(0, 0, 10, 10).split_left(50);
        assert_eq!(all.width(), 10);
        assert_eq!(rest.width(), 0);
    }
}
