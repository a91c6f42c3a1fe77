//! Drawing-surface contract for effect UIs.
//!
//! The pedal's screen driver implements [`DrawSurface`]; effects draw their
//! custom UI into it from [`Drawable::draw_ui`](crate::Drawable::draw_ui).
//! Pixels are one bit deep: `on` lights a pixel, `!on` clears it.

use crate::types::Rect;

/// Caller-owned monochrome drawing surface.
pub trait DrawSurface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, on: bool);

    /// Draw a one-pixel rectangle outline.
    fn draw_rect(&mut self, rect: Rect, on: bool);

    /// Draw text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, on: bool);

    /// Clear a rectangle to the background colour.
    fn clear_rect(&mut self, rect: Rect) {
        self.fill_rect(rect, false);
    }
}
