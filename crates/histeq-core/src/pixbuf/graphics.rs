//! Graphics rendering functions
//!
//! Minimal drawing primitives used to compose display frames:
//! - Solid fills (whole buffer or clipped rectangles)
//! - Vertical lines
//! - Pasting one buffer into another

use super::PixelBuffer;
use crate::color;

/// RGB color for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// Green color
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };

    /// Compose as an opaque 32-bit RGBA pixel
    pub fn to_pixel32(&self) -> u32 {
        color::compose_rgb(self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl PixelBuffer {
    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        let pixel = color.to_pixel32();
        self.data.fill(pixel);
    }

    /// Fill the rectangle at `(x, y)` of size `w x h`, clipped to the buffer.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: u32, h: u32, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w as i64).min(self.width as i64);
        let y1 = (y + h as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let pixel = color.to_pixel32();
        for yy in y0..y1 {
            self.row_data_mut(yy as u32)[x0 as usize..x1 as usize].fill(pixel);
        }
    }

    /// Render a one pixel wide vertical line rising `length` pixels from the
    /// bottom row, in column `x`. Clipped to the buffer.
    pub fn render_bar_from_bottom(&mut self, x: i64, length: u32, color: Color) {
        let top = self.height as i64 - length as i64;
        self.fill_rect(x, top, 1, length, color);
    }

    /// Copy `src` into this buffer with its top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside this buffer are dropped. Alpha is copied
    /// unchanged.
    pub fn paste(&mut self, src: &PixelBuffer, x: i64, y: i64) {
        for sy in 0..src.height {
            let dy = y + sy as i64;
            if dy < 0 || dy >= self.height as i64 {
                continue;
            }
            let sx0 = (-x).max(0);
            let sx1 = (self.width as i64 - x).min(src.width as i64);
            if sx0 >= sx1 {
                return;
            }
            let src_row = &src.row_data(sy)[sx0 as usize..sx1 as usize];
            let dx0 = (x + sx0) as usize;
            let dst_row = self.row_data_mut(dy as u32);
            dst_row[dx0..dx0 + src_row.len()].copy_from_slice(src_row);
        }
    }
}
