//! Matrix engine - buffer ownership, drawing surface and diffed output.

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::{self, Rgb, palette};
use crate::error::MatrixError;
use crate::font;
use crate::frame::FrameBuffer;
use crate::mapping::{Direction, SerpentineMapping};

/// Configuration for the matrix engine
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    /// Physical panel width in pixels
    pub width: usize,
    /// Physical panel height in pixels
    pub height: usize,
    /// Mounting mirror of the serpentine wiring
    pub direction: Direction,
    /// Output brightness in `[0, 1]`, applied at render time
    pub brightness: f32,
    /// Background color; the diff baseline of the renderer
    pub bg_color: Rgb,
}

impl MatrixConfig {
    /// Config for a panel with the common defaults: horizontal wiring,
    /// full brightness, black background.
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            direction: Direction::Horizontal,
            brightness: 1.0,
            bg_color: palette::BLACK,
        }
    }
}

/// LED matrix engine - the main drawing surface.
///
/// Owns the logical frame buffer, the serpentine mapping and the physical
/// output frame. Drawing calls mutate the buffer; [`Matrix::render`] walks
/// the mapping and pushes one complete frame to the output driver.
///
/// `MAX_CELLS` bounds both the physical frame (`width × height`) and the
/// logical frame buffer, which grows beyond the panel width to hold a full
/// line of scrolled text. Size it for the longest text line the
/// application displays.
pub struct Matrix<D: OutputDriver, const MAX_CELLS: usize> {
    pub(crate) driver: D,
    pub(crate) mapping: SerpentineMapping,
    pub(crate) frame: FrameBuffer<MAX_CELLS>,
    pub(crate) strip: Vec<Rgb, MAX_CELLS>,
    pub(crate) brightness: f32,
    pub(crate) bg_color: Rgb,
}

impl<D: OutputDriver, const MAX_CELLS: usize> Matrix<D, MAX_CELLS> {
    /// Create a new engine for the panel described by `config`.
    ///
    /// Fails with `InvalidConfiguration` for zero dimensions and with
    /// `Overflow` when `width × height` exceeds `MAX_CELLS`.
    pub fn new(driver: D, config: &MatrixConfig) -> Result<Self, MatrixError<D::Error>> {
        if config.width == 0 || config.height == 0 {
            return Err(MatrixError::InvalidConfiguration);
        }

        let mapping = SerpentineMapping::new(config.width, config.height, config.direction);
        let frame = FrameBuffer::new(config.width, config.height)?;

        let mut strip = Vec::new();
        strip
            .resize(mapping.len(), config.bg_color)
            .map_err(|()| MatrixError::Overflow(crate::frame::BufferOverflow))?;

        Ok(Self {
            driver,
            mapping,
            frame,
            strip,
            brightness: config.brightness.clamp(0.0, 1.0),
            bg_color: config.bg_color,
        })
    }

    /// Physical panel width in pixels.
    pub const fn width(&self) -> usize {
        self.mapping.width()
    }

    /// Physical panel height in pixels.
    pub const fn height(&self) -> usize {
        self.mapping.height()
    }

    /// The wiring mapping shared with presentation backends.
    pub const fn mapping(&self) -> SerpentineMapping {
        self.mapping
    }

    /// Current output brightness.
    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Set the output brightness, clamped to `[0, 1]`.
    ///
    /// Takes effect on the next render; the logical buffer is unaffected.
    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness.clamp(0.0, 1.0);
    }

    /// Current background color.
    pub const fn bg_color(&self) -> Rgb {
        self.bg_color
    }

    /// Set the background color used for clearing and render diffing.
    pub fn set_bg_color(&mut self, bg_color: Rgb) {
        self.bg_color = bg_color;
    }

    /// Get a reference to the output driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the output driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Read back a logical pixel as RGB888, without brightness applied.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        self.frame.pixel(x, y).map(color::rgb565_to_rgb888)
    }

    /// Set every buffer cell to `color`. No device write.
    pub fn fill(&mut self, fill_color: Rgb) {
        self.frame.fill(color::rgb_to_rgb565(fill_color));
    }

    /// Clear the buffer to the background color. No device write.
    pub fn clear(&mut self) {
        self.fill(self.bg_color);
    }

    /// Push the visible portion of the logical buffer to the output.
    ///
    /// Every physical slot is first reset to the background color; only
    /// pixels whose brightness-scaled color differs from the background are
    /// then written through the mapping. Comparing against the background
    /// rather than the previous frame keeps the diff correct when a pixel
    /// changes from one non-background color to another. The whole frame
    /// goes to the driver in one write.
    ///
    /// A driver failure is returned as [`MatrixError::Driver`] and leaves
    /// the logical buffer untouched.
    pub fn render(&mut self) -> Result<(), MatrixError<D::Error>> {
        let bg_color = self.bg_color;
        for slot in self.strip.iter_mut() {
            *slot = bg_color;
        }

        for y in 0..self.mapping.height() {
            for x in 0..self.mapping.width() {
                let Some(packed) = self.frame.pixel(x, y) else {
                    continue;
                };
                let rendered = self.scaled(color::rgb565_to_rgb888(packed));
                if rendered != bg_color {
                    self.strip[self.mapping.strip_index(x, y)] = rendered;
                }
            }
        }

        self.driver.write(&self.strip).map_err(MatrixError::Driver)
    }

    /// Display `string` starting at `(x, y)`.
    ///
    /// The buffer is resized to hold the full rendered text (never narrower
    /// than the panel), cleared to the background and redrawn, then
    /// rendered. Glyphs outside the buffer are clipped.
    pub fn text(
        &mut self,
        string: &str,
        x: i32,
        y: i32,
        text_color: Rgb,
    ) -> Result<(), MatrixError<D::Error>> {
        let frame_width = font::text_width(string).max(self.width());
        self.frame.resize(frame_width)?;
        self.frame.fill(color::rgb_to_rgb565(self.bg_color));
        self.frame
            .text(string, x, y, color::rgb_to_rgb565(text_color));
        self.render()
    }

    /// Display `string` horizontally centered on the panel.
    pub fn text_centered(
        &mut self,
        string: &str,
        y: i32,
        text_color: Rgb,
    ) -> Result<(), MatrixError<D::Error>> {
        let x = self.center_offset(string);
        self.text(string, x, y, text_color)
    }

    /// X offset that centers `string` on the physical panel.
    ///
    /// Text wider than the panel cannot be centered; the offset falls back
    /// to 0 and a diagnostic is emitted.
    #[allow(clippy::cast_possible_wrap)]
    pub fn center_offset(&self, string: &str) -> i32 {
        let text_width = font::text_width(string);
        if text_width > self.width() {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Matrix.center_offset] {:?} is wider than the panel, starting at x = 0",
                string
            );
            return 0;
        }
        ((self.width() - text_width) / 2) as i32
    }

    /// Draw a line between two points into the current buffer and render.
    pub fn line(
        &mut self,
        p1: (i32, i32),
        p2: (i32, i32),
        line_color: Rgb,
    ) -> Result<(), MatrixError<D::Error>> {
        self.frame.line(p1, p2, color::rgb_to_rgb565(line_color));
        self.render()
    }

    /// Draw a rectangle spanned by two corners (either order) into the
    /// current buffer and render.
    pub fn rect(
        &mut self,
        p1: (i32, i32),
        p2: (i32, i32),
        rect_color: Rgb,
        filled: bool,
    ) -> Result<(), MatrixError<D::Error>> {
        self.frame.rect(p1, p2, color::rgb_to_rgb565(rect_color), filled);
        self.render()
    }

    /// Draw a horizontal progress bar and render once.
    ///
    /// The bar is inset by `margin` pixels from the left, right and top
    /// edges: a filled segment of width
    /// `round((width − 2·margin) × progress / max_progress)` plus a
    /// full-track outline. The buffer is cleared first.
    ///
    /// # Arguments
    /// * `progress` - current value
    /// * `max_progress` - value at which the bar is full; zero is an
    ///   `InvalidConfiguration` error
    /// * `margin` - inset from the panel edges
    /// * `bar_height` - height of the bar in pixels
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap
    )]
    pub fn draw_progress_bar(
        &mut self,
        progress: u32,
        max_progress: u32,
        bar_color: Rgb,
        margin: usize,
        bar_height: usize,
    ) -> Result<(), MatrixError<D::Error>> {
        if max_progress == 0 || bar_height == 0 {
            return Err(MatrixError::InvalidConfiguration);
        }
        let track_width = self
            .width()
            .checked_sub(2 * margin)
            .filter(|width| *width > 0)
            .ok_or(MatrixError::InvalidConfiguration)?;

        let step = track_width as f32 / max_progress as f32;
        let filled = libm::roundf(step * progress as f32) as i32;

        self.frame.resize(self.width())?;
        self.frame.fill(color::rgb_to_rgb565(self.bg_color));

        let packed = color::rgb_to_rgb565(bar_color);
        let top_left = (margin as i32, margin as i32);
        let bottom = margin as i32 + bar_height as i32 - 1;
        if filled > 0 {
            self.frame
                .rect(top_left, (margin as i32 + filled - 1, bottom), packed, true);
        }
        self.frame.rect(
            top_left,
            (margin as i32 + track_width as i32 - 1, bottom),
            packed,
            false,
        );
        self.render()
    }

    /// Apply the output brightness to one color, truncating per channel.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn scaled(&self, rgb: Rgb) -> Rgb {
        Rgb {
            r: (f32::from(rgb.r) * self.brightness) as u8,
            g: (f32::from(rgb.g) * self.brightness) as u8,
            b: (f32::from(rgb.b) * self.brightness) as u8,
        }
    }
}
