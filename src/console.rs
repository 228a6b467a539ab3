//! Console presentation backend.
//!
//! Simulates a panel by printing each received physical frame as text: `#`
//! for slots differing from the background color, `-` otherwise, one line
//! per panel row. It inverts slot order through the same
//! [`SerpentineMapping`] the hardware path uses, so what it prints is
//! exactly what the strip would light.

use core::fmt::Write;

use crate::OutputDriver;
use crate::color::Rgb;
use crate::mapping::SerpentineMapping;

/// Escape sequence clearing the terminal and homing the cursor.
const CLEAR_AND_HOME: &str = "\x1b[2J\x1b[H";

/// Output driver rendering frames as text into any `core::fmt` sink.
pub struct ConsoleBackend<W: Write> {
    out: W,
    mapping: SerpentineMapping,
    bg_color: Rgb,
    clear_screen: bool,
}

impl<W: Write> ConsoleBackend<W> {
    /// Create a backend for the panel described by `mapping`.
    ///
    /// With `clear_screen` set, every frame is preceded by a terminal
    /// clear-and-home so animations redraw in place.
    pub const fn new(
        out: W,
        mapping: SerpentineMapping,
        bg_color: Rgb,
        clear_screen: bool,
    ) -> Self {
        Self {
            out,
            mapping,
            bg_color,
            clear_screen,
        }
    }

    /// Get a reference to the output sink.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Consume the backend and hand back the sink.
    pub fn into_writer(self) -> W {
        self.out
    }
}

impl<W: Write> OutputDriver for ConsoleBackend<W> {
    type Error = core::fmt::Error;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        if self.clear_screen {
            self.out.write_str(CLEAR_AND_HOME)?;
        }
        for y in 0..self.mapping.height() {
            for x in 0..self.mapping.width() {
                let slot = self.mapping.strip_index(x, y);
                let lit = colors.get(slot).is_some_and(|color| *color != self.bg_color);
                self.out.write_char(if lit { '#' } else { '-' })?;
            }
            self.out.write_char('\n')?;
        }
        self.out.write_char('\n')
    }
}
