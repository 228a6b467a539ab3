#![no_std]

pub mod color;
pub mod console;
pub mod error;
pub mod font;
pub mod frame;
pub mod mapping;
pub mod matrix;
pub mod scroll;

pub use console::ConsoleBackend;
pub use error::MatrixError;
pub use frame::{BufferOverflow, FrameBuffer};
pub use mapping::{Direction, SerpentineMapping, UnsupportedDirection};
pub use matrix::{Matrix, MatrixConfig};
pub use scroll::ScrollConfig;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver trait
///
/// Implement this trait to support different hardware platforms.
/// The matrix engine is generic over this trait; a frame arrives as one
/// complete write in strip wiring order.
pub trait OutputDriver {
    /// Error surfaced when the strip rejects a frame
    type Error;

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}

/// Adapter driving any [`smart_leds::SmartLedsWrite`] implementation.
pub struct SmartLedsDriver<T>(pub T);

impl<T> OutputDriver for SmartLedsDriver<T>
where
    T: smart_leds::SmartLedsWrite<Color = Rgb>,
{
    type Error = T::Error;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        self.0.write(colors.iter().copied())
    }
}
