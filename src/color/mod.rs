mod rgb565;
mod utils;

pub mod palette;

pub use rgb565::{rgb_to_rgb565, rgb565_to_rgb888};
use smart_leds::RGB8;
pub use utils::{ParseColorError, lighten, parse_hex, random_color, rgb_from_u32};

pub type Rgb = RGB8;
