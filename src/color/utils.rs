use rand::Rng;

use crate::color::Rgb;

/// Error returned when a hex color string is malformed.
///
/// Raised for a wrong digit count or a non-hex character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseColorError;

/// Scale each channel by a factor in `[0, 1]`, truncating.
///
/// Factors outside the range are clamped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn lighten(color: Rgb, factor: f32) -> Rgb {
    let factor = factor.clamp(0.0, 1.0);
    Rgb {
        r: (f32::from(color.r) * factor) as u8,
        g: (f32::from(color.g) * factor) as u8,
        b: (f32::from(color.b) * factor) as u8,
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Draw a color with uniformly random channels.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb {
        r: rng.random(),
        g: rng.random(),
        b: rng.random(),
    }
}

/// Parse a `"#RRGGBB"` or `"RRGGBB"` hex color string.
pub fn parse_hex(hex: &str) -> Result<Rgb, ParseColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|digit| digit.is_ascii_hexdigit()) {
        return Err(ParseColorError);
    }

    let channel = |range: core::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ParseColorError)
    };

    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}
