//! Named colors for quick test patterns and status displays.

use crate::color::Rgb;

pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
pub const YELLOW: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 0,
};
pub const CYAN: Rgb = Rgb {
    r: 0,
    g: 255,
    b: 255,
};
pub const MAGENTA: Rgb = Rgb {
    r: 255,
    g: 0,
    b: 255,
};
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

pub const PINK: Rgb = Rgb {
    r: 245,
    g: 168,
    b: 186,
};
pub const AQUA: Rgb = Rgb {
    r: 85,
    g: 255,
    b: 255,
};
pub const ORANGE: Rgb = Rgb {
    r: 255,
    g: 140,
    b: 0,
};
pub const PURPLE: Rgb = Rgb {
    r: 140,
    g: 0,
    b: 140,
};
