//! Color space conversion utilities
//!
//! Provides the conversions the quiz scores against:
//! - `#RRGGBB` hex strings to RGB channels and back
//! - RGB to HSL (hue in degrees, saturation/lightness in percent)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::channel::{HUE_CIRCLE_DEGREES, PERCENT_MAX, RGB_MAX};
use crate::constants::quiz::HEX_DIGITS;
use crate::{QuizError, Result};

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in [0,360) degrees, saturation and lightness in [0,100] percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical hex form: uppercase `#RRGGBB`, each byte zero-padded
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to HSL
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Parse a `#RRGGBB` hex color string.
///
/// The six digits are read as one 24-bit integer and split into bytes by
/// shift-and-mask (red = bits 16-23, green = 8-15, blue = 0-7). Both digit
/// cases are accepted; the canonical form is uppercase.
///
/// # Errors
///
/// Returns [`QuizError::InvalidHex`] unless the input is a `#` followed by
/// exactly six hexadecimal digits.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| QuizError::invalid_hex(hex, "missing '#' prefix"))?;

    if digits.len() != HEX_DIGITS {
        return Err(QuizError::invalid_hex(
            hex,
            format!("expected {} digits, got {}", HEX_DIGITS, digits.len()),
        ));
    }

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(QuizError::invalid_hex(hex, "non-hex digit"));
    }

    let packed = u32::from_str_radix(digits, 16)
        .map_err(|e| QuizError::invalid_hex(hex, e.to_string()))?;

    Ok(Rgb {
        r: ((packed >> 16) & 0xFF) as u8,
        g: ((packed >> 8) & 0xFF) as u8,
        b: (packed & 0xFF) as u8,
    })
}

/// Convert RGB channels to HSL.
///
/// Channels are normalized to [0,1]; lightness is `(max+min)/2`. Equal
/// channels are achromatic: hue and saturation are both zero. Otherwise the
/// six-segment hue formula applies, with the max channel tested in red,
/// green, blue order so that exact ties resolve to the earlier channel.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / RGB_MAX;
    let g = f64::from(rgb.g) / RGB_MAX;
    let b = f64::from(rgb.b) / RGB_MAX;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // achromatic
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * PERCENT_MAX,
        };
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let mut h = if r == max {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if g == max {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    h /= 6.0;

    Hsl {
        h: h * HUE_CIRCLE_DEGREES,
        s: s * PERCENT_MAX,
        l: l * PERCENT_MAX,
    }
}
