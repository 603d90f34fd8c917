// color.rs - LED Color Values
//
// Colors are kept in the textual form they were produced in ("green" for the
// placement seed, "#RRGGBB" from the picker) and decoded to RGB only when
// drawn or exported.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color substituted for anything that doesn't decode
    pub const fn fallback() -> Self {
        let (r, g, b) = constants::export::FALLBACK_RGB;
        Self::new(r, g, b)
    }

    /// Hex string form (e.g., "#5082FF")
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Parse a strict "#RRGGBB" string
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#')?;
    if hex.len() != 7 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    // All six bytes are ASCII, so the slices below sit on char boundaries
    match (
        u8::from_str_radix(&digits[0..2], 16),
        u8::from_str_radix(&digits[2..4], 16),
        u8::from_str_radix(&digits[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Some(Rgb::new(r, g, b)),
        _ => None,
    }
}

/// Decode "#RRGGBB", substituting (0, 255, 0) for any other input
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or_else(Rgb::fallback)
}

/// A color as recorded for a marker in a frame
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LedColor(String);

impl LedColor {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decoded value, following the exporter's fallback rule
    pub fn rgb(&self) -> Rgb {
        hex_to_rgb(&self.0)
    }
}

impl Default for LedColor {
    fn default() -> Self {
        Self::new(constants::marker::DEFAULT_COLOR)
    }
}

impl From<Rgb> for LedColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb.to_hex())
    }
}

impl From<&str> for LedColor {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for LedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_well_formed_hex() {
        assert_eq!(hex_to_rgb("#FF00AA"), Rgb::new(255, 0, 170));
        assert_eq!(hex_to_rgb("#0a1B2c"), Rgb::new(10, 27, 44));
    }

    #[test]
    fn malformed_input_falls_back_to_green() {
        let green = Rgb::new(0, 255, 0);
        assert_eq!(hex_to_rgb(""), green);
        assert_eq!(hex_to_rgb("notacolor"), green);
        assert_eq!(hex_to_rgb("green"), green);
        assert_eq!(hex_to_rgb("#FFF"), green);
        assert_eq!(hex_to_rgb("FF00AA0"), green);
        assert_eq!(hex_to_rgb("#GGGGGG"), green);
        assert_eq!(hex_to_rgb("#FF00AA00"), green);
        // Seven bytes, but not seven ASCII characters
        assert_eq!(hex_to_rgb("#é0000"), green);
    }

    #[test]
    fn placement_seed_decodes_to_fallback() {
        assert_eq!(LedColor::default().as_str(), "green");
        assert_eq!(LedColor::default().rgb(), Rgb::fallback());
    }

    #[test]
    fn picker_colors_are_stored_as_upper_hex() {
        let color = LedColor::from(Rgb::new(255, 0, 10));
        assert_eq!(color.as_str(), "#FF000A");
        assert_eq!(color.rgb(), Rgb::new(255, 0, 10));
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "(1, 2, 3)");
    }
}
