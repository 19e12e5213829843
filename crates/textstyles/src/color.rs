//! RGB colors with a floating alpha channel.
//!
//! # Plain forms
//!
//! | Form | Example |
//! |------|---------|
//! | Canonical | `{"NSColor": 16711680, "NSAlpha": 0.5}` |
//! | Integer shorthand | `16711680` (`0xFF0000`, alpha 1.0) |
//! | Hex shorthand | `"#ff0000"` or `"ff0000"` |
//!
//! The packed integer is `0xRRGGBB`. Alpha is stored as given and never
//! clamped.

use serde_json::{Map, Value};

use crate::codec::{plain_f64, PlainCodec};
use crate::key::StyleKey;
use crate::value::StyleValue;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    /// Creates an opaque color from its components.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Creates an opaque color from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are ignored.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Returns the color with a different alpha.
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Returns the packed `0xRRGGBB` value.
    pub const fn rgb_value(&self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }

    /// Returns the components as a tuple.
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// Parses `#rrggbb` / `rrggbb` hex notation.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_rgb)
    }

    /// Formats the color as `#rrggbb`, dropping alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:06x}", self.rgb_value())
    }

    fn from_packed(value: i64) -> Option<Self> {
        u32::try_from(value)
            .ok()
            .filter(|rgb| *rgb <= 0xFF_FFFF)
            .map(Self::from_rgb)
    }
}

impl PlainCodec for Color {
    fn to_plain_object(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            StyleKey::ForegroundColor.as_str().to_string(),
            Value::from(self.rgb_value()),
        );
        map.insert(StyleKey::Alpha.as_str().to_string(), Value::from(self.alpha));
        map
    }

    fn decode(value: &StyleValue) -> Option<Self> {
        match value {
            StyleValue::Color(color) => Some(*color),
            StyleValue::Integer(packed) => Self::from_packed(*packed),
            StyleValue::String(hex) => Self::from_hex(hex),
            StyleValue::Map(map) => {
                let packed = map
                    .get(StyleKey::ForegroundColor.as_str())
                    .and_then(Value::as_i64)?;
                let alpha = plain_f64(map, &StyleKey::Alpha).unwrap_or(1.0);
                Self::from_packed(packed).map(|color| color.with_alpha(alpha))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_rgb_unpacks_components() {
        let color = Color::from_rgb(0x336699);
        assert_eq!(color.rgb(), (0x33, 0x66, 0x99));
        assert_eq!(color.alpha, 1.0);
        assert_eq!(color.rgb_value(), 0x336699);
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Color::from_hex("#ff6b35"), Some(Color::new(255, 107, 53)));
        assert_eq!(Color::from_hex("FF6B35"), Some(Color::new(255, 107, 53)));
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
        assert_eq!(Color::new(255, 107, 53).to_hex(), "#ff6b35");
    }

    #[test]
    fn test_integer_shorthand_matches_canonical() {
        let short = Color::decode(&StyleValue::Integer(0xFF0000)).unwrap();
        let canonical = Color::decode(&StyleValue::from(json!({"NSColor": 0xFF0000}))).unwrap();
        assert_eq!(short, canonical);
        assert_eq!(short, Color::new(255, 0, 0));
    }

    #[test]
    fn test_canonical_with_alpha() {
        let color =
            Color::decode(&StyleValue::from(json!({"NSColor": 0x00FF00, "NSAlpha": 0.25})))
                .unwrap();
        assert_eq!(color, Color::new(0, 255, 0).with_alpha(0.25));
    }

    #[test]
    fn test_alpha_is_not_clamped() {
        let color =
            Color::decode(&StyleValue::from(json!({"NSColor": 0, "NSAlpha": 3}))).unwrap();
        assert_eq!(color.alpha, 3.0);
    }

    #[test]
    fn test_identity_fast_path() {
        let color = Color::new(1, 2, 3).with_alpha(0.4);
        assert_eq!(Color::decode(&StyleValue::Color(color)), Some(color));
    }

    #[test]
    fn test_rejects_out_of_range_and_wrong_types() {
        assert_eq!(Color::decode(&StyleValue::Integer(-1)), None);
        assert_eq!(Color::decode(&StyleValue::Integer(0x1_000_000)), None);
        assert_eq!(Color::decode(&StyleValue::Number(255.0)), None);
        assert_eq!(
            Color::decode(&StyleValue::from(json!({"NSAlpha": 1.0}))),
            None
        );
        assert_eq!(Color::decode(&StyleValue::from(json!(null))), None);
    }

    #[test]
    fn test_round_trip() {
        let color = Color::new(12, 34, 56).with_alpha(0.75);
        let plain = StyleValue::Map(color.to_plain_object());
        assert_eq!(Color::decode(&plain), Some(color));
    }
}
