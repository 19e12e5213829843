//! Drop shadows for text and icons.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::codec::{plain_f64, PlainCodec};
use crate::color::Color;
use crate::key::StyleKey;
use crate::value::StyleValue;

/// A two-dimensional extent in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Reads `{"width": w, "height": h}` or `[w, h]`.
    fn from_plain(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => match items.as_slice() {
                [w, h] => Some(Self::new(w.as_f64()?, h.as_f64()?)),
                _ => None,
            },
            other => serde_json::from_value(other.clone()).ok(),
        }
    }
}

/// Offset used when a shadow doesn't specify one.
pub const DEFAULT_SHADOW_OFFSET: Size = Size::new(0.0, -3.0);

/// A shadow drawn beneath text or an icon.
///
/// Canonical form:
///
/// ```json
/// {
///   "NSColor": {"NSColor": 0, "NSAlpha": 0.33},
///   "NSShadowBlurRadius": 2.0,
///   "NSShadowOffset": {"width": 1.0, "height": -1.0}
/// }
/// ```
///
/// Any subset of the keys decodes; missing ones take the defaults below. A
/// shadow without a color is drawn in the renderer's default shadow color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Option<Color>,
    pub blur_radius: f64,
    pub offset: Size,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: None,
            blur_radius: 0.0,
            offset: DEFAULT_SHADOW_OFFSET,
        }
    }
}

impl Shadow {
    pub fn new(color: Color, blur_radius: f64, offset: Size) -> Self {
        Self {
            color: Some(color),
            blur_radius,
            offset,
        }
    }
}

impl PlainCodec for Shadow {
    fn to_plain_object(&self) -> Map<String, Value> {
        let mut map = Map::new();
        if let Some(color) = &self.color {
            map.insert(
                StyleKey::ForegroundColor.as_str().to_string(),
                Value::Object(color.to_plain_object()),
            );
        }
        map.insert(
            StyleKey::ShadowBlurRadius.as_str().to_string(),
            Value::from(self.blur_radius),
        );
        map.insert(
            StyleKey::ShadowOffset.as_str().to_string(),
            serde_json::to_value(self.offset).unwrap_or(Value::Null),
        );
        map
    }

    fn decode(value: &StyleValue) -> Option<Self> {
        match value {
            StyleValue::Shadow(shadow) => Some(*shadow),
            StyleValue::Map(map) => {
                let color = map.get(StyleKey::ForegroundColor.as_str());
                let blur_radius = plain_f64(map, &StyleKey::ShadowBlurRadius);
                let offset = map.get(StyleKey::ShadowOffset.as_str());
                if color.is_none() && blur_radius.is_none() && offset.is_none() {
                    return None;
                }

                let defaults = Shadow::default();
                Some(Shadow {
                    color: color.and_then(|c| Color::decode(&StyleValue::from(c.clone()))),
                    blur_radius: blur_radius.unwrap_or(defaults.blur_radius),
                    offset: offset
                        .and_then(Size::from_plain)
                        .unwrap_or(defaults.offset),
                })
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
    fn test_default_shadow() {
        let shadow = Shadow::default();
        assert_eq!(shadow.color, None);
        assert_eq!(shadow.blur_radius, 0.0);
        assert_eq!(shadow.offset, Size::new(0.0, -3.0));
    }

    #[test]
    fn test_canonical_decode() {
        let plain = StyleValue::from(json!({
            "NSColor": 0x000000,
            "NSShadowBlurRadius": 4,
            "NSShadowOffset": {"width": 2.0, "height": 2.0}
        }));
        let shadow = Shadow::decode(&plain).unwrap();
        assert_eq!(shadow.color, Some(Color::new(0, 0, 0)));
        assert_eq!(shadow.blur_radius, 4.0);
        assert_eq!(shadow.offset, Size::new(2.0, 2.0));
    }

    #[test]
    fn test_partial_decode_fills_defaults() {
        let plain = StyleValue::from(json!({"NSShadowBlurRadius": 1.5}));
        let shadow = Shadow::decode(&plain).unwrap();
        assert_eq!(shadow.color, None);
        assert_eq!(shadow.blur_radius, 1.5);
        assert_eq!(shadow.offset, DEFAULT_SHADOW_OFFSET);
    }

    #[test]
    fn test_offset_as_pair() {
        let plain = StyleValue::from(json!({"NSShadowOffset": [1, -1]}));
        assert_eq!(Shadow::decode(&plain).unwrap().offset, Size::new(1.0, -1.0));
    }

    #[test]
    fn test_unrelated_map_is_not_a_shadow() {
        let plain = StyleValue::from(json!({"NSFont": "Helvetica"}));
        assert_eq!(Shadow::decode(&plain), None);
        assert_eq!(Shadow::decode(&StyleValue::Number(2.0)), None);
    }

    #[test]
    fn test_identity_and_round_trip() {
        let shadow = Shadow::new(
            Color::new(10, 20, 30).with_alpha(0.5),
            3.0,
            Size::new(0.0, 1.0),
        );
        assert_eq!(Shadow::decode(&StyleValue::Shadow(shadow)), Some(shadow));
        assert_eq!(
            Shadow::decode(&StyleValue::Map(shadow.to_plain_object())),
            Some(shadow)
        );
    }

    #[test]
    fn test_colorless_shadow_omits_color_key() {
        let plain = Shadow::default().to_plain_object();
        assert!(!plain.contains_key("NSColor"));
        assert_eq!(plain["NSShadowOffset"], json!({"width": 0.0, "height": -3.0}));
    }
}
