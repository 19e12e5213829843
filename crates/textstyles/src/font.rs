//! Font descriptors.
//!
//! Canonical form is `{"NSFont": "Helvetica", "NSPointSize": 12.0}`; both keys
//! are required. A bare string decodes as that font at the default system
//! point size (see [`defaults`](crate::defaults)).

use serde_json::{Map, Value};

use crate::codec::{plain_f64, PlainCodec};
use crate::config::defaults;
use crate::key::StyleKey;
use crate::value::StyleValue;

/// A font face at a given point size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// PostScript or family name, e.g. `"Helvetica-Bold"`.
    pub name: String,
    pub point_size: f64,
}

impl Font {
    pub fn new(name: impl Into<String>, point_size: f64) -> Self {
        Self {
            name: name.into(),
            point_size,
        }
    }

    /// Creates a font at the current default system point size.
    pub fn system_sized(name: impl Into<String>) -> Self {
        Self::new(name, defaults().system_font_size)
    }

    /// Returns the same face at another size.
    pub fn with_size(&self, point_size: f64) -> Self {
        Self::new(self.name.clone(), point_size)
    }
}

impl PlainCodec for Font {
    fn to_plain_object(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            StyleKey::Font.as_str().to_string(),
            Value::String(self.name.clone()),
        );
        map.insert(
            StyleKey::PointSize.as_str().to_string(),
            Value::from(self.point_size),
        );
        map
    }

    fn decode(value: &StyleValue) -> Option<Self> {
        match value {
            StyleValue::Font(font) => Some(font.clone()),
            StyleValue::String(name) => Some(Self::system_sized(name.as_str())),
            StyleValue::Map(map) => {
                let name = map.get(StyleKey::Font.as_str()).and_then(Value::as_str)?;
                let point_size = plain_f64(map, &StyleKey::PointSize)?;
                Some(Self::new(name, point_size))
            }
            _ => None,
        }
    }
}
