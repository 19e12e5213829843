//! The text style mapping and its plain-object form.

use std::collections::hash_map::{self, HashMap};

use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::codec::decoder_for;
use crate::error::TextStyleError;
use crate::key::StyleKey;
use crate::value::StyleValue;

/// One unit of rich-text formatting: a mapping from [`StyleKey`] to
/// [`StyleValue`].
///
/// Values are stored as given. Typed accessors (see the `accessors` module)
/// decode on read, so a style built from a plain object can be queried before
/// or after [`decode`](TextStyle::decode).
///
/// # Example
///
/// ```rust
/// use textstyles::{Color, Font, TextAlignment, TextStyle};
///
/// let mut style = TextStyle::new();
/// style.set_font(Font::new("Helvetica-Bold", 18.0));
/// style.set_foreground_color(Color::from_rgb(0x333333));
/// style.set_text_alignment(TextAlignment::Center);
///
/// let json = style.to_json_string().unwrap();
/// let restored = TextStyle::from_json_str(&json).unwrap();
/// assert_eq!(restored.font(), style.font());
/// assert_eq!(restored.text_color(), style.text_color());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyle {
    pub(crate) attributes: HashMap<StyleKey, StyleValue>,
}

impl TextStyle {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, returning the updated style for chaining.
    pub fn with<K: Into<StyleKey>, V: Into<StyleValue>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the raw value stored under `key`.
    pub fn get(&self, key: &StyleKey) -> Option<&StyleValue> {
        self.attributes.get(key)
    }

    /// Stores `value` under `key`, returning the previous value.
    pub fn insert<K: Into<StyleKey>, V: Into<StyleValue>>(
        &mut self,
        key: K,
        value: V,
    ) -> Option<StyleValue> {
        self.attributes.insert(key.into(), value.into())
    }

    /// Unsets `key`, returning the value it held.
    pub fn remove(&mut self, key: &StyleKey) -> Option<StyleValue> {
        self.attributes.remove(key)
    }

    pub fn contains_key(&self, key: &StyleKey) -> bool {
        self.attributes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterates over attributes in no particular order.
    pub fn iter(&self) -> hash_map::Iter<'_, StyleKey, StyleValue> {
        self.attributes.iter()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, StyleKey, StyleValue> {
        self.attributes.keys()
    }

    /// Encodes the style as a plain object keyed by attribute token.
    ///
    /// Typed values go through their own encoder; everything else is copied
    /// unchanged.
    pub fn to_plain_object(&self) -> Map<String, Value> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str().to_string(), value.to_plain()))
            .collect()
    }

    /// Builds a style from a plain object without decoding any values.
    ///
    /// Call [`decode`](Self::decode) (or use [`decoded`](Self::decoded)) to
    /// turn colors, fonts, and shadows into typed values.
    pub fn from_plain_object(object: Map<String, Value>) -> Self {
        let attributes = object
            .into_iter()
            .map(|(token, value)| (StyleKey::from(token), StyleValue::from(value)))
            .collect();
        Self { attributes }
    }

    /// Builds a style from any plain value, which must be a mapping.
    pub fn from_plain(value: Value) -> Result<Self, TextStyleError> {
        match value {
            Value::Object(object) => Ok(Self::from_plain_object(object)),
            other => Err(TextStyleError::not_a_mapping("text style", &other)),
        }
    }

    /// Decodes every attribute in the dispatch table in place.
    ///
    /// Values that fail to decode are removed; keys outside the table are
    /// left alone.
    pub fn decode(&mut self) {
        self.attributes.retain(|key, value| {
            let Some(decode) = decoder_for(key) else {
                return true;
            };
            match decode(value) {
                Some(decoded) => {
                    *value = decoded;
                    true
                }
                None => {
                    debug!("dropping undecodable {} value: {:?}", key, value);
                    false
                }
            }
        });
    }

    /// Returns a decoded copy, leaving `self` untouched.
    pub fn decoded(&self) -> Self {
        let mut style = self.clone();
        style.decode();
        style
    }

    /// Parses a JSON object and decodes it.
    pub fn from_json_str(json: &str) -> Result<Self, TextStyleError> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_plain(value)?.decoded())
    }

    /// Parses a YAML mapping and decodes it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TextStyleError> {
        let value: Value = serde_yaml::from_str(yaml)?;
        Ok(Self::from_plain(value)?.decoded())
    }

    /// Encodes the style as a JSON object string.
    pub fn to_json_string(&self) -> Result<String, TextStyleError> {
        Ok(serde_json::to_string(&self.to_plain_object())?)
    }
}

impl FromIterator<(StyleKey, StyleValue)> for TextStyle {
    fn from_iter<I: IntoIterator<Item = (StyleKey, StyleValue)>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TextStyle {
    type Item = (StyleKey, StyleValue);
    type IntoIter = hash_map::IntoIter<StyleKey, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}

impl<'a> IntoIterator for &'a TextStyle {
    type Item = (&'a StyleKey, &'a StyleValue);
    type IntoIter = hash_map::Iter<'a, StyleKey, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

impl Serialize for TextStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_plain_object().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TextStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_plain_object(object).decoded())
    }
}
