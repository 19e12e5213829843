//! Style attribute values.
//!
//! [`StyleValue`] is the runtime representation of whatever is stored under a
//! [`StyleKey`](crate::StyleKey). Typed variants hold decoded values; the
//! `Map` and `Plain` variants hold plain data that has not been decoded (yet),
//! such as a color still in its `{NSColor: .., NSAlpha: ..}` form.

use serde_json::{Map, Number, Value};

use crate::attachment::TextAttachment;
use crate::codec::PlainCodec;
use crate::color::Color;
use crate::font::Font;
use crate::paragraph::ParagraphStyle;
use crate::shadow::Shadow;

/// A value stored under a style key.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Color(Color),
    Font(Font),
    Shadow(Shadow),
    ParagraphStyle(ParagraphStyle),
    Attachment(TextAttachment),

    /// Floating point number (kern, stroke width, alpha, ...)
    Number(f64),

    /// Integer (ligature, underline raw value, packed colors, ...)
    Integer(i64),

    String(String),

    /// Link target.
    Url(String),

    /// Integer array (writing direction)
    IntArray(Vec<i64>),

    /// Plain mapping that has not been decoded into a typed value.
    Map(Map<String, Value>),

    /// Any other plain value (booleans, null, mixed arrays).
    Plain(Value),
}

impl StyleValue {
    /// Get the value as a float, coercing integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get the value if this is an Integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            StyleValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the string if this is a String or Url.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::String(s) | StyleValue::Url(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer array if this is an IntArray.
    pub fn as_int_array(&self) -> Option<&[i64]> {
        match self {
            StyleValue::IntArray(v) => Some(v),
            _ => None,
        }
    }

    /// Get the plain mapping if this is a Map.
    pub fn as_map(&self) -> Option<&Map<String, Value>> {
        match self {
            StyleValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Encodes this value into its plain, JSON-safe form.
    ///
    /// Typed values go through their own [`PlainCodec`] encoder; everything
    /// else passes through unchanged.
    pub fn to_plain(&self) -> Value {
        match self {
            StyleValue::Color(c) => Value::Object(c.to_plain_object()),
            StyleValue::Font(f) => Value::Object(f.to_plain_object()),
            StyleValue::Shadow(s) => Value::Object(s.to_plain_object()),
            StyleValue::ParagraphStyle(p) => Value::Object(p.to_plain_object()),
            StyleValue::Attachment(a) => Value::Object(a.to_plain_object()),
            StyleValue::Number(n) => Number::from_f64(*n).map_or(Value::Null, Value::Number),
            StyleValue::Integer(i) => Value::from(*i),
            StyleValue::String(s) | StyleValue::Url(s) => Value::String(s.clone()),
            StyleValue::IntArray(v) => Value::from(v.clone()),
            StyleValue::Map(m) => Value::Object(m.clone()),
            StyleValue::Plain(v) => v.clone(),
        }
    }
}

/// Reads a plain value without decoding it into a typed value.
///
/// Integers that don't fit `i64` are kept as numbers.
impl From<Value> for StyleValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(i) => StyleValue::Integer(i),
                None => n
                    .as_f64()
                    .map_or(StyleValue::Plain(Value::Number(n)), StyleValue::Number),
            },
            Value::String(s) => StyleValue::String(s),
            Value::Object(m) => StyleValue::Map(m),
            Value::Array(items) => {
                let ints: Option<Vec<i64>> = items.iter().map(Value::as_i64).collect();
                match ints {
                    Some(ints) => StyleValue::IntArray(ints),
                    None => StyleValue::Plain(Value::Array(items)),
                }
            }
            other => StyleValue::Plain(other),
        }
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        StyleValue::Color(value)
    }
}

impl From<Font> for StyleValue {
    fn from(value: Font) -> Self {
        StyleValue::Font(value)
    }
}

impl From<Shadow> for StyleValue {
    fn from(value: Shadow) -> Self {
        StyleValue::Shadow(value)
    }
}

impl From<ParagraphStyle> for StyleValue {
    fn from(value: ParagraphStyle) -> Self {
        StyleValue::ParagraphStyle(value)
    }
}

impl From<TextAttachment> for StyleValue {
    fn from(value: TextAttachment) -> Self {
        StyleValue::Attachment(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        StyleValue::Integer(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Integer(value.into())
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::String(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::String(value)
    }
}

impl From<Vec<i64>> for StyleValue {
    fn from(value: Vec<i64>) -> Self {
        StyleValue::IntArray(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_plain_integer_and_float() {
        assert_eq!(StyleValue::from(json!(3)), StyleValue::Integer(3));
        assert_eq!(StyleValue::from(json!(1.5)), StyleValue::Number(1.5));
    }

    #[test]
    fn test_from_plain_huge_unsigned_stays_number() {
        let value = StyleValue::from(json!(u64::MAX));
        assert!(matches!(value, StyleValue::Number(_)));
    }

    #[test]
    fn test_from_plain_int_array() {
        assert_eq!(
            StyleValue::from(json!([0, 1])),
            StyleValue::IntArray(vec![0, 1])
        );
        assert_eq!(
            StyleValue::from(json!([0, "x"])),
            StyleValue::Plain(json!([0, "x"]))
        );
    }

    #[test]
    fn test_from_plain_object_and_other() {
        let value = StyleValue::from(json!({"NSColor": 255}));
        assert_eq!(value.as_map().unwrap()["NSColor"], json!(255));
        assert_eq!(StyleValue::from(json!(true)), StyleValue::Plain(json!(true)));
    }

    #[test]
    fn test_as_f64_coerces_integers() {
        assert_eq!(StyleValue::Integer(2).as_f64(), Some(2.0));
        assert_eq!(StyleValue::Number(0.25).as_f64(), Some(0.25));
        assert_eq!(StyleValue::String("2".into()).as_f64(), None);
    }

    #[test]
    fn test_as_i64_rejects_floats() {
        assert_eq!(StyleValue::Integer(7).as_i64(), Some(7));
        assert_eq!(StyleValue::Number(7.0).as_i64(), None);
    }

    #[test]
    fn test_to_plain_passes_raw_values_through() {
        assert_eq!(StyleValue::Integer(1).to_plain(), json!(1));
        assert_eq!(StyleValue::Number(0.5).to_plain(), json!(0.5));
        assert_eq!(
            StyleValue::Url("https://example.com".into()).to_plain(),
            json!("https://example.com")
        );
        assert_eq!(StyleValue::IntArray(vec![1, 2]).to_plain(), json!([1, 2]));
        assert_eq!(StyleValue::Number(f64::NAN).to_plain(), Value::Null);
    }

    #[test]
    fn test_to_plain_encodes_typed_values() {
        let value = StyleValue::Color(Color::from_rgb(0x336699));
        assert_eq!(value.to_plain(), json!({"NSColor": 0x336699, "NSAlpha": 1.0}));
    }
}
