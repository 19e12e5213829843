//! Plain-object encoding and decoding of typed style values.
//!
//! Every typed value (color, font, shadow, paragraph style, attachment)
//! implements [`PlainCodec`]. Decoding tries, in order:
//!
//! 1. **Identity**: the value already holds the target type.
//! 2. **Shorthand**: a bare primitive, e.g. `0xFF0000` for a color or
//!    `"Helvetica"` for a font.
//! 3. **Canonical**: a plain mapping with named sub-keys, e.g.
//!    `{NSFont: "Helvetica", NSPointSize: 12}`.
//!
//! A value that matches none of these decodes to `None`. That is never an
//! error; callers leave the attribute unset.
//!
//! Which keys get decoded into which type is fixed by [`DECODERS`].

use serde_json::{Map, Value};

use crate::attachment::TextAttachment;
use crate::color::Color;
use crate::font::Font;
use crate::key::StyleKey;
use crate::paragraph::ParagraphStyle;
use crate::shadow::Shadow;
use crate::value::StyleValue;

/// Conversion between a typed value and its plain-object form.
pub trait PlainCodec: Sized {
    /// Encodes the value as a mapping of string keys to plain values.
    fn to_plain_object(&self) -> Map<String, Value>;

    /// Decodes a stored value, returning `None` when it doesn't match.
    fn decode(value: &StyleValue) -> Option<Self>;
}

/// Decodes a stored value into a typed [`StyleValue`].
pub type DecodeFn = fn(&StyleValue) -> Option<StyleValue>;

fn decode_as<T: PlainCodec + Into<StyleValue>>(value: &StyleValue) -> Option<StyleValue> {
    T::decode(value).map(Into::into)
}

/// Keys whose values are decoded by whole-style decoding.
///
/// Keys not listed here pass through untouched.
pub static DECODERS: &[(StyleKey, DecodeFn)] = &[
    (StyleKey::Attachment, decode_as::<TextAttachment>),
    (StyleKey::BackgroundColor, decode_as::<Color>),
    (StyleKey::ForegroundColor, decode_as::<Color>),
    (StyleKey::IconTintColor, decode_as::<Color>),
    (StyleKey::StrokeColor, decode_as::<Color>),
    (StyleKey::StrikethroughColor, decode_as::<Color>),
    (StyleKey::TintColor, decode_as::<Color>),
    (StyleKey::UnderlineColor, decode_as::<Color>),
    (StyleKey::Font, decode_as::<Font>),
    (StyleKey::ParagraphStyle, decode_as::<ParagraphStyle>),
    (StyleKey::Shadow, decode_as::<Shadow>),
];

/// Returns the decoder for `key`, if the key is in the dispatch table.
pub fn decoder_for(key: &StyleKey) -> Option<DecodeFn> {
    DECODERS
        .iter()
        .find(|(candidate, _)| candidate == key)
        .map(|(_, decode)| *decode)
}

/// Reads a number from a plain mapping, coercing integers.
pub(crate) fn plain_f64(map: &Map<String, Value>, key: &StyleKey) -> Option<f64> {
    map.get(key.as_str()).and_then(Value::as_f64)
}
