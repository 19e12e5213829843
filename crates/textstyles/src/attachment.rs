//! Inline attachments (images embedded in text).
//!
//! Like paragraph styles, attachments have no plain form yet: they encode to
//! an empty object and only decode from an already-typed value.

use serde_json::{Map, Value};

use crate::codec::PlainCodec;
use crate::shadow::Size;
use crate::value::StyleValue;

/// A rectangle in points, origin at the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            size: Size::new(width, height),
        }
    }
}

/// An image laid out inline with the text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextAttachment {
    /// Name of the image resource.
    pub image_name: Option<String>,
    /// Layout bounds; `None` lets the renderer use the image size.
    pub bounds: Option<Rect>,
}

impl TextAttachment {
    pub fn image(name: impl Into<String>) -> Self {
        Self {
            image_name: Some(name.into()),
            bounds: None,
        }
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }
}

impl PlainCodec for TextAttachment {
    fn to_plain_object(&self) -> Map<String, Value> {
        Map::new()
    }

    fn decode(value: &StyleValue) -> Option<Self> {
        match value {
            StyleValue::Attachment(attachment) => Some(attachment.clone()),
            _ => None,
        }
    }
}
