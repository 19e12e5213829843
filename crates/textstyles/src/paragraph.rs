//! Paragraph layout attributes.
//!
//! A [`ParagraphStyle`] is stored as one value under
//! [`StyleKey::ParagraphStyle`](crate::StyleKey::ParagraphStyle). Text
//! alignment and line-break mode live inside it and are surfaced on
//! [`TextStyle`](crate::TextStyle) as pass-through accessors.
//!
//! Paragraph styles do not have a plain form yet: they encode to an empty
//! object and only decode from an already-typed value.

use serde_json::{Map, Value};

use crate::codec::PlainCodec;
use crate::value::StyleValue;

/// Horizontal alignment of lines within a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    Left,
    Center,
    Right,
    Justified,
    /// Left or right depending on the writing direction.
    #[default]
    Natural,
}

impl TextAlignment {
    /// Maps a platform raw value to an alignment.
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(TextAlignment::Left),
            1 => Some(TextAlignment::Center),
            2 => Some(TextAlignment::Right),
            3 => Some(TextAlignment::Justified),
            4 => Some(TextAlignment::Natural),
            _ => None,
        }
    }

    pub fn raw_value(self) -> i64 {
        match self {
            TextAlignment::Left => 0,
            TextAlignment::Center => 1,
            TextAlignment::Right => 2,
            TextAlignment::Justified => 3,
            TextAlignment::Natural => 4,
        }
    }
}

/// What happens to lines too long for their container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineBreakMode {
    #[default]
    WordWrapping,
    CharWrapping,
    Clipping,
    TruncatingHead,
    TruncatingTail,
    TruncatingMiddle,
}

impl LineBreakMode {
    /// Maps a platform raw value to a line-break mode.
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(LineBreakMode::WordWrapping),
            1 => Some(LineBreakMode::CharWrapping),
            2 => Some(LineBreakMode::Clipping),
            3 => Some(LineBreakMode::TruncatingHead),
            4 => Some(LineBreakMode::TruncatingTail),
            5 => Some(LineBreakMode::TruncatingMiddle),
            _ => None,
        }
    }

    pub fn raw_value(self) -> i64 {
        match self {
            LineBreakMode::WordWrapping => 0,
            LineBreakMode::CharWrapping => 1,
            LineBreakMode::Clipping => 2,
            LineBreakMode::TruncatingHead => 3,
            LineBreakMode::TruncatingTail => 4,
            LineBreakMode::TruncatingMiddle => 5,
        }
    }
}

/// Layout settings shared by every line of a paragraph.
///
/// The default is natural alignment, word wrapping, and zero for every
/// spacing and indent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParagraphStyle {
    pub alignment: TextAlignment,
    pub line_break_mode: LineBreakMode,
    pub line_spacing: f64,
    /// Space after the paragraph.
    pub paragraph_spacing: f64,
    pub paragraph_spacing_before: f64,
    pub first_line_head_indent: f64,
    pub head_indent: f64,
    /// Negative values measure from the trailing margin.
    pub tail_indent: f64,
    pub minimum_line_height: f64,
    /// Zero means unlimited.
    pub maximum_line_height: f64,
    pub line_height_multiple: f64,
    pub hyphenation_factor: f64,
}

impl ParagraphStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_line_break_mode(mut self, mode: LineBreakMode) -> Self {
        self.line_break_mode = mode;
        self
    }

    pub fn with_line_spacing(mut self, spacing: f64) -> Self {
        self.line_spacing = spacing;
        self
    }
}

// TODO: persist paragraph fields once the plain schema for them is settled;
// until then encoding drops everything.
impl PlainCodec for ParagraphStyle {
    fn to_plain_object(&self) -> Map<String, Value> {
        Map::new()
    }

    fn decode(value: &StyleValue) -> Option<Self> {
        match value {
            StyleValue::ParagraphStyle(style) => Some(*style),
            _ => None,
        }
    }
}
