//! Typed accessors over [`TextStyle`].
//!
//! Getters look up the key and decode the stored value. A missing or
//! mismatched value reads as the documented default (for scalars) or `None`
//! (for colors, fonts, shadows, attachments). Setters store the typed value
//! verbatim, with no range checks. Use [`TextStyle::remove`] to unset.
//!
//! `text_alignment` and `line_break_mode` are not stored under their own keys:
//! they read and write one field of the paragraph style.

use crate::attachment::TextAttachment;
use crate::codec::PlainCodec;
use crate::color::Color;
use crate::font::Font;
use crate::key::StyleKey;
use crate::paragraph::{LineBreakMode, ParagraphStyle, TextAlignment};
use crate::shadow::Shadow;
use crate::underline::UnderlineStyle;
use crate::value::StyleValue;

use super::TextStyle;

macro_rules! decoded_accessor {
    ($(#[$doc:meta])* $get:ident, $set:ident, $key:ident, $ty:ty) => {
        $(#[$doc])*
        pub fn $get(&self) -> Option<$ty> {
            self.decode_key::<$ty>(&StyleKey::$key)
        }

        pub fn $set(&mut self, value: $ty) {
            self.attributes
                .insert(StyleKey::$key, StyleValue::from(value));
        }
    };
}

macro_rules! float_accessor {
    ($(#[$doc:meta])* $get:ident, $set:ident, $key:ident, $default:expr) => {
        $(#[$doc])*
        pub fn $get(&self) -> f64 {
            self.float(&StyleKey::$key).unwrap_or($default)
        }

        pub fn $set(&mut self, value: f64) {
            self.attributes
                .insert(StyleKey::$key, StyleValue::Number(value));
        }
    };
}

impl TextStyle {
    fn decode_key<T: PlainCodec>(&self, key: &StyleKey) -> Option<T> {
        self.get(key).and_then(T::decode)
    }

    fn float(&self, key: &StyleKey) -> Option<f64> {
        self.get(key).and_then(StyleValue::as_f64)
    }

    fn integer(&self, key: &StyleKey) -> Option<i64> {
        self.get(key).and_then(StyleValue::as_i64)
    }

    decoded_accessor!(attachment, set_attachment, Attachment, TextAttachment);
    decoded_accessor!(background_color, set_background_color, BackgroundColor, Color);
    decoded_accessor!(font, set_font, Font, Font);
    decoded_accessor!(foreground_color, set_foreground_color, ForegroundColor, Color);
    decoded_accessor!(icon_shadow, set_icon_shadow, IconShadow, Shadow);
    decoded_accessor!(
        /// Tint applied to icons rendered alongside the text.
        icon_tint_color,
        set_icon_tint_color,
        IconTintColor,
        Color
    );
    decoded_accessor!(paragraph_style, set_paragraph_style, ParagraphStyle, ParagraphStyle);
    decoded_accessor!(shadow, set_shadow, Shadow, Shadow);
    decoded_accessor!(strikethrough_color, set_strikethrough_color, StrikethroughColor, Color);
    decoded_accessor!(stroke_color, set_stroke_color, StrokeColor, Color);
    decoded_accessor!(tint_color, set_tint_color, TintColor, Color);
    decoded_accessor!(underline_color, set_underline_color, UnderlineColor, Color);

    float_accessor!(
        /// Overall opacity of the text. Defaults to `1.0`.
        alpha,
        set_alpha,
        Alpha,
        1.0
    );
    float_accessor!(
        /// Log of the horizontal stretch factor. Defaults to `0.0`.
        expansion,
        set_expansion,
        Expansion,
        0.0
    );
    float_accessor!(
        /// Opacity of icons. Defaults to `1.0`.
        icon_alpha,
        set_icon_alpha,
        IconAlpha,
        1.0
    );
    float_accessor!(
        /// Extra spacing between characters, in points. Defaults to `0.0`.
        kern,
        set_kern,
        Kern,
        0.0
    );
    float_accessor!(
        /// Stroke width as a percentage of the font size. Defaults to `0.0`.
        stroke_width,
        set_stroke_width,
        StrokeWidth,
        0.0
    );

    /// Vertical offset from the baseline, in points.
    pub fn baseline_offset(&self) -> Option<f64> {
        self.float(&StyleKey::BaselineOffset)
    }

    pub fn set_baseline_offset(&mut self, value: f64) {
        self.attributes
            .insert(StyleKey::BaselineOffset, StyleValue::Number(value));
    }

    /// Skew applied to glyphs.
    pub fn obliqueness(&self) -> Option<f64> {
        self.float(&StyleKey::Obliqueness)
    }

    pub fn set_obliqueness(&mut self, value: f64) {
        self.attributes
            .insert(StyleKey::Obliqueness, StyleValue::Number(value));
    }

    /// Ligature level. Defaults to `1` (standard ligatures).
    pub fn ligature(&self) -> i64 {
        self.integer(&StyleKey::Ligature).unwrap_or(1)
    }

    pub fn set_ligature(&mut self, value: i64) {
        self.attributes
            .insert(StyleKey::Ligature, StyleValue::Integer(value));
    }

    /// Defaults to `0` (horizontal glyphs).
    pub fn vertical_glyph_form(&self) -> i64 {
        self.integer(&StyleKey::VerticalGlyphForm).unwrap_or(0)
    }

    pub fn set_vertical_glyph_form(&mut self, value: i64) {
        self.attributes
            .insert(StyleKey::VerticalGlyphForm, StyleValue::Integer(value));
    }

    /// Link target. Plain strings are accepted as well as links.
    pub fn link(&self) -> Option<String> {
        self.get(&StyleKey::Link)
            .and_then(StyleValue::as_str)
            .map(str::to_string)
    }

    pub fn set_link(&mut self, url: impl Into<String>) {
        self.attributes
            .insert(StyleKey::Link, StyleValue::Url(url.into()));
    }

    pub fn text_effect(&self) -> Option<String> {
        match self.get(&StyleKey::TextEffect) {
            Some(StyleValue::String(effect)) => Some(effect.clone()),
            _ => None,
        }
    }

    pub fn set_text_effect(&mut self, effect: impl Into<String>) {
        self.attributes
            .insert(StyleKey::TextEffect, StyleValue::String(effect.into()));
    }

    pub fn underline_style(&self) -> UnderlineStyle {
        UnderlineStyle::from_raw(self.integer(&StyleKey::UnderlineStyle).unwrap_or(0))
    }

    pub fn set_underline_style(&mut self, style: UnderlineStyle) {
        self.attributes
            .insert(StyleKey::UnderlineStyle, StyleValue::Integer(style.raw_value()));
    }

    pub fn strikethrough_style(&self) -> UnderlineStyle {
        UnderlineStyle::from_raw(self.integer(&StyleKey::StrikethroughStyle).unwrap_or(0))
    }

    pub fn set_strikethrough_style(&mut self, style: UnderlineStyle) {
        self.attributes.insert(
            StyleKey::StrikethroughStyle,
            StyleValue::Integer(style.raw_value()),
        );
    }

    /// Writing direction overrides. Empty when unset.
    pub fn writing_direction(&self) -> Vec<i64> {
        self.get(&StyleKey::WritingDirection)
            .and_then(StyleValue::as_int_array)
            .map(<[i64]>::to_vec)
            .unwrap_or_default()
    }

    pub fn set_writing_direction(&mut self, directions: Vec<i64>) {
        self.attributes
            .insert(StyleKey::WritingDirection, StyleValue::IntArray(directions));
    }

    /// Same storage as [`foreground_color`](Self::foreground_color).
    pub fn text_color(&self) -> Option<Color> {
        self.foreground_color()
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.set_foreground_color(color);
    }

    /// Alignment from the paragraph style, or `None` if there isn't one.
    pub fn text_alignment(&self) -> Option<TextAlignment> {
        self.paragraph_style().map(|style| style.alignment)
    }

    /// Sets the paragraph style's alignment, keeping its other fields.
    ///
    /// A default paragraph style is created if none is set.
    pub fn set_text_alignment(&mut self, alignment: TextAlignment) {
        self.update_paragraph_style(|style| style.alignment = alignment);
    }

    /// Line-break mode from the paragraph style, or `None` if there isn't one.
    pub fn line_break_mode(&self) -> Option<LineBreakMode> {
        self.paragraph_style().map(|style| style.line_break_mode)
    }

    /// Sets the paragraph style's line-break mode, keeping its other fields.
    ///
    /// A default paragraph style is created if none is set.
    pub fn set_line_break_mode(&mut self, mode: LineBreakMode) {
        self.update_paragraph_style(|style| style.line_break_mode = mode);
    }

    fn update_paragraph_style(&mut self, update: impl FnOnce(&mut ParagraphStyle)) {
        let mut style = self.paragraph_style().unwrap_or_default();
        update(&mut style);
        self.set_paragraph_style(style);
    }
}
