//! Style attribute keys.
//!
//! A [`StyleKey`] names one formatting property of a text style. Every key has
//! a stable string token (the form used in plain objects), and keys compare
//! and hash by that token. Tokens follow the attributed-string vocabulary, so
//! foreground color is `NSColor` and underline style is `NSUnderline`.
//!
//! The known set covers the platform built-ins plus a handful of vendor
//! extensions (`NSAlpha`, `NSIconTintColor`, ...). Anything else is carried as
//! a custom key.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a single style attribute.
#[derive(Debug, Clone)]
pub enum StyleKey {
    Attachment,
    BackgroundColor,
    BaselineOffset,
    Expansion,
    Font,
    ForegroundColor,
    Kern,
    Ligature,
    Link,
    Obliqueness,
    ParagraphStyle,
    Shadow,
    StrikethroughColor,
    StrikethroughStyle,
    StrokeColor,
    StrokeWidth,
    TextEffect,
    UnderlineColor,
    UnderlineStyle,
    VerticalGlyphForm,
    WritingDirection,

    // Vendor extensions
    Alpha,
    IconAlpha,
    IconShadow,
    IconTintColor,
    PointSize,
    ShadowBlurRadius,
    ShadowColor,
    ShadowOffset,
    TextAlignment,
    TintColor,

    /// Any token outside the known set.
    Custom(String),
}

/// Every known key, in registry order.
///
/// Adding a key means adding a variant above, its token in
/// [`StyleKey::as_str`], and an entry here.
pub const KNOWN_KEYS: &[StyleKey] = &[
    StyleKey::Attachment,
    StyleKey::BackgroundColor,
    StyleKey::BaselineOffset,
    StyleKey::Expansion,
    StyleKey::Font,
    StyleKey::ForegroundColor,
    StyleKey::Kern,
    StyleKey::Ligature,
    StyleKey::Link,
    StyleKey::Obliqueness,
    StyleKey::ParagraphStyle,
    StyleKey::Shadow,
    StyleKey::StrikethroughColor,
    StyleKey::StrikethroughStyle,
    StyleKey::StrokeColor,
    StyleKey::StrokeWidth,
    StyleKey::TextEffect,
    StyleKey::UnderlineColor,
    StyleKey::UnderlineStyle,
    StyleKey::VerticalGlyphForm,
    StyleKey::WritingDirection,
    StyleKey::Alpha,
    StyleKey::IconAlpha,
    StyleKey::IconShadow,
    StyleKey::IconTintColor,
    StyleKey::PointSize,
    StyleKey::ShadowBlurRadius,
    StyleKey::ShadowColor,
    StyleKey::ShadowOffset,
    StyleKey::TextAlignment,
    StyleKey::TintColor,
];

static BY_TOKEN: Lazy<HashMap<&'static str, &'static StyleKey>> =
    Lazy::new(|| KNOWN_KEYS.iter().map(|key| (key.as_str(), key)).collect());

/// Look up a known key by its token.
pub fn lookup(token: &str) -> Option<&'static StyleKey> {
    BY_TOKEN.get(token).copied()
}

impl StyleKey {
    /// Creates a key for `name`.
    ///
    /// A name that matches a known token yields that known key, so
    /// `StyleKey::custom("NSFont") == StyleKey::Font`.
    pub fn custom(name: impl Into<String>) -> Self {
        let name = name.into();
        match lookup(&name) {
            Some(known) => known.clone(),
            None => StyleKey::Custom(name),
        }
    }

    /// Returns the stable string token for this key.
    pub fn as_str(&self) -> &str {
        match self {
            StyleKey::Attachment => "NSAttachment",
            StyleKey::BackgroundColor => "NSBackgroundColor",
            StyleKey::BaselineOffset => "NSBaselineOffset",
            StyleKey::Expansion => "NSExpansion",
            StyleKey::Font => "NSFont",
            StyleKey::ForegroundColor => "NSColor",
            StyleKey::Kern => "NSKern",
            StyleKey::Ligature => "NSLigature",
            StyleKey::Link => "NSLink",
            StyleKey::Obliqueness => "NSObliqueness",
            StyleKey::ParagraphStyle => "NSParagraphStyle",
            StyleKey::Shadow => "NSShadow",
            StyleKey::StrikethroughColor => "NSStrikethroughColor",
            StyleKey::StrikethroughStyle => "NSStrikethrough",
            StyleKey::StrokeColor => "NSStrokeColor",
            StyleKey::StrokeWidth => "NSStrokeWidth",
            StyleKey::TextEffect => "NSTextEffect",
            StyleKey::UnderlineColor => "NSUnderlineColor",
            StyleKey::UnderlineStyle => "NSUnderline",
            StyleKey::VerticalGlyphForm => "CTVerticalForms",
            StyleKey::WritingDirection => "NSWritingDirection",
            StyleKey::Alpha => "NSAlpha",
            StyleKey::IconAlpha => "NSIconAlpha",
            StyleKey::IconShadow => "NSIconShadow",
            StyleKey::IconTintColor => "NSIconTintColor",
            StyleKey::PointSize => "NSPointSize",
            StyleKey::ShadowBlurRadius => "NSShadowBlurRadius",
            StyleKey::ShadowColor => "NSShadowColor",
            StyleKey::ShadowOffset => "NSShadowOffset",
            StyleKey::TextAlignment => "NSTextAlignment",
            StyleKey::TintColor => "NSTintColor",
            StyleKey::Custom(name) => name,
        }
    }

    /// Returns `true` if the token is outside the known set.
    pub fn is_custom(&self) -> bool {
        lookup(self.as_str()).is_none()
    }

    /// Returns `true` for keys added on top of the platform built-ins.
    pub fn is_vendor_extension(&self) -> bool {
        matches!(
            lookup(self.as_str()),
            Some(
                StyleKey::Alpha
                    | StyleKey::IconAlpha
                    | StyleKey::IconShadow
                    | StyleKey::IconTintColor
                    | StyleKey::PointSize
                    | StyleKey::ShadowBlurRadius
                    | StyleKey::ShadowColor
                    | StyleKey::ShadowOffset
                    | StyleKey::TextAlignment
                    | StyleKey::TintColor
            )
        )
    }
}

impl PartialEq for StyleKey {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for StyleKey {}

impl Hash for StyleKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl std::fmt::Display for StyleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for StyleKey {
    fn from(token: &str) -> Self {
        StyleKey::custom(token)
    }
}

impl From<String> for StyleKey {
    fn from(token: String) -> Self {
        StyleKey::custom(token)
    }
}

impl FromStr for StyleKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StyleKey::custom(s))
    }
}

impl Serialize for StyleKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StyleKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(StyleKey::custom(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_tokens_are_unique() {
        let tokens: HashSet<&str> = KNOWN_KEYS.iter().map(StyleKey::as_str).collect();
        assert_eq!(tokens.len(), KNOWN_KEYS.len());
    }

    #[test]
    fn test_lookup_round_trips_every_known_key() {
        for key in KNOWN_KEYS {
            assert_eq!(lookup(key.as_str()), Some(key));
        }
        assert_eq!(lookup("NSNotAKey"), None);
    }

    #[test]
    fn test_custom_with_known_token_is_known_key() {
        let key = StyleKey::custom("NSFont");
        assert!(matches!(key, StyleKey::Font));
        assert!(!key.is_custom());
    }

    #[test]
    fn test_equality_is_by_token() {
        let raw = StyleKey::Custom("NSColor".to_string());
        assert_eq!(raw, StyleKey::ForegroundColor);

        let mut set = HashSet::new();
        set.insert(StyleKey::ForegroundColor);
        assert!(set.contains(&raw));
    }

    #[test]
    fn test_custom_key_keeps_token() {
        let key = StyleKey::from("MyHighlight");
        assert!(key.is_custom());
        assert_eq!(key.as_str(), "MyHighlight");
        assert_eq!(key.to_string(), "MyHighlight");
    }

    #[test]
    fn test_vendor_extensions() {
        assert!(StyleKey::IconTintColor.is_vendor_extension());
        assert!(StyleKey::TextAlignment.is_vendor_extension());
        assert!(!StyleKey::Font.is_vendor_extension());
        assert!(!StyleKey::from("Whatever").is_vendor_extension());
        assert_eq!(
            KNOWN_KEYS.iter().filter(|k| k.is_vendor_extension()).count(),
            10
        );
    }

    #[test]
    fn test_serde_uses_token() {
        let json = serde_json::to_string(&StyleKey::UnderlineStyle).unwrap();
        assert_eq!(json, r#""NSUnderline""#);

        let key: StyleKey = serde_json::from_str(r#""CTVerticalForms""#).unwrap();
        assert_eq!(key, StyleKey::VerticalGlyphForm);
    }
}
