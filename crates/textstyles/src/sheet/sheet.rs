//! Named collections of text styles.

use std::collections::BTreeMap;
use std::path::Path;

use log::trace;
use serde_json::{Map, Value};

use crate::error::TextStyleError;
use crate::style::{merge_in_place, TextStyle};

/// Recognized style sheet file extensions.
pub const STYLESHEET_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// A named collection of text styles.
///
/// # Example
///
/// ```rust
/// use textstyles::{Color, StyleKey, StyleSheet, TextStyle};
///
/// let sheet = StyleSheet::new()
///     .add("body", TextStyle::new().with(StyleKey::Kern, 0.5))
///     .add(
///         "link",
///         TextStyle::new().with(StyleKey::ForegroundColor, Color::from_rgb(0x0066CC)),
///     );
///
/// let link = sheet.resolve(&["body", "link"]).unwrap();
/// assert_eq!(link.kern(), 0.5);
/// assert_eq!(link.foreground_color(), Some(Color::from_rgb(0x0066CC)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    styles: BTreeMap<String, TextStyle>,
}

impl StyleSheet {
    /// Creates an empty style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning the updated sheet for chaining.
    ///
    /// A style with the same name is replaced.
    pub fn add(mut self, name: &str, style: TextStyle) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TextStyle> {
        self.styles.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Style names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Merges the named styles left to right; later names win.
    ///
    /// Unknown names are skipped. Returns `None` if none of the names exist.
    pub fn resolve(&self, names: &[&str]) -> Option<TextStyle> {
        let mut resolved: Option<TextStyle> = None;
        for style in names.iter().filter_map(|name| self.get(name)) {
            match resolved.as_mut() {
                Some(acc) => merge_in_place(acc, style),
                None => resolved = Some(style.clone()),
            }
        }
        resolved
    }

    /// Builds a sheet from a plain document mapping names to style objects.
    ///
    /// Every style is decoded.
    pub fn from_plain(document: Value) -> Result<Self, TextStyleError> {
        let entries = match document {
            Value::Object(entries) => entries,
            other => return Err(TextStyleError::not_a_mapping("style sheet", &other)),
        };

        let mut styles = BTreeMap::new();
        for (name, style) in entries {
            let style = TextStyle::from_plain(style)?.decoded();
            trace!("loaded style '{}' with {} attributes", name, style.len());
            styles.insert(name, style);
        }
        Ok(Self { styles })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, TextStyleError> {
        let document: Value = serde_yaml::from_str(yaml)?;
        Self::from_plain(document)
    }

    pub fn from_json_str(json: &str) -> Result<Self, TextStyleError> {
        let document: Value = serde_json::from_str(json)?;
        Self::from_plain(document)
    }

    /// Loads a sheet from a `.yaml`, `.yml`, or `.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TextStyleError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .filter(|ext| STYLESHEET_EXTENSIONS.contains(&ext.as_str()))
            .ok_or_else(|| TextStyleError::UnsupportedExtension {
                path: path.to_path_buf(),
            })?;

        let content = std::fs::read_to_string(path).map_err(|source| TextStyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        trace!("parsing style sheet {}", path.display());
        match extension.as_str() {
            "json" => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }

    /// Encodes the sheet as a document mapping names to plain style objects.
    pub fn to_plain_object(&self) -> Map<String, Value> {
        self.styles
            .iter()
            .map(|(name, style)| (name.clone(), Value::Object(style.to_plain_object())))
            .collect()
    }
}
