//! Combining styles.
//!
//! In every merge the right-hand style wins: its keys override the same keys
//! on the left. An absent style (`None`) behaves like an empty one, except
//! that merging two absent styles stays absent, so "no style" remains
//! distinguishable from "empty style".

use std::ops::{Add, AddAssign};

use crate::key::StyleKey;
use crate::value::StyleValue;

use super::TextStyle;

/// Returns `base` with every attribute of `overlay` applied on top.
pub fn merge(base: &TextStyle, overlay: &TextStyle) -> TextStyle {
    let mut merged = base.clone();
    merge_in_place(&mut merged, overlay);
    merged
}

/// Merges two optional styles.
///
/// | base | overlay | result |
/// |------|---------|--------|
/// | `Some(a)` | `Some(b)` | `Some(merge(a, b))` |
/// | `Some(a)` | `None` | `Some(a)` |
/// | `None` | `Some(b)` | `Some(b)` |
/// | `None` | `None` | `None` |
pub fn merge_optional(base: Option<&TextStyle>, overlay: Option<&TextStyle>) -> Option<TextStyle> {
    match (base, overlay) {
        (Some(base), Some(overlay)) => Some(merge(base, overlay)),
        (Some(only), None) | (None, Some(only)) => Some(only.clone()),
        (None, None) => None,
    }
}

/// Applies `overlay` directly onto `base`.
pub fn merge_in_place(base: &mut TextStyle, overlay: &TextStyle) {
    for (key, value) in overlay {
        base.attributes.insert(key.clone(), value.clone());
    }
}

/// Applies an optional `overlay` onto an optional `base`.
///
/// An absent base becomes a copy of the overlay; an absent overlay changes
/// nothing.
pub fn merge_optional_in_place(base: &mut Option<TextStyle>, overlay: Option<&TextStyle>) {
    let Some(overlay) = overlay else {
        return;
    };
    match base {
        Some(base) => merge_in_place(base, overlay),
        None => *base = Some(overlay.clone()),
    }
}

impl TextStyle {
    /// Returns a copy of this style with `overlay` applied on top.
    #[must_use]
    pub fn merged(&self, overlay: &TextStyle) -> TextStyle {
        merge(self, overlay)
    }
}

impl Add<&TextStyle> for TextStyle {
    type Output = TextStyle;

    fn add(mut self, overlay: &TextStyle) -> TextStyle {
        merge_in_place(&mut self, overlay);
        self
    }
}

impl AddAssign<&TextStyle> for TextStyle {
    fn add_assign(&mut self, overlay: &TextStyle) {
        merge_in_place(self, overlay);
    }
}

impl Extend<(StyleKey, StyleValue)> for TextStyle {
    fn extend<I: IntoIterator<Item = (StyleKey, StyleValue)>>(&mut self, iter: I) {
        self.attributes.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn red_kern() -> TextStyle {
        TextStyle::new()
            .with(StyleKey::ForegroundColor, Color::from_rgb(0xFF0000))
            .with(StyleKey::Kern, 1.0)
    }

    fn blue_ligature() -> TextStyle {
        TextStyle::new()
            .with(StyleKey::ForegroundColor, Color::from_rgb(0x0000FF))
            .with(StyleKey::Ligature, 0)
    }

    #[test]
    fn test_merge_right_overrides_left() {
        let merged = merge(&red_kern(), &blue_ligature());
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.foreground_color(), Some(Color::from_rgb(0x0000FF)));
        assert_eq!(merged.kern(), 1.0);
        assert_eq!(merged.ligature(), 0);
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        assert_eq!(merge(&red_kern(), &TextStyle::new()), red_kern());
        assert_eq!(merge(&TextStyle::new(), &red_kern()), red_kern());
    }

    #[test]
    fn test_merge_optional_absent_rules() {
        let a = red_kern();
        let b = blue_ligature();

        assert_eq!(merge_optional(None, None), None);
        assert_eq!(merge_optional(None, Some(&b)), Some(b.clone()));
        assert_eq!(merge_optional(Some(&a), None), Some(a.clone()));
        assert_eq!(merge_optional(Some(&a), Some(&b)), Some(merge(&a, &b)));
    }

    #[test]
    fn test_merge_optional_keeps_empty_distinct_from_absent() {
        let empty = TextStyle::new();
        assert_eq!(merge_optional(Some(&empty), None), Some(TextStyle::new()));
        assert_eq!(merge_optional(None, None), None);
    }

    #[test]
    fn test_merge_in_place_matches_merge() {
        let mut acc = red_kern();
        merge_in_place(&mut acc, &blue_ligature());
        assert_eq!(acc, merge(&red_kern(), &blue_ligature()));
    }

    #[test]
    fn test_merge_optional_in_place() {
        let mut absent: Option<TextStyle> = None;
        merge_optional_in_place(&mut absent, None);
        assert_eq!(absent, None);

        merge_optional_in_place(&mut absent, Some(&red_kern()));
        assert_eq!(absent, Some(red_kern()));

        merge_optional_in_place(&mut absent, Some(&blue_ligature()));
        assert_eq!(absent, Some(merge(&red_kern(), &blue_ligature())));

        merge_optional_in_place(&mut absent, None);
        assert_eq!(absent, Some(merge(&red_kern(), &blue_ligature())));
    }

    #[test]
    fn test_operators() {
        let sum = red_kern() + &blue_ligature();
        assert_eq!(sum, merge(&red_kern(), &blue_ligature()));

        let mut acc = red_kern();
        acc += &blue_ligature();
        assert_eq!(acc, sum);

        assert_eq!(red_kern().merged(&blue_ligature()), sum);
    }

    #[test]
    fn test_extend_overrides() {
        let mut style = red_kern();
        style.extend([(StyleKey::Kern, StyleValue::Number(3.0))]);
        assert_eq!(style.kern(), 3.0);
        assert_eq!(style.len(), 2);
    }
}
