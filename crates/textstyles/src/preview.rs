//! Terminal preview of text styles.
//!
//! Terminals can show only part of a text style. The mapping is:
//!
//! | Attribute | Terminal |
//! |-----------|----------|
//! | foreground / background color | nearest ANSI-256 color |
//! | underline style (not none) | underlined |
//! | strikethrough style (not none) | struck through |
//! | font name with Bold, Heavy or Black | bold |
//! | font name with Italic or Oblique, positive obliqueness | italic |
//! | alpha or foreground alpha below 0.5 | dim |
//!
//! Everything else is ignored.

use console::{Style, StyledObject};

use crate::style::TextStyle;
use crate::util::to_console_color;

const BOLD_MARKERS: &[&str] = &["Bold", "Heavy", "Black"];
const ITALIC_MARKERS: &[&str] = &["Italic", "Oblique"];

/// Opacity below which text is shown dimmed.
const DIM_THRESHOLD: f64 = 0.5;

impl TextStyle {
    /// Approximates this style as a terminal style.
    ///
    /// # Example
    ///
    /// ```rust
    /// use textstyles::{Color, TextStyle, UnderlineStyle};
    ///
    /// let mut style = TextStyle::new();
    /// style.set_foreground_color(Color::from_rgb(0xFF0000));
    /// style.set_underline_style(UnderlineStyle::SINGLE);
    ///
    /// println!("{}", style.to_console_style().apply_to("warning"));
    /// ```
    pub fn to_console_style(&self) -> Style {
        let mut style = Style::new();

        let foreground = self.foreground_color();
        if let Some(color) = &foreground {
            style = style.fg(to_console_color(color));
        }
        if let Some(color) = self.background_color() {
            style = style.bg(to_console_color(&color));
        }

        if !self.underline_style().is_none() {
            style = style.underlined();
        }
        if !self.strikethrough_style().is_none() {
            style = style.strikethrough();
        }

        let font_name = self.font().map(|font| font.name).unwrap_or_default();
        if BOLD_MARKERS.iter().any(|m| font_name.contains(m)) {
            style = style.bold();
        }
        let oblique = self.obliqueness().is_some_and(|o| o > 0.0);
        if oblique || ITALIC_MARKERS.iter().any(|m| font_name.contains(m)) {
            style = style.italic();
        }

        let alpha = foreground.map_or(1.0, |c| c.alpha) * self.alpha();
        if alpha < DIM_THRESHOLD {
            style = style.dim();
        }

        style
    }

    /// Applies the terminal approximation of this style to `text`.
    pub fn apply_to<D>(&self, text: D) -> StyledObject<D> {
        self.to_console_style().apply_to(text)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Color, Font, StyleKey, TextStyle, UnderlineStyle};

    fn render(style: &TextStyle) -> String {
        style
            .to_console_style()
            .force_styling(true)
            .apply_to("x")
            .to_string()
    }

    #[test]
    fn test_empty_style_is_plain() {
        assert_eq!(render(&TextStyle::new()), "x");
    }

    #[test]
    fn test_colors_map_to_palette() {
        let style = TextStyle::new()
            .with(StyleKey::ForegroundColor, Color::from_rgb(0xFF0000))
            .with(StyleKey::BackgroundColor, Color::from_rgb(0x0000FF));
        let out = render(&style);
        assert!(out.contains("\x1b[38;5;196m"));
        assert!(out.contains("\x1b[48;5;21m"));
    }

    #[test]
    fn test_underline_and_strikethrough() {
        let mut style = TextStyle::new();
        style.set_underline_style(UnderlineStyle::SINGLE);
        assert!(render(&style).contains("\x1b[4m"));

        let mut style = TextStyle::new();
        style.set_strikethrough_style(UnderlineStyle::THICK);
        assert!(render(&style).contains("\x1b[9m"));
    }

    #[test]
    fn test_font_traits() {
        let mut style = TextStyle::new();
        style.set_font(Font::new("Helvetica-BoldOblique", 12.0));
        let out = render(&style);
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains("\x1b[3m"));
    }

    #[test]
    fn test_obliqueness_is_italic() {
        let mut style = TextStyle::new();
        style.set_obliqueness(0.2);
        assert!(render(&style).contains("\x1b[3m"));
    }

    #[test]
    fn test_translucent_text_is_dim() {
        let mut style = TextStyle::new();
        style.set_foreground_color(Color::from_rgb(0x00FF00).with_alpha(0.3));
        assert!(render(&style).contains("\x1b[2m"));

        let mut style = TextStyle::new();
        style.set_alpha(0.4);
        assert!(render(&style).contains("\x1b[2m"));

        let mut style = TextStyle::new();
        style.set_alpha(0.9);
        assert!(!render(&style).contains("\x1b[2m"));
    }
}
