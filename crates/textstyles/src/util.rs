//! Color helpers for terminal output.

use crate::color::Color;

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Grays map onto the 24-step gray ramp, everything else onto the 6×6×6
/// color cube.
///
/// # Example
///
/// ```rust
/// use textstyles::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Maps a style color onto the terminal palette, ignoring alpha.
pub(crate) fn to_console_color(color: &Color) -> console::Color {
    console::Color::Color256(rgb_to_ansi256(color.rgb()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        let mid = rgb_to_ansi256((128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_rgb_to_ansi256_color_cube() {
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
    }

    #[test]
    fn test_to_console_color_uses_palette() {
        let color = Color::from_rgb(0xFF0000).with_alpha(0.1);
        assert_eq!(to_console_color(&color), console::Color::Color256(196));
    }
}
