//! Underline and strikethrough line styles.

use bitflags::bitflags;

bitflags! {
    /// Line style shared by underlines and strikethroughs.
    ///
    /// Values are the platform raw bits: a line weight in the low byte, a
    /// dash pattern in the second byte, and a by-word flag. Unknown bits
    /// survive a round trip through [`UnderlineStyle::from_raw`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct UnderlineStyle: i64 {
        const SINGLE = 0x01;
        const THICK = 0x02;
        const DOUBLE = 0x09;
        const PATTERN_DOT = 0x0100;
        const PATTERN_DASH = 0x0200;
        const PATTERN_DASH_DOT = 0x0300;
        const PATTERN_DASH_DOT_DOT = 0x0400;
        const BY_WORD = 0x8000;

        const _ = !0;
    }
}

impl Default for UnderlineStyle {
    fn default() -> Self {
        Self::NONE
    }
}

impl UnderlineStyle {
    pub const NONE: Self = Self::empty();

    /// Wraps a raw value, keeping every bit.
    pub const fn from_raw(raw: i64) -> Self {
        Self::from_bits_retain(raw)
    }

    pub const fn raw_value(self) -> i64 {
        self.bits()
    }

    /// Returns `true` if no line is drawn.
    pub const fn is_none(self) -> bool {
        self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_zero() {
        assert_eq!(UnderlineStyle::NONE.raw_value(), 0);
        assert!(UnderlineStyle::default().is_none());
    }

    #[test]
    fn test_combined_raw_value() {
        let style = UnderlineStyle::SINGLE | UnderlineStyle::PATTERN_DASH | UnderlineStyle::BY_WORD;
        assert_eq!(style.raw_value(), 0x8201);
        assert_eq!(UnderlineStyle::from_raw(0x8201), style);
    }

    #[test]
    fn test_unknown_bits_survive() {
        let style = UnderlineStyle::from_raw(0x10_0001);
        assert_eq!(style.raw_value(), 0x10_0001);
        assert!(!style.is_none());
    }
}
