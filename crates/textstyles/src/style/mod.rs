//! Text styles: the attribute mapping, its typed accessors, and merging.
//!
//! - [`TextStyle`]: mapping from [`StyleKey`](crate::StyleKey) to
//!   [`StyleValue`](crate::StyleValue) with plain-object encoding
//! - typed accessors such as [`TextStyle::font`] and
//!   [`TextStyle::set_text_alignment`]
//! - [`merge`] and friends for layering styles

mod accessors;
mod merge;
mod text_style;

pub use merge::{merge, merge_in_place, merge_optional, merge_optional_in_place};
pub use text_style::TextStyle;
