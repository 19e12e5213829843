//! # textstyles - Typed rich-text style attributes
//!
//! `textstyles` wraps the attributed-string styling vocabulary (colors, fonts,
//! paragraph layout, shadows, icon decorations) in a typed, serializable form:
//!
//! - A **key registry** ([`StyleKey`]) naming every attribute by a stable token
//! - A **style mapping** ([`TextStyle`]) with typed getters and setters
//! - **Plain-object encoding** to and from JSON-safe values for persistence
//!
//! ## Quick Start
//!
//! ```rust
//! use textstyles::{Color, Font, TextStyle};
//!
//! let mut style = TextStyle::new();
//! style.set_font(Font::new("Menlo", 12.0));
//! style.set_text_color(Color::from_rgb(0x336699));
//! style.set_icon_alpha(0.5);
//!
//! let plain = style.to_plain_object();
//! assert_eq!(plain["NSFont"]["NSFont"], "Menlo");
//!
//! let restored = TextStyle::from_plain_object(plain).decoded();
//! assert_eq!(restored.font(), style.font());
//! ```
//!
//! ## Plain objects
//!
//! Encoded styles are objects keyed by attribute token. Typed values encode
//! to nested objects and decode from either that canonical form or a shorter
//! primitive:
//!
//! ```rust
//! use textstyles::{Color, TextStyle};
//!
//! let style = TextStyle::from_json_str(r#"{
//!     "NSColor": 16711680,
//!     "NSUnderlineColor": {"NSColor": 255, "NSAlpha": 0.5},
//!     "NSKern": 1.5
//! }"#).unwrap();
//!
//! assert_eq!(style.foreground_color(), Some(Color::from_rgb(0xFF0000)));
//! assert_eq!(style.underline_color(), Some(Color::from_rgb(0x0000FF).with_alpha(0.5)));
//! assert_eq!(style.kern(), 1.5);
//! ```
//!
//! Values that don't decode are treated as unset, never as errors.
//!
//! ## Layering
//!
//! [`merge`] combines styles with the right-hand side winning. [`StyleSheet`]
//! keeps named styles (loadable from YAML or JSON) and layers them by name.

mod attachment;
mod codec;
mod color;
mod config;
mod error;
mod font;
mod key;
mod paragraph;
mod preview;
mod shadow;
mod sheet;
mod style;
mod underline;
mod util;
mod value;

pub use attachment::{Rect, TextAttachment};
pub use codec::{decoder_for, DecodeFn, PlainCodec, DECODERS};
pub use color::Color;
pub use config::{defaults, set_defaults, StyleDefaults, SYSTEM_FONT_SIZE};
pub use error::TextStyleError;
pub use font::Font;
pub use key::{lookup, StyleKey, KNOWN_KEYS};
pub use paragraph::{LineBreakMode, ParagraphStyle, TextAlignment};
pub use shadow::{Shadow, Size, DEFAULT_SHADOW_OFFSET};
pub use sheet::{StyleSheet, STYLESHEET_EXTENSIONS};
pub use style::{merge, merge_in_place, merge_optional, merge_optional_in_place, TextStyle};
pub use underline::UnderlineStyle;
pub use util::rgb_to_ansi256;
pub use value::StyleValue;
