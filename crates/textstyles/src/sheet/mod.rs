//! Style sheets: named text styles loaded from YAML or JSON.
//!
//! A style sheet document maps style names to plain style objects:
//!
//! ```yaml
//! heading:
//!   NSFont:
//!     NSFont: Georgia-Bold
//!     NSPointSize: 24
//!   NSColor: 2236962        # 0x222222
//! caption:
//!   NSColor:
//!     NSColor: 8421504      # 0x808080
//!     NSAlpha: 0.8
//!   NSKern: 0.5
//! ```
//!
//! Styles are decoded as they load, and [`StyleSheet::resolve`] layers several
//! of them with the usual right-wins merge.

#[allow(clippy::module_inception)]
mod sheet;

pub use sheet::{StyleSheet, STYLESHEET_EXTENSIONS};
