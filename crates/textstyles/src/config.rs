//! Process-wide defaults used while decoding.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Point size the platform uses for body text.
pub const SYSTEM_FONT_SIZE: f64 = 14.0;

/// Defaults applied when a plain value leaves something unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleDefaults {
    /// Point size given to fonts decoded from a bare name.
    pub system_font_size: f64,
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            system_font_size: SYSTEM_FONT_SIZE,
        }
    }
}

static DEFAULTS: Lazy<Mutex<StyleDefaults>> = Lazy::new(|| Mutex::new(StyleDefaults::default()));

/// Overrides the defaults used by subsequent decodes.
///
/// Hosts whose body text size differs from [`SYSTEM_FONT_SIZE`] set this once
/// at startup.
pub fn set_defaults(defaults: StyleDefaults) {
    let mut guard = DEFAULTS.lock().unwrap_or_else(|e| e.into_inner());
    *guard = defaults;
}

/// Returns the current defaults.
pub fn defaults() -> StyleDefaults {
    *DEFAULTS.lock().unwrap_or_else(|e| e.into_inner())
}
