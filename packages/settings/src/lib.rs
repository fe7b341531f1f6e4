// ABOUTME: Session-local display and editability preferences
// ABOUTME: Applied immediately to the presentation layer; never persisted

pub mod types;
pub mod validation;

pub use types::{Preferences, DEFAULT_FONT_SIZE, FONT_SIZE_MAX, FONT_SIZE_MIN};
pub use validation::{clamp_font_size, validate_font_size, PreferenceError};
