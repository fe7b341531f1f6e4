// ABOUTME: Type definitions for session preferences
// ABOUTME: Display and editability settings applied live to the UI

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::validation::clamp_font_size;

/// Smallest selectable font size
pub const FONT_SIZE_MIN: u8 = 12;

/// Largest selectable font size
pub const FONT_SIZE_MAX: u8 = 24;

/// Font size a fresh session starts with
pub const DEFAULT_FONT_SIZE: u8 = 14;

/// Session-local preferences.
///
/// Every mutation takes effect immediately and globally; nothing here
/// survives the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    #[serde(rename = "authorName")]
    pub author_name: String,
    #[serde(rename = "questionerEditable")]
    pub questioner_editable: bool,
    #[serde(rename = "productEditable")]
    pub product_editable: bool,
    #[serde(rename = "fontSize")]
    pub font_size: u8,
    #[serde(rename = "darkMode")]
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            author_name: String::new(),
            questioner_editable: false,
            product_editable: false,
            font_size: DEFAULT_FONT_SIZE,
            dark_mode: false,
        }
    }
}

impl Preferences {
    /// Set the font size, clamping into the supported range
    pub fn set_font_size(&mut self, size: u8) {
        self.font_size = clamp_font_size(size);
    }

    /// Nudge the font size by `delta`, saturating at the range bounds
    pub fn adjust_font_size(&mut self, delta: i16) {
        let next = (self.font_size as i16 + delta).clamp(0, u8::MAX as i16) as u8;
        self.set_font_size(next);
    }

    pub fn toggle_questioner_editable(&mut self) {
        self.questioner_editable = !self.questioner_editable;
        debug!(enabled = self.questioner_editable, "questioner editability toggled");
    }

    pub fn toggle_product_editable(&mut self) {
        self.product_editable = !self.product_editable;
        debug!(enabled = self.product_editable, "product editability toggled");
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        debug!(enabled = self.dark_mode, "dark mode toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.font_size, 14);
        assert!(!prefs.dark_mode);
        assert!(!prefs.questioner_editable);
        assert!(!prefs.product_editable);
        assert_eq!(prefs.author_name, "");
    }

    #[test]
    fn test_set_font_size_clamps_to_bounds() {
        let mut prefs = Preferences::default();
        prefs.set_font_size(30);
        assert_eq!(prefs.font_size, FONT_SIZE_MAX);
        prefs.set_font_size(6);
        assert_eq!(prefs.font_size, FONT_SIZE_MIN);
        prefs.set_font_size(18);
        assert_eq!(prefs.font_size, 18);
    }

    #[test]
    fn test_adjust_font_size_saturates() {
        let mut prefs = Preferences::default();
        prefs.adjust_font_size(2);
        assert_eq!(prefs.font_size, 16);
        prefs.adjust_font_size(100);
        assert_eq!(prefs.font_size, FONT_SIZE_MAX);
        prefs.adjust_font_size(-100);
        assert_eq!(prefs.font_size, FONT_SIZE_MIN);
    }

    #[test]
    fn test_toggles_flip_state() {
        let mut prefs = Preferences::default();
        prefs.toggle_dark_mode();
        assert!(prefs.dark_mode);
        prefs.toggle_dark_mode();
        assert!(!prefs.dark_mode);

        prefs.toggle_questioner_editable();
        prefs.toggle_product_editable();
        assert!(prefs.questioner_editable);
        assert!(prefs.product_editable);
    }
}
