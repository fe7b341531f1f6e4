use cotdesk_settings::{Preferences, FONT_SIZE_MIN};
use ratatui::style::Color;

/// Palette applied globally; switched live by the dark-mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Theme {
    pub fn for_preferences(preferences: &Preferences) -> Self {
        if preferences.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Color::Reset,
            text: Color::Black,
            dim: Color::DarkGray,
            accent: Color::Blue,
            border: Color::Gray,
            highlight_bg: Color::Blue,
            highlight_fg: Color::White,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    pub fn dark() -> Self {
        Theme {
            background: Color::Black,
            text: Color::White,
            dim: Color::Gray,
            accent: Color::Cyan,
            border: Color::DarkGray,
            highlight_bg: Color::Cyan,
            highlight_fg: Color::Black,
            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,
        }
    }

    /// Extra vertical padding per table row; the terminal-cell counterpart
    /// of the original root font size (12-17px -> 0, 18-23px -> 1, 24px -> 2).
    pub fn row_padding(preferences: &Preferences) -> u16 {
        ((preferences.font_size - FONT_SIZE_MIN) / 6) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_mode_switches_palette() {
        let mut prefs = Preferences::default();
        assert_eq!(Theme::for_preferences(&prefs), Theme::light());
        prefs.toggle_dark_mode();
        assert_eq!(Theme::for_preferences(&prefs), Theme::dark());
    }

    #[test]
    fn test_row_padding_scales_with_font_size() {
        let mut prefs = Preferences::default();
        prefs.set_font_size(12);
        assert_eq!(Theme::row_padding(&prefs), 0);
        prefs.set_font_size(17);
        assert_eq!(Theme::row_padding(&prefs), 0);
        prefs.set_font_size(18);
        assert_eq!(Theme::row_padding(&prefs), 1);
        prefs.set_font_size(24);
        assert_eq!(Theme::row_padding(&prefs), 2);
    }
}
