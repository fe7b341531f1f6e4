// ABOUTME: Validation for preference values
// ABOUTME: Range checks with typed errors; the UI clamps instead of erroring

use thiserror::Error;

use crate::types::{FONT_SIZE_MAX, FONT_SIZE_MIN};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("Font size {0} is out of range ({FONT_SIZE_MIN}-{FONT_SIZE_MAX})")]
    FontSizeOutOfRange(u8),
}

/// Validate a font size against the supported range
pub fn validate_font_size(size: u8) -> Result<(), PreferenceError> {
    if (FONT_SIZE_MIN..=FONT_SIZE_MAX).contains(&size) {
        Ok(())
    } else {
        Err(PreferenceError::FontSizeOutOfRange(size))
    }
}

/// Clamp a font size into the supported range
pub fn clamp_font_size(size: u8) -> u8 {
    size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_font_size() {
        assert!(validate_font_size(12).is_ok());
        assert!(validate_font_size(18).is_ok());
        assert!(validate_font_size(24).is_ok());
        assert!(validate_font_size(11).is_err());
        assert!(validate_font_size(25).is_err());
    }

    #[test]
    fn test_clamp_font_size() {
        assert_eq!(clamp_font_size(0), FONT_SIZE_MIN);
        assert_eq!(clamp_font_size(12), 12);
        assert_eq!(clamp_font_size(17), 17);
        assert_eq!(clamp_font_size(24), 24);
        assert_eq!(clamp_font_size(200), FONT_SIZE_MAX);
    }
}
