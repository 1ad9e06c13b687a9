//! Numeric constants for color conversion and quiz scoring

/// Quiz session defaults
pub mod quiz {
    /// Number of colors generated per session
    pub const DEFAULT_QUESTION_COUNT: usize = 10;

    /// Digits in a hex answer string (no leading `#`)
    pub const HEX_DIGITS: usize = 6;
}

/// Channel ranges used when normalizing errors
pub mod channel {
    /// Maximum value of an 8-bit RGB channel
    pub const RGB_MAX: f64 = 255.0;

    /// Full hue circle in degrees
    pub const HUE_CIRCLE_DEGREES: f64 = 360.0;

    /// Largest possible circular distance between two hues
    pub const HUE_MAX_DISTANCE: f64 = 180.0;

    /// Saturation and lightness span in percent
    pub const PERCENT_MAX: f64 = 100.0;
}

/// Score report output contract
pub mod report {
    /// Scale factor expressing normalized errors as percentages
    pub const PERCENT_SCALE: f64 = 100.0;

    /// Decimal places for per-channel averages
    pub const AVG_DECIMALS: u32 = 2;

    /// Decimal places for the aggregate RMSE
    pub const RMSE_DECIMALS: u32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_ranges() {
        // Hue distance tops out at half the circle by definition
        assert_eq!(channel::HUE_MAX_DISTANCE * 2.0, channel::HUE_CIRCLE_DEGREES);
        assert!(channel::RGB_MAX > 0.0);
        assert!(channel::PERCENT_MAX > 0.0);
    }

    #[test]
    fn test_quiz_defaults() {
        assert!(quiz::DEFAULT_QUESTION_COUNT > 0);
        assert_eq!(quiz::HEX_DIGITS, 6);
    }

    #[test]
    fn test_report_precision() {
        // RMSE carries more precision than the channel averages
        assert!(report::RMSE_DECIMALS > report::AVG_DECIMALS);
    }
}
