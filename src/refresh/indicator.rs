use std::fmt;

/// What the auto-refresh indicator next to the refresh button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshIndicator {
    /// Auto-refresh is off; the indicator is not displayed.
    Hidden,
    /// Auto-refresh is configured but the page is not visible.
    Paused,
    /// Seconds left until the countdown wraps.
    Countdown(u32),
}

impl RefreshIndicator {
    pub fn is_visible(&self) -> bool {
        !matches!(self, RefreshIndicator::Hidden)
    }

    pub fn is_running(&self) -> bool {
        matches!(self, RefreshIndicator::Countdown(_))
    }
}

impl fmt::Display for RefreshIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshIndicator::Hidden => Ok(()),
            RefreshIndicator::Paused => f.write_str("Paused"),
            RefreshIndicator::Countdown(seconds) => f.write_str(&format_countdown(*seconds)),
        }
    }
}

/// `M:SS` once a minute or more remains, `Ns` below that.
pub fn format_countdown(seconds: u32) -> String {
    if seconds >= 60 {
        format!("{}:{:02}", seconds / 60, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_countdown_boundaries() {
        assert_eq!(format_countdown(0), "0s");
        assert_eq!(format_countdown(59), "59s");
        assert_eq!(format_countdown(60), "1:00");
        assert_eq!(format_countdown(65), "1:05");
        assert_eq!(format_countdown(307), "5:07");
        assert_eq!(format_countdown(600), "10:00");
    }

    #[test]
    fn test_indicator_display() {
        assert_eq!(RefreshIndicator::Hidden.to_string(), "");
        assert_eq!(RefreshIndicator::Paused.to_string(), "Paused");
        assert_eq!(RefreshIndicator::Countdown(30).to_string(), "30s");
        assert!(!RefreshIndicator::Hidden.is_visible());
        assert!(RefreshIndicator::Paused.is_visible());
        assert!(!RefreshIndicator::Paused.is_running());
        assert!(RefreshIndicator::Countdown(1).is_running());
    }
}
