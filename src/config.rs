use leptos::logging::warn;

use crate::error::DashboardError;

/// localStorage key holding the auto-refresh interval in seconds.
pub const REFRESH_STORAGE_KEY: &str = "ddns-auto-refresh";

/// Rows shown per page in the history modal.
pub const HISTORY_PAGE_SIZE: usize = 20;

/// Body attribute the host page can set to override the interval menu,
/// e.g. `data-refresh-intervals="0,30,60,300"`.
pub const INTERVALS_ATTRIBUTE: &str = "data-refresh-intervals";

const DEFAULT_INTERVALS: [u32; 5] = [0, 30, 60, 300, 600];

/// Front-end settings, resolved once when the app mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub storage_key: String,
    pub interval_choices: Vec<u32>,
    pub page_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            storage_key: REFRESH_STORAGE_KEY.to_string(),
            interval_choices: DEFAULT_INTERVALS.to_vec(),
            page_size: HISTORY_PAGE_SIZE,
        }
    }
}

impl DashboardConfig {
    /// Build the config, applying the host page's interval override if one
    /// is present and valid. A bad override is logged and ignored.
    pub fn with_interval_override(override_value: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = override_value {
            match parse_interval_choices(raw) {
                Ok(choices) => config.interval_choices = choices,
                Err(e) => warn!("Ignoring {}: {}", INTERVALS_ATTRIBUTE, e),
            }
        }
        config
    }
}

/// Parse a comma-separated list of interval seconds.
///
/// The result is sorted, deduplicated, and always contains 0 so the user
/// can switch auto-refresh off.
pub fn parse_interval_choices(raw: &str) -> Result<Vec<u32>, DashboardError> {
    let mut choices = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let seconds = part
            .parse::<u32>()
            .map_err(|_| DashboardError::Config(format!("invalid interval '{}'", part)))?;
        choices.push(seconds);
    }

    if choices.is_empty() {
        return Err(DashboardError::Config("no intervals given".to_string()));
    }

    choices.push(0);
    choices.sort_unstable();
    choices.dedup();
    Ok(choices)
}

/// Menu label for an interval choice.
pub fn interval_label(seconds: u32) -> String {
    match seconds {
        0 => "Off".to_string(),
        s if s % 3600 == 0 => format!("{}h", s / 3600),
        s if s % 60 == 0 => format!("{}m", s / 60),
        s => format!("{}s", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.storage_key, "ddns-auto-refresh");
        assert_eq!(config.interval_choices, vec![0, 30, 60, 300, 600]);
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_parse_interval_choices_sorts_and_adds_off() {
        let choices = parse_interval_choices(" 120, 15,120 ").unwrap();
        assert_eq!(choices, vec![0, 15, 120]);
    }

    #[test]
    fn test_parse_interval_choices_rejects_garbage() {
        assert!(parse_interval_choices("30,abc").is_err());
        assert!(parse_interval_choices("-5").is_err());
        assert!(parse_interval_choices(" , ").is_err());
    }

    #[test]
    fn test_override_falls_back_on_error() {
        let config = DashboardConfig::with_interval_override(Some("nope"));
        assert_eq!(config.interval_choices, DashboardConfig::default().interval_choices);

        let config = DashboardConfig::with_interval_override(Some("0,45"));
        assert_eq!(config.interval_choices, vec![0, 45]);
    }

    #[test]
    fn test_interval_label() {
        assert_eq!(interval_label(0), "Off");
        assert_eq!(interval_label(30), "30s");
        assert_eq!(interval_label(60), "1m");
        assert_eq!(interval_label(300), "5m");
        assert_eq!(interval_label(90), "90s");
        assert_eq!(interval_label(3600), "1h");
    }
}
