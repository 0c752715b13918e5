use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::DashboardError;

/// One IP change recorded for a domain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryEvent {
    pub ip: String,
    #[serde(deserialize_with = "deserialize_time")]
    pub time: DateTime<Utc>,
}

/// Parse the `data-history` payload of a dashboard row.
///
/// The payload is a JSON array ordered oldest first. One malformed event
/// rejects the whole log.
pub fn parse_history(raw: &str) -> Result<Vec<HistoryEvent>, DashboardError> {
    let events: Vec<HistoryEvent> = serde_json::from_str(raw)?;
    Ok(events)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTime {
    Text(String),
    EpochMillis(i64),
}

fn deserialize_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawTime::deserialize(deserializer)?;
    let parsed = match raw {
        RawTime::Text(text) => parse_time(&text),
        RawTime::EpochMillis(millis) => from_epoch_millis(millis),
    };
    parsed.map_err(serde::de::Error::custom)
}

const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Accepts RFC 3339 and the common ISO-8601 variants (minute precision,
/// compact offsets, a bare date as midnight), or decimal epoch
/// milliseconds. Values without an offset are taken as UTC.
pub fn parse_time(text: &str) -> Result<DateTime<Utc>, DashboardError> {
    let text = text.trim();

    if let Ok(time) = DateTime::parse_from_rfc3339(text) {
        return Ok(time.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(time) = DateTime::parse_from_str(text, format) {
            return Ok(time.with_timezone(&Utc));
        }
    }

    let naive_text = text
        .strip_suffix('Z')
        .or_else(|| text.strip_suffix('z'))
        .unwrap_or(text);
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(naive_text, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(naive_text, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    if let Ok(millis) = text.parse::<i64>() {
        return from_epoch_millis(millis);
    }

    Err(DashboardError::InvalidTime(text.to_string()))
}

fn from_epoch_millis(millis: i64) -> Result<DateTime<Utc>, DashboardError> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| DashboardError::InvalidTime(millis.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_history_keeps_source_order() {
        let raw = r#"[
            {"ip":"1.1.1.1","time":"2024-01-01T00:00:00Z"},
            {"ip":"2.2.2.2","time":"2024-01-02T12:30:00+02:00"}
        ]"#;
        let events = parse_history(raw).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].ip, "1.1.1.1");
        assert_eq!(
            events[1].time,
            Utc.with_ymd_and_hms(2024, 1, 2, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_time_formats() {
        let expected = Utc.with_ymd_and_hms(1970, 1, 1, 0, 16, 40).unwrap();
        assert_eq!(parse_time("1970-01-01T00:16:40Z").unwrap(), expected);
        assert_eq!(parse_time("1970-01-01T00:16:40").unwrap(), expected);
        assert_eq!(parse_time("1970-01-01 00:16:40").unwrap(), expected);
        assert_eq!(parse_time("1000000").unwrap(), expected);
        assert!(parse_time("yesterday").is_err());
    }

    #[test]
    fn test_parse_time_iso_variants() {
        let ten = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        assert_eq!(parse_time("2024-05-01T10:00Z").unwrap(), ten);
        assert_eq!(parse_time("2024-05-01T10:00").unwrap(), ten);
        assert_eq!(parse_time("2024-05-01 10:00").unwrap(), ten);
        assert_eq!(parse_time("2024-05-01T12:00+02:00").unwrap(), ten);
        assert_eq!(parse_time("2024-05-01T12:00+0200").unwrap(), ten);
        assert_eq!(parse_time("2024-05-01T12:00:00+0200").unwrap(), ten);
        assert_eq!(
            parse_time("2024-05-01T10:00:00.250Z").unwrap().timestamp(),
            ten.timestamp()
        );
        assert_eq!(
            parse_time("2024-05-01").unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()
        );
        assert!(parse_time("2024-13-01").is_err());
        assert!(parse_time("2024-05-01T25:00").is_err());
    }

    #[test]
    fn test_parse_history_with_date_only_and_minute_times() {
        let raw = r#"[
            {"ip":"1.1.1.1","time":"2024-05-01T10:00Z"},
            {"ip":"2.2.2.2","time":"2024-05-02"}
        ]"#;
        let events = parse_history(raw).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0].time,
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
        );
        assert_eq!(
            events[1].time,
            Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_history_accepts_numeric_time() {
        let events = parse_history(r#"[{"ip":"::1","time":1000000}]"#).unwrap();
        assert_eq!(
            events[0].time,
            Utc.with_ymd_and_hms(1970, 1, 1, 0, 16, 40).unwrap()
        );
    }

    #[test]
    fn test_parse_history_rejects_malformed() {
        assert!(parse_history("not json").is_err());
        assert!(parse_history(r#"{"ip":"1.1.1.1"}"#).is_err());
        assert!(parse_history(r#"[{"ip":"1.1.1.1","time":"never"}]"#).is_err());
        assert!(parse_history(r#"[{"time":"2024-01-01T00:00:00Z"}]"#).is_err());
    }

    #[test]
    fn test_parse_history_empty_array() {
        assert!(parse_history("[]").unwrap().is_empty());
    }
}
