use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Time zone used to render `createdTime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// The host's local zone.
    #[default]
    Local,
    Named(Tz),
}

impl FromStr for DisplayZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("local") {
            return Ok(DisplayZone::Local);
        }
        name.parse::<Tz>()
            .map(DisplayZone::Named)
            .map_err(|e| format!("unknown time zone '{}': {}", name, e))
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayZone::Local => f.write_str("local"),
            DisplayZone::Named(tz) => f.write_str(tz.name()),
        }
    }
}

/// Renders epoch milliseconds as `YYYY-MM-DD HH:MM:SS` in `zone`.
///
/// Absent and zero timestamps render as an empty string, as do values chrono
/// cannot represent.
pub fn format_timestamp(epoch_millis: Option<i64>, zone: DisplayZone) -> String {
    match epoch_millis.filter(|ms| *ms != 0) {
        Some(ms) => render_millis(ms, zone),
        None => String::new(),
    }
}

/// Same as [`format_timestamp`] for a raw JSON field value.
///
/// Emptiness is decided on the raw value, so a non-zero fraction of a
/// millisecond still renders as a date.
pub fn format_raw_timestamp(raw: Option<&Value>, zone: DisplayZone) -> String {
    match raw.filter(|v| !is_falsy(v)).and_then(epoch_millis) {
        Some(ms) => render_millis(ms, zone),
        None => String::new(),
    }
}

fn render_millis(ms: i64, zone: DisplayZone) -> String {
    let Some(utc) = DateTime::<Utc>::from_timestamp_millis(ms) else {
        return String::new();
    };

    match zone {
        DisplayZone::Local => utc.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
        DisplayZone::Named(tz) => utc.with_timezone(&tz).format(TIMESTAMP_FORMAT).to_string(),
    }
}

/// `null`, `false`, numeric zero and the empty string.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Reads a millisecond timestamp out of a JSON value.
///
/// Integers are taken as is, floats are floored to whole milliseconds, and
/// integer strings are parsed. Anything else yields `None`.
pub fn epoch_millis(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().and_then(|u| i64::try_from(u).ok()))
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                    .map(|f| f.floor() as i64)
            }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const UTC: DisplayZone = DisplayZone::Named(chrono_tz::UTC);
    const SHANGHAI: DisplayZone = DisplayZone::Named(chrono_tz::Asia::Shanghai);

    #[test]
    fn test_zero_and_absent_are_empty() {
        assert_eq!(format_timestamp(None, UTC), "");
        assert_eq!(format_timestamp(Some(0), UTC), "");
        assert_eq!(format_timestamp(Some(0), DisplayZone::Local), "");
    }

    #[test]
    fn test_reference_timestamp_in_fixed_zones() {
        assert_eq!(format_timestamp(Some(1_700_000_000_000), UTC), "2023-11-14 22:13:20");
        assert_eq!(
            format_timestamp(Some(1_700_000_000_000), SHANGHAI),
            "2023-11-15 06:13:20"
        );
    }

    #[test]
    fn test_zero_padding_and_truncated_millis() {
        assert_eq!(format_timestamp(Some(3_723_999), UTC), "1970-01-01 01:02:03");
    }

    #[test]
    fn test_local_zone_uses_the_pattern() {
        let text = format_timestamp(Some(1_700_000_000_000), DisplayZone::Local);
        assert_eq!(text.len(), 19);
        assert_eq!(&text[4..5], "-");
        assert_eq!(&text[10..11], " ");
        assert_eq!(&text[13..14], ":");
    }

    #[test]
    fn test_out_of_range_is_empty() {
        assert_eq!(format_timestamp(Some(i64::MAX), UTC), "");
    }

    #[test]
    fn test_raw_values() {
        assert_eq!(
            format_raw_timestamp(Some(&json!(1_700_000_000_000_i64)), UTC),
            "2023-11-14 22:13:20"
        );
        assert_eq!(
            format_raw_timestamp(Some(&json!(1_700_000_000_000.9)), UTC),
            "2023-11-14 22:13:20"
        );
        assert_eq!(
            format_raw_timestamp(Some(&json!("1700000000000")), UTC),
            "2023-11-14 22:13:20"
        );
        assert_eq!(format_raw_timestamp(Some(&json!("")), UTC), "");
        assert_eq!(format_raw_timestamp(Some(&json!(false)), UTC), "");
        assert_eq!(format_raw_timestamp(Some(&json!(null)), UTC), "");
        assert_eq!(format_raw_timestamp(Some(&json!(0.0)), UTC), "");
        assert_eq!(format_raw_timestamp(None, UTC), "");
    }

    #[test]
    fn test_sub_millisecond_values_are_not_empty() {
        assert_eq!(format_raw_timestamp(Some(&json!(0.5)), UTC), "1970-01-01 00:00:00");
        assert_eq!(format_raw_timestamp(Some(&json!(-0.5)), UTC), "1969-12-31 23:59:59");
        assert_eq!(format_raw_timestamp(Some(&json!(-1000)), UTC), "1969-12-31 23:59:59");
    }

    #[test]
    fn test_zone_parsing() {
        assert_eq!("local".parse::<DisplayZone>().unwrap(), DisplayZone::Local);
        assert_eq!("".parse::<DisplayZone>().unwrap(), DisplayZone::Local);
        assert_eq!("Asia/Shanghai".parse::<DisplayZone>().unwrap(), SHANGHAI);
        assert!("Mars/Olympus".parse::<DisplayZone>().is_err());
        assert_eq!(SHANGHAI.to_string(), "Asia/Shanghai");
    }
}
