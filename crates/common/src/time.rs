//! Timestamp formatting shared by every response envelope.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current time as ISO-8601 with millisecond precision and a `Z` suffix,
/// e.g. `2024-03-01T09:30:00.123Z`.
pub fn iso_timestamp() -> String {
    format_iso(Utc::now())
}

/// Milliseconds since the Unix epoch.
pub fn epoch_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn format_iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_with_millis_and_zulu_suffix() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(format_iso(at), "2024-03-01T09:30:00.000Z");
    }

    #[test]
    fn iso_timestamp_parses_back() {
        let ts = iso_timestamp();
        assert!(ts.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn epoch_millis_is_after_2020() {
        assert!(epoch_millis() > 1_577_836_800_000);
    }
}
