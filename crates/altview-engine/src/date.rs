use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// ISO 8601 layouts RFC 3339 rejects: minute precision, `+HHMM` offsets
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Date-time layouts without an offset, read as wall-clock time in the target zone
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a feed timestamp into the given time zone
///
/// Accepts RFC 3339 and the looser ISO 8601 offset forms, offset-less
/// date-times (local to `tz`), and bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_feed_date<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.with_timezone(tz));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).with_timezone(tz))
}

/// Render a release timestamp as "Today", "Yesterday" or "Mon D, YYYY"
///
/// "Today" needs the timestamp to be at most 24h old *and* on the same
/// day-of-month as `now`; "Yesterday" only needs it to be at most 48h old.
/// Both thresholds are fixed millisecond spans, not calendar days.
/// Unparseable input renders as its date portion (text before any `T`).
pub fn format_version_date<Tz: TimeZone>(raw: &str, now: &DateTime<Tz>) -> String {
    let Some(released) = parse_feed_date(raw, &now.timezone()) else {
        tracing::debug!(raw, "unparseable release date, showing raw date portion");
        return raw.split('T').next().unwrap_or(raw).to_string();
    };

    let delta_ms = now.timestamp_millis() - released.timestamp_millis();

    if delta_ms <= MS_PER_DAY && now.day() == released.day() {
        "Today".to_string()
    } else if delta_ms <= 2 * MS_PER_DAY {
        "Yesterday".to_string()
    } else {
        calendar_date(&released)
    }
}

/// "Mon D, YYYY" from the date's own calendar fields
pub fn calendar_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format!(
        "{} {}, {}",
        MONTHS[date.month0() as usize],
        date.day(),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_now_is_today() {
        let now = Utc::now();
        assert_eq!(format_version_date(&now.to_rfc3339(), &now), "Today");
    }

    #[test]
    fn test_unparseable_keeps_date_portion() {
        let now = utc(2024, 3, 10, 12, 0);
        assert_eq!(format_version_date("bad-date", &now), "bad-date");
        assert_eq!(format_version_date("2024-13-45T99:00", &now), "2024-13-45");
        assert_eq!(format_version_date("", &now), "");
    }

    #[test]
    fn test_yesterday_window() {
        let now = utc(2024, 3, 10, 12, 0);
        let ts = (now - Duration::hours(30)).to_rfc3339();
        assert_eq!(format_version_date(&ts, &now), "Yesterday");

        let edge = (now - Duration::hours(48)).to_rfc3339();
        assert_eq!(format_version_date(&edge, &now), "Yesterday");

        let past = (now - Duration::hours(48) - Duration::milliseconds(1)).to_rfc3339();
        assert_eq!(format_version_date(&past, &now), "Mar 8, 2024");
    }

    #[test]
    fn test_within_a_day_across_midnight_is_yesterday() {
        let now = utc(2024, 3, 10, 4, 0);
        let ts = utc(2024, 3, 9, 8, 0).to_rfc3339();
        assert_eq!(format_version_date(&ts, &now), "Yesterday");
    }

    #[test]
    fn test_calendar_date_fields() {
        let now = utc(2024, 3, 10, 12, 0);
        assert_eq!(format_version_date("2023-11-05T10:00:00Z", &now), "Nov 5, 2023");
        assert_eq!(format_version_date("2023-01-31", &now), "Jan 31, 2023");
    }

    #[test]
    fn test_calendar_fields_follow_now_zone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = utc(2024, 3, 10, 12, 0).with_timezone(&tokyo);
        // 20:00 UTC on Dec 31 is already Jan 1 in Tokyo
        assert_eq!(
            format_version_date("2023-12-31T20:00:00Z", &now),
            "Jan 1, 2024"
        );
    }

    #[test]
    fn test_naive_datetime_is_local_to_zone() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let parsed = parse_feed_date("2024-02-01T10:30:00", &offset).unwrap();
        assert_eq!(parsed.timestamp(), utc(2024, 2, 1, 15, 30).timestamp());
    }

    #[test]
    fn test_minute_precision_with_zulu() {
        let now = utc(2024, 3, 10, 12, 0);
        assert_eq!(format_version_date("2024-03-10T11:00Z", &now), "Today");
        assert_eq!(format_version_date("2024-01-02T10:00Z", &now), "Jan 2, 2024");
    }

    #[test]
    fn test_loose_offsets() {
        let now = utc(2024, 3, 10, 12, 0);
        assert_eq!(
            format_version_date("2024-01-02T10:00:00+0000", &now),
            "Jan 2, 2024"
        );
        assert_eq!(format_version_date("2024-01-02T10:00+02:00", &now), "Jan 2, 2024");

        let parsed = parse_feed_date("2024-01-02T10:00+02:00", &Utc).unwrap();
        assert_eq!(parsed, utc(2024, 1, 2, 8, 0));
        let parsed = parse_feed_date("2024-03-10T06:30:00.250-0530", &Utc).unwrap();
        assert_eq!(parsed.timestamp(), utc(2024, 3, 10, 12, 0).timestamp());
    }

    #[test]
    fn test_future_timestamp_same_day_is_today() {
        let now = utc(2024, 3, 10, 8, 0);
        let ts = utc(2024, 3, 10, 20, 0).to_rfc3339();
        assert_eq!(format_version_date(&ts, &now), "Today");
    }
}
