//! Time related utils.

use chrono::Utc;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Take the current time in UTC.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a date time into the short date: `20220313`.
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format a date time into ISO8601 basic format: `20220313T072004Z`.
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Format a date time into an HTTP date: `Sun, 13 Mar 2022 07:20:04 GMT`.
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parse an ISO8601 basic format string into a date time.
///
/// Only used to pin the signing time in tests.
#[cfg(test)]
pub fn parse_iso8601(s: &str) -> chrono::ParseResult<DateTime> {
    Ok(chrono::NaiveDateTime::parse_from_str(s, "%Y%m%dT%H%M%SZ")?.and_utc())
}

/// The two timestamp renderings of one instant that a signing call needs.
///
/// Both fields must always come from the same instant: regenerating them
/// independently can straddle a second (or day) boundary and produce a
/// signature the service will reject. Build one `Dates` per signing call
/// and thread it through.
#[derive(Debug, Clone)]
pub struct Dates {
    /// Long timestamp: `20130524T000000Z`.
    pub long: String,
    /// Short timestamp: `20130524`.
    pub short: String,
}

impl Dates {
    /// Render both timestamps from a single instant.
    pub fn from(t: DateTime) -> Self {
        Dates {
            long: format_iso8601(t),
            short: format_date(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates_come_from_one_instant() {
        let t = parse_iso8601("20130524T000000Z").expect("time must be valid");
        let dates = Dates::from(t);
        assert_eq!(dates.long, "20130524T000000Z");
        assert_eq!(dates.short, "20130524");
    }

    #[test]
    fn test_format_http_date() {
        let t = parse_iso8601("20130524T000000Z").expect("time must be valid");
        assert_eq!(format_http_date(t), "Fri, 24 May 2013 00:00:00 GMT");
    }
}
