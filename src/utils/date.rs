use chrono::{DateTime, Local, NaiveDate};

pub fn now_rfc3339() -> String {
    Local::now().to_rfc3339()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// `YYYY-MM` of a `YYYY-MM-DD` date or of an RFC 3339 date-time.
pub fn month_of(s: &str) -> Option<String> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.format("%Y-%m").to_string());
    }

    // Date prefix, e.g. "2025-09-15" or "2025-09-15 10:00"
    let prefix = s.get(..10)?;
    parse_date(prefix).map(|d| d.format("%Y-%m").to_string())
}
