use chrono::{DateTime, NaiveDate, Utc};

/// Parses a caller-supplied reservation date, falling back to today.
///
/// Clients send dates in whatever shape their runtime produced: plain
/// calendar dates from the web form, full RFC 3339 timestamps from the mobile
/// client's offline store. Both are accepted; absent or unparseable values
/// fall back to the current date instead of failing the request.
///
/// # Arguments
/// - `value` - The raw date string, if the caller sent one
///
/// # Returns
/// - `NaiveDate` - The parsed calendar date, or today as the fallback
pub fn parse_reservation_date(value: Option<&str>) -> NaiveDate {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Utc::now().date_naive();
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return datetime.date_naive();
    }

    Utc::now().date_naive()
}

/// Trims an optional string, dropping it entirely when nothing remains.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
