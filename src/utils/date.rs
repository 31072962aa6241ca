use chrono::NaiveDate;

/// Parse a date as stored in a dataset or typed on the command line.
///
/// Tries the configured format first, then ISO `YYYY-MM-DD`.
pub fn parse_date(s: &str, format: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, format)
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

/// Display form of a stored date: re-formatted when it parses, verbatim
/// otherwise (an empty value stays empty).
pub fn display_date(s: &str, format: &str) -> String {
    match parse_date(s, format) {
        Some(d) => d.format(format).to_string(),
        None => s.to_string(),
    }
}
