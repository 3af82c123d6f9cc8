//! Date normalisation and display.
//!
//! Record dates are kept as the raw strings the user typed. They are parsed
//! only to compare or to format them; a string that does not parse is shown
//! as-is rather than treated as a fault.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a record date into a comparable instant (UTC, midnight for
/// date-only values).
///
/// Accepts `YYYY-MM-DD`, RFC 3339 date-times, offset-less
/// `YYYY-MM-DDTHH:MM[:SS]`, and `YYYY-MM` (the first of the month).
pub fn parse(raw: &str) -> Option<NaiveDateTime> {
  let raw = raw.trim();

  if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
    return date.and_hms_opt(0, 0, 0);
  }
  if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
    return Some(instant.naive_utc());
  }
  for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
    if let Ok(instant) = NaiveDateTime::parse_from_str(raw, format) {
      return Some(instant);
    }
  }
  NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
    .ok()
    .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn format_with(raw: &str, pattern: &str) -> String {
  match parse(raw) {
    Some(instant) => instant.format(pattern).to_string(),
    None => {
      tracing::debug!(raw, "unparseable date; showing raw value");
      raw.to_string()
    }
  }
}

/// `15 Apr 2019`, or the raw string if it does not parse.
pub fn format_day(raw: &str) -> String { format_with(raw, "%d %b %Y") }

/// `Apr 2019`, or the raw string if it does not parse.
pub fn format_month(raw: &str) -> String { format_with(raw, "%b %Y") }

/// `Jun 2020 - Feb 2021`, or `Apr 2021 - Present` for an open range.
pub fn format_range(start: &str, end: Option<&str>) -> String {
  let start = format_month(start);
  match end {
    Some(end) => format!("{start} - {}", format_month(end)),
    None => format!("{start} - Present"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_plain_dates() {
    let d = parse("2019-04-15").unwrap();
    assert_eq!(d.format("%Y-%m-%d %H:%M").to_string(), "2019-04-15 00:00");
  }

  #[test]
  fn parses_rfc3339_in_utc() {
    let d = parse("2021-03-01T08:30:00+02:00").unwrap();
    assert_eq!(d.format("%Y-%m-%d %H:%M").to_string(), "2021-03-01 06:30");
  }

  #[test]
  fn parses_offsetless_datetimes_and_months() {
    assert!(parse("2021-03-01T08:30").is_some());
    assert!(parse("2021-03-01T08:30:15").is_some());
    assert_eq!(parse("2020-06"), parse("2020-06-01"));
  }

  #[test]
  fn chronological_not_lexical() {
    // Lexically smaller, but 04:00 UTC on the 16th.
    assert!(parse("2019-04-15T23:00:00-05:00") > parse("2019-04-16"));
    assert!(parse("not a date").is_none());
    assert!(parse("").is_none());
  }

  #[test]
  fn formatting_falls_back_to_raw() {
    assert_eq!(format_day("2019-04-15"), "15 Apr 2019");
    assert_eq!(format_day("sometime in 2019"), "sometime in 2019");
    assert_eq!(format_month("2020-06-01"), "Jun 2020");
  }

  #[test]
  fn ranges() {
    assert_eq!(
      format_range("2020-06-01", Some("2021-02-15")),
      "Jun 2020 - Feb 2021"
    );
    assert_eq!(format_range("2021-04-10", None), "Apr 2021 - Present");
  }
}
