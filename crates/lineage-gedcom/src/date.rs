//! GEDCOM date normalization: `15 MAR 1892` → `March 15, 1892`

use chrono::{Datelike, NaiveDate};

/// Qualifier prefixes and their rendered form
const QUALIFIERS: [(&str, &str); 6] = [
    ("ABT ", "circa "),
    ("ABOUT ", "circa "),
    ("CIRCA ", "circa "),
    ("BEF ", "before "),
    ("AFT ", "after "),
    ("EST ", "circa "),
];

/// Full-day formats with a four-digit year
const DAY_FORMATS: [&str; 2] = ["%d %B %Y", "%B %d, %Y"];

/// Normalize a GEDCOM date
///
/// Recognized dates render as `March 15, 1892`, `March 1892` or `1892`,
/// keeping any `circa`/`before`/`after` qualifier. Anything else is returned
/// as written (minus a recognized qualifier keyword, which is still
/// translated). Blank input yields `None`.
pub fn format_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (prefix, rest) = split_qualifier(trimmed);
    let body = rest.trim();

    let formatted = parse_day(body)
        .map(|date| format!("{} {}, {}", date.format("%B"), date.day(), date.year()))
        .or_else(|| year_only(body).map(|year| year.to_string()))
        .or_else(|| parse_month(body).map(|date| format!("{} {}", date.format("%B"), date.year())))
        .unwrap_or_else(|| body.to_string());

    Some(format!("{}{}", prefix, formatted))
}

fn split_qualifier(text: &str) -> (&'static str, &str) {
    let upper = text.to_ascii_uppercase();
    QUALIFIERS
        .iter()
        .find(|(keyword, _)| upper.starts_with(keyword))
        .map_or(("", text), |(keyword, rendered)| (*rendered, &text[keyword.len()..]))
}

fn parse_day(body: &str) -> Option<NaiveDate> {
    match year_token(body)?.len() {
        4 => DAY_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(body, format).ok()),
        2 => NaiveDate::parse_from_str(body, "%d %B %y").ok(),
        _ => None,
    }
}

fn parse_month(body: &str) -> Option<NaiveDate> {
    if year_token(body)?.len() != 4 {
        return None;
    }
    NaiveDate::parse_from_str(&format!("1 {}", body), "%d %B %Y").ok()
}

/// A bare four-digit year
fn year_only(body: &str) -> Option<u32> {
    if year_token(body)? != body || body.len() != 4 {
        return None;
    }
    body.parse().ok().filter(|year| *year > 0)
}

/// Trailing all-digit token, where the year sits in every recognized format
fn year_token(body: &str) -> Option<&str> {
    body.rsplit([' ', ','])
        .next()
        .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
}
