//! Approximate year extraction for loosely formatted dates
//!
//! Dates in the source data are hand-written (`March 15, 1892`, `circa 1850`,
//! `before 1901`, `unknown`). No calendar parsing is attempted: the year is
//! the first run of four consecutive ASCII digits anywhere in the text.

/// Extract the first four-digit run from `text` as a year
///
/// Digits beyond the fourth in a longer run are ignored, so `12345` yields
/// `1234`.
///
/// # Examples
///
/// ```
/// use lineage_domain::parse_approx_year;
///
/// assert_eq!(parse_approx_year("March 15, 1892"), Some(1892));
/// assert_eq!(parse_approx_year("circa 1850"), Some(1850));
/// assert_eq!(parse_approx_year("unknown"), None);
/// ```
pub fn parse_approx_year(text: &str) -> Option<i32> {
    let bytes = text.as_bytes();
    let mut run_start = 0;
    let mut run_len = 0;

    for (i, b) in bytes.iter().enumerate() {
        if b.is_ascii_digit() {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
            if run_len == 4 {
                return text[run_start..=i].parse().ok();
            }
        } else {
            run_len = 0;
        }
    }

    None
}

/// Sort key for a date string: the approximate year, or `0` when none is found
///
/// Undated events therefore sort ahead of every dated event in ascending
/// order. Timelines rely on this ordering.
pub fn year_sort_key(text: &str) -> i32 {
    parse_approx_year(text).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_formats() {
        assert_eq!(parse_approx_year("1892-03-15"), Some(1892));
        assert_eq!(parse_approx_year("15 Mar 1892"), Some(1892));
        assert_eq!(parse_approx_year("before 1901"), Some(1901));
        assert_eq!(parse_approx_year("1900"), Some(1900));
    }

    #[test]
    fn test_first_run_wins() {
        assert_eq!(parse_approx_year("between 1850 and 1855"), Some(1850));
        assert_eq!(parse_approx_year("12345"), Some(1234));
    }

    #[test]
    fn test_short_runs_are_skipped() {
        assert_eq!(parse_approx_year("15 Mar 92"), None);
        assert_eq!(parse_approx_year("3/15/92 then 1893"), Some(1893));
        assert_eq!(parse_approx_year(""), None);
    }

    #[test]
    fn test_sort_key_defaults_to_zero() {
        assert_eq!(year_sort_key("unknown"), 0);
        assert_eq!(year_sort_key("June 20, 1915"), 1915);
    }

    #[test]
    fn test_non_ascii_text_is_tolerated() {
        assert_eq!(parse_approx_year("née – 1920, Łódź"), Some(1920));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any four-digit year embedded in letters is recovered
        #[test]
        fn test_embedded_year_is_found(year in 1000i32..=9999, prefix in "[a-zA-Z ,]{0,12}", suffix in "[a-zA-Z ,]{0,12}") {
            let text = format!("{}{}{}", prefix, year, suffix);
            prop_assert_eq!(parse_approx_year(&text), Some(year));
        }

        /// Property: text without digits never yields a year
        #[test]
        fn test_digit_free_text_has_no_year(text in "[^0-9]{0,40}") {
            prop_assert_eq!(parse_approx_year(&text), None);
            prop_assert_eq!(year_sort_key(&text), 0);
        }
    }
}
