use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 1-or-2-digit day, 3-letter month abbreviation, 2-digit year
    static ref SHORT_DATE: Regex = Regex::new(r"^\d{1,2} [A-Za-z]{3} \d{2}$").unwrap();
}

pub struct DateValidator;

impl DateValidator {
    /// Accepts "D Mon YY" or "DD Mon YY" when it names a real calendar date.
    pub fn is_valid(date_str: &str) -> bool {
        if !SHORT_DATE.is_match(date_str) {
            return false;
        }
        NaiveDate::parse_from_str(date_str, "%d %b %y").is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_single_digit_day() {
        assert!(DateValidator::is_valid("5 Mar 24"));
    }

    #[test]
    fn test_accepts_two_digit_day() {
        assert!(DateValidator::is_valid("31 Jan 24"));
    }

    #[test]
    fn test_rejects_impossible_calendar_date() {
        assert!(!DateValidator::is_valid("30 Feb 24"));
        assert!(!DateValidator::is_valid("32 Jan 24"));
    }

    #[test]
    fn test_rejects_unknown_month() {
        assert!(!DateValidator::is_valid("12 Xyz 24"));
    }

    #[test]
    fn test_rejects_other_layouts() {
        assert!(!DateValidator::is_valid("2024-03-05"));
        assert!(!DateValidator::is_valid("5 March 24"));
        assert!(!DateValidator::is_valid("5 Mar 2024"));
        assert!(!DateValidator::is_valid(""));
        assert!(!DateValidator::is_valid(" 5 Mar 24"));
    }
}
