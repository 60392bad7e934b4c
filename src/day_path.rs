//! Date to journal path resolution
//!
//! Every journal note lives at
//! `Journal/{YYYY}/Q{Q}/Week{WW}-wc-{MonDD}/{MM}.{DD}.{XX}.md`:
//! calendar year, calendar quarter, ISO week number, the Monday of that ISO
//! week, and the day identifier of the note's own date.

use chrono::{Datelike, Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants as C;

static DAY_IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.[A-Z]{2}$").expect("valid day identifier regex"));

static JOURNAL_PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Journal/(?P<year>\d{4})/Q[1-4]/Week\d{2}-wc-[A-Z][a-z]{2}\d{2}/(?P<month>\d{2})\.(?P<day>\d{2})\.[A-Z]{2}\.md$",
    )
    .expect("valid journal path regex")
});

/// Day identifier for a date: `MM.DD.XX`, where `XX` is the two-letter
/// uppercase weekday abbreviation (`08.25.MO`).
pub fn day_identifier(date: NaiveDate) -> String {
    let weekday: String = date
        .format(C::WEEKDAY_FORMAT)
        .to_string()
        .chars()
        .take(C::WEEKDAY_ABBREVIATION_LENGTH)
        .collect();
    format!("{}.{}", date.format(C::DAY_ID_DATE_FORMAT), weekday.to_uppercase())
}

/// Monday of the ISO week containing `date`, clamped to the earliest
/// representable date
pub fn week_monday(date: NaiveDate) -> NaiveDate {
    date.checked_sub_signed(Duration::days(i64::from(date.weekday().num_days_from_monday())))
        .unwrap_or(NaiveDate::MIN)
}

/// Calendar quarter (1-4)
pub fn quarter(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}

/// Full journal path for a date.
///
/// The year and quarter come from the calendar date while the week number is
/// the ISO week, so the last days of December can land in `Week01`.
pub fn journal_path(date: NaiveDate) -> String {
    let monday = week_monday(date);
    format!(
        "{}/{}/Q{}/Week{:02}-wc-{}/{}{}",
        C::JOURNAL_ROOT,
        date.format("%Y"),
        quarter(date),
        date.iso_week().week(),
        monday.format(C::WEEK_MONDAY_FORMAT),
        day_identifier(date),
        C::MARKDOWN_EXTENSION
    )
}

/// Check whether a string is a well-formed day identifier
pub fn is_day_identifier(s: &str) -> bool {
    DAY_IDENTIFIER_RE.is_match(s)
}

/// Recover the date named by a journal path.
///
/// Only paths that `journal_path` would produce for that date are accepted;
/// a file filed under the wrong week or quarter folder yields `None`.
pub fn parse_journal_path(path: &str) -> Option<NaiveDate> {
    let caps = JOURNAL_PATH_RE.captures(path)?;
    let year: i32 = caps["year"].parse().ok()?;
    let month: u32 = caps["month"].parse().ok()?;
    let day: u32 = caps["day"].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    if journal_path(date) == path {
        Some(date)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_identifier_monday() {
        assert_eq!(day_identifier(ymd(2025, 8, 25)), "08.25.MO");
    }

    #[test]
    fn test_day_identifier_all_weekdays() {
        let ids: Vec<String> = (25..=31).map(|d| day_identifier(ymd(2025, 8, d))).collect();
        assert_eq!(
            ids,
            vec!["08.25.MO", "08.26.TU", "08.27.WE", "08.28.TH", "08.29.FR", "08.30.SA", "08.31.SU"]
        );
    }

    #[test]
    fn test_day_identifier_shape() {
        let mut date = ymd(2024, 1, 1);
        while date < ymd(2025, 1, 1) {
            assert!(is_day_identifier(&day_identifier(date)), "{}", date);
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_journal_path_monday() {
        assert_eq!(
            journal_path(ymd(2025, 8, 25)),
            "Journal/2025/Q3/Week35-wc-Aug25/08.25.MO.md"
        );
    }

    #[test]
    fn test_journal_path_same_week_folder() {
        assert_eq!(
            journal_path(ymd(2025, 8, 29)),
            "Journal/2025/Q3/Week35-wc-Aug25/08.29.FR.md"
        );
    }

    #[test]
    fn test_journal_path_sunday_belongs_to_previous_monday() {
        assert_eq!(
            journal_path(ymd(2025, 8, 31)),
            "Journal/2025/Q3/Week35-wc-Aug25/08.31.SU.md"
        );
    }

    #[test]
    fn test_journal_path_week_spans_months() {
        // Monday falls in the previous month and quarter
        assert_eq!(
            journal_path(ymd(2025, 10, 2)),
            "Journal/2025/Q4/Week40-wc-Sep29/10.02.TH.md"
        );
    }

    #[test]
    fn test_journal_path_iso_week_of_next_year() {
        assert_eq!(
            journal_path(ymd(2025, 12, 29)),
            "Journal/2025/Q4/Week01-wc-Dec29/12.29.MO.md"
        );
    }

    #[test]
    fn test_journal_path_new_year_in_previous_iso_year() {
        assert_eq!(
            journal_path(ymd(2021, 1, 1)),
            "Journal/2021/Q1/Week53-wc-Dec28/01.01.FR.md"
        );
    }

    #[test]
    fn test_journal_path_ends_with_day_identifier() {
        let date = ymd(2025, 3, 4);
        let path = journal_path(date);
        let expected_tail = format!("/{}.md", day_identifier(date));
        assert!(path.ends_with(&expected_tail));
    }

    #[test]
    fn test_journal_path_does_not_disturb_date() {
        let date = ymd(2025, 8, 28);
        let before = day_identifier(date);
        let first = journal_path(date);
        assert_eq!(day_identifier(date), before);
        assert_eq!(journal_path(date), first);
    }

    #[test]
    fn test_week_monday() {
        assert_eq!(week_monday(ymd(2025, 8, 25)), ymd(2025, 8, 25));
        assert_eq!(week_monday(ymd(2025, 8, 31)), ymd(2025, 8, 25));
        assert_eq!(week_monday(ymd(2025, 1, 1)), ymd(2024, 12, 30));
        assert_eq!(week_monday(NaiveDate::MIN), NaiveDate::MIN);
    }

    #[test]
    fn test_quarter() {
        assert_eq!(quarter(ymd(2025, 1, 31)), 1);
        assert_eq!(quarter(ymd(2025, 3, 31)), 1);
        assert_eq!(quarter(ymd(2025, 4, 1)), 2);
        assert_eq!(quarter(ymd(2025, 9, 30)), 3);
        assert_eq!(quarter(ymd(2025, 12, 31)), 4);
    }

    #[test]
    fn test_is_day_identifier() {
        assert!(is_day_identifier("08.25.MO"));
        assert!(!is_day_identifier("8.25.MO"));
        assert!(!is_day_identifier("08.25.Mo"));
        assert!(!is_day_identifier("08.25.MO.md"));
    }

    #[test]
    fn test_parse_journal_path() {
        for date in [ymd(2025, 8, 25), ymd(2025, 12, 29), ymd(2021, 1, 1), ymd(2024, 2, 29)] {
            assert_eq!(parse_journal_path(&journal_path(date)), Some(date));
        }
    }

    #[test]
    fn test_parse_journal_path_rejects_misfiled() {
        // Right file name, wrong week folder
        assert_eq!(
            parse_journal_path("Journal/2025/Q3/Week34-wc-Aug18/08.25.MO.md"),
            None
        );
        // Weekday does not match the date
        assert_eq!(
            parse_journal_path("Journal/2025/Q3/Week35-wc-Aug25/08.25.TU.md"),
            None
        );
    }

    #[test]
    fn test_parse_journal_path_rejects_junk() {
        assert_eq!(parse_journal_path("notes/todo.md"), None);
        assert_eq!(parse_journal_path("Journal/2025/Q3/Week35-wc-Aug25/02.30.MO.md"), None);
        assert_eq!(parse_journal_path(""), None);
    }
}
