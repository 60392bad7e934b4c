//! Previous journal entry lookup

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::constants as C;
use crate::day_path::{journal_path, parse_journal_path};

/// A journal note recognised in a path listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub path: String,
}

/// Find the most recent journal path before `today`, looking back at most
/// `LOOKBACK_DAYS` days.
pub fn find_yesterday(today: NaiveDate, existing_paths: &BTreeSet<String>) -> Option<String> {
    find_previous(today, existing_paths, C::LOOKBACK_DAYS)
}

/// Walk back from `today - 1` through `today - lookback_days` and return the
/// first journal path present in `existing_paths`. The walk stops early at
/// the earliest representable date.
pub fn find_previous(
    today: NaiveDate,
    existing_paths: &BTreeSet<String>,
    lookback_days: u32,
) -> Option<String> {
    (1..=i64::from(lookback_days))
        .map_while(|offset| today.checked_sub_signed(Duration::days(offset)))
        .map(journal_path)
        .find(|path| existing_paths.contains(path))
}

/// All journal notes in a listing, oldest first. Paths that do not follow
/// the journal layout are skipped.
pub fn journal_entries(existing_paths: &BTreeSet<String>) -> Vec<JournalEntry> {
    let mut entries: Vec<JournalEntry> = existing_paths
        .iter()
        .filter_map(|path| {
            parse_journal_path(path).map(|date| JournalEntry {
                date,
                path: path.clone(),
            })
        })
        .collect();
    entries.sort_by_key(|entry| entry.date);
    entries
}
