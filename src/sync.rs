//! JournalSync - carry yesterday's tasks into today
//!
//! Resolves the previous journal entry, reads it and extracts its backlog.
//! Writing today's note is left to the caller.

use chrono::NaiveDate;
use log::{info, warn};
use serde::Serialize;

use crate::backlog::{self, Backlog};
use crate::constants as C;
use crate::day_path::journal_path;
use crate::error::SyncResult;
use crate::locator::find_previous;
use crate::store::{FileStore, Notifier};

/// Everything needed to seed today's note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncOutcome {
    pub today: NaiveDate,
    /// Where today's note belongs
    pub today_path: String,
    /// The entry the backlog was read from
    pub yesterday_path: String,
    pub backlog: Backlog,
}

/// Orchestrates lookup, read and extraction over a file store
pub struct JournalSync<S, N> {
    store: S,
    notifier: N,
    lookback_days: u32,
}

impl<S: FileStore, N: Notifier> JournalSync<S, N> {
    /// Create a sync with the default lookback bound
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            store,
            notifier,
            lookback_days: C::LOOKBACK_DAYS,
        }
    }

    /// Override how many days back to search
    pub fn with_lookback(mut self, lookback_days: u32) -> Self {
        self.lookback_days = lookback_days;
        self
    }

    /// Path of the most recent entry before `today`, if any
    pub fn find_yesterday(&self, today: NaiveDate) -> SyncResult<Option<String>> {
        let paths = self.store.list_markdown_paths()?;
        Ok(find_previous(today, &paths, self.lookback_days))
    }

    /// Like `find_yesterday`, but tells the user when nothing is found
    pub fn locate_previous(&self, today: NaiveDate) -> SyncResult<Option<String>> {
        let found = self.find_yesterday(today)?;
        if found.is_none() {
            warn!(
                "event=locate module=sync status=no_previous today={} lookback_days={}",
                today, self.lookback_days
            );
            self.notifier.notify(C::NOTICE_NO_YESTERDAY);
        }
        Ok(found)
    }

    /// Run the sync for `today`.
    ///
    /// Returns `Ok(None)` after notifying the user when no entry exists
    /// within the lookback bound.
    pub fn sync(&self, today: NaiveDate) -> SyncResult<Option<SyncOutcome>> {
        let yesterday_path = match self.locate_previous(today)? {
            Some(path) => path,
            None => return Ok(None),
        };

        let content = self.store.read_file(&yesterday_path)?;
        let backlog = backlog::extract(&content);
        info!(
            "event=sync module=sync status=ok today={} source={} todo={} done={}",
            today,
            yesterday_path,
            backlog.todo.len(),
            backlog.done.len()
        );

        Ok(Some(SyncOutcome {
            today,
            today_path: journal_path(today),
            yesterday_path,
            backlog,
        }))
    }
}
