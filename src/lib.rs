pub mod backlog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod day_path;
pub mod error;
pub mod locator;
pub mod logging;
pub mod store;
pub mod sync;
pub mod util;

pub use backlog::{extract, Backlog};
pub use cli::{Cli, Command};
pub use config::{parse_date, resolve_today, Config};
pub use day_path::{day_identifier, is_day_identifier, journal_path, parse_journal_path, quarter, week_monday};
pub use error::{SyncError, SyncResult};
pub use locator::{find_previous, find_yesterday, journal_entries, JournalEntry};
pub use logging::init_logging;
pub use store::{FileStore, MemoryStore, Notifier, RecordingNotifier, StderrNotifier, VaultStore};
pub use sync::{JournalSync, SyncOutcome};
pub use util::display_path;
