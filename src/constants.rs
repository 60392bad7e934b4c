//! Constants for journal-sync
//!
//! Markers, format strings and defaults shared across the crate.

// === Journal Layout ===

/// Top-level folder holding every journal note
pub const JOURNAL_ROOT: &str = "Journal";

/// Default file extension for notes
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Newline character
pub const NEWLINE: &str = "\n";

// === Date Format Strings ===

/// Day identifier date part: MM.DD
pub const DAY_ID_DATE_FORMAT: &str = "%m.%d";

/// Abbreviated weekday name (Mon, Tue, ...), truncated to two letters
pub const WEEKDAY_FORMAT: &str = "%a";

/// Number of leading weekday letters kept in a day identifier
pub const WEEKDAY_ABBREVIATION_LENGTH: usize = 2;

/// Monday-of-week folder suffix: three-letter month + two-digit day (Aug25)
pub const WEEK_MONDAY_FORMAT: &str = "%b%d";

/// Input format for dates given on the command line or in the environment
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

// === Task Markers ===

/// Checkbox marker for completed tasks
pub const TASK_MARKER_DONE: &str = "- [x]";

/// Checkbox marker for open tasks
pub const TASK_MARKER_OPEN: &str = "- [ ]";

/// First line of a todo callout block
pub const TODO_CALLOUT_MARKER: &str = "> [!todo]";

/// Prefix continuing a callout block
pub const QUOTE_PREFIX: &str = ">";

// === Lookup ===

/// Maximum number of days searched backward for a previous entry
pub const LOOKBACK_DAYS: u32 = 60;

/// Largest lookback accepted from configuration (about ten years)
pub const MAX_LOOKBACK_DAYS: u32 = 3660;

// === Environment Variables ===

/// Vault directory override
pub const ENV_VAULT: &str = "JOURNAL_SYNC_VAULT";

/// "Today" override, YYYY-MM-DD
pub const ENV_TODAY: &str = "JOURNAL_SYNC_TODAY";

/// Log specification override (flexi_logger syntax)
pub const ENV_LOG: &str = "JOURNAL_SYNC_LOG";

/// Conventional log specification, used when `JOURNAL_SYNC_LOG` is unset
pub const ENV_RUST_LOG: &str = "RUST_LOG";

// === Configuration ===

/// Directory under the platform config dir
pub const CONFIG_DIR_NAME: &str = "journal-sync";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Default log level when nothing else is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// === Messages ===

/// Notification sent when no previous journal entry exists
pub const NOTICE_NO_YESTERDAY: &str = "No yesterday found!";
