use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// journal-sync - carry yesterday's open tasks into today's journal note
///
/// # Quick Reference
///
/// ```bash
/// journal-sync path                    # Today's journal path
/// journal-sync path 2025-08-25         # Journal/2025/Q3/Week35-wc-Aug25/08.25.MO.md
/// journal-sync yesterday               # Most recent entry before today
/// journal-sync extract Journal/.../08.25.MO.md
/// journal-sync extract < note.md       # Extract from stdin
/// journal-sync sync                    # Backlog to carry into today
/// journal-sync --json sync             # Same, as JSON
/// journal-sync entries                 # Every journal entry, oldest first
/// ```
///
/// ## Journal Layout
///
/// `Journal/{YYYY}/Q{Q}/Week{WW}-wc-{MonDD}/{MM}.{DD}.{XX}.md`
///
/// ## Environment Variables
///
/// - `JOURNAL_SYNC_VAULT`: Vault directory (default: current directory)
/// - `JOURNAL_SYNC_TODAY`: Override today's date (YYYY-MM-DD)
/// - `JOURNAL_SYNC_LOG`: Log spec, e.g. `debug` or `journal_sync=info`
/// - `RUST_LOG`: Used when `JOURNAL_SYNC_LOG` is unset
///
/// ## Configuration
///
/// `<config dir>/journal-sync/config.yaml`:
///
/// ```yaml
/// vault: ~/Notes
/// lookback_days: 60
/// log_level: warn
/// ```
#[derive(Parser, Debug)]
#[command(name = "journal-sync")]
#[command(version)]
#[command(about = "Carry yesterday's open tasks into today's journal note")]
pub struct Cli {
    /// Vault directory holding the Journal/ tree
    #[arg(long, global = true, value_name = "PATH")]
    pub vault: Option<PathBuf>,

    /// Config file (default: <config dir>/journal-sync/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for scripting)
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the journal path for a date
    #[command(alias = "p")]
    Path {
        /// Date as YYYY-MM-DD (default: today)
        date: Option<String>,
    },

    /// Find the most recent journal entry before today
    #[command(alias = "y")]
    Yesterday {
        /// Treat this date (YYYY-MM-DD) as today
        #[arg(long)]
        today: Option<String>,
    },

    /// Extract tasks and todo callouts from a note
    #[command(alias = "x")]
    Extract {
        /// Vault-relative note path, or "-" for stdin (default: stdin)
        note: Option<String>,
    },

    /// Extract yesterday's backlog for today's note
    Sync {
        /// Treat this date (YYYY-MM-DD) as today
        #[arg(long)]
        today: Option<String>,
    },

    /// List journal entries in the vault, oldest first
    #[command(alias = "ls")]
    Entries,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sync_with_global_flags() {
        let cli = Cli::parse_from(["journal-sync", "sync", "--today", "2025-08-26", "--json", "-vv"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Sync { today } => assert_eq!(today.as_deref(), Some("2025-08-26")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_path_alias() {
        let cli = Cli::parse_from(["journal-sync", "--vault", "/notes", "p", "2025-08-25"]);
        assert_eq!(cli.vault, Some(PathBuf::from("/notes")));
        assert!(matches!(cli.command, Command::Path { date: Some(_) }));
    }
}
