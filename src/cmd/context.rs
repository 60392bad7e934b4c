//! Shared command context: configuration, vault location and output mode

use std::io;
use std::path::PathBuf;

use journal_sync::{Config, JournalSync, StderrNotifier, VaultStore};
use log::debug;
use serde::Serialize;

pub struct Context {
    pub config: Config,
    pub vault: PathBuf,
    pub json: bool,
}

impl Context {
    pub fn new(config: Config, vault: PathBuf, json: bool) -> Self {
        Self { config, vault, json }
    }

    /// Open the vault directory as a file store
    pub fn open_vault(&self) -> io::Result<VaultStore> {
        let store = VaultStore::open(&self.vault)?;
        debug!(
            "event=vault_open module=cmd root={}",
            journal_sync::display_path(store.root())
        );
        Ok(store)
    }

    /// Sync over the vault, reporting to stderr
    pub fn journal_sync(&self) -> io::Result<JournalSync<VaultStore, StderrNotifier>> {
        Ok(JournalSync::new(self.open_vault()?, StderrNotifier)
            .with_lookback(self.config.lookback_days))
    }
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
