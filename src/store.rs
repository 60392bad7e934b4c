//! File store and notification collaborators
//!
//! The sync routine only needs two things from its host: a way to list and
//! read markdown notes by vault-relative path, and somewhere to tell the
//! user about recoverable problems.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants as C;
use crate::util;

/// Markdown note storage keyed by vault-relative path (`/` separated)
pub trait FileStore {
    /// Every markdown note path in the store
    fn list_markdown_paths(&self) -> io::Result<BTreeSet<String>>;

    /// Read a note; fails with `NotFound` when the path does not exist
    fn read_file(&self, path: &str) -> io::Result<String>;
}

/// User-facing notification sink (fire-and-forget)
pub trait Notifier {
    fn notify(&self, message: &str);
}

// === VaultStore ===

/// Filesystem store rooted at a vault directory
#[derive(Debug, Clone)]
pub struct VaultStore {
    root: PathBuf,
}

impl VaultStore {
    /// Open an existing vault directory
    pub fn open(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Vault directory not found: {}", util::display_path(root)),
            ));
        }
        let root = dunce::canonicalize(root)?;
        Ok(Self { root })
    }

    /// Path to the vault directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collect_markdown(&self, dir: &Path, out: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if util::is_hidden(&name) {
                continue;
            }

            let path = entry.path();
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                self.collect_markdown(&path, out)?;
            } else if name.ends_with(C::MARKDOWN_EXTENSION) {
                if let Some(relative) = util::relative_path(&self.root, &path) {
                    out.insert(relative);
                }
            }
        }
        Ok(())
    }
}

impl FileStore for VaultStore {
    fn list_markdown_paths(&self) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        self.collect_markdown(&self.root, &mut paths)?;
        debug!(
            "event=vault_list module=store root={} count={}",
            util::display_path(&self.root),
            paths.len()
        );
        Ok(paths)
    }

    fn read_file(&self, path: &str) -> io::Result<String> {
        let full = util::secure_path(&self.root, path)?;
        debug!("event=vault_read module=store path={}", path);
        fs::read_to_string(full)
    }
}

// === MemoryStore ===

/// In-memory store, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a note
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Builder form of `insert`
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }
}

impl FileStore for MemoryStore {
    fn list_markdown_paths(&self) -> io::Result<BTreeSet<String>> {
        Ok(self
            .files
            .keys()
            .filter(|p| p.ends_with(C::MARKDOWN_EXTENSION))
            .cloned()
            .collect())
    }

    fn read_file(&self, path: &str) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("Note not found: {}", path))
        })
    }
}

// === Notifiers ===

/// Prints notifications to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("notice: {}", message);
    }
}

/// Keeps every notification for later inspection
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications received so far, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

impl<T: FileStore + ?Sized> FileStore for &T {
    fn list_markdown_paths(&self) -> io::Result<BTreeSet<String>> {
        (**self).list_markdown_paths()
    }

    fn read_file(&self, path: &str) -> io::Result<String> {
        (**self).read_file(path)
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}
