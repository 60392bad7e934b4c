//! Path helpers for vault access

use std::io;
use std::path::{Path, PathBuf};

/// Resolve a vault-relative path, ensuring it stays within the vault.
/// `..` components and absolute paths are rejected outright.
pub fn secure_path(base: &Path, relative: &str) -> io::Result<PathBuf> {
    let mut result = base.to_path_buf();

    if relative.starts_with('/') || relative.starts_with('\\') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Absolute paths are not allowed",
        ));
    }

    for component in relative.split(|c| c == '/' || c == '\\') {
        match component {
            "" | "." => continue,
            ".." => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Path traversal detected: cannot escape vault directory",
                ));
            }
            _ => {
                // Windows drive prefix (C:)
                if component.len() >= 2 && component.as_bytes()[1] == b':' {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "Absolute paths are not allowed",
                    ));
                }
                result.push(component);
            }
        }
    }

    // Symlinks inside the vault may still point outside of it
    if result.exists() && base.exists() {
        let canonical_base = dunce::canonicalize(base)?;
        let canonical_result = dunce::canonicalize(&result)?;
        if !canonical_result.starts_with(&canonical_base) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Path traversal detected: resolved path escapes vault directory",
            ));
        }
    }

    Ok(result)
}

/// Vault-relative form of `path` with forward slashes, or `None` when
/// `path` is not under `base`
pub fn relative_path(base: &Path, path: &Path) -> Option<String> {
    path.strip_prefix(base).ok().map(display_path)
}

/// Display a path with forward slashes (cross-platform standard)
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Hidden files and directories start with a dot (.obsidian, .trash)
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
