//! Session Token Store: the one piece of persisted client state.
//!
//! A single opaque bearer token lives behind a `TokenStore`. Every authenticated
//! request reads it; only the sign-in/sign-up flows write it. Nothing here tracks
//! expiry or clears the token: there is no sign-out path.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Could not save session token to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub trait TokenStore: Send + Sync {
    /// Returns the stored token, or `None` when nothing usable is stored.
    /// Never fails: unreadable storage is treated the same as no token.
    fn get_token(&self) -> Option<String>;

    fn set_token(&self, token: &str) -> Result<(), SessionError>;
}

/// Process-wide handle shared by the request client and the auth pages.
pub type SharedTokenStore = Arc<dyn TokenStore>;

/// File-backed store. The file holds the raw token and nothing else.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get_token(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => non_empty(contents.trim()),
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    debug!("Token file {} unreadable: {e}", self.path.display());
                }
                None
            }
        }
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        let write_err = |source: io::Error| SessionError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        write_private(&self.path, token.trim()).map_err(write_err)?;
        debug!("Session token saved to {}", self.path.display());
        Ok(())
    }
}

/// Writes `contents` readable by the owner only (0600 on unix), tightening an
/// existing file's mode as well.
fn write_private(path: &Path, contents: &str) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(contents.as_bytes())
}

/// In-memory store for contexts without persistent storage (and for tests).
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(non_empty(token)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get_token(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        if let Ok(mut slot) = self.token.lock() {
            *slot = non_empty(token);
        }
        Ok(())
    }
}

/// An empty token is no token; it must never become `Bearer `.
fn non_empty(token: &str) -> Option<String> {
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        assert_eq!(store.get_token(), None);
    }

    #[test]
    fn test_set_then_get_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("recruitsage").join("token"));
        store.set_token("abc123").unwrap();
        assert_eq!(store.get_token().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_set_overwrites_previous_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        store.set_token("first").unwrap();
        store.set_token("second").unwrap();
        assert_eq!(store.get_token().as_deref(), Some("second"));
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_is_private_to_owner() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        FileTokenStore::new(&path).set_token("secret-bearer").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
        assert_eq!(fs::read_to_string(&path).unwrap(), "secret-bearer");
    }

    #[cfg(unix)]
    #[test]
    fn test_new_token_file_is_private_to_owner() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("token");
        FileTokenStore::new(&path).set_token("secret-bearer").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & 0o077, 0);
    }

    #[test]
    fn test_blank_file_is_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "  \n").unwrap();
        assert_eq!(FileTokenStore::new(path).get_token(), None);
    }

    #[test]
    fn test_unreadable_path_is_no_token() {
        // A directory where the file should be: read fails, store reports absent.
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(FileTokenStore::new(dir.path()).get_token(), None);
    }

    #[test]
    fn test_memory_store_ignores_empty_token() {
        let store = MemoryTokenStore::with_token("");
        assert_eq!(store.get_token(), None);
        store.set_token("xyz").unwrap();
        assert_eq!(store.get_token().as_deref(), Some("xyz"));
    }
}
