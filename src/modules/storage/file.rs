use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::sync::Mutex;

use lazy_static::lazy_static;
use log::debug;
use tempfile::NamedTempFile;

use crate::modules::accounts::model::Account;

/// Custom error type for persistence operations
#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Format(serde_json::Error),
    QueueClosed,
}

// Implementation of Display trait for StorageError
impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "storage I/O error: {}", e),
            StorageError::Format(e) => write!(f, "storage format error: {}", e),
            StorageError::QueueClosed => write!(f, "persistence worker is no longer running"),
        }
    }
}

// Implement conversion from io::Error to StorageError
impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::Io(error)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Format(error)
    }
}

lazy_static! {
    // Process-wide lock over file writes; two saves can never
    // interleave their bytes on disk.
    static ref WRITE_LOCK: Mutex<()> = Mutex::new(());
}

/// Function to load the account collection from the given path
///
/// A missing file is not an error, it just means nothing has been saved
/// yet, so an empty collection is returned. An unreadable or unparsable
/// file is reported as a `StorageError`; whether to start over with an
/// empty collection is the caller's decision.
pub fn load_accounts(path: &Path) -> Result<Vec<Account>, StorageError> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No account file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(StorageError::Io(e)),
    };

    let mut data = String::new();
    file.read_to_string(&mut data)?;

    let accounts = serde_json::from_str(&data)?;
    Ok(accounts)
}

/// Function to save the full account collection to the given path
///
/// The collection is serialized as pretty-printed JSON, written to a
/// temporary file in the destination directory, synced, and renamed
/// over the target, so the file always holds exactly one complete
/// snapshot. Saves are serialized by a process-wide lock; the last
/// writer to take it determines the final contents. The previous file
/// contents are replaced, never merged.
pub fn save_accounts(path: &Path, accounts: &[Account]) -> Result<(), StorageError> {
    let data = serde_json::to_string_pretty(accounts)?;

    let _guard = WRITE_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    // The temp file must live in the target directory so the final
    // rename stays on one filesystem
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(data.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| StorageError::Io(e.error))?;

    debug!("Saved {} account(s) to {}", accounts.len(), path.display());
    Ok(())
}
