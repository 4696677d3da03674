use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use log::{error, info};

use super::file::{save_accounts, StorageError};
use crate::modules::accounts::model::Account;

/// Background writer that persists account snapshots sequentially
///
/// Mutating callers enqueue a full snapshot after every change instead
/// of touching the file themselves. A dedicated thread drains the queue
/// in order, so writes stay serialized no matter how quickly mutations
/// arrive, and `shutdown` returns only once everything queued has
/// reached disk.
pub struct PersistenceWorker {
    sender: mpsc::Sender<Vec<Account>>,
    handle: thread::JoinHandle<()>,
}

impl PersistenceWorker {
    /// Spawn the writer thread for the given storage path
    pub fn spawn(path: PathBuf) -> Self {
        let (sender, receiver) = mpsc::channel::<Vec<Account>>();

        let handle = thread::spawn(move || {
            // Runs until every sender is gone, then finishes whatever
            // is still queued before exiting
            for snapshot in receiver {
                if let Err(e) = save_accounts(&path, &snapshot) {
                    error!("Failed to save accounts to {}: {}", path.display(), e);
                }
            }
        });

        Self { sender, handle }
    }

    /// Queue a snapshot for writing and return immediately
    ///
    /// Fails only when the writer thread is gone, which leaves the
    /// in-memory state untouched; the caller may retry on the next
    /// mutation.
    pub fn queue_save(&self, snapshot: Vec<Account>) -> Result<(), StorageError> {
        self.sender
            .send(snapshot)
            .map_err(|_| StorageError::QueueClosed)
    }

    /// Close the queue and wait until every pending snapshot is written
    ///
    /// Joining the writer thread is the completion signal: once this
    /// returns, no save is in flight and the process may exit without
    /// losing state.
    pub fn shutdown(self) {
        drop(self.sender);
        match self.handle.join() {
            Ok(()) => info!("Persistence queue drained"),
            Err(e) => error!("Persistence worker panicked: {:?}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::file::load_accounts;
    use tempfile::tempdir;

    fn account(name: &str) -> Account {
        Account::new(name.to_string(), format!("token-{}", name))
    }

    #[test]
    fn test_shutdown_drains_queued_snapshots() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");
        let worker = PersistenceWorker::spawn(path.clone());

        worker.queue_save(vec![account("alice")]).unwrap();
        worker
            .queue_save(vec![account("alice"), account("bob")])
            .unwrap();
        worker.shutdown();

        let loaded = load_accounts(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].username, "bob");
    }

    #[test]
    fn test_last_queued_snapshot_wins() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");
        let worker = PersistenceWorker::spawn(path.clone());

        for i in 0..10 {
            worker.queue_save(vec![account(&format!("user{}", i))]).unwrap();
        }
        worker.shutdown();

        let loaded = load_accounts(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].username, "user9");
    }

    #[test]
    fn test_shutdown_with_empty_queue_returns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");

        let worker = PersistenceWorker::spawn(path.clone());
        worker.shutdown();

        // Nothing was queued, so nothing was written
        assert!(!path.exists());
    }
}
