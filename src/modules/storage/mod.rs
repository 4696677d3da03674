pub mod file;
pub mod worker;

// Re-export the main types and functions
pub use file::{load_accounts, save_accounts, StorageError};
pub use worker::PersistenceWorker;
