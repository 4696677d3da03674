// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{accounts, auth, storage, utils};

// Re-export commonly used types
pub use modules::accounts::model::{Account, AccountSummary};
pub use modules::accounts::store::{AccountError, AccountStore};
pub use modules::storage::worker::PersistenceWorker;

// Constants
pub const USERS_FILE: &str = "users.json";
