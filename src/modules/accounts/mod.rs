pub mod model;
pub mod store;
pub mod user_interface;

// Re-export the main types and functions
pub use model::{Account, AccountSummary};
pub use store::{AccountError, AccountStore};
pub use user_interface::run_interactive_session;
