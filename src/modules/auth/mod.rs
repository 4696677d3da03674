pub mod hashing;
pub mod password;

// Re-export the main types and functions
pub use hashing::{hash_password, verify_password};
pub use password::{validate_password, PasswordError};
