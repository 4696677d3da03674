use std::fmt;

use chrono::Utc;

use super::model::{Account, AccountSummary};
use crate::modules::auth::hashing::{hash_password, verify_password};
use crate::modules::auth::password::{validate_password, PasswordError};

/// Custom error type for account store operations
#[derive(Debug)]
pub enum AccountError {
    InvalidInput(&'static str),
    WeakPassword(PasswordError),
    DuplicateUsername(String),
    HashingFailure(String),
}

// Implementation of Display trait for AccountError
impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountError::InvalidInput(field) => write!(f, "{} cannot be empty", field),
            AccountError::WeakPassword(e) => write!(f, "weak password: {}", e),
            AccountError::DuplicateUsername(name) => {
                write!(f, "username '{}' is already taken", name)
            }
            AccountError::HashingFailure(msg) => write!(f, "internal hashing error: {}", msg),
        }
    }
}

// Policy violations pass through the store unchanged
impl From<PasswordError> for AccountError {
    fn from(error: PasswordError) -> Self {
        AccountError::WeakPassword(error)
    }
}

/// Container for all registered accounts
///
/// The store owns the collection and every mutation goes through its
/// methods, which keeps the username uniqueness invariant in one place.
/// The collection preserves registration order; that order is also the
/// order accounts are listed and persisted in.
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    /// Wrap a collection previously loaded from storage
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Function to register a new account
    ///
    /// Rejects empty input, duplicate usernames (exact, case-sensitive
    /// match) and passwords that fail the complexity policy, in that
    /// order. On success the password is hashed, the account is appended
    /// with no last login time, and a copy of it is returned. The new
    /// account is visible to `exists` and `authenticate` before this
    /// returns.
    pub fn register(&mut self, username: &str, password: &str) -> Result<Account, AccountError> {
        if username.is_empty() {
            return Err(AccountError::InvalidInput("username"));
        }
        if password.is_empty() {
            return Err(AccountError::InvalidInput("password"));
        }

        // Check if the username is already taken
        if self.exists(username) {
            return Err(AccountError::DuplicateUsername(username.to_string()));
        }

        // Validate password complexity before hashing
        validate_password(password)?;

        let hash = hash_password(password).map_err(AccountError::HashingFailure)?;
        let account = Account::new(username.to_string(), hash);
        self.accounts.push(account.clone());

        Ok(account)
    }

    /// Check whether a username is already registered
    pub fn exists(&self, username: &str) -> bool {
        self.accounts.iter().any(|a| a.username == username)
    }

    /// Function to authenticate a login attempt
    ///
    /// Returns true only when the username exists and the password
    /// verifies against the stored hash, in which case the account's
    /// last login time is set to now. The return value does not reveal
    /// whether the username or the password was the wrong half.
    pub fn authenticate(&mut self, username: &str, password: &str) -> bool {
        for account in self.accounts.iter_mut() {
            if account.username == username {
                if verify_password(&account.password_hash, password) {
                    account.last_login = Some(Utc::now());
                    return true;
                }
                return false;
            }
        }
        false
    }

    /// Read-only snapshot of usernames and last login times, in
    /// registration order
    pub fn list(&self) -> Vec<AccountSummary> {
        self.accounts
            .iter()
            .map(|a| AccountSummary {
                username: a.username.clone(),
                last_login: a.last_login,
            })
            .collect()
    }

    /// Clone of the full collection, the unit handed to persistence
    pub fn snapshot(&self) -> Vec<Account> {
        self.accounts.clone()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_authenticate_flow() {
        let mut store = AccountStore::new();

        let account = store.register("alice", "Str0ng!Pw").unwrap();
        assert_eq!(account.username, "alice");
        assert_eq!(account.last_login, None);
        assert!(store.exists("alice"));

        // Same username again fails regardless of the password
        assert!(matches!(
            store.register("alice", "Other1!Pw"),
            Err(AccountError::DuplicateUsername(_))
        ));

        // Correct password logs in and stamps the login time
        let before = Utc::now();
        assert!(store.authenticate("alice", "Str0ng!Pw"));
        let first_login = store.list()[0].last_login.expect("login time must be set");
        assert!(first_login >= before);

        // Wrong password fails and leaves the timestamp alone
        assert!(!store.authenticate("alice", "wrong"));
        assert_eq!(store.list()[0].last_login, Some(first_login));
    }

    #[test]
    fn test_weak_password_leaves_no_account_behind() {
        let mut store = AccountStore::new();

        assert!(matches!(
            store.register("bob", "short1!"),
            Err(AccountError::WeakPassword(PasswordError::TooShort))
        ));
        assert!(!store.exists("bob"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let mut store = AccountStore::new();

        assert!(matches!(
            store.register("", "Str0ng!Pw"),
            Err(AccountError::InvalidInput("username"))
        ));
        assert!(matches!(
            store.register("carol", ""),
            Err(AccountError::InvalidInput("password"))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_user_never_authenticates() {
        let mut store = AccountStore::new();
        store.register("alice", "Str0ng!Pw").unwrap();

        assert!(!store.authenticate("mallory", "Str0ng!Pw"));
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let mut store = AccountStore::new();
        store.register("Alice", "Str0ng!Pw").unwrap();

        assert!(!store.exists("alice"));
        assert!(store.register("alice", "Other1!Pw").is_ok());
        assert!(!store.authenticate("ALICE", "Str0ng!Pw"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_preserves_registration_order() {
        let mut store = AccountStore::new();
        store.register("carol", "Str0ng!Pw").unwrap();
        store.register("alice", "Str0ng!Pw").unwrap();
        store.register("bob", "Str0ng!Pw").unwrap();

        let names: Vec<String> = store.list().into_iter().map(|s| s.username).collect();
        assert_eq!(names, vec!["carol", "alice", "bob"]);
    }

    #[test]
    fn test_stored_hash_is_not_the_plaintext() {
        let mut store = AccountStore::new();
        let account = store.register("dave", "Str0ng!Pw").unwrap();

        assert_ne!(account.password_hash, "Str0ng!Pw");
        assert!(account.password_hash.starts_with("$pbkdf2-sha256$"));
    }
}
