use log::warn;
use pbkdf2::password_hash::rand_core::OsRng;
use pbkdf2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use pbkdf2::{Params, Pbkdf2};

/// PBKDF2 iteration count, the cost factor of every stored hash
const PBKDF2_ROUNDS: u32 = 100_000;

/// Length of the derived hash in bytes
const HASH_LENGTH: usize = 32;

/// Function to hash a password for storage
///
/// Produces a self-describing PHC string (`$pbkdf2-sha256$...`) with the
/// salt and cost parameters embedded, so verifying later needs nothing
/// besides the token itself. Fails only on internal errors such as a
/// broken entropy source.
pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    let params = Params {
        rounds: PBKDF2_ROUNDS,
        output_length: HASH_LENGTH,
    };

    Pbkdf2
        .hash_password_customized(password.as_bytes(), None, None, params, &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| format!("Password hashing failed: {}", e))
}

/// Function to verify a candidate password against a stored hash token
///
/// The comparison runs inside the password-hash machinery, which checks
/// the recomputed hash in constant time. A token that cannot be parsed
/// never matches.
pub fn verify_password(hash: &str, password: &str) -> bool {
    let parsed = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Stored password hash could not be parsed: {}", e);
            return false;
        }
    };

    Pbkdf2.verify_password(password.as_bytes(), &parsed).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("Str0ng!Pw").unwrap();

        assert!(verify_password(&hash, "Str0ng!Pw"));
        assert!(!verify_password(&hash, "wrong"));
        assert!(!verify_password(&hash, "Str0ng!Pw "));
    }

    #[test]
    fn test_hash_tokens_are_salted() {
        let first = hash_password("Str0ng!Pw").unwrap();
        let second = hash_password("Str0ng!Pw").unwrap();

        // Fresh salt per call, so the tokens differ but both verify
        assert_ne!(first, second);
        assert!(verify_password(&first, "Str0ng!Pw"));
        assert!(verify_password(&second, "Str0ng!Pw"));
    }

    #[test]
    fn test_token_is_self_describing() {
        let hash = hash_password("Str0ng!Pw").unwrap();

        assert!(hash.starts_with("$pbkdf2-sha256$"));
        assert!(hash.contains("i=100000"));
    }

    #[test]
    fn test_malformed_token_never_matches() {
        assert!(!verify_password("not-a-phc-string", "Str0ng!Pw"));
        assert!(!verify_password("", "Str0ng!Pw"));
        assert!(!verify_password("$pbkdf2-sha256$garbage", "Str0ng!Pw"));
    }
}
