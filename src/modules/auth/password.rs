use std::fmt;
use std::io;

/// Password complexity violations, one per rule
#[derive(Debug, Clone, PartialEq)]
pub enum PasswordError {
    TooShort,
    NoDigit,
    NoSpecialChar,
}

// Implementation of Display trait for PasswordError
impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordError::TooShort => {
                write!(f, "password must be at least 8 characters long")
            }
            PasswordError::NoDigit => {
                write!(f, "password must contain at least one digit")
            }
            PasswordError::NoSpecialChar => {
                write!(f, "password must contain at least one special character")
            }
        }
    }
}

/// Check whether a character counts as a special character.
/// Anything that is not a letter, digit, whitespace or control
/// character qualifies, so punctuation and symbols both pass.
fn is_special_char(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && !c.is_control()
}

/// Function to validate password strength
///
/// Rules are checked in a fixed order and the first violation is
/// returned: minimum length of 8 characters, at least one decimal
/// digit, at least one special character. Only the decimal digits
/// 0-9 satisfy the digit rule; other numeric characters such as
/// fractions or Roman numerals do not count.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.chars().count() < 8 {
        return Err(PasswordError::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordError::NoDigit);
    }
    if !password.chars().any(is_special_char) {
        return Err(PasswordError::NoSpecialChar);
    }
    Ok(())
}

/// Helper function to read a password securely
pub fn read_password() -> io::Result<String> {
    rpassword::read_password()
}
