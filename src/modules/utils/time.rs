use chrono::{DateTime, Utc};

/// Function to format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Function to format an optional last-login timestamp for display
///
/// Accounts that have never logged in show "never".
pub fn format_last_login(last_login: Option<DateTime<Utc>>) -> String {
    match last_login {
        Some(timestamp) => format_timestamp(timestamp),
        None => String::from("never"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        let timestamp = DateTime::from_timestamp(1609459200, 0).unwrap();
        assert_eq!(format_timestamp(timestamp), "2021-01-01 00:00:00");
    }

    #[test]
    fn test_format_last_login() {
        let timestamp = DateTime::from_timestamp(1609459200, 0).unwrap();
        assert_eq!(format_last_login(Some(timestamp)), "2021-01-01 00:00:00");
        assert_eq!(format_last_login(None), "never");
    }
}
