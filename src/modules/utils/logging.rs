use env_logger::Builder;
use log::{info, warn, LevelFilter};
use std::fs::OpenOptions;

/// Initialize the logging system, writing to the application log file
///
/// Defaults to Info; the RUST_LOG environment variable can raise or
/// lower the level.
pub fn initialize_logging() -> Result<(), Box<dyn std::error::Error>> {
    // Create or append to the log file
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("application.log")?;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        // Write to the log file instead of stderr
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    info!("Logging system initialized");
    Ok(())
}

/// Helper function to mask sensitive data for logging
///
/// Keeps the first and last two characters, stars the rest. Short
/// values are fully starred.
fn format_sensitive(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let prefix: String = chars[..2].iter().collect();
    let suffix: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", prefix, suffix)
}

/// Add structured logging for authentication events
pub fn log_auth_event(event_type: &str, username: &str, success: bool, details: Option<&str>) {
    if success {
        info!(
            "Auth event: type={}, user={}, success=true, details={:?}",
            event_type,
            format_sensitive(username),
            details
        );
    } else {
        warn!(
            "Auth event: type={}, user={}, success=false, details={:?}",
            event_type,
            format_sensitive(username),
            details
        );
    }
}
