pub mod io;
pub mod logging;
pub mod time;

pub use io::{prompt, read_line};
pub use logging::{initialize_logging, log_auth_event};
pub use time::format_last_login;
