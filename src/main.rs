use std::path::PathBuf;
use std::process;

use clap::{Arg, Command}; // Import necessary modules from clap for command-line argument parsing
use log::{error, info};

use user_auth::accounts::{run_interactive_session, AccountStore};
use user_auth::storage::{load_accounts, PersistenceWorker};
use user_auth::utils::logging::initialize_logging;
use user_auth::USERS_FILE;

// Main function to parse command-line arguments and run the interactive session
fn main() {
    // Define the command-line interface using clap
    let matches = Command::new("user-auth")
        .about("A simple local user account manager")
        .arg(
            Arg::new("file")
                .long("file")
                .help("Path of the JSON file accounts are stored in")
                .value_name("FILE")
                .default_value(USERS_FILE),
        )
        .get_matches(); // Parse the command-line arguments

    // Set up logging before anything that might need to report errors
    if let Err(e) = initialize_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let storage_path = PathBuf::from(matches.get_one::<String>("file").unwrap()); // Has a default value

    // Load existing accounts; a broken or unreadable file must not keep
    // the program from starting
    let accounts = match load_accounts(&storage_path) {
        Ok(accounts) => {
            info!(
                "Loaded {} account(s) from {}",
                accounts.len(),
                storage_path.display()
            );
            accounts
        }
        Err(e) => {
            error!(
                "Failed to load accounts from {}: {}",
                storage_path.display(),
                e
            );
            println!("Warning: could not load {}: {}", storage_path.display(), e);
            println!("Starting with an empty account list.");
            Vec::new()
        }
    };

    let mut store = AccountStore::with_accounts(accounts);
    let worker = PersistenceWorker::spawn(storage_path);

    if let Err(e) = run_interactive_session(&mut store, &worker) {
        error!("Session ended with input error: {}", e);
        eprintln!("Input error: {}", e);
    }

    // Blocks until every queued snapshot is on disk
    worker.shutdown();
}
