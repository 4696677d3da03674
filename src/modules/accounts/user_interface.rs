use std::io;

use log::error;

use super::store::AccountStore;
use crate::modules::auth::password::read_password;
use crate::modules::storage::PersistenceWorker;
use crate::modules::utils::io::{prompt, read_line};
use crate::modules::utils::logging::log_auth_event;
use crate::modules::utils::time::format_last_login;

/// Actions reachable from the main menu
#[derive(Debug, Clone, Copy, PartialEq)]
enum MenuAction {
    Register,
    Login,
    ListAccounts,
    Quit,
}

/// Function to show the main menu options
fn show_menu() {
    println!("\n=== User Authentication System ===");
    println!("1. Register new account   (or type 'register')");
    println!("2. Login                  (or type 'login')");
    println!("3. List accounts          (or type 'list')");
    println!("4. Quit                   (or type 'quit')");
}

/// Map raw menu input to an action, by number or by name
fn parse_menu_choice(input: &str) -> Option<MenuAction> {
    match input.trim().to_lowercase().as_str() {
        "1" | "register" => Some(MenuAction::Register),
        "2" | "login" => Some(MenuAction::Login),
        "3" | "list" => Some(MenuAction::ListAccounts),
        "4" | "quit" | "exit" => Some(MenuAction::Quit),
        _ => None,
    }
}

/// Hand the current account collection to the background writer
fn queue_snapshot(store: &AccountStore, worker: &PersistenceWorker) {
    if let Err(e) = worker.queue_save(store.snapshot()) {
        error!("Failed to queue account save: {}", e);
        println!("Warning: Failed to queue account save: {}", e);
    }
}

/// Handle the 'register' menu option
fn handle_register(store: &mut AccountStore, worker: &PersistenceWorker) -> io::Result<()> {
    println!("\n=== Register New Account ===");
    println!("Enter desired username:");
    let username = read_line()?;

    println!("Enter password (min 8 chars, at least one number and one special character):");
    let password = read_password()?;

    match store.register(&username, &password) {
        Ok(account) => {
            log_auth_event("register", &account.username, true, None);
            println!("User registered successfully!");
            queue_snapshot(store, worker);
        }
        Err(e) => {
            log_auth_event("register", &username, false, Some(&e.to_string()));
            println!("Registration failed: {}", e);
        }
    }

    Ok(())
}

/// Handle the 'login' menu option
fn handle_login(store: &mut AccountStore, worker: &PersistenceWorker) -> io::Result<()> {
    println!("\n=== Login ===");
    println!("Enter username:");
    let username = read_line()?;

    println!("Enter password (input hidden):");
    let password = read_password()?;

    if store.authenticate(&username, &password) {
        log_auth_event("login", &username, true, None);
        println!("Login successful! Welcome back, {}!", username);
        // A successful login updates the last login time, so it must be
        // persisted like any other mutation
        queue_snapshot(store, worker);
    } else {
        log_auth_event("login", &username, false, Some("invalid username or password"));
        println!("Login failed: invalid username or password.");
    }

    Ok(())
}

/// Handle the 'list' menu option
fn handle_list(store: &AccountStore) {
    let summaries = store.list();

    if summaries.is_empty() {
        println!("\nNo accounts registered yet.");
        return;
    }

    println!("\n---- Registered Users ----");
    for summary in summaries {
        println!(
            "- {} (last login: {})",
            summary.username,
            format_last_login(summary.last_login)
        );
    }
}

/// Main interactive loop: show the menu, dispatch the chosen action,
/// repeat until the user quits
///
/// End of input on the menu prompt is treated like choosing 'quit', so
/// piped input still exits through the normal save path.
pub fn run_interactive_session(
    store: &mut AccountStore,
    worker: &PersistenceWorker,
) -> io::Result<()> {
    loop {
        show_menu();

        let choice = match prompt("\nChoose an option: ") {
            Ok(input) => input,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        };

        let action = match parse_menu_choice(&choice) {
            Some(action) => action,
            None => {
                println!(
                    "Invalid choice. Please enter a number (1-4) or command (register/login/list/quit)."
                );
                continue;
            }
        };

        let outcome = match action {
            MenuAction::Register => handle_register(store, worker),
            MenuAction::Login => handle_login(store, worker),
            MenuAction::ListAccounts => {
                handle_list(store);
                Ok(())
            }
            MenuAction::Quit => break,
        };

        match outcome {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        }
    }

    println!("Goodbye!");
    Ok(())
}
