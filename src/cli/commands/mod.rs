pub mod agenda;
pub mod appointments;
pub mod block;
pub mod book;
pub mod cancel;
pub mod config;
pub mod db;
pub mod init;
pub mod log;
pub mod rule;
pub mod slots;

use crate::ui::messages::warning;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes" | "s" | "sim")
    } else {
        false
    }
}
