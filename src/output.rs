//! User-facing status lines.

use owo_colors::OwoColorize;

/// Announces the merge request about to be opened.
pub fn print_merge_request(source: &str, target: &str) {
    println!("{}", format!("🍺 {} ➜ {}", source, target).green());
}

pub fn print_error(message: &str) {
    eprintln!("{}", message.red());
}
