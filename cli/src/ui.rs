use colored::Colorize;
use std::io::{self, Write};

/// Print a status message for an operation that is underway
pub fn status_message(message: &str) {
    println!("{} {} ... ", "⏳".yellow(), message.bright_white());
    let _ = io::stdout().flush();
}

/// Print a success message
pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

/// Print a warning message
pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print a simple informational message
pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// Print a dimmed detail line, used by the commands behind their
/// verbose flag
pub fn detail_message(message: &str) {
    println!("   {}", message.dimmed());
}

/// Print a section header to separate logical sections of output
pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {title} ====").cyan().bold());
}
