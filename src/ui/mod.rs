//! User-facing surfaces: buttons, notifications and terminal output helpers.

mod button;
mod notify;

pub use button::{hide_button, show_button, Button, HIDDEN_CLASS};
pub use notify::{Level, Notification, Notifier, RecordingNotifier, TerminalNotifier};

use owo_colors::OwoColorize;

/// Status icons for different operations.
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Success => "✓",
        Status::Error => "✗",
        Status::Warning => "⚠",
        Status::Info => "ℹ",
        Status::Loading => "◐",
        Status::Search => "🔍",
    }
}

/// Status types for colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Warning,
    Info,
    Loading,
    Search,
}

/// Print a styled status message.
pub fn print_status(status: Status, msg: &str) {
    let icon = status_icon(status);
    match status {
        Status::Success => println!("{} {}", icon.green().bold(), msg),
        Status::Error => println!("{} {}", icon.red().bold(), msg),
        Status::Warning => println!("{} {}", icon.yellow().bold(), msg),
        Status::Info => println!("{} {}", icon.cyan().bold(), msg),
        Status::Loading => println!("{} {}", icon.cyan(), msg),
        Status::Search => println!("{} {}", icon.yellow(), msg),
    }
}

/// Print a section header.
pub fn print_section(title: &str) {
    println!();
    println!("{}", format!("━━━ {} ━━━", title).bold().cyan());
}

/// Print a divider line.
pub fn print_divider() {
    println!("{}", "─".repeat(80).dimmed());
}

/// Print the page/position summary after a handler ran.
pub fn print_page_summary(query: &str, page: u32, last_page: Option<u32>, rendered: usize) {
    let last = last_page
        .map(|p| p.to_string())
        .unwrap_or_else(|| "?".to_string());
    println!(
        "{} \"{}\" page {}/{} ({} images shown)",
        status_icon(Status::Search).yellow(),
        truncate_with_ellipsis(query, 40).cyan().bold(),
        page.to_string().green(),
        last,
        rendered.to_string().green().bold()
    );
}

/// Truncate text with ellipsis if it exceeds max length.
pub fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
