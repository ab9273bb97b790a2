//! Notification collaborators.

use owo_colors::OwoColorize;
use std::sync::{Arc, Mutex};

use super::{status_icon, Status};

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Failure,
    Warning,
}

/// A shown notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

/// Success/failure/warning toasts.
pub trait Notifier: std::fmt::Debug {
    fn notify(&self, level: Level, message: &str);

    fn success(&self, message: &str) {
        self.notify(Level::Success, message);
    }

    fn failure(&self, message: &str) {
        self.notify(Level::Failure, message);
    }

    fn warning(&self, message: &str) {
        self.notify(Level::Warning, message);
    }
}

/// Prints notifications to stdout with status icons.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, level: Level, message: &str) {
        match level {
            Level::Success => println!("{} {}", status_icon(Status::Success).green().bold(), message),
            Level::Failure => println!("{} {}", status_icon(Status::Error).red().bold(), message),
            Level::Warning => println!("{} {}", status_icon(Status::Warning).yellow().bold(), message),
        }
    }
}

/// Keeps notifications in memory. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications().pop()
    }

    pub fn count(&self, level: Level) -> usize {
        self.notifications()
            .iter()
            .filter(|n| n.level == level)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: Level, message: &str) {
        if let Ok(mut log) = self.log.lock() {
            log.push(Notification {
                level,
                message: message.to_string(),
            });
        }
    }
}
