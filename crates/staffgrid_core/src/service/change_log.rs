//! Session change log.
//!
//! # Responsibility
//! - Keep the ordered, human-readable record of grid actions for display.
//! - Mirror every entry to the `log` facade as the developer diagnostic sink.
//!
//! # Invariants
//! - Entries are append-only and keep insertion order.
//! - Mirrored log lines are single-line and length-capped.

use crate::logging::sanitize_message;
use chrono::{DateTime, Local};
use log::{log, Level};
use std::fmt::{Display, Formatter};

const MAX_MIRRORED_MESSAGE_CHARS: usize = 240;

/// One change-log line.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeLogEntry {
    pub at: DateTime<Local>,
    pub level: Level,
    pub message: String,
}

impl Display for ChangeLogEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.at.format("%H:%M:%S"), self.message)
    }
}

/// Append-only change log owned by one grid session.
#[derive(Debug, Clone, Default)]
pub struct ChangeLog {
    entries: Vec<ChangeLogEntry>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry stamped with the current local time.
    pub fn record(&mut self, level: Level, message: impl Into<String>) -> &ChangeLogEntry {
        let message = message.into();
        log!(
            level,
            "event=grid_change module=grid status={} message={}",
            status_label(level),
            sanitize_message(&message, MAX_MIRRORED_MESSAGE_CHARS)
        );
        self.entries.push(ChangeLogEntry {
            at: Local::now(),
            level,
            message,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[ChangeLogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ChangeLogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether any entry message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|entry| entry.message.contains(needle))
    }

    /// Rendered `HH:MM:SS - message` lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

fn status_label(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "rejected",
        _ => "ok",
    }
}

#[cfg(test)]
mod tests {
    use super::ChangeLog;
    use log::Level;

    #[test]
    fn record_appends_in_order_and_renders_timestamp_prefix() {
        let mut log = ChangeLog::new();
        log.record(Level::Info, "first");
        log.record(Level::Warn, "second\nline");

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].message, "first");
        assert_eq!(log.last().unwrap().level, Level::Warn);

        let line = log.lines().remove(0);
        let (stamp, message) = line.split_once(" - ").unwrap();
        assert_eq!(stamp.len(), 8);
        assert_eq!(stamp.matches(':').count(), 2);
        assert_eq!(message, "first");
    }

    #[test]
    fn contains_matches_substrings() {
        let mut log = ChangeLog::new();
        assert!(!log.contains("Added"));
        log.record(Level::Info, "Added row: ID=4");
        assert!(log.contains("ID=4"));
    }
}
