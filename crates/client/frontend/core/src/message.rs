//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

use chrono::NaiveTime;

/// Severity level for UI messages produced from session results.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    pub timestamp: Option<NaiveTime>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, timestamp: Option<NaiveTime>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            timestamp,
            level,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, None, MessageLevel::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, None, MessageLevel::Success)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, None, MessageLevel::Warning)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, None, MessageLevel::Error)
    }

    #[must_use]
    pub fn at(mut self, timestamp: NaiveTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = MessageEntry>) {
        for entry in entries {
            self.push(entry);
        }
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
