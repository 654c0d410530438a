// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Progress reporting toward the platform.
//!
//! The host surfaces these messages to the operator while an action runs;
//! they are separate from diagnostic logging.

use parking_lot::Mutex;

/// Sink for operator-visible progress messages
pub trait ProgressSink: Send + Sync {
    /// Record a persistent progress message
    fn save_progress(&self, message: &str);

    /// Record a transient progress message
    fn send_progress(&self, message: &str) {
        self.save_progress(message);
    }
}

/// Discards all progress messages
#[derive(Clone, Copy, Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn save_progress(&self, _message: &str) {}
}

/// Prints progress messages to stderr
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrProgress;

impl ProgressSink for StderrProgress {
    fn save_progress(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Collects progress messages for assertions in tests
#[derive(Debug, Default)]
pub struct CollectingProgress {
    messages: Mutex<Vec<String>>,
}

impl CollectingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages recorded so far
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Whether any recorded message contains `needle`
    pub fn saw(&self, needle: &str) -> bool {
        self.messages.lock().iter().any(|m| m.contains(needle))
    }
}

impl ProgressSink for CollectingProgress {
    fn save_progress(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
