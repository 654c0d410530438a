// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Action result records handed back to the platform.

use serde::{Deserialize, Serialize};

/// Outcome of an action invocation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Success,
    Failed,
}

/// Evidence record attached to a capture report
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRecord {
    /// Size of the capture file in bytes
    pub size: u64,

    /// Stored file type (`pcap` or `json`)
    #[serde(rename = "type")]
    pub file_type: String,

    /// Vault id of the stored (or reused) evidence file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_id: Option<String>,

    /// Filename the capture was vaulted under
    pub file_name: String,
}

/// Summary fields for a capture report
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSummary {
    /// Whether capture data was available for the given parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_availability: Option<bool>,
}

impl ActionSummary {
    /// True when no summary field is set
    pub fn is_empty(&self) -> bool {
        self.file_availability.is_none()
    }
}

/// Per-invocation action report
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionReport {
    /// Action identifier the report answers
    pub action: String,

    pub status: ActionStatus,

    /// Human-readable outcome message
    pub message: String,

    /// Evidence records produced by the action
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<CaptureRecord>,

    #[serde(default, skip_serializing_if = "ActionSummary::is_empty")]
    pub summary: ActionSummary,

    /// Parameters the action was invoked with, echoed back
    #[serde(default)]
    pub parameter: serde_json::Value,
}

impl ActionReport {
    /// Create a successful report
    pub fn success(action: &str, parameter: serde_json::Value, message: impl Into<String>) -> Self {
        Self {
            action: action.to_string(),
            status: ActionStatus::Success,
            message: message.into(),
            data: Vec::new(),
            summary: ActionSummary::default(),
            parameter,
        }
    }

    /// Create a failed report
    pub fn failed(action: &str, parameter: serde_json::Value, message: impl Into<String>) -> Self {
        Self {
            action: action.to_string(),
            status: ActionStatus::Failed,
            message: message.into(),
            data: Vec::new(),
            summary: ActionSummary::default(),
            parameter,
        }
    }

    /// Attach an evidence record
    pub fn with_record(mut self, record: CaptureRecord) -> Self {
        self.data.push(record);
        self
    }

    /// Set the capture availability summary field
    pub fn with_availability(mut self, available: bool) -> Self {
        self.summary.file_availability = Some(available);
        self
    }

    /// Whether the action succeeded
    pub fn succeeded(&self) -> bool {
        self.status == ActionStatus::Success
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
