// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture request resolution.
//!
//! Turns the optional action parameters (session ids, filter query, time
//! window, output filename) into the request body for the appliance's
//! `/sdk/packets` endpoint plus the filename the capture is staged under.
//! Branch priority: session ids, then query, then time window.

use crate::error::ValidationError;
use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timestamp format accepted for `start_time`/`end_time`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepted shapes for `session_ids`: a comma list or an `a-b` range
const SESSION_IDS_PATTERN: &str = r"^\s*\d+\s*(,\s*\d+\s*)*$|^\s*\d+\s*-\s*\d+\s*$";

/// Default filenames are `netwitness-<suffix>`
const FILENAME_PREFIX: &str = "netwitness";

/// Session-id suffixes are truncated to this many characters
const SESSION_IDS_FILENAME_LIMIT: usize = 50;

/// Optional parameters for the capture-fetch actions
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CaptureParams {
    /// Comma-separated session ids or an `a-b` range
    #[serde(default)]
    pub session_ids: Option<String>,

    /// Free-text filter query
    #[serde(default)]
    pub query: Option<String>,

    /// Window start, `YYYY-MM-DD HH:MM:SS`
    #[serde(default)]
    pub start_time: Option<String>,

    /// Window end, `YYYY-MM-DD HH:MM:SS`
    #[serde(default)]
    pub end_time: Option<String>,

    /// Explicit output filename
    #[serde(default)]
    pub file_name: Option<String>,
}

/// Kind of capture to request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureKind {
    Packet,
    Log,
}

impl CaptureKind {
    /// File extension appended to filenames lacking one
    pub fn extension(self) -> &'static str {
        match self {
            Self::Packet => "pcap",
            Self::Log => "json",
        }
    }

    /// Value of the `render` request field
    pub fn render(self) -> &'static str {
        match self {
            Self::Packet => "pcap",
            Self::Log => "application/json",
        }
    }
}

/// Resolved request body and output filename
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureSpec {
    /// Request body fields in server order
    pub body: Vec<(&'static str, String)>,

    /// Filename the capture is staged and vaulted under
    pub filename: String,
}

impl CaptureSpec {
    /// Look a body field up by name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.body
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Resolve capture parameters into a request spec.
///
/// At least one of session ids, query, or a complete time window must be
/// present. Validation happens entirely here; nothing touches the network.
pub fn resolve(params: &CaptureParams, kind: CaptureKind) -> Result<CaptureSpec, ValidationError> {
    let session_ids = non_empty(params.session_ids.as_deref());
    let query = non_empty(params.query.as_deref());
    let window = match (
        non_empty(params.start_time.as_deref()),
        non_empty(params.end_time.as_deref()),
    ) {
        (Some(start), Some(end)) => Some((start, end)),
        _ => None,
    };

    let mut body: Vec<(&'static str, String)> = Vec::new();

    let default_name = if let Some(ids) = session_ids {
        validate_session_ids(ids)?;
        body.push(("sessions", ids.to_string()));
        if let Some(q) = query {
            body.push(("where", q.to_string()));
        }
        session_ids_filename(ids)
    } else if let Some(q) = query {
        let mut clause = q.to_string();
        if let Some((start, end)) = window {
            parse_timestamp(start)?;
            parse_timestamp(end)?;
            clause.push_str(&format!(" && time=\"{start}\"-\"{end}\""));
        }
        body.push(("where", clause));
        format!("{FILENAME_PREFIX}-{}", Uuid::new_v4())
    } else if let Some((start, end)) = window {
        let t1 = parse_timestamp(start)?;
        let t2 = parse_timestamp(end)?;
        if t1 > t2 {
            return Err(ValidationError::ReversedRange);
        }
        body.push(("time1", start.to_string()));
        body.push(("time2", end.to_string()));
        format!("{FILENAME_PREFIX}-{start}_{end}").replace('/', "-")
    } else {
        return Err(ValidationError::MissingParams);
    };

    let mut filename = match non_empty(params.file_name.as_deref()) {
        Some(explicit) => explicit.to_string(),
        None => default_name,
    };
    if !filename.ends_with(".pcap") && !filename.ends_with(".json") {
        filename = format!("{}.{}", filename, kind.extension());
    }

    body.push(("render", kind.render().to_string()));

    Ok(CaptureSpec { body, filename })
}

/// Validate the session-ids string: shape, then range ordering
pub fn validate_session_ids(ids: &str) -> Result<(), ValidationError> {
    let pattern = Regex::new(SESSION_IDS_PATTERN)
        .map_err(|e| ValidationError::InvalidParam(e.to_string()))?;
    if !pattern.is_match(ids) {
        return Err(ValidationError::InvalidSessionIds);
    }

    if let Some((low, high)) = ids.split_once('-') {
        let low: u64 = low
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| ValidationError::InvalidParam(e.to_string()))?;
        let high: u64 = high
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| ValidationError::InvalidParam(e.to_string()))?;
        if low > high {
            return Err(ValidationError::BadRange);
        }
    }

    Ok(())
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, ValidationError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|e| ValidationError::InvalidParam(format!("'{value}': {e}")))
}

fn session_ids_filename(ids: &str) -> String {
    let suffix: String = ids
        .replace(',', "_")
        .chars()
        .take(SESSION_IDS_FILENAME_LIMIT)
        .collect();
    format!("{FILENAME_PREFIX}-{suffix}")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "capture_spec_tests.rs"]
mod tests;
