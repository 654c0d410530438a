// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Connector error taxonomy.
//!
//! Every failure surfaces as a failed action report carrying the error's
//! display message; nothing is retried automatically.

use thiserror::Error;

/// Parameter validation failures. These never reach the network.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("This action requires a session ID, query, or start and end times")]
    MissingParams,

    #[error("Session ID parameter has a bad range - smaller number should come first")]
    BadRange,

    #[error("Given time range is invalid - times appear to be reversed")]
    ReversedRange,

    #[error("Invalid parameters: {0}")]
    InvalidParam(String),

    #[error("Session IDs must be a comma-separated list of IDs or an ID range")]
    InvalidSessionIds,
}

/// Errors raised while executing an action.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Request timed out. Try limiting the scope of the search")]
    Timeout,

    #[error("Connection failed")]
    Connection(#[source] reqwest::Error),

    #[error("API failed\nStatus code: {status}\nDetail: {detail}")]
    Server { status: u16, detail: String },

    #[error("Response from server was incorrect data type")]
    UnexpectedContentType,

    #[error("Unable to get Vault item details. Details: {0}")]
    Vault(#[from] soar_vault::VaultError),

    #[error("Error while creating file: {0}")]
    File(#[from] std::io::Error),

    #[error("Unsupported action {0}")]
    UnsupportedAction(String),

    #[error("Connector is not initialized")]
    NotInitialized,
}

/// User-facing detail for a non-200 appliance response.
pub(crate) fn server_error_detail(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Invalid username or password",
        404 => "No data found",
        _ => "Unknown error occurred",
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
