// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Vault item records and the metadata attached when storing them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A stored evidence file, addressed by container and vault id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VaultItem {
    /// Content-derived identifier (hex SHA-256 of the stored bytes)
    pub vault_id: String,

    /// Container the item is filed under
    pub container_id: String,

    /// File name as reported back to the platform
    pub name: String,

    /// Size of the stored file in bytes
    pub size: u64,

    /// File types the item contains (e.g. `pcap`, `json`)
    #[serde(default)]
    pub contains: Vec<String>,

    /// Location of the stored file on disk
    pub path: PathBuf,

    /// Action that produced the item, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_name: Option<String>,

    /// Run identifier of the producing invocation, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_run_id: Option<String>,
}

/// Metadata supplied alongside a file when adding it to the vault.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VaultMetadata {
    /// File types the item contains
    #[serde(default)]
    pub contains: Vec<String>,

    /// Name of the action storing the file
    #[serde(default)]
    pub action_name: Option<String>,

    /// Run identifier of the storing invocation
    #[serde(default)]
    pub app_run_id: Option<String>,
}
