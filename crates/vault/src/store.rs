// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Vault storage trait and the directory-backed implementation.

use crate::item::{VaultItem, VaultMetadata};
use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the JSON index persisted at the vault root
const INDEX_FILE: &str = "index.json";

/// Errors raised by vault operations
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Vault I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Vault index error: {0}")]
    Index(#[from] serde_json::Error),

    #[error("Specified vault ID not found in vault")]
    NotFound(String),
}

/// Storage facility for evidence files.
///
/// Items live under a container; vault ids are stable identifiers handed
/// back to the platform. Implementations must be safe to share across
/// threads.
pub trait Vault: Send + Sync {
    /// List all items filed under a container.
    fn items(&self, container_id: &str) -> Result<Vec<VaultItem>, VaultError>;

    /// Look an item up by its vault id.
    fn find(&self, vault_id: &str) -> Result<VaultItem, VaultError>;

    /// Store the file at `source` under `container_id` as `name`.
    fn add(
        &self,
        container_id: &str,
        source: &Path,
        name: &str,
        metadata: VaultMetadata,
    ) -> Result<VaultItem, VaultError>;
}

/// Directory-backed vault.
///
/// Files are copied into `<root>/<container_id>/<name>`; item records are
/// persisted as a JSON index at the vault root so the vault survives
/// process restarts. Vault ids are the hex SHA-256 of the stored bytes.
pub struct DirVault {
    root: PathBuf,
    state: RwLock<Vec<VaultItem>>,
}

impl DirVault {
    /// Open a vault rooted at `root`, creating the directory and loading
    /// any existing index.
    pub fn open(root: &Path) -> Result<Self, VaultError> {
        fs::create_dir_all(root)?;

        let index_path = root.join(INDEX_FILE);
        let items: Vec<VaultItem> = if index_path.exists() {
            serde_json::from_str(&fs::read_to_string(&index_path)?)?
        } else {
            Vec::new()
        };

        Ok(Self {
            root: root.to_path_buf(),
            state: RwLock::new(items),
        })
    }

    /// Number of items in the vault across all containers.
    pub fn len(&self) -> usize {
        self.state.read().len()
    }

    /// Check whether the vault holds no items.
    pub fn is_empty(&self) -> bool {
        self.state.read().is_empty()
    }

    fn persist(&self, items: &[VaultItem]) -> Result<(), VaultError> {
        let json = serde_json::to_string_pretty(items)?;
        fs::write(self.root.join(INDEX_FILE), json)?;
        Ok(())
    }
}

impl Vault for DirVault {
    fn items(&self, container_id: &str) -> Result<Vec<VaultItem>, VaultError> {
        Ok(self
            .state
            .read()
            .iter()
            .filter(|item| item.container_id == container_id)
            .cloned()
            .collect())
    }

    fn find(&self, vault_id: &str) -> Result<VaultItem, VaultError> {
        self.state
            .read()
            .iter()
            .find(|item| item.vault_id == vault_id)
            .cloned()
            .ok_or_else(|| VaultError::NotFound(vault_id.to_string()))
    }

    fn add(
        &self,
        container_id: &str,
        source: &Path,
        name: &str,
        metadata: VaultMetadata,
    ) -> Result<VaultItem, VaultError> {
        let bytes = fs::read(source)?;
        let vault_id = hex::encode(Sha256::digest(&bytes));

        let container_dir = self.root.join(container_id);
        fs::create_dir_all(&container_dir)?;
        let dest = container_dir.join(name);
        fs::write(&dest, &bytes)?;

        let item = VaultItem {
            vault_id,
            container_id: container_id.to_string(),
            name: name.to_string(),
            size: bytes.len() as u64,
            contains: metadata.contains,
            path: dest,
            action_name: metadata.action_name,
            app_run_id: metadata.app_run_id,
        };

        let mut state = self.state.write();
        state.push(item.clone());
        self.persist(&state)?;

        Ok(item)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
