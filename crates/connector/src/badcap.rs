// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sentinel "no data" capture detection.
//!
//! The appliance answers some empty result sets with a fixed near-empty
//! payload instead of an error. Matching on byte length alone risks false
//! positives, so a length hit is confirmed with a SHA-256 comparison.

use sha2::{Digest, Sha256};

/// Known sentinel payloads as (byte length, lowercase hex SHA-256) pairs.
///
/// These are the wire lengths and digests of the sentinel bodies observed
/// from the appliance: a bare pcap global header for packet captures and an
/// empty JSON array for log captures.
const BUILTIN_SENTINELS: &[(usize, &str)] = &[
    (
        24,
        "acc530668c8bc60b2d229281130b1899bfc81d70fdada5c34b3236c628f739c8",
    ),
    (
        2,
        "4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945",
    ),
];

/// Table of known sentinel (length, hash) pairs
#[derive(Clone, Debug)]
pub struct SentinelTable {
    entries: Vec<(usize, String)>,
}

impl SentinelTable {
    /// Table of the sentinels observed from the appliance
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_SENTINELS
                .iter()
                .map(|(len, hash)| (*len, (*hash).to_string()))
                .collect(),
        }
    }

    /// Build a table from custom (length, hex SHA-256) pairs
    pub fn new(entries: Vec<(usize, String)>) -> Self {
        Self { entries }
    }

    /// Classify a returned payload as a sentinel "no data" response.
    ///
    /// Empty payloads are always bad. A payload whose length matches no
    /// table entry is good without hashing; a length hit is confirmed by
    /// digest before being declared bad.
    pub fn is_bad_capture(&self, payload: &[u8]) -> bool {
        if payload.is_empty() {
            return true;
        }

        if !self.entries.iter().any(|(len, _)| *len == payload.len()) {
            return false;
        }

        let digest = hex::encode(Sha256::digest(payload));
        self.entries
            .iter()
            .any(|(len, hash)| *len == payload.len() && *hash == digest)
    }
}

impl Default for SentinelTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "badcap_tests.rs"]
mod tests;
