// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

//! Shared helpers for connector integration tests.

use std::path::Path;
use std::sync::Arc;

use netwitness_connector::config::AssetConfig;
use netwitness_connector::{NetWitnessConnector, SoarConnector};
use soar_vault::DirVault;

/// A small but real-looking packet capture: global header plus one record.
/// Length (44 bytes) matches no sentinel table entry.
pub const SAMPLE_PCAP: &[u8] = &[
    // global header
    0xd4, 0xc3, 0xb2, 0xa1, 0x02, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0xff, 0xff, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
    // record header: ts=1, len=4
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00,
    0x00,
    // packet data
    0xde, 0xad, 0xbe, 0xef,
];

/// Sentinel the appliance answers packet queries with when no data matches:
/// a bare pcap global header (24 bytes)
pub const PCAP_SENTINEL: &[u8] = &[
    0xd4, 0xc3, 0xb2, 0xa1, 0x02, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0xff, 0xff, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
];

/// Build an initialized connector pointed at a mock appliance
pub fn connector_for(server_uri: &str, vault_root: &Path) -> NetWitnessConnector {
    let config = AssetConfig::new(server_uri, "admin", "secret", false).unwrap();
    let vault = DirVault::open(vault_root).unwrap();
    let mut connector = NetWitnessConnector::new(config, Arc::new(vault), "container-1");
    connector.initialize().unwrap();
    connector
}
