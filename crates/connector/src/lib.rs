// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! RSA NetWitness connector for a SOAR platform.
//!
//! Translates platform action invocations (`test_asset_connectivity`,
//! `get_pcap`, `get_log_capture`, `upload_file`, `restart_device`) into REST
//! calls against a NetWitness appliance and normalizes the responses,
//! staging downloaded captures into the platform's evidence vault.

pub mod badcap;
pub mod capture_spec;
pub mod cli;
pub mod config;
pub mod connector;
pub mod error;
pub mod output;
pub mod progress;
pub mod rest;

pub use connector::{NetWitnessConnector, SoarConnector};
pub use error::{ConnectorError, ValidationError};
pub use output::ActionReport;
