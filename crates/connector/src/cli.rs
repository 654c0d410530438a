// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing for the action test harness.

use clap::Parser;
use std::path::PathBuf;

/// NetWitness connector test harness
#[derive(Parser, Debug)]
#[command(
    name = "netwitness-connector",
    version,
    about = "Run a NetWitness connector action against a configured asset"
)]
pub struct Cli {
    /// Action identifier to execute (e.g. test_asset_connectivity, get_pcap)
    #[arg(value_name = "ACTION")]
    pub action: String,

    /// Asset configuration file (TOML or JSON)
    #[arg(long, env = "NETWITNESS_CONFIG")]
    pub config: PathBuf,

    /// JSON file with action parameters
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Directory backing the evidence vault
    #[arg(long, env = "NETWITNESS_VAULT_DIR")]
    pub vault_dir: PathBuf,

    /// Container to file capture evidence under
    #[arg(long, default_value = "default")]
    pub container: String,

    /// Print progress messages while the action runs
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
