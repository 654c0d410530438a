// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! NetWitness connector binary entry point.
//!
//! Runs a single action the way the platform would: load the asset
//! configuration, open the vault, execute the action, print the JSON
//! report. Exits 0 when the action succeeded, 1 otherwise.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use netwitness_connector::cli::Cli;
use netwitness_connector::config::AssetConfig;
use netwitness_connector::progress::{NullProgress, ProgressSink, StderrProgress};
use netwitness_connector::{NetWitnessConnector, SoarConnector};
use soar_vault::DirVault;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match AssetConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let vault = Arc::new(DirVault::open(&cli.vault_dir)?);

    let param: serde_json::Value = match &cli.params {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => serde_json::Value::Object(serde_json::Map::new()),
    };

    let progress: Arc<dyn ProgressSink> = if cli.verbose {
        Arc::new(StderrProgress)
    } else {
        Arc::new(NullProgress)
    };

    let mut connector =
        NetWitnessConnector::new(config, vault, &cli.container).with_progress(progress);
    connector.initialize()?;

    let report = connector.handle_action(&cli.action, param).await;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.succeeded() {
        Ok(())
    } else {
        std::process::exit(1);
    }
}
