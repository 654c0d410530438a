// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Connector contract and the NetWitness action handlers.
//!
//! The platform drives a connector through two entry points: `initialize`
//! once after configuration is validated, then `handle_action` per
//! invocation. Every handler produces an [`ActionReport`]; errors never
//! escape as panics or unhandled results.

use crate::badcap::SentinelTable;
use crate::capture_spec::{self, CaptureKind, CaptureParams};
use crate::config::AssetConfig;
use crate::error::{ConnectorError, ValidationError};
use crate::output::{ActionReport, CaptureRecord};
use crate::progress::{NullProgress, ProgressSink};
use crate::rest::{
    RestClient, CONNECTIVITY_TEST_TIMEOUT, DEFAULT_REST_TIMEOUT, ENDPOINT_GET_CAPTURE,
    ENDPOINT_RESTART, ENDPOINT_UPLOAD_PARSER,
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use soar_vault::{Vault, VaultError, VaultMetadata};
use std::sync::Arc;
use tracing::{debug, error};

pub const ACTION_TEST_CONNECTIVITY: &str = "test_asset_connectivity";
pub const ACTION_GET_PCAP: &str = "get_pcap";
pub const ACTION_GET_LOG_CAPTURE: &str = "get_log_capture";
pub const ACTION_UPLOAD_FILE: &str = "upload_file";
pub const ACTION_RESTART_DEVICE: &str = "restart_device";

const CONNECTION_TEST_MSG: &str = "Querying endpoint to test connectivity";
const TEST_CONNECTIVITY_PASS: &str = "Connectivity test succeeded";
const TEST_CONNECTIVITY_FAIL: &str = "Connectivity test failed";
const BAD_CAP_MSG: &str = "Found no capture data based on the given parameters";
const REPORT_ALREADY_AVAILABLE: &str = "Report already available in vault";
const ADDING_TO_VAULT: &str = "Adding file to vault";
const FILE_ADDED_TO_VAULT: &str = "Successfully added file to Vault";
const UPLOAD_SUCCEEDED: &str = "Feed/Parser file successfully uploaded";
const RESTART_SUCCEEDED: &str = "Device restart request sent successfully";

/// Contract a platform-hosted connector fulfills.
///
/// The host validates configuration before calling `initialize`;
/// `handle_action` is never called for a connector whose initialization
/// failed.
#[async_trait]
pub trait SoarConnector {
    /// Set up internal modules (HTTP transport) from the loaded config
    fn initialize(&mut self) -> Result<(), ConnectorError>;

    /// Execute one named action and produce its report
    async fn handle_action(&mut self, action: &str, param: Value) -> ActionReport;
}

/// Parameters for the `upload_file` action
#[derive(Clone, Debug, Deserialize)]
struct UploadParams {
    vault_id: String,
}

/// Connector for an RSA NetWitness appliance
pub struct NetWitnessConnector {
    config: AssetConfig,
    rest: Option<RestClient>,
    sentinels: SentinelTable,
    vault: Arc<dyn Vault>,
    progress: Arc<dyn ProgressSink>,
    container_id: String,
    app_run_id: Option<String>,
}

impl NetWitnessConnector {
    /// Create a connector over a validated asset configuration.
    ///
    /// Captures are filed into `container_id` of the given vault.
    pub fn new(config: AssetConfig, vault: Arc<dyn Vault>, container_id: &str) -> Self {
        Self {
            config,
            rest: None,
            sentinels: SentinelTable::builtin(),
            vault,
            progress: Arc::new(NullProgress),
            container_id: container_id.to_string(),
            app_run_id: None,
        }
    }

    /// Replace the progress sink
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// Replace the sentinel table (deployments may carry their own pairs)
    pub fn with_sentinels(mut self, sentinels: SentinelTable) -> Self {
        self.sentinels = sentinels;
        self
    }

    /// Record the invoking run id in stored vault metadata
    pub fn with_app_run_id(mut self, app_run_id: &str) -> Self {
        self.app_run_id = Some(app_run_id.to_string());
        self
    }

    fn rest(&self) -> Result<&RestClient, ConnectorError> {
        self.rest.as_ref().ok_or(ConnectorError::NotInitialized)
    }

    async fn test_connectivity(&self, param: &Value) -> Result<ActionReport, ConnectorError> {
        self.progress.save_progress(CONNECTION_TEST_MSG);
        let rest = self.rest()?;
        self.progress
            .save_progress(&format!("Configured URL: {}", rest.base_url()));

        match rest
            .get(ENDPOINT_GET_CAPTURE, None, CONNECTIVITY_TEST_TIMEOUT)
            .await
        {
            Ok(_) => {
                self.progress.save_progress(TEST_CONNECTIVITY_PASS);
                Ok(ActionReport::success(
                    ACTION_TEST_CONNECTIVITY,
                    param.clone(),
                    TEST_CONNECTIVITY_PASS,
                ))
            }
            Err(e) => {
                self.progress.save_progress(&e.to_string());
                Ok(ActionReport::failed(
                    ACTION_TEST_CONNECTIVITY,
                    param.clone(),
                    format!("{TEST_CONNECTIVITY_FAIL}: {e}"),
                ))
            }
        }
    }

    async fn get_capture(
        &self,
        param: &Value,
        kind: CaptureKind,
    ) -> Result<ActionReport, ConnectorError> {
        let action = match kind {
            CaptureKind::Packet => ACTION_GET_PCAP,
            CaptureKind::Log => ACTION_GET_LOG_CAPTURE,
        };

        let params: CaptureParams = serde_json::from_value(param.clone())
            .map_err(|e| ValidationError::InvalidParam(e.to_string()))?;
        let spec = capture_spec::resolve(&params, kind)?;
        debug!(filename = %spec.filename, "resolved capture request");

        let response = self
            .rest()?
            .get(ENDPOINT_GET_CAPTURE, Some(&spec.body), DEFAULT_REST_TIMEOUT)
            .await?;

        if !response.has_capture_content_type() {
            return Err(ConnectorError::UnexpectedContentType);
        }

        if self.sentinels.is_bad_capture(&response.body) {
            return Ok(
                ActionReport::success(action, param.clone(), BAD_CAP_MSG).with_availability(false)
            );
        }

        // Staging directory is removed on every exit path below
        let staging = tempfile::tempdir()?;
        let staged_path = staging.path().join(&spec.filename);
        tokio::fs::write(&staged_path, &response.body).await?;

        let size = response.body.len() as u64;
        let file_type = kind.extension().to_string();

        // Reuse an existing entry matching by name and byte size; the check
        // is deliberately not content-based
        for item in self.vault.items(&self.container_id)? {
            if item.name == spec.filename && item.size == size {
                self.progress.send_progress(REPORT_ALREADY_AVAILABLE);
                return Ok(
                    ActionReport::success(action, param.clone(), REPORT_ALREADY_AVAILABLE)
                        .with_availability(true)
                        .with_record(CaptureRecord {
                            size: item.size,
                            file_type,
                            vault_id: Some(item.vault_id),
                            file_name: spec.filename,
                        }),
                );
            }
        }

        self.progress.send_progress(ADDING_TO_VAULT);
        let stored = self.vault.add(
            &self.container_id,
            &staged_path,
            &spec.filename,
            VaultMetadata {
                contains: vec![file_type.clone()],
                action_name: Some(action.to_string()),
                app_run_id: self.app_run_id.clone(),
            },
        )?;
        self.progress.send_progress(FILE_ADDED_TO_VAULT);

        Ok(
            ActionReport::success(action, param.clone(), FILE_ADDED_TO_VAULT)
                .with_availability(true)
                .with_record(CaptureRecord {
                    size: stored.size,
                    file_type,
                    vault_id: Some(stored.vault_id),
                    file_name: spec.filename,
                }),
        )
    }

    async fn upload_file(&self, param: &Value) -> Result<ActionReport, ConnectorError> {
        let params: UploadParams = serde_json::from_value(param.clone())
            .map_err(|e| ValidationError::InvalidParam(e.to_string()))?;

        let item = match self.vault.find(&params.vault_id) {
            Ok(item) => item,
            Err(e @ VaultError::NotFound(_)) => {
                return Ok(ActionReport::failed(
                    ACTION_UPLOAD_FILE,
                    param.clone(),
                    e.to_string(),
                ));
            }
            Err(e) => return Err(e.into()),
        };

        let bytes = tokio::fs::read(&item.path).await?;
        let part = reqwest::multipart::Part::bytes(bytes).file_name(item.name.clone());
        let form = reqwest::multipart::Form::new().part("file", part);

        self.rest()?
            .post_multipart(ENDPOINT_UPLOAD_PARSER, form, DEFAULT_REST_TIMEOUT)
            .await?;

        Ok(ActionReport::success(
            ACTION_UPLOAD_FILE,
            param.clone(),
            UPLOAD_SUCCEEDED,
        ))
    }

    async fn restart_device(&self, param: &Value) -> Result<ActionReport, ConnectorError> {
        self.rest()?
            .get(ENDPOINT_RESTART, None, DEFAULT_REST_TIMEOUT)
            .await?;

        Ok(ActionReport::success(
            ACTION_RESTART_DEVICE,
            param.clone(),
            RESTART_SUCCEEDED,
        ))
    }
}

#[async_trait]
impl SoarConnector for NetWitnessConnector {
    fn initialize(&mut self) -> Result<(), ConnectorError> {
        self.rest = Some(RestClient::new(&self.config)?);
        debug!(url = %self.config.url, "connector initialized");
        Ok(())
    }

    async fn handle_action(&mut self, action: &str, param: Value) -> ActionReport {
        debug!(action, "handling action");

        let result = match action {
            ACTION_TEST_CONNECTIVITY => self.test_connectivity(&param).await,
            ACTION_GET_PCAP => self.get_capture(&param, CaptureKind::Packet).await,
            ACTION_GET_LOG_CAPTURE => self.get_capture(&param, CaptureKind::Log).await,
            ACTION_UPLOAD_FILE => self.upload_file(&param).await,
            ACTION_RESTART_DEVICE => self.restart_device(&param).await,
            other => Err(ConnectorError::UnsupportedAction(other.to_string())),
        };

        match result {
            Ok(report) => report,
            Err(e) => {
                error!(action, error = %e, "action failed");
                ActionReport::failed(action, param, e.to_string())
            }
        }
    }
}

#[cfg(test)]
#[path = "connector_tests.rs"]
mod tests;
