// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Connectivity test action against a mock appliance.

mod common;

use common::connector_for;
use netwitness_connector::SoarConnector;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn connectivity_test_succeeds_on_200() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sdk/packets"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut connector = connector_for(&server.uri(), &dir.path().join("vault"));
    let report = connector
        .handle_action("test_asset_connectivity", json!({}))
        .await;

    assert!(report.succeeded());
    assert_eq!(report.message, "Connectivity test succeeded");
}

#[tokio::test]
async fn connectivity_test_sends_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sdk/packets"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut connector = connector_for(&server.uri(), &dir.path().join("vault"));
    connector
        .handle_action("test_asset_connectivity", json!({}))
        .await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let auth = requests[0]
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(auth.starts_with("Basic "), "missing basic auth: {auth}");
}

#[tokio::test]
async fn unauthorized_maps_to_credentials_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sdk/packets"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut connector = connector_for(&server.uri(), &dir.path().join("vault"));
    let report = connector
        .handle_action("test_asset_connectivity", json!({}))
        .await;

    assert!(!report.succeeded());
    assert!(report.message.starts_with("Connectivity test failed"));
    assert!(report.message.contains("Invalid username or password"));
}

#[tokio::test]
async fn unreachable_host_maps_to_connection_failure() {
    // Nothing listens on this port
    let dir = tempfile::tempdir().unwrap();
    let mut connector = connector_for("http://127.0.0.1:9", &dir.path().join("vault"));
    let report = connector
        .handle_action("test_asset_connectivity", json!({}))
        .await;

    assert!(!report.succeeded());
    assert!(report.message.contains("Connection failed"));
}
