#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use serde_json::json;

#[test]
fn test_success_report_shape() {
    let report = ActionReport::success("get_pcap", json!({"session_ids": "100"}), "done")
        .with_availability(true)
        .with_record(CaptureRecord {
            size: 128,
            file_type: "pcap".to_string(),
            vault_id: Some("abc123".to_string()),
            file_name: "netwitness-100.pcap".to_string(),
        });

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["summary"]["file_availability"], true);
    assert_eq!(value["data"][0]["type"], "pcap");
    assert_eq!(value["data"][0]["vault_id"], "abc123");
    assert_eq!(value["parameter"]["session_ids"], "100");
    assert!(report.succeeded());
}

#[test]
fn test_failed_report_shape() {
    let report = ActionReport::failed("restart_device", json!({}), "Connection failed");
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["status"], "failed");
    assert_eq!(value["message"], "Connection failed");
    assert!(!report.succeeded());
}

#[test]
fn test_empty_data_and_summary_omitted() {
    let report = ActionReport::success("test_asset_connectivity", json!({}), "ok");
    let value = serde_json::to_value(&report).unwrap();
    assert!(value.get("data").is_none());
    assert!(value.get("summary").is_none());
}

#[test]
fn test_unavailable_capture_summary_serialized() {
    let report = ActionReport::success("get_pcap", json!({}), "no data").with_availability(false);
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["summary"]["file_availability"], false);
    assert!(value.get("data").is_none());
}

#[test]
fn test_report_round_trips() {
    let report = ActionReport::success("get_log_capture", json!({"query": "q"}), "ok")
        .with_availability(true);
    let json = serde_json::to_string(&report).unwrap();
    let back: ActionReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.status, ActionStatus::Success);
    assert_eq!(back.summary.file_availability, Some(true));
}
