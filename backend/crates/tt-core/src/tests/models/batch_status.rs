use crate::{Batch, BatchStatus, StatusTone};

use std::str::FromStr;

use serde_json::json;

#[test]
fn test_batch_status_labels() {
    assert_eq!(BatchStatus::Scheduled.label(), "scheduled");
    assert_eq!(BatchStatus::Running.label(), "running");
    assert_eq!(BatchStatus::Completed.label(), "completed");
    assert_eq!(BatchStatus::Cancelled.label(), "cancelled");
}

#[test]
fn test_batch_status_tones() {
    assert_eq!(BatchStatus::Scheduled.tone(), StatusTone::Default);
    assert_eq!(BatchStatus::Running.tone(), StatusTone::Primary);
    assert_eq!(BatchStatus::Completed.tone(), StatusTone::Success);
    assert_eq!(BatchStatus::Cancelled.tone(), StatusTone::Error);
}

#[test]
fn test_batch_status_from_str() {
    assert_eq!(
        BatchStatus::from_str("running").unwrap(),
        BatchStatus::Running
    );
    assert!(BatchStatus::from_str("paused").is_err());
}

#[test]
fn test_batch_defaults_missing_status_to_scheduled() {
    let batch: Batch = serde_json::from_value(json!({
        "id": 3,
        "name": "Rust Cohort",
        "program": 1,
        "start_date": "2025-02-01",
        "end_date": null
    }))
    .unwrap();

    assert_eq!(batch.status, BatchStatus::Scheduled);
    assert_eq!(batch.max_capacity, 0);
    assert_eq!(
        batch.start_date,
        chrono::NaiveDate::from_ymd_opt(2025, 2, 1)
    );
}
