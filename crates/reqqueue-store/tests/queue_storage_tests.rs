#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use reqqueue_core::{EmploymentRequest, ExErrorKind, PriorityQueue, Status};
use reqqueue_store::{read_records, ArrayStorage, QueueStorage};
use std::fs;
use tempfile::TempDir;

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn request(name: &str, hours_ago: i64, status: Status) -> EmploymentRequest {
    EmploymentRequest::new(name, base() - Duration::hours(hours_ago)).with_status(status)
}

fn by_value(mut records: Vec<EmploymentRequest>) -> Vec<EmploymentRequest> {
    records.sort_by(|a, b| {
        (&a.applicant, a.date, a.status.label()).cmp(&(&b.applicant, b.date, b.status.label()))
    });
    records
}

#[test]
fn test_empty_file_reads_as_empty_queue() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("queue.json");
    fs::write(&path, "").unwrap();

    let storage = QueueStorage::<EmploymentRequest>::open(&path).unwrap();

    assert!(storage.read().unwrap().is_empty());
}

#[test]
fn test_write_two_then_read_back() {
    let dir = TempDir::new().unwrap();
    let storage = QueueStorage::open(dir.path().join("queue.json")).unwrap();
    let x = request("x", 1, Status::Pending);
    let y = request("y", 2, Status::Rejected);
    let queue: PriorityQueue<_> = vec![x.clone(), y.clone()].into_iter().collect();

    storage.write(&queue).unwrap();
    let restored = storage.read().unwrap();

    assert_eq!(by_value(restored.to_sorted_vec()), by_value(vec![x, y]));
}

#[test]
fn test_disk_order_does_not_constrain_queue_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("queue.json");
    let low = request("low", 0, Status::Rejected);
    let high = request("high", 0, Status::InterviewScheduled);
    ArrayStorage::open(&path)
        .unwrap()
        .write(&[low.clone(), high.clone()])
        .unwrap();

    let queue = QueueStorage::<EmploymentRequest>::open(&path)
        .unwrap()
        .read()
        .unwrap();

    assert_eq!(queue.peek_head(), Some(&high));
    assert_eq!(queue.peek_tail(), Some(low));
}

#[test]
fn test_file_uses_json_status_spelling() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("queue.json");
    let storage = QueueStorage::open(&path).unwrap();
    let queue: PriorityQueue<_> = std::iter::once(request("amy", 0, Status::InterviewScheduled)).collect();

    storage.write(&queue).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"Interview scheduled\""));
    assert!(text.contains("\"2026-10-19T12:00:00\""));
}

#[test]
fn test_hand_written_file_with_defaults_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("import.json");
    fs::write(
        &path,
        r#"[{"applicant": "ann", "date": "2026-10-18T08:30:00"}, {"applicant": "ben", "date": "2026-10-18T09:00:00", "status": "InterviewScheduled"}]"#,
    )
    .unwrap();

    let records: Vec<EmploymentRequest> = read_records(&path).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].status, Status::Pending);
    assert_eq!(records[1].status, Status::InterviewScheduled);
}

#[test]
fn test_malformed_record_is_reported_with_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"[{"date": "2026-10-18T08:30:00"}]"#).unwrap();

    let err = read_records::<EmploymentRequest>(&path).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Serialization);
    assert!(err.message().contains("applicant"));
}

fn arb_request() -> impl Strategy<Value = EmploymentRequest> {
    (
        "[a-z]{1,8}",
        0i64..10_000,
        prop_oneof![
            Just(Status::Pending),
            Just(Status::InterviewScheduled),
            Just(Status::Rejected),
        ],
    )
        .prop_map(|(name, minutes, status)| {
            EmploymentRequest::new(name, base() - Duration::minutes(minutes)).with_status(status)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_write_read_preserves_multiset(records in prop::collection::vec(arb_request(), 0..25)) {
        let dir = TempDir::new().unwrap();
        let storage = QueueStorage::open(dir.path().join("queue.json")).unwrap();
        let queue: PriorityQueue<_> = records.iter().cloned().collect();

        storage.write(&queue).unwrap();
        let restored = storage.read().unwrap();

        prop_assert_eq!(by_value(restored.to_sorted_vec()), by_value(records));
    }
}
