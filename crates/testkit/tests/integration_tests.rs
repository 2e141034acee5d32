//! Integration tests for the test kit's public API.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use datapoint_testkit::{
    assert_json_subset, assert_subset, build_mock_response, check_subset,
    fixtures::{ok_response, synthetic_dataset},
    generate_series_points, generate_synthetic_series, KeyPath, MockHttpError, MockResponse,
    MockResponseParams, Record, SeriesConfig, SeriesPoint, SubsetError, TestkitError,
    TestkitResult,
};
use rstest::rstest;
use serde_json::{json, Value};
use tracing_test::traced_test;

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

#[rstest]
fn test_dataset_contains_expected_point(synthetic_dataset: Vec<Record>) {
    assert_subset(
        &synthetic_dataset[3],
        &record(json!({"id": "test_3", "value": 30, "metadata": {"version": "1.0"}})),
    );
}

#[rstest]
fn test_dataset_rejects_wrong_metadata(synthetic_dataset: Vec<Record>) {
    let err = check_subset(
        &synthetic_dataset[0],
        &record(json!({"metadata": {"source": "prod"}})),
    )
    .unwrap_err();

    assert_eq!(err.path(), "metadata.source");
    assert_eq!(
        err.to_string(),
        "Value mismatch at 'metadata.source': expected \"prod\", got \"test\""
    );
}

#[rstest]
fn test_dataset_missing_key(synthetic_dataset: Vec<Record>) {
    let err = check_subset(&synthetic_dataset[0], &record(json!({"battery": 100}))).unwrap_err();
    assert!(matches!(err, SubsetError::MissingKey { .. }));
    assert_eq!(err.to_string(), "Key 'battery' not found in actual record");
}

#[rstest]
fn test_series_with_explicit_range() {
    let start = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 2, 11, 0, 0, 0).unwrap();
    let series = generate_synthetic_series(5, Some(start), Some(end));

    let timestamps: Vec<DateTime<Utc>> = series
        .iter()
        .map(|r| r["timestamp"].as_str().unwrap().parse().unwrap())
        .collect();
    assert_eq!(timestamps[0], start);
    assert_eq!(timestamps[4], Utc.with_ymd_and_hms(2024, 2, 9, 0, 0, 0).unwrap());
    assert!(timestamps.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[rstest]
fn test_series_config_from_json() -> TestkitResult<()> {
    let config = SeriesConfig::from_json_str(
        r#"{"count": 3, "start_date": "2024-01-01T00:00:00Z", "end_date": "2024-01-04T00:00:00Z", "source": "device"}"#,
    )?;
    let points = generate_series_points(&config);

    assert_eq!(points.len(), 3);
    assert_json_subset!(
        points,
        json!([
            {"id": "test_0", "timestamp": "2024-01-01T00:00:00.000000Z", "value": 0,
             "metadata": {"source": "device", "version": "1.0"}},
            {"id": "test_1", "timestamp": "2024-01-02T00:00:00.000000Z", "value": 10,
             "metadata": {"source": "device", "version": "1.0"}},
            {"id": "test_2", "timestamp": "2024-01-03T00:00:00.000000Z", "value": 20,
             "metadata": {"source": "device", "version": "1.0"}},
        ])
    );
    Ok(())
}

#[rstest]
fn test_not_found_response() {
    let response = build_mock_response(MockResponseParams {
        status_code: 404,
        text: Some("not found".to_string()),
        ..MockResponseParams::default()
    });

    assert_eq!(response.status_code, 404);
    assert_eq!(response.text, "not found");
    assert!(response.json().is_empty());
}

fn fetch_token(response: &MockResponse) -> TestkitResult<String> {
    let body = response.error_for_status()?.json();
    let token = body
        .get("token")
        .and_then(Value::as_str)
        .ok_or_else(|| TestkitError::SerializationError("token missing".to_string()))?;
    Ok(token.to_string())
}

#[rstest]
fn test_error_for_status_converts_into_testkit_error() {
    let unauthorized = build_mock_response(MockResponseParams {
        status_code: 401,
        text: Some("bad credentials".to_string()),
        ..MockResponseParams::default()
    });
    let err = fetch_token(&unauthorized).unwrap_err();
    assert!(matches!(
        err,
        TestkitError::Http(MockHttpError::AuthenticationError(ref msg)) if msg == "bad credentials"
    ));

    let login = build_mock_response(MockResponseParams {
        json_data: Some(record(json!({"token": "abc"}))),
        headers: Some(HashMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )])),
        ..MockResponseParams::default()
    });
    assert_eq!(fetch_token(&login).unwrap(), "abc");
}

#[rstest]
fn test_subset_error_converts_into_testkit_error() {
    fn check(actual: &Record) -> TestkitResult<()> {
        check_subset(actual, &record(json!({"value": 1})))?;
        Ok(())
    }

    let err = check(&record(json!({"value": 2}))).unwrap_err();
    assert!(matches!(err, TestkitError::Subset(SubsetError::ValueMismatch { .. })));
    assert_eq!(err.to_string(), "Value mismatch at 'value': expected 1, got 2");
}

#[rstest]
fn test_ok_response_record(ok_response: MockResponse) {
    assert_subset(
        &ok_response.to_record(),
        &record(json!({"status_code": 200, "json": {}, "text": "", "headers": {}})),
    );
}

#[rstest]
#[should_panic(expected = "Type mismatch at 'metadata': expected a record, got \"flat\"")]
fn test_assert_subset_type_mismatch_panics() {
    assert_subset(
        &record(json!({"metadata": "flat"})),
        &record(json!({"metadata": {"source": "test"}})),
    );
}

#[test]
#[traced_test]
fn test_generation_is_logged() {
    generate_synthetic_series(2, None, None);
    assert!(logs_contain("generating synthetic series"));
}

#[test]
#[traced_test]
fn test_subset_failure_is_logged() {
    let _ = check_subset(&record(json!({"a": 1})), &record(json!({"b": 1})));
    assert!(logs_contain("subset check failed"));
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_public_types_are_send_sync() {
    assert_send_sync::<MockResponse>();
    assert_send_sync::<MockResponseParams>();
    assert_send_sync::<MockHttpError>();
    assert_send_sync::<SubsetError>();
    assert_send_sync::<KeyPath>();
    assert_send_sync::<SeriesConfig>();
    assert_send_sync::<SeriesPoint>();
    assert_send_sync::<TestkitError>();
}
