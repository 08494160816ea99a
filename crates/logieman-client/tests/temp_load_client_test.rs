//! Contract tests for TempLoadClient against a mock temp-loads API.
//!
//! ## Endpoints Tested
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | POST   | `/api/temp-loads/create` | `create_*` |

use std::time::Duration;

use chrono::NaiveDate;
use logieman_client::{ClientConfig, ClientError, LoadClient};
use logieman_core::{
    device_fingerprint, validate, EnvironmentSignals, LoadFormState, SubmissionPayload,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base: &str, timeout_ms: u64) -> LoadClient {
    let config = ClientConfig {
        base_url: base.parse().unwrap(),
        timeout_ms,
        dashboard_redirect_base: None,
    };
    LoadClient::new(config).unwrap()
}

fn payload(hsn: Option<&str>) -> SubmissionPayload {
    let form = LoadFormState {
        source_country: "India".into(),
        destination_country: "Nepal".into(),
        weight_kg: "1800".into(),
        load_type: "Less Than Truckload (LTL)".into(),
        material_type: "Tea chests".into(),
        scheduled_date: "2026-11-02".into(),
        hsn_code: hsn.map(str::to_string),
    };
    let load = validate(&form, NaiveDate::from_ymd_opt(2026, 11, 1).unwrap()).unwrap();
    let fingerprint = device_fingerprint(&EnvironmentSignals {
        screen_width: 1920,
        screen_height: 1080,
        color_depth: 24,
        timezone_offset_minutes: -330,
        language: "en-IN".into(),
    });
    SubmissionPayload::new(fingerprint, &load)
}

// ── POST /api/temp-loads/create ──────────────────────────────────────

#[tokio::test]
async fn create_posts_json_payload_and_returns_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/temp-loads/create"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(serde_json::json!({
            "deviceHash": "df-2bd7f63a",
            "loadData": {
                "sourceCountry": "India",
                "destCountry": "Nepal",
                "scheduledDate": "2026-11-02",
                "weight": "1800",
                "material": "Tea chests",
                "loadType": "LTL"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "success": true,
            "tempLoadId": "tl-001"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri(), 5_000);
    let body = client.temp_loads().create(&payload(None)).await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["tempLoadId"], "tl-001");
}

#[tokio::test]
async fn create_sends_hsn_code_when_supplied() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/temp-loads/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri(), 5_000);
    client.temp_loads().create(&payload(Some("0902"))).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["loadData"]["materialHSNCode"], "0902");
}

#[tokio::test]
async fn create_respects_base_path_prefix() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/gateway/api/temp-loads/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": 1})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&format!("{}/gateway", mock_server.uri()), 5_000);
    let body = client.temp_loads().create(&payload(None)).await.unwrap();
    assert_eq!(body["ok"], 1);
}

#[tokio::test]
async fn create_empty_body_decodes_as_null() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/temp-loads/create"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri(), 5_000);
    let body = client.temp_loads().create(&payload(None)).await.unwrap();
    assert!(body.is_null());
}

#[tokio::test]
async fn create_handles_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/temp-loads/create"))
        .respond_with(ResponseTemplate::new(422).set_body_string("invalid load"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri(), 5_000);
    let err = client.temp_loads().create(&payload(None)).await.unwrap_err();
    assert_eq!(err.status(), Some(422));
    match err {
        ClientError::ApiError { status, body, .. } => {
            assert_eq!(status, 422);
            assert_eq!(body, "invalid load");
        }
        other => panic!("expected ApiError, got: {other:?}"),
    }
}

#[tokio::test]
async fn create_rejects_non_json_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/temp-loads/create"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri(), 5_000);
    let err = client.temp_loads().create(&payload(None)).await.unwrap_err();
    assert!(
        matches!(err, ClientError::Deserialization { .. }),
        "expected Deserialization, got: {err:?}"
    );
}

#[tokio::test]
async fn create_times_out_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/temp-loads/create"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_millis(1_000)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri(), 100);
    let err = client.temp_loads().create(&payload(None)).await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got: {err:?}");
}

#[tokio::test]
async fn create_unreachable_host_is_transport_error() {
    let client = test_client("http://127.0.0.1:1", 2_000);
    let err = client.temp_loads().create(&payload(None)).await.unwrap_err();
    assert!(matches!(err, ClientError::Http { .. }), "got: {err:?}");
    assert!(!err.is_timeout());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn client_exposes_dashboard_redirect_base() {
    let config = ClientConfig::local_mock(19000)
        .unwrap()
        .with_dashboard("https://dashboard.example.com".parse().unwrap());
    let client = LoadClient::new(config).unwrap();
    assert_eq!(
        client.dashboard_redirect_base().map(url::Url::as_str),
        Some("https://dashboard.example.com/")
    );
}
