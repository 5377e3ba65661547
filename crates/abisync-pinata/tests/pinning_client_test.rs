//! Contract tests for PinataClient against the Pinata pinning API.
//!
//! wiremock stands in for `api.pinata.cloud` and the gateway. Every path,
//! header, and body shape below is what the live API expects.
//!
//! ## Endpoints Tested
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET    | `/data/pinList` | `list_pins_*` |
//! | DELETE | `/pinning/unpin/{hash}` | `unpin_*` |
//! | POST   | `/pinning/pinJSONToIPFS` | `pin_json_*` |
//! | GET    | `/data/testAuthentication` | `test_authentication_*` |
//! | GET    | `/ipfs/{hash}` (gateway) | `fetch_*` |

use abisync_core::PinName;
use abisync_pinata::{PinataClient, PinataConfig, PinataError, PinningService};
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> PinataClient {
    let config = PinataConfig::local_mock(&mock_server.uri(), "test-key", "test-secret").unwrap();
    PinataClient::new(config).unwrap()
}

fn paged_client(mock_server: &MockServer, page_limit: u32) -> PinataClient {
    let mut config =
        PinataConfig::local_mock(&mock_server.uri(), "test-key", "test-secret").unwrap();
    config.page_limit = page_limit;
    PinataClient::new(config).unwrap()
}

fn name(s: &str) -> PinName {
    PinName::new(s).unwrap()
}

fn row(hash: &str, pin_name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": format!("id-{hash}"),
        "ipfs_pin_hash": hash,
        "size": 128,
        "user_id": "user-1",
        "date_pinned": "2026-03-01T10:15:30.123Z",
        "date_unpinned": null,
        "metadata": {"name": pin_name, "keyvalues": null}
    })
}

// ── GET /data/pinList ────────────────────────────────────────────────

#[tokio::test]
async fn list_pins_sends_filter_and_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/pinList"))
        .and(query_param("status", "pinned"))
        .and(query_param("metadata[name]", "abis"))
        .and(header("pinata_api_key", "test-key"))
        .and(header("pinata_secret_api_key", "test-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "rows": [row("QmOld", "abis")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let pins = client.list_pins(&name("abis")).await.unwrap();
    assert_eq!(pins.len(), 1);
    assert_eq!(pins[0].ipfs_pin_hash, "QmOld");
    assert_eq!(pins[0].size, Some(128));
}

#[tokio::test]
async fn list_pins_returns_empty_for_unknown_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/pinList"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"count": 0, "rows": []})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.list_pins(&name("nothing")).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_pins_walks_every_page() {
    let mock_server = MockServer::start().await;

    for (offset, rows) in [
        ("0", vec![row("Qm1", "abis"), row("Qm2", "abis")]),
        ("2", vec![row("Qm3", "abis"), row("Qm4", "abis")]),
        ("4", vec![row("Qm5", "abis")]),
    ] {
        Mock::given(method("GET"))
            .and(path("/data/pinList"))
            .and(query_param("pageLimit", "2"))
            .and(query_param("pageOffset", offset))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"count": 5, "rows": rows})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = paged_client(&mock_server, 2);
    let hashes: Vec<_> = client
        .list_pins(&name("abis"))
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.ipfs_pin_hash)
        .collect();
    assert_eq!(hashes, vec!["Qm1", "Qm2", "Qm3", "Qm4", "Qm5"]);
}

#[tokio::test]
async fn list_pins_stops_when_count_reached_on_full_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/pinList"))
        .and(query_param("pageOffset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 2,
            "rows": [row("Qm1", "abis"), row("Qm2", "abis")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = paged_client(&mock_server, 2);
    assert_eq!(client.list_pins(&name("abis")).await.unwrap().len(), 2);
}

#[tokio::test]
async fn list_pins_drops_partial_name_matches() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/pinList"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 2,
            "rows": [row("QmExact", "abis"), row("QmOther", "abis-staging")]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let pins = client.list_pins(&name("abis")).await.unwrap();
    assert_eq!(pins.len(), 1);
    assert_eq!(pins[0].ipfs_pin_hash, "QmExact");
}

#[tokio::test]
async fn list_pins_surfaces_401() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/pinList"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"error":{"reason":"INVALID_CREDENTIALS"}}"#),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    match client.list_pins(&name("abis")).await.unwrap_err() {
        PinataError::ApiError {
            endpoint,
            status,
            body,
        } => {
            assert_eq!(endpoint, "GET /data/pinList");
            assert_eq!(status, 401);
            assert!(body.contains("INVALID_CREDENTIALS"));
        }
        other => panic!("expected ApiError, got: {other:?}"),
    }
}

#[tokio::test]
async fn list_pins_rejects_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/pinList"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.list_pins(&name("abis")).await.unwrap_err();
    assert!(matches!(err, PinataError::Deserialization { .. }), "got: {err:?}");
}

// ── DELETE /pinning/unpin/{hash} ─────────────────────────────────────

#[tokio::test]
async fn unpin_sends_delete_for_hash() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/pinning/unpin/QmOld"))
        .and(header_exists("pinata_api_key"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.unpin("QmOld").await.unwrap();
}

#[tokio::test]
async fn unpin_of_unknown_hash_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/pinning/unpin/QmGone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("CURRENT_USER_HAS_NOT_PINNED_CID"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.unpin("QmGone").await.unwrap_err();
    assert!(matches!(err, PinataError::ApiError { status: 404, .. }), "got: {err:?}");
}

// ── POST /pinning/pinJSONToIPFS ──────────────────────────────────────

#[tokio::test]
async fn pin_json_sends_metadata_and_cid_v0() {
    let mock_server = MockServer::start().await;
    let content = serde_json::json!({"contracts": {"Token": {"abi": [], "path": ".", "extension": ".sol"}}});

    Mock::given(method("POST"))
        .and(path("/pinning/pinJSONToIPFS"))
        .and(body_json(serde_json::json!({
            "pinataContent": content,
            "pinataMetadata": {"name": "abis"},
            "pinataOptions": {"cidVersion": 0}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "IpfsHash": "QmNew",
            "PinSize": 87,
            "Timestamp": "2026-03-01T10:15:30.123Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let resp = client.pin_json(&content, &name("abis")).await.unwrap();
    assert_eq!(resp.ipfs_hash, "QmNew");
    assert_eq!(resp.pin_size, Some(87));
}

#[tokio::test]
async fn pin_json_surfaces_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pinning/pinJSONToIPFS"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .pin_json(&serde_json::json!({}), &name("abis"))
        .await
        .unwrap_err();
    assert!(matches!(err, PinataError::ApiError { status: 500, .. }), "got: {err:?}");
}

// ── GET /data/testAuthentication ─────────────────────────────────────

#[tokio::test]
async fn test_authentication_returns_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/testAuthentication"))
        .and(header("pinata_api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Congratulations! You are communicating with the Pinata API!"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let resp = client.pinning().test_authentication().await.unwrap();
    assert!(resp.message.starts_with("Congratulations"));
}

// ── Gateway ──────────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_reads_json_from_gateway_without_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ipfs/QmNew"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"contracts": {}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let body = client.fetch("QmNew").await.unwrap();
    assert_eq!(body, serde_json::json!({"contracts": {}}));

    let requests: Vec<Request> = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("pinata_api_key"));
    assert!(!requests[0].headers.contains_key("pinata_secret_api_key"));
}

#[tokio::test]
async fn fetch_surfaces_gateway_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ipfs/QmMissing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.fetch("QmMissing").await.unwrap_err();
    assert!(matches!(err, PinataError::ApiError { status: 404, .. }), "got: {err:?}");
}

#[tokio::test]
async fn unreachable_api_is_a_transport_error() {
    let config = PinataConfig::local_mock("http://127.0.0.1:1", "k", "s").unwrap();
    let client = PinataClient::new(config).unwrap();
    let err = client.list_pins(&name("abis")).await.unwrap_err();
    assert!(matches!(err, PinataError::Http { .. }), "got: {err:?}");
}
