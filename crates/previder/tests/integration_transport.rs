//! Integration tests for the transport client using wiremock
//!
//! Covers request construction (headers, query parameters, bodies) and the
//! classification of responses into success, API errors and decode errors.

mod common;

use std::time::Duration;

use pretty_assertions::assert_eq;
use previder::{Client, Error, JsonValue, PageRequest, VirtualNetworkUpdate};
use serde::Deserialize;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

#[tokio::test]
async fn test_every_request_carries_json_and_auth_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/iaas/virtualnetwork/abc"))
        .and(header("content-type", "application/json; charset=utf-8"))
        .and(header("accept", "application/json; charset=utf-8"))
        .and(header("x-auth-token", common::test_token().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"name":"backend"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let named: Option<Named> = client
        .get("v2/iaas/virtualnetwork/abc", None)
        .await
        .expect("Request failed");

    assert_eq!(named.unwrap().name, "backend");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("x-customerid").is_none());
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_tenant_header_sent_for_valid_customer_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/iaas/task"))
        .and(header("x-customerid", common::CUSTOMER_ID))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .auth_token(common::test_token())
        .base_url(mock_server.uri())
        .customer_id(common::CUSTOMER_ID)
        .build()
        .unwrap();

    let tasks = client.tasks().list().await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_tenant_header_omitted_for_malformed_customer_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;

    for customer_id in ["", "short", "5d6f7a8b9c0d1e2f3a4b5c6d7"] {
        let client = Client::builder()
            .auth_token(common::test_token())
            .base_url(mock_server.uri())
            .customer_id(customer_id)
            .build()
            .unwrap();
        client.tasks().list().await.unwrap();
    }

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    for request in requests {
        assert!(request.headers.get("x-customerid").is_none());
    }
}

#[tokio::test]
async fn test_customer_id_that_is_not_a_header_value_is_dropped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .auth_token(common::test_token())
        .base_url(mock_server.uri())
        .customer_id("0123456789abcdef0123456\n")
        .build()
        .expect("a bad customer id must not fail construction");
    client.tasks().list().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("x-customerid").is_none());
}

#[tokio::test]
async fn test_page_request_adds_exactly_four_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/iaas/virtualnetwork"))
        .and(query_param("page", "2"))
        .and(query_param("size", "50"))
        .and(query_param("sort", "+name"))
        .and(query_param("query", "foo"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::load_response_fixture("virtual_network_page")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let request = PageRequest::builder()
        .page(2u32)
        .size(50u32)
        .sort("+name")
        .query("foo")
        .build()
        .unwrap();

    client.virtual_networks().page(&request).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query_pairs().count(), 4);
}

#[tokio::test]
async fn test_empty_page_fields_are_still_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/iaas/virtualnetwork"))
        .and(query_param("sort", ""))
        .and(query_param("query", ""))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::load_response_fixture("virtual_network_page")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    client
        .virtual_networks()
        .page(&PageRequest::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_post_serializes_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/iaas/virtualnetwork"))
        .and(body_json(serde_json::json!({"name": "backend", "type": "VLAN"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::load_response_fixture("virtual_network_task")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let task = client
        .virtual_networks()
        .create(&VirtualNetworkUpdate::new("backend", "VLAN"))
        .await
        .unwrap();

    assert_eq!(task.task.id, "61f0e1d2c3b4a59687766554");
    assert_eq!(task.virtual_network_name.as_deref(), Some("backend"));
    assert!(!task.task.is_terminal());
}

#[tokio::test]
async fn test_delete_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/iaas/virtualmachine/vm-1/disk"))
        .and(body_json(serde_json::json!({"ids": ["d-1"]})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let body = serde_json::json!({"ids": ["d-1"]});
    let result: Option<JsonValue> = client
        .delete_with_body("v2/iaas/virtualmachine/vm-1/disk", &body)
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_empty_success_body_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v2/core/customer/c-1/settings"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/core/customer/c-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);

    let updated: Option<Named> = client
        .put("v2/core/customer/c-1/settings", &serde_json::json!({"hidingPrices": true}))
        .await
        .unwrap();
    assert!(updated.is_none());

    client.customers().delete("c-1").await.unwrap();
}

#[tokio::test]
async fn test_structured_404_becomes_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/iaas/virtualnetwork/60a1b2c3d4e5f60718293a4b"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(common::load_response_fixture("error_not_found")),
        )
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let error = client
        .virtual_networks()
        .get("60a1b2c3d4e5f60718293a4b")
        .await
        .unwrap_err();

    match &error {
        Error::Api { code, message } => {
            assert_eq!(*code, 404);
            assert!(message.contains("not found"));
            assert!(message.starts_with("[Previder API]"));
            assert!(message.ends_with(" - Not Found"));
        }
        _ => panic!("Expected Api error, got {error:?}"),
    }
    assert!(error.is_not_found());
}

#[tokio::test]
async fn test_unparseable_error_body_keeps_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let error = client.tasks().get("t-1").await.unwrap_err();

    assert!(matches!(error, Error::Decode { status: Some(502), .. }));
}

#[tokio::test]
async fn test_empty_error_body_keeps_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/iaas/task"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let error = client.tasks().list().await.unwrap_err();

    assert!(
        matches!(error, Error::Decode { status: Some(503), .. }),
        "got {error:?}"
    );
    assert_eq!(error.status(), Some(503));
}

#[tokio::test]
async fn test_undecodable_success_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"name": 42}"#))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let result: previder::Result<Option<Named>> = client.get("v2/iaas/anything", None).await;

    assert!(matches!(result, Err(Error::Decode { status: Some(200), .. })));
}

#[tokio::test]
async fn test_required_body_missing_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/iaas/task/t-1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let error = client.tasks().get("t-1").await.unwrap_err();

    assert!(matches!(error, Error::Decode { .. }));
}

#[tokio::test]
async fn test_api_info_from_root() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"version":"2.4.1","name":"Previder Portal"}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let info = client.api_info().await.unwrap();

    assert_eq!(info.version, "2.4.1");
    assert_eq!(info.name, "Previder Portal");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    common::init_tracing();
    let client = Client::builder()
        .auth_token(common::test_token())
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let error = client.tasks().get("t-1").await.unwrap_err();

    assert!(matches!(error, Error::Connection(_)), "got {error:?}");
    assert!(error.is_transport());
}

#[tokio::test]
async fn test_slow_response_is_request_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .auth_token(common::test_token())
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let error = client.tasks().list().await.unwrap_err();

    assert!(matches!(error, Error::Timeout(d) if d == Duration::from_millis(200)));
}

#[tokio::test]
async fn test_client_is_shared_across_tasks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/iaas/task"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(8)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.tasks().list().await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }
}
