//! Integration tests for the typed client and the row executor.

use serde_json::json;
use shipstation_api::execution::{execute_rows, ExecutionOptions, OperationRequest};
use shipstation_api::models::{Shipment, ShipmentStatus, Warehouse};
use shipstation_api::pagination::PaginationOptions;
use shipstation_api::{ApiError, ApiKey, BaseUrl, ShipStationClient, ShipStationConfig};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_config(server: &MockServer, key: &str) -> ShipStationConfig {
    ShipStationConfig::builder()
        .api_key(ApiKey::new(key).unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

fn create_client(server: &MockServer) -> ShipStationClient {
    ShipStationClient::new(&create_config(server, "test-api-key")).unwrap()
}

#[tokio::test]
async fn test_verify_credentials_accepts_carriers_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/carriers"))
        .and(header("api-key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"carriers": []})))
        .expect(1)
        .mount(&server)
        .await;

    create_client(&server).verify_credentials().await.unwrap();
}

#[tokio::test]
async fn test_verify_credentials_rejects_unauthorized_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/carriers"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "request_id": "r-1",
            "errors": [{"error_code": "unauthorized", "message": "The API key is invalid."}]
        })))
        .mount(&server)
        .await;

    let client = ShipStationClient::new(&create_config(&server, "wrong-key")).unwrap();
    let error = client.verify_credentials().await.unwrap_err();

    assert!(matches!(error, ApiError::InvalidCredentials));
    assert_eq!(error.to_string(), "Invalid API key or insufficient permissions");
}

#[tokio::test]
async fn test_typed_list_and_get() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/warehouses"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "warehouses": [
                {"warehouse_id": "w-1", "name": "Main", "is_default": true},
                {"warehouse_id": "w-2", "name": "Overflow"}
            ],
            "total": 2,
            "page": 1,
            "pages": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/shipments/se-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shipment_id": "se-1",
            "shipment_status": "shipped",
            "ship_date": "2024-05-01T00:00:00Z"
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);

    let page = client
        .list::<Warehouse>(PaginationOptions::default())
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].is_default, Some(true));
    assert!(!page.has_next_page());

    let shipment: Shipment = client.get("se-1").await.unwrap();
    assert_eq!(shipment.shipment_status, Some(ShipmentStatus::Shipped));
}

#[tokio::test]
async fn test_void_label_sends_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v2/labels/se-9/void"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "approved": true,
            "message": "Request for refund submitted."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = create_client(&server).void_label("se-9").await.unwrap();
    assert_eq!(body["approved"], true);
}

#[tokio::test]
async fn test_rows_continue_on_fail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tags": [{"name": "rush"}, {"name": "gift"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/tags/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let rows = [
        json!({"resource": "tag", "operation": "list", "options": {}}),
        json!({"resource": "tag", "operation": "get", "id": "missing"}),
        json!({"resource": "carrier", "operation": "delete", "id": "se-1"}),
    ];

    let output = execute_rows(
        client.transport(),
        rows.iter().map(OperationRequest::from_node_parameters),
        ExecutionOptions {
            continue_on_fail: true,
        },
    )
    .await
    .unwrap();

    assert_eq!(output.len(), 4);
    assert_eq!(output[0].json, json!({"name": "rush"}));
    assert_eq!(output[1].paired_item, 0);
    assert_eq!(
        output[2].json,
        json!({"error": "Not Found: Resource not found"})
    );
    assert_eq!(output[2].paired_item, 1);
    assert_eq!(output[3].paired_item, 2);
    assert!(output[3].json["error"]
        .as_str()
        .unwrap()
        .starts_with("Unknown operation: delete"));
}

#[tokio::test]
async fn test_rows_stop_without_continue_on_fail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/batches/b-1/process"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Batch has no shipments"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/batches/b-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"batch_id": "b-2"})))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let rows = [
        json!({"resource": "batch", "operation": "process", "id": "b-1"}),
        json!({"resource": "batch", "operation": "get", "id": "b-2"}),
    ];

    let error = execute_rows(
        client.transport(),
        rows.iter().map(OperationRequest::from_node_parameters),
        ExecutionOptions::default(),
    )
    .await
    .unwrap_err();

    assert_eq!(error.item_index, 0);
    assert_eq!(error.source.to_string(), "Batch has no shipments");
}
