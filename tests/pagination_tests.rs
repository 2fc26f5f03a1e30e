//! Integration tests for pagination-aware listing.
//!
//! Tests cover:
//! - Return-all concatenation across pages
//! - Stopping when a page omits its paging fields
//! - Aborting on the first failing page
//! - Inventory's single limit request
//! - Single-page query parameters

use serde_json::json;
use shipstation_api::clients::HttpClient;
use shipstation_api::pagination::{fetch_all, fetch_page, PageRequest, PaginationOptions};
use shipstation_api::resources::{ApiError, ResourceKind};
use shipstation_api::{ApiKey, BaseUrl, ShipStationConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> HttpClient {
    let config = ShipStationConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    HttpClient::new(&config).unwrap()
}

async fn mount_page(server: &MockServer, resource: &str, page: u32, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v2/{resource}")))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_return_all_concatenates_three_pages() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "shipments",
        1,
        json!({"shipments": [{"shipment_id": "se-1"}, {"shipment_id": "se-2"}], "page": 1, "pages": 3}),
    )
    .await;
    mount_page(
        &server,
        "shipments",
        2,
        json!({"shipments": [{"shipment_id": "se-3"}], "page": 2, "pages": 3}),
    )
    .await;
    mount_page(
        &server,
        "shipments",
        3,
        json!({"shipments": [{"shipment_id": "se-4"}], "page": 3, "pages": 3}),
    )
    .await;

    let items = fetch_all(&create_client(&server), ResourceKind::Shipment)
        .await
        .unwrap();

    let ids: Vec<&str> = items
        .iter()
        .map(|item| item["shipment_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["se-1", "se-2", "se-3", "se-4"]);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_return_all_requests_max_page_size() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/batches"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "batches": [{"batch_id": "b-1"}],
            "page": 1,
            "pages": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = fetch_all(&create_client(&server), ResourceKind::Batch)
        .await
        .unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_return_all_stops_when_pages_is_missing() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "labels",
        1,
        json!({"labels": [{"label_id": "l-1"}], "page": 1, "pages": 4}),
    )
    .await;
    mount_page(&server, "labels", 2, json!({"labels": [{"label_id": "l-2"}], "page": 2})).await;
    Mock::given(method("GET"))
        .and(path("/v2/labels"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"labels": []})))
        .expect(0)
        .mount(&server)
        .await;

    let items = fetch_all(&create_client(&server), ResourceKind::Label)
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_error_on_second_page_aborts_walk() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "products",
        1,
        json!({"products": [{"product_id": "p-1"}], "page": 1, "pages": 3}),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/v2/products"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "database unavailable"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/products"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
        .expect(0)
        .mount(&server)
        .await;

    let error = fetch_all(&create_client(&server), ResourceKind::Product)
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), Some(500));
    assert_eq!(error.to_string(), "database unavailable");
}

#[tokio::test]
async fn test_inventory_return_all_is_one_limit_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/inventory"))
        .and(query_param("limit", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory": [{"sku": "A", "available": 3}, {"sku": "B", "available": 0}],
            "page": 1,
            "pages": 7
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = fetch_all(&create_client(&server), ResourceKind::Inventory)
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("limit=1000"));
}

#[tokio::test]
async fn test_single_page_sends_normalized_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/tags"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"tag_id": "t-1"},
            {"tag_id": "t-2"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let request = PageRequest::normalize(PaginationOptions::page(2, 5000));
    let page = fetch_page(&create_client(&server), ResourceKind::Tag, &request)
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.status, 200);
    assert_eq!(page.meta.pages, None);
}

#[tokio::test]
async fn test_return_all_follows_float_page_numbers() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "warehouses",
        1,
        json!({"warehouses": [{"warehouse_id": "w-1"}], "page": 1.0, "pages": 2.0}),
    )
    .await;
    mount_page(
        &server,
        "warehouses",
        2,
        json!({"warehouses": [{"warehouse_id": "w-2"}], "page": 2.0, "pages": 2.0}),
    )
    .await;

    let items = fetch_all(&create_client(&server), ResourceKind::Warehouse)
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_single_page_with_empty_body_is_no_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/carriers"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let result = fetch_page(
        &create_client(&server),
        ResourceKind::Carrier,
        &PageRequest::default(),
    )
    .await;

    assert!(matches!(result, Err(ApiError::NoData)));
}
