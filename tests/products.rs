mod common;

use axum::http::{Method, StatusCode};
use common::{CONSUMER_KEY, CONSUMER_SECRET, app, app_for, send, test_config};
use press_proxy::config::ErrorStatusPolicy;
use serde_json::{Value, json};
use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PRODUCTS_PATH: &str = "/wp-json/wc/v3/products";

#[tokio::test]
async fn home_page_answers() {
    let server = MockServer::start().await;
    let (status, body) = send(app(&server), Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"msg": "Home Page"}));
}

#[tokio::test]
async fn products_are_listed_with_service_credentials() {
    let server = MockServer::start().await;
    let products = json!([{"id": 7, "name": "Widget"}]);
    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .and(basic_auth(CONSUMER_KEY, CONSUMER_SECRET))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(app(&server), Method::GET, "/products?page=2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, products);
}

#[tokio::test]
async fn query_string_auth_sends_credentials_as_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{PRODUCTS_PATH}/7")))
        .and(query_param("consumer_key", CONSUMER_KEY))
        .and(query_param("consumer_secret", CONSUMER_SECRET))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = test_config(&server.uri());
    config.woocommerce_query_string_auth = true;

    let (status, body) = send(app_for(config), Method::GET, "/products/7", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 7}));

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn product_read_failure_returns_500() {
    let server = MockServer::start().await;
    let upstream_error = json!({
        "code": "woocommerce_rest_product_invalid_id",
        "message": "Invalid ID.",
        "data": {"status": 404}
    });
    Mock::given(method("GET"))
        .and(path(format!("{PRODUCTS_PATH}/404")))
        .respond_with(ResponseTemplate::new(404).set_body_json(upstream_error.clone()))
        .mount(&server)
        .await;

    let (status, body) = send(app(&server), Method::GET, "/products/404", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Error Fetching Products", "error": upstream_error}));
}

#[tokio::test]
async fn product_list_failure_returns_500() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PRODUCTS_PATH))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"code": "woocommerce_rest_cannot_view"})),
        )
        .mount(&server)
        .await;

    let (status, body) = send(app(&server), Method::GET, "/products", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "woocommerce_rest_cannot_view");
}

#[tokio::test]
async fn always_200_policy_hides_product_read_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{PRODUCTS_PATH}/404")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"code": "invalid"})))
        .mount(&server)
        .await;

    let mut config = test_config(&server.uri());
    config.error_status_policy = ErrorStatusPolicy::Always200;

    let (status, body) = send(app_for(config), Method::GET, "/products/404", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Error Fetching Products");
}

#[tokio::test]
async fn adding_a_product_renames_price() {
    let server = MockServer::start().await;
    let created = json!({"id": 8, "name": "Widget", "regular_price": "9.99"});
    Mock::given(method("POST"))
        .and(path(PRODUCTS_PATH))
        .and(basic_auth(CONSUMER_KEY, CONSUMER_SECRET))
        .and(body_json(json!({
            "name": "Widget",
            "regular_price": "9.99",
            "description": "d",
            "sku": "W1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(created.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(
        app(&server),
        Method::POST,
        "/products/add",
        Some(json!({"name": "Widget", "price": "9.99", "description": "d", "sku": "W1"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Product is Added Successfully", "productAddedInfo": created})
    );

    let requests = server.received_requests().await.unwrap();
    let sent: Value = requests[0].body_json().unwrap();
    assert!(sent.get("price").is_none());
}

#[tokio::test]
async fn adding_a_product_failure_keeps_status_200() {
    let server = MockServer::start().await;
    let upstream_error = json!({
        "code": "product_invalid_sku",
        "message": "Invalid or duplicated SKU."
    });
    Mock::given(method("POST"))
        .and(path(PRODUCTS_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(upstream_error.clone()))
        .mount(&server)
        .await;

    let (status, body) = send(
        app(&server),
        Method::POST,
        "/products/add",
        Some(json!({"name": "Widget", "price": "9.99", "sku": "W1"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Error Adding Product", "error": upstream_error}));
}

#[tokio::test]
async fn updating_a_product_sends_only_changed_fields() {
    let server = MockServer::start().await;
    let updated = json!({"id": 7, "regular_price": "12.50"});
    Mock::given(method("PATCH"))
        .and(path(format!("{PRODUCTS_PATH}/7")))
        .and(body_json(json!({"regular_price": "12.50"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(
        app(&server),
        Method::PATCH,
        "/products/update/7",
        Some(json!({"price": "12.50"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Product is Updated Successfully", "productUpdatedInfo": updated})
    );
}

#[tokio::test]
async fn deleting_a_product_always_forces() {
    let server = MockServer::start().await;
    let deleted = json!({"id": 7, "name": "Widget"});
    Mock::given(method("DELETE"))
        .and(path(format!("{PRODUCTS_PATH}/7")))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(deleted.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = send(
        app(&server),
        Method::DELETE,
        "/products/delete/7",
        Some(json!({"force": false})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Product is Deleted Successfully", "productDeletedInfo": deleted})
    );
}

#[tokio::test]
async fn deleting_a_missing_product_is_wrapped() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{PRODUCTS_PATH}/404")))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let (status, body) = send(app(&server), Method::DELETE, "/products/delete/404", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Error Deleting Product", "error": "not found"})
    );
}

#[tokio::test]
async fn large_upstream_error_body_is_relayed_intact() {
    let server = MockServer::start().await;
    let page = "x".repeat(2 * 1024 * 1024);
    Mock::given(method("GET"))
        .and(path(format!("{PRODUCTS_PATH}/1")))
        .respond_with(ResponseTemplate::new(502).set_body_string(page.clone()))
        .mount(&server)
        .await;

    let (status, body) = send(app(&server), Method::GET, "/products/1", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Error Fetching Products");
    assert_eq!(body["error"], Value::String(page));
}

#[tokio::test]
async fn get_on_the_add_route_is_not_read_as_a_product_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{PRODUCTS_PATH}/add")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 0})))
        .expect(0)
        .mount(&server)
        .await;

    let (status, _) = send(app(&server), Method::GET, "/products/add", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
