#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use press_proxy::{
    AppState,
    config::{Config, ErrorStatusPolicy},
    create_router,
};
use serde_json::Value;
use tower::ServiceExt;
use url::Url;
use wiremock::MockServer;

pub const USERS_PATH: &str = "/wp-json/wp/v2/users";
pub const TOKEN_PATH: &str = "/wp-json/jwt-auth/v1/token";
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin-pass";
pub const CONSUMER_KEY: &str = "ck_test";
pub const CONSUMER_SECRET: &str = "cs_test";

pub fn test_config(base: &str) -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        wordpress_users_url: Url::parse(&format!("{base}{USERS_PATH}")).unwrap(),
        wordpress_token_url: Url::parse(&format!("{base}{TOKEN_PATH}")).unwrap(),
        wordpress_admin_username: ADMIN_USERNAME.to_string(),
        wordpress_admin_password: ADMIN_PASSWORD.to_string(),
        woocommerce_site_url: Url::parse(base).unwrap(),
        woocommerce_api_version: "wc/v3".to_string(),
        woocommerce_consumer_key: CONSUMER_KEY.to_string(),
        woocommerce_consumer_secret: CONSUMER_SECRET.to_string(),
        woocommerce_query_string_auth: false,
        error_status_policy: ErrorStatusPolicy::Legacy,
        upstream_timeout_secs: Some(5),
    }
}

pub fn app_for(config: Config) -> Router {
    create_router(AppState::new(config).unwrap())
}

pub fn app(server: &MockServer) -> Router {
    app_for(test_config(&server.uri()))
}

/// 直接驱动路由，返回状态码和 JSON 响应体
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
