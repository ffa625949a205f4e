// 上游 HTTP 接口
// 用户目录（WordPress）和商品目录（WooCommerce）

pub mod woocommerce;
pub mod wordpress;

pub use woocommerce::WooCommerceClient;
pub use wordpress::WordPressClient;

use reqwest::{Client, Response, StatusCode};
use serde_json::Value;

use crate::{config::Config, error::UpstreamError};

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().user_agent(USER_AGENT);

    if let Some(timeout) = config.upstream_timeout() {
        tracing::info!("Upstream timeout set to {:?}", timeout);
        builder = builder.timeout(timeout);
    }

    builder.build()
}

/// 读取上游响应体；非 2xx 时用 `on_error` 包装成错误
pub(crate) async fn read_body(
    response: Response,
    on_error: fn(StatusCode, Value) -> UpstreamError,
) -> Result<Value, UpstreamError> {
    let status = response.status();
    let text = response.text().await?;
    let body = parse_body(&text);

    if status.is_success() {
        Ok(body)
    } else {
        tracing::debug!("Upstream returned {} with body {}", status, body);
        Err(on_error(status, body))
    }
}

/// 上游返回的不一定是 JSON（例如网关错误页），原样保留为字符串
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
