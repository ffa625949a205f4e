use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::UpstreamError, upstream::WooCommerceClient};

const PRODUCTS: &str = "products";

/// 调用方提交的商品字段
#[derive(Debug, Default, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub sku: Option<Value>,
}

/// 发给 WooCommerce 的商品字段，`price` 改名为 `regular_price`
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct ProductPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Value>,
}

impl From<ProductRequest> for ProductPayload {
    fn from(req: ProductRequest) -> Self {
        Self {
            name: req.name,
            regular_price: req.price,
            description: req.description,
            sku: req.sku,
        }
    }
}

/// 商品相关的上游操作
pub struct ProductOperations;

impl ProductOperations {
    pub async fn list(
        woocommerce: &WooCommerceClient,
        query: &[(String, String)],
    ) -> Result<Value, UpstreamError> {
        woocommerce.get(&[PRODUCTS], query).await
    }

    pub async fn find_by_id(
        woocommerce: &WooCommerceClient,
        id: &str,
    ) -> Result<Value, UpstreamError> {
        woocommerce.get(&[PRODUCTS, id], &[]).await
    }

    pub async fn add(
        woocommerce: &WooCommerceClient,
        payload: &ProductPayload,
    ) -> Result<Value, UpstreamError> {
        woocommerce.post(&[PRODUCTS], payload).await
    }

    pub async fn update(
        woocommerce: &WooCommerceClient,
        id: &str,
        payload: &ProductPayload,
    ) -> Result<Value, UpstreamError> {
        woocommerce.patch(&[PRODUCTS, id], payload).await
    }

    /// 总是强制删除，不进回收站
    pub async fn delete(woocommerce: &WooCommerceClient, id: &str) -> Result<Value, UpstreamError> {
        woocommerce.delete(&[PRODUCTS, id], &[("force", "true")]).await
    }
}
