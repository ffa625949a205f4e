use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, header};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::read_body;
use crate::{config::Config, error::UpstreamError};

/// WooCommerce REST 客户端，启动时绑定站点地址、版本和 key/secret
#[derive(Clone)]
pub struct WooCommerceClient {
    http: Client,
    config: Arc<Config>,
}

impl WooCommerceClient {
    pub fn new(http: Client, config: Arc<Config>) -> Self {
        Self { http, config }
    }

    pub async fn get(
        &self,
        endpoint: &[&str],
        query: &[(String, String)],
    ) -> Result<Value, UpstreamError> {
        let response = self.request(Method::GET, endpoint).query(query).send().await?;
        read_body(response, UpstreamError::request).await
    }

    pub async fn post<B>(&self, endpoint: &[&str], body: &B) -> Result<Value, UpstreamError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.request(Method::POST, endpoint).json(body).send().await?;
        read_body(response, UpstreamError::request).await
    }

    pub async fn patch<B>(&self, endpoint: &[&str], body: &B) -> Result<Value, UpstreamError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.request(Method::PATCH, endpoint).json(body).send().await?;
        read_body(response, UpstreamError::request).await
    }

    pub async fn delete(
        &self,
        endpoint: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Value, UpstreamError> {
        let response = self.request(Method::DELETE, endpoint).query(query).send().await?;
        read_body(response, UpstreamError::request).await
    }

    fn request(&self, method: Method, endpoint: &[&str]) -> RequestBuilder {
        let url = endpoint_url(
            &self.config.woocommerce_site_url,
            &self.config.woocommerce_api_version,
            endpoint,
        );
        tracing::debug!("WooCommerce {} {}", method, url);

        let builder = self
            .http
            .request(method, url)
            .header(header::ACCEPT, "application/json");

        let key = &self.config.woocommerce_consumer_key;
        let secret = &self.config.woocommerce_consumer_secret;
        if self.config.woocommerce_query_string_auth {
            builder.query(&[("consumer_key", key), ("consumer_secret", secret)])
        } else {
            builder.basic_auth(key, Some(secret))
        }
    }
}

/// `<site>/wp-json/<version>/<endpoint...>`，每个路径段单独转义
pub(crate) fn endpoint_url(site: &Url, version: &str, endpoint: &[&str]) -> Url {
    let mut url = site.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .push("wp-json")
            .extend(version.split('/').filter(|s| !s.is_empty()))
            .extend(endpoint);
    }
    url
}
