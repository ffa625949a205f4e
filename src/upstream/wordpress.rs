use std::sync::Arc;

use reqwest::Client;
use serde::Serialize;
use serde_json::{Value, json};
use url::Url;

use super::read_body;
use crate::{config::Config, error::UpstreamError};

/// WordPress 用户目录客户端，同时负责获取管理员令牌
#[derive(Clone)]
pub struct WordPressClient {
    http: Client,
    config: Arc<Config>,
}

impl WordPressClient {
    pub fn new(http: Client, config: Arc<Config>) -> Self {
        Self { http, config }
    }

    /// 向令牌接口提交用户名密码，返回完整的认证响应
    pub async fn authenticate<B>(&self, credentials: &B) -> Result<Value, UpstreamError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .post(self.config.wordpress_token_url.clone())
            .json(credentials)
            .send()
            .await?;

        read_body(response, UpstreamError::auth).await
    }

    /// 每次调用都重新获取管理员令牌，不做缓存
    pub async fn obtain_admin_token(&self) -> Result<String, UpstreamError> {
        let credentials = json!({
            "username": self.config.wordpress_admin_username,
            "password": self.config.wordpress_admin_password,
        });

        let body = self.authenticate(&credentials).await?;
        match body.get("token").and_then(Value::as_str) {
            Some(token) if !token.is_empty() => Ok(token.to_string()),
            _ => {
                tracing::warn!("Token endpoint answered without a token");
                // 令牌接口返回成功却没有令牌，按网关错误处理
                Err(UpstreamError::auth(reqwest::StatusCode::BAD_GATEWAY, body))
            }
        }
    }

    pub async fn list_users(&self, query: &[(String, String)]) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .get(self.config.wordpress_users_url.clone())
            .query(query)
            .send()
            .await?;

        read_body(response, UpstreamError::request).await
    }

    pub async fn get_user(&self, token: &str, id: &str) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .get(self.user_url(id))
            .bearer_auth(token)
            .send()
            .await?;

        read_body(response, UpstreamError::request).await
    }

    pub async fn create_user<B>(&self, token: &str, payload: &B) -> Result<Value, UpstreamError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .post(self.config.wordpress_users_url.clone())
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;

        read_body(response, UpstreamError::request).await
    }

    pub async fn update_user<B>(
        &self,
        token: &str,
        id: &str,
        payload: &B,
    ) -> Result<Value, UpstreamError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .patch(self.user_url(id))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;

        read_body(response, UpstreamError::request).await
    }

    /// WordPress 不支持把用户放进回收站，必须带 `force=true`
    pub async fn delete_user(
        &self,
        token: &str,
        id: &str,
        query: &[(String, String)],
    ) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .delete(self.user_url(id))
            .bearer_auth(token)
            .query(query)
            .query(&[("force", "true")])
            .send()
            .await?;

        read_body(response, UpstreamError::request).await
    }

    fn user_url(&self, id: &str) -> Url {
        member_url(&self.config.wordpress_users_url, id)
    }
}

/// 在集合地址后追加一个经过转义的路径段
pub(crate) fn member_url(base: &Url, id: &str) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(id);
    }
    url
}
