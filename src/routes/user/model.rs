use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::UpstreamError, upstream::WordPressClient};

/// 注册和更新共用的用户字段，缺失或为 null 的字段不会发给上游
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct UserPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Value>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Value>,
}

/// 用户相关的上游操作
pub struct UserOperations;

impl UserOperations {
    pub async fn register(
        wordpress: &WordPressClient,
        payload: &UserPayload,
    ) -> Result<Value, UpstreamError> {
        let token = wordpress.obtain_admin_token().await?;
        wordpress.create_user(&token, payload).await
    }

    /// 用用户自己的账号密码换取令牌，服务端不保存任何会话
    pub async fn login(
        wordpress: &WordPressClient,
        credentials: &LoginRequest,
    ) -> Result<Value, UpstreamError> {
        wordpress.authenticate(credentials).await
    }

    pub async fn update(
        wordpress: &WordPressClient,
        id: &str,
        payload: &UserPayload,
    ) -> Result<Value, UpstreamError> {
        let token = wordpress.obtain_admin_token().await?;
        wordpress.update_user(&token, id, payload).await
    }

    pub async fn delete(
        wordpress: &WordPressClient,
        id: &str,
        query: &[(String, String)],
    ) -> Result<Value, UpstreamError> {
        let token = wordpress.obtain_admin_token().await?;
        wordpress.delete_user(&token, id, query).await
    }

    pub async fn list(
        wordpress: &WordPressClient,
        query: &[(String, String)],
    ) -> Result<Value, UpstreamError> {
        wordpress.list_users(query).await
    }

    pub async fn find_by_id(wordpress: &WordPressClient, id: &str) -> Result<Value, UpstreamError> {
        let token = wordpress.obtain_admin_token().await?;
        wordpress.get_user(&token, id).await
    }
}
