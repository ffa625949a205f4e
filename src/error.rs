use axum::http::StatusCode;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 获取令牌失败（管理员或用户本人）
    Auth,
    /// 目标 CRUD 请求失败
    Request,
    /// 没有拿到任何上游响应
    Unreachable,
}

/// 上游调用失败，保留上游返回的原始错误体
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream authentication failed with status {status}")]
    Auth { status: StatusCode, body: Value },
    #[error("upstream request failed with status {status}")]
    Request { status: StatusCode, body: Value },
    #[error("upstream unreachable: {0}")]
    Unreachable(String),
}

impl UpstreamError {
    pub fn auth(status: StatusCode, body: Value) -> Self {
        UpstreamError::Auth { status, body }
    }

    pub fn request(status: StatusCode, body: Value) -> Self {
        UpstreamError::Request { status, body }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            UpstreamError::Auth { .. } => ErrorKind::Auth,
            UpstreamError::Request { .. } => ErrorKind::Request,
            UpstreamError::Unreachable(_) => ErrorKind::Unreachable,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            UpstreamError::Auth { status, .. } | UpstreamError::Request { status, .. } => {
                Some(*status)
            }
            UpstreamError::Unreachable(_) => None,
        }
    }

    /// 返回给调用方 `error` 字段的内容
    pub fn into_body(self) -> Value {
        match self {
            UpstreamError::Auth { body, .. } | UpstreamError::Request { body, .. } => body,
            UpstreamError::Unreachable(detail) => json!({
                "code": "upstream_unreachable",
                "message": detail,
            }),
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        UpstreamError::Unreachable(e.to_string())
    }
}
