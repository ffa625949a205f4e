use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    config::ErrorStatusPolicy,
    error::{ErrorKind, UpstreamError},
    result::ErrorEnvelope,
};

/// 路由类别，决定 legacy 策略下失败时的状态码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Standard,
    ProductRead,
}

pub fn success_to_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

pub fn error_status(
    policy: ErrorStatusPolicy,
    class: RouteClass,
    error: &UpstreamError,
) -> StatusCode {
    match policy {
        ErrorStatusPolicy::Legacy => match class {
            RouteClass::Standard => StatusCode::OK,
            RouteClass::ProductRead => StatusCode::INTERNAL_SERVER_ERROR,
        },
        ErrorStatusPolicy::Passthrough => match error.kind() {
            ErrorKind::Unreachable => StatusCode::BAD_GATEWAY,
            _ => error.status().unwrap_or(StatusCode::BAD_GATEWAY),
        },
        ErrorStatusPolicy::Always200 => StatusCode::OK,
    }
}

/// 把上游错误转成 `{message, error}` 返回给调用方
pub fn relay_error(
    policy: ErrorStatusPolicy,
    class: RouteClass,
    message: &str,
    error: UpstreamError,
) -> Response {
    let status = error_status(policy, class, &error);
    tracing::error!("{}: {}", message, error);

    let body = error.into_body();
    tracing::error!("Upstream error body: {}", body);

    (
        status,
        Json(ErrorEnvelope {
            message: message.to_string(),
            error: body,
        }),
    )
        .into_response()
}
