use axum::{
    body::{Body, HttpBody, to_bytes},
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use tracing::error;

// 超过 1MB 或长度未知的错误体不读取，只记录状态码
const MAX_LOGGED_BODY: u64 = 1024 * 1024;

/// 记录所有 5xx 响应及其内容，响应原样返回
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let response = next.run(req).await;

    if !response.status().is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let loggable = body
        .size_hint()
        .upper()
        .is_some_and(|len| len <= MAX_LOGGED_BODY);
    if !loggable {
        error!("{} {} failed with {} (body not logged)", method, path, parts.status);
        return Response::from_parts(parts, body);
    }

    let bytes = match to_bytes(body, MAX_LOGGED_BODY as usize).await {
        Ok(b) => b,
        Err(e) => {
            error!("{} {} failed with {}, body unreadable: {}", method, path, parts.status, e);
            parts.headers.remove(header::CONTENT_LENGTH);
            return Response::from_parts(parts, Body::empty());
        }
    };

    error!(
        "{} {} failed with {}: {}",
        method,
        path,
        parts.status,
        String::from_utf8_lossy(&bytes)
    );

    // 重新构建响应
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
