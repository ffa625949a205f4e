use axum::{
    extract::{Json, Path, Query, State},
    response::Response,
};

use crate::{
    AppState,
    result::{DataEnvelope, MessageEnvelope},
    utils::{RouteClass, relay_error, success_to_response},
};

use super::model::{LoginRequest, UserOperations, UserPayload};

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<UserPayload>,
) -> Response {
    match UserOperations::register(&state.wordpress, &req).await {
        Ok(data) => success_to_response(MessageEnvelope::new(
            "User registered successfully",
            "data",
            data,
        )),
        Err(e) => relay_error(
            state.config.error_status_policy,
            RouteClass::Standard,
            "User Registration Failed",
            e,
        ),
    }
}

#[axum::debug_handler]
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    match UserOperations::login(&state.wordpress, &req).await {
        Ok(data) => success_to_response(DataEnvelope { data }),
        Err(e) => relay_error(
            state.config.error_status_policy,
            RouteClass::Standard,
            "Login failed",
            e,
        ),
    }
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UserPayload>,
) -> Response {
    match UserOperations::update(&state.wordpress, &id, &req).await {
        Ok(data) => success_to_response(data),
        Err(e) => relay_error(
            state.config.error_status_policy,
            RouteClass::Standard,
            "Error Updating User",
            e,
        ),
    }
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    match UserOperations::delete(&state.wordpress, &id, &query).await {
        Ok(data) => success_to_response(data),
        Err(e) => relay_error(
            state.config.error_status_policy,
            RouteClass::Standard,
            "Error Deleting User",
            e,
        ),
    }
}

#[axum::debug_handler]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    match UserOperations::list(&state.wordpress, &query).await {
        Ok(data) => success_to_response(data),
        Err(e) => relay_error(
            state.config.error_status_policy,
            RouteClass::Standard,
            "Error Fetching Wordpress All Users",
            e,
        ),
    }
}

#[axum::debug_handler]
pub async fn find_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    tracing::debug!("Fetching user {}", id);
    match UserOperations::find_by_id(&state.wordpress, &id).await {
        Ok(data) => success_to_response(data),
        Err(e) => relay_error(
            state.config.error_status_policy,
            RouteClass::Standard,
            "Error Fetching to Single User",
            e,
        ),
    }
}
