use axum::{
    extract::{Json, Path, Query, State},
    response::Response,
};

use crate::{
    AppState,
    result::MessageEnvelope,
    utils::{RouteClass, relay_error, success_to_response},
};

use super::model::{ProductOperations, ProductPayload, ProductRequest};

#[axum::debug_handler]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    match ProductOperations::list(&state.woocommerce, &query).await {
        Ok(data) => success_to_response(data),
        Err(e) => relay_error(
            state.config.error_status_policy,
            RouteClass::ProductRead,
            "Error Fetching Products",
            e,
        ),
    }
}

#[axum::debug_handler]
pub async fn find_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match ProductOperations::find_by_id(&state.woocommerce, &id).await {
        Ok(data) => success_to_response(data),
        Err(e) => relay_error(
            state.config.error_status_policy,
            RouteClass::ProductRead,
            "Error Fetching Products",
            e,
        ),
    }
}

#[axum::debug_handler]
pub async fn add_product(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> Response {
    let payload = ProductPayload::from(req);
    match ProductOperations::add(&state.woocommerce, &payload).await {
        Ok(data) => success_to_response(MessageEnvelope::new(
            "Product is Added Successfully",
            "productAddedInfo",
            data,
        )),
        Err(e) => relay_error(
            state.config.error_status_policy,
            RouteClass::Standard,
            "Error Adding Product",
            e,
        ),
    }
}

#[axum::debug_handler]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ProductRequest>,
) -> Response {
    let payload = ProductPayload::from(req);
    match ProductOperations::update(&state.woocommerce, &id, &payload).await {
        Ok(data) => success_to_response(MessageEnvelope::new(
            "Product is Updated Successfully",
            "productUpdatedInfo",
            data,
        )),
        Err(e) => relay_error(
            state.config.error_status_policy,
            RouteClass::Standard,
            "Error Updating Product",
            e,
        ),
    }
}

#[axum::debug_handler]
pub async fn delete_product(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match ProductOperations::delete(&state.woocommerce, &id).await {
        Ok(data) => success_to_response(MessageEnvelope::new(
            "Product is Deleted Successfully",
            "productDeletedInfo",
            data,
        )),
        Err(e) => relay_error(
            state.config.error_status_policy,
            RouteClass::Standard,
            "Error Deleting Product",
            e,
        ),
    }
}
