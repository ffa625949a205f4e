use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{AppState, middleware::log_errors, routes};

// 用户相关的路由
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(routes::user::register))
        .route("/login", post(routes::user::login))
        .route("/users", get(routes::user::list_users))
        .route("/users/{id}", get(routes::user::find_by_id))
        .route("/users/update/{id}", patch(routes::user::update_user))
        .route("/users/delete/{id}", delete(routes::user::delete_user))
}

// 商品相关的路由
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(routes::product::list_products))
        .route("/products/{id}", get(routes::product::find_by_id))
        .route("/products/add", post(routes::product::add_product))
        .route("/products/update/{id}", patch(routes::product::update_product))
        .route("/products/delete/{id}", delete(routes::product::delete_product))
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::home::home))
        .merge(user_routes())
        .merge(product_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(log_errors)),
        )
        .with_state(state)
}
