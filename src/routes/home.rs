use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HomeResponse {
    pub msg: &'static str,
}

pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse { msg: "Home Page" })
}
