use std::sync::Arc;

use config::Config;
use upstream::{WooCommerceClient, WordPressClient, build_http_client};

pub mod config;
pub mod error;
pub mod middleware;
pub mod result;
pub mod router;
pub mod routes;
pub mod upstream;
pub mod utils;

pub use router::create_router;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub wordpress: WordPressClient,
    pub woocommerce: WooCommerceClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let config = Arc::new(config);
        // 两个上游共用一个连接池
        let http = build_http_client(&config)?;

        Ok(AppState {
            wordpress: WordPressClient::new(http.clone(), config.clone()),
            woocommerce: WooCommerceClient::new(http, config.clone()),
            config,
        })
    }
}
