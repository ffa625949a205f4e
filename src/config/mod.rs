use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_SERVER_PORT: u16 = 4500;
pub const DEFAULT_WOOCOMMERCE_API_VERSION: &str = "wc/v3";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

/// 上游失败时返回给调用方的 HTTP 状态码策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorStatusPolicy {
    /// 商品读取失败返回 500，其余路由一律 200
    #[default]
    Legacy,
    /// 透传上游状态码，上游不可达时返回 502
    Passthrough,
    Always200,
}

impl FromStr for ErrorStatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "passthrough" => Ok(Self::Passthrough),
            "always-200" | "always_200" | "always200" => Ok(Self::Always200),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub wordpress_users_url: Url,
    pub wordpress_token_url: Url,
    pub wordpress_admin_username: String,
    pub wordpress_admin_password: String,
    pub woocommerce_site_url: Url,
    pub woocommerce_api_version: String,
    pub woocommerce_consumer_key: String,
    pub woocommerce_consumer_secret: String,
    pub woocommerce_query_string_auth: bool,
    pub error_status_policy: ErrorStatusPolicy,
    pub upstream_timeout_secs: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 从任意变量来源构建配置，`lookup` 返回 None 表示变量不存在
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        Ok(Config {
            server_host: vars.optional("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: vars.parse_optional("SERVER_PORT")?.unwrap_or(DEFAULT_SERVER_PORT),
            wordpress_users_url: vars.required_url("WORDPRESS_USERS_API_URL")?,
            wordpress_token_url: vars.required_url("WORDPRESS_AUTH_TOKEN_API_URL")?,
            wordpress_admin_username: vars.required("WORDPRESS_ADMIN_USERNAME")?,
            wordpress_admin_password: vars.required("WORDPRESS_ADMIN_PASSWORD")?,
            woocommerce_site_url: vars.required_url("WEBSITE_URL")?,
            woocommerce_api_version: vars
                .optional("WOOCOMMERCE_API_VERSION")
                .unwrap_or_else(|| DEFAULT_WOOCOMMERCE_API_VERSION.to_string()),
            woocommerce_consumer_key: vars.required("WOOCOMMERCE_CONSUMER_KEY")?,
            // 兼容旧部署里拼错的变量名
            woocommerce_consumer_secret: vars
                .optional("WOOCOMMERCE_CONSUMER_SECRET")
                .or_else(|| vars.optional("WOOCOMMERCE_CONSUMER_SECREAT"))
                .ok_or(ConfigError::Missing("WOOCOMMERCE_CONSUMER_SECRET"))?,
            woocommerce_query_string_auth: vars
                .parse_optional::<bool>("WOOCOMMERCE_QUERY_STRING_AUTH")?
                .unwrap_or(false),
            error_status_policy: vars.parse_optional("ERROR_STATUS_POLICY")?.unwrap_or_default(),
            upstream_timeout_secs: vars.parse_optional("UPSTREAM_TIMEOUT_SECS")?,
        })
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_secs.map(Duration::from_secs)
    }
}

struct Vars<F>(F);

impl<F: Fn(&str) -> Option<String>> Vars<F> {
    fn optional(&self, name: &'static str) -> Option<String> {
        (self.0)(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn required(&self, name: &'static str) -> Result<String, ConfigError> {
        self.optional(name).ok_or(ConfigError::Missing(name))
    }

    fn required_url(&self, name: &'static str) -> Result<Url, ConfigError> {
        let raw = self.required(name)?;
        parse_url(name, &raw)
    }

    fn parse_optional<T: FromStr>(&self, name: &'static str) -> Result<Option<T>, ConfigError> {
        self.optional(name)
            .map(|raw| {
                raw.parse::<T>()
                    .map_err(|_| ConfigError::Invalid { name, value: raw })
            })
            .transpose()
    }
}

fn parse_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|_| ConfigError::Invalid {
        name,
        value: raw.to_string(),
    })
}
