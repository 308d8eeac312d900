use std::env;

/// Identity reported by the banner endpoint.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub app_name: String,
    pub api_version: String,
}

impl ServiceConfig {
    /// Environment variables:
    /// - APP_NAME: (default: "Todo Service")
    /// - API_VERSION: (default: "v1")
    pub fn from_env() -> Self {
        Self {
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "Todo Service".to_string()),
            api_version: env::var("API_VERSION").unwrap_or_else(|_| "v1".to_string()),
        }
    }
}
