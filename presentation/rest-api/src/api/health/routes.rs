use chrono::{SecondsFormat, Utc};
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;
use crate::config::service_config::ServiceConfig;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// API version, the same value the banner reports
    pub version: String,
}

/// Health API for monitoring and infrastructure checks
pub struct HealthApi {
    api_version: String,
}

impl HealthApi {
    pub fn new(service: &ServiceConfig) -> Self {
        Self {
            api_version: service.api_version.clone(),
        }
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Returns the current status of the service.
    /// This endpoint is public and does not require authentication.
    ///
    /// ## Response
    /// - `status`: "ok" if service is running
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    /// - `version`: API version from `API_VERSION`
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "ok".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            version: self.api_version.clone(),
        })
    }
}
