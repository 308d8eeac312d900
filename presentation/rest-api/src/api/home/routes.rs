use poem_openapi::{Object, OpenApi, payload::Json};

use formatting::{add, capitalize, format_currency};

use crate::api::tags::ApiTags;
use crate::config::service_config::ServiceConfig;

#[derive(Debug, Clone, Object)]
pub struct BannerExample {
    /// `capitalize("hello world")`
    pub capitalize: String,
    /// `add(10, 20)`
    pub add: f64,
    /// `format_currency(99.99)`
    pub currency: String,
}

#[derive(Debug, Clone, Object)]
pub struct BannerResponse {
    pub message: String,
    pub version: String,
    /// Output of the shared formatting helpers.
    pub example: BannerExample,
}

pub struct HomeApi {
    app_name: String,
    api_version: String,
}

impl HomeApi {
    pub fn new(service: &ServiceConfig) -> Self {
        Self {
            app_name: service.app_name.clone(),
            api_version: service.api_version.clone(),
        }
    }
}

#[OpenApi]
impl HomeApi {
    /// Service banner
    ///
    /// Greets the caller and shows the shared formatting helpers at work.
    #[oai(path = "/", method = "get", tag = "ApiTags::Home")]
    async fn banner(&self) -> Json<BannerResponse> {
        Json(BannerResponse {
            message: format!("Hello from {}!", self.app_name),
            version: self.api_version.clone(),
            example: BannerExample {
                capitalize: capitalize("hello world"),
                add: add(10.0, 20.0),
                currency: format_currency(99.99),
            },
        })
    }
}
