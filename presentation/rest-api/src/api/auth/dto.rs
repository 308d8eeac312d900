use poem_openapi::Object;

use business::domain::auth::model::IdentityToken;
use firebase::FirebaseClientConfig;

#[derive(Debug, Clone, Object)]
pub struct ProtectedResponse {
    /// Firebase user id of the caller
    pub uid: String,
}

impl From<IdentityToken> for ProtectedResponse {
    fn from(identity: IdentityToken) -> Self {
        Self {
            uid: identity.uid.to_string(),
        }
    }
}

/// Public Firebase web configuration for front-end bootstrapping.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AuthConfigResponse {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub app_id: String,
    #[oai(skip_serializing_if_is_none)]
    pub storage_bucket: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub messaging_sender_id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub measurement_id: Option<String>,
    /// Set when the front end should talk to the Auth emulator
    #[oai(skip_serializing_if_is_none)]
    pub emulator_host: Option<String>,
}

impl From<FirebaseClientConfig> for AuthConfigResponse {
    fn from(config: FirebaseClientConfig) -> Self {
        Self {
            api_key: config.api_key,
            auth_domain: config.auth_domain,
            project_id: config.project_id,
            app_id: config.app_id,
            storage_bucket: config.storage_bucket,
            messaging_sender_id: config.messaging_sender_id,
            measurement_id: config.measurement_id,
            emulator_host: config.emulator_host,
        }
    }
}
