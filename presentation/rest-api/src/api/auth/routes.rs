use std::sync::Arc;

use poem::Request;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::auth::errors::AuthError;
use business::domain::auth::use_cases::verify_token::{VerifyIdTokenParams, VerifyIdTokenUseCase};
use firebase::FirebaseClientConfig;

use crate::api::auth::dto::{AuthConfigResponse, ProtectedResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::FirebaseAuth;
use crate::api::tags::ApiTags;

pub struct AuthApi {
    verify_use_case: Arc<dyn VerifyIdTokenUseCase>,
    client_config: Option<FirebaseClientConfig>,
}

impl AuthApi {
    pub fn new(
        verify_use_case: Arc<dyn VerifyIdTokenUseCase>,
        client_config: Option<FirebaseClientConfig>,
    ) -> Self {
        Self {
            verify_use_case,
            client_config,
        }
    }
}

/// Firebase-backed authentication API
#[OpenApi]
impl AuthApi {
    /// Protected resource
    ///
    /// Requires `Authorization: Bearer <Firebase ID token>`. Returns the uid
    /// of the verified caller.
    #[oai(path = "/api/protected", method = "get", tag = "ApiTags::Auth")]
    async fn protected(&self, auth: FirebaseAuth, req: &Request) -> GetProtectedResponse {
        let authorization = auth.authorization(req);

        match self
            .verify_use_case
            .execute(VerifyIdTokenParams { authorization })
            .await
        {
            Ok(identity) => GetProtectedResponse::Ok(Json(identity.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => GetProtectedResponse::ServiceUnavailable(json),
                    _ => GetProtectedResponse::Unauthorized(json),
                }
            }
        }
    }

    /// Firebase web configuration
    ///
    /// Public settings a front end needs to initialize the Firebase SDK.
    #[oai(path = "/api/auth/config", method = "get", tag = "ApiTags::Auth")]
    async fn client_config(&self) -> GetAuthConfigResponse {
        match &self.client_config {
            Some(config) => GetAuthConfigResponse::Ok(Json(config.clone().into())),
            None => {
                let (_status, json) = AuthError::NotConfigured.into_error_response();
                GetAuthConfigResponse::ServiceUnavailable(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProtectedResponse {
    #[oai(status = 200)]
    Ok(Json<ProtectedResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAuthConfigResponse {
    #[oai(status = 200)]
    Ok(Json<AuthConfigResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
