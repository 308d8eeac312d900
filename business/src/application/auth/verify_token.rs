use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::IdentityToken;
use crate::domain::auth::services::TokenVerifier;
use crate::domain::auth::use_cases::verify_token::{VerifyIdTokenParams, VerifyIdTokenUseCase};
use crate::domain::auth::value_objects::BearerToken;
use crate::domain::logger::Logger;

pub struct VerifyIdTokenUseCaseImpl {
    /// `None` when the identity provider is not configured.
    pub verifier: Option<Arc<dyn TokenVerifier>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl VerifyIdTokenUseCase for VerifyIdTokenUseCaseImpl {
    async fn execute(&self, params: VerifyIdTokenParams) -> Result<IdentityToken, AuthError> {
        let Some(verifier) = &self.verifier else {
            self.logger
                .error("Rejecting protected request: identity provider not configured");
            return Err(AuthError::NotConfigured);
        };

        let token = params
            .authorization
            .as_deref()
            .and_then(BearerToken::parse)
            .ok_or(AuthError::MissingToken)?;

        match verifier.verify_id_token(&token).await {
            Some(identity) => {
                self.logger
                    .debug(&format!("Verified identity token for {}", identity.uid));
                Ok(identity)
            }
            None => Err(AuthError::InvalidToken),
        }
    }
}
