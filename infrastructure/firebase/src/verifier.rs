use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, Validation, decode, decode_header};
use reqwest::Client;
use serde::Deserialize;

use business::domain::auth::model::IdentityToken;
use business::domain::auth::services::TokenVerifier;
use business::domain::auth::value_objects::{BearerToken, UserId};

use crate::certs::{CertificateError, CertificateStore};
use crate::config::FirebaseAdminConfig;

const ISSUER_PREFIX: &str = "https://securetoken.google.com/";
const MAX_UID_LEN: usize = 128;
/// Matches the default leeway `jsonwebtoken` applies to `exp`.
const CLOCK_SKEW_SECS: i64 = 60;
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct FirebaseClaims {
    sub: String,
    iss: String,
    aud: String,
    exp: i64,
    iat: i64,
    auth_time: Option<i64>,
    email: Option<String>,
    email_verified: Option<bool>,
    name: Option<String>,
    firebase: Option<FirebaseProviderClaims>,
}

#[derive(Debug, Deserialize)]
struct FirebaseProviderClaims {
    sign_in_provider: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum VerifyError {
    #[error("auth.invalid_token_header: {0}")]
    InvalidHeader(String),
    #[error("auth.unsupported_algorithm")]
    UnsupportedAlgorithm,
    #[error("auth.missing_kid")]
    MissingKid,
    #[error("auth.unknown_kid")]
    UnknownKid,
    #[error("auth.token_validation_failed: {0}")]
    Validation(String),
    #[error("auth.invalid_claim: {0}")]
    Claim(&'static str),
    #[error(transparent)]
    Certificates(#[from] CertificateError),
}

/// Verifies Firebase ID tokens against Google's published signing keys.
///
/// In emulator mode the Auth emulator's unsigned tokens are accepted, but
/// every claim check still applies.
pub struct FirebaseTokenVerifier {
    project_id: String,
    certificates: CertificateStore,
    emulator: bool,
}

impl FirebaseTokenVerifier {
    /// Fails when the HTTP client for certificate fetches cannot be built.
    pub fn new(config: &FirebaseAdminConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(HTTP_TIMEOUT).build()?;

        Ok(Self::with_certificates(
            config.project_id.clone(),
            CertificateStore::new(client),
            config.uses_emulator(),
        ))
    }

    pub fn with_certificates(
        project_id: String,
        certificates: CertificateStore,
        emulator: bool,
    ) -> Self {
        Self {
            project_id,
            certificates,
            emulator,
        }
    }

    fn expected_issuer(&self) -> String {
        format!("{ISSUER_PREFIX}{}", self.project_id)
    }

    async fn verify(&self, token: &str) -> Result<IdentityToken, VerifyError> {
        let claims = if self.emulator {
            decode_unsigned(token)?
        } else {
            self.decode_signed(token).await?
        };

        validate_claims(&claims, &self.project_id, Utc::now().timestamp())?;
        into_identity(claims)
    }

    async fn decode_signed(&self, token: &str) -> Result<FirebaseClaims, VerifyError> {
        let header = decode_header(token).map_err(|e| VerifyError::InvalidHeader(e.to_string()))?;
        if header.alg != Algorithm::RS256 {
            return Err(VerifyError::UnsupportedAlgorithm);
        }
        let kid = header.kid.ok_or(VerifyError::MissingKid)?;

        let decoding_key = self
            .certificates
            .decoding_key(&kid)
            .await?
            .ok_or(VerifyError::UnknownKid)?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[self.expected_issuer()]);
        validation.validate_exp = true;

        decode::<FirebaseClaims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| VerifyError::Validation(e.to_string()))
    }
}

/// Reads the payload of an emulator token without checking a signature.
fn decode_unsigned(token: &str) -> Result<FirebaseClaims, VerifyError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature)) =
        (segments.next(), segments.next(), segments.next())
    else {
        return Err(VerifyError::InvalidHeader(
            "expected three token segments".to_string(),
        ));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| VerifyError::InvalidHeader(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| VerifyError::Validation(e.to_string()))
}

fn validate_claims(claims: &FirebaseClaims, project_id: &str, now: i64) -> Result<(), VerifyError> {
    if claims.aud != project_id {
        return Err(VerifyError::Claim("aud"));
    }
    if claims.iss != format!("{ISSUER_PREFIX}{project_id}") {
        return Err(VerifyError::Claim("iss"));
    }
    if claims.exp < now - CLOCK_SKEW_SECS {
        return Err(VerifyError::Claim("exp"));
    }
    if claims.iat > now + CLOCK_SKEW_SECS {
        return Err(VerifyError::Claim("iat"));
    }
    if claims
        .auth_time
        .is_some_and(|auth_time| auth_time > now + CLOCK_SKEW_SECS)
    {
        return Err(VerifyError::Claim("auth_time"));
    }
    if claims.sub.is_empty() || claims.sub.len() > MAX_UID_LEN {
        return Err(VerifyError::Claim("sub"));
    }
    Ok(())
}

fn timestamp(seconds: i64, claim: &'static str) -> Result<DateTime<Utc>, VerifyError> {
    DateTime::from_timestamp(seconds, 0).ok_or(VerifyError::Claim(claim))
}

fn into_identity(claims: FirebaseClaims) -> Result<IdentityToken, VerifyError> {
    Ok(IdentityToken {
        issued_at: timestamp(claims.iat, "iat")?,
        expires_at: timestamp(claims.exp, "exp")?,
        auth_time: claims
            .auth_time
            .map(|t| timestamp(t, "auth_time"))
            .transpose()?,
        uid: UserId::new(claims.sub),
        email: claims.email,
        email_verified: claims.email_verified,
        name: claims.name,
        issuer: claims.iss,
        audience: claims.aud,
        sign_in_provider: claims.firebase.and_then(|f| f.sign_in_provider),
    })
}

#[async_trait]
impl TokenVerifier for FirebaseTokenVerifier {
    async fn verify_id_token(&self, token: &BearerToken) -> Option<IdentityToken> {
        match self.verify(token.as_str()).await {
            Ok(identity) => Some(identity),
            Err(VerifyError::Certificates(e)) => {
                tracing::error!("Failed to fetch Google certs: {e}");
                None
            }
            Err(e) => {
                tracing::warn!("Firebase auth failed: {e}");
                None
            }
        }
    }
}
