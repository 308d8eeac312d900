use poem::Request;
use poem::http::header::AUTHORIZATION;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;

/// Firebase ID token sent as `Authorization: Bearer <token>`
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT")]
pub struct FirebaseBearer(pub Bearer);

/// Credentials of a protected request.
///
/// Verification happens in the use case, so requests without a bearer
/// token still reach the handler and get the JSON error of the use case.
#[derive(SecurityScheme)]
pub enum FirebaseAuth {
    Bearer(FirebaseBearer),
    #[oai(fallback)]
    Anonymous,
}

impl FirebaseAuth {
    /// Raw credential to hand to token verification. A header without the
    /// `Bearer` scheme is passed through as is.
    pub fn authorization(self, req: &Request) -> Option<String> {
        match self {
            FirebaseAuth::Bearer(FirebaseBearer(bearer)) => Some(bearer.token),
            FirebaseAuth::Anonymous => req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string),
        }
    }
}
