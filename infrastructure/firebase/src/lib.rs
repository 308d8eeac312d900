//! Firebase Authentication adapters: configuration from the environment,
//! Google signing-certificate cache and ID-token verification.

pub mod certs;
pub mod client_config;
pub mod config;
pub mod verifier;

pub use client_config::{
    FIREBASE_UNCONFIGURED_LABEL, FIREBASE_UNCONFIGURED_MESSAGE, FirebaseClientConfig,
};
pub use config::{ADMIN_CONFIG_MSG, FirebaseAdminConfig, FirebaseConfigError};
pub use verifier::FirebaseTokenVerifier;
