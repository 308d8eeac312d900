use std::env;

use firebase::{
    ADMIN_CONFIG_MSG, FIREBASE_UNCONFIGURED_LABEL, FIREBASE_UNCONFIGURED_MESSAGE,
    FirebaseAdminConfig, FirebaseClientConfig,
};

/// Reads the server-side Firebase settings.
///
/// Missing or invalid settings are logged and yield `None`; the service keeps
/// running and protected routes answer 503.
pub fn init_firebase_admin() -> Option<FirebaseAdminConfig> {
    match FirebaseAdminConfig::from_lookup(|key| env::var(key).ok()) {
        Ok(config) => {
            if config.uses_emulator() {
                tracing::warn!(
                    project_id = %config.project_id,
                    "Firebase Auth emulator enabled: token signatures are not checked"
                );
            } else {
                tracing::info!(
                    project_id = %config.project_id,
                    credentials = %config.credentials.source(),
                    "Firebase Admin Auth configured"
                );
            }
            Some(config)
        }
        Err(e) => {
            tracing::error!("{ADMIN_CONFIG_MSG} ({e})");
            None
        }
    }
}

/// Reads the public web configuration served to front ends.
pub fn init_firebase_client() -> Option<FirebaseClientConfig> {
    let config = FirebaseClientConfig::from_lookup(|key| env::var(key).ok());
    if config.is_none() {
        tracing::info!(
            status = FIREBASE_UNCONFIGURED_LABEL,
            "{}",
            FIREBASE_UNCONFIGURED_MESSAGE
        );
    }
    config
}
