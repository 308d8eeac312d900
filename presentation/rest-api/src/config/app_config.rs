use firebase::{FirebaseAdminConfig, FirebaseClientConfig};
use poem::middleware::Cors;

use super::{
    cors_config, firebase_config, server_config::ServerConfig, service_config::ServiceConfig,
};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub service: ServiceConfig,
    pub firebase: Option<FirebaseAdminConfig>,
    pub firebase_client: Option<FirebaseClientConfig>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            service: ServiceConfig::from_env(),
            firebase: firebase_config::init_firebase_admin(),
            firebase_client: firebase_config::init_firebase_client(),
        }
    }
}
