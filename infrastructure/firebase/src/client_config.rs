/// User-facing message when the web client configuration is missing.
pub const FIREBASE_UNCONFIGURED_MESSAGE: &str =
    "Firebase not configured. Add VITE_FIREBASE_* or PUBLIC_FIREBASE_* env vars.";

/// Short label for compact display when not configured.
pub const FIREBASE_UNCONFIGURED_LABEL: &str = "Firebase not configured";

/// Vite apps read `VITE_*`, Astro apps read `PUBLIC_*`.
const PREFIXES: [&str; 2] = ["VITE_FIREBASE_", "PUBLIC_FIREBASE_"];

/// Public web configuration of the Firebase project. Safe to hand to browsers.
#[derive(Debug, Clone, PartialEq)]
pub struct FirebaseClientConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub app_id: String,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub measurement_id: Option<String>,
    pub emulator_host: Option<String>,
}

impl FirebaseClientConfig {
    /// Reads each field from `VITE_FIREBASE_<FIELD>`, falling back to
    /// `PUBLIC_FIREBASE_<FIELD>`. Returns `None` if a required field is missing.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |field: &str| {
            PREFIXES
                .iter()
                .find_map(|prefix| lookup(&format!("{prefix}{field}")).filter(|v| !v.is_empty()))
        };

        Some(Self {
            api_key: read("API_KEY")?,
            auth_domain: read("AUTH_DOMAIN")?,
            project_id: read("PROJECT_ID")?,
            app_id: read("APP_ID")?,
            storage_bucket: read("STORAGE_BUCKET"),
            messaging_sender_id: read("MESSAGING_SENDER_ID"),
            measurement_id: read("MEASUREMENT_ID"),
            emulator_host: read("EMULATOR_HOST"),
        })
    }
}
