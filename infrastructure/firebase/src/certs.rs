use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use jsonwebtoken::DecodingKey;
use reqwest::Client;
use reqwest::header::CACHE_CONTROL;

pub const GOOGLE_CERTS_URL: &str =
    "https://www.googleapis.com/robot/v1/metadata/x509/securetoken@system.gserviceaccount.com";
const DEFAULT_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, thiserror::Error)]
pub enum CertificateError {
    #[error("auth.certs_fetch_failed: {0}")]
    Fetch(String),
    #[error("auth.certs_parse_failed: {0}")]
    Parse(String),
    #[error("auth.cert_decode_failed: {0}")]
    Decode(String),
    #[error("auth.certs_cache_poisoned")]
    CachePoisoned,
}

struct CachedCerts {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Instant,
    ttl: Duration,
}

impl CachedCerts {
    fn is_fresh(&self) -> bool {
        self.fetched_at.elapsed() < self.ttl
    }
}

/// Google's token-signing certificates keyed by `kid`, refreshed when the
/// `Cache-Control: max-age` of the last response runs out.
pub struct CertificateStore {
    client: Client,
    url: String,
    cache: RwLock<Option<CachedCerts>>,
}

impl CertificateStore {
    pub fn new(client: Client) -> Self {
        Self::with_url(client, GOOGLE_CERTS_URL)
    }

    pub fn with_url(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            cache: RwLock::new(None),
        }
    }

    #[cfg(test)]
    pub(crate) fn preloaded(keys: HashMap<String, DecodingKey>, ttl: Duration) -> Self {
        let store = Self::with_url(Client::new(), "http://127.0.0.1:9/certs");
        if let Ok(mut cache) = store.cache.write() {
            *cache = Some(CachedCerts {
                keys,
                fetched_at: Instant::now(),
                ttl,
            });
        }
        store
    }

    /// Returns the key for `kid`, fetching fresh certificates when the cache
    /// is empty or stale. `Ok(None)` means the kid is not published.
    pub async fn decoding_key(&self, kid: &str) -> Result<Option<DecodingKey>, CertificateError> {
        {
            let cache = self
                .cache
                .read()
                .map_err(|_| CertificateError::CachePoisoned)?;
            if let Some(cached) = cache.as_ref()
                && cached.is_fresh()
            {
                return Ok(cached.keys.get(kid).cloned());
            }
        }

        let fresh = self.fetch().await?;
        let key = fresh.keys.get(kid).cloned();

        let mut cache = self
            .cache
            .write()
            .map_err(|_| CertificateError::CachePoisoned)?;
        *cache = Some(fresh);

        Ok(key)
    }

    async fn fetch(&self) -> Result<CachedCerts, CertificateError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| CertificateError::Fetch(e.to_string()))?;

        let ttl = response
            .headers()
            .get(CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_max_age)
            .unwrap_or(DEFAULT_TTL);

        let pems: HashMap<String, String> = response
            .json()
            .await
            .map_err(|e| CertificateError::Parse(e.to_string()))?;

        let mut keys = HashMap::with_capacity(pems.len());
        for (kid, pem) in pems {
            let key = DecodingKey::from_rsa_pem(pem.as_bytes())
                .map_err(|e| CertificateError::Decode(e.to_string()))?;
            keys.insert(kid, key);
        }

        tracing::debug!(
            count = keys.len(),
            ttl_secs = ttl.as_secs(),
            "Fetched Google signing certificates"
        );

        Ok(CachedCerts {
            keys,
            fetched_at: Instant::now(),
            ttl,
        })
    }
}

/// Extracts `max-age` from a `Cache-Control` header value.
pub fn parse_max_age(header: &str) -> Option<Duration> {
    header
        .split(',')
        .map(str::trim)
        .find_map(|directive| directive.strip_prefix("max-age="))
        .and_then(|seconds| seconds.parse::<u64>().ok())
        .map(Duration::from_secs)
}
