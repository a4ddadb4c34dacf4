use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Lifetime of generated download links when not configured
pub const DEFAULT_URL_TTL_SECONDS: u64 = 3600;

/// Longest lifetime S3 accepts for a presigned URL (7 days)
pub const MAX_URL_TTL_SECONDS: u64 = 7 * 24 * 60 * 60;

/// Object storage configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Bucket receiving the audio files; requests fail closed while this is unset
    #[serde(default)]
    pub bucket: Option<String>,
    /// AWS region; falls back to the default provider chain when unset
    #[serde(default)]
    pub region: Option<String>,
    /// Custom endpoint for S3-compatible stores (`MinIO`, `LocalStack`)
    #[serde(default)]
    pub endpoint: Option<Url>,
    /// Use path-style addressing (`{endpoint}/{bucket}/{key}`)
    #[serde(default)]
    pub force_path_style: bool,
    /// Static access key; the default credential chain is used when unset
    #[serde(default)]
    pub access_key_id: Option<SecretString>,
    /// Static secret key, paired with `access_key_id`
    #[serde(default)]
    pub secret_access_key: Option<SecretString>,
    /// Lifetime of presigned download links in seconds
    #[serde(default = "default_url_ttl_seconds")]
    pub url_ttl_seconds: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: None,
            region: None,
            endpoint: None,
            force_path_style: false,
            access_key_id: None,
            secret_access_key: None,
            url_ttl_seconds: DEFAULT_URL_TTL_SECONDS,
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_url_ttl_seconds() -> u64 {
    DEFAULT_URL_TTL_SECONDS
}
