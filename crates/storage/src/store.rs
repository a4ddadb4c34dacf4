use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

/// A single bucket of an object store
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Name of the bucket every operation targets
    fn bucket(&self) -> &str;

    /// Confirm the bucket exists and we may access it
    async fn check_available(&self) -> crate::error::Result<()>;

    /// Write `body` under `key`, replacing any existing object
    async fn put_object(&self, key: &str, body: Bytes, content_type: &str) -> crate::error::Result<()>;

    /// Credential-free download link for `key`, valid for `ttl`
    async fn presigned_get_url(&self, key: &str, ttl: Duration) -> crate::error::Result<String>;
}
