//! Object storage for generated audio files

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod s3;
mod store;

use std::sync::Arc;

pub use error::{Result, StorageError};
pub use s3::S3Store;
pub use store::ObjectStore;

/// Build the object store from configuration
///
/// Returns `None` when no bucket is configured; the handler then fails
/// every request closed instead of refusing to start.
pub async fn build_store(config: &voxdrop_config::StorageConfig) -> Option<Arc<dyn ObjectStore>> {
    let Some(ref bucket) = config.bucket else {
        tracing::warn!("no storage bucket configured, speech requests will be rejected");
        return None;
    };

    let store = S3Store::new(bucket.clone(), config).await;

    tracing::debug!(bucket = %bucket, "object store initialized");

    Some(Arc::new(store))
}
