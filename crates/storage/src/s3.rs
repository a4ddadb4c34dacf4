use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::{Client, error::DisplayErrorContext, presigning::PresigningConfig, primitives::ByteStream};
use bytes::Bytes;
use secrecy::ExposeSecret;
use voxdrop_config::StorageConfig;

use crate::{error::StorageError, store::ObjectStore};

/// S3 (or S3-compatible) bucket
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    /// Create a store for `bucket` using the storage configuration
    ///
    /// Region and credentials fall back to the default AWS provider chain
    /// (the Lambda execution role) when not configured explicitly.
    pub async fn new(bucket: String, config: &StorageConfig) -> Self {
        let client = build_s3_client(config).await;
        Self { client, bucket }
    }
}

/// Build an S3 client from configuration
async fn build_s3_client(config: &StorageConfig) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(ref region) = config.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }

    // Use explicit credentials if provided, otherwise fall back to default chain
    if let (Some(access_key), Some(secret_key)) = (&config.access_key_id, &config.secret_access_key) {
        let credentials = aws_credential_types::Credentials::new(
            access_key.expose_secret(),
            secret_key.expose_secret(),
            None,
            None,
            "voxdrop-config",
        );
        loader = loader.credentials_provider(credentials);
    }

    let sdk_config = loader.load().await;

    let mut s3_config = aws_sdk_s3::config::Builder::from(&sdk_config).force_path_style(config.force_path_style);

    if let Some(ref endpoint) = config.endpoint {
        s3_config = s3_config.endpoint_url(endpoint.as_str().trim_end_matches('/'));
    }

    Client::from_conf(s3_config.build())
}

#[async_trait]
impl ObjectStore for S3Store {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn check_available(&self) -> crate::error::Result<()> {
        self.client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                tracing::error!(bucket = %self.bucket, error = %message, "head bucket failed");
                StorageError::Unavailable {
                    bucket: self.bucket.clone(),
                    message,
                }
            })?;

        Ok(())
    }

    async fn put_object(&self, key: &str, body: Bytes, content_type: &str) -> crate::error::Result<()> {
        tracing::debug!(bucket = %self.bucket, key, size = body.len(), "uploading object");

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                tracing::error!(bucket = %self.bucket, key, error = %message, "put object failed");
                StorageError::Upload {
                    key: key.to_owned(),
                    message,
                }
            })?;

        Ok(())
    }

    async fn presigned_get_url(&self, key: &str, ttl: Duration) -> crate::error::Result<String> {
        let signing_error = |message: String| StorageError::Signing {
            key: key.to_owned(),
            message,
        };

        let presigning_config = PresigningConfig::expires_in(ttl).map_err(|e| signing_error(e.to_string()))?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning_config)
            .await
            .map_err(|e| signing_error(DisplayErrorContext(&e).to_string()))?;

        Ok(presigned.uri().to_string())
    }
}
