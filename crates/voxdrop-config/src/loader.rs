use std::path::Path;

use secrecy::{ExposeSecret, SecretString};

use crate::{
    Config, MAX_URL_TTL_SECONDS,
    env::non_empty_var,
    telemetry::exporters::{ExportProtocol, ExporterConfig},
};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let mut config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.normalize();
        config.validate()?;

        tracing::debug!(path = %path.display(), "configuration loaded from file");

        Ok(config)
    }

    /// Build configuration from the process environment
    ///
    /// This is how the Lambda deployment is configured. `OPENAI_API_KEY` and
    /// `S3_BUCKET_NAME` are read but not required here: while either is
    /// missing the process still starts and every request fails closed.
    ///
    /// # Errors
    ///
    /// Returns an error if an optional variable is present but malformed
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        config.tts.api_key = non_empty_var("OPENAI_API_KEY").map(SecretString::from);
        if let Some(base_url) = non_empty_var("OPENAI_BASE_URL") {
            let url = base_url
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid OPENAI_BASE_URL `{base_url}`: {e}"))?;
            config.tts.base_url = Some(url);
        }
        if let Some(model) = non_empty_var("VOXDROP_TTS_MODEL") {
            config.tts.model = model;
        }

        config.storage.bucket = non_empty_var("S3_BUCKET_NAME");
        config.storage.region = non_empty_var("AWS_REGION");
        if let Some(endpoint) = non_empty_var("VOXDROP_S3_ENDPOINT") {
            let url = endpoint
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid VOXDROP_S3_ENDPOINT `{endpoint}`: {e}"))?;
            // S3-compatible stores rarely support virtual-hosted buckets
            config.storage.endpoint = Some(url);
            config.storage.force_path_style = true;
        }
        if let Some(ttl) = non_empty_var("VOXDROP_URL_TTL_SECONDS") {
            config.storage.url_ttl_seconds = ttl
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid VOXDROP_URL_TTL_SECONDS `{ttl}`: {e}"))?;
        }

        if let Some(filter) = non_empty_var("VOXDROP_LOG") {
            config.telemetry.log_filter = filter;
        }
        if let Some(format) = non_empty_var("VOXDROP_LOG_FORMAT") {
            config.telemetry.log_format = format
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid VOXDROP_LOG_FORMAT: {e}"))?;
        }
        if let Some(endpoint) = non_empty_var("OTEL_EXPORTER_OTLP_ENDPOINT") {
            let url = endpoint
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid OTEL_EXPORTER_OTLP_ENDPOINT `{endpoint}`: {e}"))?;
            config.telemetry.exporter = Some(ExporterConfig {
                endpoint: url,
                protocol: ExportProtocol::default(),
                export_interval_seconds: 30,
            });
        }

        config.validate()?;

        tracing::debug!(
            api_key_set = config.tts.api_key.is_some(),
            bucket_set = config.storage.bucket.is_some(),
            "configuration loaded from environment"
        );

        Ok(config)
    }

    /// Treat blank secrets and names as unset
    fn normalize(&mut self) {
        if self.tts.api_key.as_ref().is_some_and(|key| key.expose_secret().trim().is_empty()) {
            self.tts.api_key = None;
        }
        if self.storage.bucket.as_ref().is_some_and(|bucket| bucket.trim().is_empty()) {
            self.storage.bucket = None;
        }
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a value is out of range or static credentials
    /// are only half configured
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_server_config()?;
        self.validate_tts_config()?;
        self.validate_storage_config()?;
        self.validate_telemetry_config()?;
        Ok(())
    }

    fn validate_server_config(&self) -> anyhow::Result<()> {
        let health = &self.server.health;
        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/', got `{}`", health.path);
        }

        Ok(())
    }

    fn validate_tts_config(&self) -> anyhow::Result<()> {
        if self.tts.model.trim().is_empty() {
            anyhow::bail!("tts.model must not be empty");
        }

        Ok(())
    }

    fn validate_storage_config(&self) -> anyhow::Result<()> {
        let ttl = self.storage.url_ttl_seconds;
        if ttl == 0 || ttl > MAX_URL_TTL_SECONDS {
            anyhow::bail!("storage.url_ttl_seconds must be between 1 and {MAX_URL_TTL_SECONDS}, got {ttl}");
        }

        if self.storage.access_key_id.is_some() != self.storage.secret_access_key.is_some() {
            anyhow::bail!("storage.access_key_id and storage.secret_access_key must be set together");
        }

        Ok(())
    }

    fn validate_telemetry_config(&self) -> anyhow::Result<()> {
        if let Some(ref tracing) = self.telemetry.tracing
            && !(0.0..=1.0).contains(&tracing.sampling_rate)
        {
            anyhow::bail!(
                "telemetry.tracing.sampling_rate must be between 0.0 and 1.0, got {}",
                tracing.sampling_rate
            );
        }

        Ok(())
    }
}
