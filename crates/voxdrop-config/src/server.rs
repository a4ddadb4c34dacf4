use std::net::SocketAddr;

use serde::Deserialize;

use crate::health::HealthConfig;

/// Local development server settings
///
/// Only used by `voxdrop serve`; the Lambda runtime ignores this section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    #[serde(default)]
    pub health: HealthConfig,
}
