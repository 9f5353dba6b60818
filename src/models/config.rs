//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    /// Root of the publicly served directory; images land in `<public_dir>/schoolImages`.
    pub public_dir: String,
    /// Signs flash-message cookies, at least 64 bytes.
    pub secret: String,
}
