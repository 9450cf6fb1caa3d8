//! Configuration for the vector store API

use core_config::{AppInfo, FromEnv, app_info, env_parse_or_default, server::ServerConfig};
use vector_store::DistanceMetric;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Metric for the default collection, from `COLLECTION_DISTANCE`
    pub distance: DistanceMetric,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let distance = env_parse_or_default("COLLECTION_DISTANCE", "l2")?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            distance,
        })
    }
}
