pub mod app_config;
pub mod config;
pub mod countries;

pub use app_config::{AppConfig, Environment, ScorerKind};
pub use config::{load_app_config, load_app_config_from_env};
pub use countries::{resolve_country, Country, COUNTRIES, DEFAULT_COUNTRY};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
