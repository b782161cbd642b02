//! The config module defines the client configuration. It is based on [config], a layered
//! configuration system for Rust applications (with strong support for 12-factor applications).
//!
//! # Layers
//!
//! The configuration consists of multiple layers. Upper layers overwrite lower layer configurations
//! (e.g. environment variables overwrite the default configuration).
//!
//! ## Layer 1 (Environment variables) \[optional\]
//!
//! The environment variables are the top most layer. They can be used to overwrite any previous
//! configuration. Environment variables have the format `[ENV_PREFIX]__[field]` where `ENV_PREFIX`
//! is an environment variable defaulting to `MCUTILS`. That means, the field `endpoint` can be
//! overwritten by the environment variable `MCUTILS__ENDPOINT`.
//!
//! ## Layer 2 (Custom configuration) \[optional\]
//!
//! The next layer is an optional configuration file intended to be used by deployments and local
//! testing. The file location can be configured using the `CONFIG_FILE` environment variable,
//! defaulting to `config/config`. It can be of any file type supported by [config] (e.g.
//! `config/config.toml`).
//!
//! ## Layer 3 (Default configuration)
//!
//! The default configuration provides default value for all config fields. It is loaded from
//! `config/default.toml` at compile time.
//!
//! # Usage
//!
//! The configuration can be created by using [Config::new]. This loads/overrides the
//! configuration fields layer-by-layer.
//!
//! ```rs
//! let config: Config = Config::new()?;
//! let client = config.client()?;
//! ```

pub mod log_filter;

use crate::config::log_filter::{LogFilter, parse_log_filter};
use config::{ConfigError, Environment, File, FileFormat};
use mcutils_client::McUtilsClient;
use serde::Deserialize;
use std::env;

/// The embedded default configuration.
const DEFAULT_CONFIG: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.toml"));

/// [Config] holds all configuration of the client. Usually one immutable instance is created on
/// startup and the client is built from it.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// The base address of the API that all request paths are appended to.
    pub endpoint: String,

    /// The filter directives for the log output (e.g. `info` or `mcutils_client=trace`).
    #[serde(deserialize_with = "parse_log_filter")]
    pub log_filter: LogFilter,
}

impl Config {
    /// Creates a new configuration as described in the [module documentation](crate::config).
    pub fn new() -> Result<Self, ConfigError> {
        // the environment prefix for all `Config` fields
        let env_prefix = env::var("ENV_PREFIX").unwrap_or("mcutils".into());
        // the path of the custom configuration file
        let config_file = env::var("CONFIG_FILE").unwrap_or("config/config".into());

        let s = config::Config::builder()
            // load default configuration (embedded at compile time)
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            // load custom configuration from file (at runtime)
            .add_source(File::with_name(&config_file).required(false))
            // add in config from the environment (with a prefix of ENV_PREFIX)
            // e.g. `MCUTILS__ENDPOINT=http://localhost:8080` would set the `endpoint` key
            .add_source(Environment::with_prefix(&env_prefix).separator("__"))
            .build()?;

        // you can deserialize (and thus freeze) the entire configuration as
        s.try_deserialize()
    }

    /// Builds a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Will return [`mcutils_client::Error::InvalidEndpoint`] if the endpoint is not a base URL.
    pub fn client(&self) -> mcutils_client::Result<McUtilsClient> {
        McUtilsClient::new(&self.endpoint)
    }
}

impl Default for Config {
    fn default() -> Self {
        let s = config::Config::builder()
            // load default configuration (embedded at compile time)
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .expect("expected default configuration to be available");

        // you can deserialize (and thus freeze) the entire configuration as
        s.try_deserialize()
            .expect("expected default configuration to be deserializable")
    }
}
