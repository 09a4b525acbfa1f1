use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File read from the working directory when present.
pub const CONFIG_FILE: &str = "todo.toml";

/// Prefix for environment overrides, e.g. `TODO_LISTEN_PORT=8080`.
pub const ENV_PREFIX: &str = "TODO_";

/// Server configuration managed by Figment.
///
/// Sources, lowest priority first: built-in defaults, `todo.toml`,
/// `TODO_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// HTTP server listen address. Env: `TODO_LISTEN_ADDR`. Default: `0.0.0.0`.
    #[serde(default = "default_listen_ip")]
    pub listen_addr: IpAddr,

    /// HTTP server listen port. Env: `TODO_LISTEN_PORT`. Default: `4567`.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Fallback filter directive when `RUST_LOG` is unset.
    /// Env: `TODO_LOGLEVEL`. Default: `info`.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Which store backs the API. Env: `TODO_STORE`. Default: `memory`.
    #[serde(default)]
    pub store: StoreKind,

    /// Env: `TODO_MONGO_URI`. Default: `mongodb://localhost:27017`.
    #[serde(default = "default_mongo_uri")]
    pub mongo_uri: String,

    /// Env: `TODO_MONGO_DB`. Default: `dev`.
    #[serde(default = "default_mongo_db")]
    pub mongo_db: String,

    /// JSON array of todos inserted into the memory store at startup.
    /// Env: `TODO_SEED_PATH`. Ignored for the mongo store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Memory,
    Mongo,
}

#[derive(Debug, Error)]
#[error("invalid configuration: {0}")]
pub struct ConfigError(#[from] Box<figment::Error>);

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError(Box::new(e))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_ip(),
            listen_port: default_listen_port(),
            loglevel: default_loglevel(),
            store: StoreKind::default(),
            mongo_uri: default_mongo_uri(),
            mongo_db: default_mongo_db(),
            seed_path: None,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    pub fn listen_socket(&self) -> SocketAddr {
        SocketAddr::from((self.listen_addr, self.listen_port))
    }
}

fn default_listen_ip() -> IpAddr {
    Ipv4Addr::new(0, 0, 0, 0).into()
}

fn default_listen_port() -> u16 {
    4567
}

fn default_loglevel() -> String {
    "info".to_string()
}

fn default_mongo_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_mongo_db() -> String {
    "dev".to_string()
}
