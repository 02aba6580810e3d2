//! Handles settings for the service. Configuration is read from an optional
//! `settings.toml` next to the binary and from `OPENSPLIT_*` environment
//! variables, e.g. `OPENSPLIT_MONGODB__URI`.
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::LedgerError;

#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MongoDb {
    pub uri: String,
    pub database: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Log {
    pub level: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub mongodb: MongoDb,
    pub log: Log,
}

impl Settings {
    pub fn new() -> Result<Self, LedgerError> {
        Self::from_config(
            Config::builder()
                .add_source(File::with_name("settings").required(false))
                .add_source(environment()),
        )
    }

    fn from_config(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, LedgerError> {
        let settings = builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("mongodb.uri", "mongodb://localhost:27017")?
            .set_default("mongodb.database", "OpenSplit")?
            .set_default("log.level", "info")?
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("OPENSPLIT")
        .prefix_separator("_")
        .separator("__")
}
