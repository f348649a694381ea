use serde::Deserialize;

use crate::{db::SurrealdbCfg, error::Result};

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub http: HttpCfg,
    pub surrealdb: SurrealdbCfg,
}

#[derive(Debug, Deserialize)]
pub struct HttpCfg {
    pub port: u16,
}

impl Settings {
    /// Loads settings from a TOML file; `CATERING__SECTION__KEY` environment
    /// variables override file values.
    pub fn load(config_path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path))
            .add_source(config::Environment::with_prefix("CATERING").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
