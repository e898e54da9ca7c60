//! Configuration management for the bookshelf report

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::error::CatalogResult;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DataConfig {
    pub authors_path: PathBuf,
    pub books_path: PathBuf,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> CatalogResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Self::with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // e.g. BOOKSHELF__DATA__BOOKS_PATH
            .add_source(
                Environment::with_prefix("BOOKSHELF")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("data.authors_path", env::var("AUTHORS_JSON").ok())?
            .set_override_option("data.books_path", env::var("BOOKS_JSON").ok())?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Builder holding the built-in defaults, before any file or environment source
    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("data.authors_path", "data/authors.json")?
            .set_default("data.books_path", "data/books.json")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")
    }
}
