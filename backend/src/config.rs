use anyhow::Context;
use log::LevelFilter;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
pub const DEFAULT_PORT: u16 = 5555;

/// Process settings, read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub log_level: LevelFilter,
    /// Log lines are appended here as well as to stdout when set.
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("invalid `PORT`: {}", port))?,
            None => DEFAULT_PORT,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => level
                .parse()
                .with_context(|| format!("invalid `LOG_LEVEL`: {}", level))?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            database_url,
            port,
            log_level,
            log_file: lookup("LOG_FILE").map(PathBuf::from),
        })
    }
}
