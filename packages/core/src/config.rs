use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::cli::Cli;

pub const DEFAULT_DATABASE_PATH: &str = "Dummy_Medarxiv.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://127.0.0.1:8000", "http://localhost:8000"];

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys fall back to
    /// the defaults above.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = lookup("DATABASE_PATH")
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string())
            .into();

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|_| "BIND_ADDR must be a valid socket address")?;

        let static_dir = lookup("STATIC_DIR")
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
            .into();

        let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        };

        Ok(Self {
            database_path,
            bind_addr,
            static_dir,
            allowed_origins,
        })
    }

    /// Command-line flags win over the environment.
    pub fn apply_cli(mut self, cli: Cli) -> Self {
        if let Some(database) = cli.database {
            self.database_path = database;
        }
        if let Some(bind) = cli.bind {
            self.bind_addr = bind;
        }
        if let Some(static_dir) = cli.static_dir {
            self.static_dir = static_dir;
        }
        self
    }
}

fn parse_origins(raw: &str) -> Result<Vec<String>, String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        return Err("CORS_ALLOWED_ORIGINS must list at least one origin".to_string());
    }
    Ok(origins)
}
