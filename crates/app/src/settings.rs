//! Handles settings for the application.
//!
//! Sources, lowest priority first: built-in defaults, the optional TOML file
//! (`config/expense_tracker.toml` or `--config`), `EXPENSE_TRACKER_*`
//! environment variables (`__` between sections, e.g.
//! `EXPENSE_TRACKER_SERVER__PORT`), then command line flags.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config/expense_tracker.toml";
const ENV_PREFIX: &str = "EXPENSE_TRACKER";

/// `EXPENSE_TRACKER_<SECTION>__<KEY>` variables.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct App {
    /// Tracing level for the workspace crates.
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    /// `memory` or the path of a SQLite file.
    pub database: String,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8000,
            database: "./expenses.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Database {
    Memory,
    Sqlite(String),
}

impl Server {
    pub fn database(&self) -> Database {
        match self.database.trim() {
            "memory" | ":memory:" => Database::Memory,
            path => Database::Sqlite(path.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

#[derive(Debug, Parser)]
#[command(name = "expense_tracker", version)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the listen address.
    #[arg(long)]
    bind: Option<String>,
    /// Override the listen port.
    #[arg(long)]
    port: Option<u16>,
    /// Override the database (`memory` or a SQLite path).
    #[arg(long)]
    database: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();

        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let builder = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(environment());
        let mut settings: Settings = builder.build()?.try_deserialize()?;

        if let Some(bind) = args.bind {
            settings.server.bind = bind;
        }
        if let Some(port) = args.port {
            settings.server.port = port;
        }
        if let Some(database) = args.database {
            settings.server.database = database;
        }

        Ok(settings)
    }
}
