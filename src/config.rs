use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use serde::Deserialize;

/// Command line flags. All three are required; `-h` is the host, so help is
/// only reachable through `--help`.
#[derive(Parser, Debug, Clone)]
#[command(name = "inventory-server", version, about = "Inventory service with photo uploads", disable_help_flag = true)]
pub struct Cli {
    #[arg(short = 'h', long, value_name = "address", help = "Server address")]
    pub host: String,
    #[arg(short = 'p', long, value_name = "number", help = "Server port")]
    pub port: u16,
    #[arg(short = 'c', long, value_name = "path", help = "Path to cache directory")]
    pub cache: PathBuf,
    #[arg(long, action = ArgAction::Help, help = "Print help")]
    pub help: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Absolute path of the upload cache directory.
    pub cache_dir: PathBuf,
    pub body_limit_bytes: usize,
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub dir: PathBuf,
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SecurityConfig {
    pub enable_hsts: Option<bool>,
    pub hsts_max_age: Option<u64>,
    pub hsts_include_subdomains: Option<bool>,
    pub csp: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub security: Option<SecurityConfig>,
}

const DEFAULTS: &str = include_str!("../config/default.toml");

/// Builds the configuration: embedded defaults -> inventory.toml ->
/// $INVENTORY_CONFIG -> INVENTORY__* env -> command line flags.
pub fn load(cli: &Cli) -> anyhow::Result<AppConfig> {
    let _ = dotenvy::dotenv();

    let mut builder = ::config::Config::builder()
        .add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
        .add_source(::config::File::with_name("inventory").required(false));

    if let Ok(custom_path) = std::env::var("INVENTORY_CONFIG") {
        builder = builder.add_source(::config::File::with_name(&custom_path).required(false));
    }
    builder = builder.add_source(::config::Environment::with_prefix("INVENTORY").separator("__"));

    let cache_dir = resolve_cache_dir(&cli.cache)?;
    builder = builder
        .set_override("server.host", cli.host.clone())?
        .set_override("server.port", i64::from(cli.port))?
        .set_override("server.cache_dir", cache_dir.to_string_lossy().into_owned())?;

    let app_cfg: AppConfig = builder.build()?.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

/// Resolves the cache path against the current working directory.
pub fn resolve_cache_dir(path: &Path) -> anyhow::Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(anyhow::anyhow!("cache path must not be empty"));
    }
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}

fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    if cfg.server.host.trim().is_empty() {
        return Err(anyhow::anyhow!("server.host must not be empty"));
    }
    if cfg.server.port == 0 {
        return Err(anyhow::anyhow!("invalid server.port: {}", cfg.server.port));
    }
    #[cfg(unix)]
    if cfg.server.port < 1024 {
        tracing::warn!("Using privileged port {} - may require elevated permissions", cfg.server.port);
    }
    if cfg.server.body_limit_bytes == 0 {
        return Err(anyhow::anyhow!("server.body_limit_bytes must be > 0"));
    }
    Ok(())
}
