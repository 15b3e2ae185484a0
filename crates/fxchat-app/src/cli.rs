//! CLI argument definitions for the fxchat server.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

use fxchat_core::config::FxConfig;

/// Environment variable naming the config file.
pub const CONFIG_VAR: &str = "FXCHAT_CONFIG";
/// Environment variable overriding the listen port.
pub const PORT_VAR: &str = "FXCHAT_PORT";

/// fxchat - currency conversion over a chat box and a JSON API.
#[derive(Parser, Debug, Default)]
#[command(name = "fxchat", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Interface to bind.
    #[arg(long = "host")]
    pub host: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Directory holding static assets such as bg.jpg.
    #[arg(long = "static-dir")]
    pub static_dir: Option<PathBuf>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > FXCHAT_CONFIG env var > ./config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        self.resolve_config_path_with(|name| std::env::var(name).ok())
    }

    fn resolve_config_path_with<F>(&self, env: F) -> PathBuf
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Some(p) = env(CONFIG_VAR).filter(|p| !p.is_empty()) {
            return PathBuf::from(p);
        }
        PathBuf::from("config.toml")
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > FXCHAT_PORT env var > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        self.resolve_port_with(config_port, |name| std::env::var(name).ok())
    }

    fn resolve_port_with<F>(&self, config_port: u16, env: F) -> u16
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(p) = self.port {
            return p;
        }
        if let Some(p) = env(PORT_VAR).and_then(|v| v.trim().parse::<u16>().ok()) {
            return p;
        }
        config_port
    }

    /// Fold every override into the loaded config.
    pub fn apply(&self, config: &mut FxConfig) {
        config.general.port = self.resolve_port(config.general.port);
        self.apply_flags(config);
    }

    fn apply_flags(&self, config: &mut FxConfig) {
        if let Some(ref host) = self.host {
            config.general.host = host.clone();
        }
        if let Some(ref level) = self.log_level {
            config.general.log_level = level.clone();
        }
        if let Some(ref dir) = self.static_dir {
            config.general.static_dir = dir.to_string_lossy().to_string();
        }
    }
}
