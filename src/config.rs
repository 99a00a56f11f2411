use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4221";
pub const DEFAULT_STORAGE_DIR: &str = "./default_directory";

/// Command line of the `filedock` binary.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "filedock", about = "Minimal HTTP/1.1 file server", version)]
pub struct Cli {
    /// Directory served by /files/
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "LISTEN")]
    pub listen: Option<String>,

    /// Optional YAML configuration file
    #[arg(long, env = "FILEDOCK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Root for downloads and uploads; request filenames are joined onto it.
    pub directory: PathBuf,
    /// Pick the download Content-Type from the file extension instead of
    /// always sending application/octet-stream.
    pub detect_content_type: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_STORAGE_DIR),
            detect_content_type: false,
        }
    }
}

impl StorageConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }
}

impl Config {
    /// Parses the process arguments and builds the effective configuration.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_cli(Cli::parse())
    }

    /// Defaults, then the YAML file, then `--listen`/`LISTEN`, then `--directory`.
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let mut cfg = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(listen) = cli.listen {
            cfg.server.listen_addr = listen;
        }

        match cli.directory {
            Some(dir) => cfg.storage.directory = dir,
            None if cli.config.is_none() => {
                tracing::info!(
                    "No directory argument provided, using {}",
                    cfg.storage.directory.display()
                );
            }
            None => {}
        }

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
