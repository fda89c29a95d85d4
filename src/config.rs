use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "albums.config";
const DEFAULT_API_BASE: &str = "http://localhost:8080";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_FILE: &str = "albums.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),
    #[error("Malformed config file {0}: {1}")]
    Parse(PathBuf, serde_json::Error),
    #[error("Invalid API base {0:?}: {1}")]
    InvalidApiBase(String, String),
}

/// Config as written on disk; every key is optional.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AlbumsConfigFile {
    api_base: Option<String>,
    address: Option<IpAddr>,
    port: Option<u16>,
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlbumsConfig {
    pub api_base: String,
    pub address: IpAddr,
    pub port: u16,
    pub log_file: PathBuf,
}

impl From<AlbumsConfigFile> for AlbumsConfig {
    fn from(file_config: AlbumsConfigFile) -> Self {
        AlbumsConfig {
            api_base: file_config
                .api_base
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            address: file_config
                .address
                .unwrap_or(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))),
            port: file_config.port.unwrap_or(DEFAULT_PORT),
            log_file: file_config
                .log_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}

impl Default for AlbumsConfig {
    fn default() -> Self {
        AlbumsConfigFile::default().into()
    }
}

impl AlbumsConfig {
    /// Reads the config at `path`. A missing file means all defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(AlbumsConfig::default()),
            Err(err) => return Err(ConfigError::Read(path.to_path_buf(), err)),
        };
        Self::parse(&contents).map_err(|err| ConfigError::Parse(path.to_path_buf(), err))
    }

    fn parse(contents: &str) -> Result<Self, serde_json::Error> {
        let file_config: AlbumsConfigFile = serde_json::from_str(contents)?;
        Ok(file_config.into())
    }

    pub fn api_base_url(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidApiBase(self.api_base.clone(), reason);
        let url = Url::parse(&self.api_base).map_err(|err| invalid(err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("not a base URL".to_string()));
        }
        Ok(url)
    }
}
