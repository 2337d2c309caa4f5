use crate::error::{GmlqError, Result};
use directories::ProjectDirs;
use log::debug;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "gmlq.json";
const DEFAULT_PORT: u16 = 389;

/// Environment variable naming an explicit config file path. When set, it
/// wins over discovery and must be loadable.
pub const CONFIG_PATH_ENV: &str = "GMLQ_CONFIG";

/// Connection and query settings, read from gmlq.json.
///
/// Any subset of keys may appear in the file; absent keys take the defaults
/// below. `uri` and `search_base` have no usable default, so a config file
/// is effectively required.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GmlqConfig {
    /// Directory server host name or address (key `uri`)
    #[serde(rename = "uri", default)]
    pub server: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// DN of the subtree to search
    #[serde(default)]
    pub search_base: String,

    /// Attributes matched against the search term
    #[serde(default = "default_search_attrs")]
    pub search_attrs: Vec<String>,

    /// Attributes requested from the server for matched entries
    #[serde(default = "default_display_attrs")]
    pub display_attrs: Vec<String>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_search_attrs() -> Vec<String> {
    vec!["uid".to_string(), "cn".to_string()]
}

fn default_display_attrs() -> Vec<String> {
    vec!["mail".to_string(), "cn".to_string()]
}

impl Default for GmlqConfig {
    fn default() -> Self {
        Self {
            server: String::new(),
            port: DEFAULT_PORT,
            search_base: String::new(),
            search_attrs: default_search_attrs(),
            display_attrs: default_display_attrs(),
        }
    }
}

impl GmlqConfig {
    /// Locate and load the configuration.
    ///
    /// Order: `GMLQ_CONFIG` if set, then `gmlq.json` in the per-user config
    /// directory, then `gmlq.json` in the working directory. The first hit
    /// wins; a declared-but-broken source is an error, not a fallthrough.
    pub fn resolve() -> Result<Self> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            return Self::load(PathBuf::from(path));
        }

        for dir in search_dirs() {
            let candidate = dir.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Self::load(candidate);
            }
        }

        Err(GmlqError::ConfigInvalid(format!(
            "no {CONFIG_FILENAME} found and the directory server address has no default"
        )))
    }

    /// Load and validate a specific config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading config from {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| GmlqError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GmlqConfig =
            serde_json::from_str(&content).map_err(|source| GmlqError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.server.is_empty() {
            return Err(GmlqError::ConfigInvalid(
                "uri must name the directory server".into(),
            ));
        }
        if self.search_base.is_empty() {
            return Err(GmlqError::ConfigInvalid("search_base must not be empty".into()));
        }
        if self.port == 0 {
            return Err(GmlqError::ConfigInvalid("port must be positive".into()));
        }
        if self.search_attrs.is_empty() {
            return Err(GmlqError::ConfigInvalid("search_attrs must not be empty".into()));
        }
        if self.display_attrs.is_empty() {
            return Err(GmlqError::ConfigInvalid(
                "display_attrs must not be empty".into(),
            ));
        }
        Ok(self)
    }

    /// ldap:// URL for the configured server.
    pub fn server_url(&self) -> String {
        format!("ldap://{}:{}", self.server, self.port)
    }
}

fn search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(proj) = ProjectDirs::from("com", "gmlq", "gmlq") {
        dirs.push(proj.config_dir().to_path_buf());
    }
    dirs.push(PathBuf::from("."));
    dirs
}
