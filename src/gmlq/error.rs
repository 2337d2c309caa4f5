use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GmlqError {
    #[error("cannot read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("cannot reach directory server {url}: {source}")]
    ConnectionFailed {
        url: String,
        source: ldap3::LdapError,
    },

    #[error("directory search rejected: {0}")]
    SearchRejected(ldap3::LdapError),
}

pub type Result<T> = std::result::Result<T, GmlqError>;
