use crate::directory::{Directory, DirectoryEntry};
use crate::error::{GmlqError, Result};
use ldap3::{DerefAliases, LdapConn, Scope, SearchEntry, SearchOptions};
use log::debug;

/// Production backend over the `ldap3` synchronous client.
///
/// Each [`search`](Directory::search) opens its own plain-TCP connection,
/// runs one subtree search with alias dereferencing disabled and no client
/// size or time limits, and unbinds whether the search succeeded or not.
pub struct LdapDirectory {
    url: String,
}

impl LdapDirectory {
    /// `url` is an `ldap://host:port` endpoint, see
    /// [`GmlqConfig::server_url`](crate::config::GmlqConfig::server_url).
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn run_search(
        conn: &mut LdapConn,
        base: &str,
        filter: &str,
        attrs: &[String],
    ) -> Result<Vec<DirectoryEntry>> {
        let (entries, _res) = conn
            .with_search_options(SearchOptions::new().deref(DerefAliases::Never))
            .search(base, Scope::Subtree, filter, attrs.to_vec())
            .and_then(|result| result.success())
            .map_err(GmlqError::SearchRejected)?;

        Ok(entries
            .into_iter()
            .map(|entry| {
                let entry = SearchEntry::construct(entry);
                DirectoryEntry { attrs: entry.attrs }
            })
            .collect())
    }
}

impl Directory for LdapDirectory {
    fn search(&mut self, base: &str, filter: &str, attrs: &[String]) -> Result<Vec<DirectoryEntry>> {
        debug!("connecting to {}", self.url);
        let mut conn = LdapConn::new(&self.url).map_err(|source| GmlqError::ConnectionFailed {
            url: self.url.clone(),
            source,
        })?;

        let outcome = Self::run_search(&mut conn, base, filter, attrs);

        // Release the connection no matter how the search went.
        let _ = conn.unbind();
        outcome
    }
}
