//! # Directory Layer
//!
//! This module defines the directory-service abstraction for gmlq. The
//! [`Directory`] trait is the capability the query layer needs: hand over a
//! base DN, a filter, and the attributes to fetch, get entries back.
//!
//! ## Implementations
//!
//! - [`ldap::LdapDirectory`]: production backend over the `ldap3` sync
//!   client. One connection per search, unbound on every exit path.
//! - [`memory::MemoryDirectory`]: canned entries for testing, no network.
//!   Records the last request so tests can assert on the filter and the
//!   requested attributes.
//!
//! Entries cross the boundary as [`DirectoryEntry`] attribute maps, so the
//! query layer never sees `ldap3` types.

use crate::error::Result;
use std::collections::HashMap;

pub mod ldap;
pub mod memory;

/// One entry returned by a directory search, reduced to its attribute values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub attrs: HashMap<String, Vec<String>>,
}

impl DirectoryEntry {
    /// First value of the named attribute, if the entry carries it.
    pub fn first(&self, attr: &str) -> Option<&str> {
        self.attrs.get(attr).and_then(|v| v.first()).map(String::as_str)
    }
}

/// Abstract interface over a directory service.
///
/// Implementations own connection lifecycle: each call is one self-contained
/// search against `base` (subtree scope), returning entries in server order.
pub trait Directory {
    /// Run one search and return every matching entry.
    fn search(&mut self, base: &str, filter: &str, attrs: &[String]) -> Result<Vec<DirectoryEntry>>;
}
