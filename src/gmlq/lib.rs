//! # Gmlq Architecture
//!
//! Gmlq is a **directory-lookup library** with a thin CLI client: given a
//! search term it queries an LDAP server, filters entries by configurable
//! attribute substring matches, and projects each match into a small fixed
//! record.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses the argument, prints output, owns exit codes      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Query Layer (search.rs, filter.rs)                         │
//! │  - Builds the LDAP filter from config + term                │
//! │  - Projects raw entries into ResultRecords                  │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Directory Layer (directory/)                               │
//! │  - Abstract Directory trait                                 │
//! │  - LdapDirectory (production), MemoryDirectory (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Configuration ([`config`]) sits beside the pipeline: it is resolved once
//! per process, validated, and then passed by reference — there is no global
//! configuration state.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From [`search`] inward, code takes regular arguments, returns regular
//! `Result` values, never writes to stdout/stderr, and never calls
//! `std::process::exit`. The network round-trip lives behind the
//! [`directory::Directory`] trait so the query layer tests against
//! [`directory::memory::MemoryDirectory`] with no server.
//!
//! ## Module Overview
//!
//! - [`config`]: configuration discovery, defaults, and validation
//! - [`filter`]: LDAP search-filter construction
//! - [`directory`]: directory abstraction and its LDAP/in-memory backends
//! - [`search`]: one lookup, end to end — filter, search, project
//! - [`output`]: tab-separated result rendering
//! - [`model`]: the projected result record
//! - [`error`]: error types

pub mod config;
pub mod directory;
pub mod error;
pub mod filter;
pub mod model;
pub mod output;
pub mod search;
