//! # sitehub-database
//!
//! Content document store for SiteHub: the [`SiteInfoStore`] abstraction,
//! its PostgreSQL and in-memory implementations, connection management,
//! migrations and the typed per-collection repositories built on top.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{MemorySiteInfoStore, PgSiteInfoStore, SiteInfoStore, StoredEntry};
