//! Core domain logic for Bookshelf.
//! This crate owns the record format and every catalog invariant; front ends
//! only prompt and print.

pub mod codec;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use codec::line::{decode_line, encode_line, split_unescaped, CodecError, HEADER};
pub use config::{settings_path, ConfigError, Settings};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::book::{parse_year, Book, BookId, BookPatch, NewBook};
pub use repo::file_name::{normalize_file_name, resolve_catalog_path, sanitize_file_name};
pub use repo::flat_file::{BookStore, FlatFileStore, StoreError, StoreResult};
pub use search::filter::{AttributeQuery, FullTextQuery};
pub use service::catalog::{AuthorCount, Catalog, CatalogStats};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
