//! Persistence layer for whole-catalog snapshots.
//!
//! # Responsibility
//! - Define the `BookStore` contract used by the catalog service.
//! - Keep file layout, encoding and filename rules inside this boundary.
//!
//! # Invariants
//! - Loads are all-or-nothing: one malformed line fails the whole read.
//! - Saves replace the previous content entirely.

pub mod file_name;
pub mod flat_file;
