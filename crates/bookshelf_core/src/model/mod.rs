//! Domain model for catalog records.
//!
//! # Responsibility
//! - Define the canonical `Book` record and its identity type.
//! - Provide creation and edit inputs used by the catalog service.
//!
//! # Invariants
//! - Every record is identified by a stable `BookId`.
//! - Record equality is identity equality; other fields never participate.

pub mod book;
