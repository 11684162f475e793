//! In-memory search over catalog records.
//!
//! # Responsibility
//! - Provide full-text and attribute predicates over `Book` values.
//!
//! # Invariants
//! - Matching is case-insensitive substring matching, except year equality.
//! - Blank queries match nothing; blank criteria constrain nothing.

pub mod filter;
