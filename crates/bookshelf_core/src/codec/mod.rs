//! Flat-file record codec.
//!
//! # Responsibility
//! - Encode one `Book` as one delimited text line and decode it back.
//! - Own the escaping rules and the canonical header line.
//!
//! # Invariants
//! - An encoded line never contains an unescaped delimiter inside a field.
//! - An encoded line never contains a literal newline or carriage return.

pub mod line;
