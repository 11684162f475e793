//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model, search and persistence into catalog-level APIs.
//! - Keep front ends decoupled from file format details.

pub mod catalog;
