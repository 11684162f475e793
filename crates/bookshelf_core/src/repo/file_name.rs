//! Catalog file naming and location.
//!
//! # Responsibility
//! - Turn user-typed file names into safe names inside one base directory.
//! - Resolve the default base directory for catalog files.
//!
//! # Invariants
//! - A sanitized name never contains a path separator, so it cannot escape
//!   the base directory.
//! - Every resolved name ends with `.txt` (case-insensitive).

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Extension every catalog file carries.
pub const CATALOG_EXTENSION: &str = ".txt";

static UNSAFE_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\\/:*?"<>|]"#).expect("valid unsafe filename regex"));

/// Replaces reserved characters with `_` and drops directory components.
pub fn sanitize_file_name(input: &str) -> String {
    let replaced = UNSAFE_CHARS_RE.replace_all(input, "_");
    match replaced.rfind(['/', '\\']) {
        Some(index) => replaced[index + 1..].to_string(),
        None => replaced.into_owned(),
    }
}

/// Sanitizes `input` and appends `.txt` unless already present.
pub fn normalize_file_name(input: &str) -> String {
    let mut name = sanitize_file_name(input);
    if !name.to_lowercase().ends_with(CATALOG_EXTENSION) {
        name.push_str(CATALOG_EXTENSION);
    }
    name
}

/// Resolves a user-typed file name against `base_dir`.
///
/// Blank input falls back to `default_name`.
pub fn resolve_catalog_path(base_dir: &Path, input: &str, default_name: &str) -> PathBuf {
    let trimmed = input.trim();
    let chosen = if trimmed.is_empty() {
        default_name
    } else {
        trimmed
    };
    base_dir.join(normalize_file_name(chosen))
}

/// Default directory for catalog files.
///
/// Prefers the directory holding the running executable and falls back to
/// the current working directory, then to `.`.
pub fn default_base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
