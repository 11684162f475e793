//! Flat-file store contract and implementation.
//!
//! # Responsibility
//! - Write a header plus one encoded line per record.
//! - Read a file back into records, skipping header and blank lines.
//!
//! # Invariants
//! - `save` writes a sibling temporary file and renames it over the target,
//!   so a failed save never leaves a half-written catalog behind.
//! - `load` returns either every record in the file or an error.

use crate::codec::line::{decode_line, encode_line, is_header, CodecError, HEADER};
use crate::model::book::Book;
use log::{error, info};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;

const TEMP_EXTENSION: &str = "tmp";

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for catalog snapshots.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Load target does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// A stored line could not be decoded; `line` is 1-based.
    #[error("malformed record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: CodecError,
    },
    /// Underlying read/write failure.
    #[error("I/O failure on `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Storage contract for whole-catalog snapshots.
pub trait BookStore {
    /// Replaces stored content with `books`, in order.
    fn save(&self, books: &[Book]) -> StoreResult<()>;
    /// Reads every stored record, in order.
    fn load(&self) -> StoreResult<Vec<Book>>;
}

/// `|`-delimited UTF-8 text file store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    /// Creates a store over an already-resolved file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".");
        name.push(TEMP_EXTENSION);
        self.path.with_file_name(name)
    }

    fn write_snapshot(&self, target: &Path, books: &[Book]) -> io::Result<()> {
        let file = fs::File::create(target)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{HEADER}")?;
        for book in books {
            writeln!(writer, "{}", encode_line(book))?;
        }
        writer.flush()?;
        writer.get_ref().sync_all()
    }
}

impl BookStore for FlatFileStore {
    fn save(&self, books: &[Book]) -> StoreResult<()> {
        let started_at = Instant::now();
        let temp_path = self.temp_path();

        if let Err(err) = self.write_snapshot(&temp_path, books) {
            let _ = fs::remove_file(&temp_path);
            error!(
                "event=catalog_save module=repo status=error stage=write duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(StoreError::io(&temp_path, err));
        }

        if let Err(err) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            error!(
                "event=catalog_save module=repo status=error stage=rename duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(StoreError::io(&self.path, err));
        }

        info!(
            "event=catalog_save module=repo status=ok count={} path={} duration_ms={}",
            books.len(),
            self.path.display(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    fn load(&self) -> StoreResult<Vec<Book>> {
        let started_at = Instant::now();
        if !self.path.exists() {
            info!(
                "event=catalog_load module=repo status=not_found path={}",
                self.path.display()
            );
            return Err(StoreError::FileNotFound(self.path.clone()));
        }

        let content =
            fs::read_to_string(&self.path).map_err(|err| StoreError::io(&self.path, err))?;
        let books = parse_snapshot(&content).inspect_err(|err| {
            error!(
                "event=catalog_load module=repo status=error path={} error={}",
                self.path.display(),
                err
            );
        })?;

        info!(
            "event=catalog_load module=repo status=ok count={} path={} duration_ms={}",
            books.len(),
            self.path.display(),
            started_at.elapsed().as_millis()
        );
        Ok(books)
    }
}

/// Decodes file content into records.
///
/// The first line is skipped when it is the header; blank lines are skipped
/// anywhere. Both `\n` and `\r\n` terminators are accepted.
pub fn parse_snapshot(content: &str) -> StoreResult<Vec<Book>> {
    let mut books = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if index == 0 && is_header(line) {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        let book = decode_line(line).map_err(|source| StoreError::MalformedRecord {
            line: index + 1,
            source,
        })?;
        books.push(book);
    }
    Ok(books)
}
