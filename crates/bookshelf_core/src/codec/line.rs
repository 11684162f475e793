//! Line codec for persisted records.
//!
//! # Responsibility
//! - Escape and join the six record fields into one `|`-delimited line.
//! - Split lines on unescaped delimiters and rebuild records.
//!
//! # Invariants
//! - Field order is `id|title|author|year|isbn|genres`.
//! - `decode_line(&encode_line(book))` restores every field, minus `\r`.
//! - Unparsable year text decodes to "no year", never to an error.

use crate::model::book::{parse_year, Book, BookId};
use log::warn;
use thiserror::Error;

/// Field separator of the flat-file format.
pub const FIELD_DELIMITER: char = '|';
/// Number of fields in one record line.
pub const FIELD_COUNT: usize = 6;
/// Canonical header written as the first line of every saved file.
pub const HEADER: &str = "ID|TITLE|AUTHOR|YEAR|ISBN|GENRES";

const ESCAPE: char = '\\';

pub type CodecResult<T> = Result<T, CodecError>;

/// Decode failure for a single line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Line splits into fewer fields than a record needs.
    #[error("malformed record: expected {expected} fields, found {found}")]
    MalformedRecord { expected: usize, found: usize },
}

/// Returns whether `line` is the header, ignoring case and surrounding space.
pub fn is_header(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(HEADER)
}

/// Encodes one record as a single line without a trailing newline.
pub fn encode_line(book: &Book) -> String {
    let year = book.year().map(|year| year.to_string()).unwrap_or_default();
    let fields = [
        book.id().as_str(),
        book.title(),
        book.author(),
        year.as_str(),
        book.isbn(),
        book.genres(),
    ];

    let mut line = String::new();
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            line.push(FIELD_DELIMITER);
        }
        line.push_str(&escape_field(field));
    }
    line
}

/// Decodes one line into a record.
///
/// # Errors
/// - `CodecError::MalformedRecord` when fewer than six fields are present.
///
/// Extra trailing fields are ignored so lines written by newer tools or
/// edited by hand still load.
pub fn decode_line(line: &str) -> CodecResult<Book> {
    let parts = split_unescaped(line, FIELD_DELIMITER);
    if parts.len() < FIELD_COUNT {
        return Err(CodecError::MalformedRecord {
            expected: FIELD_COUNT,
            found: parts.len(),
        });
    }
    if parts.len() > FIELD_COUNT {
        warn!(
            "event=record_decode module=codec status=extra_fields expected={} found={}",
            FIELD_COUNT,
            parts.len()
        );
    }

    let mut fields = parts.into_iter();
    let mut next = || fields.next().unwrap_or_default();
    let id = next();
    let title = next();
    let author = next();
    let year = parse_year(&next());
    let isbn = next();
    let genres = next();

    Ok(Book::with_id(BookId::from(id), title, author)
        .with_year(year)
        .with_isbn(isbn)
        .with_genres(genres))
}

/// Escapes one field value for embedding in a line.
///
/// Backslash, delimiter and newline become two-character escapes; carriage
/// returns are dropped.
pub fn escape_field(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            ESCAPE => escaped.push_str("\\\\"),
            FIELD_DELIMITER => escaped.push_str("\\|"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

/// Splits `line` on unescaped `delimiter` and unescapes every part.
///
/// A backslash escapes the next character: `\n` yields a newline, any other
/// character (including the delimiter and the backslash) is taken literally.
/// A lone trailing backslash is kept as-is.
///
/// Always returns at least one part; an empty line yields `[""]`.
pub fn split_unescaped(line: &str, delimiter: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for ch in line.chars() {
        if escaped {
            current.push(unescape_char(ch));
            escaped = false;
        } else if ch == ESCAPE {
            escaped = true;
        } else if ch == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    if escaped {
        current.push(ESCAPE);
    }
    parts.push(current);
    parts
}

fn unescape_char(ch: char) -> char {
    match ch {
        'n' => '\n',
        other => other,
    }
}
