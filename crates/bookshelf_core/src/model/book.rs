//! Book domain model.
//!
//! # Responsibility
//! - Define the record held by the catalog and persisted by the codec.
//! - Provide replacement helpers so edits never touch identity.
//!
//! # Invariants
//! - `id` is assigned once and has no setter.
//! - `isbn` and `genres` are never absent; missing values are empty strings.
//! - `PartialEq`/`Hash` consider `id` only.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Opaque record identifier.
///
/// Freshly created records get UUID v4 text. Identifiers read from files are
/// kept verbatim, so hand-edited catalogs with arbitrary ids stay loadable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Generates a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BookId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One catalog record.
///
/// A value-with-identity: fields other than `id` are replaced through the
/// consuming `with_*` helpers, which always return a record with the same id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    year: Option<i32>,
    isbn: String,
    genres: String,
}

impl Book {
    /// Creates a record with a generated id and empty optional fields.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self::with_id(BookId::generate(), title, author)
    }

    /// Creates a record with a caller-provided id.
    ///
    /// Used by the codec when decoding persisted lines.
    pub fn with_id(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year: None,
            isbn: String::new(),
            genres: String::new(),
        }
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn genres(&self) -> &str {
        &self.genres
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    pub fn with_genres(mut self, genres: impl Into<String>) -> Self {
        self.genres = genres.into();
        self
    }

    /// Returns whether every field, including `id`, matches `other`.
    ///
    /// `==` compares identity only; this is the field-by-field check used
    /// when verifying persistence round trips.
    pub fn same_content(&self, other: &Book) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.author == other.author
            && self.year == other.year
            && self.isbn == other.isbn
            && self.genres == other.genres
    }

    /// One-line listing form: `[id] title — author`.
    pub fn summary_line(&self) -> String {
        format!("[{}] {} — {}", self.id, self.title, self.author)
    }

    /// Full listing form with `-` placeholders for empty optional fields.
    pub fn detail_line(&self) -> String {
        format!(
            "ID:{} | Title:{} | Author:{} | Year:{} | ISBN:{} | Genres:{}",
            self.id,
            self.title,
            self.author,
            self.year
                .map(|year| year.to_string())
                .unwrap_or_else(|| "-".to_string()),
            placeholder_if_empty(&self.isbn),
            placeholder_if_empty(&self.genres),
        )
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Input for creating a new record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    pub isbn: Option<String>,
    pub genres: Option<String>,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    /// Builds the record, assigning a fresh id.
    pub fn into_book(self) -> Book {
        Book::new(self.title, self.author)
            .with_year(self.year)
            .with_isbn(self.isbn.unwrap_or_default())
            .with_genres(self.genres.unwrap_or_default())
    }
}

/// Partial edit of an existing record.
///
/// Every field is raw user input. `None` or blank-after-trim keeps the
/// current value; anything else replaces it with the trimmed text. Year text
/// that does not parse keeps the current year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
    pub isbn: Option<String>,
    pub genres: Option<String>,
}

impl BookPatch {
    /// Returns whether applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        [
            &self.title,
            &self.author,
            &self.year,
            &self.isbn,
            &self.genres,
        ]
        .into_iter()
        .all(|field| provided(field).is_none())
    }

    /// Applies the patch, returning the edited record with the same id.
    pub fn apply(&self, book: Book) -> Book {
        let mut book = book;
        if let Some(title) = provided(&self.title) {
            book = book.with_title(title);
        }
        if let Some(author) = provided(&self.author) {
            book = book.with_author(author);
        }
        if let Some(year) = provided(&self.year).and_then(parse_year) {
            book = book.with_year(Some(year));
        }
        if let Some(isbn) = provided(&self.isbn) {
            book = book.with_isbn(isbn);
        }
        if let Some(genres) = provided(&self.genres) {
            book = book.with_genres(genres);
        }
        book
    }
}

/// Parses year text leniently.
///
/// Returns `None` for empty or non-numeric input instead of failing, so
/// hand-edited files and sloppy prompts never abort an operation.
pub fn parse_year(text: &str) -> Option<i32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i32>().ok()
}

fn provided(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
}

fn placeholder_if_empty(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
