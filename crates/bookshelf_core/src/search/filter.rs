//! Record predicates for full-text and attribute search.
//!
//! # Responsibility
//! - Build the searchable text of a record.
//! - Evaluate attribute criteria with AND semantics.
//!
//! # Invariants
//! - Predicates are pure; ordering of results is the caller's concern.

use crate::model::book::Book;

/// Prepared full-text query.
///
/// Holds the lowercased needle so the same query can be tested against many
/// records without re-normalizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullTextQuery {
    needle: String,
}

impl FullTextQuery {
    /// Prepares `text` for matching; returns `None` for blank input.
    pub fn new(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            needle: text.to_lowercase(),
        })
    }

    /// Returns whether the record's searchable text contains the query.
    pub fn matches(&self, book: &Book) -> bool {
        searchable_text(book).contains(&self.needle)
    }
}

/// Lowercased `title author year isbn genres`, space-joined.
///
/// An absent year contributes an empty segment, keeping the separators.
pub fn searchable_text(book: &Book) -> String {
    let year = book.year().map(|year| year.to_string()).unwrap_or_default();
    [
        book.title(),
        book.author(),
        year.as_str(),
        book.isbn(),
        book.genres(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Attribute criteria; every supplied criterion must match.
///
/// Text criteria that are `None` or empty impose no constraint. A supplied
/// `year` matches only records whose year is set and equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub isbn: Option<String>,
    pub genres: Option<String>,
}

impl AttributeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn genres(mut self, genres: impl Into<String>) -> Self {
        self.genres = Some(genres.into());
        self
    }

    /// Returns whether `book` satisfies every supplied criterion.
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(year) = self.year {
            if book.year() != Some(year) {
                return false;
            }
        }
        contains_ci(book.title(), self.title.as_deref())
            && contains_ci(book.author(), self.author.as_deref())
            && contains_ci(book.isbn(), self.isbn.as_deref())
            && contains_ci(book.genres(), self.genres.as_deref())
    }
}

fn contains_ci(field: &str, criterion: Option<&str>) -> bool {
    match criterion {
        None | Some("") => true,
        Some(criterion) => field.to_lowercase().contains(&criterion.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::{searchable_text, AttributeQuery, FullTextQuery};
    use crate::model::book::Book;

    fn dune() -> Book {
        Book::new("Dune", "Frank Herbert")
            .with_year(Some(1965))
            .with_isbn("978-0441013593")
            .with_genres("Sci-Fi")
    }

    #[test]
    fn searchable_text_joins_fields_with_spaces() {
        let book = Book::new("Dune", "Herbert").with_genres("sf");
        assert_eq!(searchable_text(&book), "dune herbert   sf");
    }

    #[test]
    fn blank_full_text_query_is_rejected() {
        assert!(FullTextQuery::new("").is_none());
        assert!(FullTextQuery::new(" \t ").is_none());
    }

    #[test]
    fn full_text_spans_field_boundaries() {
        let query = FullTextQuery::new("herbert 1965").unwrap();
        assert!(query.matches(&dune()));
        assert!(FullTextQuery::new("SCI-fi").unwrap().matches(&dune()));
        assert!(!FullTextQuery::new("asimov").unwrap().matches(&dune()));
    }

    #[test]
    fn attribute_query_requires_all_criteria() {
        let book = dune();
        assert!(AttributeQuery::new().author("herb").matches(&book));
        assert!(AttributeQuery::new().title("du").isbn("0441").matches(&book));
        assert!(AttributeQuery::new()
            .author("HERB")
            .year(1965)
            .genres("sci")
            .matches(&book));
        assert!(!AttributeQuery::new().author("herb").year(1951).matches(&book));
    }

    #[test]
    fn supplied_year_never_matches_absent_year() {
        let book = Book::new("Untitled", "Anon");
        assert!(!AttributeQuery::new().year(0).matches(&book));
    }

    #[test]
    fn empty_criteria_impose_no_constraint() {
        let query = AttributeQuery {
            title: Some(String::new()),
            ..AttributeQuery::default()
        };
        assert!(query.matches(&dune()));
        assert!(AttributeQuery::new().matches(&Book::new("Any", "One")));
    }
}
