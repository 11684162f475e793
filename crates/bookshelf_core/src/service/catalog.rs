//! Catalog use-case service.
//!
//! # Responsibility
//! - Own the ordered in-memory record collection.
//! - Provide CRUD, search, recommendation and statistics entry points.
//! - Delegate snapshot persistence to a `BookStore`.
//!
//! # Invariants
//! - Insertion order is preserved by every operation.
//! - "Not found" and "empty" outcomes are `Option`/empty results, not errors.
//! - A failed load leaves the collection untouched.

use crate::model::book::{Book, BookId, BookPatch, NewBook};
use crate::repo::flat_file::{BookStore, FlatFileStore, StoreResult};
use crate::search::filter::{AttributeQuery, FullTextQuery};
use log::info;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use std::path::Path;

/// Number of records written by one author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorCount {
    pub author: String,
    pub count: usize,
}

/// Aggregate figures for the stats screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub top_authors: Vec<AuthorCount>,
    pub max_year: Option<i32>,
}

/// Ordered in-memory book collection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Identifier uniqueness is not enforced.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Builds a record with a fresh id, appends it and returns it.
    pub fn create(&mut self, new_book: NewBook) -> &Book {
        let book = new_book.into_book();
        info!("event=book_create module=catalog status=ok id={}", book.id());
        self.books.push(book);
        &self.books[self.books.len() - 1]
    }

    /// Applies `patch` to the first record with `id`.
    ///
    /// Returns the edited record, or `None` when no record has that id.
    pub fn update(&mut self, id: &BookId, patch: &BookPatch) -> Option<&Book> {
        let slot = self.books.iter_mut().find(|book| book.id() == id)?;
        let edited = patch.apply(slot.clone());
        *slot = edited;
        info!("event=book_update module=catalog status=ok id={id}");
        Some(&*slot)
    }

    /// Removes the first record with `id`; returns whether one was removed.
    pub fn remove_by_id(&mut self, id: &BookId) -> bool {
        match self.books.iter().position(|book| book.id() == id) {
            Some(index) => {
                self.books.remove(index);
                info!("event=book_delete module=catalog status=ok id={id}");
                true
            }
            None => false,
        }
    }

    pub fn find_by_id(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id() == id)
    }

    /// Returns an independent copy of every record, in order.
    pub fn list_all(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Case-insensitive substring search across all text fields and year.
    ///
    /// Blank queries return an empty result.
    pub fn find_full_text(&self, query: &str) -> Vec<&Book> {
        let Some(query) = FullTextQuery::new(query) else {
            return Vec::new();
        };
        self.books.iter().filter(|book| query.matches(book)).collect()
    }

    /// Returns records satisfying every supplied criterion of `query`.
    pub fn search_by_attributes(&self, query: &AttributeQuery) -> Vec<&Book> {
        self.books.iter().filter(|book| query.matches(book)).collect()
    }

    /// Picks one record uniformly at random using `rng`.
    pub fn recommend_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Book> {
        self.books.choose(rng)
    }

    /// Picks one record using the thread-local generator.
    pub fn recommend(&self) -> Option<&Book> {
        self.recommend_random(&mut rand::thread_rng())
    }

    pub fn total_count(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns up to `limit` authors by descending record count.
    ///
    /// Authors are grouped by exact text. Equal counts keep the order in
    /// which each author first appears in the catalog.
    pub fn top_authors(&self, limit: usize) -> Vec<AuthorCount> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<AuthorCount> = Vec::new();
        for book in &self.books {
            match positions.get(book.author()) {
                Some(&index) => counts[index].count += 1,
                None => {
                    positions.insert(book.author(), counts.len());
                    counts.push(AuthorCount {
                        author: book.author().to_string(),
                        count: 1,
                    });
                }
            }
        }
        counts.sort_by(|left, right| right.count.cmp(&left.count));
        counts.truncate(limit);
        counts
    }

    /// Latest year among records that have one.
    pub fn max_year(&self) -> Option<i32> {
        self.books.iter().filter_map(Book::year).max()
    }

    pub fn stats(&self, top_authors: usize) -> CatalogStats {
        CatalogStats {
            total: self.total_count(),
            top_authors: self.top_authors(top_authors),
            max_year: self.max_year(),
        }
    }

    /// Writes the whole catalog to `path`, replacing previous content.
    pub fn save(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        self.save_to(&FlatFileStore::new(path.as_ref()))
    }

    /// Reads `path` and replaces or extends the catalog with its records.
    ///
    /// Returns the number of records read. On error the catalog is unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>, replace: bool) -> StoreResult<usize> {
        self.load_from(&FlatFileStore::new(path.as_ref()), replace)
    }

    pub fn save_to<S: BookStore + ?Sized>(&self, store: &S) -> StoreResult<()> {
        store.save(&self.books)
    }

    pub fn load_from<S: BookStore + ?Sized>(
        &mut self,
        store: &S,
        replace: bool,
    ) -> StoreResult<usize> {
        let loaded = store.load()?;
        let count = loaded.len();
        if replace {
            self.books = loaded;
        } else {
            self.books.extend(loaded);
        }
        info!(
            "event=catalog_merge module=catalog status=ok mode={} loaded={} total={}",
            if replace { "replace" } else { "append" },
            count,
            self.books.len()
        );
        Ok(count)
    }
}

impl FromIterator<Book> for Catalog {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}
