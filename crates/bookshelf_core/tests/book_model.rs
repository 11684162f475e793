use bookshelf_core::{Book, BookId, NewBook};
use std::collections::HashSet;

#[test]
fn new_book_gets_unique_uuid_ids() {
    let first = NewBook::new("Dune", "Herbert").into_book();
    let second = NewBook::new("Dune", "Herbert").into_book();

    assert_ne!(first.id(), second.id());
    assert_ne!(first, second);
    assert!(uuid::Uuid::parse_str(first.id().as_str()).is_ok());
}

#[test]
fn with_helpers_never_change_identity() {
    let book = Book::new("Draft", "Someone");
    let id = book.id().clone();

    let edited = book
        .with_title("Final")
        .with_author("Someone Else")
        .with_year(Some(2024))
        .with_isbn("123")
        .with_genres("essay");

    assert_eq!(edited.id(), &id);
    assert_eq!(edited.title(), "Final");
    assert_eq!(edited.year(), Some(2024));
}

#[test]
fn books_hash_by_identity() {
    let id = BookId::from("same");
    let set: HashSet<Book> = [
        Book::with_id(id.clone(), "One", "A"),
        Book::with_id(id, "Two", "B"),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn book_serialization_uses_expected_wire_fields() {
    let book = Book::with_id(BookId::from("b-1"), "Dune", "Herbert")
        .with_year(Some(1965))
        .with_genres("sci-fi");

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["id"], "b-1");
    assert_eq!(json["title"], "Dune");
    assert_eq!(json["author"], "Herbert");
    assert_eq!(json["year"], 1965);
    assert_eq!(json["isbn"], "");
    assert_eq!(json["genres"], "sci-fi");

    let decoded: Book = serde_json::from_value(json).unwrap();
    assert!(decoded.same_content(&book));
}
