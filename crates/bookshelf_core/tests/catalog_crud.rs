use bookshelf_core::{Book, BookId, BookPatch, Catalog, NewBook};

fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add(Book::new("Dune", "Herbert").with_year(Some(1965)));
    catalog.add(Book::new("Foundation", "Asimov").with_year(Some(1951)));
    catalog.add(Book::new("Solaris", "Lem"));
    catalog
}

#[test]
fn add_preserves_insertion_order_and_allows_duplicates() {
    let mut catalog = sample_catalog();
    catalog.add(Book::new("Dune", "Herbert").with_year(Some(1965)));

    let titles: Vec<_> = catalog
        .list_all()
        .iter()
        .map(|book| book.title().to_string())
        .collect();
    assert_eq!(titles, vec!["Dune", "Foundation", "Solaris", "Dune"]);
    assert_eq!(catalog.total_count(), 4);
}

#[test]
fn create_assigns_fresh_id_and_normalizes_optionals() {
    let mut catalog = Catalog::new();
    let created = catalog
        .create(NewBook {
            title: "Hyperion".to_string(),
            author: "Simmons".to_string(),
            year: Some(1989),
            isbn: None,
            genres: Some("sci-fi".to_string()),
        })
        .clone();

    assert_eq!(created.isbn(), "");
    assert_eq!(catalog.find_by_id(created.id()).unwrap().title(), "Hyperion");
}

#[test]
fn remove_absent_id_is_noop() {
    let mut catalog = sample_catalog();
    assert!(!catalog.remove_by_id(&BookId::from("no-such-id")));
    assert_eq!(catalog.total_count(), 3);
}

#[test]
fn remove_present_id_decrements_by_one() {
    let mut catalog = sample_catalog();
    let target = catalog.list_all()[1].id().clone();

    assert!(catalog.remove_by_id(&target));
    assert_eq!(catalog.total_count(), 2);
    assert!(catalog.find_by_id(&target).is_none());
    assert!(!catalog.remove_by_id(&target));
}

#[test]
fn find_by_id_returns_none_when_missing() {
    let catalog = sample_catalog();
    assert!(catalog.find_by_id(&BookId::from("missing")).is_none());
}

#[test]
fn list_all_is_an_independent_copy() {
    let mut catalog = sample_catalog();
    let mut snapshot = catalog.list_all();
    snapshot.clear();
    assert_eq!(catalog.total_count(), 3);

    let snapshot = catalog.list_all();
    let first = snapshot[0].id().clone();
    catalog.remove_by_id(&first);
    assert_eq!(snapshot.len(), 3);
    assert_eq!(catalog.total_count(), 2);
}

#[test]
fn update_applies_patch_in_place() {
    let mut catalog = sample_catalog();
    let target = catalog.list_all()[2].id().clone();

    let patch = BookPatch {
        title: Some(" Solaris (1961) ".to_string()),
        year: Some("1961".to_string()),
        genres: Some("".to_string()),
        ..BookPatch::default()
    };
    let edited = catalog.update(&target, &patch).unwrap().clone();

    assert_eq!(edited.title(), "Solaris (1961)");
    assert_eq!(edited.author(), "Lem");
    assert_eq!(edited.year(), Some(1961));
    assert_eq!(edited.genres(), "");
    assert!(catalog.list_all()[2].same_content(&edited));
}
