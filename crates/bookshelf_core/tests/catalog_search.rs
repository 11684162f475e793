use bookshelf_core::{AttributeQuery, AuthorCount, Book, Catalog};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn dune() -> Book {
    Book::new("Dune", "Herbert").with_year(Some(1965))
}

fn foundation() -> Book {
    Book::new("Foundation", "Asimov").with_year(Some(1951))
}

fn classics() -> Catalog {
    [dune(), foundation()].into_iter().collect()
}

#[test]
fn full_text_matches_year_text() {
    let catalog = classics();
    let hits = catalog.find_full_text("1965");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title(), "Dune");
}

#[test]
fn full_text_blank_query_returns_nothing() {
    let catalog = classics();
    assert!(catalog.find_full_text("").is_empty());
    assert!(catalog.find_full_text("   ").is_empty());
}

#[test]
fn full_text_is_case_insensitive_and_ordered() {
    let mut catalog = classics();
    catalog.add(Book::new("Second Foundation", "Asimov").with_genres("Sci-Fi"));

    let hits: Vec<_> = catalog
        .find_full_text("FOUNDATION")
        .into_iter()
        .map(|book| book.title().to_string())
        .collect();
    assert_eq!(hits, vec!["Foundation", "Second Foundation"]);
    assert_eq!(catalog.find_full_text("sci-fi").len(), 1);
}

#[test]
fn attribute_search_combines_criteria_with_and() {
    let catalog = classics();

    let by_author = catalog.search_by_attributes(&AttributeQuery::new().author("herb"));
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0].author(), "Herbert");

    let narrowed =
        catalog.search_by_attributes(&AttributeQuery::new().author("herb").year(1951));
    assert!(narrowed.is_empty());
}

#[test]
fn attribute_search_without_criteria_returns_everything() {
    let catalog = classics();
    assert_eq!(catalog.search_by_attributes(&AttributeQuery::new()).len(), 2);
}

#[test]
fn attribute_year_skips_records_without_year() {
    let mut catalog = classics();
    catalog.add(Book::new("Undated", "Anon"));
    let hits = catalog.search_by_attributes(&AttributeQuery::new().year(1951));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title(), "Foundation");
}

#[test]
fn top_authors_sorts_by_count() {
    let catalog: Catalog = ["A", "B", "A", "C", "B", "A"]
        .into_iter()
        .map(|author| Book::new("Title", author))
        .collect();

    assert_eq!(
        catalog.top_authors(2),
        vec![
            AuthorCount {
                author: "A".to_string(),
                count: 3
            },
            AuthorCount {
                author: "B".to_string(),
                count: 2
            },
        ]
    );
}

#[test]
fn recommend_is_deterministic_for_seeded_rng() {
    let catalog: Catalog = (0..10)
        .map(|index| Book::new(format!("Book {index}"), "Author"))
        .collect();
    let snapshot = catalog.list_all();

    let mut rng = StdRng::seed_from_u64(42);
    let picked = catalog.recommend_random(&mut rng).unwrap().clone();

    let mut reference = StdRng::seed_from_u64(42);
    let expected = snapshot.choose(&mut reference).unwrap();
    assert!(picked.same_content(expected));
}

#[test]
fn recommend_on_empty_catalog_is_none() {
    let catalog = Catalog::new();
    let mut rng = StdRng::seed_from_u64(7);
    assert!(catalog.recommend_random(&mut rng).is_none());
    assert!(catalog.recommend().is_none());
}

#[test]
fn recommend_eventually_visits_every_record() {
    let catalog = classics();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(catalog.recommend_random(&mut rng).unwrap().id().clone());
    }
    assert_eq!(seen.len(), 2);
}
