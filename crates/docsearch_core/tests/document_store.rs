use docsearch_core::{
    derive_excerpt, search_documents, Document, DocumentRepository, DocumentService,
    MemoryDocumentRepository, NewDocument, QueryMatcher,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn ids(documents: &[Document]) -> Vec<&str> {
    documents.iter().map(|doc| doc.id.as_str()).collect()
}

fn populated_service() -> DocumentService<MemoryDocumentRepository> {
    let service = DocumentService::seeded();
    service.add_document("Rust ownership", "Borrowing rules in <em>depth</em>");
    service.add_document("Grocery list", "milk, eggs, SAMPLE bread");
    service.add_document("", "");
    service.add_document("Ünïcode Title", "STRASSE and Ärger");
    service
}

#[test]
fn seeded_scenario_matches_expected_outputs() {
    let service = DocumentService::seeded();

    assert_eq!(ids(&service.search_documents("sample")), vec!["1"]);
    assert!(service.search_documents("zz").is_empty());

    let created = service.add_document("Test", "Hello World");
    assert_eq!(
        created,
        Document {
            id: "2".to_string(),
            title: "Test".to_string(),
            content: "Hello World".to_string(),
            excerpt: "Hello World...".to_string(),
        }
    );

    assert_eq!(service.get_document("2"), Some(created));
    assert_eq!(service.get_document("99"), None);
}

#[test]
fn ids_are_monotonic_from_seed() {
    let service = DocumentService::seeded();
    let second = service.add_document("a", "a");
    let third = service.add_document("b", "b");
    let fourth = service.add_document("c", "c");
    assert_eq!(
        vec![second.id, third.id, fourth.id],
        vec!["2".to_string(), "3".to_string(), "4".to_string()]
    );
}

#[test]
fn add_then_get_roundtrips_title_and_content() {
    let service = DocumentService::seeded();
    let content = "<h1>Heading</h1>\n<p>Body with <b>markup</b></p>";
    let created = service.add_document("Round trip", content);

    let loaded = service.get_document(&created.id).unwrap();
    assert_eq!(loaded.title, "Round trip");
    assert_eq!(loaded.content, content);
    assert_eq!(loaded.excerpt, derive_excerpt(content));
}

#[test]
fn excerpt_is_first_hundred_chars_plus_suffix() {
    let service = DocumentService::seeded();
    let long = format!("<p>{}</p>", "x".repeat(200));
    let created = service.add_document("long", long.as_str());

    let expected = format!("{}...", &long[..100]);
    assert_eq!(created.excerpt, expected);
    assert!(created.excerpt.starts_with("<p>"));
}

#[test]
fn excerpt_may_cut_inside_markup() {
    let content = format!("{}<strong>bold</strong>", "a".repeat(95));
    let excerpt = derive_excerpt(&content);
    assert_eq!(excerpt, format!("{}<stro...", "a".repeat(95)));
}

#[test]
fn empty_query_returns_full_list_in_order() {
    let service = populated_service();
    assert_eq!(service.search_documents(""), service.list_documents());
}

#[test]
fn search_obeys_substring_law_and_order() {
    let service = populated_service();
    let listed = service.list_documents();

    for query in ["sample", "SAMPLE", "rust", "<em>", "ärger", "title", "", "nothing-here", " "] {
        let hits = service.search_documents(query);
        let needle = query.to_lowercase();
        let expected = listed
            .iter()
            .filter(|doc| {
                doc.title.to_lowercase().contains(&needle)
                    || doc.content.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect::<Vec<_>>();
        assert_eq!(hits, expected, "query `{query}`");
    }
}

#[test]
fn search_is_case_insensitive_on_both_sides() {
    let service = populated_service();
    assert_eq!(ids(&service.search_documents("sample")), vec!["1", "3"]);
    assert_eq!(ids(&service.search_documents("üNÏCODE")), vec!["5"]);
}

#[test]
fn empty_title_and_content_are_accepted() {
    let service = DocumentService::seeded();
    let created = service.add_document("", "");
    assert_eq!(created.excerpt, "...");
    assert_eq!(service.get_document(&created.id).unwrap().title, "");
}

#[test]
fn created_document_is_visible_to_search_immediately() {
    let service = DocumentService::seeded();
    assert!(service.search_documents("fresh").is_empty());
    let created = service.add_document("Fresh entry", "body");
    assert_eq!(service.search_documents("fresh"), vec![created]);
}

#[test]
fn search_runs_directly_against_a_repository() {
    let repo = MemoryDocumentRepository::seeded();
    repo.create_document(NewDocument::new("Other", "content"));
    repo.create_document(NewDocument::new("Another", "other content"));

    assert_eq!(ids(&search_documents(&repo, "OTHER")), vec!["2", "3"]);
    assert_eq!(ids(&search_documents(&repo, "")), vec!["1", "2", "3"]);
    assert!(search_documents(&repo, "missing").is_empty());
}

#[test]
fn matcher_checks_single_documents() {
    let repo = MemoryDocumentRepository::seeded();
    let seed = repo.get_document("1").unwrap();
    assert!(QueryMatcher::new("SAMPLE DOC").matches(&seed));
    assert!(!QueryMatcher::new("other").matches(&seed));
}

#[test]
fn excerpt_limit_counts_emoji_as_two_units() {
    let service = DocumentService::seeded();
    let content = "\u{1F600}".repeat(60);
    let created = service.add_document("emoji", content.as_str());

    assert_eq!(created.excerpt, format!("{}...", "\u{1F600}".repeat(50)));
    let kept = created.excerpt.trim_end_matches("...");
    assert_eq!(kept.encode_utf16().count(), 100);
    assert_eq!(kept.chars().count(), 50);
}

#[test]
fn concurrent_adds_never_duplicate_ids() {
    let service = Arc::new(DocumentService::seeded());
    let handles = (0..8)
        .map(|worker| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                (0..25)
                    .map(|n| service.add_document(format!("w{worker}"), format!("n{n}")).id)
                    .collect::<Vec<_>>()
            })
        })
        .collect::<Vec<_>>();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(seen.insert(id), "duplicate id allocated");
        }
    }

    assert_eq!(seen.len(), 200);
    assert_eq!(service.document_count(), 201);
    let expected = (2..=201).map(|n| n.to_string()).collect::<HashSet<_>>();
    assert_eq!(seen, expected);
}
