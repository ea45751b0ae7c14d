use stockrec_match::{MatchOutcome, resolve};
use stockrec_model::{CatalogEntry, Category, MemoryCatalogStore};

fn entry(code: &str, labels: &[&str]) -> CatalogEntry {
    CatalogEntry {
        variant_labels: labels.iter().map(|label| (*label).to_string()).collect(),
        ..CatalogEntry::new(code)
    }
}

fn matched_code(outcome: MatchOutcome) -> String {
    match outcome {
        MatchOutcome::Matched(entry) => entry.code,
        MatchOutcome::NotFound { code, .. } => panic!("expected match, got not-found for {code}"),
    }
}

#[test]
fn dashed_document_code_resolves_dashless_entry() {
    // catalog holds "ABC123", the document says "ABC-123"
    let store = MemoryCatalogStore::with_entries([entry("ABC123", &[])]);
    let outcome = resolve(&store, "ABC-123", None, None).expect("resolve");
    assert_eq!(matched_code(outcome), "ABC123");
}

#[test]
fn dashless_document_code_resolves_dashed_entry() {
    // the opposite direction: catalog holds "WS-712TBK", the document
    // drops the dash
    let store = MemoryCatalogStore::with_entries([entry("WS-712TBK", &[])]);
    let outcome = resolve(&store, "WS712TBK", None, None).expect("resolve");
    assert_eq!(matched_code(outcome), "WS-712TBK");
}

#[test]
fn unknown_code_reports_normalized_form() {
    let store = MemoryCatalogStore::new();
    let outcome = resolve(&store, "ws—999xx", None, None).expect("resolve");
    match outcome {
        MatchOutcome::NotFound {
            code,
            size,
            category,
        } => {
            assert_eq!(code, "WS-999XX");
            assert_eq!(size, None);
            assert_eq!(category, None);
        }
        MatchOutcome::Matched(entry) => panic!("unexpected match: {}", entry.code),
    }
}

#[test]
fn no_descriptors_accepts_first_candidate() {
    let store = MemoryCatalogStore::with_entries([
        entry("WS-712", &["Top | 1"]),
        entry("WS712", &["Bottom | 1"]),
    ]);
    let outcome = resolve(&store, "WS-712", None, None).expect("resolve");
    // store order is deterministic (sorted by code)
    assert_eq!(matched_code(outcome), "WS-712");
}

#[test]
fn descriptors_select_within_a_code_family() {
    // the variant set of "WS-712" covers both spellings, so both family
    // members come back from the lookup and the labels decide
    let store = MemoryCatalogStore::with_entries([
        entry("WS-712", &["Top | 1"]),
        entry("WS712", &["Bottom | 1"]),
    ]);
    let outcome = resolve(&store, "WS-712", Some("1"), Some(Category::Top)).expect("resolve");
    assert_eq!(matched_code(outcome), "WS-712");

    let outcome = resolve(&store, "WS-712", Some("1"), Some(Category::Bottom)).expect("resolve");
    assert_eq!(matched_code(outcome), "WS712");

    // a descriptor set no label satisfies is a descriptor-annotated miss
    let outcome = resolve(&store, "WS-712", Some("2"), Some(Category::Top)).expect("resolve");
    match outcome {
        MatchOutcome::NotFound {
            code,
            size,
            category,
        } => {
            assert_eq!(code, "WS-712");
            assert_eq!(size.as_deref(), Some("2"));
            assert_eq!(category, Some(Category::Top));
        }
        MatchOutcome::Matched(entry) => panic!("unexpected match: {}", entry.code),
    }
}

#[test]
fn first_matching_entry_wins() {
    let store = MemoryCatalogStore::with_entries([
        entry("WS-712", &["Top | 1", "Bottom | 1"]),
        entry("WS712", &["Top | 1"]),
    ]);
    let outcome = resolve(&store, "WS-712", Some("1"), Some(Category::Top)).expect("resolve");
    assert_eq!(matched_code(outcome), "WS-712");
}

#[test]
fn size_only_matching_is_accepted_by_default() {
    let store = MemoryCatalogStore::with_entries([entry("WS-252BK", &["XL", "XXL"])]);
    let outcome = resolve(&store, "WS-252BK", Some("XXL"), None).expect("resolve");
    assert_eq!(matched_code(outcome), "WS-252BK");
}

#[test]
fn full_disambiguation_flag_rejects_partial_descriptors() {
    let mut strict = entry("WS-712", &["Top | 1", "Bottom | 1"]);
    strict.requires_full_disambiguation = true;
    let store = MemoryCatalogStore::with_entries([strict]);

    // size alone is not enough for a flagged family
    let outcome = resolve(&store, "WS-712", Some("1"), None).expect("resolve");
    assert!(matches!(outcome, MatchOutcome::NotFound { .. }));

    // both descriptors satisfy it
    let outcome = resolve(&store, "WS-712", Some("1"), Some(Category::Bottom)).expect("resolve");
    assert_eq!(matched_code(outcome), "WS-712");

    // no descriptors at all still takes the permissive default
    let outcome = resolve(&store, "WS-712", None, None).expect("resolve");
    assert_eq!(matched_code(outcome), "WS-712");
}

#[test]
fn brace_wrapped_labels_match_in_either_order() {
    let store = MemoryCatalogStore::with_entries([entry("WS-712", &["{1 | 上衣}"])]);
    let outcome = resolve(&store, "WS-712", Some("1"), Some(Category::Top)).expect("resolve");
    assert_eq!(matched_code(outcome), "WS-712");
}
