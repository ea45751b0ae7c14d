use stockrec_model::{
    CatalogEntry, CatalogStore, Category, LocationId, MemoryCatalogStore, ReconciliationSummary,
    format_not_found,
};

#[test]
fn category_parses_aliases() {
    assert_eq!(Category::parse("上衣"), Some(Category::Top));
    assert_eq!(Category::parse("褲子 | 8"), Some(Category::Bottom));
    assert_eq!(Category::parse("set of two"), Some(Category::Set));
    assert_eq!(Category::parse("TOP"), Some(Category::Top));
    assert_eq!(Category::parse("trousers"), None);
}

#[test]
fn entry_deserializes_with_defaults() {
    let entry: CatalogEntry = serde_json::from_str(r#"{"code": "WS-712"}"#).expect("entry json");
    assert_eq!(entry.code, "WS-712");
    assert!(entry.variant_labels.is_empty());
    assert!(entry.per_location_quantities.is_empty());
    assert!(!entry.requires_full_disambiguation);
}

#[test]
fn quantity_at_defaults_to_zero() {
    let mut entry = CatalogEntry::new("WS-100");
    let kt = LocationId::from("kwun-tong");
    assert_eq!(entry.quantity_at(&kt), 0);
    entry.per_location_quantities.insert(kt.clone(), 7);
    assert_eq!(entry.quantity_at(&kt), 7);
}

#[test]
fn memory_store_finds_by_any_candidate() {
    let store = MemoryCatalogStore::with_entries([
        CatalogEntry::new("WS-712"),
        CatalogEntry::new("WS712"),
        CatalogEntry::new("NM0001"),
    ]);
    let hits = store
        .find(&["WS-712".to_string(), "WS712".to_string()])
        .expect("find");
    assert_eq!(hits.len(), 2);
    let misses = store.find(&["WS-999".to_string()]).expect("find");
    assert!(misses.is_empty());
}

#[test]
fn not_found_entries_carry_descriptors() {
    assert_eq!(format_not_found("WS712", None, None), "WS712");
    assert_eq!(
        format_not_found("WS712", Some("10"), Some(Category::Top)),
        "WS712 (category: Top, size: 10)"
    );
    assert_eq!(format_not_found("WS712", Some("10"), None), "WS712 (size: 10)");

    let mut summary = ReconciliationSummary::new();
    summary.push_not_found("WS712", Some("10"), Some(Category::Top));
    summary.push_not_found("WS712", Some("12"), None);
    assert_eq!(summary.not_found.len(), 2);
    assert_ne!(summary.not_found[0], summary.not_found[1]);
}

#[test]
fn summary_serializes_round_trip() {
    let mut summary = ReconciliationSummary::new();
    summary.files_processed = 2;
    summary.records_processed = 5;
    summary.matched = 4;
    summary.updated = 4;
    summary.push_not_found("WS-999", None, None);
    summary.push_error("save failed: disk full");
    let json = serde_json::to_string(&summary).expect("serialize summary");
    let round: ReconciliationSummary = serde_json::from_str(&json).expect("deserialize summary");
    assert_eq!(round.files_processed, 2);
    assert_eq!(round.not_found, vec!["WS-999".to_string()]);
    assert!(round.has_errors());
}
