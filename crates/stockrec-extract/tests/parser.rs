use stockrec_extract::{ExtractConfig, extract_document};
use stockrec_model::{Category, Document};

fn flat(text: &str) -> Document {
    Document::Flat(text.to_string())
}

#[test]
fn currency_only_quantity_produces_no_record() {
    let records = extract_document(&flat("WS-258PK $423.00"), &ExtractConfig::default());
    assert!(records.is_empty());
}

#[test]
fn zero_quantity_is_dropped_silently() {
    let records = extract_document(&flat("WS-300 0"), &ExtractConfig::default());
    assert!(records.is_empty());
}

#[test]
fn lines_without_codes_are_skipped() {
    let text = "delivery note\nWS-100 2\nthank you";
    let records = extract_document(&flat(text), &ExtractConfig::default());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].raw_code, "WS-100");
    assert_eq!(records[0].quantity, 2);
}

#[test]
fn code_digits_are_not_misread_as_quantity() {
    // the only digit run on the line belongs to the code itself
    let records = extract_document(&flat("WS-71200"), &ExtractConfig::default());
    assert!(records.is_empty());
}

#[test]
fn descriptors_come_from_forward_window() {
    let text = "WS-712TBK 2\n尺寸: 10\n購買類型: 上衣\nWS-712PPK 3\n尺寸: 12";
    let records = extract_document(&flat(text), &ExtractConfig::default());
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].raw_code, "WS-712TBK");
    assert_eq!(records[0].quantity, 2);
    assert_eq!(records[0].size.as_deref(), Some("10"));
    assert_eq!(records[0].category, Some(Category::Top));

    assert_eq!(records[1].raw_code, "WS-712PPK");
    assert_eq!(records[1].size.as_deref(), Some("12"));
    assert_eq!(records[1].category, None);
}

#[test]
fn descriptor_scan_stops_at_next_code() {
    let text = "WS-1002 1\nWS-2002 2\n尺寸: 5";
    let records = extract_document(&flat(text), &ExtractConfig::default());
    assert_eq!(records.len(), 2);
    // the size after the second code must not leak backwards
    assert_eq!(records[0].size, None);
    assert_eq!(records[1].size.as_deref(), Some("5"));
}

#[test]
fn descriptor_window_is_bounded() {
    let config = ExtractConfig::default().with_descriptor_window(2);
    let text = "WS-1002 1\nfiller\nfiller\n尺寸: 5";
    let records = extract_document(&flat(text), &config);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].size, None);
}

#[test]
fn pipe_delimited_descriptors_on_the_code_line() {
    let records = extract_document(&flat("WS-712TPP 上衣 | 10 3"), &ExtractConfig::default());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].size.as_deref(), Some("10"));
    assert_eq!(records[0].category, Some(Category::Top));
    assert_eq!(records[0].quantity, 3);
}

#[test]
fn trailing_quantity_wins_over_size_digits() {
    // the size token sits between the code and the trailing count; the
    // count must never be read from the size
    let records = extract_document(&flat("WS-252BK 上衣 | 10 3"), &ExtractConfig::default());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].raw_code, "WS-252BK");
    assert_eq!(records[0].size.as_deref(), Some("10"));
    assert_eq!(records[0].category, Some(Category::Top));
    assert_eq!(records[0].quantity, 3);
}
