//! Consolidated pattern tables for document extraction.
//!
//! Every regex the extractor and parser use lives here, grouped by the
//! attribute it recognizes, so behavior is auditable in one place instead of
//! scattered per call site. Header synonyms and descriptor labels are
//! bilingual: the documents this engine was built for carry Chinese retail
//! headers, English ones show up on supplier paperwork.

use std::sync::LazyLock;

use regex::Regex;
use stockrec_model::Category;
use stockrec_model::codes::DASH_CLASS;

/// Product code shape: 1-8 leading letters, optional dash-like separator,
/// 2-8 digits, optional trailing letters, optional `/`-suffix; or a bare
/// 8-14 digit barcode.
pub static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:[A-Z]{{1,8}}[{DASH_CLASS}]?\d{{2,8}}(?:[A-Z]+)?(?:/[A-Z]+)?)|(?:\b\d{{8,14}}\b)"
    ))
    .expect("code pattern")
});

/// A bounded 1-5 digit run. The word boundaries reject digit runs glued to
/// letters (code suffixes) and runs longer than five digits (barcodes).
static QUANTITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,5})\b").expect("quantity pattern"));

/// Currency amounts; removed before quantity scanning so a price column
/// bleeding into the quantity region never fabricates a quantity.
static CURRENCY_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:HK\$|US\$|NT\$|[$€£¥￥])\s*\d[\d,]*(?:\.\d+)?").expect("currency pattern")
});

/// Bare decimal numbers are prices or weights, never piece counts.
static DECIMAL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+").expect("decimal pattern"));

/// Header synonyms for the item-name column.
pub static NAME_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"商品詳情|產品描述|商品描述|商品名稱|品名|(?i:item\s*name|product\s*name|description)")
        .expect("name header pattern")
});

/// Header synonyms for the code column. Longer spellings come first so the
/// fragment lookup does not stop at a prefix.
pub static CODE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"型號編號|型號|條碼號碼|條碼編號|條形碼|條碼|貨號|(?i:\b(?:code|sku|model|barcode)\b)")
        .expect("code header pattern")
});

/// Header synonyms for the quantity column.
pub static QUANTITY_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"總共數量|庫存數量|數量|數目|(?i:\b(?:qty|quantity)\b)").expect("quantity header pattern")
});

/// Keywords that end the data region of a page.
pub static TERMINATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"小計|合計|總計|金額|備註|--END--|(?i:subtotal|\btotal\b|remarks)")
        .expect("terminator pattern")
});

/// Ordered size patterns: explicit labels first, then the `|`-delimited
/// label form. The first capture that survives [`validate_size`] wins.
/// Deliberately no bare trailing-token pattern: on flat lines that position
/// holds the quantity, and a quantity misread as a size splits aggregation
/// groups.
pub static SIZE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"尺寸\s*[:：]\s*([^\s,，]+)",
        r"尺碼\s*[:：]\s*([^\s,，]+)",
        r"(?i)size\s*[:：]\s*([^\s,，]+)",
        r"\|\s*([A-Za-z0-9]{1,4})(?:\s|$)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("size pattern"))
    .collect()
});

/// Ordered category patterns: explicit labels first, then bare recognized
/// tokens. `觊` appears alongside `類` because one upstream PDF encoder
/// mangles that glyph.
pub static CATEGORY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"購買[類觊]型\s*[:：]\s*([^\s,，]+)",
        r"類型\s*[:：]\s*([^\s,，]+)",
        r"(?i)(?:category|type)\s*[:：]\s*([^\s,，]+)",
        r"(上衣|褲子|套裝)",
        r"(?i)\b(top|bottom|set)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("category pattern"))
    .collect()
});

/// Exact header names selecting the code cell in tabular input.
pub const TABULAR_CODE_HEADERS: &[&str] = &["型號", "條碼", "商品代碼", "編號", "code", "sku", "model"];

/// Exact header names selecting the quantity cell in tabular input.
pub const TABULAR_QUANTITY_HEADERS: &[&str] = &["數量", "庫存", "qty", "quantity"];

/// Exact header names selecting the item-name cell in tabular input.
pub const TABULAR_NAME_HEADERS: &[&str] = &["商品名稱", "品名", "產品", "name", "product"];

/// Exact header names selecting the size cell in tabular input.
pub const TABULAR_SIZE_HEADERS: &[&str] = &["尺寸", "尺碼", "size"];

/// Exact header names selecting the category cell in tabular input.
pub const TABULAR_CATEGORY_HEADERS: &[&str] = &["購買類型", "類型", "category", "type"];

/// First product-code match in `text`, if any.
pub fn find_code(text: &str) -> Option<&str> {
    CODE_PATTERN.find(text).map(|found| found.as_str())
}

/// Last plausible quantity in `text`, after masking currency amounts and
/// decimals. The quantity is the trailing count on a line; earlier digit
/// runs belong to sizes and other descriptors. Zero never comes back: a
/// zero run is dropped, not reported.
pub fn parse_quantity(text: &str) -> Option<u32> {
    let without_currency = CURRENCY_AMOUNT.replace_all(text, " ");
    let cleaned = DECIMAL_NUMBER.replace_all(&without_currency, " ");
    let captured = QUANTITY_PATTERN.captures_iter(&cleaned).last()?;
    let quantity: u32 = captured[1].parse().ok()?;
    (quantity > 0).then_some(quantity)
}

/// First size token in `text` that survives validation.
pub fn extract_size(text: &str) -> Option<String> {
    for pattern in SIZE_PATTERNS.iter() {
        if let Some(captured) = pattern.captures(text)
            && let Some(size) = validate_size(&captured[1])
        {
            return Some(size);
        }
    }
    None
}

/// First recognizable category token in `text`.
pub fn extract_category(text: &str) -> Option<Category> {
    for pattern in CATEGORY_PATTERNS.iter() {
        if let Some(captured) = pattern.captures(text)
            && let Some(category) = Category::parse(&captured[1])
        {
            return Some(category);
        }
    }
    None
}

/// Accept numeric sizes 1-30 and short alphabetic sizes (XS..XXXL); reject
/// everything else so stray digits never become sizes.
pub fn validate_size(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    if token.chars().all(|ch| ch.is_ascii_digit()) {
        let value: u32 = token.parse().ok()?;
        return (1..=30).contains(&value).then(|| token.to_string());
    }
    if token.len() <= 4 && token.chars().all(|ch| ch.is_ascii_uppercase()) {
        return Some(token.to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_pattern_accepts_dash_and_dashless() {
        assert_eq!(find_code("WS-712TBK 上衣"), Some("WS-712TBK"));
        assert_eq!(find_code("item WS712TBK"), Some("WS712TBK"));
        assert_eq!(find_code("NM0001 something"), Some("NM0001"));
        assert_eq!(find_code("貨號 WS—252BK/PK"), Some("WS—252BK/PK"));
        assert_eq!(find_code("barcode 4891234567890"), Some("4891234567890"));
        assert_eq!(find_code("no code here"), None);
    }

    #[test]
    fn quantity_ignores_currency_tokens() {
        assert_eq!(parse_quantity("$423.00"), None);
        assert_eq!(parse_quantity("HK$423.00"), None);
        assert_eq!(parse_quantity("3 HK$423.00"), Some(3));
        assert_eq!(parse_quantity("12"), Some(12));
        assert_eq!(parse_quantity("0"), None);
        assert_eq!(parse_quantity("123456"), None);
    }

    #[test]
    fn quantity_is_the_trailing_digit_run() {
        // the "10" belongs to the size label, the trailing "3" is the count
        assert_eq!(parse_quantity(" 上衣 | 10 3"), Some(3));
        assert_eq!(parse_quantity("尺寸: 12 5"), Some(5));
    }

    #[test]
    fn size_tokens_are_validated() {
        assert_eq!(extract_size("尺寸: 10"), Some("10".to_string()));
        assert_eq!(extract_size("Size: XL"), Some("XL".to_string()));
        assert_eq!(extract_size("上衣 | 10"), Some("10".to_string()));
        // 31 is outside the accepted numeric range
        assert_eq!(extract_size("尺寸: 31"), None);
        assert_eq!(extract_size("no size"), None);
    }

    #[test]
    fn category_tokens_resolve_bilingually() {
        assert_eq!(extract_category("購買類型: 上衣"), Some(Category::Top));
        assert_eq!(extract_category("褲子 | 8"), Some(Category::Bottom));
        assert_eq!(extract_category("Type: Set"), Some(Category::Set));
        assert_eq!(extract_category("fleece jacket"), None);
    }

    #[test]
    fn terminator_covers_both_languages() {
        assert!(TERMINATOR.is_match("小計: HK$1,234"));
        assert!(TERMINATOR.is_match("Subtotal"));
        assert!(TERMINATOR.is_match("--END--"));
        assert!(!TERMINATOR.is_match("WS-712TBK 上衣 | 10"));
    }
}
