//! Parsed catalog variant labels.
//!
//! A label encodes up to two sub-tokens joined by `|`, in either order,
//! optionally brace-wrapped: `"Top | 10"`, `"{10 | 上衣}"`, `"XL"`. Parsing
//! them once into a small struct keeps the disambiguation rules in one place
//! instead of ad hoc substring checks per call site.

use stockrec_model::Category;

/// A variant label broken into its sub-tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLabel {
    parts: Vec<String>,
}

impl ParsedLabel {
    pub fn parse(label: &str) -> Self {
        let stripped = label
            .trim()
            .trim_matches(|ch| matches!(ch, '{' | '}' | '[' | ']'));
        let parts = stripped
            .splitn(2, '|')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect();
        Self { parts }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Whether this label satisfies every supplied descriptor. Descriptors
    /// that were not supplied do not constrain the match; token order in the
    /// label never matters.
    pub fn matches(&self, size: Option<&str>, category: Option<Category>) -> bool {
        let size_ok = size.is_none_or(|size| self.parts.iter().any(|part| part.contains(size)));
        let category_ok = category.is_none_or(|category| {
            self.parts.iter().any(|part| {
                let lower = part.to_lowercase();
                category
                    .aliases()
                    .iter()
                    .any(|alias| lower.contains(&alias.to_lowercase()))
            })
        });
        size_ok && category_ok
    }
}
