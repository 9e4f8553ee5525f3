//! # Text Folding Module
//!
//! ## Purpose
//! Normalization applied to queries and record fields before matching, so
//! that containment checks are case-insensitive and stable across Unicode
//! representations of the same text.
//!
//! ## Input/Output Specification
//! - **Input**: Raw query strings and record field values
//! - **Output**: Folded strings (NFKC-normalized, lower-cased)
//! - **Guarantee**: `fold` is idempotent

use unicode_normalization::UnicodeNormalization;

/// Fold text for matching: NFKC normalization followed by lower-casing.
pub fn fold(input: &str) -> String {
    input.nfkc().collect::<String>().to_lowercase()
}

/// Check whether a record field contains an already-folded query.
///
/// The query side is folded once per request by the engine; only the field
/// side is folded here.
pub fn field_contains(field: &str, folded_query: &str) -> bool {
    fold(field).contains(folded_query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_lowercases() {
        assert_eq!(fold("RAJESH"), "rajesh");
        assert!(field_contains("Rajesh Kumar", &fold("RAJESH")));
    }

    #[test]
    fn test_fold_normalizes_unicode() {
        // "e" + combining acute vs precomposed "é"
        assert_eq!(fold("Cafe\u{0301}"), fold("Caf\u{00e9}"));
    }

    #[test]
    fn test_fold_is_idempotent() {
        let once = fold("Adv. Singh");
        assert_eq!(fold(&once), once);
    }

    #[test]
    fn test_field_contains_substring() {
        let query = fold("singh");
        assert!(field_contains("Adv. Singh", &query));
        assert!(!field_contains("Adv. Mehta", &query));
    }
}
