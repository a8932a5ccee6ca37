//! # Keyword Matcher
//!
//! Case-folded substring matching of curated keyword lists against a
//! product's text corpus. Both rule sets and the category classifier use
//! the same two functions, so matching semantics cannot drift between
//! them.
//!
//! Matching is intentionally permissive: no tokenization, no stemming,
//! no word-boundary enforcement. Japanese listing text has no word
//! boundaries to enforce, and compound terms ("ヴィンテージカメラ",
//! "unused") still match their base keyword. The cost is occasional
//! over-matching, which the rule sets absorb by treating a match as
//! grounds for review rather than proof of violation.

use sedori_core::Product;

/// Concatenate a product's text fields into one case-folded corpus.
///
/// Includes name, description, category name, and metadata values
/// (metadata keys are schema, not content, and are skipped). Fields are
/// joined with spaces so a keyword cannot accidentally match across a
/// field boundary.
pub fn build_corpus(product: &Product) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(3 + product.metadata.len());
    parts.push(&product.name);
    parts.push(&product.description);
    parts.push(&product.category_name);
    for value in product.metadata.values() {
        parts.push(value);
    }
    parts.join(" ").to_lowercase()
}

/// Whether any keyword occurs as a substring of the corpus.
///
/// The corpus must already be case-folded (see [`build_corpus`]); keywords
/// are folded here so the tables may carry natural-case entries. Empty
/// keywords never match.
pub fn matches_any<S: AsRef<str>>(corpus: &str, keywords: &[S]) -> bool {
    keywords.iter().any(|k| {
        let k = k.as_ref();
        !k.is_empty() && corpus.contains(&k.to_lowercase())
    })
}

/// The subset of keywords that occur in the corpus, in table order.
///
/// Used where the result needs one violation or reason per matched term.
pub fn matched_keywords<'a, S: AsRef<str>>(corpus: &str, keywords: &'a [S]) -> Vec<&'a str> {
    keywords
        .iter()
        .map(AsRef::as_ref)
        .filter(|k| !k.is_empty() && corpus.contains(&k.to_lowercase()))
        .collect()
}
