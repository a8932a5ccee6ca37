//! # sedori-rules — Reference Data and Keyword Matching
//!
//! Everything the evaluation engine consults but never mutates: the
//! keyword matcher, the antique-term list, the per-category keyword
//! tables, the prohibited-items table, the import-restriction table, and
//! the origin-country lists.
//!
//! ## Design
//!
//! Rule tables are plain immutable data, not control flow. One generic
//! matcher function runs against N tables, so adding a restriction
//! category or a keyword is a data edit that touches no evaluation logic,
//! and each table is testable on its own.
//!
//! [`RuleTables::builtin()`] assembles the shipped tables once at process
//! start; the result is an explicit read-only value passed into every
//! evaluation call. There is no process-wide registry and no hidden
//! cache, which keeps concurrent evaluations coordination-free.

pub mod antique;
pub mod import;
pub mod keyword;
pub mod tables;

pub use antique::ProhibitedItem;
pub use import::{ImportRestriction, OriginList, OriginRule};
pub use keyword::{build_corpus, matched_keywords, matches_any};
pub use tables::RuleTables;
