//! SQL word classification.
//!
//! This module holds the lexical classification step a SQL tokenizer runs on
//! every word it scans: is the word a grammar keyword or a user-chosen name,
//! and may a name be echoed back without quotes.
//!
//! Modules:
//! - `token_type` : Closed set of keyword tags plus the `Keyword` / `Identifier` markers.
//! - `keyword`    : First-letter bucketed keyword table and `classify` / `is_keyword`.
//! - `identifier` : Unicode-aware simple identifier check and quoting.
//! - `span`       : Validated `[start, end)` byte span into statement text.
//! - `classifier` : Policy (case folding, additional keywords) bundled into one value.
//!
//! Design Principles:
//! 1. Pure functions over borrowed input; no allocation on the classification path.
//! 2. The keyword set is fixed at compile time.
//! 3. ASCII case folding is confined to keyword matching; identifier shape uses
//!    Unicode general categories.
//!
//! Example:
//! ```rust
//! use sqlident::sql::prelude::*;
//!
//! let sql = "SELECT x FROM t";
//! assert_eq!(classify(sql, false, 9, 13, false), TokenType::From);
//! assert_eq!(Classifier::default().classify("natural"), TokenType::Natural);
//! assert!(is_simple_identifier("X"));
//! ```

pub mod classifier;
pub mod identifier;
pub mod keyword;
pub mod span;
pub mod token_type;

pub use classifier::Classifier;
pub use identifier::{CharClass, is_simple_identifier, quote_identifier};
pub use keyword::{additional_keywords, classify, is_keyword, reserved_words, sql_keywords_list};
pub use span::TokenSpan;
pub use token_type::TokenType;

/// Convenience prelude re‑exporting the most commonly used items.
///
/// Import with:
/// `use sqlident::sql::prelude::*;`
pub mod prelude {
    pub use super::{
        Classifier, TokenSpan, TokenType, classify, is_keyword, is_simple_identifier,
    };
}
