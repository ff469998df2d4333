//! Lexical classification of SQL words.
//!
//! Decides whether a token span is a reserved keyword (and which one) or an
//! identifier, and whether a name may be written in SQL text without quotes.
//!
//! ```rust
//! use sqlident::{TokenType, classify, is_keyword, is_simple_identifier};
//!
//! let sql = "select NAME from T";
//! assert_eq!(classify(sql, true, 0, 6, false), TokenType::Select);
//! assert_eq!(classify(sql, true, 7, 11, false), TokenType::Identifier);
//! assert!(is_keyword("Select", true));
//! assert!(!is_keyword("Select", false));
//! assert!(is_simple_identifier("NAME"));
//! assert!(!is_simple_identifier("name"));
//! ```
reexport!(testing, test);
reexport!(config);
reexport!(error);
pub mod sql;

pub use sql::{
    CharClass, Classifier, TokenSpan, TokenType, additional_keywords, classify, is_keyword,
    is_simple_identifier, quote_identifier, reserved_words, sql_keywords_list,
};

#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
