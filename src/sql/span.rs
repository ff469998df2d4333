//! Validated token span.
//!
//! A `TokenSpan` borrows the statement text and records the byte offsets of
//! one lexical unit, as handed over by a tokenizer. Construction checks the
//! offsets once so that classification afterwards cannot fail.
//!
//! Invariants:
//! - `start < end <= text.len()`
//! - both offsets lie on UTF-8 character boundaries
use crate::sql::{keyword, token_type::TokenType};
use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenSpan<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

impl<'a> TokenSpan<'a> {
    /// Validate `[start, end)` against `text`.
    pub fn new(text: &'a str, start: usize, end: usize) -> Result<Self> {
        if start >= end || end > text.len() {
            return Err(Error::InvalidSpan {
                start,
                end,
                len: text.len(),
            });
        }
        if let Some(offset) = [start, end]
            .into_iter()
            .find(|&offset| !text.is_char_boundary(offset))
        {
            return Err(Error::NotCharBoundary { offset });
        }
        Ok(Self { text, start, end })
    }

    /// Span covering all of `text`; fails for an empty string.
    pub fn whole(text: &'a str) -> Result<Self> {
        Self::new(text, 0, text.len())
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn end(&self) -> usize {
        self.end
    }

    /// Byte length of the span. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// The full text the span points into.
    pub const fn source(&self) -> &'a str {
        self.text
    }

    /// The spanned slice.
    pub fn as_str(&self) -> &'a str {
        &self.text[self.start..self.end]
    }

    pub fn classify(&self, ignore_case: bool, additional_keywords: bool) -> TokenType {
        let token_type = keyword::classify_bytes(
            self.as_str().as_bytes(),
            ignore_case,
            additional_keywords,
        );
        trace!(
            start = self.start,
            end = self.end,
            %token_type,
            "Classified token span"
        );
        token_type
    }
}

impl std::fmt::Display for TokenSpan<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn accessors() {
        let span = TokenSpan::new("SELECT x FROM t", 9, 13).expect("valid span");
        assert_eq!(span.as_str(), "FROM");
        assert_eq!(span.len(), 4);
        assert_eq!((span.start(), span.end()), (9, 13));
        assert_eq!(span.source(), "SELECT x FROM t");
        assert_eq!(span.to_string(), "FROM");
        assert_eq!(span.classify(false, false), TokenType::From);
    }

    #[rstest]
    #[case("abc", 0, 0)]
    #[case("abc", 2, 1)]
    #[case("abc", 1, 4)]
    #[case("", 0, 0)]
    fn rejects_out_of_range(#[case] text: &str, #[case] start: usize, #[case] end: usize) {
        let err = TokenSpan::new(text, start, end).unwrap_err();
        assert!(
            matches!(err, Error::InvalidSpan { start: s, end: e, len } if s == start && e == end && len == text.len()),
            "unexpected error {err:?}"
        );
    }

    #[test]
    fn rejects_split_characters() {
        // 'É' is two bytes long
        let text = "ÉTÉ";
        let err = TokenSpan::new(text, 1, 3).unwrap_err();
        assert!(matches!(err, Error::NotCharBoundary { offset: 1 }), "{err:?}");
        let err = TokenSpan::new(text, 0, 4).unwrap_err();
        assert!(matches!(err, Error::NotCharBoundary { offset: 4 }), "{err:?}");
        assert!(TokenSpan::new(text, 0, 5).is_ok());
    }

    #[test]
    fn whole_text() {
        assert!(TokenSpan::whole("").is_err());
        let span = TokenSpan::whole("rownum").expect("non-empty");
        assert_eq!(span.classify(true, false), TokenType::RowNum);
        assert_eq!(span.classify(false, false), TokenType::Identifier);
    }

    #[test]
    fn error_messages() {
        let err = TokenSpan::new("ab", 1, 5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid token span: 1..5 over text of length 2"
        );
    }
}
