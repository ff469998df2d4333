//! Simple (unquoted) identifier checks.
//!
//! A name may appear in SQL text without quotes only if it already has the
//! shape unquoted names fold to: upper-case or caseless letters, underscores
//! and decimal digits, not starting with a digit. Lower-case letters are
//! rejected because an unquoted lower-case name would be re-cased. A name with
//! a valid shape must still be quoted if it is a keyword, including the
//! additional keyword set.
//!
//! Character shape uses Unicode general categories, never the ASCII folding
//! of the keyword table.

use crate::sql::{keyword, token_type::TokenType};
use crate::*;
use derive_more::Display;
use std::borrow::Cow;
use unicode_general_category::{GeneralCategory, get_general_category};

/// Shape class of a single identifier character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CharClass {
    /// Upper-case, title-case, modifier or other (caseless) letter.
    #[display("letter")]
    Letter,
    #[display("lower-case letter")]
    LowerCaseLetter,
    #[display("underscore")]
    Underscore,
    /// Decimal digit in any script.
    #[display("digit")]
    Digit,
    #[display("other")]
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if c == '_' {
            return CharClass::Underscore;
        }
        match get_general_category(c) {
            GeneralCategory::UppercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter => CharClass::Letter,
            GeneralCategory::LowercaseLetter => CharClass::LowerCaseLetter,
            GeneralCategory::DecimalNumber => CharClass::Digit,
            _ => CharClass::Other,
        }
    }

    /// Allowed as the first character of a simple identifier.
    pub const fn can_start(self) -> bool {
        matches!(self, CharClass::Letter | CharClass::Underscore)
    }

    /// Allowed after the first character of a simple identifier.
    pub const fn can_continue(self) -> bool {
        self.can_start() || matches!(self, CharClass::Digit)
    }
}

/// True if `text` may be used as an identifier without quotes.
///
/// Empty strings, names containing lower-case letters or anything other than
/// letters, digits and `_`, names starting with a digit, and keywords
/// (additional keywords included, compared in exact case) all need quoting.
pub fn is_simple_identifier(text: &str) -> bool {
    let mut chars = text.char_indices();
    let Some((_, first)) = chars.next() else {
        return false;
    };
    let class = CharClass::of(first);
    if !class.can_start() {
        trace!(text, %class, "Identifier cannot start with this character");
        return false;
    }
    if let Some((offset, c)) = chars.find(|&(_, c)| !CharClass::of(c).can_continue()) {
        trace!(text, offset, class = %CharClass::of(c), "Identifier contains a character that needs quoting");
        return false;
    }
    keyword::classify(text, false, 0, text.len(), true) == TokenType::Identifier
}

/// Returns `text` unchanged if it is a simple identifier, otherwise wrapped
/// in double quotes with embedded quotes doubled.
pub fn quote_identifier(text: &str) -> Cow<'_, str> {
    if is_simple_identifier(text) {
        return Cow::Borrowed(text);
    }
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        if c == '"' {
            quoted.push('"');
        }
        quoted.push(c);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[rstest]
    #[case("", false)]
    #[case("ABC", true)]
    #[case("_X1", true)]
    #[case("_", true)]
    #[case("A1_2", true)]
    #[case("abc", false)]
    #[case("Abc", false)]
    #[case("1ABC", false)]
    #[case("SELECT", false)]
    #[case("SELECTED", true)]
    #[case("A B", false)]
    #[case("A-B", false)]
    #[case("X$", false)]
    #[case("\"A\"", false)]
    fn ascii_shapes(#[case] text: &str, #[case] expected: bool) {
        crate::testing::common_init();
        assert_eq!(is_simple_identifier(text), expected, "{text:?}");
    }

    #[rstest]
    #[case("TOP")]
    #[case("TODAY")]
    #[case("SYSDATE")]
    #[case("SYSTIME")]
    #[case("SYSTIMESTAMP")]
    #[case("INTERSECTS")]
    #[case("ROWNUM")]
    #[case("CURRENT_DATE")]
    #[case("MINUS")]
    fn keywords_need_quoting(#[case] text: &str) {
        assert!(!is_simple_identifier(text));
        assert_eq!(quote_identifier(text), format!("\"{text}\""));
    }

    #[rstest]
    // caseless ideographs (Lo)
    #[case("日本", true)]
    #[case("表_1", true)]
    // title case (Lt) and modifier letter (Lm)
    #[case("ǅX", true)]
    #[case("ʰA", true)]
    // upper-case non-ASCII (Lu)
    #[case("ÉTÉ", true)]
    // non-ASCII decimal digits continue but do not start
    #[case("A٣", true)]
    #[case("٣A", false)]
    // lower-case non-ASCII (Ll)
    #[case("été", false)]
    #[case("Straße", false)]
    // letter numbers and other numbers are not decimal digits
    #[case("AⅫ", false)]
    #[case("A½", false)]
    fn unicode_shapes(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_simple_identifier(text), expected, "{text:?}");
    }

    #[rstest]
    #[case('A', CharClass::Letter)]
    #[case('a', CharClass::LowerCaseLetter)]
    #[case('_', CharClass::Underscore)]
    #[case('7', CharClass::Digit)]
    #[case('中', CharClass::Letter)]
    #[case(' ', CharClass::Other)]
    #[case('$', CharClass::Other)]
    fn char_classes(#[case] c: char, #[case] expected: CharClass) {
        assert_eq!(CharClass::of(c), expected);
    }

    #[test]
    fn char_class_rules() {
        assert!(CharClass::Letter.can_start());
        assert!(CharClass::Underscore.can_start());
        assert!(!CharClass::Digit.can_start());
        assert!(CharClass::Digit.can_continue());
        assert!(!CharClass::LowerCaseLetter.can_continue());
        assert_eq!(CharClass::LowerCaseLetter.to_string(), "lower-case letter");
    }

    #[rstest]
    #[case("NAME", "NAME")]
    #[case("name", "\"name\"")]
    #[case("SELECT", "\"SELECT\"")]
    #[case("MY COLUMN", "\"MY COLUMN\"")]
    #[case("A\"B", "\"A\"\"B\"")]
    #[case("", "\"\"")]
    fn quoting(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(quote_identifier(text), expected);
    }

    #[test]
    fn simple_identifiers_are_borrowed() {
        assert!(matches!(quote_identifier("T1"), Cow::Borrowed("T1")));
        assert!(matches!(quote_identifier("t1"), Cow::Owned(_)));
    }
}
