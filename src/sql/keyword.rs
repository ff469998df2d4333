//! Keyword table: maps a token span to a reserved keyword or an identifier.
//!
//! Keywords are grouped into buckets by their first letter. Classification
//! picks the bucket from the first byte of the span and then compares the
//! whole span against every spelling in that bucket, so a keyword missing
//! from its bucket would silently classify as an identifier. The tests at the
//! bottom of this file check every tag against the table for that reason.
//!
//! Case policy:
//! - `ignore_case = true`: ASCII letters match regardless of case.
//! - `ignore_case = false`: only the canonical upper-case spelling matches.
//!
//! Case folding here is ASCII only. It is valid because every spelling in the
//! table is upper-case ASCII; it must not be reused for identifier shape
//! checks (see `identifier.rs`).

use crate::sql::token_type::TokenType;
use itertools::Itertools as _;

type Bucket = &'static [(&'static str, TokenType)];

/// Reserved keywords starting with `first` (an upper-case ASCII byte).
fn reserved_bucket(first: u8) -> Bucket {
    use TokenType::*;
    match first {
        b'A' => &[("ALL", All)],
        b'C' => &[
            ("CHECK", Check),
            ("CONSTRAINT", Constraint),
            ("CROSS", Cross),
            ("CURRENT_DATE", CurrentDate),
            ("CURRENT_TIME", CurrentTime),
            ("CURRENT_TIMESTAMP", CurrentTimestamp),
        ],
        b'D' => &[("DISTINCT", Distinct)],
        b'E' => &[("EXCEPT", Except), ("EXISTS", Exists)],
        b'F' => &[
            ("FETCH", Fetch),
            ("FROM", From),
            ("FOR", For),
            ("FOREIGN", Foreign),
            ("FULL", Full),
            ("FALSE", False),
        ],
        b'G' => &[("GROUP", Group)],
        b'H' => &[("HAVING", Having)],
        b'I' => &[("INNER", Inner), ("INTERSECT", Intersect), ("IS", Is)],
        b'J' => &[("JOIN", Join)],
        b'L' => &[
            ("LIMIT", Limit),
            ("LIKE", Like),
            ("LOCALTIME", LocalTime),
            ("LOCALTIMESTAMP", LocalTimestamp),
        ],
        b'M' => &[("MINUS", Minus)],
        b'N' => &[("NOT", Not), ("NATURAL", Natural), ("NULL", Null)],
        b'O' => &[("OFFSET", Offset), ("ON", On), ("ORDER", Order)],
        b'P' => &[("PRIMARY", Primary)],
        b'R' => &[("ROWNUM", RowNum)],
        b'S' => &[("SELECT", Select)],
        b'T' => &[("TRUE", True)],
        b'U' => &[("UNIQUE", Unique), ("UNION", Union)],
        b'W' => &[("WHERE", Where), ("WINDOW", Window), ("WITH", With)],
        _ => &[],
    }
}

/// Additional keywords starting with `first`. These only count as keywords
/// when the caller asks for them and have no dedicated tag.
fn additional_bucket(first: u8) -> &'static [&'static str] {
    match first {
        b'I' => &["INTERSECTS"],
        b'S' => &["SYSDATE", "SYSTIME", "SYSTIMESTAMP"],
        b'T' => &["TODAY", "TOP"],
        _ => &[],
    }
}

const BUCKET_LETTERS: std::ops::RangeInclusive<u8> = b'A'..=b'Z';

/// Compares a span against a keyword spelling. The first byte was already
/// matched by bucket dispatch.
fn eq(expected: &str, span: &[u8], ignore_case: bool) -> bool {
    let expected = expected.as_bytes();
    if expected.len() != span.len() {
        return false;
    }
    if ignore_case {
        expected[1..].eq_ignore_ascii_case(&span[1..])
    } else {
        expected[1..] == span[1..]
    }
}

/// Classifies a non-empty byte span.
pub(crate) fn classify_bytes(span: &[u8], ignore_case: bool, additional_keywords: bool) -> TokenType {
    let Some(&first) = span.first() else {
        return TokenType::Identifier;
    };
    let first = if ignore_case {
        first.to_ascii_uppercase()
    } else {
        first
    };

    if let Some(&(_, tag)) = reserved_bucket(first)
        .iter()
        .find(|(kw, _)| eq(kw, span, ignore_case))
    {
        return tag;
    }
    if additional_keywords
        && additional_bucket(first)
            .iter()
            .any(|kw| eq(kw, span, ignore_case))
    {
        return TokenType::Keyword;
    }
    TokenType::Identifier
}

/// Classifies `text[start..end]` as a reserved keyword, an additional keyword
/// or an identifier.
///
/// Offsets are byte offsets. `additional_keywords` enables `TOP`,
/// `INTERSECTS`, `SYSDATE`, `SYSTIME`, `SYSTIMESTAMP` and `TODAY`, which then
/// classify as [`TokenType::Keyword`].
///
/// # Panics
///
/// Panics unless `start < end <= text.len()`. Use
/// [`TokenSpan::new`](crate::TokenSpan::new) to validate untrusted offsets.
pub fn classify(
    text: &str,
    ignore_case: bool,
    start: usize,
    end: usize,
    additional_keywords: bool,
) -> TokenType {
    assert!(
        start < end && end <= text.len(),
        "token span {start}..{end} is invalid for text of length {}",
        text.len()
    );
    classify_bytes(&text.as_bytes()[start..end], ignore_case, additional_keywords)
}

/// True if the whole of `text` is a reserved keyword. The additional keyword
/// set is not considered. Always false for an empty string.
pub fn is_keyword(text: &str, ignore_case: bool) -> bool {
    if text.is_empty() {
        return false;
    }
    classify(text, ignore_case, 0, text.len(), false) != TokenType::Identifier
}

/// Spellings of all uniquely tagged reserved keywords, bucket by bucket.
pub fn reserved_words() -> impl Iterator<Item = &'static str> {
    BUCKET_LETTERS.flat_map(|c| reserved_bucket(c).iter().map(|(kw, _)| *kw))
}

/// Spellings of the additional keyword set.
pub fn additional_keywords() -> impl Iterator<Item = &'static str> {
    BUCKET_LETTERS.flat_map(|c| additional_bucket(c).iter().copied())
}

/// All keyword spellings, sorted and comma separated, in the form database
/// metadata reports them.
pub fn sql_keywords_list() -> String {
    reserved_words()
        .chain(additional_keywords())
        .sorted_unstable()
        .join(",")
}
