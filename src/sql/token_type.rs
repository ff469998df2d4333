//! Token type produced by keyword classification.
//!
//! A scanned word is either one of the reserved keywords listed here, the
//! generic [`TokenType::Keyword`] marker used for the additional keyword set
//! (`TOP`, `TODAY`, `SYSDATE`, ...), or a plain [`TokenType::Identifier`].
//!
//! The set is closed: every reserved keyword has exactly one variant and one
//! canonical upper-case spelling returned by [`TokenType::as_str`].

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenType {
    /// A keyword from the additional set, which has no dedicated tag.
    Keyword,
    /// Table / column / alias or any other user-chosen name.
    Identifier,
    All,
    Check,
    Constraint,
    Cross,
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    Distinct,
    Except,
    Exists,
    False,
    Fetch,
    For,
    Foreign,
    From,
    Full,
    Group,
    Having,
    Inner,
    Intersect,
    Is,
    Join,
    Like,
    Limit,
    LocalTime,
    LocalTimestamp,
    Minus,
    Natural,
    Not,
    Null,
    Offset,
    On,
    Order,
    Primary,
    RowNum,
    Select,
    True,
    Union,
    Unique,
    Where,
    Window,
    With,
}

impl TokenType {
    /// Every reserved keyword tag, in declaration order.
    pub const RESERVED: [Self; 42] = [
        TokenType::All,
        TokenType::Check,
        TokenType::Constraint,
        TokenType::Cross,
        TokenType::CurrentDate,
        TokenType::CurrentTime,
        TokenType::CurrentTimestamp,
        TokenType::Distinct,
        TokenType::Except,
        TokenType::Exists,
        TokenType::False,
        TokenType::Fetch,
        TokenType::For,
        TokenType::Foreign,
        TokenType::From,
        TokenType::Full,
        TokenType::Group,
        TokenType::Having,
        TokenType::Inner,
        TokenType::Intersect,
        TokenType::Is,
        TokenType::Join,
        TokenType::Like,
        TokenType::Limit,
        TokenType::LocalTime,
        TokenType::LocalTimestamp,
        TokenType::Minus,
        TokenType::Natural,
        TokenType::Not,
        TokenType::Null,
        TokenType::Offset,
        TokenType::On,
        TokenType::Order,
        TokenType::Primary,
        TokenType::RowNum,
        TokenType::Select,
        TokenType::True,
        TokenType::Union,
        TokenType::Unique,
        TokenType::Where,
        TokenType::Window,
        TokenType::With,
    ];

    /// Canonical spelling. For reserved keywords this is the exact upper-case
    /// text that matches under the exact-case policy.
    pub const fn as_str(self) -> &'static str {
        use TokenType::*;
        match self {
            Keyword => "KEYWORD",
            Identifier => "IDENTIFIER",
            All => "ALL",
            Check => "CHECK",
            Constraint => "CONSTRAINT",
            Cross => "CROSS",
            CurrentDate => "CURRENT_DATE",
            CurrentTime => "CURRENT_TIME",
            CurrentTimestamp => "CURRENT_TIMESTAMP",
            Distinct => "DISTINCT",
            Except => "EXCEPT",
            Exists => "EXISTS",
            False => "FALSE",
            Fetch => "FETCH",
            For => "FOR",
            Foreign => "FOREIGN",
            From => "FROM",
            Full => "FULL",
            Group => "GROUP",
            Having => "HAVING",
            Inner => "INNER",
            Intersect => "INTERSECT",
            Is => "IS",
            Join => "JOIN",
            Like => "LIKE",
            Limit => "LIMIT",
            LocalTime => "LOCALTIME",
            LocalTimestamp => "LOCALTIMESTAMP",
            Minus => "MINUS",
            Natural => "NATURAL",
            Not => "NOT",
            Null => "NULL",
            Offset => "OFFSET",
            On => "ON",
            Order => "ORDER",
            Primary => "PRIMARY",
            RowNum => "ROWNUM",
            Select => "SELECT",
            True => "TRUE",
            Union => "UNION",
            Unique => "UNIQUE",
            Where => "WHERE",
            Window => "WINDOW",
            With => "WITH",
        }
    }

    /// True for any of the uniquely tagged reserved keywords.
    pub const fn is_reserved(self) -> bool {
        !matches!(self, TokenType::Keyword | TokenType::Identifier)
    }

    /// True for the identifier marker.
    pub const fn is_identifier(self) -> bool {
        matches!(self, TokenType::Identifier)
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
