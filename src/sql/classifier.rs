//! Policy-carrying front end to the keyword table.
//!
//! Tokenizers usually classify many spans under the same policy. A
//! `Classifier` bundles the case policy and the additional-keywords switch so
//! they are chosen once, either explicitly or from [`Config`].
use crate::sql::{keyword, span::TokenSpan, token_type::TokenType};
use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classifier {
    ignore_case: bool,
    additional_keywords: bool,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            ignore_case: true,
            additional_keywords: false,
        }
    }
}

impl Classifier {
    pub const fn new(ignore_case: bool, additional_keywords: bool) -> Self {
        Self {
            ignore_case,
            additional_keywords,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ignore_case, config.additional_keywords)
    }

    /// Policy read from the environment, see [`Config`].
    pub fn from_env() -> Result<Self> {
        Config::from_env().map(|config| Self::from_config(&config))
    }

    pub const fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub const fn with_additional_keywords(mut self, additional_keywords: bool) -> Self {
        self.additional_keywords = additional_keywords;
        self
    }

    pub const fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    pub const fn additional_keywords(&self) -> bool {
        self.additional_keywords
    }

    /// Classify a whole word. An empty word is an identifier.
    pub fn classify(&self, word: &str) -> TokenType {
        keyword::classify_bytes(word.as_bytes(), self.ignore_case, self.additional_keywords)
    }

    /// Classify `text[start..end]`, rejecting invalid offsets.
    pub fn classify_span(&self, text: &str, start: usize, end: usize) -> Result<TokenType> {
        let span = TokenSpan::new(text, start, end)?;
        Ok(span.classify(self.ignore_case, self.additional_keywords))
    }

    /// True if `word` is any keyword under this policy, additional keywords
    /// included when enabled.
    pub fn is_keyword(&self, word: &str) -> bool {
        !self.classify(word).is_identifier()
    }
}
