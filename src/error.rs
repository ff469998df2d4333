#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid token span: {start}..{end} over text of length {len}")]
    InvalidSpan { start: usize, end: usize, len: usize },

    #[error("Token span offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T = ()> = std::result::Result<T, Error>;
