use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("other: {0}")]
    Other(String),
}

impl Error {
    #[inline]
    pub fn invalid_value(text: impl Into<String>) -> Self {
        Self::InvalidValue(text.into())
    }

    #[inline]
    pub fn other(text: impl Into<String>) -> Self {
        Self::Other(text.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
