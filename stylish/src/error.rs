//! Error types and result aliases.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error in {context}: {error}")]
    Toml {
        error: toml::de::Error,
        context: String,
    },

    #[error("Invalid target width: {0}. Width must be at least 1 column.")]
    InvalidWidth(usize),
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::Toml {
            error,
            context: "stylish.toml".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
