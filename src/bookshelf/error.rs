use crate::model::BookId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BookshelfError>;
