//! # Command Layer
//!
//! Pure business logic, one module per operation. Commands take a store (plus
//! whatever options they need) and return a [`CmdResult`]. They never print;
//! anything meant for the user goes into `CmdResult::messages`.

use crate::config::ShelfConfig;
use crate::model::Book;

pub mod author;
pub mod config;
pub mod delete;
pub mod find;
pub mod insert;
pub mod list;
pub mod search;
pub mod sort;
pub mod stats;

pub use stats::{CategoryShare, Statistics};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Books added or removed by the command
    pub affected_books: Vec<Book>,
    /// Books the command wants shown, in display order
    pub listed_books: Vec<Book>,
    pub statistics: Option<Statistics>,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Titles of the listed books, mostly handy in tests.
    pub fn listed_titles(&self) -> Vec<&str> {
        self.listed_books.iter().map(|b| b.title.as_str()).collect()
    }
}
