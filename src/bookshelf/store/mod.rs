//! # Storage Layer
//!
//! This module defines the storage abstraction for bookshelf. The [`DataStore`]
//! trait keeps the command layer independent of where the collection lives.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the collection as an ordered `Vec<Book>`.
//!   Nothing is persisted; every session starts from the seed dataset (or empty).
//!
//! ## Ordering
//!
//! Stores keep books in insertion order. That order is the display order for
//! every view until a sort explicitly rewrites it through [`DataStore::replace_all`].
//!
//! ## Identifiers
//!
//! Stores do not assign or police identifiers. `append_book` always appends,
//! even if another book already carries the same id (the collection-size id
//! strategy can produce such collisions). Lookups and deletes act on the
//! first match.

use crate::error::Result;
use crate::model::{Book, BookId};

pub mod memory;

/// Abstract interface for book storage.
pub trait DataStore {
    /// Append a book to the end of the collection
    fn append_book(&mut self, book: &Book) -> Result<()>;

    /// Get the first book with the given id
    fn get_book(&self, id: BookId) -> Result<Book>;

    /// List all books in collection order
    fn list_books(&self) -> Result<Vec<Book>>;

    /// Remove the first book with the given id
    fn delete_book(&mut self, id: BookId) -> Result<Book>;

    /// Replace the whole collection, keeping the given order
    fn replace_all(&mut self, books: Vec<Book>) -> Result<()>;
}
