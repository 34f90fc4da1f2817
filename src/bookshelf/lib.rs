//! # Bookshelf Architecture
//!
//! Bookshelf is a **UI-agnostic book catalog library**. The terminal client in
//! `cli/` is one client of it; the same core could sit behind a web page or a
//! desktop form.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the interactive shell             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - CatalogStore facade over commands                        │
//! │  - Owns the draft, the filter queries and id allocation     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: insert, delete, filter, aggregate   │
//! │  - Returns CmdResult values, never prints                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Behavior worth knowing
//!
//! - Inserting an incomplete draft is a **silent no-op**: no error, no message.
//!   [`model::BookDraft::missing_fields`] lets a UI explain what is missing.
//! - The free-text filter lower-cases title and author but compares the ISBN
//!   exactly as typed.
//! - On an empty catalog, `average_pages` is `0` while price and page extremes
//!   and the average price are `None`.
//! - Identifiers come from [`ids::IdAllocator`]; see that module for the two
//!   supported schemes.
//!
//! ## Quick example
//!
//! ```rust
//! use bookshelf::api::CatalogStore;
//! use bookshelf::model::{BookDraft, DraftField};
//!
//! let mut catalog = CatalogStore::seeded();
//! let mut draft = BookDraft::new()
//!     .with(DraftField::Title, "Dune")
//!     .with(DraftField::Author, "Frank Herbert")
//!     .with(DraftField::Pages, "412")
//!     .with(DraftField::Price, "9.99")
//!     .with(DraftField::Isbn, "978-0441013593");
//!
//! catalog.insert(&mut draft).unwrap();
//! assert!(draft.is_empty());
//!
//! let tolkien = catalog.filter_by_text("tolkien").unwrap();
//! assert_eq!(tolkien.listed_books.len(), 2);
//!
//! let stats = catalog.aggregate().unwrap().statistics.unwrap();
//! assert_eq!(stats.total_count, 5);
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory backend
//! - [`model`]: Core data types (`Book`, `BookId`, `BookDraft`)
//! - [`ids`]: Identifier allocation
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod model;
pub mod store;
