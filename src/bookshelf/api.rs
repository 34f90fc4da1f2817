//! # API Facade
//!
//! [`CatalogStore`] is the single entry point for catalog operations, whatever
//! the UI. It is a thin facade over the command layer that also owns the state
//! a UI session needs between commands:
//!
//! - the **Draft**: the pending record being filled in before insertion,
//! - the **text query** and **author query** the browse and author views use,
//! - the [`IdAllocator`] deciding the identifier of the next book.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O**: no stdout, stderr or terminal assumptions
//! - **Presentation**: returns [`CmdResult`] values, not strings
//!
//! ## Generic Over DataStore
//!
//! `CatalogStore<S: DataStore>` defaults to [`InMemoryStore`], the only backend
//! the application ships with.

use crate::commands;
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::ids::IdAllocator;
use crate::model::{BookDraft, BookId, DraftField};
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;
use std::path::Path;

pub struct CatalogStore<S: DataStore = InMemoryStore> {
    store: S,
    ids: IdAllocator,
    options: commands::insert::InsertOptions,
    draft: BookDraft,
    text_query: String,
    author_query: String,
}

impl CatalogStore<InMemoryStore> {
    /// A catalog holding the seed dataset, with default settings.
    pub fn seeded() -> Self {
        Self::from_config(&ShelfConfig::default())
    }

    /// A catalog with no books, with default settings.
    pub fn empty() -> Self {
        let config = ShelfConfig {
            seed: false,
            ..ShelfConfig::default()
        };
        Self::from_config(&config)
    }

    pub fn from_config(config: &ShelfConfig) -> Self {
        let store = if config.seed {
            InMemoryStore::seeded()
        } else {
            InMemoryStore::new()
        };
        let ids = IdAllocator::for_books(config.id_strategy, store.books());
        Self::assemble(store, ids, config)
    }
}

impl<S: DataStore> CatalogStore<S> {
    /// Wraps an existing store. Ids already present are never handed out again
    /// under the monotonic strategy.
    pub fn new(store: S, config: &ShelfConfig) -> Result<Self> {
        let ids = IdAllocator::for_books(config.id_strategy, &store.list_books()?);
        Ok(Self::assemble(store, ids, config))
    }

    fn assemble(store: S, ids: IdAllocator, config: &ShelfConfig) -> Self {
        Self {
            store,
            ids,
            options: config.into(),
            draft: BookDraft::default(),
            text_query: String::new(),
            author_query: String::new(),
        }
    }

    /// Inserts `draft` and clears it on success. A refused draft is left as is
    /// and the result is empty.
    pub fn insert(&mut self, draft: &mut BookDraft) -> Result<CmdResult> {
        let result = commands::insert::run(&mut self.store, &mut self.ids, &self.options, draft)?;
        if !result.affected_books.is_empty() {
            draft.clear();
        }
        Ok(result)
    }

    /// Inserts the catalog's own draft.
    pub fn commit_draft(&mut self) -> Result<CmdResult> {
        let mut draft = std::mem::take(&mut self.draft);
        let result = self.insert(&mut draft);
        self.draft = draft;
        result
    }

    pub fn draft(&self) -> &BookDraft {
        &self.draft
    }

    pub fn set_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn discard_draft(&mut self) {
        self.draft.clear();
    }

    pub fn delete_by_id(&mut self, id: BookId) -> Result<CmdResult> {
        commands::delete::by_id(&mut self.store, &[id])
    }

    pub fn delete_by_ids(&mut self, ids: &[BookId]) -> Result<CmdResult> {
        commands::delete::by_id(&mut self.store, ids)
    }

    pub fn delete_by_isbn(&mut self, isbn: &str) -> Result<CmdResult> {
        commands::delete::by_isbn(&mut self.store, isbn)
    }

    pub fn filter_by_text(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn filter_by_author(&self, query: &str) -> Result<CmdResult> {
        commands::author::run(&self.store, query)
    }

    pub fn set_text_query(&mut self, query: impl Into<String>) {
        self.text_query = query.into();
    }

    pub fn text_query(&self) -> &str {
        &self.text_query
    }

    pub fn set_author_query(&mut self, query: impl Into<String>) {
        self.author_query = query.into();
    }

    pub fn author_query(&self) -> &str {
        &self.author_query
    }

    /// The browse view: books matching the current text query.
    pub fn browse(&self) -> Result<CmdResult> {
        self.filter_by_text(&self.text_query)
    }

    /// The author view. `None` while the author query is empty, which means
    /// nothing has been searched for yet (rather than "match everything").
    pub fn author_view(&self) -> Result<Option<CmdResult>> {
        if self.author_query.is_empty() {
            return Ok(None);
        }
        self.filter_by_author(&self.author_query).map(Some)
    }

    pub fn find_by_title(&self, title: &str) -> Result<CmdResult> {
        commands::find::run(&self.store, title)
    }

    pub fn sort_by(&mut self, key: SortKey) -> Result<CmdResult> {
        commands::sort::run(&mut self.store, key)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.store.list_books()?.len())
    }

    pub fn aggregate(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads or changes the configuration file in `config_dir`. Changes take
    /// effect the next time a catalog is built from that file.
    pub fn config(&self, config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(config_dir, action)
    }
}

impl Default for CatalogStore<InMemoryStore> {
    fn default() -> Self {
        Self::seeded()
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::insert::InsertOptions;
pub use crate::commands::sort::SortKey;
pub use crate::commands::{CategoryShare, CmdMessage, CmdResult, MessageLevel, Statistics};
