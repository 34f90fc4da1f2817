use crate::commands::{CmdMessage, CmdResult};
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::ids::IdAllocator;
use crate::model::{BookDraft, DEFAULT_CATEGORY};
use crate::store::DataStore;

/// Knobs that shape how a draft becomes a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOptions {
    pub default_category: String,
    pub unique_isbn: bool,
}

impl Default for InsertOptions {
    fn default() -> Self {
        Self {
            default_category: DEFAULT_CATEGORY.to_string(),
            unique_isbn: false,
        }
    }
}

impl From<&ShelfConfig> for InsertOptions {
    fn from(config: &ShelfConfig) -> Self {
        Self {
            default_category: config.default_category.clone(),
            unique_isbn: config.unique_isbn,
        }
    }
}

/// Appends the book described by `draft`.
///
/// An incomplete or invalid draft is refused silently: the result is empty,
/// no message is produced and the collection is untouched.
pub fn run<S: DataStore>(
    store: &mut S,
    ids: &mut IdAllocator,
    options: &InsertOptions,
    draft: &BookDraft,
) -> Result<CmdResult> {
    let books = store.list_books()?;

    // Validate before allocating so a refused draft never consumes an id.
    if let Some(field) = draft.missing_fields().first() {
        tracing::debug!(%field, "insert refused: missing field");
        return Ok(CmdResult::default());
    }
    if options.unique_isbn && books.iter().any(|b| b.isbn == draft.isbn) {
        tracing::debug!(isbn = %draft.isbn, "insert refused: duplicate isbn");
        return Ok(CmdResult::default());
    }

    let mut allocator = ids.clone();
    let id = allocator.next(&books);
    let book = match draft.to_book(id, &options.default_category) {
        Ok(book) => book,
        Err(reason) => {
            tracing::debug!(%reason, "insert refused");
            return Ok(CmdResult::default());
        }
    };
    *ids = allocator;

    store.append_book(&book)?;
    tracing::info!(id = %book.id, title = %book.title, "book added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added ({}): {}",
        book.id, book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}
