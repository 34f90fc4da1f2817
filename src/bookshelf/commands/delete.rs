use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookId;
use crate::store::DataStore;

/// Removes the first book with each of the given ids.
///
/// Ids that are not in the collection are skipped with a warning; deleting
/// something that is not there is never an error.
pub fn by_id<S: DataStore>(store: &mut S, ids: &[BookId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let present = store.list_books()?.iter().any(|b| b.id == id);
        if !present {
            tracing::debug!(%id, "delete skipped: not in collection");
            result.add_message(CmdMessage::warning(format!("No book with id {}", id)));
            continue;
        }

        let book = store.delete_book(id)?;
        tracing::info!(%id, title = %book.title, "book deleted");
        result.add_message(CmdMessage::success(format!(
            "Book deleted ({}): {}",
            book.id, book.title
        )));
        result.affected_books.push(book);
    }

    Ok(result)
}

/// Removes the first book whose ISBN equals `isbn` exactly. Works by
/// position, so a book sharing its id with an earlier one is still the one
/// removed.
pub fn by_isbn<S: DataStore>(store: &mut S, isbn: &str) -> Result<CmdResult> {
    let mut books = store.list_books()?;
    let mut result = CmdResult::default();

    let Some(pos) = books.iter().position(|b| b.isbn == isbn) else {
        result.add_message(CmdMessage::warning(format!("No book with ISBN {}", isbn)));
        return Ok(result);
    };

    let book = books.remove(pos);
    store.replace_all(books)?;
    tracing::info!(id = %book.id, %isbn, title = %book.title, "book deleted");
    result.add_message(CmdMessage::success(format!(
        "Book deleted ({}): {}",
        book.id, book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}
