use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Book;
use crate::store::DataStore;

/// Title and author match case-insensitively; the ISBN is compared as typed.
pub fn matches(book: &Book, query: &str) -> bool {
    let query_lower = query.to_lowercase();
    book.title.to_lowercase().contains(&query_lower)
        || book.author.to_lowercase().contains(&query_lower)
        || book.isbn.contains(query)
}

/// Free-text filter over title, author and ISBN, in collection order.
/// An empty query matches every book.
pub fn run<S: DataStore>(store: &S, query: &str) -> Result<CmdResult> {
    let listed: Vec<Book> = store
        .list_books()?
        .into_iter()
        .filter(|b| matches(b, query))
        .collect();

    tracing::debug!(query, hits = listed.len(), "text filter");
    Ok(CmdResult::default().with_listed_books(listed))
}
