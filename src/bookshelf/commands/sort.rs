use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Author,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Title => f.write_str("title"),
            SortKey::Author => f.write_str("author"),
        }
    }
}

/// Reorders the collection in place. The sort is stable and compares strings
/// byte-wise, so `"Zorro"` sorts before `"apple"`.
pub fn run<S: DataStore>(store: &mut S, key: SortKey) -> Result<CmdResult> {
    let mut books = store.list_books()?;
    match key {
        SortKey::Title => books.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Author => books.sort_by(|a, b| a.author.cmp(&b.author)),
    }
    store.replace_all(books.clone())?;
    tracing::info!(%key, "collection sorted");

    let mut result = CmdResult::default().with_listed_books(books);
    result.add_message(CmdMessage::success(format!("Books sorted by {}.", key)));
    Ok(result)
}
