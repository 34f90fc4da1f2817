use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Case-insensitive substring filter on the author only.
///
/// An empty query matches everything; callers that treat an empty author
/// search as "not searching yet" must check before calling.
pub fn run<S: DataStore>(store: &S, query: &str) -> Result<CmdResult> {
    let query_lower = query.to_lowercase();
    let listed = store
        .list_books()?
        .into_iter()
        .filter(|b| b.author.to_lowercase().contains(&query_lower))
        .collect();

    Ok(CmdResult::default().with_listed_books(listed))
}
