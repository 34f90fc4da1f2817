use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Looks up the first book whose title equals `title` exactly.
pub fn run<S: DataStore>(store: &S, title: &str) -> Result<CmdResult> {
    let found = store.list_books()?.into_iter().find(|b| b.title == title);

    match found {
        Some(book) => Ok(CmdResult::default().with_listed_books(vec![book])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!(
                "Book with title '{}' not found.",
                title
            )));
            Ok(result)
        }
    }
}
