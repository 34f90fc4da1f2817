use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_books(store.list_books()?))
}
