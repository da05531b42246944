use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    let movies = store.load()?;
    let mut result = CmdResult::default();

    let (removed, remaining): (Vec<_>, Vec<_>) = movies.into_iter().partition(|m| m.id == id);

    if removed.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No movie found with ID '{}'.",
            id
        )));
        return Ok(result);
    }

    store.save(&remaining)?;
    result.add_message(CmdMessage::success(format!(
        "Movie with ID '{}' removed successfully.",
        id
    )));
    Ok(result.with_affected_movies(removed))
}
