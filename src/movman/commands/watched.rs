use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &S, watched: bool) -> Result<CmdResult> {
    let movies = store.load()?;
    // Label comes from the argument, never from the result set
    let status = if watched { "Watched" } else { "Unwatched" };

    let filtered: Vec<_> = movies.into_iter().filter(|m| m.watched == watched).collect();

    let mut result = CmdResult::default();
    if filtered.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No {} movies found.",
            status.to_lowercase()
        )));
    } else {
        result.add_message(CmdMessage::info(format!("{} Movies:", status)));
    }
    Ok(result.with_listed_movies(filtered))
}
