use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &S, term: &str) -> Result<CmdResult> {
    let movies = store.load()?;
    let term_lower = term.to_lowercase();

    // An empty term matches everything
    let matches: Vec<_> = movies
        .into_iter()
        .filter(|m| m.name.to_lowercase().contains(&term_lower))
        .collect();

    Ok(CmdResult::default().with_listed_movies(matches))
}
