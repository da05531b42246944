use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;

/// Case-insensitive alphabetical order by name. Ties keep store order;
/// the persisted catalog is never reordered.
pub fn by_name<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let mut movies = store.load()?;
    movies.sort_by_key(|m| m.name.to_lowercase());
    Ok(CmdResult::default().with_listed_movies(movies))
}

/// Ascending release year. Ties keep store order.
pub fn by_year<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let mut movies = store.load()?;
    movies.sort_by_key(|m| m.year);
    Ok(CmdResult::default().with_listed_movies(movies))
}
