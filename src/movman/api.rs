//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the
//! single entry point for all catalog operations, regardless of the UI being
//! used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! The API explicitly avoids:
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over CatalogStore
//!
//! `CatalogApi<S: CatalogStore>` is generic over the storage backend:
//! - Production: `CatalogApi<FileStore>`
//! - Testing: `CatalogApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::commands;
use crate::error::Result;
use crate::store::CatalogStore;

/// The main API facade for catalog operations.
///
/// Generic over `CatalogStore` to allow different storage backends.
/// All UI clients should interact through this API.
pub struct CatalogApi<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> CatalogApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_movie(&mut self, draft: commands::MovieDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn remove_movie(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn update_movie(
        &mut self,
        id: u64,
        update: &commands::MovieUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn list_movies(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn watched_movies(&self, watched: bool) -> Result<commands::CmdResult> {
        commands::watched::run(&self.store, watched)
    }

    pub fn movies_rated_at_least(&self, min_rating: f64) -> Result<commands::CmdResult> {
        commands::rated::run(&self.store, min_rating)
    }

    pub fn search_movies(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn movies_by_name(&self) -> Result<commands::CmdResult> {
        commands::sort::by_name(&self.store)
    }

    pub fn movies_by_year(&self) -> Result<commands::CmdResult> {
        commands::sort::by_year(&self.store)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, MovieDraft, MovieUpdate};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn dispatches_mutations_and_views_over_the_same_store() {
        let mut api = CatalogApi::new(InMemoryStore::new());

        let draft = MovieDraft {
            name: "Dune".to_string(),
            watched: true,
            rating: 8.0,
            ..Default::default()
        };
        let created = api.add_movie(draft).unwrap();
        assert_eq!(created.affected_movies[0].id, 1);

        assert_eq!(api.list_movies().unwrap().listed_movies.len(), 1);
        assert_eq!(api.watched_movies(true).unwrap().listed_movies.len(), 1);
        assert_eq!(api.search_movies("du").unwrap().listed_movies.len(), 1);

        let removed = api.remove_movie(1).unwrap();
        assert!(removed.found());
        assert!(api.list_movies().unwrap().listed_movies.is_empty());
    }
}
