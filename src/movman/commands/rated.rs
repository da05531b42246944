use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &S, min_rating: f64) -> Result<CmdResult> {
    let movies = store.load()?;
    let filtered: Vec<_> = movies
        .into_iter()
        .filter(|m| m.rating >= min_rating)
        .collect();
    Ok(CmdResult::default().with_listed_movies(filtered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{movie, StoreFixture};

    fn rated(id: u64, name: &str, rating: f64) -> crate::model::Movie {
        let mut m = movie(id, name);
        m.rating = rating;
        m
    }

    #[test]
    fn threshold_is_inclusive() {
        let fixture = StoreFixture::new()
            .with_movie(rated(1, "Dune", 8.0))
            .with_movie(rated(2, "Arrival", 7.5));

        let result = run(&fixture.store, 8.0).unwrap();
        assert_eq!(result.listed_movies.len(), 1);
        assert_eq!(result.listed_movies[0].name, "Dune");
    }

    #[test]
    fn preserves_store_order() {
        let fixture = StoreFixture::new()
            .with_movie(rated(1, "Dune", 8.0))
            .with_movie(rated(2, "Arrival", 7.5))
            .with_movie(rated(3, "Tenet", 7.3));

        let result = run(&fixture.store, 7.5).unwrap();
        assert_eq!(
            result.listed_movies.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn no_matches_is_success_with_zero_items() {
        let fixture = StoreFixture::new().with_movie(rated(1, "Dune", 8.0));
        let result = run(&fixture.store, 9.5).unwrap();
        assert!(result.listed_movies.is_empty());
    }
}
