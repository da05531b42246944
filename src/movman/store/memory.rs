use super::CatalogStore;
use crate::error::Result;
use crate::model::Movie;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    movies: Vec<Movie>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Movie>> {
        Ok(self.movies.clone())
    }

    fn save(&mut self, movies: &[Movie]) -> Result<()> {
        self.movies = movies.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn movie(id: u64, name: &str) -> Movie {
        Movie {
            id,
            name: name.to_string(),
            genre: "Drama".to_string(),
            year: 2000,
            age_rating: "all ages".to_string(),
            duration: "2 hours".to_string(),
            watched: false,
            rating: 5.0,
            kind: "Movie".to_string(),
            available_at: "Netflix".to_string(),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_movie(mut self, m: Movie) -> Self {
            let mut movies = self.store.load().unwrap();
            movies.push(m);
            self.store.save(&movies).unwrap();
            self
        }

        pub fn with_movies(self, count: usize) -> Self {
            let mut fixture = self;
            for i in 0..count {
                let id = (i + 1) as u64;
                fixture = fixture.with_movie(movie(id, &format!("Test Movie {}", id)));
            }
            fixture
        }
    }
}
