use crate::commands::{CmdMessage, CmdResult, MovieDraft};
use crate::error::Result;
use crate::model::{next_id, Movie};
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &mut S, draft: MovieDraft) -> Result<CmdResult> {
    let mut movies = store.load()?;
    let movie = Movie {
        id: next_id(&movies),
        name: draft.name,
        genre: draft.genre,
        year: draft.year,
        age_rating: draft.age_rating,
        duration: draft.duration,
        watched: draft.watched,
        rating: draft.rating,
        kind: draft.kind,
        available_at: draft.available_at,
    };
    movies.push(movie.clone());
    store.save(&movies)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Movie '{}' added successfully with ID: {}.",
        movie.name, movie.id
    )));
    Ok(result.with_affected_movies(vec![movie]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn draft(name: &str) -> MovieDraft {
        MovieDraft {
            name: name.to_string(),
            genre: "Sci-Fi".to_string(),
            year: 2021,
            rating: 8.0,
            ..Default::default()
        }
    }

    #[test]
    fn first_movie_gets_id_one() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, draft("Test")).unwrap();

        assert_eq!(result.affected_movies[0].id, 1);
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn appends_at_the_end_with_a_fresh_id() {
        let mut store = InMemoryStore::new();
        run(&mut store, draft("Dune")).unwrap();
        run(&mut store, draft("Arrival")).unwrap();

        let movies = store.load().unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[1].name, "Arrival");
        assert_eq!(movies[1].id, 2);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = InMemoryStore::new();
        run(&mut store, draft("Dune")).unwrap();
        let second = run(&mut store, draft("Arrival")).unwrap().affected_movies[0].id;
        crate::commands::remove::run(&mut store, second).unwrap();

        let third = run(&mut store, draft("Tenet")).unwrap();
        assert_eq!(third.affected_movies[0].id, 3);
    }

    #[test]
    fn draft_fields_land_on_the_record() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, draft("Dune")).unwrap();

        let movie = &result.affected_movies[0];
        assert_eq!(movie.genre, "Sci-Fi");
        assert_eq!(movie.year, 2021);
        assert_eq!(movie.rating, 8.0);
        assert!(!movie.watched);
    }
}
