use crate::commands::{CmdMessage, CmdResult, MovieUpdate};
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &mut S, id: u64, update: &MovieUpdate) -> Result<CmdResult> {
    let mut movies = store.load()?;
    let mut result = CmdResult::default();

    let Some(movie) = movies.iter_mut().find(|m| m.id == id) else {
        result.add_message(CmdMessage::warning(format!(
            "No movie found with ID '{}'.",
            id
        )));
        return Ok(result);
    };

    // Merge semantics: an omitted field keeps its current value
    if let Some(name) = &update.name {
        movie.name = name.clone();
    }
    if let Some(genre) = &update.genre {
        movie.genre = genre.clone();
    }
    if let Some(year) = update.year {
        movie.year = year;
    }
    if let Some(age_rating) = &update.age_rating {
        movie.age_rating = age_rating.clone();
    }
    if let Some(duration) = &update.duration {
        movie.duration = duration.clone();
    }
    if let Some(watched) = update.watched {
        movie.watched = watched;
    }
    if let Some(rating) = update.rating {
        movie.rating = rating;
    }
    if let Some(kind) = &update.kind {
        movie.kind = kind.clone();
    }
    if let Some(available_at) = &update.available_at {
        movie.available_at = available_at.clone();
    }

    let updated = movie.clone();
    store.save(&movies)?;

    result.add_message(CmdMessage::success(format!(
        "Movie with ID {} updated successfully.",
        id
    )));
    Ok(result.with_affected_movies(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{movie, StoreFixture};

    #[test]
    fn overwrites_only_supplied_fields() {
        let mut fixture = StoreFixture::new().with_movie(movie(1, "Dune"));

        let update = MovieUpdate {
            rating: Some(9.1),
            watched: Some(true),
            ..Default::default()
        };
        let result = run(&mut fixture.store, 1, &update).unwrap();

        assert!(result.found());
        let updated = &fixture.store.load().unwrap()[0];
        assert_eq!(updated.rating, 9.1);
        assert!(updated.watched);
        assert_eq!(updated.name, "Dune");
        assert_eq!(updated.genre, "Drama");
    }

    #[test]
    fn empty_update_changes_nothing() {
        let mut fixture = StoreFixture::new().with_movie(movie(1, "Dune"));
        let before = fixture.store.load().unwrap();

        let result = run(&mut fixture.store, 1, &MovieUpdate::default()).unwrap();

        assert!(result.found());
        assert_eq!(fixture.store.load().unwrap(), before);
    }

    #[test]
    fn can_set_a_field_to_empty_explicitly() {
        let mut fixture = StoreFixture::new().with_movie(movie(1, "Dune"));

        let update = MovieUpdate {
            genre: Some(String::new()),
            ..Default::default()
        };
        run(&mut fixture.store, 1, &update).unwrap();

        assert_eq!(fixture.store.load().unwrap()[0].genre, "");
    }

    #[test]
    fn unknown_id_is_a_reported_no_op() {
        let mut fixture = StoreFixture::new().with_movie(movie(1, "Dune"));
        let before = fixture.store.load().unwrap();

        let update = MovieUpdate {
            name: Some("Other".to_string()),
            ..Default::default()
        };
        let result = run(&mut fixture.store, 42, &update).unwrap();

        assert!(!result.found());
        assert_eq!(fixture.store.load().unwrap(), before);
    }

    #[test]
    fn id_is_never_touched() {
        let mut fixture = StoreFixture::new().with_movie(movie(7, "Dune"));

        let update = MovieUpdate {
            name: Some("Dune: Part Two".to_string()),
            ..Default::default()
        };
        run(&mut fixture.store, 7, &update).unwrap();

        assert_eq!(fixture.store.load().unwrap()[0].id, 7);
    }
}
