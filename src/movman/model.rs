use serde::{Deserialize, Serialize};

/// One catalog entry. `id` is assigned by [`next_id`] on creation and never
/// changes afterwards; everything else is mutable through the update command.
///
/// `age_rating` and `duration` are free-form labels ("14 years and below",
/// "2 hours 30 minutes"), not structured values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub name: String,
    pub genre: String,
    pub year: i32,
    pub age_rating: String,
    pub duration: String,
    pub watched: bool,
    pub rating: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub available_at: String,
}

impl Movie {
    /// Single-line, human-readable rendering of the record.
    ///
    /// Field order is fixed: id, name, genre, year, age rating, duration,
    /// rating, watched, availability.
    pub fn summary(&self) -> String {
        format!(
            "ID: {} / Name: {} / Genre: {} / Year: {} / Age Rating: {} / Duration: {} / Rating: {} / Watched: {} / Available at: {}",
            self.id,
            self.name,
            self.genre,
            self.year,
            self.age_rating,
            self.duration,
            self.rating,
            if self.watched { "yes" } else { "no" },
            self.available_at
        )
    }
}

/// Next unique id for a new record: `1` for an empty catalog, otherwise
/// `max(id) + 1`. Ids are never reused, so removals leave gaps.
///
/// Assumes every id in `movies` was assigned by this function; externally
/// injected ids are not guarded against.
pub fn next_id(movies: &[Movie]) -> u64 {
    movies.iter().map(|m| m.id).max().map_or(1, |max| max + 1)
}
