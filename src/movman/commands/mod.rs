use crate::model::Movie;

pub mod add;
pub mod list;
pub mod rated;
pub mod remove;
pub mod search;
pub mod sort;
pub mod update;
pub mod watched;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, removed or modified by a mutation.
    pub affected_movies: Vec<Movie>,
    /// Records produced by a view operation, in display order.
    pub listed_movies: Vec<Movie>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_movies(mut self, movies: Vec<Movie>) -> Self {
        self.affected_movies = movies;
        self
    }

    pub fn with_listed_movies(mut self, movies: Vec<Movie>) -> Self {
        self.listed_movies = movies;
        self
    }

    /// Whether a mutation actually touched a record. Remove/update on an
    /// unknown id report not-found through this rather than an error.
    pub fn found(&self) -> bool {
        !self.affected_movies.is_empty()
    }
}

/// Field values for a new record. Everything except the id, which the
/// allocator assigns.
#[derive(Debug, Clone, Default)]
pub struct MovieDraft {
    pub name: String,
    pub genre: String,
    pub year: i32,
    pub age_rating: String,
    pub duration: String,
    pub watched: bool,
    pub rating: f64,
    pub kind: String,
    pub available_at: String,
}

/// Partial update for an existing record. `None` keeps the current value;
/// this is a merge, never a replace. Explicit Options rather than empty-string
/// sentinels so "skipped this field" and "set it to empty" stay distinct.
#[derive(Debug, Clone, Default)]
pub struct MovieUpdate {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub age_rating: Option<String>,
    pub duration: Option<String>,
    pub watched: Option<bool>,
    pub rating: Option<f64>,
    pub kind: Option<String>,
    pub available_at: Option<String>,
}
