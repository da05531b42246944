use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "movman")]
#[command(about = "Personal movie catalog for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the catalog file (overrides the configured location)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SortKey {
    /// Alphabetically by name (case-insensitive)
    Name,
    /// Ascending by release year
    Year,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new movie
    #[command(alias = "n")]
    Add {
        /// Movie name
        name: String,

        #[arg(long, default_value = "")]
        genre: String,

        /// Release year
        #[arg(long, default_value_t = 0)]
        year: i32,

        /// Age rating label (e.g. "14 years and below")
        #[arg(long, default_value = "")]
        age_rating: String,

        /// Duration label (e.g. "2 hours 30 minutes")
        #[arg(long, default_value = "")]
        duration: String,

        /// Mark as already watched
        #[arg(long)]
        watched: bool,

        /// Rating from 0 to 10
        #[arg(long, default_value_t = 0.0)]
        rating: f64,

        /// Movie, Short, Season...
        #[arg(long = "type", default_value = "Movie")]
        kind: String,

        /// Platform label (e.g. Netflix, Hulu)
        #[arg(long, default_value = "")]
        available_at: String,
    },

    /// Remove a movie by id
    #[command(alias = "rm")]
    Remove {
        /// Id of the movie to remove
        id: u64,
    },

    /// Update fields of a movie; omitted flags keep the current value
    #[command(alias = "e")]
    Update {
        /// Id of the movie to update
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        genre: Option<String>,

        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        age_rating: Option<String>,

        #[arg(long)]
        duration: Option<String>,

        /// true or false
        #[arg(long)]
        watched: Option<bool>,

        #[arg(long)]
        rating: Option<f64>,

        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long)]
        available_at: Option<String>,
    },

    /// List movies
    #[command(alias = "ls")]
    List {
        /// Only watched movies
        #[arg(long, conflicts_with = "unwatched")]
        watched: bool,

        /// Only unwatched movies
        #[arg(long)]
        unwatched: bool,

        /// Only movies rated at least this much
        #[arg(long)]
        min_rating: Option<f64>,

        /// Substring search on the name
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List all movies sorted for display (stored order is untouched)
    Sort {
        #[arg(value_enum)]
        by: SortKey,
    },

    /// Search movies by name (dedicated command)
    Search { term: String },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
