//! # Storage Layer
//!
//! This module defines the storage abstraction for movman. The
//! [`CatalogStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, cloud, etc.) without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole catalog lives in one JSON document (an array of movies)
//!   - Saves replace the document atomically (write temp file, then rename)
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Contract
//!
//! `load` returns the full catalog in stored order; a missing backing file is
//! indistinguishable from an empty catalog and is never an error. `save`
//! replaces the full catalog; there is no merge or diff. Stored order is
//! whatever the caller passes in — the store never reorders.

use crate::error::Result;
use crate::model::Movie;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog storage.
///
/// Implementations hold the catalog as a whole document: every operation is
/// a full read or a full replacement.
pub trait CatalogStore {
    /// Load the full catalog. Missing backing data means an empty catalog.
    fn load(&self) -> Result<Vec<Movie>>;

    /// Replace the full catalog.
    fn save(&mut self, movies: &[Movie]) -> Result<()>;
}
