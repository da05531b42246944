use super::CatalogStore;
use crate::error::{CatalogError, Result};
use crate::model::Movie;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(CatalogError::Io)?;
            }
        }
        Ok(())
    }
}

impl CatalogStore for FileStore {
    fn load(&self) -> Result<Vec<Movie>> {
        if !self.path.exists() {
            log::debug!("no catalog at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(CatalogError::Io)?;
        let movies: Vec<Movie> =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        log::debug!(
            "loaded {} movies from {}",
            movies.len(),
            self.path.display()
        );
        Ok(movies)
    }

    fn save(&mut self, movies: &[Movie]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(movies).map_err(CatalogError::Serialization)?;

        // Atomic write: a crash mid-save must not corrupt the previous catalog
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(CatalogError::Io)?;
        fs::rename(&tmp_path, &self.path).map_err(CatalogError::Io)?;

        log::debug!("saved {} movies to {}", movies.len(), self.path.display());
        Ok(())
    }
}
