use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const DB_FILENAME: &str = "folio.sqlite";

/// Resolves the portable data layout under a single root directory.
#[derive(Debug, Clone)]
pub struct PortablePathManager {
    root: PathBuf,
}

impl PortablePathManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Main data directory (`./data` by default).
    pub fn data_dir(&self) -> &Path {
        &self.root
    }

    /// Database directory (`./data/db`).
    pub fn db_dir(&self) -> PathBuf {
        self.root.join("db")
    }

    /// SQLite file holding the durable local state.
    pub fn db_path(&self) -> PathBuf {
        self.db_dir().join(DB_FILENAME)
    }

    /// Creates the data and db directories if they do not exist.
    pub fn init(&self) -> Result<(), std::io::Error> {
        for dir in [self.root.clone(), self.db_dir()] {
            if !dir.exists() {
                info!("Creating directory: {:?}", dir);
                fs::create_dir_all(&dir)?;
            }
        }
        Ok(())
    }
}
