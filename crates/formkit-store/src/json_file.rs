//! A durable schema store backed by a JSON file.
//!
//! The collection is a single JSON array of schemas. It is read once when
//! the store is opened and rewritten in full on every append; collections
//! are small (tens of schemas), so the simple write wins over an
//! incremental format.

use std::path::{Path, PathBuf};

use formkit_core::{FormError, FormResult};
use formkit_schema::Schema;

use crate::SchemaStore;

/// A schema store persisted as a JSON array on disk.
///
/// Opening a store whose file does not exist yields an empty collection;
/// the file is created on the first append. Any I/O or serialization
/// failure surfaces as [`FormError::StoreUnavailable`].
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    schemas: Vec<Schema>,
}

impl JsonFileStore {
    /// Opens the store at `path`, loading any existing collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the file exists but cannot be read or
    /// parsed.
    pub fn open(path: impl AsRef<Path>) -> FormResult<Self> {
        let path = path.as_ref().to_path_buf();
        let schemas = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| FormError::StoreUnavailable(e.to_string()))?;
            serde_json::from_str(&contents)
                .map_err(|e| FormError::StoreUnavailable(e.to_string()))?
        } else {
            Vec::new()
        };
        tracing::debug!(path = %path.display(), count = schemas.len(), "opened schema store");
        Ok(Self { path, schemas })
    }

    /// The file path this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> FormResult<()> {
        let json = serde_json::to_string_pretty(&self.schemas)
            .map_err(|e| FormError::StoreUnavailable(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| FormError::StoreUnavailable(e.to_string()))
    }
}

impl SchemaStore for JsonFileStore {
    fn list(&self) -> FormResult<Vec<Schema>> {
        Ok(self.schemas.clone())
    }

    fn append(&mut self, schema: Schema) -> FormResult<()> {
        self.schemas.push(schema);
        match self.persist() {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), count = self.schemas.len(), "schema saved");
                Ok(())
            }
            Err(err) => {
                // Keep the in-memory collection consistent with the file.
                self.schemas.pop();
                Err(err)
            }
        }
    }
}
