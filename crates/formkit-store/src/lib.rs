//! # formkit-store
//!
//! Schema persistence for formkit. Provides the [`SchemaStore`] trait and
//! two backends:
//!
//! - [`MemoryStore`](memory::MemoryStore) - keeps schemas in memory
//!   (suitable for testing and ephemeral sessions)
//! - [`JsonFileStore`](json_file::JsonFileStore) - a JSON array on disk,
//!   durable across process restarts
//!
//! Stores are append-only: saving always adds a new entry, never edits or
//! deletes a stored schema. Names are not unique; lookup is by id only,
//! via a linear scan.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use formkit_core::FormResult;
use formkit_schema::Schema;

/// A backend for storing and listing form schemas.
///
/// All operations are synchronous and fallible: a backend that cannot be
/// read or written reports `StoreUnavailable` rather than panicking or
/// blocking on background work.
pub trait SchemaStore {
    /// Returns every stored schema, oldest first (append order).
    fn list(&self) -> FormResult<Vec<Schema>>;

    /// Appends a schema to the collection.
    ///
    /// Duplicate names are permitted; entries are distinct by id.
    fn append(&mut self, schema: Schema) -> FormResult<()>;

    /// Finds a schema by id via a linear scan. Returns `None` when no
    /// entry matches.
    fn get(&self, id: &str) -> FormResult<Option<Schema>> {
        Ok(self.list()?.into_iter().find(|s| s.id == id))
    }
}
