//! An in-memory schema store, suitable for testing.

use formkit_core::FormResult;
use formkit_schema::Schema;

use crate::SchemaStore;

/// Stores schemas in a plain vector. Contents are lost when the store is
/// dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    schemas: Vec<Schema>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub const fn new() -> Self {
        Self {
            schemas: Vec::new(),
        }
    }

    /// Returns the number of stored schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns `true` if the store holds no schemas.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl SchemaStore for MemoryStore {
    fn list(&self) -> FormResult<Vec<Schema>> {
        Ok(self.schemas.clone())
    }

    fn append(&mut self, schema: Schema) -> FormResult<()> {
        self.schemas.push(schema);
        Ok(())
    }
}
