//! The authoring working copy of a schema.
//!
//! A [`SchemaDraft`] is the mutable schema being built in an editor. Field
//! editors hold their own working copy of a [`Field`] and propagate whole
//! new values back through [`update_field`](SchemaDraft::update_field); the
//! draft itself is the single owner of the in-progress schema.
//!
//! Saving never mutates a stored schema in place: [`freeze`](SchemaDraft::freeze)
//! produces the immutable copy to append to a store, and the draft is then
//! replaced with a fresh empty schema via [`reset`](SchemaDraft::reset).

use crate::field::Field;
use crate::schema::Schema;

/// Name given to a frozen schema when the author left the name blank.
const UNTITLED: &str = "Untitled Form";

/// The mutable authoring draft.
#[derive(Debug, Clone)]
pub struct SchemaDraft {
    current: Schema,
}

impl Default for SchemaDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaDraft {
    /// Starts a fresh, empty draft with a new schema id.
    pub fn new() -> Self {
        Self {
            current: Schema::new(""),
        }
    }

    /// The in-progress schema.
    pub const fn current(&self) -> &Schema {
        &self.current
    }

    /// Replaces the draft with an existing schema for re-editing.
    pub fn set_current(&mut self, schema: Schema) {
        self.current = schema;
    }

    /// Replaces the draft with a fresh empty schema.
    pub fn reset(&mut self) {
        self.current = Schema::new("");
    }

    /// Appends a field to the end of the draft.
    pub fn add_field(&mut self, field: Field) {
        self.current.fields.push(field);
    }

    /// Replaces the field with a matching id. Unknown ids are ignored.
    pub fn update_field(&mut self, field: Field) {
        if let Some(existing) = self.current.fields.iter_mut().find(|f| f.id == field.id) {
            *existing = field;
        }
    }

    /// Removes the field with the given id, if present.
    pub fn remove_field(&mut self, id: &str) {
        self.current.fields.retain(|f| f.id != id);
    }

    /// Moves the field at index `from` to index `to`, shifting the fields
    /// between them. Out-of-range indices make this a no-op.
    ///
    /// Only traversal order changes: the field set and each field's own
    /// attributes are untouched.
    pub fn reorder(&mut self, from: usize, to: usize) {
        let fields = &mut self.current.fields;
        if from >= fields.len() || to >= fields.len() {
            return;
        }
        let field = fields.remove(from);
        fields.insert(to, field);
    }

    /// Produces the frozen copy to persist: the trimmed `name` (falling
    /// back to `"Untitled Form"` when blank) and a freshly stamped
    /// `created_at`, with the draft's id and fields.
    ///
    /// The draft itself is untouched; callers append the returned schema to
    /// a store and then [`reset`](SchemaDraft::reset) the draft.
    pub fn freeze(&self, name: &str) -> Schema {
        let trimmed = name.trim();
        Schema {
            id: self.current.id.clone(),
            name: if trimmed.is_empty() {
                UNTITLED.to_string()
            } else {
                trimmed.to_string()
            },
            created_at: chrono::Utc::now(),
            fields: self.current.fields.clone(),
        }
    }
}
