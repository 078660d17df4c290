//! The schema container: a named, ordered collection of fields.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::value::Value;

/// The live, per-session mapping of field id to current value.
///
/// Owned exclusively by one form session; never persisted.
pub type ValueMap = HashMap<String, Value>;

/// The live, per-session mapping of field id to current validation
/// messages. Entries are rebuilt wholesale, never patched.
pub type ErrorMap = HashMap<String, Vec<String>>;

/// A named, ordered collection of fields plus metadata, the unit of
/// save/load.
///
/// Field order is significant: it is display and tab order, and it is the
/// order the derived-field evaluator walks (see `formkit-formula`). Field
/// ids are unique within a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Opaque unique id; store lookup is by this id only.
    pub id: String,
    /// Display name. Not unique: the store permits duplicate names.
    pub name: String,
    /// When this schema was saved (or the draft was started).
    pub created_at: DateTime<Utc>,
    /// The ordered field list.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Creates an empty schema with a fresh id, stamped now.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: Utc::now(),
            fields: Vec::new(),
        }
    }

    /// Looks up a field by id.
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Returns `true` if a field with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.field(id).is_some()
    }

    /// Iterates the field ids in schema order.
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.id.as_str())
    }
}
