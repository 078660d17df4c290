//! Saving an authoring draft into a schema store.
//!
//! Saving always appends a frozen copy (a previously stored schema is
//! never edited in place), and on success the draft is replaced with a
//! fresh empty schema so the next form starts clean.

use formkit_core::FormResult;
use formkit_schema::SchemaDraft;
use formkit_store::SchemaStore;

/// Freezes `draft` under `name`, appends it to `store`, and resets the
/// draft. Returns the stored schema's id.
///
/// A blank name falls back to `"Untitled Form"`. Duplicate names are
/// permitted; each save is a distinct entry keyed by id.
///
/// # Errors
///
/// Propagates the store's failure; the draft is left untouched so the
/// caller can retry.
pub fn save_draft(
    draft: &mut SchemaDraft,
    store: &mut dyn SchemaStore,
    name: &str,
) -> FormResult<String> {
    let frozen = draft.freeze(name);
    let id = frozen.id.clone();
    let name = frozen.name.clone();
    store.append(frozen)?;
    draft.reset();
    tracing::info!(%id, %name, "draft saved");
    Ok(id)
}
