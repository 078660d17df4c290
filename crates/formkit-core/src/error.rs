//! Core error types for the formkit engine.
//!
//! This module provides the [`FormError`] enum covering session errors,
//! formula evaluation errors, store errors, and serialization errors.
//!
//! Validation failure is deliberately *not* an error: a failed submit is an
//! expected outcome, reported through the session's error map and
//! [`SubmitOutcome`](https://docs.rs/formkit-forms), never through `Err`.

use thiserror::Error;

/// The primary error type for the formkit engine.
///
/// All failures are local and recoverable: a failed call leaves the session,
/// draft, or store it was issued against in a consistent state, and the
/// caller may retry with corrected input. There are no fatal error
/// conditions.
#[derive(Error, Debug)]
pub enum FormError {
    // ── Session errors ───────────────────────────────────────────────

    /// A session operation referenced a field id not present in the bound
    /// schema. Fatal to the call, not to the session.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A direct edit was attempted on a derived field. Derived values are
    /// always computed from their parents; the rendering layer disables the
    /// control, so reaching this error indicates a caller bug.
    #[error("Field '{0}' is derived and cannot be set directly")]
    DerivedFieldImmutable(String),

    // ── Formula errors ───────────────────────────────────────────────

    /// A formula failed to lex, parse, or evaluate. Callers of the derived
    /// field evaluator never see this variant: the evaluator downgrades it
    /// to an empty value per field.
    #[error("Formula error: {0}")]
    Formula(String),

    // ── Store errors ─────────────────────────────────────────────────

    /// The schema store could not be read or written.
    #[error("Schema store unavailable: {0}")]
    StoreUnavailable(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A convenience type alias for `Result<T, FormError>`.
pub type FormResult<T> = Result<T, FormError>;
