//! # formkit-schema
//!
//! The form schema model for formkit. Provides the dynamically-typed
//! [`Value`](value::Value) enum, field definitions
//! ([`Field`](field::Field), [`FieldType`](field::FieldType),
//! [`ValidationRules`](field::ValidationRules),
//! [`DerivedSpec`](field::DerivedSpec)), the [`Schema`](schema::Schema)
//! container, and the [`SchemaDraft`](draft::SchemaDraft) authoring working
//! copy.
//!
//! ## Module Overview
//!
//! - [`value`] - The dynamically-typed [`Value`](value::Value) enum
//! - [`field`] - Field definitions and their builder API
//! - [`schema`] - The [`Schema`](schema::Schema) container plus the
//!   [`ValueMap`](schema::ValueMap) and [`ErrorMap`](schema::ErrorMap)
//!   session aliases
//! - [`draft`] - The mutable authoring draft and its freeze-on-save
//!   lifecycle

pub mod draft;
pub mod field;
pub mod schema;
pub mod value;

pub use draft::SchemaDraft;
pub use field::{DerivedSpec, Field, FieldType, ValidationRules};
pub use schema::{ErrorMap, Schema, ValueMap};
pub use value::Value;
