//! # formkit
//!
//! A dynamic form engine for Rust: typed field schemas, an ordered
//! validation rule engine, derived-value formulas evaluated in a sandboxed
//! expression language, form sessions, and pluggable schema stores.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access. You can depend on `formkit` to get the whole engine, or depend
//! on individual crates for finer-grained control.
//!
//! ## Example
//!
//! ```
//! use formkit::forms::session::{FormSession, SubmitOutcome};
//! use formkit::schema::{DerivedSpec, Field, FieldType, Schema, Value};
//!
//! let mut schema = Schema::new("Order");
//! let mut qty = Field::new(FieldType::Number, "Quantity");
//! qty.id = "qty".to_string();
//! let mut total = Field::new(FieldType::Number, "Total")
//!     .derived(DerivedSpec::new(vec!["qty".into()], "qty * 2"));
//! total.id = "total".to_string();
//! schema.fields.push(qty);
//! schema.fields.push(total);
//!
//! let mut session = FormSession::with_schema(schema);
//! session.set_value("qty", Value::Number(3.0)).unwrap();
//! assert_eq!(session.values()["total"], Value::Number(6.0));
//!
//! match session.submit_attempt() {
//!     SubmitOutcome::Submitted(payload) => {
//!         assert_eq!(payload["total"], Value::Number(6.0));
//!     }
//!     SubmitOutcome::Rejected => unreachable!("no rules configured"),
//! }
//! ```

/// Core types: errors, settings, and logging setup.
pub use formkit_core as core;

/// The schema model: values, fields, schemas, and authoring drafts.
pub use formkit_schema as schema;

/// The formula language and derived-field evaluator.
pub use formkit_formula as formula;

/// Schema stores: the `SchemaStore` trait with memory and JSON file
/// backends.
pub use formkit_store as store;

/// The form runtime: validation, sessions, render state, and the
/// authoring save flow.
pub use formkit_forms as forms;
