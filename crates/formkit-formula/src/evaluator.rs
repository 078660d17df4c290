//! Derived-field evaluation over a schema.
//!
//! [`evaluate_schema`] walks the field list once, in schema order, and
//! recomputes every derived field in place. Evaluation failures never
//! escape: a formula that does not lex, parse, or evaluate leaves the
//! field holding the empty string.

use std::collections::HashMap;

use formkit_core::FormResult;
use formkit_schema::{Schema, Value, ValueMap};

use crate::interpreter::Interpreter;
use crate::parser::parse;

/// Evaluates one formula against the given identifier environment.
///
/// An empty (or all-whitespace) formula evaluates to the empty string.
///
/// # Errors
///
/// Returns a `Formula` error for lexing, parsing, or evaluation failures.
pub fn evaluate_formula(formula: &str, env: HashMap<String, Value>) -> FormResult<Value> {
    if formula.trim().is_empty() {
        return Ok(Value::String(String::new()));
    }
    let expr = parse(formula)?;
    Interpreter::new(env).evaluate(&expr)
}

/// Recomputes every derived field in `values`, in schema order.
///
/// Each derived field's parents are bound to the values *currently* in the
/// map, and the result is written back in place before the walk continues.
/// There is no topological sort: a derived field reading another derived
/// field sees the fresh value only when its parent appears earlier in
/// schema order, and a cycle between derived fields settles one pass
/// behind instead of erroring. Chained derivations therefore rely on the
/// author ordering fields parent-first.
///
/// A parent id missing from the map binds as `Null`. A failing formula
/// yields the empty string for that field; the failure is logged at debug
/// level and never propagates.
pub fn evaluate_schema(schema: &Schema, values: &mut ValueMap) {
    for field in &schema.fields {
        let Some(derived) = &field.derived else {
            continue;
        };

        let env: HashMap<String, Value> = derived
            .parents
            .iter()
            .map(|pid| {
                let value = values.get(pid).cloned().unwrap_or(Value::Null);
                (pid.clone(), value)
            })
            .collect();

        let value = match evaluate_formula(&derived.formula, env) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(field = %field.id, %err, "formula failed, using empty value");
                Value::String(String::new())
            }
        };
        values.insert(field.id.clone(), value);
    }
}
