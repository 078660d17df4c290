//! The form session: a schema bound to live values and errors.
//!
//! A [`FormSession`] owns one [`ValueMap`] and one [`ErrorMap`] and walks
//! the lifecycle `Empty` → `Active` → (`Validating`) → `Active` or
//! `Submitted`. Every value change triggers a full derived-field
//! recomputation pass followed by re-validation of the edited field;
//! submitting validates every field.

use formkit_core::{FormError, FormResult};
use formkit_formula::evaluate_schema;
use formkit_schema::{ErrorMap, Schema, Value, ValueMap};

use crate::render::FieldState;
use crate::validation::validate;

/// The lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No schema bound.
    #[default]
    Empty,
    /// A schema is bound and editable.
    Active,
    /// A submit attempt is validating. Transient: `submit_attempt` always
    /// resolves it to `Active` or `Submitted` before returning.
    Validating,
    /// The last submit attempt succeeded. Terminal for that attempt; a new
    /// edit or a rebind starts the next one.
    Submitted,
}

/// The outcome of a submit attempt.
///
/// A rejected submit is an expected result, not an error: the violations
/// live in the session's error map.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every field validated; the payload maps each field id to its final
    /// value.
    Submitted(ValueMap),
    /// At least one field failed validation (or no schema is bound); the
    /// error map holds the violations.
    Rejected,
}

/// Orchestrates a schema, its live values, derived recomputation, and
/// validation.
#[derive(Debug, Default)]
pub struct FormSession {
    schema: Option<Schema>,
    values: ValueMap,
    errors: ErrorMap,
    state: SessionState,
}

impl FormSession {
    /// Creates a session with no schema bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session already bound to a schema.
    pub fn with_schema(schema: Schema) -> Self {
        let mut session = Self::new();
        session.bind(schema);
        session
    }

    /// Binds a schema: values reset to each field's initial value, derived
    /// fields are computed, errors are cleared, and the session becomes
    /// `Active`.
    pub fn bind(&mut self, schema: Schema) {
        self.values = schema
            .fields
            .iter()
            .map(|f| (f.id.clone(), f.initial_value()))
            .collect();
        evaluate_schema(&schema, &mut self.values);
        self.errors.clear();
        self.schema = Some(schema);
        self.state = SessionState::Active;
    }

    /// The current lifecycle state.
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The bound schema, if any.
    pub const fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// The live value map.
    pub const fn values(&self) -> &ValueMap {
        &self.values
    }

    /// The live error map.
    pub const fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Sets a field's value.
    ///
    /// The update triggers a full derived recomputation pass, then rebuilds
    /// the edited field's error entry. Editing after a successful submit
    /// returns the session to `Active` (a new attempt).
    ///
    /// # Errors
    ///
    /// - [`FormError::UnknownField`] when the id is not in the bound schema
    ///   (or no schema is bound).
    /// - [`FormError::DerivedFieldImmutable`] when the field is derived.
    pub fn set_value(&mut self, field_id: &str, value: impl Into<Value>) -> FormResult<()> {
        let Some(schema) = &self.schema else {
            return Err(FormError::UnknownField(field_id.to_string()));
        };
        let Some(field) = schema.field(field_id) else {
            return Err(FormError::UnknownField(field_id.to_string()));
        };
        if field.is_derived() {
            return Err(FormError::DerivedFieldImmutable(field_id.to_string()));
        }

        let value = value.into();
        self.values.insert(field_id.to_string(), value.clone());
        evaluate_schema(schema, &mut self.values);

        self.errors
            .insert(field_id.to_string(), validate(&value, &field.validations));
        self.state = SessionState::Active;
        Ok(())
    }

    /// Runs a submit attempt: every field validates, and the error map is
    /// rebuilt to hold exactly the fields with violations.
    ///
    /// On success the session enters `Submitted` and the outcome carries a
    /// copy of the value map covering every field id. On failure (or when
    /// no schema is bound) the session is `Active` with the populated
    /// error map.
    pub fn submit_attempt(&mut self) -> SubmitOutcome {
        let Some(schema) = &self.schema else {
            return SubmitOutcome::Rejected;
        };
        self.state = SessionState::Validating;

        let mut errors = ErrorMap::new();
        for field in &schema.fields {
            let value = self.values.get(&field.id).cloned().unwrap_or(Value::Null);
            let field_errors = validate(&value, &field.validations);
            if !field_errors.is_empty() {
                errors.insert(field.id.clone(), field_errors);
            }
        }
        self.errors = errors;

        if self.errors.is_empty() {
            self.state = SessionState::Submitted;
            tracing::debug!(schema = %schema.id, "submit accepted");
            SubmitOutcome::Submitted(self.values.clone())
        } else {
            self.state = SessionState::Active;
            tracing::debug!(
                schema = %schema.id,
                failing_fields = self.errors.len(),
                "submit rejected"
            );
            SubmitOutcome::Rejected
        }
    }

    /// Builds the per-field render state, in schema order.
    pub fn field_states(&self) -> Vec<FieldState> {
        let Some(schema) = &self.schema else {
            return Vec::new();
        };
        schema
            .fields
            .iter()
            .map(|field| {
                let value = self.values.get(&field.id).cloned().unwrap_or(Value::Null);
                let errors = self.errors.get(&field.id).cloned().unwrap_or_default();
                FieldState::new(field, value, errors)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_schema::{DerivedSpec, Field, FieldType, ValidationRules};

    fn field_with_id(id: &str, field_type: FieldType, label: &str) -> Field {
        let mut field = Field::new(field_type, label);
        field.id = id.to_string();
        field
    }

    fn contact_schema() -> Schema {
        let mut schema = Schema::new("Contact");
        schema.fields.push(
            field_with_id("name", FieldType::Text, "Name")
                .validations(ValidationRules::new().required(true).min_length(2)),
        );
        schema.fields.push(
            field_with_id("email", FieldType::Text, "Email")
                .validations(ValidationRules::new().email(true)),
        );
        schema
            .fields
            .push(field_with_id("subscribe", FieldType::Checkbox, "Subscribe"));
        schema
    }

    fn derived_schema() -> Schema {
        let mut schema = Schema::new("Quote");
        schema
            .fields
            .push(field_with_id("a", FieldType::Number, "A"));
        schema
            .fields
            .push(field_with_id("b", FieldType::Number, "B"));
        schema.fields.push(
            field_with_id("total", FieldType::Number, "Total").derived(DerivedSpec::new(
                vec!["a".into(), "b".into()],
                "a + b",
            )),
        );
        schema
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = FormSession::new();
        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.schema().is_none());
        assert!(session.values().is_empty());
        assert!(session.field_states().is_empty());
    }

    #[test]
    fn test_bind_initializes_defaults() {
        let mut session = FormSession::new();
        session.bind(contact_schema());

        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.values()["name"], Value::String(String::new()));
        assert_eq!(session.values()["subscribe"], Value::Bool(false));
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_bind_runs_initial_derived_pass() {
        let mut schema = derived_schema();
        schema.fields[0] = schema.fields[0].clone().default_value("2");
        schema.fields[1] = schema.fields[1].clone().default_value("3");

        let session = FormSession::with_schema(schema);
        assert_eq!(session.values()["total"], Value::Number(5.0));
    }

    #[test]
    fn test_set_value_updates_and_validates() {
        let mut session = FormSession::with_schema(contact_schema());
        session.set_value("name", "A").unwrap();

        assert_eq!(session.values()["name"], Value::String("A".into()));
        assert_eq!(session.errors()["name"], vec!["Minimum length is 2"]);

        session.set_value("name", "Ada").unwrap();
        assert!(session.errors()["name"].is_empty());
    }

    #[test]
    fn test_set_value_unknown_field() {
        let mut session = FormSession::with_schema(contact_schema());
        let err = session.set_value("ghost", "x").unwrap_err();
        assert!(matches!(err, FormError::UnknownField(_)));
        // The session itself is unharmed.
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn test_set_value_without_schema_is_unknown_field() {
        let mut session = FormSession::new();
        let err = session.set_value("name", "x").unwrap_err();
        assert!(matches!(err, FormError::UnknownField(_)));
    }

    #[test]
    fn test_set_value_on_derived_field_is_rejected() {
        let mut session = FormSession::with_schema(derived_schema());
        let err = session.set_value("total", Value::Number(99.0)).unwrap_err();
        assert!(matches!(err, FormError::DerivedFieldImmutable(_)));
        // The derived value is untouched by the rejected write.
        assert_ne!(session.values()["total"], Value::Number(99.0));
    }

    #[test]
    fn test_set_value_recomputes_derived_fields() {
        let mut session = FormSession::with_schema(derived_schema());
        session.set_value("a", Value::Number(2.0)).unwrap();
        session.set_value("b", Value::Number(3.0)).unwrap();
        assert_eq!(session.values()["total"], Value::Number(5.0));

        session.set_value("a", Value::Number(10.0)).unwrap();
        assert_eq!(session.values()["total"], Value::Number(13.0));
    }

    #[test]
    fn test_submit_rejected_populates_error_map() {
        let mut session = FormSession::with_schema(contact_schema());
        session.set_value("email", "not-an-email").unwrap();

        let outcome = session.submit_attempt();
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(session.state(), SessionState::Active);
        // Only failing fields appear.
        assert_eq!(session.errors()["name"], vec!["This field is required"]);
        assert_eq!(session.errors()["email"], vec!["Invalid email format"]);
        assert!(!session.errors().contains_key("subscribe"));
    }

    #[test]
    fn test_submit_accepted_covers_every_field_once() {
        // Every field optional and defaulted.
        let mut schema = Schema::new("Prefs");
        schema
            .fields
            .push(field_with_id("color", FieldType::Text, "Color").default_value("blue"));
        schema
            .fields
            .push(field_with_id("ok", FieldType::Checkbox, "OK"));

        let mut session = FormSession::with_schema(schema);
        let outcome = session.submit_attempt();

        let SubmitOutcome::Submitted(payload) = outcome else {
            panic!("expected Submitted");
        };
        assert_eq!(session.state(), SessionState::Submitted);
        assert_eq!(payload.len(), 2);
        assert_eq!(payload["color"], Value::String("blue".into()));
        assert_eq!(payload["ok"], Value::Bool(false));
    }

    #[test]
    fn test_submit_failure_then_fix_then_submit() {
        let mut session = FormSession::with_schema(contact_schema());
        assert_eq!(session.submit_attempt(), SubmitOutcome::Rejected);

        session.set_value("name", "Ada").unwrap();
        let outcome = session.submit_attempt();
        assert!(matches!(outcome, SubmitOutcome::Submitted(_)));
    }

    #[test]
    fn test_edit_after_submit_returns_to_active() {
        let mut schema = Schema::new("S");
        schema
            .fields
            .push(field_with_id("x", FieldType::Text, "X"));
        let mut session = FormSession::with_schema(schema);

        assert!(matches!(
            session.submit_attempt(),
            SubmitOutcome::Submitted(_)
        ));
        assert_eq!(session.state(), SessionState::Submitted);

        session.set_value("x", "again").unwrap();
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn test_submit_without_schema_is_rejected() {
        let mut session = FormSession::new();
        assert_eq!(session.submit_attempt(), SubmitOutcome::Rejected);
        assert_eq!(session.state(), SessionState::Empty);
    }

    #[test]
    fn test_rebind_resets_state() {
        let mut session = FormSession::with_schema(contact_schema());
        session.set_value("name", "Ada").unwrap();
        assert!(!session.values()["name"].is_empty());

        session.bind(contact_schema());
        assert_eq!(session.values()["name"], Value::String(String::new()));
        assert!(session.errors().is_empty());
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn test_field_states_reflect_session() {
        let mut session = FormSession::with_schema(derived_schema());
        session.set_value("a", Value::Number(1.0)).unwrap();
        session.set_value("b", Value::Number(2.0)).unwrap();

        let states = session.field_states();
        assert_eq!(states.len(), 3);
        assert!(!states[0].disabled);
        assert!(states[2].disabled);
        assert_eq!(states[2].value, Value::Number(3.0));
    }
}
