//! Form field definitions.
//!
//! Each [`Field`] describes a single form field: its type, label,
//! validation rules, choice options, and an optional [`DerivedSpec`] that
//! makes its value a formula over other fields. Fields are immutable
//! values: the builder-style setters consume `self` and return an updated
//! copy, so editors hold a working copy and propagate whole new values
//! rather than mutating in place.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// The type of a form field, controlling which widget renders it and how
/// its default value is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// A single-line text input.
    Text,
    /// A numeric input.
    Number,
    /// A multi-line text area.
    Textarea,
    /// A dropdown of options.
    Select,
    /// A radio group of options.
    Radio,
    /// A checkbox.
    Checkbox,
    /// A date input.
    Date,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
        };
        write!(f, "{name}")
    }
}

/// The constraint set attached to a field. Absence of a rule means
/// "not enforced".
///
/// A length bound of `Some(0)` also behaves as "not enforced"; the rule
/// engine treats zero as unset. No ordering between `min_length` and
/// `max_length` is enforced here; `min > max` is a legal (vacuously
/// failing) configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationRules {
    /// Whether a non-empty value is required.
    pub required: bool,
    /// Minimum string length.
    pub min_length: Option<u32>,
    /// Maximum string length.
    pub max_length: Option<u32>,
    /// Whether the value must look like an email address.
    pub email: bool,
    /// Whether the password rule applies (minimum 8 characters, at least
    /// one digit).
    pub password_rule: bool,
}

impl ValidationRules {
    /// Creates an empty rule set (nothing enforced).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the required flag.
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the minimum length bound.
    pub const fn min_length(mut self, min: u32) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the maximum length bound.
    pub const fn max_length(mut self, max: u32) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Enables the email format rule.
    pub const fn email(mut self, email: bool) -> Self {
        self.email = email;
        self
    }

    /// Enables the password rule.
    pub const fn password_rule(mut self, password_rule: bool) -> Self {
        self.password_rule = password_rule;
        self
    }
}

/// Marks a field as derived: its value is always computed from the listed
/// parent fields by evaluating `formula`, never entered directly.
///
/// `parents` preserves selection order for editors but is semantically a
/// set; the formula binds each parent field id as a free identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedSpec {
    /// Ids of the fields this derivation reads.
    pub parents: Vec<String>,
    /// The formula text evaluated over the parent values.
    pub formula: String,
}

impl DerivedSpec {
    /// Creates a derived spec from parent ids and a formula.
    pub fn new(parents: Vec<String>, formula: impl Into<String>) -> Self {
        Self {
            parents,
            formula: formula.into(),
        }
    }
}

/// Complete definition of a single form field.
///
/// Construction requires only a type and a label; everything else defaults.
/// No validation happens at construction time: inconsistent configurations
/// (an options-type field with zero options, `min_length > max_length`) are
/// legal to build and simply render empty or fail vacuously.
///
/// The `required` flag duplicates `validations.required` as a display-level
/// mirror; the [`required`](Field::required) setter keeps the two in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Opaque unique id, stable for the lifetime of the field.
    pub id: String,
    /// The field type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Human-readable label.
    pub label: String,
    /// Display-level required marker (mirrors `validations.required`).
    #[serde(default)]
    pub required: bool,
    /// Default value used to initialize a session: boolean for checkbox,
    /// string otherwise.
    #[serde(default)]
    pub default_value: Value,
    /// Choice options; meaningful for select/radio/checkbox-group types.
    #[serde(default)]
    pub options: Vec<String>,
    /// The validation rule set.
    #[serde(default)]
    pub validations: ValidationRules,
    /// Present when the field's value is computed from other fields.
    #[serde(default)]
    pub derived: Option<DerivedSpec>,
}

impl Field {
    /// Creates a new field with a fresh id and type-appropriate defaults.
    pub fn new(field_type: FieldType, label: impl Into<String>) -> Self {
        let default_value = match field_type {
            FieldType::Checkbox => Value::Bool(false),
            _ => Value::String(String::new()),
        };
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            field_type,
            label: label.into(),
            required: false,
            default_value,
            options: Vec::new(),
            validations: ValidationRules::default(),
            derived: None,
        }
    }

    /// Sets the required flag, keeping the display marker and the
    /// validation rule in sync.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self.validations.required = required;
        self
    }

    /// Sets the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the default value.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Replaces the choice options.
    pub fn options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    /// Appends one choice option.
    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    /// Replaces the validation rule set.
    pub fn validations(mut self, validations: ValidationRules) -> Self {
        self.validations = validations;
        self
    }

    /// Marks this field as derived from the given parents and formula.
    pub fn derived(mut self, derived: DerivedSpec) -> Self {
        self.derived = Some(derived);
        self
    }

    /// Clears the derivation, making the field user-entered again.
    pub fn not_derived(mut self) -> Self {
        self.derived = None;
        self
    }

    /// Returns `true` if this field's value is computed rather than
    /// entered.
    pub const fn is_derived(&self) -> bool {
        self.derived.is_some()
    }

    /// The value a fresh session starts this field with: the configured
    /// default, or the type-appropriate empty value (`false` for checkbox,
    /// `""` otherwise) when no default is set.
    pub fn initial_value(&self) -> Value {
        if self.default_value.is_null() {
            match self.field_type {
                FieldType::Checkbox => Value::Bool(false),
                _ => Value::String(String::new()),
            }
        } else {
            self.default_value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_defaults() {
        let field = Field::new(FieldType::Text, "Name");
        assert_eq!(field.field_type, FieldType::Text);
        assert_eq!(field.label, "Name");
        assert!(!field.required);
        assert_eq!(field.default_value, Value::String(String::new()));
        assert!(field.options.is_empty());
        assert_eq!(field.validations, ValidationRules::default());
        assert!(field.derived.is_none());
        assert!(!field.id.is_empty());
    }

    #[test]
    fn test_new_checkbox_defaults_to_false() {
        let field = Field::new(FieldType::Checkbox, "Subscribe");
        assert_eq!(field.default_value, Value::Bool(false));
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = Field::new(FieldType::Text, "a");
        let b = Field::new(FieldType::Text, "b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_required_syncs_validations() {
        let field = Field::new(FieldType::Text, "Name").required(true);
        assert!(field.required);
        assert!(field.validations.required);

        let field = field.required(false);
        assert!(!field.required);
        assert!(!field.validations.required);
    }

    #[test]
    fn test_builder_chain() {
        let field = Field::new(FieldType::Select, "Color")
            .option("Red")
            .option("Blue")
            .validations(ValidationRules::new().required(true))
            .default_value("Red");
        assert_eq!(field.options, vec!["Red", "Blue"]);
        assert!(field.validations.required);
        assert_eq!(field.default_value, Value::String("Red".into()));
    }

    #[test]
    fn test_builder_returns_new_value() {
        let original = Field::new(FieldType::Text, "Name");
        let updated = original.clone().label("Full name");
        assert_eq!(original.label, "Name");
        assert_eq!(updated.label, "Full name");
        assert_eq!(original.id, updated.id);
    }

    #[test]
    fn test_derived_round_trip() {
        let field = Field::new(FieldType::Number, "Total")
            .derived(DerivedSpec::new(vec!["a".into(), "b".into()], "a + b"));
        assert!(field.is_derived());
        let field = field.not_derived();
        assert!(!field.is_derived());
    }

    #[test]
    fn test_options_field_with_zero_options_is_legal() {
        let field = Field::new(FieldType::Select, "Choice");
        assert!(field.options.is_empty());
    }

    #[test]
    fn test_min_greater_than_max_is_legal() {
        let rules = ValidationRules::new().min_length(10).max_length(2);
        assert_eq!(rules.min_length, Some(10));
        assert_eq!(rules.max_length, Some(2));
    }

    #[test]
    fn test_initial_value() {
        let text = Field::new(FieldType::Text, "Name");
        assert_eq!(text.initial_value(), Value::String(String::new()));

        let checkbox = Field::new(FieldType::Checkbox, "OK");
        assert_eq!(checkbox.initial_value(), Value::Bool(false));

        let with_default = Field::new(FieldType::Text, "City").default_value("Paris");
        assert_eq!(with_default.initial_value(), Value::String("Paris".into()));

        // A null default (e.g. from deserialized JSON) resolves to the
        // type-appropriate empty value.
        let mut nulled = Field::new(FieldType::Checkbox, "OK");
        nulled.default_value = Value::Null;
        assert_eq!(nulled.initial_value(), Value::Bool(false));
    }

    #[test]
    fn test_field_type_serde_lowercase() {
        let json = serde_json::to_string(&FieldType::Textarea).unwrap();
        assert_eq!(json, "\"textarea\"");
        let back: FieldType = serde_json::from_str("\"radio\"").unwrap();
        assert_eq!(back, FieldType::Radio);
    }

    #[test]
    fn test_field_serde_camel_case() {
        let field = Field::new(FieldType::Text, "Name")
            .validations(ValidationRules::new().min_length(2));
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "text");
        assert!(json.get("defaultValue").is_some());
        assert_eq!(json["validations"]["minLength"], 2);
    }

    #[test]
    fn test_field_serde_round_trip_preserves_derived_absence() {
        let plain = Field::new(FieldType::Text, "Name");
        let json = serde_json::to_string(&plain).unwrap();
        let back: Field = serde_json::from_str(&json).unwrap();
        assert!(back.derived.is_none());

        let derived = Field::new(FieldType::Number, "Sum")
            .derived(DerivedSpec::new(vec!["a".into()], "a * 2"));
        let json = serde_json::to_string(&derived).unwrap();
        let back: Field = serde_json::from_str(&json).unwrap();
        assert_eq!(back.derived, derived.derived);
    }

    #[test]
    fn test_field_deserializes_with_minimal_json() {
        let back: Field = serde_json::from_str(
            r#"{"id":"f1","type":"text","label":"Name"}"#,
        )
        .unwrap();
        assert_eq!(back.id, "f1");
        assert!(!back.required);
        assert!(back.options.is_empty());
        assert!(back.derived.is_none());
    }

    #[test]
    fn test_validation_rules_accept_null_bounds() {
        let rules: ValidationRules =
            serde_json::from_str(r#"{"minLength":null,"maxLength":5}"#).unwrap();
        assert_eq!(rules.min_length, None);
        assert_eq!(rules.max_length, Some(5));
    }
}
