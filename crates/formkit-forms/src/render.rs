//! Per-field render state, the boundary consumed by a rendering layer.
//!
//! The core never renders anything itself. For each field it exposes a
//! [`FieldState`] snapshot carrying the current value, validation errors,
//! and whether the control must be disabled (derived fields are never
//! directly editable). [`WidgetKind`] is a hint for choosing a control per
//! field type; the rendering layer owns the actual widgets.

use std::fmt;

use formkit_schema::{Field, FieldType, Value};

/// The default control for a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// A single-line text input.
    TextInput,
    /// A numeric input.
    NumberInput,
    /// A multi-line text area.
    Textarea,
    /// A dropdown.
    Select,
    /// A radio group.
    RadioSelect,
    /// A checkbox.
    CheckboxInput,
    /// A date input.
    DateInput,
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TextInput => "TextInput",
            Self::NumberInput => "NumberInput",
            Self::Textarea => "Textarea",
            Self::Select => "Select",
            Self::RadioSelect => "RadioSelect",
            Self::CheckboxInput => "CheckboxInput",
            Self::DateInput => "DateInput",
        };
        write!(f, "{name}")
    }
}

/// Returns the default widget for a field type.
pub const fn default_widget(field_type: FieldType) -> WidgetKind {
    match field_type {
        FieldType::Text => WidgetKind::TextInput,
        FieldType::Number => WidgetKind::NumberInput,
        FieldType::Textarea => WidgetKind::Textarea,
        FieldType::Select => WidgetKind::Select,
        FieldType::Radio => WidgetKind::RadioSelect,
        FieldType::Checkbox => WidgetKind::CheckboxInput,
        FieldType::Date => WidgetKind::DateInput,
    }
}

/// A snapshot of one field's render state.
///
/// `disabled` is `true` exactly when the field is derived; the rendering
/// layer must never allow direct edits to a disabled field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    /// The field id, for routing edits back to the session.
    pub field_id: String,
    /// Human-readable label.
    pub label: String,
    /// The suggested control.
    pub widget: WidgetKind,
    /// Choice options for select/radio/checkbox-group widgets.
    pub options: Vec<String>,
    /// Whether the field is marked required for display.
    pub required: bool,
    /// Whether the control must reject direct edits.
    pub disabled: bool,
    /// The current value.
    pub value: Value,
    /// Current validation messages, in rule order.
    pub errors: Vec<String>,
}

impl FieldState {
    /// Builds the render state for a field from its current session state.
    pub fn new(field: &Field, value: Value, errors: Vec<String>) -> Self {
        Self {
            field_id: field.id.clone(),
            label: field.label.clone(),
            widget: default_widget(field.field_type),
            options: field.options.clone(),
            required: field.required,
            disabled: field.is_derived(),
            value,
            errors,
        }
    }

    /// Returns `true` if this field currently has validation errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
