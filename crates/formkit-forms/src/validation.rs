//! The validation rule engine.
//!
//! [`validate`] is a pure function from a value and a rule set to an
//! ordered list of violation messages. The order and short-circuit policy
//! are part of the contract: they determine which messages a user sees
//! and in what order:
//!
//! 1. `required` on an empty value emits `"This field is required"` and
//!    short-circuits everything else.
//! 2. Remaining rules apply only to string values, run independently, and
//!    accumulate: minimum length, maximum length, email format, and the
//!    password rule (which can emit two messages at once).
//!
//! A length bound of zero behaves as if the rule were unset. That is a
//! quirk inherited from the original configuration format (zero and
//! "absent" share a falsy representation there); it is preserved, not
//! fixed, and pinned by tests below.

use once_cell::sync::Lazy;
use regex::Regex;

use formkit_schema::{ValidationRules, Value};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid regex"));

/// Validates a value against a rule set, returning violation messages in
/// evaluation order. An empty vector means the value passes.
pub fn validate(value: &Value, rules: &ValidationRules) -> Vec<String> {
    let mut errors = Vec::new();

    if rules.required && value.is_empty() {
        errors.push("This field is required".to_string());
        return errors;
    }

    if let Value::String(s) = value {
        if let Some(min) = rules.min_length {
            if min > 0 && s.len() < min as usize {
                errors.push(format!("Minimum length is {min}"));
            }
        }
        if let Some(max) = rules.max_length {
            if max > 0 && s.len() > max as usize {
                errors.push(format!("Maximum length is {max}"));
            }
        }
        if rules.email && !EMAIL_RE.is_match(s) {
            errors.push("Invalid email format".to_string());
        }
        if rules.password_rule {
            if s.len() < 8 {
                errors.push("Password must be at least 8 characters".to_string());
            }
            if !s.chars().any(|c| c.is_ascii_digit()) {
                errors.push("Password must contain at least one number".to_string());
            }
        }
    }

    errors
}
