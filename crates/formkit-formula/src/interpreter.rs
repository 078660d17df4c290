//! Interpreter for the formula language.
//!
//! Evaluates an [`Expr`] against an environment binding identifiers to
//! parent field values. Evaluation is pure: the interpreter holds no
//! mutable state and touches nothing outside the environment it was given.

use std::collections::HashMap;

use formkit_core::{FormError, FormResult};
use formkit_schema::Value;

use crate::ast::{BinaryOp, Expr, UnaryOp};

/// Evaluates formula expressions against a fixed identifier environment.
pub struct Interpreter {
    env: HashMap<String, Value>,
}

impl Interpreter {
    /// Creates an interpreter with the given identifier bindings.
    pub fn new(env: HashMap<String, Value>) -> Self {
        Self { env }
    }

    /// Evaluates an expression.
    ///
    /// # Errors
    ///
    /// Returns a `Formula` error for unknown identifiers or functions and
    /// for type mismatches (e.g. subtracting strings, dividing by zero).
    pub fn evaluate(&self, expr: &Expr) -> FormResult<Value> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Identifier(name) => self.lookup(name),
            Expr::Unary { op, expr } => self.unary(*op, expr),
            Expr::Binary { left, op, right } => self.binary(left, *op, right),
            Expr::Call { name, args } => self.call(name, args),
        }
    }

    fn lookup(&self, name: &str) -> FormResult<Value> {
        self.env
            .get(name)
            .cloned()
            .ok_or_else(|| FormError::Formula(format!("unknown identifier '{name}'")))
    }

    fn unary(&self, op: UnaryOp, expr: &Expr) -> FormResult<Value> {
        let value = self.evaluate(expr)?;
        match op {
            UnaryOp::Negate => match value {
                Value::Number(n) => Ok(Value::Number(-n)),
                other => Err(FormError::Formula(format!(
                    "cannot negate non-numeric value '{other}'"
                ))),
            },
            UnaryOp::Not => match value {
                Value::Bool(b) => Ok(Value::Bool(!b)),
                other => Err(FormError::Formula(format!(
                    "cannot apply '!' to non-boolean value '{other}'"
                ))),
            },
        }
    }

    fn binary(&self, left: &Expr, op: BinaryOp, right: &Expr) -> FormResult<Value> {
        let l = self.evaluate(left)?;
        let r = self.evaluate(right)?;
        match op {
            BinaryOp::Add => add(&l, &r),
            BinaryOp::Subtract => numeric(op, &l, &r, |a, b| Ok(a - b)),
            BinaryOp::Multiply => numeric(op, &l, &r, |a, b| Ok(a * b)),
            BinaryOp::Divide => numeric(op, &l, &r, |a, b| {
                if b == 0.0 {
                    Err(FormError::Formula("division by zero".to_string()))
                } else {
                    Ok(a / b)
                }
            }),
            BinaryOp::Power => numeric(op, &l, &r, |a, b| Ok(a.powf(b))),
            BinaryOp::Equal => Ok(Value::Bool(l == r)),
            BinaryOp::NotEqual => Ok(Value::Bool(l != r)),
            BinaryOp::LessThan => compare(op, &l, &r, |o| o == std::cmp::Ordering::Less),
            BinaryOp::LessThanOrEqual => {
                compare(op, &l, &r, |o| o != std::cmp::Ordering::Greater)
            }
            BinaryOp::GreaterThan => compare(op, &l, &r, |o| o == std::cmp::Ordering::Greater),
            BinaryOp::GreaterThanOrEqual => {
                compare(op, &l, &r, |o| o != std::cmp::Ordering::Less)
            }
            BinaryOp::And => logical(op, &l, &r, |a, b| a && b),
            BinaryOp::Or => logical(op, &l, &r, |a, b| a || b),
        }
    }

    fn call(&self, name: &str, args: &[Expr]) -> FormResult<Value> {
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.evaluate(arg)?);
        }
        builtin(name, &values)
    }
}

/// Addition doubles as concatenation. Numeric operands add; string
/// operands that both parse as numbers add numerically, otherwise
/// concatenate; a number and a string add when the string parses.
fn add(left: &Value, right: &Value) -> FormResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::String(a), Value::String(b)) => {
            if let (Ok(na), Ok(nb)) = (a.parse::<f64>(), b.parse::<f64>()) {
                Ok(Value::Number(na + nb))
            } else {
                Ok(Value::String(format!("{a}{b}")))
            }
        }
        (Value::Number(a), Value::String(b)) => b.parse::<f64>().map(|nb| Value::Number(a + nb)).map_err(|_| {
            FormError::Formula(format!("cannot add number and non-numeric string '{b}'"))
        }),
        (Value::String(a), Value::Number(b)) => a.parse::<f64>().map(|na| Value::Number(na + b)).map_err(|_| {
            FormError::Formula(format!("cannot add non-numeric string '{a}' and number"))
        }),
        (l, r) => Err(FormError::Formula(format!(
            "cannot add '{l}' and '{r}'"
        ))),
    }
}

fn numeric(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    apply: impl FnOnce(f64, f64) -> FormResult<f64>,
) -> FormResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => apply(*a, *b).map(Value::Number),
        (l, r) => Err(FormError::Formula(format!(
            "'{op}' requires numeric operands, got '{l}' and '{r}'"
        ))),
    }
}

fn compare(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    accept: impl FnOnce(std::cmp::Ordering) -> bool,
) -> FormResult<Value> {
    let ordering = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    };
    ordering.map(|o| Value::Bool(accept(o))).ok_or_else(|| {
        FormError::Formula(format!(
            "'{op}' cannot compare '{left}' and '{right}'"
        ))
    })
}

fn logical(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    apply: impl FnOnce(bool, bool) -> bool,
) -> FormResult<Value> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(apply(*a, *b))),
        (l, r) => Err(FormError::Formula(format!(
            "'{op}' requires boolean operands, got '{l}' and '{r}'"
        ))),
    }
}

/// Dispatches a builtin function call.
fn builtin(name: &str, args: &[Value]) -> FormResult<Value> {
    match name {
        "min" => fold_numbers(name, args, f64::min),
        "max" => fold_numbers(name, args, f64::max),
        "abs" => single_number(name, args).map(|n| Value::Number(n.abs())),
        "round" => single_number(name, args).map(|n| Value::Number(n.round())),
        "len" => match args {
            [Value::String(s)] => Ok(Value::Number(s.chars().count() as f64)),
            [Value::List(items)] => Ok(Value::Number(items.len() as f64)),
            _ => Err(FormError::Formula(
                "len() takes one string or list argument".to_string(),
            )),
        },
        _ => Err(FormError::Formula(format!("unknown function '{name}'"))),
    }
}

fn fold_numbers(name: &str, args: &[Value], apply: impl Fn(f64, f64) -> f64) -> FormResult<Value> {
    let mut acc: Option<f64> = None;
    for arg in args {
        match arg {
            Value::Number(n) => {
                acc = Some(acc.map_or(*n, |a| apply(a, *n)));
            }
            other => {
                return Err(FormError::Formula(format!(
                    "{name}() requires numeric arguments, got '{other}'"
                )));
            }
        }
    }
    acc.map(Value::Number)
        .ok_or_else(|| FormError::Formula(format!("{name}() requires at least one argument")))
}

fn single_number(name: &str, args: &[Value]) -> FormResult<f64> {
    match args {
        [Value::Number(n)] => Ok(*n),
        _ => Err(FormError::Formula(format!(
            "{name}() takes one numeric argument"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn eval_with(env: &[(&str, Value)], source: &str) -> FormResult<Value> {
        let env = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect();
        Interpreter::new(env).evaluate(&parse(source)?)
    }

    fn eval(source: &str) -> FormResult<Value> {
        eval_with(&[], source)
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval("1 + 2 * 3").unwrap(), Value::Number(7.0));
        assert_eq!(eval("(1 + 2) * 3").unwrap(), Value::Number(9.0));
        assert_eq!(eval("10 / 4").unwrap(), Value::Number(2.5));
        assert_eq!(eval("2 ^ 10").unwrap(), Value::Number(1024.0));
        assert_eq!(eval("-3 + 1").unwrap(), Value::Number(-2.0));
    }

    #[test]
    fn test_division_by_zero_errors() {
        assert!(eval("1 / 0").is_err());
    }

    #[test]
    fn test_identifier_binding() {
        let result = eval_with(
            &[("a", Value::Number(2.0)), ("b", Value::Number(3.0))],
            "a + b",
        );
        assert_eq!(result.unwrap(), Value::Number(5.0));
    }

    #[test]
    fn test_unknown_identifier_errors() {
        let err = eval_with(&[("a", Value::Number(1.0))], "a + missing").unwrap_err();
        assert!(err.to_string().contains("unknown identifier"));
    }

    #[test]
    fn test_string_concatenation() {
        let result = eval_with(
            &[
                ("first", Value::from("Ada")),
                ("last", Value::from("Lovelace")),
            ],
            "first + ' ' + last",
        );
        assert_eq!(result.unwrap(), Value::String("Ada Lovelace".into()));
    }

    #[test]
    fn test_numeric_strings_add_numerically() {
        // Text inputs hold strings; "2" + "3" adds as numbers.
        let result = eval_with(
            &[("a", Value::from("2")), ("b", Value::from("3"))],
            "a + b",
        );
        assert_eq!(result.unwrap(), Value::Number(5.0));
    }

    #[test]
    fn test_number_plus_numeric_string() {
        let result = eval_with(&[("a", Value::from("4"))], "a + 1");
        assert_eq!(result.unwrap(), Value::Number(5.0));
    }

    #[test]
    fn test_number_plus_word_errors() {
        assert!(eval_with(&[("a", Value::from("four"))], "a + 1").is_err());
    }

    #[test]
    fn test_subtracting_strings_errors() {
        assert!(eval_with(&[("a", Value::from("x"))], "a - 1").is_err());
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(eval("1 < 2").unwrap(), Value::Bool(true));
        assert_eq!(eval("2 <= 2").unwrap(), Value::Bool(true));
        assert_eq!(eval("3 > 4").unwrap(), Value::Bool(false));
        assert_eq!(eval("'abc' < 'abd'").unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_equality_across_types_is_false_not_an_error() {
        assert_eq!(eval("1 == 'one'").unwrap(), Value::Bool(false));
        assert_eq!(eval("1 != 'one'").unwrap(), Value::Bool(true));
        assert_eq!(eval("null == null").unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_ordering_across_types_errors() {
        assert!(eval("1 < 'two'").is_err());
    }

    #[test]
    fn test_logic() {
        assert_eq!(eval("true && false").unwrap(), Value::Bool(false));
        assert_eq!(eval("true || false").unwrap(), Value::Bool(true));
        assert_eq!(eval("!false").unwrap(), Value::Bool(true));
        assert_eq!(eval("1 > 0 && 2 > 1").unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_logic_on_non_boolean_errors() {
        assert!(eval("1 && 2").is_err());
        assert!(eval("!1").is_err());
    }

    #[test]
    fn test_builtin_min_max() {
        assert_eq!(eval("min(5, 3)").unwrap(), Value::Number(3.0));
        assert_eq!(eval("max(5, 3, 8)").unwrap(), Value::Number(8.0));
        assert!(eval("min()").is_err());
        assert!(eval("min(1, 'a')").is_err());
    }

    #[test]
    fn test_builtin_abs_round() {
        assert_eq!(eval("abs(-4)").unwrap(), Value::Number(4.0));
        assert_eq!(eval("round(2.5)").unwrap(), Value::Number(3.0));
        assert!(eval("abs(1, 2)").is_err());
    }

    #[test]
    fn test_builtin_len() {
        assert_eq!(eval("len('abcd')").unwrap(), Value::Number(4.0));
        assert!(eval("len(5)").is_err());
    }

    #[test]
    fn test_unknown_function_errors() {
        let err = eval("explode(1)").unwrap_err();
        assert!(err.to_string().contains("unknown function"));
    }

    #[test]
    fn test_clamp_style_composition() {
        let result = eval_with(
            &[("weight", Value::Number(70.0)), ("height", Value::Number(1.75))],
            "min(max(weight / (height ^ 2), 0), 100)",
        );
        let Value::Number(n) = result.unwrap() else {
            panic!("expected number");
        };
        assert!((n - 22.857).abs() < 0.001);
    }
}
