//! Declarative argument validation.
//!
//! A placeholder declares one or more overloads, each a list of typed,
//! optionally bounded positional arguments. The host validates raw arguments
//! against the schema before invoking the placeholder and passes along the
//! index of the overload that matched. The JSON shape is:
//!
//! ```json
//! { "overloads": [[{ "name": "slot", "type": "int", "minimum": 0, "maximum": 44 }]] }
//! ```

use crate::error::PlaceholderError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    /// Whole number.
    Int,
    /// Any finite number (integers included).
    Number,
    /// Free text; accepts any value in its rendered form.
    String,
    /// `true` or `false`.
    Boolean,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArgKind::Int => "int",
            ArgKind::Number => "number",
            ArgKind::String => "string",
            ArgKind::Boolean => "boolean",
        })
    }
}

/// A supplied argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// Whole number.
    Int(i64),
    /// Finite non-integral (or out of `i64` range) number.
    Number(f64),
    /// Text.
    Str(String),
    /// Boolean.
    Bool(bool),
}

impl ArgValue {
    /// Infer a value from raw token text: int, then finite number, then
    /// boolean, else text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return ArgValue::Int(i);
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return ArgValue::Number(n);
            }
        }
        match trimmed {
            "true" => ArgValue::Bool(true),
            "false" => ArgValue::Bool(false),
            _ => ArgValue::Str(raw.to_string()),
        }
    }

    /// Integer payload, if any.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArgValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric payload, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ArgValue::Int(i) => Some(*i as f64),
            ArgValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Int(i) => write!(f, "{i}"),
            ArgValue::Number(n) => write!(f, "{n}"),
            ArgValue::Str(s) => f.write_str(s),
            ArgValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Int(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Str(value.to_string())
    }
}

/// One positional argument of an overload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgSpec {
    /// Argument name, used in usage strings and errors.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub kind: ArgKind,
    /// Inclusive lower bound (numeric kinds only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Inclusive upper bound (numeric kinds only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
}

impl ArgSpec {
    /// Unbounded argument of the given kind.
    pub fn new(name: impl Into<String>, kind: ArgKind) -> Self {
        Self {
            name: name.into(),
            kind,
            minimum: None,
            maximum: None,
        }
    }

    /// Set inclusive bounds.
    pub fn with_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    /// Whether `value` satisfies this spec.
    pub fn accepts(&self, value: &ArgValue) -> bool {
        match self.kind {
            ArgKind::Int => value.as_int().is_some_and(|i| self.in_range(i as f64)),
            ArgKind::Number => value.as_f64().is_some_and(|n| self.in_range(n)),
            ArgKind::Boolean => matches!(value, ArgValue::Bool(_)),
            ArgKind::String => true,
        }
    }

    fn in_range(&self, n: f64) -> bool {
        self.minimum.map_or(true, |min| n >= min) && self.maximum.map_or(true, |max| n <= max)
    }

    fn usage(&self) -> String {
        match (self.minimum, self.maximum) {
            (Some(min), Some(max)) => format!("<{}:{} {}..={}>", self.name, self.kind, min, max),
            (Some(min), None) => format!("<{}:{} >={}>", self.name, self.kind, min),
            (None, Some(max)) => format!("<{}:{} <={}>", self.name, self.kind, max),
            (None, None) => format!("<{}:{}>", self.name, self.kind),
        }
    }
}

/// The set of argument shapes a placeholder accepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationSchema {
    /// Overloads in priority order; the first match wins.
    #[serde(default)]
    pub overloads: Vec<Vec<ArgSpec>>,
}

impl ValidationSchema {
    /// Build a schema from its overloads.
    pub fn new(overloads: Vec<Vec<ArgSpec>>) -> Self {
        Self { overloads }
    }

    /// Index of the first overload accepting `args`.
    pub fn matching_overload(&self, args: &[ArgValue]) -> Option<usize> {
        self.overloads.iter().position(|overload| {
            overload.len() == args.len()
                && overload.iter().zip(args).all(|(spec, arg)| spec.accepts(arg))
        })
    }

    /// Validate `args` for `placeholder`, returning the matched overload.
    ///
    /// A schema without overloads performs no validation and reports
    /// overload 0.
    pub fn validate(&self, placeholder: &str, args: &[ArgValue]) -> Result<usize, PlaceholderError> {
        if self.overloads.is_empty() {
            return Ok(0);
        }
        self.matching_overload(args)
            .ok_or_else(|| PlaceholderError::NoMatchingOverload {
                placeholder: placeholder.to_string(),
                count: args.len(),
                usage: self.usage(placeholder),
            })
    }

    /// Human-readable usage, one alternative per overload.
    pub fn usage(&self, placeholder: &str) -> String {
        if self.overloads.is_empty() {
            return format!("${placeholder}");
        }
        self.overloads
            .iter()
            .map(|overload| {
                let mut line = format!("${placeholder}");
                for spec in overload {
                    line.push(':');
                    line.push_str(&spec.usage());
                }
                line
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot_schema() -> ValidationSchema {
        ValidationSchema::new(vec![vec![
            ArgSpec::new("slot", ArgKind::Int).with_range(0.0, 44.0),
        ]])
    }

    #[test]
    fn parse_infers_kinds() {
        assert_eq!(ArgValue::parse("13"), ArgValue::Int(13));
        assert_eq!(ArgValue::parse(" -2 "), ArgValue::Int(-2));
        assert_eq!(ArgValue::parse("1.5"), ArgValue::Number(1.5));
        assert_eq!(ArgValue::parse("true"), ArgValue::Bool(true));
        assert_eq!(ArgValue::parse("inf"), ArgValue::Str("inf".into()));
        assert_eq!(ArgValue::parse("helmet"), ArgValue::Str("helmet".into()));
    }

    #[test]
    fn int_bounds_are_inclusive() {
        let schema = slot_schema();
        assert_eq!(schema.matching_overload(&[ArgValue::Int(0)]), Some(0));
        assert_eq!(schema.matching_overload(&[ArgValue::Int(44)]), Some(0));
        assert_eq!(schema.matching_overload(&[ArgValue::Int(45)]), None);
        assert_eq!(schema.matching_overload(&[ArgValue::Int(-1)]), None);
    }

    #[test]
    fn int_rejects_other_kinds_and_arity() {
        let schema = slot_schema();
        assert_eq!(schema.matching_overload(&[ArgValue::Number(1.5)]), None);
        assert_eq!(schema.matching_overload(&["abc".into()]), None);
        assert_eq!(schema.matching_overload(&[]), None);
        assert_eq!(schema.matching_overload(&[ArgValue::Int(1), ArgValue::Int(2)]), None);
    }

    #[test]
    fn first_matching_overload_wins() {
        let schema = ValidationSchema::new(vec![
            vec![ArgSpec::new("slot", ArgKind::Int).with_range(0.0, 44.0)],
            vec![ArgSpec::new("name", ArgKind::String)],
        ]);
        assert_eq!(schema.matching_overload(&[ArgValue::Int(3)]), Some(0));
        assert_eq!(schema.matching_overload(&[ArgValue::Int(99)]), Some(1));
        assert_eq!(schema.matching_overload(&["offhand".into()]), Some(1));
    }

    #[test]
    fn number_accepts_ints() {
        let spec = ArgSpec::new("ratio", ArgKind::Number).with_range(0.0, 1.0);
        assert!(spec.accepts(&ArgValue::Int(1)));
        assert!(spec.accepts(&ArgValue::Number(0.25)));
        assert!(!spec.accepts(&ArgValue::Number(1.5)));
        assert!(!spec.accepts(&ArgValue::Bool(true)));
    }

    #[test]
    fn validate_reports_usage() {
        let err = slot_schema().validate("playerinv", &[ArgValue::Int(45)]).unwrap_err();
        assert_eq!(
            err,
            PlaceholderError::NoMatchingOverload {
                placeholder: "playerinv".into(),
                count: 1,
                usage: "$playerinv:<slot:int 0..=44>".into(),
            }
        );
    }

    #[test]
    fn empty_schema_skips_validation() {
        let schema = ValidationSchema::default();
        assert_eq!(schema.validate("anything", &["x".into(), ArgValue::Int(3)]), Ok(0));
    }

    #[test]
    fn deserializes_declarative_form() {
        let json = r#"{ "overloads": [[{ "name": "slot", "type": "int", "minimum": 0, "maximum": 44 }]] }"#;
        let schema: ValidationSchema = serde_json::from_str(json).unwrap();
        assert_eq!(schema, slot_schema());
    }
}
