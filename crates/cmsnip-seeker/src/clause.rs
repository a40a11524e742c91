//! Clause types for query predicates.
//!
//! A [`Clause`] is a single filter predicate: a field name, an operator and
//! a comparison value.

use crate::value::Value;

/// Comparison operator for a query clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Op {
    /// Equal (exact match).
    Eq,
    /// String contains substring, ignoring case. This is the list search.
    IContains,
}

/// A single filter predicate.
#[derive(Debug, Clone)]
pub(crate) struct Clause {
    pub(crate) field: String,
    op: Op,
    value: ClauseValue,
}

impl Clause {
    /// Creates a new clause.
    ///
    /// Needles for [`Op::IContains`] are lowercased once here.
    pub(crate) fn new(field: impl Into<String>, op: Op, value: impl Into<ClauseValue>) -> Self {
        let value = match (op, value.into()) {
            (Op::IContains, ClauseValue::String(s)) => ClauseValue::String(s.to_lowercase()),
            (_, other) => other,
        };
        Clause {
            field: field.into(),
            op,
            value,
        }
    }

    /// Evaluates this clause against a field value.
    ///
    /// Type mismatches and missing fields never match.
    pub(crate) fn matches(&self, field_value: &Value<'_>) -> bool {
        match (&self.value, field_value) {
            (ClauseValue::String(pattern), Value::String(s)) => match self.op {
                Op::Eq => *s == pattern.as_str(),
                Op::IContains => s.to_lowercase().contains(pattern.as_str()),
            },
            (ClauseValue::Bool(clause), Value::Bool(field)) => {
                self.op == Op::Eq && field == clause
            }
            _ => false,
        }
    }
}

/// Owned value stored in a clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseValue {
    /// String value.
    String(String),
    /// Boolean value.
    Bool(bool),
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::String(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::String(s.to_string())
    }
}

impl From<bool> for ClauseValue {
    fn from(b: bool) -> Self {
        ClauseValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icontains_ignores_case() {
        let clause = Clause::new("name", Op::IContains, "WeLcOmE");
        assert!(clause.matches(&Value::String("Welcome email")));
        assert!(clause.matches(&Value::String("the WELCOME note")));
        assert!(!clause.matches(&Value::String("Goodbye")));
    }

    #[test]
    fn eq_is_exact() {
        let clause = Clause::new("templateID", Op::Eq, "t1");
        assert!(clause.matches(&Value::String("t1")));
        assert!(!clause.matches(&Value::String("T1")));
        assert!(!clause.matches(&Value::String("t10")));
    }

    #[test]
    fn empty_needle_matches_any_string() {
        let clause = Clause::new("name", Op::IContains, "");
        assert!(clause.matches(&Value::String("")));
        assert!(clause.matches(&Value::String("anything")));
    }

    #[test]
    fn missing_field_never_matches() {
        let clause = Clause::new("templateID", Op::Eq, "t1");
        assert!(!clause.matches(&Value::None));
    }

    #[test]
    fn type_mismatch_never_matches() {
        let clause = Clause::new("active", Op::Eq, true);
        assert!(!clause.matches(&Value::String("true")));
    }

    #[test]
    fn bool_clause() {
        assert!(Clause::new("active", Op::Eq, true).matches(&Value::Bool(true)));
        assert!(!Clause::new("active", Op::Eq, true).matches(&Value::Bool(false)));
        assert!(!Clause::new("active", Op::IContains, true).matches(&Value::Bool(true)));
    }
}
