use thiserror::Error;

/// Errors that can occur while parsing a condition string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConditionParseError {
    #[error("condition string is empty")]
    Empty,

    #[error("condition does not start with a field name")]
    MissingField,

    #[error("no comparison operator found after the field name")]
    MissingOperator,

    #[error("threshold is not a plain non-negative number: {0}")]
    InvalidThreshold(String),
}

/// Comparison operators supported by the condition mini-language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Le,
    Ge,
    Lt,
    Gt,
    Eq,
    Ne,
}

/// A parsed single-field comparison predicate, e.g. `price <= 24000000`.
///
/// The grammar is a narrow closed set, not general SQL:
/// `<field> <operator> <number>` where the operator is one of
/// `<=, >=, <, >, =, !=` and the number is unsigned digits and dots.
/// Immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionExpr {
    pub op: CompareOp,
    pub threshold: f64,
}

impl ConditionExpr {
    /// Parse a condition string into an explicit predicate.
    ///
    /// Parsing is strict: the field name must be word characters, the
    /// threshold must consume the rest of the string and contain only
    /// ASCII digits and dots. Callers that want the fail-open behaviour
    /// of the search pipeline should go through [`satisfies`] instead.
    pub fn parse(input: &str) -> Result<Self, ConditionParseError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ConditionParseError::Empty);
        }

        // Leading field identifier (word characters). The field name is
        // not checked against the value being tested; the caller decides
        // which listing attribute the condition applies to.
        let ident_end = s
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(s.len());
        if ident_end == 0 {
            return Err(ConditionParseError::MissingField);
        }
        let rest = s[ident_end..].trim_start();

        // Two-character operators must be tried before their one-character
        // prefixes so "<=" is never read as "<" followed by "=...".
        const OPERATORS: [(&str, CompareOp); 6] = [
            ("<=", CompareOp::Le),
            (">=", CompareOp::Ge),
            ("!=", CompareOp::Ne),
            ("<", CompareOp::Lt),
            (">", CompareOp::Gt),
            ("=", CompareOp::Eq),
        ];

        let (op, after_op) = OPERATORS
            .iter()
            .find_map(|(token, op)| rest.strip_prefix(token).map(|r| (*op, r)))
            .ok_or(ConditionParseError::MissingOperator)?;

        let number = after_op.trim_start();
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(ConditionParseError::InvalidThreshold(number.to_string()));
        }
        let threshold: f64 = number
            .parse()
            .map_err(|_| ConditionParseError::InvalidThreshold(number.to_string()))?;

        Ok(Self { op, threshold })
    }

    /// Apply the comparison to a value.
    #[inline]
    pub fn evaluate(&self, value: f64) -> bool {
        match self.op {
            CompareOp::Le => value <= self.threshold,
            CompareOp::Ge => value >= self.threshold,
            CompareOp::Lt => value < self.threshold,
            CompareOp::Gt => value > self.threshold,
            CompareOp::Eq => value == self.threshold,
            CompareOp::Ne => value != self.threshold,
        }
    }
}

/// Fail-open evaluation of an optional condition string.
///
/// An absent, empty, or unparseable condition imposes no constraint and
/// returns true. The conditions originate from a natural-language
/// translation that may be imperfect, so a malformed predicate is ignored
/// rather than surfaced to the user. No parse failure escapes this
/// function.
#[inline]
pub fn satisfies(value: f64, condition: Option<&str>) -> bool {
    match condition {
        None => true,
        Some(raw) => match ConditionExpr::parse(raw) {
            Ok(expr) => expr.evaluate(value),
            Err(_) => true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_le() {
        let expr = ConditionExpr::parse("price <= 100").unwrap();
        assert_eq!(expr.op, CompareOp::Le);
        assert_eq!(expr.threshold, 100.0);
    }

    #[test]
    fn test_parse_without_spaces() {
        let expr = ConditionExpr::parse("age<=10").unwrap();
        assert_eq!(expr.op, CompareOp::Le);
        assert_eq!(expr.threshold, 10.0);
    }

    #[test]
    fn test_parse_all_operators() {
        let cases = [
            ("size <= 30", CompareOp::Le),
            ("size >= 30", CompareOp::Ge),
            ("size < 30", CompareOp::Lt),
            ("size > 30", CompareOp::Gt),
            ("size = 30", CompareOp::Eq),
            ("size != 30", CompareOp::Ne),
        ];
        for (input, op) in cases {
            let expr = ConditionExpr::parse(input).unwrap();
            assert_eq!(expr.op, op, "input: {}", input);
            assert_eq!(expr.threshold, 30.0);
        }
    }

    #[test]
    fn test_parse_decimal_threshold() {
        let expr = ConditionExpr::parse("size >= 29.5").unwrap();
        assert_eq!(expr.threshold, 29.5);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(ConditionExpr::parse(""), Err(ConditionParseError::Empty));
        assert_eq!(ConditionExpr::parse("   "), Err(ConditionParseError::Empty));
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        assert_eq!(
            ConditionExpr::parse("<= 100"),
            Err(ConditionParseError::MissingField)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_operator() {
        assert_eq!(
            ConditionExpr::parse("price ~~ 100"),
            Err(ConditionParseError::MissingOperator)
        );
    }

    #[test]
    fn test_parse_rejects_double_equals() {
        // "==" reads as "=" followed by a non-numeric remainder.
        assert!(matches!(
            ConditionExpr::parse("price == 100"),
            Err(ConditionParseError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_parse_rejects_negative_threshold() {
        assert!(matches!(
            ConditionExpr::parse("age <= -5"),
            Err(ConditionParseError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_parse_rejects_trailing_input() {
        assert!(matches!(
            ConditionExpr::parse("price <= 100 AND age <= 5"),
            Err(ConditionParseError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_number() {
        assert!(matches!(
            ConditionExpr::parse("price <= 1.2.3"),
            Err(ConditionParseError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_evaluate_boundary() {
        let expr = ConditionExpr::parse("price <= 100").unwrap();
        assert!(expr.evaluate(100.0));
        assert!(!expr.evaluate(101.0));
    }

    #[test]
    fn test_satisfies_absent_is_unconstrained() {
        assert!(satisfies(42.0, None));
        assert!(satisfies(42.0, Some("")));
    }

    #[test]
    fn test_satisfies_malformed_is_unconstrained() {
        assert!(satisfies(42.0, Some("price ~~ 100")));
        assert!(satisfies(42.0, Some("price == 100")));
        assert!(satisfies(42.0, Some("nonsense")));
    }

    #[test]
    fn test_satisfies_applies_valid_condition() {
        assert!(satisfies(100.0, Some("price <= 100")));
        assert!(!satisfies(101.0, Some("price <= 100")));
        assert!(satisfies(5.0, Some("age != 10")));
        assert!(!satisfies(10.0, Some("age != 10")));
    }
}
