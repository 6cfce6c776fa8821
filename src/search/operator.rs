// src/search/operator.rs

//! Relational operator parsing for search parameters

/// Comparison operator extracted from a query-parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Le,
    Ge,
    Lt,
    Gt,
    Eq,
}

impl CmpOp {
    /// SQL comparison token for this operator
    pub fn sql(self) -> &'static str {
        match self {
            CmpOp::Le => "<=",
            CmpOp::Ge => ">=",
            CmpOp::Lt => "<",
            CmpOp::Gt => ">",
            CmpOp::Eq => "=",
        }
    }
}

/// Split a raw parameter value into its leading comparison operator and the
/// remaining trimmed value.
///
/// `"<=400"` yields `(Le, "400")`; a value with no operator prefix defaults
/// to equality, so `"4.5"` yields `(Eq, "4.5")`. Never fails: whatever
/// follows the operator is returned as-is and validated downstream.
pub fn parse_operator_value(raw: &str) -> (CmpOp, &str) {
    let trimmed = raw.trim();

    // Two-character tokens first so "<=" is not read as "<" followed by "="
    for (token, op) in [
        ("<=", CmpOp::Le),
        (">=", CmpOp::Ge),
        ("<", CmpOp::Lt),
        (">", CmpOp::Gt),
        ("=", CmpOp::Eq),
    ] {
        if let Some(rest) = trimmed.strip_prefix(token) {
            return (op, rest.trim());
        }
    }

    (CmpOp::Eq, trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_char_operators() {
        assert_eq!(parse_operator_value("<=400"), (CmpOp::Le, "400"));
        assert_eq!(parse_operator_value(">=4.5"), (CmpOp::Ge, "4.5"));
    }

    #[test]
    fn test_single_char_operators() {
        assert_eq!(parse_operator_value("<400"), (CmpOp::Lt, "400"));
        assert_eq!(parse_operator_value(">30"), (CmpOp::Gt, "30"));
        assert_eq!(parse_operator_value("=300"), (CmpOp::Eq, "300"));
    }

    #[test]
    fn test_no_operator_defaults_to_eq() {
        assert_eq!(parse_operator_value("4.5"), (CmpOp::Eq, "4.5"));
        assert_eq!(parse_operator_value("400 kcal"), (CmpOp::Eq, "400 kcal"));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(parse_operator_value("  <= 400  "), (CmpOp::Le, "400"));
        assert_eq!(parse_operator_value("  60 "), (CmpOp::Eq, "60"));
    }

    #[test]
    fn test_unparseable_value_is_passed_through() {
        // Garbage after the operator is not this layer's concern
        assert_eq!(
            parse_operator_value(">=notanumber"),
            (CmpOp::Ge, "notanumber")
        );
    }
}
