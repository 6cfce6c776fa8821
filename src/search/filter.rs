// src/search/filter.rs

//! Per-field predicate construction and AND-composition
//!
//! Each supplied parameter contributes at most one SQL clause with its bound
//! parameter. Numeric parameters that fail to parse are dropped silently:
//! the request still succeeds with the remaining filters applied. That
//! leniency is deliberate and pinned by tests.

use crate::search::operator::{CmpOp, parse_operator_value};
use rusqlite::types::Value;
use serde::Deserialize;

/// Query-time extraction of the numeric calories value from the nutrients
/// JSON column. The stored value is a string like "389 kcal"; the unit
/// suffix is stripped before the cast. NULL nutrients or a missing calories
/// key extract to NULL and never match.
const CALORIES_EXPR: &str =
    "CAST(REPLACE(json_extract(nutrients, '$.calories'), ' kcal', '') AS REAL)";

/// Raw search parameters as they arrive on the query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Substring match, case-insensitive
    pub title: Option<String>,
    /// Substring match, case-insensitive
    pub cuisine: Option<String>,
    /// `[op]value[kcal]`, compared against nutrients.calories
    pub calories: Option<String>,
    /// `[op]value`, integer minutes
    pub total_time: Option<String>,
    /// `[op]value`, floating point
    pub rating: Option<String>,
}

/// A composite filter over the recipes table: WHERE clauses joined with AND
/// plus their bound parameters, in clause order.
#[derive(Debug, Default)]
pub struct SearchFilter {
    clauses: Vec<String>,
    params: Vec<Value>,
}

impl SearchFilter {
    /// Build the composite filter from whichever parameters were supplied
    /// and parsed successfully.
    pub fn from_params(params: &SearchParams) -> Self {
        let mut filter = SearchFilter::default();

        if let Some(raw) = params.calories.as_deref() {
            let (op, value) = parse_operator_value(raw);
            if let Some(kcal) = parse_calories_value(value) {
                filter.push_clause(format!("{CALORIES_EXPR} {} ?", op.sql()), Value::Real(kcal));
            }
        }

        if let Some(title) = params.title.as_deref() {
            filter.push_substring("title", title);
        }

        if let Some(cuisine) = params.cuisine.as_deref() {
            filter.push_substring("cuisine", cuisine);
        }

        if let Some(raw) = params.total_time.as_deref() {
            let (op, value) = parse_operator_value(raw);
            // Fractional input truncates to whole minutes
            if let Some(minutes) = value.parse::<f64>().ok().filter(|v| v.is_finite()) {
                filter.push_clause(
                    format!("total_time {} ?", op.sql()),
                    Value::Integer(minutes.trunc() as i64),
                );
            }
        }

        if let Some(raw) = params.rating.as_deref() {
            let (op, value) = parse_operator_value(raw);
            if let Some(rating) = value.parse::<f64>().ok().filter(|v| v.is_finite()) {
                filter.push_clause(format!("rating {} ?", op.sql()), Value::Real(rating));
            }
        }

        filter
    }

    fn push_clause(&mut self, clause: String, param: Value) {
        self.clauses.push(clause);
        self.params.push(param);
    }

    /// Case-insensitive substring containment; SQLite LIKE is
    /// case-insensitive for ASCII. LIKE metacharacters in the needle are
    /// escaped so the match is against the literal parameter value.
    fn push_substring(&mut self, column: &str, needle: &str) {
        let escaped = needle
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        self.push_clause(
            format!("{column} LIKE ? ESCAPE '\\'"),
            Value::Text(format!("%{}%", escaped)),
        );
    }

    /// The WHERE fragment for this filter, or an empty string when no
    /// predicate survived parsing.
    pub fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.clauses.join(" AND "))
        }
    }

    /// Bound parameters in clause order
    pub fn params(&self) -> impl Iterator<Item = &Value> {
        self.params.iter()
    }

    /// Number of predicates that survived parsing
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// Strip a trailing `kcal` token (surrounding whitespace tolerated) from a
/// calories parameter and parse the remainder as a number.
fn parse_calories_value(value: &str) -> Option<f64> {
    let value = value.trim();
    let value = value
        .strip_suffix("kcal")
        .map(str::trim_end)
        .unwrap_or(value);
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
