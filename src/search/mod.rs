// src/search/mod.rs

//! Search query parsing and predicate construction
//!
//! Turns query-string parameters with embedded relational operators
//! (`<=400`, `>=4.5`) into a composite SQL filter:
//!
//! - `operator` - extracts the leading comparison token from a raw value
//! - `filter` - builds per-field predicates and ANDs them together
//!
//! Malformed numeric values never fail a request; the offending filter is
//! dropped and the remaining predicates still apply.

mod filter;
mod operator;

pub use filter::{SearchFilter, SearchParams};
pub use operator::{CmpOp, parse_operator_value};
