// src/lib.rs

//! Larder Recipe Catalog
//!
//! Read-only HTTP API over a single recipe dataset:
//! - Paginated listing endpoint with explicit total-count reporting
//! - Multi-field search with relational operators on numeric fields
//!   (`<=400`, `>=4.5`) and substring matching on text fields
//! - Nested numeric filtering inside the semi-structured nutrients column
//!   (calories stored as `"389 kcal"`)
//!
//! # Architecture
//!
//! - Database-first: all records in SQLite, populated by a one-shot loader
//! - Stateless reads: one connection per request, no shared mutable state
//! - Lenient filters: malformed numeric filter values are dropped, never
//!   rejected with an error

pub mod db;
mod error;
pub mod ingest;
pub mod search;
pub mod server;

pub use error::{Error, Result};
pub use search::{CmpOp, SearchFilter, SearchParams, parse_operator_value};
