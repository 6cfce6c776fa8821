// src/db/models.rs

//! Recipe model and its store operations
//!
//! The Recipe struct is both the database row mapping and the JSON
//! projection served by the HTTP layer: every stored attribute is serialized
//! verbatim, with null for absent optionals. The JSON-typed columns
//! (nutrients, ingredients, instructions) round-trip through
//! `serde_json::Value`.

use crate::error::Result;
use crate::search::SearchFilter;
use rusqlite::{Connection, Row, params, params_from_iter};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Column list shared by every SELECT, in `from_row` order
const COLUMNS: &str = "id, title, cuisine, rating, prep_time, cook_time, total_time, \
     description, serves, nutrients, continent, country_state, url, \
     ingredients, instructions, created_at, updated_at";

/// Default ordering for both endpoints: best-rated first, title as the
/// tie-breaker. SQLite sorts NULL ratings last under DESC.
const DEFAULT_ORDER: &str = "ORDER BY rating DESC, title ASC";

/// A single recipe record
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    pub id: Option<i64>,
    pub title: String,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    pub prep_time: Option<i64>,
    pub cook_time: Option<i64>,
    pub total_time: Option<i64>,
    pub description: Option<String>,
    pub serves: Option<String>,
    /// Nutrient name -> value map; values are strings like "389 kcal"
    pub nutrients: Option<JsonValue>,
    pub continent: Option<String>,
    pub country_state: Option<String>,
    pub url: Option<String>,
    pub ingredients: Option<JsonValue>,
    pub instructions: Option<JsonValue>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Recipe {
    /// Create a new Recipe with only a title set
    pub fn new(title: String) -> Self {
        Self {
            id: None,
            title,
            cuisine: None,
            rating: None,
            prep_time: None,
            cook_time: None,
            total_time: None,
            description: None,
            serves: None,
            nutrients: None,
            continent: None,
            country_state: None,
            url: None,
            ingredients: None,
            instructions: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Insert this recipe into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        let nutrients = json_text(&self.nutrients)?;
        let ingredients = json_text(&self.ingredients)?;
        let instructions = json_text(&self.instructions)?;

        conn.execute(
            "INSERT INTO recipes (title, cuisine, rating, prep_time, cook_time, total_time, \
             description, serves, nutrients, continent, country_state, url, ingredients, instructions)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                &self.title,
                &self.cuisine,
                self.rating,
                self.prep_time,
                self.cook_time,
                self.total_time,
                &self.description,
                &self.serves,
                nutrients,
                &self.continent,
                &self.country_state,
                &self.url,
                ingredients,
                instructions,
            ],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Count every recipe in the store
    pub fn count_all(conn: &Connection) -> Result<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Fetch one page of the full collection in the default ordering
    pub fn list_page(conn: &Connection, limit: i64, offset: i64) -> Result<Vec<Self>> {
        let sql =
            format!("SELECT {COLUMNS} FROM recipes {DEFAULT_ORDER} LIMIT ?1 OFFSET ?2");
        let mut stmt = conn.prepare(&sql)?;

        let recipes = stmt
            .query_map([limit, offset], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// Fetch every recipe matching `filter`, unpaginated, default ordering
    pub fn search(conn: &Connection, filter: &SearchFilter) -> Result<Vec<Self>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM recipes {} {DEFAULT_ORDER}",
            filter.where_sql()
        );
        let mut stmt = conn.prepare(&sql)?;

        let recipes = stmt
            .query_map(params_from_iter(filter.params()), Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// Convert a database row to a Recipe
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            cuisine: row.get(2)?,
            rating: row.get(3)?,
            prep_time: row.get(4)?,
            cook_time: row.get(5)?,
            total_time: row.get(6)?,
            description: row.get(7)?,
            serves: row.get(8)?,
            nutrients: json_column(row, 9)?,
            continent: row.get(10)?,
            country_state: row.get(11)?,
            url: row.get(12)?,
            ingredients: json_column(row, 13)?,
            instructions: json_column(row, 14)?,
            created_at: row.get(15)?,
            updated_at: row.get(16)?,
        })
    }
}

/// Serialize an optional JSON value to its TEXT column representation
fn json_text(value: &Option<JsonValue>) -> Result<Option<String>> {
    Ok(value.as_ref().map(serde_json::to_string).transpose()?)
}

/// Read a JSON-typed TEXT column back into a `serde_json::Value`
fn json_column(row: &Row, idx: usize) -> rusqlite::Result<Option<JsonValue>> {
    let text: Option<String> = row.get(idx)?;
    match text {
        Some(text) => serde_json::from_str(&text).map(Some).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        }),
        None => Ok(None),
    }
}
