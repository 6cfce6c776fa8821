// src/ingest.rs

//! Bulk ingestion of recipes from a JSON source file
//!
//! One-shot batch job that populates the store. The upstream dataset is
//! messy: numeric fields may be missing, null, NaN-ish, or strings, and a
//! few keys carry odd casing (including a known `Contient` typo for the
//! continent field). Cleaning rules:
//!
//! - entries without a non-empty title are skipped
//! - numeric fields that do not coerce to a finite number become null
//! - integer fields truncate fractional input
//!
//! The whole load runs inside a single transaction.

use crate::db::{self, Recipe};
use crate::error::{Error, Result};
use rusqlite::Connection;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::path::Path;
use tracing::{info, warn};

/// Counts reported by a completed load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub loaded: usize,
    pub skipped: usize,
}

/// A recipe entry as it appears in the source file, before cleaning.
/// Numeric fields come in as raw JSON values so that strings and other
/// junk can be coerced instead of failing the whole entry.
#[derive(Debug, Deserialize)]
struct RawRecipe {
    title: Option<String>,
    cuisine: Option<String>,
    rating: Option<JsonValue>,
    prep_time: Option<JsonValue>,
    cook_time: Option<JsonValue>,
    total_time: Option<JsonValue>,
    description: Option<String>,
    serves: Option<String>,
    nutrients: Option<JsonValue>,
    // Key-naming typo preserved by the upstream dataset
    #[serde(rename = "Contient")]
    continent: Option<String>,
    #[serde(rename = "Country_State")]
    country_state: Option<String>,
    #[serde(rename = "URL")]
    url: Option<String>,
    ingredients: Option<JsonValue>,
    instructions: Option<JsonValue>,
}

/// Load recipes from the JSON file at `path` into the store.
///
/// The file may be either an array of recipe objects or an object whose
/// values are recipe objects.
pub fn load_file(conn: &mut Connection, path: impl AsRef<Path>) -> Result<LoadStats> {
    let path = path.as_ref();
    info!("Loading recipes from {:?}", path);

    let text = std::fs::read_to_string(path)?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let entries: Vec<JsonValue> = match root {
        JsonValue::Array(entries) => entries,
        JsonValue::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
        _ => {
            return Err(Error::Other(
                "Recipe file must be a JSON array or object".to_string(),
            ));
        }
    };

    info!("Found {} recipes in source file", entries.len());

    let stats = db::transaction(conn, |tx| {
        let mut stats = LoadStats::default();

        for entry in entries {
            let raw: RawRecipe = match serde_json::from_value(entry) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("Skipping malformed entry: {}", e);
                    stats.skipped += 1;
                    continue;
                }
            };

            let Some(mut recipe) = clean(raw) else {
                stats.skipped += 1;
                continue;
            };

            recipe.insert(tx)?;
            stats.loaded += 1;

            if stats.loaded % 100 == 0 {
                info!("Loaded {} recipes...", stats.loaded);
            }
        }

        Ok(stats)
    })?;

    info!(
        "Successfully loaded {} recipes. Skipped {} invalid entries.",
        stats.loaded, stats.skipped
    );
    Ok(stats)
}

/// Turn a raw entry into a storable Recipe, or None if it has no title
fn clean(raw: RawRecipe) -> Option<Recipe> {
    let title = raw
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())?;

    let mut recipe = Recipe::new(title);
    recipe.cuisine = raw.cuisine;
    recipe.rating = clean_numeric(raw.rating.as_ref());
    recipe.prep_time = clean_int(raw.prep_time.as_ref());
    recipe.cook_time = clean_int(raw.cook_time.as_ref());
    recipe.total_time = clean_int(raw.total_time.as_ref());
    recipe.description = raw.description;
    recipe.serves = raw.serves;
    recipe.nutrients = raw.nutrients.filter(|v| !v.is_null());
    recipe.continent = raw.continent;
    recipe.country_state = raw.country_state;
    recipe.url = raw.url;
    recipe.ingredients = raw.ingredients.filter(|v| !v.is_null());
    recipe.instructions = raw.instructions.filter(|v| !v.is_null());
    Some(recipe)
}

/// Coerce a raw JSON value to a finite float, or null
fn clean_numeric(value: Option<&JsonValue>) -> Option<f64> {
    let number = match value? {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

/// Coerce a raw JSON value to an integer, truncating fractional input
fn clean_int(value: Option<&JsonValue>) -> Option<i64> {
    clean_numeric(value).map(|v| v.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn create_test_db() -> (TempDir, Connection) {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("larder.db");
        db::init(&db_path).unwrap();
        let conn = db::open(&db_path).unwrap();
        (dir, conn)
    }

    fn write_source(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_array_of_recipes() {
        let (_dir, mut conn) = create_test_db();
        let source = write_source(
            &json!([
                {
                    "title": "Apple Pie",
                    "cuisine": "American",
                    "rating": 4.8,
                    "total_time": 60,
                    "nutrients": { "calories": "350 kcal" },
                    "Contient": "North America",
                    "Country_State": "US",
                    "URL": "https://example.com/apple-pie"
                },
                { "title": "Cherry Pie", "rating": "4.2" }
            ])
            .to_string(),
        );

        let stats = load_file(&mut conn, source.path()).unwrap();
        assert_eq!(stats, LoadStats { loaded: 2, skipped: 0 });

        let recipes = Recipe::list_page(&conn, 10, 0).unwrap();
        assert_eq!(recipes[0].title, "Apple Pie");
        assert_eq!(recipes[0].continent.as_deref(), Some("North America"));
        assert_eq!(recipes[0].country_state.as_deref(), Some("US"));
        // String-typed rating coerces to a number
        assert_eq!(recipes[1].rating, Some(4.2));
    }

    #[test]
    fn test_load_skips_entries_without_title() {
        let (_dir, mut conn) = create_test_db();
        let source = write_source(
            &json!([
                { "title": "  ", "rating": 4.0 },
                { "rating": 4.0 },
                { "title": "Kept", "rating": 4.0 }
            ])
            .to_string(),
        );

        let stats = load_file(&mut conn, source.path()).unwrap();
        assert_eq!(stats, LoadStats { loaded: 1, skipped: 2 });
    }

    #[test]
    fn test_load_coerces_junk_numerics_to_null() {
        let (_dir, mut conn) = create_test_db();
        let source = write_source(
            &json!([
                {
                    "title": "Mystery Stew",
                    "rating": "unrated",
                    "prep_time": null,
                    "total_time": 45.9
                }
            ])
            .to_string(),
        );

        load_file(&mut conn, source.path()).unwrap();

        let recipes = Recipe::list_page(&conn, 10, 0).unwrap();
        assert_eq!(recipes[0].rating, None);
        assert_eq!(recipes[0].prep_time, None);
        // Fractional minutes truncate
        assert_eq!(recipes[0].total_time, Some(45));
    }

    #[test]
    fn test_load_object_keyed_source() {
        let (_dir, mut conn) = create_test_db();
        let source = write_source(
            &json!({
                "0": { "title": "Apple Pie" },
                "1": { "title": "Cherry Pie" }
            })
            .to_string(),
        );

        let stats = load_file(&mut conn, source.path()).unwrap();
        assert_eq!(stats.loaded, 2);
    }

    #[test]
    fn test_load_rejects_scalar_root() {
        let (_dir, mut conn) = create_test_db();
        let source = write_source("42");
        assert!(load_file(&mut conn, source.path()).is_err());
    }
}
