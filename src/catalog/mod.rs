// src/catalog/mod.rs

//! Recipe catalog operations
//!
//! The functions here are the unit of work behind each API call. They take a
//! connection (normally a transaction opened by the caller) and return wire
//! records, so the HTTP layer only handles extraction and status codes.

pub mod mapper;
pub mod records;
pub mod validation;

pub use records::{IngredientInput, IngredientRecord, RecipeInput, RecipeRecord};
pub use validation::FieldErrors;

use crate::db::models::{Ingredient, Recipe, RecipeFilter};
use crate::error::{Error, Result};
use rusqlite::Connection;
use tracing::info;

/// List recipes, optionally restricted to a case-sensitive name prefix
///
/// An empty prefix is treated as no filter.
pub fn list_recipes(conn: &Connection, name_prefix: Option<&str>) -> Result<Vec<RecipeRecord>> {
    let filter = match name_prefix {
        Some(prefix) if !prefix.is_empty() => RecipeFilter::name_prefix(prefix),
        _ => RecipeFilter::default(),
    };

    Recipe::list_where(conn, &filter)?
        .iter()
        .map(|recipe| mapper::to_record(conn, recipe))
        .collect()
}

pub fn create_recipe(conn: &Connection, input: &RecipeInput) -> Result<RecipeRecord> {
    let record = mapper::create(conn, input)?;
    info!("Created recipe {} ({})", record.id, record.name);
    Ok(record)
}

pub fn retrieve_recipe(conn: &Connection, id: i64) -> Result<RecipeRecord> {
    mapper::load_record(conn, id)
}

/// Replace or patch a recipe; both go through the same update rules
pub fn modify_recipe(conn: &Connection, id: i64, input: &RecipeInput) -> Result<RecipeRecord> {
    let existing = Recipe::find_by_id(conn, id)?
        .ok_or_else(|| Error::NotFoundError(format!("Recipe {} not found", id)))?;
    let record = mapper::update(conn, existing, input)?;
    info!("Updated recipe {} ({})", record.id, record.name);
    Ok(record)
}

/// Delete a recipe and, through the foreign key cascade, its ingredients
pub fn delete_recipe(conn: &Connection, id: i64) -> Result<()> {
    if !Recipe::delete_by_id(conn, id)? {
        return Err(Error::NotFoundError(format!("Recipe {} not found", id)));
    }
    info!("Deleted recipe {}", id);
    Ok(())
}

/// List ingredients
///
/// With `assigned_only`, only owned ingredients are returned, sorted by name
/// descending with duplicate names collapsed.
pub fn list_ingredients(conn: &Connection, assigned_only: bool) -> Result<Vec<IngredientRecord>> {
    if assigned_only {
        let names = Ingredient::list_assigned_names(conn)?;
        return Ok(names
            .into_iter()
            .map(|name| IngredientRecord { name })
            .collect());
    }

    Ok(Ingredient::list_all(conn)?
        .iter()
        .map(IngredientRecord::from)
        .collect())
}

/// Create an unowned ingredient
pub fn create_ingredient(conn: &Connection, input: &IngredientInput) -> Result<IngredientRecord> {
    let name = validation::validate_new_ingredient(input)?;
    let mut ingredient = Ingredient::new(name);
    let id = ingredient.save(conn)?;
    info!("Created ingredient {} ({})", id, ingredient);
    Ok(IngredientRecord::from(&ingredient))
}

fn find_ingredient(conn: &Connection, id: i64) -> Result<Ingredient> {
    Ingredient::find_by_id(conn, id)?
        .ok_or_else(|| Error::NotFoundError(format!("Ingredient {} not found", id)))
}

pub fn retrieve_ingredient(conn: &Connection, id: i64) -> Result<IngredientRecord> {
    find_ingredient(conn, id).map(|ingredient| IngredientRecord::from(&ingredient))
}

/// Rename an ingredient; ownership is left as-is
pub fn modify_ingredient(
    conn: &Connection,
    id: i64,
    input: &IngredientInput,
) -> Result<IngredientRecord> {
    let mut ingredient = find_ingredient(conn, id)?;
    if let Some(name) = validation::validate_ingredient_changes(input)? {
        ingredient.name = name;
        ingredient.save(conn)?;
        info!("Renamed ingredient {} to {}", id, ingredient);
    }
    Ok(IngredientRecord::from(&ingredient))
}

pub fn delete_ingredient(conn: &Connection, id: i64) -> Result<()> {
    if !Ingredient::delete_by_id(conn, id)? {
        return Err(Error::NotFoundError(format!("Ingredient {} not found", id)));
    }
    info!("Deleted ingredient {}", id);
    Ok(())
}
