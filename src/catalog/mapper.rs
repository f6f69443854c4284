// src/catalog/mapper.rs

//! Transfer mapping between stored recipes and wire records
//!
//! Create and update deliberately treat nested ingredients differently:
//! - create gets-or-creates each ingredient by (recipe, name), so repeated
//!   names collapse and an empty list means "no ingredients"
//! - update deletes every owned ingredient and recreates the list verbatim,
//!   but only when the list is present and non-empty; otherwise the stored
//!   ingredients are kept

use crate::catalog::records::{RecipeInput, RecipeRecord};
use crate::catalog::validation::{validate_new_recipe, validate_recipe_changes};
use crate::db::models::{Ingredient, Recipe};
use crate::error::{Error, Result};
use rusqlite::Connection;
use tracing::debug;

/// Serialize a saved recipe together with its owned ingredients
pub fn to_record(conn: &Connection, recipe: &Recipe) -> Result<RecipeRecord> {
    let id = recipe
        .id
        .ok_or_else(|| Error::InternalError(format!("Recipe '{}' has not been saved", recipe)))?;
    let ingredients = recipe.ingredients(conn)?;
    Ok(RecipeRecord::from_parts(id, recipe, &ingredients))
}

/// Load a recipe by id and serialize it
pub fn load_record(conn: &Connection, id: i64) -> Result<RecipeRecord> {
    let recipe = Recipe::find_by_id(conn, id)?
        .ok_or_else(|| Error::NotFoundError(format!("Recipe {} not found", id)))?;
    to_record(conn, &recipe)
}

/// Create a recipe and its ingredients from an incoming record
pub fn create(conn: &Connection, input: &RecipeInput) -> Result<RecipeRecord> {
    let new_recipe = validate_new_recipe(input)?;

    let mut recipe = Recipe::new(new_recipe.name, new_recipe.description);
    let recipe_id = recipe.save(conn)?;

    for name in &new_recipe.ingredients {
        Ingredient::get_or_create(conn, recipe_id, name)?;
    }

    debug!(
        "Created recipe {} with {} submitted ingredients",
        recipe_id,
        new_recipe.ingredients.len()
    );
    load_record(conn, recipe_id)
}

/// Apply an incoming record to an existing recipe
pub fn update(conn: &Connection, mut existing: Recipe, input: &RecipeInput) -> Result<RecipeRecord> {
    let changes = validate_recipe_changes(input)?;

    if let Some(name) = changes.name {
        existing.name = name;
    }
    if let Some(description) = changes.description {
        existing.description = description;
    }
    let recipe_id = existing.save(conn)?;

    if let Some(names) = changes.ingredients {
        let removed = Ingredient::delete_by_recipe(conn, recipe_id)?;
        for name in names {
            Ingredient::owned_by(recipe_id, name).save(conn)?;
        }
        debug!("Replaced {} ingredients of recipe {}", removed, recipe_id);
    }

    load_record(conn, recipe_id)
}
