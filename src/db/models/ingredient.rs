// src/db/models/ingredient.rs

//! Ingredient model - named components, optionally owned by a recipe
//!
//! An ingredient with a NULL `recipe_id` is unowned. Owned ingredients are
//! removed together with their recipe.

use crate::error::Result;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::fmt;

/// An Ingredient row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: Option<i64>,
    pub name: String,
    pub recipe_id: Option<i64>,
}

impl Ingredient {
    /// Create a new, unowned Ingredient
    pub fn new(name: String) -> Self {
        Self {
            id: None,
            name,
            recipe_id: None,
        }
    }

    /// Create a new Ingredient owned by `recipe_id`
    pub fn owned_by(recipe_id: i64, name: String) -> Self {
        Self {
            id: None,
            name,
            recipe_id: Some(recipe_id),
        }
    }

    /// Insert this ingredient, or update it if it already has an id
    pub fn save(&mut self, conn: &Connection) -> Result<i64> {
        match self.id {
            Some(id) => {
                conn.execute(
                    "UPDATE ingredients SET name = ?1, recipe_id = ?2 WHERE id = ?3",
                    params![&self.name, &self.recipe_id, id],
                )?;
                Ok(id)
            }
            None => {
                conn.execute(
                    "INSERT INTO ingredients (name, recipe_id) VALUES (?1, ?2)",
                    params![&self.name, &self.recipe_id],
                )?;

                let id = conn.last_insert_rowid();
                self.id = Some(id);
                Ok(id)
            }
        }
    }

    /// Find an ingredient by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt =
            conn.prepare("SELECT id, name, recipe_id FROM ingredients WHERE id = ?1")?;

        let ingredient = stmt.query_row([id], Self::from_row).optional()?;
        Ok(ingredient)
    }

    /// Find all ingredients owned by a recipe, in insertion order
    pub fn find_by_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, recipe_id FROM ingredients WHERE recipe_id = ?1 ORDER BY id",
        )?;

        let ingredients = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    /// Find an ingredient by owning recipe and name
    pub fn find_by_recipe_and_name(
        conn: &Connection,
        recipe_id: i64,
        name: &str,
    ) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, recipe_id FROM ingredients
             WHERE recipe_id = ?1 AND name = ?2 ORDER BY id LIMIT 1",
        )?;

        let ingredient = stmt
            .query_row(params![recipe_id, name], Self::from_row)
            .optional()?;

        Ok(ingredient)
    }

    /// Return the recipe's ingredient with this name, creating it if missing
    pub fn get_or_create(conn: &Connection, recipe_id: i64, name: &str) -> Result<Self> {
        if let Some(existing) = Self::find_by_recipe_and_name(conn, recipe_id, name)? {
            return Ok(existing);
        }

        let mut ingredient = Self::owned_by(recipe_id, name.to_string());
        ingredient.save(conn)?;
        Ok(ingredient)
    }

    /// List every ingredient, owned or not, in id order
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT id, name, recipe_id FROM ingredients ORDER BY id")?;

        let ingredients = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    /// Distinct names of owned ingredients, sorted descending
    pub fn list_assigned_names(conn: &Connection) -> Result<Vec<String>> {
        let mut stmt = conn.prepare(
            "SELECT DISTINCT name FROM ingredients
             WHERE recipe_id IS NOT NULL ORDER BY name DESC",
        )?;

        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;

        Ok(names)
    }

    /// Delete an ingredient by ID
    ///
    /// Returns false when no ingredient had that ID.
    pub fn delete_by_id(conn: &Connection, id: i64) -> Result<bool> {
        let deleted = conn.execute("DELETE FROM ingredients WHERE id = ?1", [id])?;
        Ok(deleted > 0)
    }

    /// Delete all ingredients owned by a recipe, returning how many were removed
    pub fn delete_by_recipe(conn: &Connection, recipe_id: i64) -> Result<usize> {
        let deleted = conn.execute("DELETE FROM ingredients WHERE recipe_id = ?1", [recipe_id])?;
        Ok(deleted)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            recipe_id: row.get(2)?,
        })
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
