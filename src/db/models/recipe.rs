// src/db/models/recipe.rs

//! Recipe model - top-level dishes that own their ingredients

use crate::db::models::Ingredient;
use crate::error::Result;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::fmt;

/// A Recipe row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
}

/// Filter for [`Recipe::list_where`]
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Case-sensitive name prefix
    pub name_prefix: Option<String>,
}

impl RecipeFilter {
    /// Match recipes whose name starts with `prefix`
    pub fn name_prefix<S: Into<String>>(prefix: S) -> Self {
        Self {
            name_prefix: Some(prefix.into()),
        }
    }
}

impl Recipe {
    /// Create a new, unsaved Recipe
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: None,
            name,
            description,
        }
    }

    /// Insert this recipe, or update it if it already has an id
    pub fn save(&mut self, conn: &Connection) -> Result<i64> {
        match self.id {
            Some(id) => {
                conn.execute(
                    "UPDATE recipes SET name = ?1, description = ?2 WHERE id = ?3",
                    params![&self.name, &self.description, id],
                )?;
                Ok(id)
            }
            None => {
                conn.execute(
                    "INSERT INTO recipes (name, description) VALUES (?1, ?2)",
                    params![&self.name, &self.description],
                )?;

                let id = conn.last_insert_rowid();
                self.id = Some(id);
                Ok(id)
            }
        }
    }

    /// Find a recipe by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt =
            conn.prepare("SELECT id, name, description FROM recipes WHERE id = ?1")?;

        let recipe = stmt.query_row([id], Self::from_row).optional()?;
        Ok(recipe)
    }

    /// List recipes matching `filter`, in id order
    pub fn list_where(conn: &Connection, filter: &RecipeFilter) -> Result<Vec<Self>> {
        let Some(prefix) = filter.name_prefix.as_deref() else {
            let mut stmt =
                conn.prepare("SELECT id, name, description FROM recipes ORDER BY id")?;
            let recipes = stmt
                .query_map([], Self::from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            return Ok(recipes);
        };

        // substr() compares exactly, unlike LIKE which folds ASCII case
        let mut stmt = conn.prepare(
            "SELECT id, name, description FROM recipes
             WHERE substr(name, 1, length(?1)) = ?1 ORDER BY id",
        )?;
        let recipes = stmt
            .query_map([prefix], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// Delete a recipe by ID, cascading to its ingredients
    ///
    /// Returns false when no recipe had that ID.
    pub fn delete_by_id(conn: &Connection, id: i64) -> Result<bool> {
        let deleted = conn.execute("DELETE FROM recipes WHERE id = ?1", [id])?;
        Ok(deleted > 0)
    }

    /// Ingredients owned by this recipe, in insertion order
    pub fn ingredients(&self, conn: &Connection) -> Result<Vec<Ingredient>> {
        match self.id {
            Some(id) => Ingredient::find_by_recipe(conn, id),
            None => Ok(Vec::new()),
        }
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            description: row.get(2)?,
        })
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema;
    use tempfile::NamedTempFile;

    fn create_test_db() -> (NamedTempFile, Connection) {
        let temp_file = NamedTempFile::new().unwrap();
        let conn = Connection::open(temp_file.path()).unwrap();
        conn.execute("PRAGMA foreign_keys = ON", []).unwrap();
        schema::migrate(&conn).unwrap();
        (temp_file, conn)
    }

    fn insert(conn: &Connection, name: &str) -> Recipe {
        let mut recipe = Recipe::new(name.to_string(), String::new());
        recipe.save(conn).unwrap();
        recipe
    }

    #[test]
    fn test_recipe_display_is_name() {
        let recipe = Recipe::new(
            "Steak and Mushroom Sauce".to_string(),
            "Bla bla bla".to_string(),
        );
        assert_eq!(recipe.to_string(), "Steak and Mushroom Sauce");
    }

    #[test]
    fn test_recipe_crud() {
        let (_temp, conn) = create_test_db();

        let mut recipe = Recipe::new("Toast".to_string(), "Bread, heated".to_string());
        let id = recipe.save(&conn).unwrap();
        assert!(id > 0);
        assert_eq!(recipe.id, Some(id));

        let found = Recipe::find_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(found, recipe);

        recipe.description = "Bread, heated twice".to_string();
        assert_eq!(recipe.save(&conn).unwrap(), id);
        let updated = Recipe::find_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(updated.description, "Bread, heated twice");

        assert!(Recipe::delete_by_id(&conn, id).unwrap());
        assert!(Recipe::find_by_id(&conn, id).unwrap().is_none());
        assert!(!Recipe::delete_by_id(&conn, id).unwrap());
    }

    #[test]
    fn test_list_where_prefix_is_case_sensitive() {
        let (_temp, conn) = create_test_db();
        insert(&conn, "Toast");
        insert(&conn, "Chicken cacciatore");
        insert(&conn, "Chicken curry");
        insert(&conn, "chickpea stew");

        let names: Vec<String> = Recipe::list_where(&conn, &RecipeFilter::name_prefix("Chic"))
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();

        assert_eq!(names, vec!["Chicken cacciatore", "Chicken curry"]);
    }

    #[test]
    fn test_list_where_without_filter_returns_all_in_id_order() {
        let (_temp, conn) = create_test_db();
        let first = insert(&conn, "Recipe 1");
        let second = insert(&conn, "Recipe 2");

        let all = Recipe::list_where(&conn, &RecipeFilter::default()).unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[test]
    fn test_delete_cascades_to_ingredients() {
        let (_temp, conn) = create_test_db();
        let recipe = insert(&conn, "Pasta");
        let recipe_id = recipe.id.unwrap();

        Ingredient::get_or_create(&conn, recipe_id, "Tomato").unwrap();
        Ingredient::get_or_create(&conn, recipe_id, "Basil").unwrap();
        assert_eq!(recipe.ingredients(&conn).unwrap().len(), 2);

        Recipe::delete_by_id(&conn, recipe_id).unwrap();
        assert!(Ingredient::find_by_recipe(&conn, recipe_id).unwrap().is_empty());
        assert!(Ingredient::list_all(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_unsaved_recipe_has_no_ingredients() {
        let (_temp, conn) = create_test_db();
        let recipe = Recipe::new("Draft".to_string(), String::new());
        assert!(recipe.ingredients(&conn).unwrap().is_empty());
    }
}
