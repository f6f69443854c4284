// src/catalog/records.rs

//! Wire records exchanged over the API

use crate::db::models::{Ingredient, Recipe};
use serde::{Deserialize, Serialize};

/// Serialized ingredient, nested in recipes and listed on its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub name: String,
}

impl From<&Ingredient> for IngredientRecord {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name.clone(),
        }
    }
}

/// Serialized recipe with its owned ingredients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<IngredientRecord>,
}

impl RecipeRecord {
    /// Build a record from a saved recipe and its ingredients
    pub fn from_parts(id: i64, recipe: &Recipe, ingredients: &[Ingredient]) -> Self {
        Self {
            id,
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            ingredients: ingredients.iter().map(IngredientRecord::from).collect(),
        }
    }
}

/// Incoming ingredient body
///
/// Every field is optional at the wire level; presence rules are enforced by
/// validation so that all offending fields can be reported at once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IngredientInput {
    #[serde(default)]
    pub name: Option<String>,
}

impl IngredientInput {
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Incoming recipe body for create, replace and patch
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<IngredientInput>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_record_shape() {
        let record = RecipeRecord {
            id: 7,
            name: "Toast".to_string(),
            description: "Bread, heated".to_string(),
            ingredients: vec![IngredientRecord {
                name: "Bread".to_string(),
            }],
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "name": "Toast",
                "description": "Bread, heated",
                "ingredients": [{"name": "Bread"}]
            })
        );
    }

    #[test]
    fn test_recipe_input_fields_are_optional() {
        let input: RecipeInput = serde_json::from_str(r#"{"name": "Lemonade"}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("Lemonade"));
        assert!(input.description.is_none());
        assert!(input.ingredients.is_none());
    }

    #[test]
    fn test_recipe_input_null_is_absent() {
        let input: RecipeInput =
            serde_json::from_str(r#"{"description": null, "ingredients": null}"#).unwrap();
        assert!(input.description.is_none());
        assert!(input.ingredients.is_none());
    }

    #[test]
    fn test_recipe_input_nested_ingredients() {
        let input: RecipeInput = serde_json::from_str(
            r#"{"name": "Pasta", "description": "d", "ingredients": [{"name": "Tomato"}, {}]}"#,
        )
        .unwrap();
        let ingredients = input.ingredients.unwrap();
        assert_eq!(ingredients.len(), 2);
        assert_eq!(ingredients[0].name.as_deref(), Some("Tomato"));
        assert!(ingredients[1].name.is_none());
    }
}
