// src/catalog/validation.rs

//! Validation of incoming wire records
//!
//! Each validator turns a loosely-typed input into a checked value, collecting
//! every failing field into [`FieldErrors`] before giving up.

use crate::catalog::records::{IngredientInput, RecipeInput};
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Longest accepted recipe or ingredient name, in characters
pub const MAX_NAME_LENGTH: usize = 255;

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";
pub const INVALID_INTEGER: &str = "A valid integer is required.";

/// Messages keyed by offending field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for a single failing field
    pub fn single<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add<F: Into<String>, M: Into<String>>(&mut self, field: F, message: M) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(value)` when nothing failed, otherwise a validation error
    pub fn into_result<T>(self, value: T) -> Result<T> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(Error::ValidationError(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// Checked body for recipe creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
}

/// Checked body for recipe update; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Only `Some` when the input carried a non-empty list
    pub ingredients: Option<Vec<String>>,
}

fn too_long() -> String {
    format!(
        "Ensure this field has no more than {} characters.",
        MAX_NAME_LENGTH
    )
}

/// Check a present name and return it with surrounding whitespace removed
fn clean_name(errors: &mut FieldErrors, field: &str, name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        errors.add(field, BLANK);
    } else if name.chars().count() > MAX_NAME_LENGTH {
        errors.add(field, too_long());
    }
    name.to_string()
}

fn check_ingredients(errors: &mut FieldErrors, inputs: &[IngredientInput]) -> Vec<String> {
    inputs
        .iter()
        .enumerate()
        .filter_map(|(index, input)| {
            let field = format!("ingredients[{}].name", index);
            match input.name.as_deref() {
                Some(name) => Some(clean_name(errors, &field, name)),
                None => {
                    errors.add(field, REQUIRED);
                    None
                }
            }
        })
        .collect()
}

/// Validate a create body: `name` and `description` must be present, `name`
/// non-blank; a missing ingredient list means no ingredients
pub fn validate_new_recipe(input: &RecipeInput) -> Result<NewRecipe> {
    let mut errors = FieldErrors::new();

    let name = match input.name.as_deref() {
        Some(name) => clean_name(&mut errors, "name", name),
        None => {
            errors.add("name", REQUIRED);
            String::new()
        }
    };

    let description = match input.description.as_deref() {
        Some(description) => description.trim().to_string(),
        None => {
            errors.add("description", REQUIRED);
            String::new()
        }
    };

    let ingredients = check_ingredients(&mut errors, input.ingredients.as_deref().unwrap_or(&[]));

    errors.into_result(NewRecipe {
        name,
        description,
        ingredients,
    })
}

/// Validate an update body: every field is optional, present names are checked
pub fn validate_recipe_changes(input: &RecipeInput) -> Result<RecipeChanges> {
    let mut errors = FieldErrors::new();

    let name = input
        .name
        .as_deref()
        .map(|name| clean_name(&mut errors, "name", name));
    let description = input.description.as_deref().map(|d| d.trim().to_string());

    let ingredients = match input.ingredients.as_deref() {
        Some(list) if !list.is_empty() => Some(check_ingredients(&mut errors, list)),
        _ => None,
    };

    errors.into_result(RecipeChanges {
        name,
        description,
        ingredients,
    })
}

/// Validate a standalone ingredient body for creation
pub fn validate_new_ingredient(input: &IngredientInput) -> Result<String> {
    let mut errors = FieldErrors::new();

    let name = match input.name.as_deref() {
        Some(name) => clean_name(&mut errors, "name", name),
        None => {
            errors.add("name", REQUIRED);
            String::new()
        }
    };

    errors.into_result(name)
}

/// Validate a standalone ingredient body for update; absent name keeps it
pub fn validate_ingredient_changes(input: &IngredientInput) -> Result<Option<String>> {
    let mut errors = FieldErrors::new();
    let name = input
        .name
        .as_deref()
        .map(|name| clean_name(&mut errors, "name", name));
    errors.into_result(name)
}

/// Parse a 0/1-style flag; any non-zero integer is true
pub fn parse_flag(field: &str, raw: Option<&str>) -> Result<bool> {
    match raw.map(str::trim) {
        None | Some("") => Ok(false),
        Some(value) => value
            .parse::<i64>()
            .map(|n| n != 0)
            .map_err(|_| Error::ValidationError(FieldErrors::single(field, INVALID_INTEGER))),
    }
}
