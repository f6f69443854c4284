// src/db/models/mod.rs

//! Data models for catalog database entities
//!
//! Plain structs that correspond to database tables. Persistence goes
//! through explicit methods that take a connection.

mod ingredient;
mod recipe;

pub use ingredient::Ingredient;
pub use recipe::{Recipe, RecipeFilter};
