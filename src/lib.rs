// src/lib.rs

//! Larder Recipe Catalog
//!
//! A small REST service for recipes and the ingredients they own.
//!
//! # Architecture
//!
//! - Database-first: all state in SQLite, one transaction per request
//! - Models: plain structs with explicit store methods (`db::models`)
//! - Catalog: wire records, validation and nested ingredient mapping
//! - Server: axum router with RFC 7807 error bodies

pub mod catalog;
pub mod db;
mod error;
pub mod server;

pub use catalog::{FieldErrors, IngredientInput, IngredientRecord, RecipeInput, RecipeRecord};
pub use db::models::{Ingredient, Recipe, RecipeFilter};
pub use error::{Error, Result};
pub use server::{CatalogConfig, ServerConfig, create_router, run_server};
