// src/server/handlers/ingredients.rs
//! Ingredient collection and item handlers

use crate::catalog::{self, validation, IngredientInput, IngredientRecord};
use crate::server::handlers::{in_transaction, last_param, parse_id};
use crate::server::problem::{ApiError, ApiJson, ApiQuery, ApiResult};
use crate::server::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// GET /ingredients?assigned_only=0|1
///
/// A non-zero `assigned_only` keeps only names owned by some recipe.
pub async fn list_ingredients(
    State(state): State<SharedState>,
    ApiQuery(params): ApiQuery<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<IngredientRecord>>> {
    let assigned_only =
        validation::parse_flag("assigned_only", last_param(&params, "assigned_only"))?;

    let ingredients = in_transaction(&state, move |conn| {
        catalog::list_ingredients(conn, assigned_only)
    })
    .await?;

    Ok(Json(ingredients))
}

/// POST /ingredients
pub async fn create_ingredient(
    State(state): State<SharedState>,
    ApiJson(input): ApiJson<IngredientInput>,
) -> ApiResult<(StatusCode, Json<IngredientRecord>)> {
    let record =
        in_transaction(&state, move |conn| catalog::create_ingredient(conn, &input)).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /ingredients/:id
pub async fn get_ingredient(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<IngredientRecord>> {
    let id = parse_id(&id, "Ingredient")?;
    let record = in_transaction(&state, move |conn| catalog::retrieve_ingredient(conn, id)).await?;
    Ok(Json(record))
}

/// PUT /ingredients/:id and PATCH /ingredients/:id
pub async fn update_ingredient(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Result<ApiJson<IngredientInput>, ApiError>,
) -> ApiResult<Json<IngredientRecord>> {
    let id = parse_id(&id, "Ingredient")?;
    let input = match body {
        Ok(ApiJson(input)) => input,
        Err(rejection) => {
            in_transaction(&state, move |conn| catalog::retrieve_ingredient(conn, id)).await?;
            return Err(rejection);
        }
    };
    let record =
        in_transaction(&state, move |conn| catalog::modify_ingredient(conn, id, &input)).await?;
    Ok(Json(record))
}

/// DELETE /ingredients/:id
pub async fn delete_ingredient(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id, "Ingredient")?;
    in_transaction(&state, move |conn| catalog::delete_ingredient(conn, id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
