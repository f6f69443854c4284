// src/server/handlers/recipes.rs
//! Recipe collection and item handlers

use crate::catalog::{self, RecipeInput, RecipeRecord};
use crate::server::handlers::{in_transaction, last_param, parse_id};
use crate::server::problem::{ApiError, ApiJson, ApiQuery, ApiResult};
use crate::server::SharedState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use tracing::debug;

/// GET /recipes?name=<prefix>
///
/// `name` is a case-sensitive prefix; when repeated, the last value applies.
pub async fn list_recipes(
    State(state): State<SharedState>,
    ApiQuery(params): ApiQuery<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<RecipeRecord>>> {
    let name = last_param(&params, "name").map(str::to_string);
    debug!("Listing recipes (name prefix: {:?})", name);

    let recipes =
        in_transaction(&state, move |conn| catalog::list_recipes(conn, name.as_deref())).await?;

    Ok(Json(recipes))
}

/// POST /recipes
///
/// Returns 201 Created with the stored record and a Location header, or
/// 400 with the offending fields.
pub async fn create_recipe(
    State(state): State<SharedState>,
    ApiJson(input): ApiJson<RecipeInput>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<RecipeRecord>)> {
    let record = in_transaction(&state, move |conn| catalog::create_recipe(conn, &input)).await?;
    let location = format!("/recipes/{}", record.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(record)))
}

/// GET /recipes/:id
pub async fn get_recipe(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<RecipeRecord>> {
    let id = parse_id(&id, "Recipe")?;
    let record = in_transaction(&state, move |conn| catalog::retrieve_recipe(conn, id)).await?;
    Ok(Json(record))
}

/// PUT /recipes/:id
pub async fn replace_recipe(
    state: State<SharedState>,
    id: Path<String>,
    body: Result<ApiJson<RecipeInput>, ApiError>,
) -> ApiResult<Json<RecipeRecord>> {
    modify_recipe(state, id, body).await
}

/// PATCH /recipes/:id
pub async fn patch_recipe(
    state: State<SharedState>,
    id: Path<String>,
    body: Result<ApiJson<RecipeInput>, ApiError>,
) -> ApiResult<Json<RecipeRecord>> {
    modify_recipe(state, id, body).await
}

/// A missing recipe is reported before an unreadable body
async fn modify_recipe(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Result<ApiJson<RecipeInput>, ApiError>,
) -> ApiResult<Json<RecipeRecord>> {
    let id = parse_id(&id, "Recipe")?;
    let input = match body {
        Ok(ApiJson(input)) => input,
        Err(rejection) => {
            in_transaction(&state, move |conn| catalog::retrieve_recipe(conn, id)).await?;
            return Err(rejection);
        }
    };
    let record =
        in_transaction(&state, move |conn| catalog::modify_recipe(conn, id, &input)).await?;
    Ok(Json(record))
}

/// DELETE /recipes/:id
///
/// Cascades to the recipe's ingredients.
pub async fn delete_recipe(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id, "Recipe")?;
    in_transaction(&state, move |conn| catalog::delete_recipe(conn, id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
