// src/server/handlers/mod.rs
//! HTTP request handlers for the Larder server

pub mod ingredients;
pub mod recipes;

use crate::db;
use crate::server::problem::{ApiError, ApiProblem, ApiResult};
use crate::server::SharedState;
use rusqlite::Connection;

/// Run catalog work on the blocking pool inside one transaction
///
/// The transaction commits when `work` succeeds and rolls back otherwise.
pub(crate) async fn in_transaction<T, F>(state: &SharedState, work: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&Connection) -> crate::Result<T> + Send + 'static,
{
    let state = state.clone();

    let result: crate::Result<T> = tokio::task::spawn_blocking(move || {
        let mut conn = state.open_db()?;
        db::transaction(&mut conn, |tx| work(tx))
    })
    .await
    .map_err(|e| ApiError(ApiProblem::internal(&format!("Task join error: {}", e))))?;

    result.map_err(ApiError::from)
}

/// Value of a query parameter; a repeated key resolves to its last occurrence
pub(crate) fn last_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.as_str())
}

/// Parse an id path segment; anything but an integer names no resource
pub(crate) fn parse_id(raw: &str, resource: &str) -> ApiResult<i64> {
    raw.parse()
        .map_err(|_| ApiError(ApiProblem::not_found(&format!("{} {}", resource, raw))))
}
