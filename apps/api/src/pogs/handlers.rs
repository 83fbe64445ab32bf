use anyhow::Context;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::pog::{Pog, PogFields};
use crate::pogs::extract::PogBody;
use crate::pogs::validation::{FieldError, PogPayload};
use crate::state::AppState;

/// The `:id` segment arrives as text; a non-integer id fails like the lookup would.
fn parse_id(raw: &str) -> anyhow::Result<i32> {
    raw.trim()
        .parse::<i32>()
        .with_context(|| format!("invalid pog id '{raw}'"))
}

/// Missing fields answer 422 with `message`; a value the columns cannot hold
/// fails through `on_storage_error`, as the write statement would.
fn validate(
    operation: &'static str,
    payload: PogPayload,
    message: &'static str,
    on_storage_error: fn(&'static str, anyhow::Error) -> AppError,
) -> Result<PogFields, AppError> {
    payload.into_fields().map_err(|e| {
        debug!("Rejected {operation} payload: {e}");
        match e {
            FieldError::Missing(_) => AppError::Unprocessable(message),
            FieldError::Invalid(_) => on_storage_error(operation, e.into()),
        }
    })
}

/// GET /pogs
pub async fn handle_list_pogs(State(state): State<AppState>) -> Result<Json<Vec<Pog>>, AppError> {
    let pogs = state
        .pogs
        .list()
        .await
        .map_err(|e| AppError::lookup_failed("list", e))?;
    Ok(Json(pogs))
}

/// GET /pogs/:id
pub async fn handle_get_pog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Pog>>, AppError> {
    let id = parse_id(&id).map_err(|e| AppError::lookup_failed("get", e))?;
    let rows = state
        .pogs
        .find(id)
        .await
        .map_err(|e| AppError::lookup_failed("get", e))?;
    if rows.is_empty() {
        return Err(AppError::PogNotFound);
    }
    Ok(Json(rows))
}

/// POST /pogs
pub async fn handle_create_pog(
    State(state): State<AppState>,
    PogBody(payload): PogBody,
) -> Result<Json<Vec<Pog>>, AppError> {
    let fields = validate("create", payload, "POST failed", AppError::lookup_failed)?;
    let created = state
        .pogs
        .create(&fields)
        .await
        .map_err(|e| AppError::lookup_failed("create", e))?;
    if let Some(pog) = created.first() {
        info!("Created pog {} ({})", pog.pogs_id, pog.ticker_symbol);
    }
    Ok(Json(created))
}

/// PUT /pogs/:id
pub async fn handle_update_pog(
    State(state): State<AppState>,
    Path(id): Path<String>,
    PogBody(payload): PogBody,
) -> Result<Json<Vec<Pog>>, AppError> {
    let fields = validate("update", payload, "Edit failed", AppError::internal)?;
    let id = parse_id(&id).map_err(|e| AppError::internal("update", e))?;
    let updated = state
        .pogs
        .update(id, &fields)
        .await
        .map_err(|e| AppError::internal("update", e))?
        .ok_or(AppError::PogNotFound)?;
    info!("Updated pog {id}");
    Ok(Json(updated))
}

/// DELETE /pogs/:id
pub async fn handle_delete_pog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Pog>>, AppError> {
    let id = parse_id(&id).map_err(|e| AppError::delete_failed("delete", e))?;
    let deleted = state
        .pogs
        .delete(id)
        .await
        .map_err(|e| AppError::delete_failed("delete", e))?
        .ok_or(AppError::PogNotFound)?;
    info!("Deleted pog {id}");
    Ok(Json(deleted))
}
