use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{hero_power, power};
use crate::error::{AppError, ErrorBody, ErrorsBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::models::power::{PowerResponse, UpdatePowerRequest};
use crate::state::AppState;
use crate::validation::validate_description;

pub const POWER_NOT_FOUND: &str = "Power not found";

#[utoipa::path(
    get,
    path = "/powers",
    tag = "Powers",
    operation_id = "listPowers",
    summary = "List powers",
    description = "Returns every power ordered by id. Hero-power links are not included.",
    responses(
        (status = 200, description = "List of powers", body = Vec<PowerResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_powers(State(state): State<AppState>) -> Result<Json<Vec<PowerResponse>>, AppError> {
    let powers = power::Entity::find()
        .order_by_asc(power::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(powers.into_iter().map(PowerResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/powers/{id}",
    tag = "Powers",
    operation_id = "getPower",
    summary = "Get a power by ID",
    params(("id" = i32, Path, description = "Power ID")),
    responses(
        (status = 200, description = "Power details", body = PowerResponse),
        (status = 404, description = "Power not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_power(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<PowerResponse>, AppError> {
    let model = find_power(&state.db, id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    patch,
    path = "/powers/{id}",
    tag = "Powers",
    operation_id = "updatePower",
    summary = "Update a power's description",
    description = "Partially updates a power. Only `description` is writable; it must be at least 20 characters once trimmed. A payload without `description` returns the current power unchanged.",
    params(("id" = i32, Path, description = "Power ID")),
    request_body = UpdatePowerRequest,
    responses(
        (status = 200, description = "Power updated", body = PowerResponse),
        (status = 400, description = "Description too short", body = ErrorsBody),
        (status = 404, description = "Power not found", body = ErrorBody),
        (status = 500, description = "Unexpected persistence failure, nothing written", body = ErrorsBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn update_power(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdatePowerRequest>,
) -> Result<Json<PowerResponse>, AppError> {
    let model = apply_power_update(&state.db, id, payload)
        .await
        .map_err(AppError::into_write_failure)?;
    Ok(Json(model.into()))
}

async fn apply_power_update(
    db: &DatabaseConnection,
    id: i32,
    payload: UpdatePowerRequest,
) -> Result<power::Model, AppError> {
    // Dropping the transaction on any early return rolls it back.
    let txn = db.begin().await?;

    let existing = find_power(&txn, id).await?;

    let model = match payload.description {
        Some(description) => {
            validate_description(Some(description.as_str()))?;
            let mut active: power::ActiveModel = existing.into();
            active.description = Set(description);
            active.update(&txn).await?
        }
        None => existing,
    };

    txn.commit().await?;
    Ok(model)
}

#[utoipa::path(
    delete,
    path = "/powers/{id}",
    tag = "Powers",
    operation_id = "deletePower",
    summary = "Delete a power by ID",
    description = "Permanently deletes a power and cascade-deletes all of its hero-power links.",
    params(("id" = i32, Path, description = "Power ID")),
    responses(
        (status = 204, description = "Power deleted"),
        (status = 404, description = "Power not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_power(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    find_power(&txn, id).await?;

    let removed = hero_power::Entity::delete_many()
        .filter(hero_power::Column::PowerId.eq(id))
        .exec(&txn)
        .await?;
    power::Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;
    tracing::info!(
        "Deleted power {} and {} hero-power links",
        id,
        removed.rows_affected
    );
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn find_power<C: ConnectionTrait>(db: &C, id: i32) -> Result<power::Model, AppError> {
    power::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(POWER_NOT_FOUND.into()))
}
