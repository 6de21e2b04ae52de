use axum::Json;
use axum::extract::State;
use sea_orm::*;
use serde_json::{Map, Value};
use tracing::instrument;

use super::hero::HERO_NOT_FOUND;
use super::power::POWER_NOT_FOUND;
use crate::entity::hero_power::Strength;
use crate::entity::{hero, hero_power, power};
use crate::error::{AppError, ErrorsBody};
use crate::extractors::json::AppJson;
use crate::models::hero_power::{CreateHeroPowerRequest, HeroPowerResponse};
use crate::state::AppState;
use crate::validation::{require_hero_power_fields, validate_strength_value};

pub const MISSING_FIELDS: &str = "Missing required fields: strength, hero_id, power_id";

#[utoipa::path(
    post,
    path = "/hero_powers",
    tag = "Hero Powers",
    operation_id = "createHeroPower",
    summary = "Link a hero to a power",
    description = "Creates a hero-power link. `strength`, `hero_id` and `power_id` are required; falsy values (`null`, `false`, `0`, empty string, empty array or object) count as missing. The hero is checked before the power. The body must be a JSON object.",
    request_body = CreateHeroPowerRequest,
    responses(
        (status = 200, description = "Link created", body = HeroPowerResponse),
        (status = 400, description = "Missing field or invalid strength", body = ErrorsBody),
        (status = 404, description = "Hero or power not found", body = ErrorsBody),
        (status = 500, description = "Unexpected persistence failure, nothing written", body = ErrorsBody),
    ),
)]
#[instrument(skip(state, body))]
pub async fn create_hero_power(
    State(state): State<AppState>,
    AppJson(body): AppJson<Map<String, Value>>,
) -> Result<Json<HeroPowerResponse>, AppError> {
    let payload = CreateHeroPowerRequest::from(body);
    let (strength, hero_id, power_id) = require_hero_power_fields(
        payload.strength.as_ref(),
        payload.hero_id.as_ref(),
        payload.power_id.as_ref(),
    )
    .ok_or_else(|| AppError::MissingFields(MISSING_FIELDS.into()))?;
    let strength = validate_strength_value(strength)?;

    insert_hero_power(&state.db, strength, hero_id, power_id)
        .await
        .map(Json)
        .map_err(AppError::into_write_failure)
}

/// Resolve both references inside one transaction, hero first, then insert.
async fn insert_hero_power(
    db: &DatabaseConnection,
    strength: Strength,
    hero_id: &Value,
    power_id: &Value,
) -> Result<HeroPowerResponse, AppError> {
    let txn = db.begin().await?;

    let hero = match as_id(hero_id) {
        Some(id) => hero::Entity::find_by_id(id).one(&txn).await?,
        None => None,
    }
    .ok_or_else(|| AppError::ReferenceNotFound(HERO_NOT_FOUND.into()))?;
    let power = match as_id(power_id) {
        Some(id) => power::Entity::find_by_id(id).one(&txn).await?,
        None => None,
    }
    .ok_or_else(|| AppError::ReferenceNotFound(POWER_NOT_FOUND.into()))?;

    let new_link = hero_power::ActiveModel {
        strength: Set(strength),
        hero_id: Set(hero.id),
        power_id: Set(power.id),
        ..Default::default()
    };
    let model = new_link.insert(&txn).await?;

    txn.commit().await?;

    Ok(HeroPowerResponse::new(model, &hero, &power))
}

/// A reference only resolves when it is an integer in key range; anything
/// else (`"1"`, `true`, `1.5`) can never match a row.
fn as_id(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|id| i32::try_from(id).ok())
}
