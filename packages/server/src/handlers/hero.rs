use std::collections::HashMap;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{hero, hero_power, power};
use crate::error::{AppError, ErrorBody};
use crate::extractors::path::AppPath;
use crate::models::hero::{HeroDetailResponse, HeroResponse};
use crate::models::hero_power::HeroPowerResponse;
use crate::state::AppState;

pub const HERO_NOT_FOUND: &str = "Hero not found";

#[utoipa::path(
    get,
    path = "/heroes",
    tag = "Heroes",
    operation_id = "listHeroes",
    summary = "List heroes",
    description = "Returns every hero ordered by id. Hero-power links are not included.",
    responses(
        (status = 200, description = "List of heroes", body = Vec<HeroResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_heroes(State(state): State<AppState>) -> Result<Json<Vec<HeroResponse>>, AppError> {
    let heroes = hero::Entity::find()
        .order_by_asc(hero::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(heroes.into_iter().map(HeroResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/heroes/{id}",
    tag = "Heroes",
    operation_id = "getHero",
    summary = "Get a hero by ID",
    description = "Returns a hero together with its hero-power links. Each link embeds its hero and power without their own links.",
    params(("id" = i32, Path, description = "Hero ID")),
    responses(
        (status = 200, description = "Hero details", body = HeroDetailResponse),
        (status = 404, description = "Hero not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_hero(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<HeroDetailResponse>, AppError> {
    let hero = find_hero(&state.db, id).await?;
    let hero_powers = load_hero_powers(&state.db, &hero).await?;

    Ok(Json(HeroDetailResponse::new(hero.into(), hero_powers)))
}

#[utoipa::path(
    delete,
    path = "/heroes/{id}",
    tag = "Heroes",
    operation_id = "deleteHero",
    summary = "Delete a hero by ID",
    description = "Permanently deletes a hero and cascade-deletes all of its hero-power links.",
    params(("id" = i32, Path, description = "Hero ID")),
    responses(
        (status = 204, description = "Hero deleted"),
        (status = 404, description = "Hero not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_hero(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    find_hero(&txn, id).await?;

    let removed = hero_power::Entity::delete_many()
        .filter(hero_power::Column::HeroId.eq(id))
        .exec(&txn)
        .await?;
    hero::Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;
    tracing::info!(
        "Deleted hero {} and {} hero-power links",
        id,
        removed.rows_affected
    );
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn find_hero<C: ConnectionTrait>(db: &C, id: i32) -> Result<hero::Model, AppError> {
    hero::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(HERO_NOT_FOUND.into()))
}

/// Load a hero's links in id order, each paired with its power.
async fn load_hero_powers<C: ConnectionTrait>(
    db: &C,
    hero: &hero::Model,
) -> Result<Vec<HeroPowerResponse>, AppError> {
    let links = hero_power::Entity::find()
        .filter(hero_power::Column::HeroId.eq(hero.id))
        .order_by_asc(hero_power::Column::Id)
        .all(db)
        .await?;
    if links.is_empty() {
        return Ok(Vec::new());
    }

    let power_ids: Vec<i32> = links.iter().map(|link| link.power_id).collect();
    let powers: HashMap<i32, power::Model> = power::Entity::find()
        .filter(power::Column::Id.is_in(power_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    links
        .into_iter()
        .map(|link| {
            let Some(power) = powers.get(&link.power_id) else {
                return Err(AppError::Internal(format!(
                    "hero_power {} references missing power {}",
                    link.id, link.power_id
                )));
            };
            Ok(HeroPowerResponse::new(link, hero, power))
        })
        .collect()
}
