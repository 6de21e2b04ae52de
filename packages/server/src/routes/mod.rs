use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::{hero, hero_power, power};
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(hero_routes())
        .merge(power_routes())
        .merge(hero_power_routes())
}

fn hero_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(hero::list_heroes))
        .routes(routes!(hero::get_hero, hero::delete_hero))
}

fn power_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(power::list_powers))
        .routes(routes!(
            power::get_power,
            power::update_power,
            power::delete_power
        ))
}

fn hero_power_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(hero_power::create_hero_power))
}
