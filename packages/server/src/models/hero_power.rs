use serde::Serialize;
use serde_json::{Map, Value};

use super::hero::HeroResponse;
use super::power::PowerResponse;
use crate::entity::hero_power::{self, Strength};
use crate::entity::{hero, power};

/// Body for creating a hero-power link.
///
/// Fields are kept as raw JSON so that a value of any type reaches the
/// presence check and the strength check, instead of failing deserialization.
#[derive(Debug, Default, PartialEq, utoipa::ToSchema)]
pub struct CreateHeroPowerRequest {
    /// One of `Strong`, `Weak`, `Average`.
    #[schema(value_type = Option<String>, example = "Average")]
    pub strength: Option<Value>,
    #[schema(value_type = Option<i32>, example = 1)]
    pub hero_id: Option<Value>,
    #[schema(value_type = Option<i32>, example = 2)]
    pub power_id: Option<Value>,
}

impl From<Map<String, Value>> for CreateHeroPowerRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            strength: body.remove("strength"),
            hero_id: body.remove("hero_id"),
            power_id: body.remove("power_id"),
        }
    }
}

/// A hero-power link with its hero and power embedded one level deep.
///
/// The embedded types carry no `hero_powers` field, which keeps the
/// hero -> hero_power -> hero cycle from expanding.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct HeroPowerResponse {
    #[schema(example = 1)]
    pub id: i32,
    pub strength: Strength,
    #[schema(example = 1)]
    pub hero_id: i32,
    #[schema(example = 2)]
    pub power_id: i32,
    pub hero: HeroResponse,
    pub power: PowerResponse,
}

impl HeroPowerResponse {
    pub fn new(hp: hero_power::Model, hero: &hero::Model, power: &power::Model) -> Self {
        Self {
            id: hp.id,
            strength: hp.strength,
            hero_id: hp.hero_id,
            power_id: hp.power_id,
            hero: hero.into(),
            power: power.into(),
        }
    }
}
