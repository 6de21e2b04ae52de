use serde::Serialize;

use super::hero_power::HeroPowerResponse;
use crate::entity::hero;

/// A hero without its hero-power links.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct HeroResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Kamala Khan")]
    pub name: String,
    #[schema(example = "Ms. Marvel")]
    pub super_name: String,
}

/// A hero together with every hero-power link it owns.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct HeroDetailResponse {
    pub id: i32,
    pub name: String,
    pub super_name: String,
    /// Ordered by hero-power id.
    pub hero_powers: Vec<HeroPowerResponse>,
}

impl From<&hero::Model> for HeroResponse {
    fn from(m: &hero::Model) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            super_name: m.super_name.clone(),
        }
    }
}

impl From<hero::Model> for HeroResponse {
    fn from(m: hero::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            super_name: m.super_name,
        }
    }
}

impl HeroDetailResponse {
    pub fn new(hero: HeroResponse, hero_powers: Vec<HeroPowerResponse>) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            super_name: hero.super_name,
            hero_powers,
        }
    }
}
