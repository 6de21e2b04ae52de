use serde::{Deserialize, Serialize};

use crate::entity::power;

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct PowerResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "super strength")]
    pub name: String,
    #[schema(example = "gives the wielder super-human strengths")]
    pub description: String,
}

/// PATCH body. An absent (or null) `description` leaves the power unchanged.
#[derive(Debug, Deserialize, Default, PartialEq, utoipa::ToSchema)]
pub struct UpdatePowerRequest {
    /// At least 20 characters once trimmed.
    #[schema(example = "allows the wielder to fly at supersonic speed")]
    pub description: Option<String>,
}

impl From<&power::Model> for PowerResponse {
    fn from(m: &power::Model) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            description: m.description.clone(),
        }
    }
}

impl From<power::Model> for PowerResponse {
    fn from(m: power::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
        }
    }
}
