use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How strongly a hero wields a power.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    DeriveActiveEnum,
    EnumIter,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Strength {
    #[sea_orm(string_value = "Strong")]
    Strong,
    #[sea_orm(string_value = "Weak")]
    Weak,
    #[sea_orm(string_value = "Average")]
    Average,
}

impl Strength {
    pub const ALL: &'static [Strength] = &[Self::Strong, Self::Weak, Self::Average];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
            Self::Average => "Average",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a strength that is not one of the exact variant names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrengthError {
    invalid: String,
}

impl fmt::Display for ParseStrengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid strength '{}'. Valid values: {}",
            self.invalid,
            Strength::ALL
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseStrengthError {}

/// Case-sensitive: `"strong"` is rejected.
impl FromStr for Strength {
    type Err = ParseStrengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strength::ALL
            .iter()
            .find(|v| v.as_str() == s)
            .copied()
            .ok_or_else(|| ParseStrengthError {
                invalid: s.to_string(),
            })
    }
}

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hero_powers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub strength: Strength,

    pub hero_id: i32,
    #[sea_orm(belongs_to, from = "hero_id", to = "id", on_delete = "Cascade")]
    pub hero: HasOne<super::hero::Entity>,

    pub power_id: i32,
    #[sea_orm(belongs_to, from = "power_id", to = "id", on_delete = "Cascade")]
    pub power: HasOne<super::power::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
