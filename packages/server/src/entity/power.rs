use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "powers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    /// At least 20 characters once trimmed; checked by `validation::validate_description`.
    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(has_many)]
    pub hero_powers: HasMany<super::hero_power::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
