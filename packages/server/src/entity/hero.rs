use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "heroes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub super_name: String,

    #[sea_orm(has_many)]
    pub hero_powers: HasMany<super::hero_power::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
