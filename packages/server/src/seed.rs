use sea_orm::*;
use tracing::info;

use crate::entity::hero_power::Strength;
use crate::entity::{hero, hero_power, power};
use crate::validation::validate_description;

/// Sample heroes as `(name, super_name)`.
const SAMPLE_HEROES: &[(&str, &str)] = &[
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
    ("Jean Grey", "Dark Phoenix"),
    ("Ororo Munroe", "Storm"),
    ("Kitty Pryde", "Shadowcat"),
    ("Elektra Natchios", "Elektra"),
];

/// Sample powers as `(name, description)`.
const SAMPLE_POWERS: &[(&str, &str)] = &[
    ("super strength", "gives the wielder super-human strengths"),
    (
        "flight",
        "gives the wielder the ability to fly through the skies at supersonic speed",
    ),
    (
        "super human senses",
        "allows the wielder to use her senses at a super-human level",
    ),
    ("elasticity", "can stretch the human body to extreme lengths"),
];

/// Sample links as `(hero index, power index, strength)` into the tables above.
const SAMPLE_LINKS: &[(usize, usize, Strength)] = &[
    (0, 1, Strength::Strong),
    (0, 3, Strength::Average),
    (1, 0, Strength::Average),
    (2, 2, Strength::Weak),
    (4, 0, Strength::Strong),
    (5, 1, Strength::Strong),
    (7, 1, Strength::Average),
    (9, 2, Strength::Strong),
];

/// Insert the sample roster when the store holds no heroes yet.
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    if hero::Entity::find().count(db).await? > 0 {
        info!("Heroes already present, skipping seed");
        return Ok(());
    }

    let txn = db.begin().await?;

    let mut hero_ids = Vec::with_capacity(SAMPLE_HEROES.len());
    for &(name, super_name) in SAMPLE_HEROES {
        let model = hero::ActiveModel {
            name: Set(name.to_string()),
            super_name: Set(super_name.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        hero_ids.push(model.id);
    }

    let mut power_ids = Vec::with_capacity(SAMPLE_POWERS.len());
    for &(name, description) in SAMPLE_POWERS {
        let description = validate_description(Some(description))
            .map_err(|e| DbErr::Custom(format!("Invalid sample power '{name}': {e}")))?;
        let model = power::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        power_ids.push(model.id);
    }

    for &(hero_idx, power_idx, strength) in SAMPLE_LINKS {
        hero_power::ActiveModel {
            strength: Set(strength),
            hero_id: Set(hero_ids[hero_idx]),
            power_id: Set(power_ids[power_idx]),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    info!(
        "Seeded {} heroes, {} powers and {} hero-power links",
        hero_ids.len(),
        power_ids.len(),
        SAMPLE_LINKS.len()
    );
    Ok(())
}
