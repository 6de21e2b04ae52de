//! Field constraints checked before any write reaches the database.

use serde_json::Value;
use thiserror::Error;

use crate::entity::hero_power::Strength;

/// Minimum length of a power description, counted after trimming whitespace.
pub const DESCRIPTION_MIN_LEN: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Description must be present")]
    MissingDescription,

    #[error("Description must be at least {min} characters long (got {actual})")]
    DescriptionTooShort { min: usize, actual: usize },

    #[error("Strength must be present")]
    MissingStrength,

    #[error("{0}")]
    InvalidStrength(String),
}

/// Check a power description, returning the original (untrimmed) text on success.
pub fn validate_description(text: Option<&str>) -> Result<&str, ValidationError> {
    let text = text.ok_or(ValidationError::MissingDescription)?;
    let actual = text.trim().chars().count();
    if actual < DESCRIPTION_MIN_LEN {
        return Err(ValidationError::DescriptionTooShort {
            min: DESCRIPTION_MIN_LEN,
            actual,
        });
    }
    Ok(text)
}

/// Check a hero-power strength. Exact match only, no case folding or trimming.
pub fn validate_strength(value: Option<&str>) -> Result<Strength, ValidationError> {
    let value = value.ok_or(ValidationError::MissingStrength)?;
    value
        .parse::<Strength>()
        .map_err(|e| ValidationError::InvalidStrength(e.to_string()))
}

/// Check a strength taken straight from a JSON body. Any non-string value is
/// an invalid strength.
pub fn validate_strength_value(value: &Value) -> Result<Strength, ValidationError> {
    match value {
        Value::String(s) => validate_strength(Some(s.as_str())),
        other => Err(ValidationError::InvalidStrength(format!(
            "Strength must be a string, got {other}"
        ))),
    }
}

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are falsy.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// "Falsy" presence test for hero-power creation. Returns the three values
/// only when every one is present and truthy; their types are not checked.
pub fn require_hero_power_fields<'a>(
    strength: Option<&'a Value>,
    hero_id: Option<&'a Value>,
    power_id: Option<&'a Value>,
) -> Option<(&'a Value, &'a Value, &'a Value)> {
    let present = |v: Option<&'a Value>| v.filter(|v| !is_falsy(v));
    Some((present(strength)?, present(hero_id)?, present(power_id)?))
}
