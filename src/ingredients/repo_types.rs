use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::PrimitiveDateTime;

/// Ingredient row as stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    #[serde(with = "crate::sqlite_timestamp::option")]
    pub last_updated: Option<PrimitiveDateTime>, // refreshed on every update
}
