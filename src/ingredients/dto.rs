use serde::{Deserialize, Serialize};

/// Body for both create and update; name is left to the NOT NULL constraint.
#[derive(Debug, Deserialize)]
pub struct IngredientRequest {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct ChangesResponse {
    pub message: &'static str,
    pub changes: u64,
}
