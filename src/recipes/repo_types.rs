use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::PrimitiveDateTime;

/// Recipe row as stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub instructions: Option<String>,
    pub ingredients: Option<String>, // freeform, not linked to the ingredients table
    pub tags: Option<String>,
    pub image_path: Option<String>,
    #[serde(with = "crate::sqlite_timestamp::option")]
    pub created_at: Option<PrimitiveDateTime>,
}

/// The columns the chat route feeds to the model.
#[derive(Debug, Clone, FromRow)]
pub struct RecipeSummary {
    pub name: String,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
}

#[derive(Debug, Default)]
pub struct NewRecipe<'a> {
    pub name: Option<&'a str>,
    pub instructions: Option<&'a str>,
    pub ingredients: Option<&'a str>,
    pub tags: Option<&'a str>,
    pub image_path: Option<&'a str>,
}
