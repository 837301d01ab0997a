use serde::{Deserialize, Serialize};

use crate::recipes::repo_types::Recipe;

#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub name: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Option<String>,
    pub tags: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedRecipeResponse {
    pub message: &'static str,
    pub id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedRecipeResponse {
    pub message: &'static str,
    pub recipe_id: i64,
    pub extracted_info: String,
}

/// A recipe row plus its image, base64-encoded, when the file is still on disk.
#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
}
