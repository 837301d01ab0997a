use tracing::info;

use crate::error::ApiError;
use crate::images::services::{load_image_data, store_upload, UploadItem};
use crate::recipes::dto::RecipeResponse;
use crate::recipes::repo;
use crate::recipes::repo_types::{NewRecipe, Recipe};
use crate::state::AppState;

pub const EXTRACTION_PROMPT: &str = "Extract the recipe information from this image. \
Please provide: 1. Recipe name 2. Ingredients list 3. Cooking instructions \
4. Any additional notes or tips";

pub const FALLBACK_RECIPE_NAME: &str = "Recipe from Image";
pub const IMAGE_INGREDIENTS_PLACEHOLDER: &str = "Extracted from image";

/// First line of the model's answer, or the fallback name when that line is empty.
pub fn recipe_name_from(extracted: &str) -> &str {
    extracted
        .split('\n')
        .next()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .unwrap_or(FALLBACK_RECIPE_NAME)
}

/// Store the image, have the model read it, and insert the resulting recipe.
///
/// The stored file is not removed if a later step fails.
pub async fn create_from_image(
    st: &AppState,
    item: UploadItem,
) -> Result<(i64, String), ApiError> {
    let image_path = store_upload(st, &item).await?;

    let extracted = st
        .ai
        .generate_with_image(EXTRACTION_PROMPT, &item.content_type, &item.body)
        .await?;

    let id = repo::insert(
        &st.db,
        &NewRecipe {
            name: Some(recipe_name_from(&extracted)),
            instructions: Some(&extracted),
            ingredients: Some(IMAGE_INGREDIENTS_PLACEHOLDER),
            tags: None,
            image_path: Some(&image_path),
        },
    )
    .await?;

    info!(id, image_path = %image_path, "recipe extracted from image");
    Ok((id, extracted))
}

pub async fn with_image_data(st: &AppState, recipe: Recipe) -> Result<RecipeResponse, ApiError> {
    let image_data = load_image_data(st, recipe.image_path.as_deref()).await?;
    Ok(RecipeResponse { recipe, image_data })
}
