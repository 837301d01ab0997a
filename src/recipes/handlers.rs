use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::dto::{CreateRecipeRequest, CreatedRecipeResponse, RecipeResponse, UploadedRecipeResponse};
use super::repo;
use super::repo_types::NewRecipe;
use super::services::{create_from_image, with_image_data};
use crate::{
    error::ApiError,
    extract::{AppJson, AppMultipart, AppPath},
    images::services::UploadItem,
    state::AppState,
};

/// Multipart field carrying the recipe photo.
const IMAGE_FIELD: &str = "image";

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_recipes))
        .route("/recipes/:id", get(get_recipe))
}

pub fn write_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/recipes", post(create_recipe))
        .route(
            "/recipes/upload",
            post(upload_recipe).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
}

// --- handlers ---

#[instrument(skip(state, body))]
pub async fn create_recipe(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateRecipeRequest>,
) -> Result<Json<CreatedRecipeResponse>, ApiError> {
    let id = repo::insert(
        &state.db,
        &NewRecipe {
            name: body.name.as_deref(),
            instructions: body.instructions.as_deref(),
            ingredients: body.ingredients.as_deref(),
            tags: body.tags.as_deref(),
            image_path: None,
        },
    )
    .await?;

    info!(id, "recipe added");
    Ok(Json(CreatedRecipeResponse {
        message: "Recipe added successfully",
        id,
    }))
}

/// POST /recipes/upload (multipart, field `image`)
#[instrument(skip(state, mp))]
pub async fn upload_recipe(
    State(state): State<AppState>,
    AppMultipart(mut mp): AppMultipart,
) -> Result<Json<UploadedRecipeResponse>, ApiError> {
    let mut upload = None;
    while let Some(field) = mp.next_field().await? {
        // Only a file part counts; a plain text field named `image` is skipped.
        if field.name() != Some(IMAGE_FIELD) || field.file_name().is_none() {
            continue;
        }
        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let body = field.bytes().await?;
        upload = Some(UploadItem::new(
            body,
            content_type.as_deref(),
            file_name.as_deref(),
        ));
        break;
    }

    let Some(item) = upload else {
        warn!("upload without image field");
        return Err(ApiError::Validation("No image file provided".into()));
    };

    let (recipe_id, extracted_info) = create_from_image(&state, item).await?;

    Ok(Json(UploadedRecipeResponse {
        message: "Recipe processed and stored successfully",
        recipe_id,
        extracted_info,
    }))
}

#[instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    let recipes = repo::list(&state.db).await?;
    let mut items = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        items.push(with_image_data(&state, recipe).await?);
    }
    Ok(Json(items))
}

#[instrument(skip(state))]
pub async fn get_recipe(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let recipe = repo::get(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Recipe not found".into()))?;

    info!(id, "recipe retrieved");
    Ok(Json(with_image_data(&state, recipe).await?))
}
