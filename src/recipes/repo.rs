use sqlx::SqlitePool;

use crate::recipes::repo_types::{NewRecipe, Recipe, RecipeSummary};

pub async fn insert(db: &SqlitePool, recipe: &NewRecipe<'_>) -> sqlx::Result<i64> {
    let res = sqlx::query(
        r#"
        INSERT INTO recipes (name, instructions, ingredients, tags, image_path)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(recipe.name)
    .bind(recipe.instructions)
    .bind(recipe.ingredients)
    .bind(recipe.tags)
    .bind(recipe.image_path)
    .execute(db)
    .await?;
    Ok(res.last_insert_rowid())
}

pub async fn list(db: &SqlitePool) -> sqlx::Result<Vec<Recipe>> {
    sqlx::query_as::<_, Recipe>(
        r#"
        SELECT id, name, instructions, ingredients, tags, image_path, created_at
          FROM recipes
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn get(db: &SqlitePool, id: i64) -> sqlx::Result<Option<Recipe>> {
    sqlx::query_as::<_, Recipe>(
        r#"
        SELECT id, name, instructions, ingredients, tags, image_path, created_at
          FROM recipes
         WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn list_summaries(db: &SqlitePool) -> sqlx::Result<Vec<RecipeSummary>> {
    sqlx::query_as::<_, RecipeSummary>("SELECT name, ingredients, instructions FROM recipes")
        .fetch_all(db)
        .await
}
