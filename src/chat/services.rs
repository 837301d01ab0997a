use crate::error::ApiError;
use crate::ingredients::repo as ingredients_repo;
use crate::recipes::repo as recipes_repo;
use crate::recipes::repo_types::RecipeSummary;
use crate::state::AppState;

pub const SUGGESTION_INSTRUCTION: &str = "Based on the available ingredients and stored recipes, \
suggest appropriate recipes.\nIf no exact matches are found, suggest alternatives or modifications.";

/// Builds the model prompt from pantry contents, stored recipes and the user's query.
pub fn build_prompt(ingredients: &[String], recipes: &[RecipeSummary], query: &str) -> String {
    let stored = if recipes.is_empty() {
        String::new()
    } else {
        let lines: String = recipes
            .iter()
            .map(|r| {
                format!(
                    "- {} (ingredients: {})\n",
                    r.name,
                    r.ingredients.as_deref().unwrap_or("unknown")
                )
            })
            .collect();
        format!("Stored recipes:\n{lines}")
    };
    format!(
        "Available ingredients: {}\n{stored}User query: {query}\n\n{SUGGESTION_INSTRUCTION}",
        ingredients.join(", ")
    )
}

/// Two independent reads, then one model call. No retry.
pub async fn answer(st: &AppState, query: &str) -> Result<String, ApiError> {
    let ingredients = ingredients_repo::list_names(&st.db).await?;
    let recipes = recipes_repo::list_summaries(&st.db).await?;

    let prompt = build_prompt(&ingredients, &recipes, query);
    tracing::debug!(
        ingredients = ingredients.len(),
        recipes = recipes.len(),
        "chat prompt built"
    );

    Ok(st.ai.generate_text(&prompt).await?)
}
