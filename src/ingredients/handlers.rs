use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{ChangesResponse, CreatedResponse, IngredientRequest};
use super::repo;
use super::repo_types::Ingredient;
use crate::{
    error::ApiError,
    extract::{AppJson, AppPath},
    state::AppState,
};

pub fn ingredient_routes() -> Router<AppState> {
    Router::new()
        .route("/ingredients", get(list_ingredients).post(create_ingredient))
        .route(
            "/ingredients/:id",
            put(update_ingredient).delete(delete_ingredient),
        )
}

#[instrument(skip(state, body))]
pub async fn create_ingredient(
    State(state): State<AppState>,
    AppJson(body): AppJson<IngredientRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = repo::insert(
        &state.db,
        body.name.as_deref(),
        body.quantity,
        body.unit.as_deref(),
    )
    .await?;

    info!(id, "ingredient added");
    Ok(Json(CreatedResponse {
        message: "Ingredient added successfully",
        id,
    }))
}

#[instrument(skip(state))]
pub async fn delete_ingredient(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ChangesResponse>, ApiError> {
    let changes = repo::delete(&state.db, id).await?;

    info!(id, changes, "ingredient deleted");
    Ok(Json(ChangesResponse {
        message: "Ingredient deleted successfully",
        changes,
    }))
}

#[instrument(skip(state, body))]
pub async fn update_ingredient(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(body): AppJson<IngredientRequest>,
) -> Result<Json<ChangesResponse>, ApiError> {
    let changes = repo::update(
        &state.db,
        id,
        body.name.as_deref(),
        body.quantity,
        body.unit.as_deref(),
    )
    .await?;

    info!(id, changes, "ingredient updated");
    Ok(Json(ChangesResponse {
        message: "Ingredient updated successfully",
        changes,
    }))
}

#[instrument(skip(state))]
pub async fn list_ingredients(
    State(state): State<AppState>,
) -> Result<Json<Vec<Ingredient>>, ApiError> {
    let rows = repo::list(&state.db).await?;
    info!(count = rows.len(), "ingredients retrieved");
    Ok(Json(rows))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use time::{OffsetDateTime, PrimitiveDateTime};
    use tower::ServiceExt;

    use crate::ai::fake::FakeAi;
    use crate::app::build_app;
    use crate::state::test_support::fake_state;

    async fn app() -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let state = fake_state(dir.path(), Arc::new(FakeAi::replying("ok"))).await;
        (build_app(state), dir)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn create_then_list_includes_row() {
        let (app, _dir) = app().await;

        let (status, created) = send(
            &app,
            "POST",
            "/api/ingredients",
            Some(json!({ "name": "flour", "quantity": 2, "unit": "cups" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["message"], "Ingredient added successfully");
        let id = created["id"].as_i64().expect("numeric id");

        let (status, rows) = send(&app, "GET", "/api/ingredients", None).await;
        assert_eq!(status, StatusCode::OK);
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"].as_i64(), Some(id));
        assert_eq!(rows[0]["name"], "flour");
        assert_eq!(rows[0]["quantity"].as_f64(), Some(2.0));
        assert_eq!(rows[0]["unit"], "cups");
    }

    #[tokio::test]
    async fn create_without_name_is_storage_error() {
        let (app, _dir) = app().await;
        let (status, body) = send(&app, "POST", "/api/ingredients", Some(json!({ "quantity": 1 }))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("NOT NULL"));
    }

    async fn send_raw(app: &Router, content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("POST").uri("/api/ingredients");
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        let res = app
            .clone()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn malformed_json_body_is_json_error() {
        let (app, _dir) = app().await;
        let (status, body) = send_raw(&app, Some("application/json"), "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn missing_content_type_is_json_error() {
        let (app, _dir) = app().await;
        let (status, body) = send_raw(&app, None, r#"{"name":"salt"}"#).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(body["error"].is_string());

        let (_, rows) = send(&app, "GET", "/api/ingredients", None).await;
        assert!(rows.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_numeric_ingredient_id_is_json_error() {
        let (app, _dir) = app().await;
        let (status, body) = send(&app, "DELETE", "/api/ingredients/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn delete_unknown_id_reports_zero_changes() {
        let (app, _dir) = app().await;
        let (status, body) = send(&app, "DELETE", "/api/ingredients/999", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Ingredient deleted successfully", "changes": 0 }));
    }

    #[tokio::test]
    async fn delete_existing_removes_row() {
        let (app, _dir) = app().await;
        let (_, created) =
            send(&app, "POST", "/api/ingredients", Some(json!({ "name": "eggs" }))).await;
        let id = created["id"].as_i64().unwrap();

        let (_, body) = send(&app, "DELETE", &format!("/api/ingredients/{id}"), None).await;
        assert_eq!(body["changes"], 1);

        let (_, rows) = send(&app, "GET", "/api/ingredients", None).await;
        assert!(rows.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_fields_and_refreshes_timestamp() {
        let (app, _dir) = app().await;
        let (_, created) = send(
            &app,
            "POST",
            "/api/ingredients",
            Some(json!({ "name": "sugar", "quantity": 1, "unit": "kg" })),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        let now = OffsetDateTime::now_utc();
        let started = PrimitiveDateTime::new(now.date(), now.time())
            .replace_nanosecond(0)
            .unwrap();

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/ingredients/{id}"),
            Some(json!({ "name": "brown sugar", "quantity": 0.5, "unit": "kg" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Ingredient updated successfully", "changes": 1 }));

        let (_, rows) = send(&app, "GET", "/api/ingredients", None).await;
        let row = &rows[0];
        assert_eq!(row["name"], "brown sugar");
        assert_eq!(row["quantity"].as_f64(), Some(0.5));

        let format = time::macros::format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
        let updated = PrimitiveDateTime::parse(row["last_updated"].as_str().unwrap(), &format).unwrap();
        assert!(updated >= started, "{updated} < {started}");
    }

    #[tokio::test]
    async fn update_unknown_id_reports_zero_changes() {
        let (app, _dir) = app().await;
        let (status, body) = send(
            &app,
            "PUT",
            "/api/ingredients/7",
            Some(json!({ "name": "salt", "quantity": null, "unit": null })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["changes"], 0);
    }
}
