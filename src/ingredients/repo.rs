use sqlx::SqlitePool;

use crate::ingredients::repo_types::Ingredient;

/// Insert an ingredient and return its new id.
pub async fn insert(
    db: &SqlitePool,
    name: Option<&str>,
    quantity: Option<f64>,
    unit: Option<&str>,
) -> sqlx::Result<i64> {
    let res = sqlx::query(
        r#"
        INSERT INTO ingredients (name, quantity, unit)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(name) // NULL rejected by the NOT NULL constraint
    .bind(quantity)
    .bind(unit)
    .execute(db)
    .await?;
    Ok(res.last_insert_rowid())
}

/// Delete by id, returning rows affected (0 for unknown ids).
pub async fn delete(db: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query("DELETE FROM ingredients WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;
    Ok(res.rows_affected())
}

/// Replace name/quantity/unit and refresh `last_updated`.
pub async fn update(
    db: &SqlitePool,
    id: i64,
    name: Option<&str>,
    quantity: Option<f64>,
    unit: Option<&str>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(
        r#"
        UPDATE ingredients
           SET name = ?, quantity = ?, unit = ?, last_updated = CURRENT_TIMESTAMP
         WHERE id = ?
        "#,
    )
    .bind(name)
    .bind(quantity)
    .bind(unit)
    .bind(id)
    .execute(db)
    .await?;
    Ok(res.rows_affected())
}

pub async fn list(db: &SqlitePool) -> sqlx::Result<Vec<Ingredient>> {
    sqlx::query_as::<_, Ingredient>(
        r#"
        SELECT id, name, quantity, unit, last_updated
          FROM ingredients
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn list_names(db: &SqlitePool) -> sqlx::Result<Vec<String>> {
    let rows: Vec<(String,)> = sqlx::query_as("SELECT name FROM ingredients")
        .fetch_all(db)
        .await?;
    Ok(rows.into_iter().map(|(name,)| name).collect())
}
