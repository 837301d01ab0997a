//! Console dump of both tables, for manual debugging.

use sqlx::SqlitePool;
use time::{macros::format_description, PrimitiveDateTime};

use crate::ingredients::{repo as ingredients_repo, repo_types::Ingredient};
use crate::recipes::{repo as recipes_repo, repo_types::Recipe};

const MAX_CELL_CHARS: usize = 40;

/// Print ingredients, then recipes. Recipes are only read once ingredients are printed.
pub async fn print_all(db: &SqlitePool) -> sqlx::Result<()> {
    let ingredients = ingredients_repo::list(db).await?;
    println!("\nIngredients:");
    println!("------------");
    println!("{}", ingredients_table(&ingredients));

    let recipes = recipes_repo::list(db).await?;
    println!("\nRecipes:");
    println!("--------");
    println!("{}", recipes_table(&recipes));
    Ok(())
}

pub fn ingredients_table(rows: &[Ingredient]) -> String {
    let cells = rows
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.name.clone(),
                r.quantity.map(|q| q.to_string()).unwrap_or_default(),
                r.unit.clone().unwrap_or_default(),
                timestamp(r.last_updated),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["id", "name", "quantity", "unit", "last_updated"], &cells)
}

pub fn recipes_table(rows: &[Recipe]) -> String {
    let cells = rows
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.name.clone(),
                r.instructions.clone().unwrap_or_default(),
                r.ingredients.clone().unwrap_or_default(),
                r.tags.clone().unwrap_or_default(),
                r.image_path.clone().unwrap_or_default(),
                timestamp(r.created_at),
            ]
        })
        .collect::<Vec<_>>();
    render_table(
        &["id", "name", "instructions", "ingredients", "tags", "image_path", "created_at"],
        &cells,
    )
}

fn timestamp(ts: Option<PrimitiveDateTime>) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    ts.and_then(|t| t.format(&format).ok()).unwrap_or_default()
}

fn cell(value: &str) -> String {
    let flat = value.replace('\r', "").replace('\n', "\\n");
    if flat.chars().count() > MAX_CELL_CHARS {
        let cut: String = flat.chars().take(MAX_CELL_CHARS - 1).collect();
        format!("{cut}…")
    } else {
        flat
    }
}

/// Box-drawn table with a leading `(index)` column.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut header = vec!["(index)".to_string()];
    header.extend(headers.iter().map(|h| h.to_string()));

    let body: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut line = vec![i.to_string()];
            line.extend(row.iter().map(|v| cell(v)));
            line
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            std::iter::once(&header)
                .chain(body.iter())
                .map(|line| line.get(col).map(|c| c.chars().count()).unwrap_or(0))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}", segments.join(mid))
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let c = cells.get(i).map(String::as_str).unwrap_or("");
                format!(" {c}{} ", " ".repeat(w - c.chars().count()))
            })
            .collect();
        format!("│{}│", padded.join("│"))
    };

    let mut out = vec![rule("┌", "┬", "┐"), line(header.as_slice()), rule("├", "┼", "┤")];
    out.extend(body.iter().map(|row| line(row.as_slice())));
    out.push(rule("└", "┴", "┘"));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_aligns_columns_and_indexes_rows() {
        let table = render_table(
            &["id", "name"],
            &[
                vec!["1".into(), "flour".into()],
                vec!["2".into(), "baking soda".into()],
            ],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "│ (index) │ id │ name        │");
        assert_eq!(lines[3], "│ 0       │ 1  │ flour       │");
        assert_eq!(lines[4], "│ 1       │ 2  │ baking soda │");
        assert!(lines.iter().all(|l| l.chars().count() == lines[0].chars().count()));
    }

    #[test]
    fn empty_table_still_has_header() {
        let table = ingredients_table(&[]);
        assert!(table.contains("last_updated"));
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn long_and_multiline_cells_are_flattened() {
        let long = "x".repeat(100);
        assert_eq!(cell(&long).chars().count(), MAX_CELL_CHARS);
        assert_eq!(cell("Soup\r\nBoil"), "Soup\\nBoil");
    }

    #[tokio::test]
    async fn tables_render_stored_rows() {
        let db = crate::db::connect("sqlite::memory:").await.unwrap();
        ingredients_repo::insert(&db, Some("rice"), Some(1.5), Some("cups"))
            .await
            .unwrap();
        let rows = ingredients_repo::list(&db).await.unwrap();
        let table = ingredients_table(&rows);
        assert!(table.contains("rice"));
        assert!(table.contains("1.5"));
        print_all(&db).await.unwrap();
    }
}
