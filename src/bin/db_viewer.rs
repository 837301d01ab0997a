use anyhow::Context;
use recipe_keeper::{config, db, logging, viewer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init("recipe_keeper=info");

    let url = config::database_url_from_env();
    let pool = db::open_existing(&url).await?;

    viewer::print_all(&pool).await.context("read tables")?;

    pool.close().await;
    Ok(())
}
