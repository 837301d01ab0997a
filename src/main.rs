use recipe_keeper::{app, logging, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init("recipe_keeper=debug,axum=info,tower_http=info");

    let app_state = AppState::init().await?;
    app::serve(app_state).await
}
