//! DndRpg Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dndrpg_engine::api;
use dndrpg_engine::app::App;
use dndrpg_engine::infrastructure::dnd_api::Dnd5eApiClient;
use dndrpg_engine::infrastructure::persistence::{SqliteCharacterRepo, SqliteMonsterRepo};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dndrpg_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting DndRpg Engine");

    // Load configuration
    let db_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| "dndrpg.db".into());
    let dnd_api_url =
        std::env::var("DND_API_URL").unwrap_or_else(|_| "https://www.dnd5eapi.co".into());
    let server_host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let server_port: u16 = std::env::var("SERVER_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .unwrap_or(3000);
    let seed_on_startup = std::env::var("SEED_ON_STARTUP")
        .map(|v| v != "false" && v != "0")
        .unwrap_or(true);

    // Open storage
    tracing::info!("Opening SQLite database at {}", db_path);
    let character_repo = Arc::new(SqliteCharacterRepo::new(&db_path).await?);
    let monster_repo = Arc::new(SqliteMonsterRepo::new(&db_path).await?);
    let catalog = Arc::new(Dnd5eApiClient::new(&dnd_api_url));

    // Create application
    let app = Arc::new(App::new(character_repo, monster_repo, catalog));

    if seed_on_startup {
        app.use_cases.seed.run().await?;
    }

    // CORS for the web client
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = api::http::routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app);

    let addr: SocketAddr = format!("{}:{}", server_host, server_port).parse()?;
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
