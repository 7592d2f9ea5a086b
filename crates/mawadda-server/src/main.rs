use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use mawadda_api::AppState;
use mawadda_store::{MemStore, SqliteStore, Storage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mawadda=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let backend = std::env::var("MAWADDA_STORE").unwrap_or_else(|_| "sqlite".into());
    let db_path = std::env::var("MAWADDA_DB_PATH").unwrap_or_else(|_| "mawadda.db".into());
    let host = std::env::var("MAWADDA_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("MAWADDA_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;

    // Pick the storage backend
    let store: Arc<dyn Storage> = match backend.as_str() {
        "memory" => Arc::new(MemStore::new()),
        "sqlite" => Arc::new(SqliteStore::open(&PathBuf::from(&db_path))?),
        other => anyhow::bail!("unknown MAWADDA_STORE backend: {other}"),
    };
    info!("Using {} storage backend", store.backend());

    let state = Arc::new(AppState { store });

    let app = mawadda_api::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Mawadda server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
