use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use last_train_server::catalog::StationCatalog;
use last_train_server::session::{SessionStore, SessionStoreConfig};
use last_train_server::web::{AppState, create_router};

/// Bundled corpus extract, used unless `CORPUS_PATH` overrides it.
const BUNDLED_CORPUS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/CORPUSExtract.json");

/// Bundled static assets, used unless `STATIC_DIR` overrides it.
const BUNDLED_STATIC: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let corpus_path = std::env::var("CORPUS_PATH").unwrap_or_else(|_| BUNDLED_CORPUS.to_string());
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| BUNDLED_STATIC.to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(9000);

    // A server with no stations is useless; refuse to start.
    let catalog = StationCatalog::load(&corpus_path).expect("Failed to load station corpus");
    println!("Loaded {} public stations from {corpus_path}", catalog.len());

    let sessions = SessionStore::new(&SessionStoreConfig::default());

    let state = AppState::new(catalog, sessions);
    let app = create_router(state, &static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("Last train home listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET  /           - Station picker and stored result");
    println!("  POST /calculate  - Submit a station pair or two numbers");
    println!("  GET  /stations   - Station catalog as JSON");
    println!("  GET  /health     - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
