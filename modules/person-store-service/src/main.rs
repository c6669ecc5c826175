//! Person Store Service — standalone binary serving an in-memory set of person records.
//!
//! Default: http://127.0.0.1:9103/

mod config;
mod routes;
mod seed;
mod store;

use config::Config;
use routes::AppState;
use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let store = Arc::new(store::RecordStore::seeded());
    log::info!("Loaded {} seed records", store.count());

    let state = Arc::new(AppState {
        store,
        start_time: Instant::now(),
    });

    let app = routes::router(state);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    log::info!("Person Store Service listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
