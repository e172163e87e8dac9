use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &journey::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        listen_addr = %cfg.listen_addr,
        loglevel = %cfg.loglevel
    );

    let store = journey::db::connect(&cfg.database_url).await?;

    if let Some(seed_path) = cfg.seed_path.as_ref() {
        match journey::seed::load_from_dir(seed_path) {
            Ok(users) if !users.is_empty() => {
                let count = journey::seed::apply(&store, users).await?;
                info!(path = %seed_path.display(), count, "applied user seed files");
            }
            Ok(_) => {
                info!(path = %seed_path.display(), "no seed files discovered");
            }
            Err(e) => {
                warn!(path = %seed_path.display(), error = %e, "failed to load seed files");
            }
        }
    }

    let state = journey::server::JourneyState::new(store);
    let app = journey::server::journey_router(state);

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to install ctrl-c handler");
    }
}
