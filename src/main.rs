use mimalloc::MiMalloc;
use petclinic_customers::config::Config;
use petclinic_customers::credentials::{HttpSecretsStore, resolve_connection};
use petclinic_customers::db::Database;
use petclinic_customers::router::{PetclinicState, petclinic_router};
use std::collections::HashMap;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

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
        listen_addr = %cfg.listen_addr,
        loglevel = %cfg.loglevel,
        secrets_endpoint = %cfg.secrets_endpoint,
        init_schema = cfg.init_schema
    );

    let db = match cfg.database_url.as_deref() {
        Some(url) => {
            info!("database url configured; skipping secrets resolution");
            Database::connect(url, false).await?
        }
        None => {
            let env: HashMap<String, String> = std::env::vars().collect();
            let store = HttpSecretsStore::from_config(&cfg)?;
            let params = resolve_connection(&env, &store).await?;
            Database::connect(
                params.connect_url()?.as_str(),
                params.create_database_if_absent(),
            )
            .await?
        }
    };
    info!(dialect = ?db.dialect(), "database pool ready");

    if cfg.init_schema {
        db.init_schema().await?;
        info!("owners schema ensured");
    }

    let state = PetclinicState::new(db);
    let app = petclinic_router(state);

    let listener = TcpListener::bind(cfg.listen_addr.as_str()).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
