use jobs_backend::{
    build_router,
    config::{Config, StorageBackend},
    database::pool::{create_pool, run_migrations},
    logging::init_logging,
    AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let config = Config::from_env()?;
    let addr: SocketAddr = config.server_address.parse()?;

    let (app_state, pool) = match config.storage_backend {
        StorageBackend::Postgres => {
            let pool = create_pool(&config).await?;
            run_migrations(&pool).await?;
            info!("connected to postgres, migrations applied");
            (AppState::postgres(config, pool.clone()), Some(pool))
        }
        StorageBackend::Memory => {
            info!("using in-memory storage");
            (AppState::in_memory(config), None)
        }
    };
    info!(
        require_auth = app_state.config.require_auth,
        "job routes configured"
    );

    let app = build_router(app_state);

    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
        info!("database pool closed");
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = ?e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = ?e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
