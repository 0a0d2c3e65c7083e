use migration::MigratorTrait;
use tracing::info;

use crate::{errors::StartupError, routes, state::ServerState};

/// Resolve when Ctrl+C arrives; a failed signal handler never fires.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Bind `server.host:server.port`; the host may be an IP address or a hostname.
async fn bind_listener(cfg: &configs::ServerConfig) -> Result<tokio::net::TcpListener, StartupError> {
    tokio::net::TcpListener::bind((cfg.host.as_str(), cfg.port))
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("cannot bind {}:{}: {e}", cfg.host, cfg.port)))
}

/// Public entry: load configuration, bootstrap the schema and serve HTTP
/// until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    let cfg = configs::AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    info!(event = "schema_ready", "migrations applied");

    let state = ServerState::from_config(db, &cfg)?;
    let app = routes::build_router(state);

    let listener = bind_listener(&cfg.server).await?;
    let addr = listener.local_addr()?;
    info!(%addr, docs = "/docs", "content portal listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binds_hostnames_and_rejects_garbage() {
        let cfg = configs::ServerConfig { host: "localhost".into(), port: 0, worker_threads: None };
        let listener = bind_listener(&cfg).await.expect("localhost resolves");
        assert!(listener.local_addr().expect("bound").ip().is_loopback());

        let cfg = configs::ServerConfig { host: "not a host".into(), port: 8000, worker_threads: None };
        assert!(matches!(bind_listener(&cfg).await, Err(StartupError::InvalidConfig(_))));
    }
}
