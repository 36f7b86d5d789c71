//! Service entry-point: loads settings, prepares storage, and serves the
//! ticket API with its health probes and OpenAPI docs.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use support_tickets::config::ServiceSettings;
use support_tickets::inbound::http::health::HealthState;
use support_tickets::outbound::persistence::{DbPool, PoolConfig, run_migrations};

use server::{ServerConfig, TicketStorage, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        ServiceSettings::load().map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let storage = prepare_storage(&settings).await?;

    let config = ServerConfig::new(settings.bind_addr(), storage);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::make_metrics());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {}", settings.bind_addr()))?;
    info!(addr = %settings.bind_addr(), "ticket service listening");

    let handle = server.handle();
    tokio::spawn(async move {
        shutdown_signal().await;
        // Liveness fails before in-flight requests drain.
        health_state.mark_unhealthy();
        handle.stop(true).await;
    });

    server.await.wrap_err("server terminated abnormally")
}

/// Resolve on SIGINT or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C; shutting down"),
        () = terminate => info!("received SIGTERM; shutting down"),
    }
}

/// Select ticket storage from settings, applying migrations when asked.
async fn prepare_storage(settings: &ServiceSettings) -> Result<TicketStorage> {
    let Some(url) = settings.database_url() else {
        if settings.allow_in_memory {
            warn!("no database configured; ticket numbers will restart with the process");
            return Ok(TicketStorage::InMemory);
        }
        return Err(eyre!(
            "TICKETS_DATABASE_URL is not set; set TICKETS_ALLOW_IN_MEMORY=true to run without a database"
        ));
    };

    if settings.run_migrations() {
        let migration_url = url.to_owned();
        let applied = tokio::task::spawn_blocking(move || run_migrations(&migration_url))
            .await
            .wrap_err("migration task panicked")?
            .wrap_err("database migration failed")?;
        info!(applied, "database schema up to date");
    }

    let max_size = settings.db_max_connections();
    let pool_config = PoolConfig::new(url)
        .with_max_size(max_size)
        .with_min_idle(Some(max_size.min(2)));
    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to build database pool")?;
    Ok(TicketStorage::Database(pool))
}
