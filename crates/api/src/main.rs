use std::sync::Arc;

use folio_db::{MySqlStore, PortfolioStore};
use folio_notify::{ContactNotifier, EmailConfig, EmailDelivery, UnconfiguredNotifier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_api::config::{LogFormat, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env()?;

    // --- Tracing ---
    init_tracing(config.log_format);
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let pool = folio_db::create_pool(&config.database)?;
    tracing::info!(
        max_connections = config.database.max_connections,
        "Database connection pool created"
    );

    match folio_db::health_check(&pool).await {
        Ok(()) => tracing::info!("Database health check passed"),
        Err(err) => tracing::warn!(error = %err, "Database unreachable at startup; serving anyway"),
    }

    if config.run_migrations {
        folio_db::run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let store = Arc::new(MySqlStore::new(pool));

    // --- Email ---
    let notifier: Arc<dyn ContactNotifier> = match EmailConfig::from_env() {
        Some(email_config) => {
            tracing::info!(
                smtp_host = %email_config.smtp_host,
                smtp_port = email_config.smtp_port,
                "Email delivery configured"
            );
            Arc::new(EmailDelivery::new(email_config)?)
        }
        None => {
            tracing::warn!("EMAIL_USER not set; contact notifications will fail");
            Arc::new(UnconfiguredNotifier)
        }
    };

    // --- App state ---
    let state = AppState {
        store: store.clone(),
        notifier,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let listener = config.bind().await?;
    tracing::info!(addr = %listener.local_addr()?, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");
    store.close().await;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "folio_api=debug,folio_db=debug,tower_http=debug".into());

    let (pretty, json) = match format {
        LogFormat::Pretty => (Some(tracing_subscriber::fmt::layer()), None),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
