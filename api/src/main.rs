use api::app;
use std::net::SocketAddr;
use std::process;
use tokio::net::TcpListener;
use tokio::signal::{self, ctrl_c};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_appender::rolling;
use util::{config, state::AppState};

#[tokio::main]
async fn main() {
    // Load configuration and initialize logging
    let _log_guard = init_logging(&config::log_file(), &config::log_level());

    // Connect to the store, falling back to the local database once
    let db = match db::connect(&config::database_url(), &config::fallback_database_url()).await {
        Ok(db) => db,
        Err(err) => {
            error!(primary = %err.primary, fallback = %err.fallback, "No database available");
            process::exit(1);
        }
    };

    if let Err(err) = db::migrate(&db).await {
        error!(error = %err, "Failed to apply migrations");
        process::exit(1);
    }

    let app_state = AppState::new(db);

    // Configure middleware and build app router
    let cors = CorsLayer::very_permissive();
    let app = app(app_state.clone()).layer(cors);

    // Start server
    let addr = format!("{}:{}", config::host(), config::port());
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(addr = %addr, error = %err, "Failed to bind");
            process::exit(1);
        }
    };

    info!("Starting {} on http://{addr}", config::project_name());

    let served = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await;

    if let Err(err) = served {
        error!(error = %err, "Server stopped with an error");
    }

    if let Err(err) = app_state.db_clone().close().await {
        error!(error = %err, "Failed to close the database connection");
    }
    info!("Server shut down");
}

fn init_logging(log_file: &str, log_level: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = config::log_to_stdout().then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
            .with_thread_ids(true)
    });

    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("api=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = ctrl_c().await {
            error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                error!(error = %err, "Failed to install signal handler");
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
}
