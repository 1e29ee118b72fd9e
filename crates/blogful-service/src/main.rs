use blogful_service::{
    DefaultAppState, config::Config, create_app, db::establish_connection,
    middleware::apply_http_layers,
};
use std::sync::{Arc, Mutex};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the process environment still applies
    let dotenv_result = dotenv::dotenv();

    let config = Config::from_env().unwrap_or_else(|err| {
        eprintln!("Invalid configuration: {err}");
        std::process::exit(1);
    });

    // Initialize tracing
    let env_filter = EnvFilter::from_default_env().add_directive(
        "blogful_service=debug"
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
    );
    let production = config.environment.is_production();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(!production)
        .with_target(!production)
        .init();

    if let Err(err) = dotenv_result {
        if !err.not_found() {
            warn!(error = %err, "Failed to load .env file");
        }
    }

    let connection = establish_connection(&config.database_url).unwrap_or_else(|err| {
        error!(database_url = %config.database_url, error = %err, "Failed to set up database");
        std::process::exit(1);
    });

    info!(database_url = %config.database_url, environment = %config.environment, "Connected to database");

    let app_state = DefaultAppState::new(Arc::new(Mutex::new(connection)));
    let app = apply_http_layers(create_app(app_state, config.environment), &config);

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .unwrap_or_else(|err| {
            error!(bind_address = %config.bind_address, error = %err, "Failed to bind to address");
            std::process::exit(1);
        });

    info!(bind_address = %config.bind_address, "Server running");

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    if let Err(err) = server.await {
        error!(error = %err, "Server error");
        std::process::exit(1);
    }

    info!("Graceful shutdown completed - all requests finished");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received, starting graceful shutdown");
}
