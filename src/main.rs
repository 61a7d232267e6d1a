//! # HTTP Stats Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada: parsea la CLI, inicializa logging y corre el loop de
//! aceptación. Solo termina por una señal externa o si falla el bind.

use http_stats_server::config::Config;
use http_stats_server::server::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logging: RUST_LOG tiene prioridad sobre el nivel por defecto
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("http_stats_server=info")),
        )
        .init();

    info!("Iniciando HTTP Stats Server v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::new();
    config.log_summary();

    let server = match Server::bind(&config) {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "Error fatal");
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        error!(error = %e, "Error fatal");
        std::process::exit(1);
    }
}
