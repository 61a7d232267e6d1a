//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Un thread por conexión. El thread de aceptación nunca espera a que una
//! conexión termine: la entrega a un thread nuevo (detached) y vuelve a
//! `accept`.
//!
//! Cada conexión pasa por:
//!
//! ```text
//! Accepted → Reading ─┬─ 0 bytes / error ──────────────────────→ Closed
//!                     └─ registrar stats → Parse ─┬─ error ────→ Closed
//!                                                 └─ Dispatch → Respond → Closed
//! ```
//!
//! Se hace una sola lectura y se escribe una sola respuesta. El
//! `TcpStream` se cierra al salir de `handle_connection` por cualquier
//! camino. No hay timeouts: un cliente lento ocupa su thread
//! indefinidamente.

use crate::config::Config;
use crate::http::request::REQUEST_BUFFER_SIZE;
use crate::http::Request;
use crate::router::Router;
use crate::stats::StatsRegistry;
use std::io::{self, Read};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errores del servidor
#[derive(Debug, Error)]
pub enum ServerError {
    /// No se pudo abrir el socket de escucha (fatal)
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// Error de transporte en una conexión
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Servidor HTTP concurrente con estadísticas
pub struct Server {
    listener: TcpListener,
    router: Router,
    stats: StatsRegistry,
}

impl Server {
    /// Abre el socket de escucha en `config.address()`
    pub fn bind(config: &Config) -> Result<Self, ServerError> {
        Self::bind_with_stats(config, StatsRegistry::new())
    }

    /// Igual que [`Server::bind`] pero con un registro de stats provisto
    /// por quien llama (útil para inspeccionarlo desde afuera).
    pub fn bind_with_stats(config: &Config, stats: StatsRegistry) -> Result<Self, ServerError> {
        let addr = config.address();
        let listener = TcpListener::bind(&addr).map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

        Ok(Self {
            listener,
            router: Router::new(config.static_dir.clone(), stats.clone()),
            stats,
        })
    }

    /// Dirección real en la que quedó escuchando (resuelve el puerto 0)
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Handle a los contadores del servidor
    pub fn stats(&self) -> &StatsRegistry {
        &self.stats
    }

    /// Acepta conexiones para siempre
    ///
    /// Los errores de `accept` y de creación de threads se registran y el
    /// loop continúa.
    pub fn run(&self) -> Result<(), ServerError> {
        info!(addr = %self.local_addr()?, "Servidor escuchando (un thread por conexión)");

        loop {
            let (stream, peer) = match self.listener.accept() {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!(error = %e, "Error al aceptar conexión");
                    continue;
                }
            };

            debug!(%peer, "Nueva conexión");
            let router = self.router.clone();
            let stats = self.stats.clone();

            let spawned = thread::Builder::new()
                .name(format!("conn-{}", peer))
                .spawn(move || {
                    if let Err(e) = handle_connection(stream, &router, &stats) {
                        warn!(%peer, error = %e, "Error en conexión");
                    }
                });

            // Si el thread no se pudo crear, el stream ya se soltó (y cerró)
            // dentro del closure descartado.
            if let Err(e) = spawned {
                warn!(%peer, error = %e, "No se pudo crear el thread de la conexión");
            }
        }
    }
}

/// Atiende una conexión completa: leer, contar, parsear, responder
///
/// Los errores de I/O se devuelven para que el thread los registre; nunca
/// salen de este thread.
pub fn handle_connection(
    mut stream: TcpStream,
    router: &Router,
    stats: &StatsRegistry,
) -> Result<(), ServerError> {
    let start = Instant::now();

    let mut buffer = [0u8; REQUEST_BUFFER_SIZE];
    let bytes_read = stream.read(&mut buffer)?;

    if bytes_read == 0 {
        debug!("Conexión cerrada sin datos");
        return Ok(());
    }

    stats.record_request(bytes_read as u64);

    let request = match Request::parse(&buffer[..bytes_read]) {
        Ok(request) => request,
        Err(e) => {
            debug!(error = %e, bytes = bytes_read, "Request inválido, se cierra sin respuesta");
            return Ok(());
        }
    };

    let response = router.route(&request);
    let status = response.status();

    response.write_to(&mut stream, |n| stats.record_bytes_sent(n))?;

    info!(
        method = request.method(),
        path = request.path(),
        version = request.version().unwrap_or("-"),
        status = status.as_u16(),
        success = status.is_success(),
        latency_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Request atendido"
    );

    Ok(())
}
