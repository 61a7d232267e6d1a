//! # HTTP Stats Server
//! src/lib.rs
//!
//! Servidor HTTP/1.x concurrente implementado desde cero: un thread por
//! conexión, una sola request line por conexión y contadores globales
//! protegidos por un mutex.
//!
//! ## Arquitectura
//!
//! - `http`: Parsing de la request line y construcción de responses
//! - `server`: Loop de aceptación y manejo de cada conexión
//! - `router`: Reglas de dispatch por método y path
//! - `handlers`: `/static`, `/stats` y `/calc`
//! - `stats`: Contadores compartidos (requests, bytes recibidos, bytes enviados)
//! - `config`: Puerto por CLI/env y constantes compiladas
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use http_stats_server::config::Config;
//! use http_stats_server::server::Server;
//!
//! let config = Config::default();
//! let server = Server::bind(&config).expect("Error al iniciar servidor");
//! server.run().expect("Error en el loop de aceptación");
//! ```

pub mod config;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
pub mod stats;
