//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes y lanza un thread por cada una
//! 3. Lee y parsea la request line
//! 4. Actualiza las estadísticas y envía la response

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::{handle_connection, Server, ServerError};
