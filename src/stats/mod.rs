//! # Estadísticas del Servidor
//! src/stats/mod.rs
//!
//! Contadores compartidos por todos los threads de conexión:
//! - Requests recibidos
//! - Bytes recibidos
//! - Bytes enviados

pub mod registry;

pub use registry::{ServerStats, StatsRegistry};
