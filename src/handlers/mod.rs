//! # Handlers de Rutas
//!
//! Los tres endpoints del servidor:
//!
//! - **static_file**: `/static*`, streaming de archivos
//! - **stats**: `/stats`, contadores en HTML
//! - **calc**: `/calc?a=N&b=M`, suma de enteros
//!
//! Cada handler construye una Response; el thread de la conexión se
//! encarga de escribirla.

pub mod calc;
pub mod static_file;
pub mod stats;

pub use calc::calc_handler;
pub use static_file::static_file_handler;
pub use stats::stats_handler;
