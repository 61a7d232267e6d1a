//! # Reporte de Estadísticas
//! src/handlers/stats.rs

use crate::http::Response;
use crate::stats::{ServerStats, StatsRegistry};

/// Handler para /stats
///
/// Toma un snapshot y lo renderiza como HTML. Siempre responde 200 y no
/// modifica ningún contador.
pub fn stats_handler(stats: &StatsRegistry) -> Response {
    Response::html(&render_stats(&stats.snapshot()))
}

/// Renderiza los tres contadores
pub fn render_stats(stats: &ServerStats) -> String {
    format!(
        "<html><body><h1>Server Stats</h1>\
         <p>Total requests: {}</p>\
         <p>Total bytes received: {}</p>\
         <p>Total bytes sent: {}</p>\
         </body></html>",
        stats.total_requests, stats.bytes_received, stats.bytes_sent
    )
}
