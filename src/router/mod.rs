//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Mapea la request line a uno de los handlers.
//!
//! ## Reglas (la primera que coincide gana)
//!
//! ```text
//! GET     /static*   → StaticFile (sufijo después de "/static")
//! GET     /calc?*    → Calc (query después de "/calc?")
//! GET     /stats     → Stats
//! GET     otro       → 404
//! no GET  cualquiera → 405
//! ```

use crate::handlers::{self, static_file::STATIC_PREFIX};
use crate::http::{Request, Response, StatusCode};
use crate::stats::StatsRegistry;
use std::path::PathBuf;

const CALC_PREFIX: &str = "/calc?";
const STATS_PATH: &str = "/stats";

/// Destino de un request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// Archivo bajo la raíz estática; lleva el sufijo del path
    StaticFile(&'a str),

    /// Suma; lleva la query completa
    Calc(&'a str),

    /// Reporte de estadísticas
    Stats,

    /// GET a un path desconocido
    NotFound,

    /// Cualquier método que no sea GET
    MethodNotAllowed,
}

impl<'a> Route<'a> {
    /// Aplica las reglas de dispatch sobre un request parseado
    ///
    /// # Ejemplo
    /// ```
    /// use http_stats_server::http::Request;
    /// use http_stats_server::router::Route;
    ///
    /// let request = Request::parse(b"GET /calc?a=1&b=2 HTTP/1.1\r\n").unwrap();
    /// assert_eq!(Route::resolve(&request), Route::Calc("a=1&b=2"));
    /// ```
    pub fn resolve(request: &'a Request) -> Self {
        if !request.is_get() {
            return Route::MethodNotAllowed;
        }

        let path = request.path();
        if let Some(suffix) = path.strip_prefix(STATIC_PREFIX) {
            Route::StaticFile(suffix)
        } else if let Some(query) = path.strip_prefix(CALC_PREFIX) {
            Route::Calc(query)
        } else if path == STATS_PATH {
            Route::Stats
        } else {
            Route::NotFound
        }
    }
}

/// Router con el contexto que necesitan los handlers
#[derive(Clone)]
pub struct Router {
    /// Directorio raíz de /static
    static_root: PathBuf,

    /// Contadores compartidos (para /stats)
    stats: StatsRegistry,
}

impl Router {
    pub fn new(static_root: impl Into<PathBuf>, stats: StatsRegistry) -> Self {
        Self {
            static_root: static_root.into(),
            stats,
        }
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    pub fn route(&self, request: &Request) -> Response {
        match Route::resolve(request) {
            Route::StaticFile(suffix) => handlers::static_file_handler(&self.static_root, suffix),
            Route::Calc(query) => handlers::calc_handler(query),
            Route::Stats => handlers::stats_handler(&self.stats),
            Route::NotFound => Response::text(StatusCode::NotFound, "Endpoint not found."),
            Route::MethodNotAllowed => {
                Response::text(StatusCode::MethodNotAllowed, "Only GET is allowed.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn assert_route(raw: &str, expected: Route<'_>) {
        let request = Request::parse(raw.as_bytes()).unwrap();
        assert_eq!(Route::resolve(&request), expected, "{}", raw);
    }

    #[test]
    fn test_static_prefix() {
        assert_route("GET /static/a.txt HTTP/1.1", Route::StaticFile("/a.txt"));
        assert_route("GET /static HTTP/1.1", Route::StaticFile(""));
        assert_route("GET /staticfoo HTTP/1.1", Route::StaticFile("foo"));
    }

    #[test]
    fn test_calc_prefix() {
        assert_route("GET /calc?a=1&b=2 HTTP/1.1", Route::Calc("a=1&b=2"));
        assert_route("GET /calc? HTTP/1.1", Route::Calc(""));
        assert_route("GET /calc HTTP/1.1", Route::NotFound);
    }

    #[test]
    fn test_stats_is_exact() {
        assert_route("GET /stats HTTP/1.1", Route::Stats);
        assert_route("GET /stats/ HTTP/1.1", Route::NotFound);
        assert_route("GET /stats?x=1 HTTP/1.1", Route::NotFound);
    }

    #[test]
    fn test_unknown_path() {
        assert_route("GET /unknown HTTP/1.1", Route::NotFound);
        assert_route("GET / HTTP/1.1", Route::NotFound);
    }

    #[test]
    fn test_non_get_methods() {
        assert_route("POST /stats HTTP/1.1", Route::MethodNotAllowed);
        assert_route("HEAD /static/a.txt HTTP/1.1", Route::MethodNotAllowed);
        assert_route("DELETE /nope HTTP/1.1", Route::MethodNotAllowed);
        assert_route("get /stats HTTP/1.1", Route::MethodNotAllowed);
    }

    #[test]
    fn test_route_responses() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("present.txt"), b"data").unwrap();
        let router = Router::new(dir.path(), StatsRegistry::new());

        let cases = [
            ("GET /static/present.txt HTTP/1.1", StatusCode::Ok),
            ("GET /static/missing.txt HTTP/1.1", StatusCode::NotFound),
            ("GET /calc?a=2&b=3 HTTP/1.1", StatusCode::Ok),
            ("GET /calc?a=x&b=3 HTTP/1.1", StatusCode::BadRequest),
            ("GET /stats HTTP/1.1", StatusCode::Ok),
            ("GET /unknown HTTP/1.1", StatusCode::NotFound),
            ("POST /stats HTTP/1.1", StatusCode::MethodNotAllowed),
        ];

        for (raw, expected) in cases {
            let request = Request::parse(raw.as_bytes()).unwrap();
            assert_eq!(router.route(&request).status(), expected, "{}", raw);
        }
    }

    #[test]
    fn test_fallback_bodies() {
        let router = Router::new("/nonexistent", StatsRegistry::new());

        let request = Request::parse(b"GET /unknown HTTP/1.1").unwrap();
        let response = router.route(&request);
        assert_eq!(response.body_bytes(), Some(&b"Endpoint not found."[..]));

        let request = Request::parse(b"PUT /stats HTTP/1.1").unwrap();
        let response = router.route(&request);
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.body_bytes(), Some(&b"Only GET is allowed."[..]));
    }
}
