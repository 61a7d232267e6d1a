//! # Parsing de la Request Line
//! src/http/request.rs
//!
//! Solo se consulta la primera línea del request:
//!
//! ```text
//! GET /calc?a=2&b=3 HTTP/1.1\r\n
//! Host: localhost\r\n        <- ignorado
//! \r\n
//! ```
//!
//! La línea se separa por espacios en hasta tres tokens: método, path y
//! versión. La versión se acepta tal cual (ni siquiera es obligatoria).
//!
//! ## Copias acotadas
//!
//! Cada token se copia como mucho hasta un tamaño fijo
//! ([`MAX_METHOD_LEN`], [`MAX_PATH_LEN`], [`MAX_VERSION_LEN`]). Lo que
//! sobra se descarta sin error: un path de 300 bytes se enruta usando
//! sus primeros 256. El límite vale también después de la conversión
//! lossy a UTF-8.

use thiserror::Error;

/// Tamaño del buffer de la única lectura que se hace por conexión
pub const REQUEST_BUFFER_SIZE: usize = 4096;

/// Bytes máximos que se conservan del método
pub const MAX_METHOD_LEN: usize = 16;

/// Bytes máximos que se conservan del path (query incluida)
pub const MAX_PATH_LEN: usize = 256;

/// Bytes máximos que se conservan de la versión
pub const MAX_VERSION_LEN: usize = 16;

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// La primera línea no tiene ningún token
    #[error("Empty request line")]
    EmptyRequestLine,

    /// Hay método pero falta el path
    #[error("Request line without path")]
    MissingPath,
}

/// Request line parseada
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Método tal como llegó (ej: "GET", "POST", "get")
    method: String,

    /// Path completo con '/' inicial y query (ej: "/calc?a=2&b=3")
    path: String,

    /// Todo lo que sigue al primer '?' del path
    query: Option<String>,

    /// Versión HTTP sin validar (ej: "HTTP/1.1")
    version: Option<String>,
}

impl Request {
    /// Parsea la primera línea de un request
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use http_stats_server::http::Request;
    ///
    /// let request = Request::parse(b"GET /calc?a=2&b=3 HTTP/1.1\r\n\r\n").unwrap();
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.path(), "/calc?a=2&b=3");
    /// assert_eq!(request.query(), Some("a=2&b=3"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        let line_end = buffer
            .iter()
            .position(|&b| b == b'\n')
            .unwrap_or(buffer.len());

        // '\r' es whitespace ASCII, así que el CRLF final no genera token
        let mut tokens = buffer[..line_end]
            .split(|b| b.is_ascii_whitespace())
            .filter(|token| !token.is_empty());

        let method = tokens.next().ok_or(ParseError::EmptyRequestLine)?;
        let path = tokens.next().ok_or(ParseError::MissingPath)?;
        let version = tokens.next();

        let method = bounded_copy(method, MAX_METHOD_LEN);
        let path = bounded_copy(path, MAX_PATH_LEN);
        let version = version.map(|v| bounded_copy(v, MAX_VERSION_LEN));
        let query = path.split_once('?').map(|(_, query)| query.to_string());

        Ok(Request {
            method,
            path,
            query,
            version,
        })
    }

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Indica si el método es exactamente "GET"
    pub fn is_get(&self) -> bool {
        self.method == "GET"
    }

    /// Obtiene el path del request (incluye la query)
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la query string sin decodificar
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Obtiene la versión HTTP, si vino
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// Copia como mucho `max` bytes del token
///
/// Cada byte inválido se convierte en U+FFFD (3 bytes), así que el límite
/// se vuelve a aplicar después de la conversión, en un borde de carácter.
fn bounded_copy(token: &[u8], max: usize) -> String {
    let kept = &token[..token.len().min(max)];
    let mut copy = String::from_utf8_lossy(kept).into_owned();

    if copy.len() > max {
        let mut end = max;
        while !copy.is_char_boundary(end) {
            end -= 1;
        }
        copy.truncate(end);
    }
    copy
}
