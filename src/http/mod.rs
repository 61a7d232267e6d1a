//! # Módulo HTTP
//!
//! Subconjunto mínimo de HTTP/1.1 implementado a mano:
//!
//! - Parsing de la request line (método, path, versión)
//! - Construcción y escritura de responses
//! - Códigos de estado
//!
//! No hay conexiones persistentes, chunked encoding ni bodies de request:
//! cada conexión lleva un request y una response, y luego se cierra.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /static/index.html HTTP/1.1\r\n
//! (cualquier otra línea se ignora)
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Length: 1234\r\n
//! \r\n
//! <bytes del archivo>
//! ```

pub mod request;
pub mod response;
pub mod status;

// Re-exportamos los tipos principales para facilitar su uso
pub use request::{ParseError, Request};
pub use response::{Body, Response};
pub use status::StatusCode;
