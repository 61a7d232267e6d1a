//! # Construcción de Respuestas HTTP
//!
//! API para construir respuestas y escribirlas en el socket.
//!
//! ## Formato
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/html\r\n
//! \r\n
//! <html>...</html>
//! ```
//!
//! Los headers se escriben en el orden en que se agregaron. Solo las
//! respuestas de archivos llevan `Content-Length`: el resto se delimita
//! cerrando la conexión.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use http_stats_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("Hello");
//!
//! let mut out = Vec::new();
//! response.write_to(&mut out, |_| {}).unwrap();
//! assert!(out.ends_with(b"\r\n\r\nHello"));
//! ```

use super::StatusCode;
use std::fs::File;
use std::io::{self, Read, Write};

/// Tamaño de cada chunk al hacer streaming de un archivo
pub const FILE_CHUNK_SIZE: usize = 4096;

/// Cuerpo de una respuesta
#[derive(Debug)]
pub enum Body {
    /// Contenido ya en memoria
    Bytes(Vec<u8>),

    /// Archivo abierto que se envía por chunks al escribir la respuesta
    File(File),
}

/// Respuesta HTTP completa
#[derive(Debug)]
pub struct Response {
    status: StatusCode,

    /// Headers en orden de inserción
    headers: Vec<(String, String)>,

    body: Body,
}

impl Response {
    /// Crea una respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Body::Bytes(Vec::new()),
        }
    }

    /// Agrega un header (si ya existía, se reemplaza su valor)
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        match self.headers.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
        self
    }

    /// Establece el cuerpo desde un string
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Body::Bytes(body.as_bytes().to_vec());
        self
    }

    /// Respuesta `text/plain` con el código indicado
    ///
    /// ```
    /// use http_stats_server::http::{Response, StatusCode};
    ///
    /// let response = Response::text(StatusCode::NotFound, "File not found.");
    /// assert_eq!(response.header("Content-Type"), Some("text/plain"));
    /// ```
    pub fn text(status: StatusCode, message: &str) -> Self {
        Self::new(status)
            .with_header("Content-Type", "text/plain")
            .with_body(message)
    }

    /// Respuesta 200 `text/html`
    pub fn html(body: &str) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", "text/html")
            .with_body(body)
    }

    /// Respuesta 200 que hace streaming de un archivo ya abierto
    ///
    /// `len` es el tamaño del archivo y va en `Content-Length`.
    pub fn file(file: File, len: u64) -> Self {
        let mut response =
            Self::new(StatusCode::Ok).with_header("Content-Length", &len.to_string());
        response.body = Body::File(file);
        response
    }

    /// Status line y headers, terminados por la línea vacía
    pub fn head_bytes(&self) -> Vec<u8> {
        let mut head = format!("HTTP/1.1 {}\r\n", self.status);
        for (name, value) in &self.headers {
            head.push_str(name);
            head.push_str(": ");
            head.push_str(value);
            head.push_str("\r\n");
        }
        head.push_str("\r\n");
        head.into_bytes()
    }

    /// Escribe la respuesta completa en `out`
    ///
    /// Un body [`Body::File`] se lee y envía en chunks de
    /// [`FILE_CHUNK_SIZE`] bytes; `on_file_chunk` se llama con el tamaño
    /// de cada chunk después de escribirlo. Los bodies en memoria no lo
    /// invocan.
    pub fn write_to<W: Write>(
        self,
        out: &mut W,
        mut on_file_chunk: impl FnMut(u64),
    ) -> io::Result<()> {
        out.write_all(&self.head_bytes())?;

        match self.body {
            Body::Bytes(bytes) => out.write_all(&bytes)?,
            Body::File(mut file) => {
                let mut chunk = [0u8; FILE_CHUNK_SIZE];
                loop {
                    let n = match file.read(&mut chunk) {
                        Ok(0) => break,
                        Ok(n) => n,
                        Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                        Err(e) => return Err(e),
                    };
                    out.write_all(&chunk[..n])?;
                    on_file_chunk(n as u64);
                }
            }
        }

        out.flush()
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Busca un header por nombre exacto
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Obtiene el body, si está en memoria
    pub fn body_bytes(&self) -> Option<&[u8]> {
        match &self.body {
            Body::Bytes(bytes) => Some(bytes),
            Body::File(_) => None,
        }
    }
}
