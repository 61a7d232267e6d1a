//! # Archivos Estáticos
//! src/handlers/static_file.rs
//!
//! `GET /static<sufijo>` sirve `<static_root><sufijo>`.
//!
//! El path final es una concatenación literal de strings: no se
//! normaliza ni se filtra `..`. Quien monte el servidor debe saber que
//! `/static/../secreto` sale del directorio raíz.

use crate::http::{Response, StatusCode};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefijo de las rutas de archivos estáticos
pub const STATIC_PREFIX: &str = "/static";

/// Handler para /static*
///
/// Abre el archivo y arma una respuesta 200 con `Content-Length`; el
/// contenido se envía después por chunks al escribir la respuesta, sin
/// cargar el archivo completo en memoria. Si no se puede abrir (o no es
/// un archivo regular) responde 404.
pub fn static_file_handler(static_root: &Path, suffix: &str) -> Response {
    let full_path = resolve_static_path(static_root, suffix);

    match open_regular_file(&full_path) {
        Ok((file, len)) => {
            debug!(path = %full_path.display(), len, "Sirviendo archivo");
            Response::file(file, len)
        }
        Err(e) => {
            debug!(path = %full_path.display(), error = %e, "Archivo no disponible");
            Response::text(StatusCode::NotFound, "File not found.")
        }
    }
}

/// Concatena la raíz y el sufijo tal cual
///
/// ```
/// use std::path::{Path, PathBuf};
/// use http_stats_server::handlers::static_file::resolve_static_path;
///
/// let path = resolve_static_path(Path::new("/srv/static"), "/img/logo.png");
/// assert_eq!(path, PathBuf::from("/srv/static/img/logo.png"));
/// ```
pub fn resolve_static_path(static_root: &Path, suffix: &str) -> PathBuf {
    let mut full_path = static_root.as_os_str().to_os_string();
    full_path.push(suffix);
    PathBuf::from(full_path)
}

/// Abre el archivo y obtiene su tamaño
fn open_regular_file(path: &Path) -> io::Result<(File, u64)> {
    let file = File::open(path)?;
    let metadata = file.metadata()?;

    // En Linux se puede "abrir" un directorio, pero no leerlo
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            "not a regular file",
        ));
    }

    Ok((file, metadata.len()))
}
