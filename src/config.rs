//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración con soporte para argumentos CLI y variables de entorno.
//! Solo el puerto es configurable; el host y el directorio estático
//! vienen compilados en el binario.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./http_stats_server -p 8080
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 ./http_stats_server
//! ```
//!
//! ## Parsing del puerto
//!
//! El valor se lee como `atoi`: espacios iniciales, signo opcional y los
//! dígitos del principio; el resto se ignora. Sin dígitos el puerto es 0
//! (el sistema operativo asigna uno libre). El entero resultante se
//! trunca a 16 bits.

use clap::Parser;
use std::path::PathBuf;

/// Host en el que escucha el servidor (todas las interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Puerto por defecto
pub const DEFAULT_PORT: u16 = 80;

/// Directorio raíz para /static
pub const STATIC_DIR: &str = "./static";

/// Configuración del servidor
#[derive(Debug, Clone, Parser)]
#[command(name = "http_stats_server")]
#[command(about = "Servidor HTTP concurrente: archivos estáticos, estadísticas y suma de enteros")]
#[command(version)]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(
        short,
        long,
        default_value = "80",
        env = "HTTP_PORT",
        allow_hyphen_values = true,
        value_parser = parse_port
    )]
    pub port: u16,

    /// Host/IP en el que escucha (no expuesto en la CLI)
    #[arg(skip = String::from(DEFAULT_HOST))]
    pub host: String,

    /// Directorio de archivos estáticos (no expuesto en la CLI)
    #[arg(skip = PathBuf::from(STATIC_DIR))]
    pub static_dir: PathBuf,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use http_stats_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:80");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Registra un resumen de la configuración
    pub fn log_summary(&self) {
        tracing::info!(
            address = %self.address(),
            static_dir = %self.static_dir.display(),
            "Configuración cargada"
        );
        if !self.static_dir.is_dir() {
            tracing::warn!(
                static_dir = %self.static_dir.display(),
                "El directorio estático no existe: /static responderá 404"
            );
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            static_dir: PathBuf::from(STATIC_DIR),
        }
    }
}

/// Interpreta el puerto con la semántica de `atoi`
///
/// Nunca falla: la entrada no numérica da 0.
///
/// ```
/// use http_stats_server::config::parse_port;
///
/// assert_eq!(parse_port("8080"), Ok(8080));
/// assert_eq!(parse_port("abc"), Ok(0));
/// assert_eq!(parse_port("  90xyz"), Ok(90));
/// ```
pub fn parse_port(raw: &str) -> Result<u16, String> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| acc.wrapping_mul(10).wrapping_add(i64::from(d - b'0')));
    let value = if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    };

    // Solo sobreviven los 16 bits bajos, como al pasar un int a un puerto
    Ok(value as u16)
}
