//! # Registro de Estadísticas
//! src/stats/registry.rs
//!
//! Contadores globales del servidor protegidos por un único mutex.
//! Cada operación toma el lock solo mientras actualiza o copia los
//! contadores; nunca se hace I/O con el lock tomado.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Snapshot consistente de los contadores del servidor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerStats {
    /// Requests recibidos (cada lectura no vacía cuenta uno)
    pub total_requests: u64,

    /// Bytes leídos de los clientes
    pub bytes_received: u64,

    /// Bytes de archivos estáticos enviados
    pub bytes_sent: u64,
}

/// Registro thread-safe de estadísticas
///
/// Es un handle barato de clonar: todos los clones comparten los mismos
/// contadores.
#[derive(Clone, Default)]
pub struct StatsRegistry {
    inner: Arc<Mutex<ServerStats>>,
}

impl StatsRegistry {
    /// Crea un registro con todos los contadores en cero
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un request nuevo y los bytes recibidos con él
    pub fn record_request(&self, bytes_in: u64) {
        let mut stats = self.lock();
        stats.total_requests = stats.total_requests.saturating_add(1);
        stats.bytes_received = stats.bytes_received.saturating_add(bytes_in);
    }

    /// Suma `n` bytes enviados (se llama una vez por chunk de archivo)
    pub fn record_bytes_sent(&self, n: u64) {
        let mut stats = self.lock();
        stats.bytes_sent = stats.bytes_sent.saturating_add(n);
    }

    /// Copia los tres contadores en un mismo instante lógico
    pub fn snapshot(&self) -> ServerStats {
        *self.lock()
    }

    // Los contadores son enteros sueltos: un panic en otro thread no puede
    // dejarlos a medio actualizar, así que un lock envenenado se recupera.
    fn lock(&self) -> MutexGuard<'_, ServerStats> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
