//! # Bitácora de Actividad
//! src/logger.rs
//!
//! Registra cada evento notable del servidor (start, stop, request, error)
//! con timestamp en dos sumideros alimentados por la misma línea formateada:
//!
//! - una vista en memoria (lo que el panel de control muestra en pantalla)
//! - un archivo diario `log_<yyyy-MM-dd>.txt` en el directorio de logs,
//!   en modo append, creándolo si no existe
//!
//! Un único mutex cubre ambos sumideros: dos eventos concurrentes nunca se
//! intercalan y cada línea llega completa al archivo. Los fallos de archivo
//! degradan a stderr; nunca llegan al camino de atención de conexiones.

use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Bitácora thread-safe con vista en memoria y archivo diario
#[derive(Clone)]
pub struct ActivityLogger {
    inner: Arc<Mutex<LoggerInner>>,
}

/// Estado interno protegido por el mutex
struct LoggerInner {
    /// Directorio donde viven los archivos log_<fecha>.txt
    log_dir: PathBuf,

    /// Vista en memoria: una entrada por evento, ya formateada
    entries: Vec<String>,
}

impl ActivityLogger {
    /// Crea una bitácora que escribe en el directorio dado
    ///
    /// El directorio se crea si no existe (best effort: si no se puede, los
    /// appends posteriores reportarán el fallo en stderr).
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        let log_dir = log_dir.into();
        if !log_dir.as_os_str().is_empty() {
            let _ = fs::create_dir_all(&log_dir);
        }

        Self {
            inner: Arc::new(Mutex::new(LoggerInner {
                log_dir,
                entries: Vec::new(),
            })),
        }
    }

    /// Registra un evento
    ///
    /// Formatea `[yyyy-MM-dd HH:mm:ss] mensaje\n` y lo anexa a la vista en
    /// memoria y al archivo del día, como una sola unidad atómica.
    pub fn log(&self, message: &str) {
        let now = Local::now();
        let line = format!("[{}] {}\n", now.format("%Y-%m-%d %H:%M:%S"), message);
        let file_name = format!("log_{}.txt", now.format("%Y-%m-%d"));

        let mut inner = self.inner.lock().unwrap();
        inner.entries.push(line.clone());

        let path = inner.log_dir.join(file_name);
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .and_then(|mut file| file.write_all(line.as_bytes()));

        if let Err(e) = result {
            eprintln!("Error saving log to file {}: {}", path.display(), e);
        }
    }

    /// Snapshot de la vista en memoria
    pub fn entries(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        inner.entries.clone()
    }

    /// Cantidad de eventos registrados hasta ahora
    pub fn len(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.entries.len()
    }

    /// true si aún no se registró ningún evento
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ruta del archivo de log del día actual
    pub fn current_log_file(&self) -> PathBuf {
        let inner = self.inner.lock().unwrap();
        inner
            .log_dir
            .join(format!("log_{}.txt", Local::now().format("%Y-%m-%d")))
    }
}
