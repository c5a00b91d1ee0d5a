//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor web con soporte para
//! argumentos CLI y variables de entorno, más la persistencia en disco que
//! usa el panel de control (puerto, directorio web, directorio
//! de logs).
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./web_server --port 8080 --web-dir ./www --log-dir ./logs
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 WEB_DIR=/srv/www ./web_server
//! ```

use crate::http::StatusPolicy;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Configuración del servidor web desde CLI y entorno
#[derive(Debug, Clone, Parser)]
#[command(name = "web_server")]
#[command(about = "Servidor web estático HTTP/1.x concurrente")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8080", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio raíz desde el que se sirven archivos (web root)
    #[arg(long = "web-dir", default_value = "./www", env = "WEB_DIR")]
    pub web_dir: String,

    /// Directorio donde se escriben los archivos de bitácora diarios
    #[arg(long = "log-dir", default_value = "./logs", env = "LOG_DIR")]
    pub log_dir: String,

    /// Archivo de persistencia de la configuración
    #[arg(long = "config-file", default_value = "config.json", env = "CONFIG_FILE")]
    pub config_file: String,

    /// Responder códigos de estado correctos (404/400) en vez del 200
    /// incondicional heredado
    #[arg(long = "strict-status", env = "STRICT_STATUS")]
    pub strict_status: bool,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```
    /// use web_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Política de selección de estado según la configuración
    pub fn status_policy(&self) -> StatusPolicy {
        if self.strict_status {
            StatusPolicy::Strict
        } else {
            StatusPolicy::Legacy
        }
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port must be in range 1-65535".to_string());
        }
        if self.web_dir.is_empty() {
            return Err("Web directory must not be empty".to_string());
        }
        if self.log_dir.is_empty() {
            return Err("Log directory must not be empty".to_string());
        }
        Ok(())
    }

    /// La terna persistible {puerto, web root, log dir}
    pub fn to_stored(&self) -> StoredConfig {
        StoredConfig {
            port: self.port,
            web_dir: self.web_dir.clone(),
            log_dir: self.log_dir.clone(),
        }
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            web_dir: "./www".to_string(),
            log_dir: "./logs".to_string(),
            config_file: "config.json".to_string(),
            strict_status: false,
        }
    }
}

/// La terna de configuración que persiste el panel de control
///
/// Inmutable durante una corrida del servidor: el Lifecycle Manager recibe
/// una copia al arrancar y nadie la muta después.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    /// Puerto de escucha
    pub port: u16,

    /// Web root
    #[serde(rename = "webDirectory")]
    pub web_dir: String,

    /// Directorio de bitácora
    #[serde(rename = "logDirectory")]
    pub log_dir: String,
}

impl Default for StoredConfig {
    /// Valores por defecto cuando no hay configuración persistida:
    /// puerto 8080 y directorios vacíos
    fn default() -> Self {
        Self {
            port: 8080,
            web_dir: String::new(),
            log_dir: String::new(),
        }
    }
}

/// Persistencia de la configuración en un archivo JSON
///
/// Los fallos de persistencia se reportan solo por stderr: nunca llegan al
/// camino de atención de conexiones y nunca son fatales.
pub struct ConfigStore {
    /// Ruta al archivo de configuración
    path: PathBuf,
}

impl ConfigStore {
    /// Crea un store sobre la ruta dada
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Ruta del archivo de configuración
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Carga la configuración persistida
    ///
    /// Si el archivo no existe, está corrupto o no se puede leer, retorna
    /// los valores por defecto (puerto 8080, directorios vacíos).
    pub fn load(&self) -> StoredConfig {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(_) => return StoredConfig::default(),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Error reading config file {}: {}",
                    self.path.display(),
                    e
                );
                StoredConfig::default()
            }
        }
    }

    /// Guarda la configuración, sobrescribiendo valores previos
    ///
    /// Escribe primero a un archivo temporal y renombra (escritura atómica).
    pub fn save(&self, config: &StoredConfig) -> std::io::Result<()> {
        let temp_path = self.path.with_extension("json.tmp");
        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writer.flush()?;

        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}
