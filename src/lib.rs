//! # Web Server
//! src/lib.rs
//!
//! Servidor web estático HTTP/1.x concurrente: acepta conexiones TCP, lee
//! la request line, resuelve la ruta contra un web root configurado y
//! responde con los bytes de un archivo, el listado HTML de un directorio
//! o un cuerpo 404.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: parsing de la request line y serialización de responses
//! - `content`: confinamiento al web root, listado de directorios y MIME
//! - `server`: accept loop, atención de conexiones y ciclo de vida
//! - `config`: configuración CLI/entorno y su persistencia en disco
//! - `logger`: bitácora con vista en memoria y archivo diario
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use web_server::config::StoredConfig;
//! use web_server::http::StatusPolicy;
//! use web_server::logger::ActivityLogger;
//! use web_server::server::Server;
//!
//! let logger = ActivityLogger::new("./logs");
//! let mut server = Server::new("127.0.0.1", StatusPolicy::Legacy, logger);
//! server
//!     .start(StoredConfig {
//!         port: 8080,
//!         web_dir: "./www".to_string(),
//!         log_dir: "./logs".to_string(),
//!     })
//!     .expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod content;
pub mod http;
pub mod logger;
pub mod server;
