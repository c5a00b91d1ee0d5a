//! # Módulo de Contenido
//!
//! Todo lo que decide *qué* se responde para una ruta dada:
//!
//! - `resolver`: confinamiento al web root y lectura del filesystem
//! - `listing`: síntesis del listado HTML de directorios
//! - `mime`: clasificación de Content-Type por extensión

pub mod listing;  // Listado HTML de directorios
pub mod mime;     // Tabla extensión -> MIME
pub mod resolver; // Confinamiento y resolución de rutas

pub use listing::DirectoryEntry;
pub use resolver::{Outcome, Resolved, Resolver, NOT_FOUND_BODY};
