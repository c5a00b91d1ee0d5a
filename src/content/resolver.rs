//! # Resolución de Contenido
//! src/content/resolver.rs
//!
//! Dada la ruta relativa derivada del request y el web root configurado,
//! decide qué se responde: los bytes de un archivo, el listado HTML de un
//! directorio, o el cuerpo 404 literal heredado.
//!
//! El web root es una frontera de confinamiento: toda ruta resuelta se
//! canonicaliza y se verifica que siga dentro del root. Secuencias de
//! traversal (`..`, symlinks que escapan) se responden como 404.

use crate::content::listing;
use crate::content::mime;
use std::fs;
use std::path::{Path, PathBuf};

/// Cuerpo literal de las respuestas 404 (se preserva byte a byte)
pub const NOT_FOUND_BODY: &str = "404 Not Found | The requested resource is not available.";

/// Qué resultó de resolver una ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Un archivo regular legible
    File,

    /// Un directorio, respondido como listado HTML
    Listing,

    /// El recurso no existe, no es legible, o escapa del web root
    NotFound,
}

/// Contenido resuelto listo para envolver en una respuesta
#[derive(Debug, Clone)]
pub struct Resolved {
    /// Qué encontró el resolver
    pub outcome: Outcome,

    /// Content-Type del body
    pub content_type: &'static str,

    /// Bytes del body
    pub body: Vec<u8>,
}

impl Resolved {
    fn not_found() -> Self {
        Self {
            outcome: Outcome::NotFound,
            content_type: mime::DEFAULT_CONTENT_TYPE,
            body: NOT_FOUND_BODY.as_bytes().to_vec(),
        }
    }
}

/// Resuelve rutas de requests contra un web root
#[derive(Debug, Clone)]
pub struct Resolver {
    /// Web root configurado (tal como llegó de la configuración)
    web_root: PathBuf,
}

impl Resolver {
    /// Crea un resolver para el web root dado
    pub fn new(web_root: impl Into<PathBuf>) -> Self {
        Self {
            web_root: web_root.into(),
        }
    }

    /// Obtiene el web root configurado
    pub fn web_root(&self) -> &Path {
        &self.web_root
    }

    /// Resuelve una ruta relativa (ya sin el `/` inicial)
    ///
    /// La cadena vacía es el centinela raíz: lista el web root.
    ///
    /// Nunca falla: cualquier problema del filesystem colapsa al resultado
    /// 404, que es una respuesta válida y no un error.
    pub fn resolve(&self, rel_path: &str) -> Resolved {
        // Canonicalizar el root primero: si el root mismo no existe, nada
        // bajo él puede existir
        let canonical_root = match self.web_root.canonicalize() {
            Ok(root) => root,
            Err(_) => return Resolved::not_found(),
        };

        let target = if rel_path.is_empty() {
            self.web_root.clone()
        } else {
            self.web_root.join(rel_path)
        };

        // Confinamiento: la ruta canonicalizada debe quedar dentro del root.
        // canonicalize() falla para rutas inexistentes, lo que también
        // colapsa a 404.
        let canonical = match target.canonicalize() {
            Ok(path) => path,
            Err(_) => return Resolved::not_found(),
        };
        if !canonical.starts_with(&canonical_root) {
            return Resolved::not_found();
        }

        if canonical.is_dir() {
            // El enlace al padre solo se omite cuando se lista el root
            let include_parent_link = canonical != canonical_root;
            match listing::render_listing(&canonical, include_parent_link) {
                Ok(html) => Resolved {
                    outcome: Outcome::Listing,
                    content_type: "text/html",
                    body: html.into_bytes(),
                },
                Err(_) => Resolved::not_found(),
            }
        } else {
            match fs::read(&canonical) {
                Ok(bytes) => Resolved {
                    outcome: Outcome::File,
                    content_type: mime::content_type_for(rel_path),
                    body: bytes,
                },
                Err(_) => Resolved::not_found(),
            }
        }
    }
}
