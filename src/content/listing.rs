//! # Listado de Directorios
//! src/content/listing.rs
//!
//! Sintetiza la página HTML que se sirve cuando el request apunta a un
//! directorio: una lista `<ul>` con una entrada por hijo inmediato (sin
//! recursión). Los subdirectorios enlazan a `nombre/` y los archivos a
//! `nombre`; si el directorio listado no es el web root se antepone un
//! enlace al padre (`../`).
//!
//! Las entradas se ordenan por nombre para que el listado sea determinista.

use std::fs;
use std::io;
use std::path::Path;

/// Una entrada inmediata de un directorio
///
/// Derivada bajo demanda del filesystem; nunca se persiste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Nombre del archivo o subdirectorio (sin ruta)
    pub name: String,

    /// true si la entrada es un subdirectorio
    pub is_dir: bool,
}

/// Enumera las entradas inmediatas de un directorio, ordenadas por nombre
///
/// Entradas cuyo nombre no es UTF-8 válido se omiten del listado.
pub fn read_entries(dir: &Path) -> io::Result<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue,
        };
        let is_dir = entry.file_type()?.is_dir();
        entries.push(DirectoryEntry { name, is_dir });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Genera el HTML del listado de un directorio
///
/// `include_parent_link` debe ser false solo cuando el directorio listado
/// es el web root configurado.
///
/// # Ejemplo
/// ```no_run
/// use std::path::Path;
/// use web_server::content::listing::render_listing;
///
/// let html = render_listing(Path::new("/srv/www/docs"), true).unwrap();
/// assert!(html.contains("<ul>"));
/// ```
pub fn render_listing(dir: &Path, include_parent_link: bool) -> io::Result<String> {
    let entries = read_entries(dir)?;

    let mut html = String::new();
    html.push_str("<html><body><h1>File list of ");
    html.push_str(&dir.display().to_string());
    html.push_str("</h1><ul>");

    if include_parent_link {
        html.push_str("<li><a href=\"../\">.. (Back)</a></li>");
    }

    for entry in &entries {
        if entry.is_dir {
            html.push_str(&format!(
                "<li><a href=\"{0}/\">{0}</a></li>",
                entry.name
            ));
        } else {
            html.push_str(&format!("<li><a href=\"{0}\">{0}</a></li>", entry.name));
        }
    }

    html.push_str("</ul></body></html>");
    Ok(html)
}
