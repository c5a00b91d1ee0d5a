//! # Clasificación de Content-Type
//! src/content/mime.rs
//!
//! Mapea nombre de archivo a MIME type por sufijo, con una tabla fija y
//! sensible a mayúsculas. Sin sniffing de magic bytes: un `.PNG` se sirve
//! como `text/plain`, comportamiento heredado.

/// MIME type por defecto para extensiones desconocidas
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Determina el Content-Type de un archivo según su extensión
///
/// # Ejemplo
/// ```
/// use web_server::content::mime::content_type_for;
///
/// assert_eq!(content_type_for("index.html"), "text/html");
/// assert_eq!(content_type_for("foto.jpeg"), "image/jpeg");
/// assert_eq!(content_type_for("notas.txt"), "text/plain");
/// ```
pub fn content_type_for(file_name: &str) -> &'static str {
    if file_name.ends_with(".html") || file_name.ends_with(".htm") {
        "text/html"
    } else if file_name.ends_with(".css") {
        "text/css"
    } else if file_name.ends_with(".js") {
        "application/javascript"
    } else if file_name.ends_with(".jpg") || file_name.ends_with(".jpeg") {
        "image/jpeg"
    } else if file_name.ends_with(".png") {
        "image/png"
    } else if file_name.ends_with(".gif") {
        "image/gif"
    } else if file_name.ends_with(".pdf") {
        "application/pdf"
    } else {
        DEFAULT_CONTENT_TYPE
    }
}
