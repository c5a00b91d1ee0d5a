//! # Módulo HTTP
//!
//! Implementa el subconjunto mínimo de HTTP/1.x que habla el servidor:
//!
//! - Parsing de la request line (solo la primera línea se consulta)
//! - Construcción de responses con `Content-Type` y `Content-Length`
//! - Códigos de estado y la política de selección de estado
//!
//! ### Formato de Request (solo se lee la primera línea)
//!
//! ```text
//! GET /sub/dir HTTP/1.1\r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/html\r\n
//! Content-Length: 13\r\n
//! \r\n
//! <body>
//! ```

pub mod request;  // Parsing de la request line
pub mod response; // Construcción de HTTP responses
pub mod status;   // Códigos de estado y política de selección

// Re-exportamos los tipos principales para facilitar su uso
// Esto permite usar `http::Request` en vez de `http::request::Request`
pub use request::{ParseError, Request};
pub use response::Response;
pub use status::{StatusCode, StatusPolicy};
