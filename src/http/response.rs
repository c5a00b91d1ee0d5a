//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! Este módulo serializa respuestas al formato exacto que el servidor
//! escribe en el socket:
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/html\r\n
//! Content-Length: 13\r\n
//! \r\n
//! <body bytes>
//! ```
//!
//! El contrato de wire es mínimo a propósito: solo `Content-Type` y
//! `Content-Length`, sin `Connection`, `Date` ni `Server`. Quien necesite
//! keep-alive o caching debe extender este writer.

use super::StatusCode;
use std::io::Write;

/// Representa una respuesta HTTP completa lista para serializar
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado ya seleccionado por la política
    status: StatusCode,

    /// Valor del header Content-Type
    content_type: String,

    /// Cuerpo de la respuesta (puede ser binario)
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta con cuerpo textual
    ///
    /// # Ejemplo
    /// ```
    /// use web_server::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok, "text/plain", "hello");
    /// assert_eq!(response.body(), b"hello");
    /// ```
    pub fn new(status: StatusCode, content_type: &str, body: &str) -> Self {
        Self::from_bytes(status, content_type, body.as_bytes().to_vec())
    }

    /// Crea una respuesta con cuerpo binario (imágenes, PDFs, etc.)
    pub fn from_bytes(status: StatusCode, content_type: &str, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type: content_type.to_string(),
            body,
        }
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// `Content-Length` es exactamente la longitud en bytes del body.
    ///
    /// # Ejemplo
    /// ```
    /// use web_server::http::{Response, StatusCode};
    ///
    /// let bytes = Response::new(StatusCode::Ok, "text/plain", "hello").to_bytes();
    /// let text = String::from_utf8(bytes).unwrap();
    ///
    /// assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    /// assert!(text.contains("Content-Length: 5\r\n"));
    /// assert!(text.ends_with("\r\n\r\nhello"));
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.body.len() + 128);

        // 1. Status line
        let status_line = format!("HTTP/1.1 {}\r\n", self.status);
        result.extend_from_slice(status_line.as_bytes());

        // 2. Headers (solo Content-Type y Content-Length)
        let headers = format!(
            "Content-Type: {}\r\nContent-Length: {}\r\n",
            self.content_type,
            self.body.len()
        );
        result.extend_from_slice(headers.as_bytes());

        // 3. Línea vacía que separa headers del body
        result.extend_from_slice(b"\r\n");

        // 4. Body
        result.extend_from_slice(&self.body);

        result
    }

    /// Escribe la respuesta completa en el stream y hace flush
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.to_bytes())?;
        writer.flush()
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene el Content-Type de la respuesta
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
