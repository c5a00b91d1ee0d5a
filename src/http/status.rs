//! # Códigos de Estado HTTP
//! src/http/status.rs
//!
//! Define los códigos de estado que usa el servidor y la política de
//! selección de estado.
//!
//! Históricamente el servidor siempre respondió `200 OK`, incluso cuando el
//! recurso no existía (el "404" viajaba solo en el body). Ese comportamiento
//! se conserva como política por defecto (`StatusPolicy::Legacy`), pero la
//! decisión vive en un único punto (`StatusPolicy::select`) para poder
//! activar los códigos correctos con `StatusPolicy::Strict`.

/// Códigos de estado HTTP que soporta el servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 400 Bad Request - Request line malformada
    BadRequest = 400,

    /// 404 Not Found - El recurso no existe bajo el web root
    NotFound = 404,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use web_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// # Ejemplo
    /// ```
    /// use web_server::http::StatusCode;
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
        }
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

/// Política de selección de código de estado
///
/// Todo camino de respuesta calcula el código "verdadero" (404, 400, 200) y
/// lo pasa por `select`. Es el único lugar donde se decide qué código
/// termina en el wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Comportamiento heredado: siempre 200 OK
    #[default]
    Legacy,

    /// Códigos de estado correctos (404 para no encontrado, 400 para
    /// request line malformada)
    Strict,
}

impl StatusPolicy {
    /// Decide el código que va en la status line
    ///
    /// # Ejemplo
    /// ```
    /// use web_server::http::{StatusCode, StatusPolicy};
    ///
    /// assert_eq!(StatusPolicy::Legacy.select(StatusCode::NotFound), StatusCode::Ok);
    /// assert_eq!(StatusPolicy::Strict.select(StatusCode::NotFound), StatusCode::NotFound);
    /// ```
    pub fn select(&self, preferred: StatusCode) -> StatusCode {
        match self {
            StatusPolicy::Legacy => StatusCode::Ok,
            StatusPolicy::Strict => preferred,
        }
    }
}
