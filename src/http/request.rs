//! # Parsing de la Request Line
//! src/http/request.rs
//!
//! El servidor solo consulta la primera línea del request:
//!
//! ```text
//! GET /sub/dir/archivo.html HTTP/1.1\r\n
//! ```
//!
//! Del request-target se deriva la ruta relativa al web root. Método y
//! versión se capturan para la bitácora pero no se validan: cualquier
//! petición se atiende como una lectura tipo GET.

/// Representa la request line parseada de una conexión
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP tal como llegó (ej: "GET")
    method: String,

    /// Request-target tal como llegó (ej: "/docs/a.txt")
    target: String,

    /// Versión HTTP tal como llegó (ej: "HTTP/1.1")
    version: String,

    /// La request line cruda, para la bitácora
    raw_line: String,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request vacío (el peer cerró sin enviar nada)
    EmptyRequest,

    /// La request line no es UTF-8 válido
    InvalidEncoding,

    /// La request line no tiene al menos método y target
    InvalidRequestLine(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyRequest => write!(f, "Empty request"),
            ParseError::InvalidEncoding => write!(f, "Request line is not valid UTF-8"),
            ParseError::InvalidRequestLine(line) => {
                write!(f, "Invalid request line: {}", line)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Parsea la request line desde los bytes leídos de la conexión
    ///
    /// Solo se considera la primera línea; el resto del request (headers,
    /// body) se ignora.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use web_server::http::Request;
    ///
    /// let request = Request::parse(b"GET /docs/a.txt HTTP/1.1\r\n\r\n").unwrap();
    ///
    /// assert_eq!(request.target(), "/docs/a.txt");
    /// assert_eq!(request.file_path(), "docs/a.txt");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        let text = std::str::from_utf8(buffer).map_err(|_| ParseError::InvalidEncoding)?;

        // lines() corta en \n y descarta el \r final, si lo hay
        let line = text.lines().next().unwrap_or("").trim_end();
        if line.trim().is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        Self::parse_line(line)
    }

    /// Parsea una request line ya extraída
    ///
    /// Formato esperado: `METHOD SP REQUEST-TARGET SP VERSION`. Con menos de
    /// dos tokens la línea es inválida; la versión puede faltar (clientes
    /// HTTP/0.9 no la envían) y se registra vacía.
    pub fn parse_line(line: &str) -> Result<Self, ParseError> {
        let mut parts = line.split_whitespace();

        let method = parts
            .next()
            .ok_or_else(|| ParseError::InvalidRequestLine(line.to_string()))?;
        let target = parts
            .next()
            .ok_or_else(|| ParseError::InvalidRequestLine(line.to_string()))?;
        let version = parts.next().unwrap_or("");

        Ok(Request {
            method: method.to_string(),
            target: target.to_string(),
            version: version.to_string(),
            raw_line: line.to_string(),
        })
    }

    /// Ruta relativa al web root derivada del request-target
    ///
    /// Se quita el `/` inicial; un target vacío o `/` normaliza al
    /// centinela raíz (cadena vacía), que significa "listar el web root".
    ///
    /// # Ejemplo
    /// ```
    /// use web_server::http::Request;
    ///
    /// let root = Request::parse(b"GET / HTTP/1.1\r\n\r\n").unwrap();
    /// assert_eq!(root.file_path(), "");
    ///
    /// let file = Request::parse(b"GET /a.txt HTTP/1.1\r\n\r\n").unwrap();
    /// assert_eq!(file.file_path(), "a.txt");
    /// ```
    pub fn file_path(&self) -> &str {
        let stripped = self.target.strip_prefix('/').unwrap_or(&self.target);
        if stripped == "/" {
            ""
        } else {
            stripped
        }
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene el request-target tal como llegó
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Obtiene la versión HTTP (vacía si el cliente no la envió)
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene la request line cruda
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }
}
