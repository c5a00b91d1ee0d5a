//! # Atención de Conexiones
//! src/server/connection.rs
//!
//! Maneja una conexión aceptada de principio a fin: lee la request line con
//! un buffer acotado, la parsea, resuelve la ruta contra el web root,
//! escribe la respuesta y registra el evento en la bitácora.
//!
//! Cada conexión corre en su propio thread y no comparte estado mutable con
//! sus hermanas más allá de la bitácora. Todo error de I/O se atrapa aquí:
//! aborta esta conexión y jamás se propaga al accept loop.

use crate::content::mime;
use crate::content::{Outcome, Resolver};
use crate::http::{Request, Response, StatusCode, StatusPolicy};
use crate::logger::ActivityLogger;
use std::io::Read;
use std::net::TcpStream;

/// Cuerpo de la respuesta a una request line malformada
pub const BAD_REQUEST_BODY: &str = "400 Bad Request | Malformed request line.";

/// Tamaño máximo de lectura para la request line
const MAX_REQUEST_BYTES: usize = 8192;

/// Atiende una conexión aceptada
///
/// Nunca retorna error: los fallos de I/O se registran en la bitácora y
/// terminan solo esta conexión.
pub fn handle_connection(
    stream: TcpStream,
    resolver: &Resolver,
    policy: StatusPolicy,
    logger: &ActivityLogger,
) {
    let peer = stream
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    if let Err(e) = try_handle(stream, &peer, resolver, policy, logger) {
        logger.log(&format!("Error handling client request: {}", e));
    }
}

/// Lee hasta completar la request line
///
/// Acumula lecturas sucesivas hasta ver un `\n` (la línea puede llegar en
/// varios segmentos TCP), llenar el buffer o que el peer cierre. Retorna la
/// cantidad de bytes acumulados.
fn read_request_line(stream: &mut TcpStream, buffer: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;

    while filled < buffer.len() {
        let n = stream.read(&mut buffer[filled..])?;
        if n == 0 {
            break;
        }

        let newline_seen = buffer[filled..filled + n].contains(&b'\n');
        filled += n;
        if newline_seen {
            break;
        }
    }

    Ok(filled)
}

/// Camino principal: parse -> resolve -> write
fn try_handle(
    mut stream: TcpStream,
    peer: &str,
    resolver: &Resolver,
    policy: StatusPolicy,
    logger: &ActivityLogger,
) -> std::io::Result<()> {
    let mut buffer = [0u8; MAX_REQUEST_BYTES];
    let bytes_read = read_request_line(&mut stream, &mut buffer)?;

    if bytes_read == 0 {
        // El peer cerró sin enviar nada: no hay request que atender
        return Ok(());
    }

    let response = match Request::parse(&buffer[..bytes_read]) {
        Ok(request) => {
            logger.log(&format!("Request from {}: {}", peer, request.raw_line()));

            let resolved = resolver.resolve(request.file_path());
            let preferred = match resolved.outcome {
                Outcome::NotFound => StatusCode::NotFound,
                Outcome::File | Outcome::Listing => StatusCode::Ok,
            };

            Response::from_bytes(policy.select(preferred), resolved.content_type, resolved.body)
        }
        Err(e) => {
            logger.log(&format!("Invalid request from {}: {}", peer, e));

            Response::new(
                policy.select(StatusCode::BadRequest),
                mime::DEFAULT_CONTENT_TYPE,
                BAD_REQUEST_BODY,
            )
        }
    };

    // Escribir y cerrar incondicionalmente (sin keep-alive)
    response.write_to(&mut stream)
}
