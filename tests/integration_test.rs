//! Tests de integración del servidor web
//! tests/integration_test.rs
//!
//! Cada test levanta su propio servidor en un puerto efímero sobre un web
//! root desechable y habla HTTP crudo por el socket, igual que lo haría un
//! cliente cualquiera.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::thread;
use std::time::Duration;

use web_server::config::StoredConfig;
use web_server::http::StatusPolicy;
use web_server::logger::ActivityLogger;
use web_server::server::Server;

/// Bytes con la firma PNG para probar cuerpos binarios
const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0xFF];

/// Servidor en ejecución más los directorios que lo respaldan
struct TestServer {
    server: Server,
    addr: SocketAddr,
    logger: ActivityLogger,
    root: tempfile::TempDir,
    _logs: tempfile::TempDir,
}

impl TestServer {
    /// Levanta un servidor sobre un web root de ejemplo:
    ///
    /// ```text
    /// a.txt            ("hello")
    /// style.css
    /// logo.png         (binario)
    /// docs/
    ///   pagina.html
    /// ```
    fn start(policy: StatusPolicy) -> Self {
        let root = tempfile::tempdir().expect("web root");
        std::fs::write(root.path().join("a.txt"), b"hello").expect("a.txt");
        std::fs::write(root.path().join("style.css"), b"body { margin: 0; }").expect("style.css");
        std::fs::write(root.path().join("logo.png"), PNG_BYTES).expect("logo.png");
        std::fs::create_dir(root.path().join("docs")).expect("docs/");
        std::fs::write(
            root.path().join("docs").join("pagina.html"),
            b"<html>docs</html>",
        )
        .expect("pagina.html");

        let logs = tempfile::tempdir().expect("log dir");
        let logger = ActivityLogger::new(logs.path());

        let mut server = Server::new("127.0.0.1", policy, logger.clone());
        server
            .start(StoredConfig {
                port: 0,
                web_dir: root.path().to_string_lossy().into_owned(),
                log_dir: logs.path().to_string_lossy().into_owned(),
            })
            .expect("start server");
        let addr = server.local_addr().expect("local addr");

        Self {
            server,
            addr,
            logger,
            root,
            _logs: logs,
        }
    }
}

/// Helper: envía un GET y retorna la response completa como String
fn send_request(addr: SocketAddr, path: &str) -> String {
    String::from_utf8_lossy(&send_raw(
        addr,
        format!("GET {} HTTP/1.1\r\n\r\n", path).as_bytes(),
    ))
    .into_owned()
}

/// Helper: envía bytes crudos y retorna la response completa
fn send_raw(addr: SocketAddr, raw: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).expect("connect");
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .expect("read timeout");
    stream
        .set_write_timeout(Some(Duration::from_secs(5)))
        .expect("write timeout");

    stream.write_all(raw).expect("write request");
    stream.flush().expect("flush");
    stream
        .shutdown(std::net::Shutdown::Write)
        .expect("shutdown write");

    let mut response = Vec::new();
    stream.read_to_end(&mut response).expect("read response");
    response
}

/// Helper: extrae el body de una response HTTP
fn extract_body(response: &str) -> &str {
    match response.find("\r\n\r\n") {
        Some(pos) => &response[pos + 4..],
        None => "",
    }
}

/// Helper: extrae el valor de un header
fn header_value<'a>(response: &'a str, name: &str) -> Option<&'a str> {
    response
        .lines()
        .take_while(|line| !line.is_empty())
        .find_map(|line| line.strip_prefix(&format!("{}: ", name)))
}

#[test]
fn test_file_request_returns_exact_bytes() {
    let ts = TestServer::start(StatusPolicy::Legacy);

    // Ejemplo del contrato: a.txt contiene "hello"
    let response = send_request(ts.addr, "/a.txt");

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(header_value(&response, "Content-Type"), Some("text/plain"));
    assert_eq!(header_value(&response, "Content-Length"), Some("5"));
    assert_eq!(extract_body(&response), "hello");
}

#[test]
fn test_content_types_follow_extension_table() {
    let ts = TestServer::start(StatusPolicy::Legacy);

    let css = send_request(ts.addr, "/style.css");
    assert_eq!(header_value(&css, "Content-Type"), Some("text/css"));

    let html = send_request(ts.addr, "/docs/pagina.html");
    assert_eq!(header_value(&html, "Content-Type"), Some("text/html"));

    let png = send_request(ts.addr, "/logo.png");
    assert_eq!(header_value(&png, "Content-Type"), Some("image/png"));
}

#[test]
fn test_binary_body_uncorrupted() {
    let ts = TestServer::start(StatusPolicy::Legacy);

    let response = send_raw(ts.addr, b"GET /logo.png HTTP/1.1\r\n\r\n");
    let body_start = response
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("separator")
        + 4;

    assert_eq!(&response[body_start..], PNG_BYTES);
}

#[test]
fn test_root_listing_example() {
    let ts = TestServer::start(StatusPolicy::Legacy);

    // GET / lista el web root: una entrada por hijo, sin enlace al padre
    let response = send_request(ts.addr, "/");

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(header_value(&response, "Content-Type"), Some("text/html"));

    let body = extract_body(&response);
    assert!(body.contains("<li><a href=\"a.txt\">a.txt</a></li>"));
    assert!(body.contains("<li><a href=\"docs/\">docs</a></li>"));
    assert_eq!(body.matches("a.txt").count(), 2); // href y texto, una sola entrada
    assert!(!body.contains("../"));
}

#[test]
fn test_subdirectory_listing_has_parent_link() {
    let ts = TestServer::start(StatusPolicy::Legacy);

    let response = send_request(ts.addr, "/docs");
    let body = extract_body(&response);

    assert!(body.contains("<li><a href=\"../\">.. (Back)</a></li>"));
    assert!(body.contains("pagina.html"));
}

#[test]
fn test_missing_resource_body_is_literal() {
    let ts = TestServer::start(StatusPolicy::Legacy);

    let response = send_request(ts.addr, "/no-existe.txt");

    // Comportamiento heredado: 200 con el cuerpo 404 literal
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(
        extract_body(&response),
        "404 Not Found | The requested resource is not available."
    );
}

#[test]
fn test_strict_policy_emits_real_status_codes() {
    let ts = TestServer::start(StatusPolicy::Strict);

    let missing = send_request(ts.addr, "/no-existe.txt");
    assert!(missing.starts_with("HTTP/1.1 404 Not Found\r\n"));

    let malformed = String::from_utf8_lossy(&send_raw(ts.addr, b"GET\r\n\r\n")).into_owned();
    assert!(malformed.starts_with("HTTP/1.1 400 Bad Request\r\n"));

    let ok = send_request(ts.addr, "/a.txt");
    assert!(ok.starts_with("HTTP/1.1 200 OK\r\n"));
}

#[test]
fn test_content_length_matches_body() {
    let ts = TestServer::start(StatusPolicy::Legacy);

    for path in ["/a.txt", "/", "/docs", "/no-existe", "/style.css"] {
        let response = send_raw(ts.addr, format!("GET {} HTTP/1.1\r\n\r\n", path).as_bytes());
        let text = String::from_utf8_lossy(&response);

        let declared: usize = header_value(&text, "Content-Length")
            .unwrap_or_else(|| panic!("sin Content-Length para {}", path))
            .parse()
            .expect("Content-Length numérico");

        let body_start = response
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("separator")
            + 4;
        assert_eq!(
            response.len() - body_start,
            declared,
            "Content-Length incorrecto para {}",
            path
        );
    }
}

#[test]
fn test_traversal_cannot_escape_web_root() {
    let ts = TestServer::start(StatusPolicy::Legacy);

    // Archivo fuera del root que no debe ser alcanzable
    let secret = ts.root.path().parent().unwrap().join("secreto-integration.txt");
    let _ = std::fs::write(&secret, b"secreto");

    let response = send_request(ts.addr, "/../secreto-integration.txt");
    assert_eq!(
        extract_body(&response),
        "404 Not Found | The requested resource is not available."
    );

    let _ = std::fs::remove_file(&secret);
}

#[test]
fn test_concurrent_requests_get_independent_bodies() {
    let ts = TestServer::start(StatusPolicy::Legacy);
    for i in 0..50 {
        std::fs::write(
            ts.root.path().join(format!("c{}.txt", i)),
            format!("cuerpo independiente {}", i),
        )
        .expect("archivo de concurrencia");
    }

    let addr = ts.addr;
    let handles: Vec<_> = (0..50)
        .map(|i| {
            thread::spawn(move || {
                let response = send_request(addr, &format!("/c{}.txt", i));
                assert_eq!(
                    extract_body(&response),
                    format!("cuerpo independiente {}", i),
                    "respuesta corrupta para c{}.txt",
                    i
                );
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_stop_refuses_then_restart_accepts() {
    let mut ts = TestServer::start(StatusPolicy::Legacy);
    let first_addr = ts.addr;

    assert!(send_request(first_addr, "/a.txt").contains("200 OK"));

    ts.server.stop().expect("stop");
    assert!(
        TcpStream::connect(first_addr).is_err(),
        "el puerto debería rechazar conexiones tras stop"
    );

    // Nuevo start en otro puerto libre
    ts.server
        .start(StoredConfig {
            port: 0,
            web_dir: ts.root.path().to_string_lossy().into_owned(),
            log_dir: ts._logs.path().to_string_lossy().into_owned(),
        })
        .expect("restart");
    let second_addr = ts.server.local_addr().unwrap();

    let response = send_request(second_addr, "/a.txt");
    assert_eq!(extract_body(&response), "hello");
}

#[test]
fn test_requests_are_logged_with_peer() {
    let ts = TestServer::start(StatusPolicy::Legacy);

    send_request(ts.addr, "/a.txt");
    send_request(ts.addr, "/docs");

    // Los handlers corren en sus propios threads; dar tiempo a la bitácora
    thread::sleep(Duration::from_millis(100));

    let entries = ts.logger.entries();
    assert!(entries
        .iter()
        .any(|l| l.contains("Request from 127.0.0.1") && l.contains("GET /a.txt HTTP/1.1")));
    assert!(entries
        .iter()
        .any(|l| l.contains("GET /docs HTTP/1.1")));

    // Y cada evento llegó completo al archivo diario
    let content = std::fs::read_to_string(ts.logger.current_log_file()).expect("log file");
    for line in content.lines() {
        assert!(line.starts_with('['), "línea intercalada: {:?}", line);
    }
    assert!(content.contains("Server started on port"));
    assert!(content.contains("GET /a.txt HTTP/1.1"));
}
