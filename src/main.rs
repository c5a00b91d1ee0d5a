//! # Web Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor web estático.
//!
//! Corre sin panel de control: toma la configuración de CLI/entorno, la
//! persiste (lo que el botón de guardar del panel haría) y deja el
//! servidor aceptando conexiones hasta que el proceso muera.

use web_server::config::{Config, ConfigStore};
use web_server::logger::ActivityLogger;
use web_server::server::Server;

fn main() {
    println!("=================================");
    println!("  Simple Web Server");
    println!("=================================\n");

    // Crear configuración desde CLI y variables de entorno
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    println!("⚙️  Configuración:");
    println!("   Puerto:    {}", config.port);
    println!("   Host:      {}", config.host);
    println!("   Web root:  {}", config.web_dir);
    println!("   Log dir:   {}", config.log_dir);
    println!();

    // Persistir la terna {puerto, web root, log dir}, sobrescribiendo la
    // anterior. Un fallo aquí se reporta y no es fatal.
    let store = ConfigStore::new(&config.config_file);
    if let Err(e) = store.save(&config.to_stored()) {
        eprintln!("Error saving config to {}: {}", store.path().display(), e);
    }

    let logger = ActivityLogger::new(&config.log_dir);
    let mut server = Server::new(&config.host, config.status_policy(), logger);

    if let Err(e) = server.start(config.to_stored()) {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }

    println!("[+] Servidor escuchando en {}", config.address());

    // El accept loop corre en background; mantener vivo el proceso
    loop {
        std::thread::park();
    }
}
