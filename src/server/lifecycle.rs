//! # Ciclo de Vida del Servidor
//! src/server/lifecycle.rs
//!
//! Dos piezas:
//!
//! - `Server`: dueño del socket de escucha y de la bandera de ejecución.
//!   `start` hace bind y lanza el accept loop en su propio thread; cada
//!   conexión aceptada se atiende en un thread independiente. `stop` baja
//!   la bandera, despierta el accept bloqueado con una conexión local y
//!   espera a que el loop suelte el socket.
//!
//! - `Controller`: la interfaz que un panel de control consume. Convierte
//!   start/stop en comandos por canal (`Command::Start`, `Command::Stop`)
//!   procesados por un único thread de control, de modo que las llamadas
//!   nunca bloquean a quien las hace y un stop no puede correr en paralelo
//!   con un start sobre el mismo estado.

use crate::config::StoredConfig;
use crate::content::Resolver;
use crate::http::StatusPolicy;
use crate::logger::ActivityLogger;
use crate::server::connection;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// Errores de las transiciones start/stop
#[derive(Debug)]
pub enum ServerError {
    /// start con el servidor ya corriendo
    AlreadyRunning,

    /// stop con el servidor detenido
    NotRunning,

    /// El bind del puerto falló (puerto ocupado, sin permisos, etc.)
    Bind(std::io::Error),
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::AlreadyRunning => write!(f, "Server is already running"),
            ServerError::NotRunning => write!(f, "Server is not running"),
            ServerError::Bind(e) => write!(f, "Could not bind listening socket: {}", e),
        }
    }
}

impl std::error::Error for ServerError {}

/// Estado de un servidor en ejecución
///
/// Solo existe entre un start exitoso y el stop correspondiente.
struct Listening {
    /// Bandera que el accept loop consulta en cada vuelta
    running: Arc<AtomicBool>,

    /// Dirección real del socket (con el puerto ya resuelto si se pidió 0)
    local_addr: SocketAddr,

    /// Thread del accept loop
    accept_thread: JoinHandle<()>,
}

/// Servidor web: bind, accept loop y stop limpio
pub struct Server {
    /// Host/IP donde hace bind
    host: String,

    /// Política de selección de código de estado
    policy: StatusPolicy,

    /// Bitácora compartida con los handlers de conexión
    logger: ActivityLogger,

    /// Estado de escucha; None cuando está detenido
    listening: Option<Listening>,
}

impl Server {
    /// Crea un servidor detenido
    pub fn new(host: &str, policy: StatusPolicy, logger: ActivityLogger) -> Self {
        Self {
            host: host.to_string(),
            policy,
            logger,
            listening: None,
        }
    }

    /// true si el servidor está aceptando conexiones
    pub fn is_running(&self) -> bool {
        self.listening.is_some()
    }

    /// Dirección real de escucha (None si está detenido)
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listening.as_ref().map(|l| l.local_addr)
    }

    /// Arranca el servidor con la configuración dada
    ///
    /// Hace el bind de forma síncrona (el fallo se reporta al llamador y a
    /// la bitácora) y deja el accept loop corriendo en background. Cada
    /// conexión aceptada se despacha a su propio thread, así ninguna
    /// conexión bloquea al loop ni a sus hermanas.
    pub fn start(&mut self, config: StoredConfig) -> Result<(), ServerError> {
        if self.listening.is_some() {
            return Err(ServerError::AlreadyRunning);
        }

        let address = format!("{}:{}", self.host, config.port);
        let listener = match TcpListener::bind(&address) {
            Ok(listener) => listener,
            Err(e) => {
                self.logger.log(&format!("Error starting server: {}", e));
                return Err(ServerError::Bind(e));
            }
        };
        let local_addr = listener.local_addr().map_err(ServerError::Bind)?;

        let running = Arc::new(AtomicBool::new(true));
        self.logger
            .log(&format!("Server started on port {}", local_addr.port()));

        let accept_thread = {
            let running = Arc::clone(&running);
            let logger = self.logger.clone();
            let policy = self.policy;
            let resolver = Resolver::new(config.web_dir.clone());

            thread::spawn(move || {
                Self::accept_loop(listener, running, resolver, policy, logger);
            })
        };

        self.listening = Some(Listening {
            running,
            local_addr,
            accept_thread,
        });
        Ok(())
    }

    /// Detiene el servidor
    ///
    /// Baja la bandera, despierta el accept bloqueado con una conexión
    /// local y espera a que el loop termine y suelte el socket. El fallo de
    /// la conexión de despertar es parte del apagado esperado y no se
    /// registra como error operativo.
    pub fn stop(&mut self) -> Result<(), ServerError> {
        let listening = self.listening.take().ok_or(ServerError::NotRunning)?;

        listening.running.store(false, Ordering::SeqCst);
        let _ = TcpStream::connect(listening.local_addr);
        let _ = listening.accept_thread.join();

        self.logger.log("Server stopped");
        Ok(())
    }

    /// Accept loop: corre hasta que la bandera baje
    ///
    /// Los errores de accept con el servidor corriendo se registran y el
    /// loop continúa; nada de lo que pase en una conexión lo puede tumbar.
    fn accept_loop(
        listener: TcpListener,
        running: Arc<AtomicBool>,
        resolver: Resolver,
        policy: StatusPolicy,
        logger: ActivityLogger,
    ) {
        let resolver = Arc::new(resolver);

        for stream in listener.incoming() {
            if !running.load(Ordering::SeqCst) {
                // stop() ya pidió el apagado: la conexión que nos despertó
                // se descarta y el socket se suelta al salir
                break;
            }

            match stream {
                Ok(stream) => {
                    let resolver = Arc::clone(&resolver);
                    let logger = logger.clone();

                    thread::spawn(move || {
                        connection::handle_connection(stream, &resolver, policy, &logger);
                    });
                }
                Err(e) => {
                    logger.log(&format!("Error accepting connection: {}", e));
                }
            }
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

/// Comandos que el panel de control envía al thread de control
#[derive(Debug)]
pub enum Command {
    /// Arrancar con esta configuración
    Start(StoredConfig),

    /// Detener el servidor
    Stop,
}

/// Estado observable del controller
#[derive(Debug, Clone, Default)]
struct ControllerState {
    /// Última configuración con la que se arrancó (o defaults)
    config: StoredConfig,

    /// true entre un start exitoso y el stop siguiente
    running: bool,
}

/// Fachada no bloqueante sobre el servidor
///
/// Reemplaza las llamadas directas desde el hilo de UI:
/// cada operación se encola y la procesa un único thread de control, así
/// start y stop quedan serializados entre sí.
pub struct Controller {
    tx: Sender<Command>,
    state: Arc<Mutex<ControllerState>>,
}

impl Controller {
    /// Crea el controller y su thread de control
    pub fn new(host: &str, policy: StatusPolicy, logger: ActivityLogger) -> Self {
        let (tx, rx) = mpsc::channel::<Command>();
        let state = Arc::new(Mutex::new(ControllerState::default()));

        {
            let state = Arc::clone(&state);
            let mut server = Server::new(host, policy, logger);

            thread::spawn(move || {
                for command in rx {
                    match command {
                        Command::Start(config) => {
                            // start ya registra el bind (éxito o fallo) en la bitácora
                            let started = server.start(config.clone()).is_ok();
                            let mut state = state.lock().unwrap();
                            if started {
                                state.config = config;
                                // Reflejar el puerto real (relevante si se pidió 0)
                                if let Some(addr) = server.local_addr() {
                                    state.config.port = addr.port();
                                }
                                state.running = true;
                            }
                        }
                        Command::Stop => {
                            // Stop sin servidor corriendo es un no-op seguro
                            if server.stop().is_ok() {
                                state.lock().unwrap().running = false;
                            }
                        }
                    }
                }
                // Canal cerrado: apagar si quedó corriendo
                let _ = server.stop();
            });
        }

        Self { tx, state }
    }

    /// Encola un arranque con la terna dada y retorna de inmediato
    pub fn start_server(&self, port: u16, web_dir: &str, log_dir: &str) {
        let _ = self.tx.send(Command::Start(StoredConfig {
            port,
            web_dir: web_dir.to_string(),
            log_dir: log_dir.to_string(),
        }));
    }

    /// Encola un stop y retorna de inmediato
    pub fn stop_server(&self) {
        let _ = self.tx.send(Command::Stop);
    }

    /// true entre un start exitoso y el stop siguiente
    pub fn is_running(&self) -> bool {
        self.state.lock().unwrap().running
    }

    /// Puerto de la última configuración arrancada
    pub fn current_port(&self) -> u16 {
        self.state.lock().unwrap().config.port
    }

    /// Web root de la última configuración arrancada
    pub fn current_web_dir(&self) -> String {
        self.state.lock().unwrap().config.web_dir.clone()
    }

    /// Directorio de bitácora de la última configuración arrancada
    pub fn current_log_dir(&self) -> String {
        self.state.lock().unwrap().config.log_dir.clone()
    }
}
