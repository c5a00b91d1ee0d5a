//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Este módulo implementa el lado TCP del servidor:
//!
//! 1. `lifecycle`: bind del puerto, accept loop y stop limpio, más la
//!    fachada por comandos (`Controller`) que consume un panel de control
//! 2. `connection`: atención de una conexión aceptada de principio a fin

pub mod connection;
pub mod lifecycle;

// Re-exportar para facilitar el uso
pub use connection::BAD_REQUEST_BODY;
pub use lifecycle::{Command, Controller, Server, ServerError};
