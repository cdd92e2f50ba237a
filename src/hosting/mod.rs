//! Process-wide room registry and the HTTP/WebSocket surface in front of it.
mod casino;
mod config;
mod error;
mod handle;
mod server;
mod session;

pub use casino::*;
pub use config::*;
pub use error::*;
pub use handle::*;
pub use server::*;
pub use session::*;
