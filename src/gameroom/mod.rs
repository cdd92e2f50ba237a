//! Live backgammon rooms.
//!
//! Each [`Room`] is an actor task that exclusively owns its [`crate::game::Game`]
//! and consumes a [`Command`] mailbox, so intents for one room are applied
//! strictly one after another. Outbound traffic goes through each seat's
//! [`Outbox`] as JSON [`ServerMessage`]s; inbound frames are parsed by
//! [`Protocol`] into [`ClientMessage`]s.
mod code;
mod command;
mod message;
mod outbox;
mod protocol;
mod room;
mod timer;

pub use code::*;
pub use command::*;
pub use message::*;
pub use outbox::*;
pub use protocol::*;
pub use room::*;
pub use timer::*;
