use crate::board::Sides;
use crate::gameroom::Command;
use crate::gameroom::Outbox;
use crate::gameroom::RoomCode;
use tokio::sync::mpsc::UnboundedSender;

/// Registry entry for a running room.
/// Mirrors the room's seats so liveness and capacity can be checked
/// without a round trip through its mailbox.
#[derive(Debug)]
pub struct RoomHandle {
    pub code: RoomCode,
    pub tx: UnboundedSender<Command>,
    pub seats: Sides<Option<Outbox>>,
}

impl RoomHandle {
    pub fn new(code: RoomCode, tx: UnboundedSender<Command>, creator: Outbox) -> Self {
        Self {
            code,
            tx,
            seats: Sides::new(Some(creator), None),
        }
    }
    /// Whether either seat still has an open connection.
    pub fn alive(&self) -> bool {
        self.seats
            .iter()
            .any(|(_, seat)| seat.as_ref().is_some_and(Outbox::alive))
    }
    /// Black has been claimed. Seats are single-shot, so this never reverts.
    pub fn is_full(&self) -> bool {
        self.seats.black.is_some()
    }
}
