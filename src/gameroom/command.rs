use super::Outbox;
use crate::board::Color;
use crate::rules::Play;

/// What a seated player asks of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Roll,
    Move(Play),
    EndTurn,
    Rematch,
}

/// Mailbox entries for a room actor. The room handles them one at a time,
/// which is the only way its game is ever mutated.
#[derive(Debug)]
pub enum Command {
    /// Second player takes the black seat; the game begins.
    Join { name: String, outbox: Outbox },
    /// A seated player acts.
    Act(Color, Intent),
    /// A seated player's connection closed.
    Leave(Color),
    /// A scheduled turn advance came due. Stale tickets are ignored.
    Advance(u64),
}
