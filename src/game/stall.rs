/// Why the turn has to pass to the opponent without further input.
///
/// The state machine only reports it. Whoever drives the game decides how
/// long to let observers look at the board before calling `Game::advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stall {
    /// Every die has been used.
    Exhausted,
    /// Dice remain but none of them can be played.
    Blocked,
}

impl std::fmt::Display for Stall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted => write!(f, "dice exhausted"),
            Self::Blocked => write!(f, "no legal move"),
        }
    }
}
