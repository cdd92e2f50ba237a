use crate::board::Color;
use crate::rules::Play;

/// An intent the rules refuse. The game is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    NotYourTurn(Color),
    GameOver,
    AlreadyRolled,
    NotRolled,
    DieUnavailable(u8),
    IllegalMove(Play),
    NotStarted,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotYourTurn(c) => write!(f, "not {}'s turn", c),
            Self::GameOver => write!(f, "game is over"),
            Self::AlreadyRolled => write!(f, "dice already rolled"),
            Self::NotRolled => write!(f, "dice not rolled"),
            Self::DieUnavailable(d) => write!(f, "no {} left in the pool", d),
            Self::IllegalMove(p) => write!(f, "illegal move {}", p),
            Self::NotStarted => write!(f, "game has not started"),
        }
    }
}

impl std::error::Error for Violation {}
