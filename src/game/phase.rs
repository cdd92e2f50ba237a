/// Where a match stands between intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    AwaitingRoll,
    Rolled,
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AwaitingRoll => write!(f, "awaiting roll"),
            Self::Rolled => write!(f, "rolled"),
            Self::GameOver => write!(f, "game over"),
        }
    }
}
