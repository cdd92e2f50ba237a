/// Rejection of a `join`, reported privately to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    NotFound,
    Full,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "room not found"),
            Self::Full => write!(f, "room is full"),
        }
    }
}

impl std::error::Error for SessionError {}
