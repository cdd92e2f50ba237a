use super::*;

/// A single checker move consuming one die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Play {
    pub from: Origin,
    pub to: Target,
    pub die: u8,
}

impl Play {
    pub fn new(from: Origin, to: Target, die: u8) -> Self {
        Self { from, to, die }
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} ({})", self.from, self.to, self.die)
    }
}
