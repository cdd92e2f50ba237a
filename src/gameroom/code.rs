use crate::Arbitrary;
use crate::CODE_ALPHABET;
use crate::CODE_LENGTH;
use rand::Rng;
use serde::Serialize;

/// Short shareable room identifier. Anyone holding it can join.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoomCode(String);

impl RoomCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Arbitrary for RoomCode {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        Self(
            (0..CODE_LENGTH)
                .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
                .collect(),
        )
    }
}

/// Codes typed by players are trimmed and upper-cased.
impl From<&str> for RoomCode {
    fn from(s: &str) -> Self {
        Self(s.trim().to_uppercase())
    }
}

impl std::fmt::Display for RoomCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
