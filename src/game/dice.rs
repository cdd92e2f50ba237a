use super::Roll;
use serde::Serialize;

/// Die faces still available this turn, as a multiset.
/// A double yields four copies of its face, anything else the two faces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Dice(Vec<u8>);

impl Dice {
    pub fn faces(&self) -> &[u8] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, die: u8) -> bool {
        self.0.contains(&die)
    }
    pub fn count(&self, die: u8) -> usize {
        self.0.iter().filter(|&&d| d == die).count()
    }
    /// Remove exactly one occurrence of `die`.
    pub fn consume(&mut self, die: u8) -> bool {
        self.0
            .iter()
            .position(|&d| d == die)
            .map(|i| self.0.remove(i))
            .is_some()
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl From<Roll> for Dice {
    fn from(roll: Roll) -> Self {
        match roll.faces() {
            [a, _] if roll.is_double() => Self(vec![a; 4]),
            [a, b] => Self(vec![a, b]),
        }
    }
}
