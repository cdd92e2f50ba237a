use crate::Arbitrary;
use crate::FACES;
use rand::Rng;

/// The two physical dice as thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll(u8, u8);

impl Roll {
    pub fn faces(&self) -> [u8; 2] {
        [self.0, self.1]
    }
    pub fn is_double(&self) -> bool {
        self.0 == self.1
    }
}

impl Arbitrary for Roll {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        Self(rng.random_range(1..=FACES), rng.random_range(1..=FACES))
    }
}

impl From<(u8, u8)> for Roll {
    fn from((a, b): (u8, u8)) -> Self {
        debug_assert!((1..=FACES).contains(&a) && (1..=FACES).contains(&b));
        Self(a, b)
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn random_rolls_stay_on_the_die() {
        for _ in 0..1000 {
            let roll = Roll::random();
            assert!(roll.faces().iter().all(|f| (1..=FACES).contains(f)));
        }
    }
    #[test]
    fn double_only_on_tie() {
        assert!(Roll::from((4, 4)).is_double());
        assert!(!Roll::from((4, 3)).is_double());
    }
}
