use crate::POINTS;
use crate::QUADRANT;
use serde::Deserialize;
use serde::Serialize;

/// One of the two sides. White opens the room and rolls first.
///
/// White travels from point 23 toward point 0, black from 0 toward 23.
/// Everything direction-dependent in the rules is derived from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const fn all() -> [Self; 2] {
        [Self::White, Self::Black]
    }
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
    /// Signed step per pip.
    pub const fn direction(self) -> isize {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }
    /// Virtual point one step past the bear-off edge.
    pub const fn edge(self) -> isize {
        match self {
            Self::White => -1,
            Self::Black => POINTS as isize,
        }
    }
    /// The last six points along the direction of travel.
    pub const fn home(self) -> std::ops::Range<usize> {
        match self {
            Self::White => 0..QUADRANT,
            Self::Black => POINTS - QUADRANT..POINTS,
        }
    }
    pub fn is_home(self, point: usize) -> bool {
        self.home().contains(&point)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Black => write!(f, "black"),
        }
    }
}

impl TryFrom<&str> for Color {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            _ => Err("invalid color"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn opponents_alternate() {
        for color in Color::all() {
            assert_ne!(color, color.opponent());
            assert_eq!(color, color.opponent().opponent());
        }
    }
    #[test]
    fn home_is_end_of_travel() {
        assert!(Color::White.is_home(0));
        assert!(Color::White.is_home(5));
        assert!(!Color::White.is_home(6));
        assert!(Color::Black.is_home(18));
        assert!(Color::Black.is_home(23));
        assert!(!Color::Black.is_home(17));
        for color in Color::all() {
            let last = color.edge() - color.direction();
            assert!(color.is_home(last as usize));
        }
    }
    #[test]
    fn wire_names() {
        assert_eq!(serde_json::to_string(&Color::White).unwrap(), "\"white\"");
        assert_eq!(Color::try_from("black"), Ok(Color::Black));
        assert!(Color::try_from("red").is_err());
    }
}
