use crate::POINTS;
use serde::Deserialize;
use serde::Serialize;

/// Wire form shared by [`Origin`] and [`Target`]: a point index or a label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum Spot {
    Index(i64),
    Label(String),
}

/// Where a moving checker comes from: `"bar"` or a point index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Spot", into = "Spot")]
pub enum Origin {
    Bar,
    Point(usize),
}

/// Where a moving checker goes: `"off"` or a point index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Spot", into = "Spot")]
pub enum Target {
    Off,
    Point(usize),
}

fn index(i: i64) -> Result<usize, &'static str> {
    usize::try_from(i)
        .ok()
        .filter(|&i| i < POINTS)
        .ok_or("point index out of range")
}

impl TryFrom<Spot> for Origin {
    type Error = &'static str;
    fn try_from(spot: Spot) -> Result<Self, Self::Error> {
        match spot {
            Spot::Index(i) => index(i).map(Self::Point),
            Spot::Label(s) if s == "bar" => Ok(Self::Bar),
            Spot::Label(_) => Err("origin must be a point or \"bar\""),
        }
    }
}

impl TryFrom<Spot> for Target {
    type Error = &'static str;
    fn try_from(spot: Spot) -> Result<Self, Self::Error> {
        match spot {
            Spot::Index(i) => index(i).map(Self::Point),
            Spot::Label(s) if s == "off" => Ok(Self::Off),
            Spot::Label(_) => Err("target must be a point or \"off\""),
        }
    }
}

impl From<Origin> for Spot {
    fn from(origin: Origin) -> Self {
        match origin {
            Origin::Bar => Self::Label(String::from("bar")),
            Origin::Point(i) => Self::Index(i as i64),
        }
    }
}

impl From<Target> for Spot {
    fn from(target: Target) -> Self {
        match target {
            Target::Off => Self::Label(String::from("off")),
            Target::Point(i) => Self::Index(i as i64),
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bar => write!(f, "bar"),
            Self::Point(i) => write!(f, "{}", i),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Point(i) => write!(f, "{}", i),
        }
    }
}
