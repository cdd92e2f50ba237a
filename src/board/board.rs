use super::*;
use crate::CHECKERS;
use crate::POINTS;
use serde::Deserialize;
use serde::Serialize;

/// Pure checker placement: 24 points, the bar, and borne-off tallies.
///
/// Mutators assume the move was already validated by the legality
/// functions in [`crate::rules`]; they only `debug_assert!` the
/// ownership invariants they rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    points: [Point; POINTS],
    bar: Sides<u8>,
    borne_off: Sides<u8>,
}

impl Default for Board {
    fn default() -> Self {
        Self::opening()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            points: [Point::empty(); POINTS],
            bar: Sides::default(),
            borne_off: Sides::default(),
        }
    }
    /// Standard starting position, mirrored between the two colors.
    pub fn opening() -> Self {
        Self::empty()
            .with(23, Color::White, 2)
            .with(12, Color::White, 5)
            .with(7, Color::White, 3)
            .with(5, Color::White, 5)
            .with(0, Color::Black, 2)
            .with(11, Color::Black, 5)
            .with(16, Color::Black, 3)
            .with(18, Color::Black, 5)
    }
    pub fn with(mut self, i: usize, color: Color, count: u8) -> Self {
        self.points[i] = Point::stack(color, count);
        self
    }
    pub fn with_bar(mut self, color: Color, count: u8) -> Self {
        self.bar[color] = count;
        self
    }
    pub fn with_borne_off(mut self, color: Color, count: u8) -> Self {
        self.borne_off[color] = count;
        self
    }
}

impl Board {
    pub fn point(&self, i: usize) -> &Point {
        &self.points[i]
    }
    pub fn points(&self) -> &[Point; POINTS] {
        &self.points
    }
    pub fn bar(&self, color: Color) -> u8 {
        self.bar[color]
    }
    pub fn borne_off(&self, color: Color) -> u8 {
        self.borne_off[color]
    }
    pub fn has_won(&self, color: Color) -> bool {
        self.borne_off[color] >= CHECKERS
    }
    /// Indices of points holding at least one checker of `color`.
    pub fn occupied(&self, color: Color) -> impl Iterator<Item = usize> + '_ {
        (0..POINTS).filter(move |&i| self.points[i].holds(color))
    }
    /// Checkers of `color` on points, on the bar, and borne off.
    pub fn checkers(&self, color: Color) -> usize {
        self.occupied(color)
            .map(|i| self.points[i].count() as usize)
            .sum::<usize>()
            + self.bar[color] as usize
            + self.borne_off[color] as usize
    }
    /// Every point is empty-xor-colored and neither side has lost or gained checkers.
    pub fn is_consistent(&self) -> bool {
        self.points.iter().all(Point::is_consistent)
            && Color::all()
                .into_iter()
                .all(|c| self.checkers(c) == CHECKERS as usize)
    }
}

impl Board {
    /// Take one checker of `color` off point `i`.
    pub(crate) fn lift(&mut self, i: usize, color: Color) {
        self.points[i].pop(color);
    }
    /// Take one checker of `color` off the bar.
    pub(crate) fn unbar(&mut self, color: Color) {
        debug_assert!(self.bar[color] > 0, "entering from an empty bar");
        self.bar[color] = self.bar[color].saturating_sub(1);
    }
    /// Put one checker of `color` on point `i`, sending a lone
    /// opposing checker to the bar first. Returns whether it hit.
    pub(crate) fn land(&mut self, i: usize, color: Color) -> bool {
        let point = self.points[i];
        let hit = point.is_blot() && point.color() == Some(color.opponent());
        if hit {
            self.points[i].pop(color.opponent());
            self.bar[color.opponent()] += 1;
        }
        self.points[i].push(color);
        hit
    }
    pub(crate) fn bear(&mut self, color: Color) {
        debug_assert!(self.borne_off[color] < CHECKERS, "bearing off a 16th checker");
        self.borne_off[color] += 1;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for point in self.points.iter() {
            match point.color() {
                Some(Color::White) => write!(f, "w{:<2}", point.count())?,
                Some(Color::Black) => write!(f, "b{:<2}", point.count())?,
                None => write!(f, " . ")?,
            }
        }
        write!(
            f,
            "| bar w{} b{} | off w{} b{}",
            self.bar.white, self.bar.black, self.borne_off.white, self.borne_off.black
        )
    }
}
