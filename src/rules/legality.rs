use super::*;
use crate::FACES;
use crate::POINTS;
use crate::board::*;

/// Point a checker re-entering from the bar lands on.
pub fn entry(color: Color, die: u8) -> usize {
    match color {
        Color::White => POINTS - die as usize,
        Color::Black => die as usize - 1,
    }
}

/// Distinct faces of a dice pool, in first-seen order.
pub fn distinct(dice: &[u8]) -> Vec<u8> {
    dice.iter().fold(Vec::with_capacity(2), |mut faces, &die| {
        if !faces.contains(&die) {
            faces.push(die);
        }
        faces
    })
}

/// Legality is one family of pure functions over a board snapshot.
///
/// [`Board::destination`] is the only place that decides whether a single
/// checker may travel with a single die. Per-move validation compares the
/// claimed target against it, and [`Board::has_any_legal_move`] is its
/// existential closure, so the auto-advance scanner cannot disagree with
/// what a `move` intent would be allowed to do.
impl Board {
    /// Empty, already ours, or a lone opposing checker.
    pub fn can_land(&self, i: usize, color: Color) -> bool {
        let point = self.point(i);
        point.is_empty() || point.holds(color) || point.is_blot()
    }

    /// Nothing on the bar and nothing outside the home quadrant.
    pub fn can_bear_off(&self, color: Color) -> bool {
        self.bar(color) == 0 && self.occupied(color).all(|i| color.is_home(i))
    }

    /// No checker of `color` stands further from the bear-off edge than `from`.
    /// Only this checker may bear off with a die larger than its distance.
    pub fn is_rearmost(&self, from: usize, color: Color) -> bool {
        let home = color.home();
        let behind = match color {
            Color::White => from + 1..home.end,
            Color::Black => home.start..from,
        };
        !behind.into_iter().any(|i| self.point(i).holds(color))
    }

    /// Where a checker of `color` leaving `from` ends up with `die`, if anywhere.
    pub fn destination(&self, color: Color, from: Origin, die: u8) -> Option<Target> {
        if !(1..=FACES).contains(&die) {
            return None;
        }
        match from {
            Origin::Bar => Some(entry(color, die))
                .filter(|_| self.bar(color) > 0)
                .filter(|&i| self.can_land(i, color))
                .map(Target::Point),
            Origin::Point(i) => {
                if i >= POINTS || self.bar(color) > 0 || !self.point(i).holds(color) {
                    return None;
                }
                let to = i as isize + color.direction() * die as isize;
                if (0..POINTS as isize).contains(&to) {
                    Some(to as usize)
                        .filter(|&j| self.can_land(j, color))
                        .map(Target::Point)
                } else if self.can_bear_off(color)
                    && (to == color.edge() || self.is_rearmost(i, color))
                {
                    Some(Target::Off)
                } else {
                    None
                }
            }
        }
    }

    /// Whether `play` is a legal single move for `color`, ignoring the dice pool.
    pub fn permits(&self, color: Color, play: &Play) -> bool {
        self.destination(color, play.from, play.die) == Some(play.to)
    }

    /// Every legal move out of `from`, one per distinct die.
    pub fn moves_from(&self, color: Color, from: Origin, dice: &[u8]) -> Vec<Play> {
        distinct(dice)
            .into_iter()
            .filter_map(|die| {
                self.destination(color, from, die)
                    .map(|to| Play::new(from, to, die))
            })
            .collect()
    }

    /// Places a checker of `color` may move from right now.
    /// The bar, exclusively, while anything is on it.
    pub fn origins(&self, color: Color) -> Vec<Origin> {
        if self.bar(color) > 0 {
            vec![Origin::Bar]
        } else {
            self.occupied(color).map(Origin::Point).collect()
        }
    }

    /// Every legal single move for `color` with the given pool.
    pub fn legal(&self, color: Color, dice: &[u8]) -> Vec<Play> {
        self.origins(color)
            .into_iter()
            .flat_map(|from| self.moves_from(color, from, dice))
            .collect()
    }

    pub fn has_any_legal_move(&self, color: Color, dice: &[u8]) -> bool {
        let faces = distinct(dice);
        self.origins(color).into_iter().any(|from| {
            faces
                .iter()
                .any(|&die| self.destination(color, from, die).is_some())
        })
    }
}
