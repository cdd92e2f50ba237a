use super::*;
use crate::board::*;
use crate::rules::*;
use serde::Serialize;

/// Outcome of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moved {
    pub play: Play,
    pub color: Color,
    pub hit: bool,
    /// Set when the turn must now pass on its own.
    pub stall: Option<Stall>,
}

/// One match between the two colors.
///
/// Owns the board, the dice pool and the running score, and enforces turn
/// order: roll, then moves until the pool is spent or blocked, then the
/// other color. Every move is re-derived through [`Board::destination`];
/// nothing a client claims about legality is trusted.
///
/// Serializes to the full snapshot clients resynchronize from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(flatten)]
    board: Board,
    turn: Color,
    dice: Dice,
    rolled_dice: Vec<u8>,
    rolled: bool,
    game_over: bool,
    winner: Option<Color>,
    scores: Sides<u32>,
}

impl Default for Game {
    fn default() -> Self {
        Self::from(Board::opening())
    }
}

impl From<Board> for Game {
    fn from(board: Board) -> Self {
        Self {
            board,
            turn: Color::White,
            dice: Dice::default(),
            rolled_dice: Vec::new(),
            rolled: false,
            game_over: false,
            winner: None,
            scores: Sides::default(),
        }
    }
}

impl Game {
    /// Fresh opening position, white to roll, running score kept.
    pub fn rematch(&self) -> Self {
        Self {
            scores: self.scores,
            ..Self::default()
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn turn(&self) -> Color {
        self.turn
    }
    pub fn dice(&self) -> &Dice {
        &self.dice
    }
    pub fn rolled_dice(&self) -> &[u8] {
        &self.rolled_dice
    }
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }
    pub fn scores(&self) -> &Sides<u32> {
        &self.scores
    }
    pub fn is_over(&self) -> bool {
        self.game_over
    }
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.rolled {
            Phase::Rolled
        } else {
            Phase::AwaitingRoll
        }
    }
    /// Legal single moves for the side to play with what is left in the pool.
    pub fn legal(&self) -> Vec<Play> {
        self.board.legal(self.turn, self.dice.faces())
    }
    pub fn has_any_legal_move(&self) -> bool {
        self.board.has_any_legal_move(self.turn, self.dice.faces())
    }
}

impl Game {
    /// Throw the dice for `color`. Reports a stall if nothing can be played.
    pub fn roll(&mut self, color: Color, roll: Roll) -> Result<Option<Stall>, Violation> {
        self.check_turn(color)?;
        if self.rolled {
            return Err(Violation::AlreadyRolled);
        }
        self.rolled = true;
        self.rolled_dice = roll.faces().to_vec();
        self.dice = Dice::from(roll);
        log::debug!("{} rolled {} -> {:?}", color, roll, self.dice.faces());
        Ok((!self.has_any_legal_move()).then_some(Stall::Blocked))
    }

    /// Validate and apply one checker move for `color`.
    pub fn play(&mut self, color: Color, play: Play) -> Result<Moved, Violation> {
        self.check_turn(color)?;
        if !self.rolled {
            return Err(Violation::NotRolled);
        }
        if !self.dice.contains(play.die) {
            return Err(Violation::DieUnavailable(play.die));
        }
        if !self.board.permits(color, &play) {
            return Err(Violation::IllegalMove(play));
        }
        match play.from {
            Origin::Bar => self.board.unbar(color),
            Origin::Point(i) => self.board.lift(i, color),
        }
        let hit = match play.to {
            Target::Off => {
                self.board.bear(color);
                false
            }
            Target::Point(j) => self.board.land(j, color),
        };
        self.dice.consume(play.die);
        debug_assert!(self.board.points().iter().all(Point::is_consistent));
        let stall = if self.board.has_won(color) {
            self.conclude(color);
            None
        } else if self.dice.is_empty() {
            Some(Stall::Exhausted)
        } else if !self.has_any_legal_move() {
            Some(Stall::Blocked)
        } else {
            None
        };
        Ok(Moved {
            play,
            color,
            hit,
            stall,
        })
    }

    /// Hand the turn over unconditionally. Legal moves may remain.
    pub fn end_turn(&mut self, color: Color) -> Result<(), Violation> {
        self.check_turn(color)?;
        self.advance();
        Ok(())
    }

    /// Pass the turn: clear the pool and the roll, flip the side to play.
    pub fn advance(&mut self) {
        if self.game_over {
            return;
        }
        self.turn = self.turn.opponent();
        self.dice.clear();
        self.rolled_dice.clear();
        self.rolled = false;
    }
}

impl Game {
    fn check_turn(&self, color: Color) -> Result<(), Violation> {
        if self.game_over {
            Err(Violation::GameOver)
        } else if self.turn != color {
            Err(Violation::NotYourTurn(color))
        } else {
            Ok(())
        }
    }
    fn conclude(&mut self, color: Color) {
        self.game_over = true;
        self.winner = Some(color);
        self.scores[color] += 1;
        log::info!("{} bore off its last checker", color);
    }
}
