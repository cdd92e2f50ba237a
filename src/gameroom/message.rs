use super::RoomCode;
use crate::board::*;
use crate::game::*;
use crate::rules::*;
use serde::Serialize;

/// Messages sent from server to client over WebSocket.
/// State-affecting events carry the complete [`Game`] snapshot so a client
/// can resynchronize from the latest one alone.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Room opened; the creator plays white.
    Created { code: RoomCode, color: Color },
    /// Both seats filled. Sent to each side with its own color.
    Start {
        color: Color,
        names: Sides<String>,
        game: Game,
    },
    /// Private rejection of a session request.
    Error { msg: String },
    /// Dice thrown for the side to play.
    Rolled {
        dice: Dice,
        #[serde(rename = "rolledDice")]
        rolled_dice: Vec<u8>,
        turn: Color,
    },
    /// A checker moved.
    Moved {
        from: Origin,
        to: Target,
        die: u8,
        color: Color,
        hit: bool,
        game: Game,
    },
    /// The turn passed to the other side.
    Turn { game: Game },
    /// Both sides agreed to play again.
    Rematch { game: Game },
    /// Informational banner.
    Toast { msg: String },
    OpponentLeft,
    Pong,
}

impl ServerMessage {
    pub fn created(code: &RoomCode, color: Color) -> Self {
        Self::Created {
            code: code.clone(),
            color,
        }
    }
    pub fn start(color: Color, names: &Sides<String>, game: &Game) -> Self {
        Self::Start {
            color,
            names: names.clone(),
            game: game.clone(),
        }
    }
    pub fn error(msg: impl ToString) -> Self {
        Self::Error {
            msg: msg.to_string(),
        }
    }
    pub fn rolled(game: &Game) -> Self {
        Self::Rolled {
            dice: game.dice().clone(),
            rolled_dice: game.rolled_dice().to_vec(),
            turn: game.turn(),
        }
    }
    pub fn moved(moved: &Moved, game: &Game) -> Self {
        Self::Moved {
            from: moved.play.from,
            to: moved.play.to,
            die: moved.play.die,
            color: moved.color,
            hit: moved.hit,
            game: game.clone(),
        }
    }
    pub fn turn(game: &Game) -> Self {
        Self::Turn { game: game.clone() }
    }
    pub fn rematch(game: &Game) -> Self {
        Self::Rematch { game: game.clone() }
    }
    pub fn toast(msg: impl ToString) -> Self {
        Self::Toast {
            msg: msg.to_string(),
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .inspect_err(|e| log::error!("failed to serialize server message: {}", e))
            .unwrap_or_default()
    }
}
