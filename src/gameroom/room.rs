use super::*;
use crate::Arbitrary;
use crate::board::*;
use crate::game::*;
use crate::rules::Play;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::WeakUnboundedSender;
use tokio::sync::mpsc::unbounded_channel;
use tokio::task::JoinHandle;

/// A turn advance waiting for its observation delay.
#[derive(Debug)]
struct Pending {
    ticket: u64,
    task: JoinHandle<()>,
}

/// Central coordinator for one backgammon match.
///
/// Runs as its own task and is the single writer of its game: every
/// intent arrives through the mailbox, is validated and applied, and the
/// result is broadcast before the next command is looked at. Rule
/// violations are logged and dropped without a reply.
///
/// Deferred turn advances are timer tasks that post back into the mailbox
/// through a weak sender. If the room is gone by then, nothing happens.
#[derive(Debug)]
pub struct Room {
    code: RoomCode,
    timers: TimerConfig,
    names: Sides<String>,
    seats: Sides<Option<Outbox>>,
    game: Option<Game>,
    votes: Sides<bool>,
    mailbox: WeakUnboundedSender<Command>,
    pending: Option<Pending>,
    ticket: u64,
}

impl Room {
    /// Open a room with its creator seated as white and start its task.
    pub fn spawn(
        code: RoomCode,
        name: String,
        outbox: Outbox,
        timers: TimerConfig,
    ) -> UnboundedSender<Command> {
        let (room, tx, rx) = Self::new(code, name, outbox, timers);
        tokio::spawn(room.run(rx));
        tx
    }

    fn new(
        code: RoomCode,
        name: String,
        outbox: Outbox,
        timers: TimerConfig,
    ) -> (Self, UnboundedSender<Command>, UnboundedReceiver<Command>) {
        let (tx, rx) = unbounded_channel();
        let room = Self {
            code,
            timers,
            names: Sides::new(name, String::new()),
            seats: Sides::new(Some(outbox), None),
            game: None,
            votes: Sides::default(),
            mailbox: tx.downgrade(),
            pending: None,
            ticket: 0,
        };
        (room, tx, rx)
    }

    async fn run(mut self, mut rx: UnboundedReceiver<Command>) {
        log::debug!("[room {}] open", self.code);
        while let Some(command) = rx.recv().await {
            self.handle(command);
        }
        log::debug!("[room {}] mailbox closed", self.code);
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Join { name, outbox } => self.join(name, outbox),
            Command::Leave(color) => self.leave(color),
            Command::Advance(ticket) => self.advance(ticket),
            Command::Act(color, intent) => {
                let result = match intent {
                    Intent::Roll => self.roll(color),
                    Intent::Move(play) => self.play(color, play),
                    Intent::EndTurn => self.end_turn(color),
                    Intent::Rematch => self.rematch(color),
                };
                if let Err(e) = result {
                    log::debug!("[room {}] ignored {:?} from {}: {}", self.code, intent, color, e);
                }
            }
        }
    }
}

impl Room {
    fn join(&mut self, name: String, outbox: Outbox) {
        if self.seats.black.is_some() {
            log::warn!("[room {}] black seat already taken", self.code);
            return;
        }
        let game = Game::default();
        self.seats.black = Some(outbox);
        self.names.black = name;
        self.votes = Sides::default();
        for color in Color::all() {
            self.unicast(color, &ServerMessage::start(color, &self.names, &game));
        }
        self.game = Some(game);
        self.broadcast(&ServerMessage::toast("Game started! White rolls first"));
        log::info!(
            "[room {}] {} vs {}",
            self.code,
            self.names.white,
            self.names.black
        );
    }

    fn leave(&mut self, color: Color) {
        self.seats[color] = None;
        self.unicast(color.opponent(), &ServerMessage::OpponentLeft);
        log::info!("[room {}] {} left", self.code, color);
    }

    fn roll(&mut self, color: Color) -> Result<(), Violation> {
        let game = self.game()?;
        let stall = game.roll(color, Roll::random())?;
        let msg = ServerMessage::rolled(game);
        self.broadcast(&msg);
        if let Some(stall) = stall {
            self.schedule(stall);
        }
        Ok(())
    }

    fn play(&mut self, color: Color, play: Play) -> Result<(), Violation> {
        let game = self.game()?;
        let moved = game.play(color, play)?;
        let winner = game.winner();
        let msg = ServerMessage::moved(&moved, game);
        self.broadcast(&msg);
        if let Some(stall) = moved.stall {
            self.schedule(stall);
        }
        if let Some(winner) = winner {
            log::info!("[room {}] {} wins", self.code, winner);
        }
        Ok(())
    }

    fn end_turn(&mut self, color: Color) -> Result<(), Violation> {
        let game = self.game()?;
        game.end_turn(color)?;
        let msg = ServerMessage::turn(game);
        self.cancel();
        self.broadcast(&msg);
        Ok(())
    }

    fn rematch(&mut self, color: Color) -> Result<(), Violation> {
        let game = self.game.as_ref().ok_or(Violation::NotStarted)?;
        self.votes[color] = true;
        if self.votes.white && self.votes.black {
            let game = game.rematch();
            let msg = ServerMessage::rematch(&game);
            self.game = Some(game);
            self.votes = Sides::default();
            self.cancel();
            self.broadcast(&msg);
            log::info!("[room {}] rematch", self.code);
        } else {
            self.unicast(color, &ServerMessage::toast("Rematch requested..."));
        }
        Ok(())
    }

    fn advance(&mut self, ticket: u64) {
        if self.pending.as_ref().map(|p| p.ticket) != Some(ticket) {
            log::debug!("[room {}] stale advance {}", self.code, ticket);
            return;
        }
        self.pending = None;
        if let Some(game) = self.game.as_mut() {
            game.advance();
            let msg = ServerMessage::turn(game);
            self.broadcast(&msg);
        }
    }
}

impl Room {
    fn game(&mut self) -> Result<&mut Game, Violation> {
        self.game.as_mut().ok_or(Violation::NotStarted)
    }

    /// Replace any pending advance with one due after the delay for `stall`.
    fn schedule(&mut self, stall: Stall) {
        self.cancel();
        self.ticket += 1;
        let ticket = self.ticket;
        let delay = self.timers.delay(stall);
        let mailbox = self.mailbox.clone();
        let code = self.code.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match mailbox.upgrade() {
                Some(tx) => drop(tx.send(Command::Advance(ticket))),
                None => log::debug!("[room {}] closed before advance {}", code, ticket),
            }
        });
        log::debug!("[room {}] {}, advancing in {:?}", self.code, stall, delay);
        self.pending = Some(Pending { ticket, task });
    }

    fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.task.abort();
        }
    }

    fn unicast(&self, color: Color, msg: &ServerMessage) {
        if let Some(outbox) = self.seats[color].as_ref() {
            if !outbox.send(msg) {
                log::warn!("[room {}] failed unicast to {}", self.code, color);
            }
        }
    }

    fn broadcast(&self, msg: &ServerMessage) {
        let json = msg.to_json();
        self.seats
            .iter()
            .filter_map(|(color, seat)| seat.as_ref().map(|outbox| (color, outbox)))
            .filter(|(_, outbox)| !outbox.post(json.clone()))
            .for_each(|(color, _)| log::warn!("[room {}] failed broadcast to {}", self.code, color));
    }
}

impl Drop for Room {
    fn drop(&mut self) {
        self.cancel();
    }
}
