use super::*;
use crate::board::Color;
use crate::gameroom::*;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;

/// Where a connection sits: which room, which color.
#[derive(Debug, Clone)]
pub struct Seat {
    pub code: RoomCode,
    pub color: Color,
    pub room: UnboundedSender<Command>,
}

impl Seat {
    pub fn new(code: RoomCode, color: Color, room: UnboundedSender<Command>) -> Self {
        Self { code, color, room }
    }
}

/// One client connection.
///
/// Unseated, it may only `create`, `join` or `ping`. Once seated, game
/// intents are forwarded to its room tagged with its color, and further
/// `create`/`join` are ignored.
#[derive(Debug)]
pub struct Session {
    casino: Arc<Casino>,
    outbox: Outbox,
    seat: Option<Seat>,
}

impl Session {
    pub fn new(casino: Arc<Casino>, outbox: Outbox) -> Self {
        Self {
            casino,
            outbox,
            seat: None,
        }
    }
    pub fn seat(&self) -> Option<&Seat> {
        self.seat.as_ref()
    }

    /// Handle one inbound text frame. Malformed frames are dropped.
    pub async fn receive(&mut self, text: &str) {
        match Protocol::decode(text) {
            Ok(msg) => self.dispatch(msg).await,
            Err(e) => log::debug!("[bridge {}] {}", self.tag(), e),
        }
    }

    pub async fn dispatch(&mut self, msg: ClientMessage) {
        match msg {
            ClientMessage::Ping => {
                self.outbox.send(&ServerMessage::Pong);
            }
            ClientMessage::Create { name } => self.create(name).await,
            ClientMessage::Join { code, name } => self.join(&code, name).await,
            msg => self.forward(&msg),
        }
    }

    /// The connection is gone.
    pub fn close(self) {
        match self.seat.as_ref() {
            Some(seat) => self.casino.depart(seat),
            None => log::debug!("[bridge -] closed unseated"),
        }
    }
}

impl Session {
    async fn create(&mut self, name: Option<String>) {
        if self.seat.is_some() {
            log::debug!("[bridge {}] already seated, ignoring create", self.tag());
            return;
        }
        let name = Protocol::name(name, "Player 1");
        self.seat = Some(self.casino.create(name, self.outbox.clone()).await);
    }

    async fn join(&mut self, code: &str, name: Option<String>) {
        if self.seat.is_some() {
            log::debug!("[bridge {}] already seated, ignoring join", self.tag());
            return;
        }
        let name = Protocol::name(name, "Player 2");
        match self.casino.join(code, name, self.outbox.clone()).await {
            Ok(seat) => self.seat = Some(seat),
            Err(e) => {
                log::debug!("[bridge -] join {:?} rejected: {}", code, e);
                self.outbox.send(&ServerMessage::error(e));
            }
        }
    }

    fn forward(&self, msg: &ClientMessage) {
        let Some(intent) = msg.intent() else {
            return;
        };
        match self.seat.as_ref() {
            Some(seat) => {
                if seat.room.send(Command::Act(seat.color, intent)).is_err() {
                    log::warn!("[bridge {}] room mailbox closed", seat.code);
                }
            }
            None => log::debug!("[bridge -] unseated {:?} ignored", intent),
        }
    }

    fn tag(&self) -> String {
        self.seat
            .as_ref()
            .map(|seat| seat.code.to_string())
            .unwrap_or_else(|| String::from("-"))
    }
}

impl Session {
    /// Pumps frames between the socket and this session until either side
    /// hangs up, then releases the seat.
    pub async fn bridge(
        mut self,
        mut rx: UnboundedReceiver<String>,
        mut socket: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) {
        log::debug!("[bridge -] connected");
        'sesh: loop {
            tokio::select! {
                biased;
                msg = rx.recv() => match msg {
                    Some(json) => if socket.text(json).await.is_err() { break 'sesh },
                    None => break 'sesh,
                },
                msg = stream.next() => match msg {
                    Some(Ok(actix_ws::Message::Text(text))) => self.receive(&text).await,
                    Some(Ok(actix_ws::Message::Ping(bytes))) => if socket.pong(&bytes).await.is_err() { break 'sesh },
                    Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                    Some(Err(_)) => break 'sesh,
                    None => break 'sesh,
                    _ => continue 'sesh,
                },
            }
        }
        log::debug!("[bridge {}] disconnected", self.tag());
        drop(rx);
        let _ = socket.close(None).await;
        self.close();
    }
}
