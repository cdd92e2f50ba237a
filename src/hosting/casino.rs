use super::*;
use crate::Arbitrary;
use crate::board::Color;
use crate::gameroom::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Manages active game rooms and their lifecycles.
///
/// Holds only the code → handle table. Game state lives in each room's
/// actor; the table lock is never held across anything but table edits
/// and non-blocking channel sends.
#[derive(Debug)]
pub struct Casino {
    rooms: RwLock<HashMap<RoomCode, RoomHandle>>,
    timers: TimerConfig,
}

impl Default for Casino {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}

impl Casino {
    pub fn new(timers: TimerConfig) -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
            timers,
        }
    }
    pub async fn contains(&self, code: &str) -> bool {
        self.rooms.read().await.contains_key(&RoomCode::from(code))
    }
    pub async fn len(&self) -> usize {
        self.rooms.read().await.len()
    }
    pub async fn is_empty(&self) -> bool {
        self.rooms.read().await.is_empty()
    }
}

impl Casino {
    /// Opens a room under a fresh code with the caller seated as white.
    pub async fn create(&self, name: String, outbox: Outbox) -> Seat {
        let mut rooms = self.rooms.write().await;
        let code = loop {
            let code = RoomCode::random();
            if !rooms.contains_key(&code) {
                break code;
            }
        };
        outbox.send(&ServerMessage::created(&code, Color::White));
        let tx = Room::spawn(code.clone(), name, outbox.clone(), self.timers);
        rooms.insert(code.clone(), RoomHandle::new(code.clone(), tx.clone(), outbox));
        log::info!("[casino] opened room {} ({} open)", code, rooms.len());
        Seat::new(code, Color::White, tx)
    }

    /// Seats the caller as black in the room under `code`.
    pub async fn join(
        &self,
        code: &str,
        name: String,
        outbox: Outbox,
    ) -> Result<Seat, SessionError> {
        let code = RoomCode::from(code);
        let mut rooms = self.rooms.write().await;
        let handle = rooms.get_mut(&code).ok_or(SessionError::NotFound)?;
        if handle.is_full() {
            return Err(SessionError::Full);
        }
        handle
            .tx
            .send(Command::Join {
                name,
                outbox: outbox.clone(),
            })
            .map_err(|_| SessionError::NotFound)?;
        handle.seats.black = Some(outbox);
        log::info!("[casino] room {} filled", code);
        Ok(Seat::new(code, Color::Black, handle.tx.clone()))
    }

    /// A seated connection closed. Tells the room, then checks back
    /// after the grace window.
    pub fn depart(self: &Arc<Self>, seat: &Seat) {
        if seat.room.send(Command::Leave(seat.color)).is_err() {
            log::warn!("[casino] room {} already closed", seat.code);
        }
        let casino = self.clone();
        let code = seat.code.clone();
        tokio::spawn(async move {
            tokio::time::sleep(casino.timers.grace).await;
            casino.reclaim(&code).await;
        });
    }

    /// Drops the room under `code` if nobody is connected to it anymore.
    pub async fn reclaim(&self, code: &RoomCode) -> bool {
        let mut rooms = self.rooms.write().await;
        match rooms.get(code) {
            Some(handle) if !handle.alive() => {
                rooms.remove(code);
                log::info!("[casino] reclaimed room {}", code);
                true
            }
            _ => false,
        }
    }

    /// Drops every room nobody is connected to. Returns how many went.
    pub async fn sweep(&self) -> usize {
        let mut rooms = self.rooms.write().await;
        let before = rooms.len();
        rooms.retain(|_, handle| handle.alive());
        let swept = before - rooms.len();
        if swept > 0 {
            log::info!("[casino] swept {} rooms ({} open)", swept, rooms.len());
        }
        swept
    }

    /// Sweeps on a fixed interval for as long as the registry exists.
    pub fn patrol(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        let period = self.timers.sweep.max(Duration::from_millis(1));
        let casino = Arc::downgrade(&self);
        drop(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await;
            loop {
                interval.tick().await;
                match casino.upgrade() {
                    Some(casino) => {
                        casino.sweep().await;
                    }
                    None => break,
                }
            }
        })
    }
}
