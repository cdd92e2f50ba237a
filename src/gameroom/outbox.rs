use super::ServerMessage;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Outbound half of one connection. The bridge holding the receiver
/// writes every string to the socket; once it hangs up, the outbox is dead.
#[derive(Debug, Clone)]
pub struct Outbox(UnboundedSender<String>);

impl Outbox {
    pub fn pair() -> (Self, UnboundedReceiver<String>) {
        let (tx, rx) = unbounded_channel();
        (Self(tx), rx)
    }
    pub fn send(&self, msg: &ServerMessage) -> bool {
        self.post(msg.to_json())
    }
    /// Send an already-serialized message.
    pub fn post(&self, json: String) -> bool {
        self.0.send(json).is_ok()
    }
    pub fn alive(&self) -> bool {
        !self.0.is_closed()
    }
}
