use super::*;
use crate::NAME_LIMIT;
use crate::rules::*;
use serde::Deserialize;

/// Malformed inbound payload. Dropped without a reply.
#[derive(Debug, Clone)]
pub enum ProtocolError {
    Malformed(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(s) => write!(f, "malformed message: {}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Intents a client may send, tagged by `type`.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientMessage {
    Create {
        #[serde(default, deserialize_with = "lenient")]
        name: Option<String>,
    },
    Join {
        #[serde(default)]
        code: String,
        #[serde(default, deserialize_with = "lenient")]
        name: Option<String>,
    },
    Roll,
    Move {
        from: Origin,
        to: Target,
        die: u8,
    },
    EndTurn,
    Rematch,
    Ping,
}

impl ClientMessage {
    /// The in-room part of the message, for a seated connection.
    pub fn intent(&self) -> Option<Intent> {
        match self {
            Self::Roll => Some(Intent::Roll),
            Self::Move { from, to, die } => Some(Intent::Move(Play::new(*from, *to, *die))),
            Self::EndTurn => Some(Intent::EndTurn),
            Self::Rematch => Some(Intent::Rematch),
            Self::Create { .. } | Self::Join { .. } | Self::Ping => None,
        }
    }
}

/// A name that is not a string counts as no name at all.
fn lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(name) => Ok(Some(name)),
        _ => Ok(None),
    }
}

/// Parses inbound frames and normalizes their free-text fields.
pub struct Protocol;

impl Protocol {
    pub fn decode(s: &str) -> Result<ClientMessage, ProtocolError> {
        serde_json::from_str(s).map_err(|e| ProtocolError::Malformed(e.to_string()))
    }
    /// Trimmed, length-capped display name, or `fallback` when blank.
    pub fn name(name: Option<String>, fallback: &str) -> String {
        name.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.chars().take(NAME_LIMIT).collect())
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn decode_intents() {
        assert!(matches!(
            Protocol::decode(r#"{"type":"create","name":"Ayşe"}"#),
            Ok(ClientMessage::Create { name: Some(_) })
        ));
        assert!(matches!(
            Protocol::decode(r#"{"type":"create"}"#),
            Ok(ClientMessage::Create { name: None })
        ));
        assert!(matches!(
            Protocol::decode(r#"{"type":"join","code":"ab12cd"}"#),
            Ok(ClientMessage::Join { .. })
        ));
        assert!(matches!(Protocol::decode(r#"{"type":"roll"}"#), Ok(ClientMessage::Roll)));
        assert!(matches!(Protocol::decode(r#"{"type":"endturn"}"#), Ok(ClientMessage::EndTurn)));
        assert!(matches!(Protocol::decode(r#"{"type":"rematch"}"#), Ok(ClientMessage::Rematch)));
        assert!(matches!(Protocol::decode(r#"{"type":"ping"}"#), Ok(ClientMessage::Ping)));
    }
    #[test]
    fn odd_names_do_not_lose_the_intent() {
        assert!(matches!(
            Protocol::decode(r#"{"type":"create","name":123}"#),
            Ok(ClientMessage::Create { name: None })
        ));
        assert!(matches!(
            Protocol::decode(r#"{"type":"create","name":null}"#),
            Ok(ClientMessage::Create { name: None })
        ));
        match Protocol::decode(r#"{"type":"join","code":"ab12cd","name":["x"]}"#) {
            Ok(ClientMessage::Join { code, name }) => {
                assert_eq!(code, "ab12cd");
                assert_eq!(name, None);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
    #[test]
    fn decode_moves() {
        let msg = Protocol::decode(r#"{"type":"move","from":"bar","to":20,"die":4}"#).unwrap();
        assert_eq!(
            msg.intent(),
            Some(Intent::Move(Play::new(Origin::Bar, Target::Point(20), 4)))
        );
        let msg = Protocol::decode(r#"{"type":"move","from":3,"to":"off","die":4}"#).unwrap();
        assert_eq!(
            msg.intent(),
            Some(Intent::Move(Play::new(Origin::Point(3), Target::Off, 4)))
        );
    }
    #[test]
    fn decode_malformed() {
        assert!(Protocol::decode("not json").is_err());
        assert!(Protocol::decode(r#"{"type":"teleport"}"#).is_err());
        assert!(Protocol::decode(r#"{"type":"move","from":"off","to":3,"die":1}"#).is_err());
        assert!(Protocol::decode(r#"{"type":"move","from":30,"to":3,"die":1}"#).is_err());
        assert!(Protocol::decode(r#"{"type":"move","from":3,"to":1,"die":-2}"#).is_err());
        assert!(Protocol::decode(r#"{"name":"x"}"#).is_err());
    }
    #[test]
    fn names_fall_back_and_trim() {
        assert_eq!(Protocol::name(None, "Player 1"), "Player 1");
        assert_eq!(Protocol::name(Some("   ".into()), "Player 2"), "Player 2");
        assert_eq!(Protocol::name(Some(" Mehmet ".into()), "Player 2"), "Mehmet");
        assert_eq!(Protocol::name(Some("x".repeat(100)), "P").len(), NAME_LIMIT);
    }
}
