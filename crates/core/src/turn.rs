//! Turn domain types.
//!
//! A conversation is an ordered sequence of turns. The client resends the
//! full history on every request — the server keeps no session state — so
//! these types exist in two shapes: the loose wire shape the client sends,
//! and the strict model shape the provider call expects.

use serde::{Deserialize, Serialize};

/// The role of a turn as the upstream model expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user
    User,
    /// The model's own prior responses
    Model,
}

impl Role {
    /// The wire string the upstream API expects for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// A turn as supplied by the client, before sanitation.
///
/// Both fields hold arbitrary JSON so a malformed entry (numeric text,
/// missing sender) survives deserialization and can be dropped during
/// adaptation instead of failing the whole request.
#[derive(Debug, Clone, Serialize)]
pub struct WireTurn {
    pub sender: serde_json::Value,
    pub text: serde_json::Value,
}

impl WireTurn {
    /// Convenience constructor for a well-formed turn.
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: serde_json::Value::String(sender.into()),
            text: serde_json::Value::String(text.into()),
        }
    }
}

// Entry-level tolerance: a history entry that is not even an object
// (`null`, a bare string, a number) still deserializes, into a turn with
// null fields, and falls out during adaptation like any other malformed
// entry. Only a non-array `history` value fails the request.
impl<'de> Deserialize<'de> for WireTurn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Object(mut map) => Self {
                sender: map.remove("sender").unwrap_or(serde_json::Value::Null),
                text: map.remove("text").unwrap_or(serde_json::Value::Null),
            },
            _ => Self {
                sender: serde_json::Value::Null,
                text: serde_json::Value::Null,
            },
        })
    }
}

/// A sanitized turn in the shape the provider call expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelTurn {
    pub role: Role,
    pub text: String,
}

impl ModelTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_strings() {
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Model.as_str(), "model");
    }

    #[test]
    fn wire_turn_tolerates_malformed_fields() {
        let turn: WireTurn = serde_json::from_str(r#"{"sender": "system", "text": 123}"#).unwrap();
        assert_eq!(turn.sender.as_str(), Some("system"));
        assert!(turn.text.as_str().is_none());
    }

    #[test]
    fn wire_turn_tolerates_missing_fields() {
        let turn: WireTurn = serde_json::from_str("{}").unwrap();
        assert!(turn.sender.is_null());
        assert!(turn.text.is_null());
    }

    #[test]
    fn wire_turn_tolerates_non_object_entries() {
        // Entries that are not objects at all must still deserialize so
        // the adapter can drop them instead of the request failing.
        let turns: Vec<WireTurn> =
            serde_json::from_str(r#"[null, "hey", 42, {"sender": "user", "text": "hi"}]"#)
                .unwrap();
        assert_eq!(turns.len(), 4);
        assert!(turns[0].sender.is_null());
        assert!(turns[1].sender.is_null());
        assert!(turns[2].text.is_null());
        assert_eq!(turns[3].sender.as_str(), Some("user"));
    }

    #[test]
    fn model_turn_constructors() {
        assert_eq!(ModelTurn::user("hi").role, Role::User);
        assert_eq!(ModelTurn::model("hello").role, Role::Model);
    }
}
