//! Conversation history adapter.
//!
//! Converts the client-supplied message log into the ordered turn sequence
//! the upstream call expects. Malformed entries are dropped silently, never
//! rejected — the client is the source of truth for context and a single
//! bad entry must not invalidate the rest of the conversation.

use crate::turn::{ModelTurn, Role, WireTurn};

/// Senders the adapter recognizes. Anything else is dropped.
const RECOGNIZED_SENDERS: &[&str] = &["user", "ai"];

/// Adapt a client-supplied history into model turns.
///
/// Drops any entry whose `sender` is not a recognized string or whose
/// `text` is not a string; relative order of the surviving entries is
/// preserved. No deduplication, no truncation, no length cap — the full
/// supplied history is forwarded on every call.
pub fn adapt_history(history: &[WireTurn]) -> Vec<ModelTurn> {
    history
        .iter()
        .filter_map(|turn| {
            let sender = turn.sender.as_str()?;
            let text = turn.text.as_str()?;
            if !RECOGNIZED_SENDERS.contains(&sender) {
                return None;
            }
            let role = if sender == "user" {
                Role::User
            } else {
                Role::Model
            };
            Some(ModelTurn {
                role,
                text: text.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(sender: serde_json::Value, text: serde_json::Value) -> WireTurn {
        WireTurn { sender, text }
    }

    #[test]
    fn empty_history_adapts_to_empty() {
        assert!(adapt_history(&[]).is_empty());
    }

    #[test]
    fn maps_senders_to_roles() {
        let history = vec![
            WireTurn::new("user", "hello"),
            WireTurn::new("ai", "hi there"),
        ];
        let adapted = adapt_history(&history);
        assert_eq!(
            adapted,
            vec![ModelTurn::user("hello"), ModelTurn::model("hi there")]
        );
    }

    #[test]
    fn drops_non_string_text() {
        // One malformed entry mixed with one valid one: exactly the valid
        // entry survives.
        let history = vec![
            raw(json!("system"), json!(123)),
            WireTurn::new("user", "hi"),
        ];
        let adapted = adapt_history(&history);
        assert_eq!(adapted, vec![ModelTurn::user("hi")]);
    }

    #[test]
    fn drops_unrecognized_senders() {
        let history = vec![
            raw(json!("system"), json!("ignore me")),
            raw(json!(null), json!("no sender")),
            WireTurn::new("ai", "kept"),
        ];
        let adapted = adapt_history(&history);
        assert_eq!(adapted, vec![ModelTurn::model("kept")]);
    }

    #[test]
    fn preserves_relative_order() {
        let history = vec![
            WireTurn::new("user", "one"),
            raw(json!(42), json!("dropped")),
            WireTurn::new("ai", "two"),
            WireTurn::new("user", "three"),
        ];
        let adapted = adapt_history(&history);
        let texts: Vec<&str> = adapted.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn does_not_deduplicate() {
        let history = vec![
            WireTurn::new("user", "same"),
            WireTurn::new("user", "same"),
        ];
        assert_eq!(adapt_history(&history).len(), 2);
    }
}
