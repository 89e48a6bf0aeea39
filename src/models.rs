//! Core data models for the support responder

use serde::{Deserialize, Serialize};
use std::fmt;

//
// ================= Intent =================
//

/// A category of customer request the responder recognizes.
///
/// Declaration order is the order detectors are tried in; when a message
/// carries keywords from several intents the earliest one wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greetings,
    OrderStatus,
    ReturnsRefunds,
    ContactInfo,
    HoursOperation,
    Exit,
}

impl Intent {
    pub const ALL: [Intent; 6] = [
        Intent::Greetings,
        Intent::OrderStatus,
        Intent::ReturnsRefunds,
        Intent::ContactInfo,
        Intent::HoursOperation,
        Intent::Exit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Greetings => "greetings",
            Intent::OrderStatus => "order_status",
            Intent::ReturnsRefunds => "returns_refunds",
            Intent::ContactInfo => "contact_info",
            Intent::HoursOperation => "hours_operation",
            Intent::Exit => "exit",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//
// ================= Turn =================
//

/// Outcome of one request/response exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub reply: String,
    /// `None` for empty input and for input no detector recognized
    pub intent: Option<Intent>,
}

impl Turn {
    pub fn is_exit(&self) -> bool {
        self.intent == Some(Intent::Exit)
    }
}

//
// ================= HTTP I/O =================
//

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
    pub is_exit: bool,
}

impl From<Turn> for ChatResponse {
    fn from(turn: Turn) -> Self {
        let is_exit = turn.is_exit();
        Self {
            response: turn.reply,
            is_exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_serializes_as_identifier() {
        for intent in Intent::ALL {
            let json = serde_json::to_string(&intent).unwrap();
            assert_eq!(json, format!("\"{}\"", intent.as_str()));
        }
    }

    #[test]
    fn test_missing_message_defaults_to_empty() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.message, "");
    }

    #[test]
    fn test_chat_response_from_turn() {
        let turn = Turn {
            reply: "Goodbye!".to_string(),
            intent: Some(Intent::Exit),
        };
        let resp = ChatResponse::from(turn);
        assert!(resp.is_exit);
        assert_eq!(resp.response, "Goodbye!");

        let unmatched = Turn {
            reply: "?".to_string(),
            intent: None,
        };
        assert!(!ChatResponse::from(unmatched).is_exit);
    }
}
