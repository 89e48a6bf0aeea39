//! Intent Responder
//!
//! Turns one raw user message into one reply. Every call stands alone: there
//! is no session, history, or activity flag here. The exit intent is only a
//! signal for the surrounding shell.

use rand::Rng;
use tracing::debug;

use crate::classifier::IntentClassifier;
use crate::models::Turn;
use crate::responses::{self, EMPTY_INPUT_REPLY, FALLBACK_REPLY};

/// Stateless responder; safe to share across threads and handlers
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentResponder;

impl IntentResponder {
    pub fn new() -> Self {
        Self
    }

    /// Reply to `text` using the thread-local RNG
    pub fn respond(&self, text: &str) -> String {
        self.process(text).reply
    }

    pub fn respond_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        self.process_with_rng(text, rng).reply
    }

    /// Reply to `text` and report which intent produced the reply
    pub fn process(&self, text: &str) -> Turn {
        self.process_with_rng(text, &mut rand::thread_rng())
    }

    pub fn process_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Turn {
        if text.trim().is_empty() {
            return Turn {
                reply: EMPTY_INPUT_REPLY.to_string(),
                intent: None,
            };
        }

        let intent = IntentClassifier::classify(text);
        debug!(intent = ?intent, "classified message");

        let reply = responses::select_reply(intent, rng).unwrap_or(FALLBACK_REPLY);

        Turn {
            reply: reply.to_string(),
            intent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Intent;
    use crate::responses::replies;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_blank_input() {
        let responder = IntentResponder::new();
        for input in ["", " ", "\t", "  \n  "] {
            let turn = responder.process(input);
            assert_eq!(turn.reply, EMPTY_INPUT_REPLY);
            assert_eq!(turn.intent, None);
        }
    }

    #[test]
    fn test_reply_drawn_from_matched_intent() {
        let responder = IntentResponder::new();
        let cases = vec![
            ("Hi there!", Intent::Greetings),
            ("where is my order", Intent::OrderStatus),
            ("my package is broken, I want a refund", Intent::ReturnsRefunds),
            ("email support", Intent::ContactInfo),
            ("what time do you close", Intent::HoursOperation),
            ("goodbye", Intent::Exit),
            ("thank you", Intent::Exit),
        ];

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            for (input, intent) in &cases {
                let reply = responder.respond_with_rng(input, &mut rng);
                assert!(
                    replies(*intent).contains(&reply.as_str()),
                    "input {input:?} got {reply:?}"
                );
            }
        }
    }

    #[test]
    fn test_unmatched_input_gets_fallback() {
        let responder = IntentResponder::new();
        assert_eq!(responder.respond("asdkjasd"), FALLBACK_REPLY);

        let turn = responder.process("42");
        assert_eq!(turn.intent, None);
        assert!(!turn.is_exit());
    }

    #[test]
    fn test_exit_turn_flags_exit() {
        let turn = IntentResponder::new().process("ok bye");
        assert!(turn.is_exit());
        assert!(replies(Intent::Exit).contains(&turn.reply.as_str()));
    }

    #[test]
    fn test_concurrent_callers() {
        let responder = IntentResponder::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(move || {
                    (0..50)
                        .map(|_| responder.respond("hello"))
                        .all(|r| replies(Intent::Greetings).contains(&r.as_str()))
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
