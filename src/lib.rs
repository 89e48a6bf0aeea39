//! TechGadget Support Responder
//!
//! A rule-based customer-support responder that:
//! - Classifies free text into a fixed set of intents via keyword patterns
//! - Answers with a randomly chosen canned reply for the matched intent
//! - Falls back to a fixed help message when nothing matches
//! - Is served both over HTTP and as an interactive terminal session
//!
//! FLOW:
//! INPUT → CLASSIFY → SELECT REPLY → RESPOND

pub mod api;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod responder;
pub mod responses;

pub use error::Result;

// Re-export common types
pub use classifier::IntentClassifier;
pub use models::*;
pub use responder::IntentResponder;
