//! Intent Classifier
//!
//! Maps free text to an [`Intent`] by searching it against per-intent keyword
//! patterns. Every pattern is a word-boundary alternation, so a keyword buried
//! inside a longer word ("shipment" vs "shipped") does not count.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::Intent;

/// Static pattern table, in detector order
const PATTERNS: &[(Intent, &[&str])] = &[
    (
        Intent::Greetings,
        &[
            r"\b(hi|hello|hey|good morning|good afternoon|good evening)\b",
            r"\b(greetings|howdy)\b",
        ],
    ),
    (
        Intent::OrderStatus,
        &[
            r"\b(status|track|order|where is my order|order status|tracking)\b",
            r"\b(where is|when will|delivery|shipped|shipping)\b",
        ],
    ),
    (
        Intent::ReturnsRefunds,
        &[
            r"\b(return|refund|exchange|broken|defective|damaged)\b",
            r"\b(warranty|repair|replace|money back)\b",
        ],
    ),
    (
        Intent::ContactInfo,
        &[
            r"\b(contact|call|phone|email|speak to someone|human|agent)\b",
            r"\b(support|help|assistance|representative)\b",
        ],
    ),
    (
        Intent::HoursOperation,
        &[
            r"\b(hours|open|close|time|operating|business hours)\b",
            r"\b(when.*open|what time|available)\b",
        ],
    ),
    (
        Intent::Exit,
        &[
            r"\b(quit|exit|bye|goodbye|see you|farewell)\b",
            r"\b(thanks|thank you|done|finished)\b",
        ],
    ),
];

lazy_static! {
    static ref DETECTORS: Vec<(Intent, Vec<Regex>)> = PATTERNS
        .iter()
        .map(|(intent, patterns)| {
            let compiled = patterns
                .iter()
                .map(|p| Regex::new(&format!("(?i){}", p)).expect("detector pattern must compile"))
                .collect();
            (*intent, compiled)
        })
        .collect();
}

/// Keyword/regex intent classifier
pub struct IntentClassifier;

impl IntentClassifier {
    /// Return the first intent, in declaration order, with a pattern found in `text`.
    ///
    /// Input is trimmed and lower-cased first. Empty input is still searched;
    /// callers that care about emptiness check it themselves.
    pub fn classify(text: &str) -> Option<Intent> {
        let normalized = text.trim().to_lowercase();

        DETECTORS
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|re| re.is_match(&normalized)))
            .map(|(intent, _)| *intent)
    }

    /// Raw pattern strings registered for `intent`
    pub fn patterns(intent: Intent) -> &'static [&'static str] {
        PATTERNS
            .iter()
            .find(|(i, _)| *i == intent)
            .map(|(_, p)| *p)
            .unwrap_or(&[])
    }
}
