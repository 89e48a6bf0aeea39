//! Interactive terminal session
//!
//! Reads one line per turn, answers it, and stops on an exit intent,
//! end of input, or an interrupt.

use std::future::Future;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::responder::IntentResponder;
use crate::responses;
use crate::Result;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    ExitIntent,
    EndOfInput,
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines answered by the responder
    pub turns: usize,
    pub ended_by: SessionEnd,
}

enum Input {
    Line(String),
    Closed,
    Interrupted,
}

pub struct ChatSession {
    responder: IntentResponder,
}

impl ChatSession {
    pub fn new(responder: IntentResponder) -> Self {
        Self { responder }
    }

    /// Drive a conversation until it ends
    ///
    /// `interrupt` resolving (Ctrl-C in the binary) ends the session the same
    /// way end of input does: with a farewell instead of an error.
    pub async fn run<R, W, F>(&self, reader: R, writer: &mut W, interrupt: F) -> Result<SessionSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        F: Future<Output = ()>,
    {
        tokio::pin!(interrupt);
        let mut lines = reader.lines();
        let rule = "=".repeat(RULE_WIDTH);

        let banner = format!(
            "{rule}\n🤖 TechGadget Customer Service Chatbot\n{rule}\n\
             Type 'quit', 'exit', or 'bye' to end the conversation.\n{rule}\n\n{}\n",
            responses::opening_greeting()
        );
        writer.write_all(banner.as_bytes()).await?;

        let mut turns = 0;
        let ended_by = loop {
            writer.write_all("\n👤 You: ".as_bytes()).await?;
            writer.flush().await?;

            let input = tokio::select! {
                biased;
                _ = &mut interrupt => Input::Interrupted,
                line = lines.next_line() => match line {
                    Ok(Some(line)) => Input::Line(line),
                    Ok(None) => Input::Closed,
                    Err(e) => {
                        warn!("Failed to read input, ending session: {}", e);
                        Input::Closed
                    }
                },
            };

            let ended = match input {
                Input::Line(line) => {
                    let turn = self.responder.process(line.trim());
                    turns += 1;
                    debug!(turn = turns, intent = ?turn.intent, "answered line");

                    writer
                        .write_all(format!("\n🤖 Bot: {}\n", turn.reply).as_bytes())
                        .await?;

                    if turn.is_exit() {
                        break SessionEnd::ExitIntent;
                    }
                    continue;
                }
                Input::Closed => SessionEnd::EndOfInput,
                Input::Interrupted => SessionEnd::Interrupted,
            };

            let farewell = responses::farewell(&mut rand::thread_rng());
            writer
                .write_all(format!("\n\n{}\n", farewell).as_bytes())
                .await?;
            break ended;
        };

        let footer = format!(
            "\n{rule}\nChat session ended. Thank you for using TechGadget Support!\n{rule}\n"
        );
        writer.write_all(footer.as_bytes()).await?;
        writer.flush().await?;

        Ok(SessionSummary { turns, ended_by })
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(IntentResponder::new())
    }
}
