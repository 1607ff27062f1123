//! The display region: owns whatever is currently shown.

use vidembed_core::{RenderDirective, ResolveError};

/// Message line under the player, with success/error styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Ok(String),
    Error(String),
}

/// Holds at most one active directive. Showing a new outcome always clears
/// the previous player and message first (last write wins).
#[derive(Debug, Default)]
pub struct Stage {
    current: Option<RenderDirective>,
    message: Option<Message>,
}

impl Stage {
    fn clear(&mut self) {
        self.current = None;
        self.message = None;
    }

    pub fn show(&mut self, outcome: Result<RenderDirective, ResolveError>) {
        self.clear();
        match outcome {
            Ok(directive) => {
                self.message = Some(Message::Ok(directive.notice.clone().unwrap_or_default()));
                self.current = Some(directive);
            }
            Err(err) => {
                self.message = Some(Message::Error(err.reason().to_string()));
            }
        }
    }

    pub fn current(&self) -> Option<&RenderDirective> {
        self.current.as_ref()
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }
}
