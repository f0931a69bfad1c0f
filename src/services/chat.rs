use chrono::Utc;
use serde::Serialize;

use crate::models::chat::{Author, ChatMessage};
use crate::models::validation::ValidationError;
use crate::services::responder::{RuleTable, GREETING, QUICK_REPLIES};

/// Quick replies are only offered while the conversation is this short.
const QUICK_REPLY_WINDOW: usize = 2;

/// Append-only conversation with the bot. Opens with the greeting.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    #[serde(skip)]
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        transcript.append(Author::Bot, GREETING);
        transcript
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn quick_replies(&self) -> &'static [&'static str] {
        if self.messages.len() <= QUICK_REPLY_WINDOW {
            &QUICK_REPLIES
        } else {
            &[]
        }
    }

    fn append(&mut self, author: Author, text: &str) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            author,
            text: text.to_string(),
            timestamp: Utc::now(),
        });
        &self.messages[self.messages.len() - 1]
    }

    /// Records the user's message. Blank input is rejected and leaves the transcript as is.
    pub fn push_user(&mut self, text: &str) -> Result<ChatMessage, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        Ok(self.append(Author::User, text).clone())
    }

    /// Answers `text` with exactly one bot message.
    pub fn push_reply(&mut self, rules: &RuleTable, text: &str) -> ChatMessage {
        let response = rules.respond(text).to_string();
        self.append(Author::Bot, &response).clone()
    }

    /// Convenience for callers that don't need to delay the reply.
    pub fn post(&mut self, rules: &RuleTable, text: &str) -> Result<ChatMessage, ValidationError> {
        self.push_user(text)?;
        Ok(self.push_reply(rules, text))
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
