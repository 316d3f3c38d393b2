//! Chat session with the FAQ assistant.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::faq::{FaqBook, WELCOME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Author {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub author: Author,
    pub text: String,
    pub timestamp: NaiveDateTime,
}

/// Message log plus the answer book behind it.
#[derive(Debug, Clone)]
pub struct ChatSession {
    book: FaqBook,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// A session opened with the assistant's welcome message.
    pub fn new(book: FaqBook) -> Self {
        let mut session = Self {
            book,
            messages: Vec::new(),
        };
        session.push(Author::Bot, WELCOME.to_string());
        session
    }

    /// Record the user's question and return the answer to deliver later.
    /// Blank input is ignored.
    pub fn ask(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.push(Author::User, text.to_string());
        Some(self.book.answer(text).to_string())
    }

    /// Append a bot message (a delivered reply).
    pub fn deliver(&mut self, answer: String) {
        self.push(Author::Bot, answer);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn book(&self) -> &FaqBook {
        &self.book
    }

    fn push(&mut self, author: Author, text: String) {
        self.messages.push(ChatMessage {
            author,
            text,
            timestamp: chrono::Local::now().naive_local(),
        });
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(FaqBook::builtin())
    }
}
