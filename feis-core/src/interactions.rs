//! Chat and newsletter, sharing one deferred task queue.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::chat::ChatSession;
use crate::config::DeskConfig;
use crate::faq::FaqBook;
use crate::newsletter::NewsletterForm;
use crate::scheduler::DeferredQueue;

/// Work deferred to a later tick of the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum DeferredTask {
    /// Show the assistant's answer.
    ChatReply(String),
    /// Remove the newsletter confirmation.
    ClearNewsletterNotice,
}

pub struct Interactions {
    pub chat: ChatSession,
    pub newsletter: NewsletterForm,
    queue: DeferredQueue<DeferredTask>,
    reply_delay: Duration,
    clear_after: Duration,
}

impl Interactions {
    pub fn new(book: FaqBook, config: &DeskConfig) -> Self {
        Self {
            chat: ChatSession::new(book),
            newsletter: NewsletterForm::new(),
            queue: DeferredQueue::new(),
            reply_delay: config.chat.reply_delay(),
            clear_after: config.newsletter.clear_after(),
        }
    }

    /// Post a chat question; the answer shows up after the reply delay.
    pub fn submit_chat(&mut self, text: &str, now: Instant) -> bool {
        match self.chat.ask(text) {
            Some(answer) => {
                self.queue
                    .schedule(now, self.reply_delay, DeferredTask::ChatReply(answer));
                true
            }
            None => false,
        }
    }

    /// Submit the newsletter form; the notice clears itself later.
    ///
    /// Earlier clears stay scheduled, so a quick second submission may see
    /// its notice removed by the first submission's timer.
    pub fn submit_newsletter(&mut self, email: &str, now: Instant) -> bool {
        if !self.newsletter.submit(email) {
            return false;
        }
        self.queue
            .schedule(now, self.clear_after, DeferredTask::ClearNewsletterNotice);
        true
    }

    /// Run every task due at `now`. Returns how many ran.
    pub fn run_due(&mut self, now: Instant) -> usize {
        let tasks = self.queue.take_due(now);
        let count = tasks.len();
        for task in tasks {
            debug!(?task, "running deferred task");
            match task {
                DeferredTask::ChatReply(answer) => self.chat.deliver(answer),
                DeferredTask::ClearNewsletterNotice => self.newsletter.clear_notice(),
            }
        }
        count
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
