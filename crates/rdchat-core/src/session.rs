//! Widget instance: all chat state and event handling, UI-free.
//!
//! One [`ChatSession`] owns everything a mounted widget needs —
//! config, QnA list, conversation log, open/theme flags, unread
//! counter. UI layers translate events into method calls and render
//! from the accessors; nothing here touches a document.

use std::time::Duration;

use tracing::debug;

use crate::config::WidgetConfig;
use crate::conversation::{Bubble, ConversationLog};
use crate::qna::QnaList;

/// Visual theme of the widget window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// CSS class / data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Transient view flags. No backing store; reset on every mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub open: bool,
    pub theme: Theme,
}

/// A reply waiting out its typing delay.
///
/// Each submit or suggestion click creates its own slot. The caller
/// shows a typing indicator, sleeps `delay`, then passes the slot to
/// [`ChatSession::deliver`]. Slots are never cancelled and never
/// clobber each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub text: String,
    pub delay: Duration,
}

/// One chat widget instance owning all of its state.
#[derive(Debug, Clone)]
pub struct ChatSession {
    config: WidgetConfig,
    qna: QnaList,
    log: ConversationLog,
    ui: UiState,
    welcomed: bool,
    unread: u32,
}

impl ChatSession {
    pub fn new(config: WidgetConfig, qna: QnaList) -> Self {
        Self {
            config,
            qna,
            log: ConversationLog::new(),
            ui: UiState::default(),
            welcomed: false,
            unread: 0,
        }
    }

    /// Open the window. Appends the greeting bubble on the first open
    /// only and clears the unread counter.
    pub fn open(&mut self) {
        self.ui.open = true;
        self.unread = 0;
        if !self.welcomed {
            self.welcomed = true;
            self.log.push_welcome(&self.config.welcome_message);
            debug!("appended welcome bubble");
        }
    }

    /// Close the window.
    pub fn close(&mut self) {
        self.ui.open = false;
    }

    /// Launcher click: open if closed, close if open.
    pub fn toggle(&mut self) {
        if self.ui.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Flip between light and dark. In-memory only, not persisted.
    pub fn toggle_theme(&mut self) {
        self.ui.theme = self.ui.theme.toggled();
    }

    /// Handle free-text input.
    ///
    /// Whitespace-only input is a no-op: no bubble, no reply. Otherwise
    /// the trimmed text is appended as a user bubble and the returned
    /// slot carries the matched answer or the fallback text.
    pub fn submit(&mut self, input: &str) -> Option<PendingReply> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        self.log.push_user(text);

        let reply = match self.qna.find_match(text) {
            Some(entry) => {
                debug!(question = %entry.question, "matched QnA entry");
                entry.answer.clone()
            }
            None => {
                debug!("no QnA match, using fallback");
                self.config.fallback_message.clone()
            }
        };

        Some(PendingReply {
            text: reply,
            delay: self.config.reply_delay,
        })
    }

    /// Handle a suggestion click by index into the QnA list.
    ///
    /// Appends the entry's question as a user bubble and returns a slot
    /// with that entry's answer. Out-of-range index is a no-op.
    pub fn pick_suggestion(&mut self, index: usize) -> Option<PendingReply> {
        let entry = self.qna.get(index)?.clone();
        self.log.push_user(&entry.question);
        debug!(index, question = %entry.question, "suggestion picked");

        Some(PendingReply {
            text: entry.answer,
            delay: self.config.suggestion_delay,
        })
    }

    /// Append the bot bubble for a completed reply slot.
    ///
    /// Replies landing while the window is closed bump the unread
    /// counter shown on the launcher.
    pub fn deliver(&mut self, reply: PendingReply) {
        self.log.push_bot(&reply.text);
        if !self.ui.open {
            self.unread = self.unread.saturating_add(1);
        }
    }

    /// All bubbles in append order.
    pub fn bubbles(&self) -> &[Bubble] {
        self.log.bubbles()
    }

    /// Suggestion labels, in QnA list order.
    pub fn suggestions(&self) -> impl Iterator<Item = &str> {
        self.qna.iter().map(|entry| entry.question.as_str())
    }

    pub fn is_open(&self) -> bool {
        self.ui.open
    }

    pub fn theme(&self) -> Theme {
        self.ui.theme
    }

    /// Bot replies delivered while the window was closed.
    pub fn unread(&self) -> u32 {
        self.unread
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }
}
