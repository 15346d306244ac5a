//! View-layer state and bubble view models.
//!
//! Converts core [`Bubble`]s into render-ready view structs with the
//! final class list and display timestamp.

use rdchat_core::{Bubble, ChatSession};

/// View model for one rendered bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleView {
    pub id: u64,
    pub text: String,
    /// Full class list: "rd-bubble user", "rd-bubble bot rd-welcome", ...
    pub css_class: String,
    /// HH:MM display time.
    pub timestamp_display: String,
}

/// Convert a core bubble to its view model.
pub fn bubble_view(bubble: &Bubble) -> BubbleView {
    let mut css_class = format!("rd-bubble {}", bubble.sender.css_class());
    if bubble.welcome {
        css_class.push_str(" rd-welcome");
    }

    let timestamp_display = chrono::DateTime::from_timestamp_millis(bubble.timestamp_millis as i64)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default();

    BubbleView {
        id: bubble.id,
        text: bubble.text.clone(),
        css_class,
        timestamp_display,
    }
}

/// State owned by the [`crate::ChatWidget`] component.
#[derive(Debug, Clone)]
pub struct WidgetState {
    pub session: ChatSession,
    /// Current input draft.
    pub draft: String,
    /// Typing bubbles currently visible, one per in-flight reply.
    pub typing_count: usize,
    /// Whether to scroll the message list on next render.
    pub should_scroll_bottom: bool,
}

impl WidgetState {
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            draft: String::new(),
            typing_count: 0,
            should_scroll_bottom: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdchat_core::ConversationLog;

    #[test]
    fn test_bubble_view_classes() {
        let mut log = ConversationLog::new();
        log.push_user("hello");
        log.push_bot("hi");
        log.push_welcome("welcome");

        let views: Vec<_> = log.bubbles().iter().map(bubble_view).collect();
        assert_eq!(views[0].css_class, "rd-bubble user");
        assert_eq!(views[1].css_class, "rd-bubble bot");
        assert_eq!(views[2].css_class, "rd-bubble bot rd-welcome");
    }

    #[test]
    fn test_bubble_view_has_display_time() {
        let mut log = ConversationLog::new();
        log.push_user("hello");
        let view = bubble_view(&log.bubbles()[0]);
        // HH:MM
        assert_eq!(view.timestamp_display.len(), 5);
        assert!(view.timestamp_display.contains(':'));
    }
}
