//! Widget configuration.

use std::time::Duration;

/// Bootstrap Icons stylesheet used by the default launcher and header
/// icons. Hosts can replace or extend the list.
pub const DEFAULT_ICON_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.css";

/// Configuration for one chat widget instance.
///
/// Defaults carry the fixed texts and typing delays; hosts override
/// fields with the builder-style setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Header title.
    pub title: String,
    /// Header subtitle line.
    pub subtitle: String,
    /// Logo image URL shown in the header, if any.
    pub logo_url: Option<String>,
    /// Input placeholder text.
    pub placeholder: String,
    /// Greeting appended on first open.
    pub welcome_message: String,
    /// Reply used when no QnA entry matches.
    pub fallback_message: String,
    /// Typing delay before a matched or fallback reply.
    pub reply_delay: Duration,
    /// Typing delay before a suggestion's answer.
    pub suggestion_delay: Duration,
    /// External stylesheets injected into the page head at mount.
    /// Load failures are left to the webview; there is no retry.
    pub stylesheets: Vec<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "Chat Assistant".to_string(),
            subtitle: "Ask a question to get started".to_string(),
            logo_url: None,
            placeholder: "Type your question...".to_string(),
            welcome_message: "Hi! I'm the site assistant. How can I help you today?".to_string(),
            fallback_message: "I'm still learning. Please try another question.".to_string(),
            reply_delay: Duration::from_millis(1200),
            suggestion_delay: Duration::from_millis(1000),
            stylesheets: vec![DEFAULT_ICON_STYLESHEET.to_string()],
        }
    }
}

impl WidgetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the header subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Set the header logo URL.
    pub fn with_logo_url(mut self, url: impl Into<String>) -> Self {
        self.logo_url = Some(url.into());
        self
    }

    /// Set the input placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the first-open greeting.
    pub fn with_welcome_message(mut self, message: impl Into<String>) -> Self {
        self.welcome_message = message.into();
        self
    }

    /// Set the no-match fallback reply.
    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// Set the typing delay for free-text replies.
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    /// Set the typing delay for suggestion answers.
    pub fn with_suggestion_delay(mut self, delay: Duration) -> Self {
        self.suggestion_delay = delay;
        self
    }

    /// Replace the external stylesheet list.
    pub fn with_stylesheets(mut self, stylesheets: Vec<String>) -> Self {
        self.stylesheets = stylesheets;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let config = WidgetConfig::default();
        assert_eq!(config.reply_delay, Duration::from_millis(1200));
        assert_eq!(config.suggestion_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_builder_setters() {
        let config = WidgetConfig::new()
            .with_title("Help Desk")
            .with_welcome_message("Welcome!")
            .with_reply_delay(Duration::from_millis(10))
            .with_stylesheets(Vec::new());

        assert_eq!(config.title, "Help Desk");
        assert_eq!(config.welcome_message, "Welcome!");
        assert_eq!(config.reply_delay, Duration::from_millis(10));
        assert!(config.stylesheets.is_empty());
        // Untouched fields keep their defaults
        assert_eq!(config.suggestion_delay, Duration::from_millis(1000));
    }
}
