//! Append-only conversation log.

/// Who authored a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS class fragment for the bubble row.
    pub fn css_class(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// A single rendered chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    /// Monotonic id, assigned on append.
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    /// Millis since epoch at append time.
    pub timestamp_millis: u64,
    /// Marks the fixed greeting bubble.
    pub welcome: bool,
}

/// Ordered, append-only sequence of bubbles.
///
/// Never persisted; dropped with the widget instance.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    bubbles: Vec<Bubble>,
    next_id: u64,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user bubble, returning its id.
    pub fn push_user(&mut self, text: &str) -> u64 {
        self.push(Sender::User, text, false)
    }

    /// Append a bot bubble, returning its id.
    pub fn push_bot(&mut self, text: &str) -> u64 {
        self.push(Sender::Bot, text, false)
    }

    /// Append the greeting bubble, returning its id.
    pub fn push_welcome(&mut self, text: &str) -> u64 {
        self.push(Sender::Bot, text, true)
    }

    fn push(&mut self, sender: Sender, text: &str, welcome: bool) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.bubbles.push(Bubble {
            id,
            sender,
            text: text.to_string(),
            timestamp_millis: now_millis(),
            welcome,
        });
        id
    }

    /// All bubbles in append order.
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// Whether the greeting bubble has been appended.
    pub fn has_welcome(&self) -> bool {
        self.bubbles.iter().any(|b| b.welcome)
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }
}

/// Current time as millis since epoch.
fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
