//! Core widget logic for rdchat: QnA matching, conversation state,
//! and reply timing.
//!
//! Everything in this crate is UI-free so the full widget behavior is
//! testable without a running webview. The Dioxus layer in `rdchat-ui`
//! translates events into [`ChatSession`] method calls and renders
//! from its accessors.

pub mod clock;
pub mod config;
pub mod conversation;
pub mod error;
pub mod qna;
pub mod session;

pub use clock::{RecordingSleeper, Sleeper, TokioSleeper};
pub use config::WidgetConfig;
pub use conversation::{Bubble, ConversationLog, Sender};
pub use error::{QnaError, RdchatResult};
pub use qna::{QnaEntry, QnaList};
pub use session::{ChatSession, PendingReply, Theme, UiState};
