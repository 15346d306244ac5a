//! Embeddable chat widget components for rdchat.
//!
//! Provides the floating launcher, the chat window with bubbles,
//! typing indicator, suggestion shortcuts and input footer, plus the
//! widget stylesheet for host apps. The fixed `rd-*` class names are
//! the host-page styling contract.

pub mod state;
pub mod widget;

pub use state::{bubble_view, BubbleView, WidgetState};
pub use widget::{ChatWidget, SleeperHandle};

/// Widget CSS for embedding in host apps.
pub const WIDGET_CSS: &str = include_str!("style.css");
