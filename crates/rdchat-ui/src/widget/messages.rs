//! Message list with typing bubbles and auto-scroll.

use dioxus::prelude::*;

use crate::state::BubbleView;

use super::bubble::{BubbleItem, TypingBubble};

/// Scrollable bubble list. Shows one typing bubble per in-flight
/// reply and scrolls to the anchor whenever content is appended.
#[component]
pub fn MessageList(
    bubbles: Vec<BubbleView>,
    typing_count: usize,
    should_scroll_bottom: bool,
) -> Element {
    // Auto-scroll effect
    use_effect(move || {
        if should_scroll_bottom {
            spawn(async move {
                // Small delay to let the DOM update
                tokio::time::sleep(std::time::Duration::from_millis(50)).await;
                let js = r#"document.getElementById('rd-scroll-anchor')?.scrollIntoView({behavior:'smooth'})"#;
                document::eval(js);
            });
        }
    });

    rsx! {
        div {
            class: "rd-messages",

            for view in bubbles.iter() {
                BubbleItem { key: "{view.id}", view: view.clone() }
            }

            for i in 0..typing_count {
                TypingBubble { key: "typing-{i}" }
            }

            // Scroll anchor
            div { id: "rd-scroll-anchor" }
        }
    }
}
