//! Single chat bubble and the three-dot typing indicator.

use dioxus::prelude::*;

use crate::state::BubbleView;

/// One chat bubble, user- or bot-aligned via its class list.
#[component]
pub fn BubbleItem(view: BubbleView) -> Element {
    rsx! {
        div {
            class: "{view.css_class}",
            div { class: "rd-bubble-text", "{view.text}" }
            span { class: "rd-time", "{view.timestamp_display}" }
        }
    }
}

/// Transient typing indicator shown while a reply waits out its delay.
#[component]
pub fn TypingBubble() -> Element {
    rsx! {
        div {
            class: "rd-bubble bot typing-bubble",
            div {
                class: "typing",
                span {}
                span {}
                span {}
            }
        }
    }
}
