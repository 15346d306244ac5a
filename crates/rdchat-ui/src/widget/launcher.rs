//! Floating launcher button with unread badge.

use dioxus::prelude::*;

/// Launcher bubble pinned to the page corner. Clicking toggles the
/// chat window; the badge shows replies delivered while it was closed.
#[component]
pub fn Launcher(title: String, unread: u32, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "rd-launcher",
            button {
                class: "rd-launcher-btn",
                title: "{title}",
                onclick: move |_| on_toggle.call(()),
                i { class: "bi bi-chat-dots-fill" }
                if unread > 0 {
                    span { class: "rd-unread", "{unread}" }
                }
            }
        }
    }
}
