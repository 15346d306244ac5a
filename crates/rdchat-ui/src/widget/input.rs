//! Input footer with send button.

use dioxus::prelude::*;

/// Single-line input plus send button. Enter sends; whitespace-only
/// drafts are never submitted.
#[component]
pub fn ChatInput(
    draft: String,
    placeholder: String,
    on_send: EventHandler<String>,
    on_draft_change: EventHandler<String>,
) -> Element {
    let draft_empty = draft.trim().is_empty();

    rsx! {
        div {
            class: "rd-footer",

            input {
                class: "rd-input",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{draft}",
                oninput: move |evt| {
                    on_draft_change.call(evt.value());
                },
                onkeydown: {
                    let draft_clone = draft.clone();
                    move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            let text = draft_clone.clone();
                            if !text.trim().is_empty() {
                                on_send.call(text);
                            }
                        }
                    }
                },
            }

            button {
                class: "rd-send-btn",
                disabled: draft_empty,
                onclick: {
                    let draft_clone = draft.clone();
                    move |_| {
                        if !draft_clone.trim().is_empty() {
                            on_send.call(draft_clone.clone());
                        }
                    }
                },
                i { class: "bi bi-send-fill" }
            }
        }
    }
}
