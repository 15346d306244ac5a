//! Suggested-question shortcuts.

use dioxus::prelude::*;

/// One button per QnA entry, in list order. Clicking sends the
/// question as if the user had typed it.
#[component]
pub fn SuggestionBar(suggestions: Vec<String>, on_suggestion: EventHandler<usize>) -> Element {
    rsx! {
        div {
            class: "rd-suggestions",
            for (index, label) in suggestions.into_iter().enumerate() {
                button {
                    key: "{index}",
                    class: "suggest-btn",
                    onclick: move |_| on_suggestion.call(index),
                    "{label}"
                }
            }
        }
    }
}
