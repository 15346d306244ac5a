//! Chat window: header, message list, suggestions, input footer.

use dioxus::prelude::*;
use rdchat_core::Theme;

use crate::state::BubbleView;

use super::input::ChatInput;
use super::messages::MessageList;
use super::suggestions::SuggestionBar;

/// Header icon for the theme toggle button.
fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "bi bi-moon-stars-fill",
        Theme::Dark => "bi bi-sun-fill",
    }
}

/// The chat window panel.
///
/// Stays mounted when closed (`minimized` class) so the conversation
/// survives open/close cycles.
#[component]
pub fn ChatWindow(
    open: bool,
    theme: Theme,
    title: String,
    subtitle: String,
    logo_url: Option<String>,
    placeholder: String,
    bubbles: Vec<BubbleView>,
    suggestions: Vec<String>,
    draft: String,
    typing_count: usize,
    should_scroll_bottom: bool,
    on_close: EventHandler<()>,
    on_theme_toggle: EventHandler<()>,
    on_send: EventHandler<String>,
    on_draft_change: EventHandler<String>,
    on_suggestion: EventHandler<usize>,
) -> Element {
    let mut window_class = String::from("rd-window");
    if !open {
        window_class.push_str(" minimized");
    }
    if theme == Theme::Dark {
        window_class.push_str(" dark");
    }
    let icon = theme_icon(theme);

    rsx! {
        div {
            class: "{window_class}",
            "data-theme": "{theme.css_value()}",

            div {
                class: "rd-header",
                div {
                    class: "rd-header-identity",
                    if let Some(ref url) = logo_url {
                        img { class: "rd-logo", src: "{url}", alt: "{title}" }
                    }
                    div {
                        class: "rd-header-text",
                        h6 { class: "rd-title", "{title}" }
                        small { class: "rd-subtitle", "{subtitle}" }
                    }
                }
                div {
                    class: "rd-actions",
                    button {
                        class: "rd-action-btn",
                        title: "Toggle theme",
                        onclick: move |_| on_theme_toggle.call(()),
                        i { class: "{icon}" }
                    }
                    button {
                        class: "rd-action-btn",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        i { class: "bi bi-x-lg" }
                    }
                }
            }

            MessageList {
                bubbles,
                typing_count,
                should_scroll_bottom,
            }

            SuggestionBar {
                suggestions,
                on_suggestion,
            }

            ChatInput {
                draft,
                placeholder,
                on_send,
                on_draft_change,
            }
        }
    }
}
