//! Top-level widget component.
//!
//! Owns `Signal<WidgetState>`, binds every event handler to the
//! session, and spawns one task per pending reply that sleeps on the
//! injected clock before delivering the bot bubble.

use std::sync::Arc;

use dioxus::prelude::*;
use rdchat_core::{ChatSession, QnaList, Sleeper, TokioSleeper, WidgetConfig};
use tracing::debug;

use crate::state::{bubble_view, BubbleView, WidgetState};

use super::launcher::Launcher;
use super::window::ChatWindow;

/// Newtype wrapper so `Arc<dyn Sleeper>` satisfies Dioxus
/// `#[component]`'s `PartialEq` bound. Equality is by pointer identity.
#[derive(Clone)]
pub struct SleeperHandle(pub Arc<dyn Sleeper>);

impl PartialEq for SleeperHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for SleeperHandle {
    fn default() -> Self {
        Self(Arc::new(TokioSleeper))
    }
}

/// Run one pending reply to completion: sleep out the typing delay,
/// then deliver the bot bubble and retire a typing slot.
fn spawn_reply(
    mut state: Signal<WidgetState>,
    sleeper: &SleeperHandle,
    reply: rdchat_core::PendingReply,
) {
    let sleeper = sleeper.0.clone();
    spawn(async move {
        sleeper.sleep(reply.delay).await;
        let mut s = state.write();
        s.typing_count = s.typing_count.saturating_sub(1);
        s.session.deliver(reply);
        s.should_scroll_bottom = true;
    });
}

/// Embeddable chat widget: floating launcher plus chat window.
///
/// Hosts pass the QnA list and config once at mount; all state lives
/// inside for the lifetime of the component. A custom `sleeper` lets
/// tests and demos replace the typing delays.
#[component]
pub fn ChatWidget(
    qna: QnaList,
    config: WidgetConfig,
    #[props(default)] sleeper: SleeperHandle,
) -> Element {
    let mut state = use_signal({
        let config = config.clone();
        let qna = qna.clone();
        move || WidgetState::new(ChatSession::new(config, qna))
    });

    // Inject the configured external stylesheets (icon fonts etc.)
    // into the page head once at mount. Load failures are left to the
    // webview; there is no retry.
    let stylesheets = use_hook(|| state.peek().session.config().stylesheets.clone());
    use_effect(move || {
        for href in &stylesheets {
            let js = format!(
                "if (!document.querySelector('link[href=\"{href}\"]')) {{ \
                 const link = document.createElement('link'); \
                 link.rel = 'stylesheet'; \
                 link.href = '{href}'; \
                 document.head.appendChild(link); }}"
            );
            document::eval(&js);
        }
    });

    // Event handlers
    let on_launcher_toggle = move |_: ()| {
        let mut s = state.write();
        s.session.toggle();
        s.should_scroll_bottom = true;
        debug!(open = s.session.is_open(), "launcher toggled");
    };

    let on_close = move |_: ()| {
        state.write().session.close();
    };

    let on_theme_toggle = move |_: ()| {
        let mut s = state.write();
        s.session.toggle_theme();
        debug!(theme = s.session.theme().css_value(), "theme toggled");
    };

    let on_draft_change = move |text: String| {
        state.write().draft = text;
    };

    let on_send = {
        let sleeper = sleeper.clone();
        move |text: String| {
            let pending = {
                let mut s = state.write();
                let pending = s.session.submit(&text);
                if pending.is_some() {
                    s.draft.clear();
                    s.typing_count += 1;
                    s.should_scroll_bottom = true;
                }
                pending
            };
            if let Some(reply) = pending {
                spawn_reply(state, &sleeper, reply);
            }
        }
    };

    let on_suggestion = {
        let sleeper = sleeper.clone();
        move |index: usize| {
            let pending = {
                let mut s = state.write();
                let pending = s.session.pick_suggestion(index);
                if pending.is_some() {
                    s.typing_count += 1;
                    s.should_scroll_bottom = true;
                }
                pending
            };
            if let Some(reply) = pending {
                spawn_reply(state, &sleeper, reply);
            }
        }
    };

    // Read state for rendering
    let s = state.read();
    let open = s.session.is_open();
    let theme = s.session.theme();
    let unread = s.session.unread();
    let title = s.session.config().title.clone();
    let subtitle = s.session.config().subtitle.clone();
    let logo_url = s.session.config().logo_url.clone();
    let placeholder = s.session.config().placeholder.clone();
    let bubbles: Vec<BubbleView> = s.session.bubbles().iter().map(bubble_view).collect();
    let suggestions: Vec<String> = s.session.suggestions().map(String::from).collect();
    let draft = s.draft.clone();
    let typing_count = s.typing_count;
    let should_scroll = s.should_scroll_bottom;
    drop(s);

    rsx! {
        Launcher {
            title: title.clone(),
            unread,
            on_toggle: on_launcher_toggle,
        }

        ChatWindow {
            open,
            theme,
            title,
            subtitle,
            logo_url,
            placeholder,
            bubbles,
            suggestions,
            draft,
            typing_count,
            should_scroll_bottom: should_scroll,
            on_close,
            on_theme_toggle,
            on_send,
            on_draft_change,
            on_suggestion,
        }
    }
}
