//! Root demo-host component: a stand-in host page with the widget
//! mounted in the corner.

use dioxus::prelude::*;
use rdchat_core::{QnaList, RdchatResult, WidgetConfig};
use rdchat_ui::ChatWidget;

const DEMO_FAQ: &str = include_str!("../assets/faq.json");

/// Top-level app phase.
#[derive(Clone, Debug, PartialEq)]
enum AppPhase {
    /// Loading the QnA data file
    Loading,
    /// Widget ready to mount
    Ready { qna: QnaList, config: WidgetConfig },
    /// QnA data could not be loaded
    Failed(String),
}

/// Load the QnA list: `RDCHAT_FAQ` path if set, embedded demo data
/// otherwise.
fn load_qna() -> RdchatResult<QnaList> {
    match std::env::var("RDCHAT_FAQ") {
        Ok(path) => QnaList::from_json_file(path),
        Err(_) => QnaList::from_json(DEMO_FAQ),
    }
}

/// Widget config with environment overrides.
fn load_config() -> WidgetConfig {
    let mut config = WidgetConfig::default();
    if let Ok(title) = std::env::var("RDCHAT_TITLE") {
        config = config.with_title(title);
    }
    if let Ok(subtitle) = std::env::var("RDCHAT_SUBTITLE") {
        config = config.with_subtitle(subtitle);
    }
    if let Ok(url) = std::env::var("RDCHAT_LOGO") {
        config = config.with_logo_url(url);
    }
    config
}

/// Root application component.
#[component]
pub fn App() -> Element {
    let mut phase = use_signal(|| AppPhase::Loading);

    // Data load on mount
    use_effect(move || {
        if *phase.peek() == AppPhase::Loading {
            match load_qna() {
                Ok(qna) => {
                    tracing::info!(entries = qna.len(), "QnA data loaded");
                    phase.set(AppPhase::Ready {
                        qna,
                        config: load_config(),
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to load QnA data");
                    phase.set(AppPhase::Failed(e.to_string()));
                }
            }
        }
    });

    let current = phase.read().clone();

    match current {
        AppPhase::Loading => rsx! {
            div { class: "host-page",
                div { class: "host-loading", "Loading..." }
            }
        },
        AppPhase::Failed(err) => rsx! {
            div { class: "host-page",
                div { class: "host-error", "Could not start the chat widget: {err}" }
            }
        },
        AppPhase::Ready { qna, config } => rsx! {
            div { class: "host-page",
                h1 { "rdchat demo" }
                p {
                    "This page stands in for a host website. "
                    "The chat widget floats in the bottom-right corner."
                }

                ChatWidget { qna, config }
            }
        },
    }
}
