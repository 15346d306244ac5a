//! Entry point for the rdchat demo host.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use rdchat_ui::WIDGET_CSS;

mod app;

const HOST_CSS: &str = include_str!("../assets/host.css");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("rdchat_desktop=info,rdchat_ui=info,rdchat_core=info")
        .init();

    let title =
        std::env::var("RDCHAT_WINDOW_TITLE").unwrap_or_else(|_| "rdchat demo".to_string());
    tracing::info!("Starting {}", title);

    // Optional window geometry from env
    let win_w = std::env::var("RDCHAT_WIN_W").ok().and_then(|v| v.parse::<f64>().ok());
    let win_h = std::env::var("RDCHAT_WIN_H").ok().and_then(|v| v.parse::<f64>().ok());

    let mut wb = WindowBuilder::new()
        .with_title(&title)
        .with_maximized(false);

    if let (Some(w), Some(h)) = (win_w, win_h) {
        wb = wb.with_inner_size(LogicalSize::new(w, h));
    } else {
        wb = wb.with_inner_size(LogicalSize::new(1000.0, 700.0));
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(wb).with_custom_head(format!(
                r#"<style>{}</style><style>{}</style>"#,
                HOST_CSS, WIDGET_CSS,
            )),
        )
        .launch(app::App);
}
