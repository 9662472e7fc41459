use dioxus::prelude::*;
use crate::constants::*;

#[component]
pub fn StatusBar(message: String, is_error: bool, caption_count: usize, zoom_level: i32) -> Element {
    let color = if is_error { ACCENT_ERROR } else { TEXT_DIM };
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: 22px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM};",
            span { style: "color: {color};", "{message}" }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                span { "{caption_count} captions" }
                span { "zoom {zoom_level}" }
            }
        }
    }
}
