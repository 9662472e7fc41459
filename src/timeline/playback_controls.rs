use dioxus::prelude::*;
use crate::constants::{BG_HOVER, TEXT_MUTED};

/// Transport button in the timeline header
#[component]
pub(crate) fn PlaybackBtn(
    icon: &'static str,
    title: &'static str,
    #[props(default = false)] primary: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let bg = if primary { BG_HOVER } else { "transparent" };
    rsx! {
        button {
            class: "collapse-btn",
            title: "{title}",
            style: "width: 26px; height: 26px; border: none; border-radius: 4px; background-color: {bg}; color: {TEXT_MUTED}; font-size: 10px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
            // keep focus on the app root so hotkeys keep working
            onmousedown: move |e| e.prevent_default(),
            onclick: move |e| on_click.call(e),
            "{icon}"
        }
    }
}
