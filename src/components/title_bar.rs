use dioxus::prelude::*;
use crate::constants::*;
use crate::state::Timestamp;

use super::common::TimestampField;

const MENU_BTN_STYLE: &str = "
    background: transparent; border: none;
    font-size: 12px; cursor: pointer; padding: 4px 8px; border-radius: 4px;
";

#[component]
pub fn TitleBar(
    project_name: String,
    dirty: bool,
    on_new_project: EventHandler<MouseEvent>,
    on_open: EventHandler<MouseEvent>,
    on_save: EventHandler<MouseEvent>,
    on_save_as: EventHandler<MouseEvent>,
    video_length: Timestamp,
    on_video_length_change: EventHandler<Timestamp>,
    on_focus_change: EventHandler<bool>,
) -> Element {
    let marker = if dirty { " •" } else { "" };
    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: 40px; padding: 0 16px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none;
            ",
            div {
                style: "display: flex; align-items: center; gap: 20px;",
                span { style: "font-size: 13px; font-weight: 600; color: {TEXT_SECONDARY};", "Caption Timeline" }
                button {
                    class: "collapse-btn",
                    style: "{MENU_BTN_STYLE} color: {TEXT_PRIMARY};",
                    onclick: move |e| on_new_project.call(e),
                    "New"
                }
                button {
                    class: "collapse-btn",
                    style: "{MENU_BTN_STYLE} color: {TEXT_PRIMARY};",
                    title: "Ctrl+O",
                    onclick: move |e| on_open.call(e),
                    "Open"
                }
                button {
                    class: "collapse-btn",
                    style: "{MENU_BTN_STYLE} color: {TEXT_PRIMARY};",
                    title: "Ctrl+S",
                    onclick: move |e| on_save.call(e),
                    "Save"
                }
                button {
                    class: "collapse-btn",
                    style: "{MENU_BTN_STYLE} color: {TEXT_PRIMARY};",
                    onclick: move |e| on_save_as.call(e),
                    "Save As"
                }
            }
            span { style: "font-size: 13px; color: {TEXT_MUTED};", "{project_name}{marker}" }
            div {
                style: "display: flex; align-items: center; justify-content: flex-end; gap: 6px; min-width: 220px;",
                span {
                    style: "font-size: 10px; color: {TEXT_DIM}; text-transform: uppercase; letter-spacing: 0.6px;",
                    "Video length"
                }
                TimestampField {
                    value: video_length,
                    on_commit: move |length| on_video_length_change.call(length),
                    on_focus_change,
                }
            }
        }
    }
}
