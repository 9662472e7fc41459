use dioxus::prelude::*;

use crate::constants::{
    BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, TEXT_DIM, TEXT_MUTED, TIMELINE_CANVAS_HOST_ID,
    TIMELINE_HEADER_HEIGHT,
};
use crate::state::Timestamp;

use super::canvas::TimelineCanvas;
use super::interaction::PointerEvent;
use super::playback_controls::PlaybackBtn;
use super::render::Scene;
use super::viewport::ScrollState;

const HEADER_BTN_STYLE: &str = "width: 20px; height: 20px; border: none; border-radius: 3px; background: transparent; font-size: 12px; cursor: pointer; display: flex; align-items: center; justify-content: center;";

/// Main timeline panel component
#[component]
pub fn TimelinePanel(
    height: f64,
    scene: Scene,
    // Viewport state
    zoom_level: i32,
    time_width: f64,
    labels_visible: bool,
    scroll: ScrollState,
    scrollbar_height: f64,
    dragging: bool,
    // Playback state
    current_time: f64,
    video_length: f64,
    is_playing: bool,
    // Callbacks
    on_zoom_in: EventHandler<MouseEvent>,
    on_zoom_out: EventHandler<MouseEvent>,
    on_zoom_reset: EventHandler<MouseEvent>,
    on_toggle_labels: EventHandler<MouseEvent>,
    on_play_pause: EventHandler<MouseEvent>,
    on_seek: EventHandler<f64>,
    on_scroll: EventHandler<i64>,
    on_press: EventHandler<PointerEvent>,
    on_drag: EventHandler<PointerEvent>,
    on_release: EventHandler<PointerEvent>,
    on_wheel: EventHandler<f64>,
) -> Element {
    let play_icon = if is_playing { "⏸" } else { "▶" };
    let labels_color = if labels_visible { TEXT_MUTED } else { TEXT_DIM };
    let timecode = Timestamp::from_seconds(current_time).to_string();
    let length_code = Timestamp::from_seconds(video_length).to_string();
    let zoom_label = format!("{}s", time_width);
    let scroll_max = scroll.max_value();

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                height: {height}px; min-height: {height}px;
                background-color: {BG_ELEVATED};
                overflow: hidden;
            ",

            // Header
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: {TIMELINE_HEADER_HEIGHT}px; padding: 0 14px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                ",

                // Left: Timeline label + zoom controls
                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    span { style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;", "Timeline" }

                    div {
                        style: "display: flex; align-items: center; gap: 4px;",
                        button {
                            class: "collapse-btn",
                            style: "{HEADER_BTN_STYLE} color: {TEXT_MUTED};",
                            title: "Zoom out (-)",
                            onclick: move |e| on_zoom_out.call(e),
                            "−"
                        }
                        span {
                            style: "font-size: 10px; color: {TEXT_DIM}; min-width: 56px; text-align: center;",
                            title: "Zoom level {zoom_level}",
                            "{zoom_label}"
                        }
                        button {
                            class: "collapse-btn",
                            style: "{HEADER_BTN_STYLE} color: {TEXT_MUTED};",
                            title: "Zoom in (+)",
                            onclick: move |e| on_zoom_in.call(e),
                            "+"
                        }
                        button {
                            class: "collapse-btn",
                            style: "{HEADER_BTN_STYLE} width: auto; padding: 0 6px; font-size: 10px; color: {TEXT_MUTED};",
                            title: "Reset zoom (0)",
                            onclick: move |e| on_zoom_reset.call(e),
                            "Reset"
                        }
                        button {
                            class: "collapse-btn",
                            style: "{HEADER_BTN_STYLE} width: auto; padding: 0 6px; font-size: 10px; color: {labels_color};",
                            title: "Toggle location labels (L)",
                            onclick: move |e| on_toggle_labels.call(e),
                            "Labels"
                        }
                    }
                }

                // Center: Playback controls
                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    PlaybackBtn {
                        icon: "⏮",
                        title: "Go to start",
                        on_click: move |_| on_seek.call(0.0),
                    }
                    PlaybackBtn {
                        icon: "|◀",
                        title: "Previous second",
                        on_click: move |_| {
                            // Snap to previous round second
                            let t = (current_time - 0.01).floor().max(0.0);
                            on_seek.call(t);
                        },
                    }
                    PlaybackBtn {
                        icon: play_icon,
                        title: "Play/Pause (Space)",
                        primary: true,
                        on_click: move |e| on_play_pause.call(e),
                    }
                    PlaybackBtn {
                        icon: "▶|",
                        title: "Next second",
                        on_click: move |_| {
                            // Snap to next round second
                            let t = (current_time.floor() + 1.0).min(video_length);
                            on_seek.call(t);
                        },
                    }
                    PlaybackBtn {
                        icon: "⏭",
                        title: "Go to end",
                        on_click: move |_| on_seek.call(video_length),
                    }
                }

                // Right: Timecode
                span {
                    style: "font-family: 'SF Mono', Consolas, monospace; font-size: 11px; color: {TEXT_DIM};",
                    "{timecode} / {length_code}"
                }
            }

            // Canvas and scrollbar together make up the control the viewport measures
            div {
                id: "{TIMELINE_CANVAS_HOST_ID}",
                style: "flex: 1; min-height: 0; display: flex; flex-direction: column;",
                TimelineCanvas {
                    scene,
                    dragging,
                    on_press: move |event| on_press.call(event),
                    on_drag: move |event| on_drag.call(event),
                    on_release: move |event| on_release.call(event),
                    on_wheel: move |delta| on_wheel.call(delta),
                }

                if scroll.visible {
                    input {
                        r#type: "range",
                        min: "0",
                        max: "{scroll_max}",
                        step: "1",
                        value: "{scroll.value}",
                        style: "width: 100%; height: {scrollbar_height}px; margin: 0; flex-shrink: 0; accent-color: {TEXT_MUTED};",
                        oninput: move |e| {
                            if let Ok(value) = e.value().parse::<i64>() {
                                on_scroll.call(value);
                            }
                        },
                    }
                }
            }
        }
    }
}
