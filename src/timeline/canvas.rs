use dioxus::prelude::*;

use crate::constants::{TIMELINE_BG, TIMELINE_FONT_SIZE, WHEEL_LINE_PIXELS};

use super::interaction::{PointerButton, PointerEvent};
use super::render::{DrawCommand, Scene, TextAnchor};

fn pointer_button(e: &MouseEvent) -> PointerButton {
    match e.trigger_button() {
        Some(btn) => match format!("{:?}", btn).as_str() {
            "Primary" => PointerButton::Primary,
            "Secondary" => PointerButton::Secondary,
            "Auxiliary" => PointerButton::Middle,
            _ => PointerButton::Other,
        },
        // mousemove carries no trigger button; only primary drags get this far
        None => PointerButton::Primary,
    }
}

fn draw_command(command: &DrawCommand) -> Element {
    match command {
        DrawCommand::Rect { x, y, width, height, radius, fill, stroke } => {
            let fill = fill.as_deref().unwrap_or("none");
            let stroke = stroke.as_deref().unwrap_or("none");
            let width = width.max(0.0);
            let height = height.max(0.0);
            rsx! {
                rect {
                    x: "{x}",
                    y: "{y}",
                    width: "{width}",
                    height: "{height}",
                    rx: "{radius}",
                    fill: "{fill}",
                    stroke: "{stroke}",
                    stroke_width: "1",
                }
            }
        }
        DrawCommand::Line { x1, y1, x2, y2, color, width, dashed } => {
            let dash = if *dashed { "4 3" } else { "none" };
            rsx! {
                line {
                    x1: "{x1}",
                    y1: "{y1}",
                    x2: "{x2}",
                    y2: "{y2}",
                    stroke: "{color}",
                    stroke_width: "{width}",
                    stroke_dasharray: "{dash}",
                }
            }
        }
        DrawCommand::Text { x, y, text, color, anchor, bold } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
            };
            let weight = if *bold { "700" } else { "400" };
            rsx! {
                text {
                    x: "{x}",
                    y: "{y}",
                    fill: "{color}",
                    font_size: "{TIMELINE_FONT_SIZE}",
                    font_weight: "{weight}",
                    text_anchor: "{anchor}",
                    "{text}"
                }
            }
        }
        DrawCommand::Polygon { points, fill } => {
            let points = points
                .iter()
                .map(|(x, y)| format!("{x},{y}"))
                .collect::<Vec<_>>()
                .join(" ");
            rsx! {
                polygon { points: "{points}", fill: "{fill}" }
            }
        }
    }
}

/// Paints a timeline scene and turns mouse input into control-space pointer events.
#[component]
pub fn TimelineCanvas(
    scene: Scene,
    dragging: bool,
    on_press: EventHandler<PointerEvent>,
    on_drag: EventHandler<PointerEvent>,
    on_release: EventHandler<PointerEvent>,
    /// Wheel delta in pixels, positive towards later times
    on_wheel: EventHandler<f64>,
) -> Element {
    // Client position of the control's top-left corner, captured on press
    let mut origin = use_signal(|| (0.0_f64, 0.0_f64));

    let to_control = move |x: f64, y: f64| -> (f64, f64) {
        let (ox, oy) = origin();
        (x - ox, y - oy)
    };

    rsx! {
        div {
            style: "
                position: relative;
                flex: 1;
                min-height: 0;
                overflow: hidden;
                background-color: {TIMELINE_BG};
                user-select: none;
            ",
            svg {
                width: "{scene.width}",
                height: "{scene.height}",
                style: "position: absolute; top: 0; left: 0; font-family: sans-serif;",
                g { key: "frame", {draw_command(&scene.frame)} }
                g {
                    key: "content",
                    for (index, command) in scene.commands.iter().enumerate() {
                        g { key: "{index}", {draw_command(command)} }
                    }
                }
            }
            // Input layer above the drawing
            div {
                style: "position: absolute; top: 0; left: 0; right: 0; bottom: 0;",
                oncontextmenu: move |e| e.prevent_default(),
                onmousedown: move |e| {
                    let client = e.client_coordinates();
                    let local = e.element_coordinates();
                    origin.set((client.x - local.x, client.y - local.y));
                    let button = pointer_button(&e);
                    if button == PointerButton::Primary {
                        e.prevent_default();
                    }
                    on_press.call(PointerEvent { x: local.x, y: local.y, button });
                },
                // Released before the drag layer mounted
                onmouseup: move |e| {
                    let local = e.element_coordinates();
                    on_release.call(PointerEvent { x: local.x, y: local.y, button: pointer_button(&e) });
                },
                onwheel: move |e| {
                    let delta = e.delta().strip_units();
                    // Lines and pages come through as small numbers
                    let pixels = if delta.y.abs() < 4.0 { delta.y * WHEEL_LINE_PIXELS } else { delta.y };
                    let pixels = if pixels == 0.0 { delta.x } else { pixels };
                    if pixels != 0.0 {
                        on_wheel.call(pixels);
                    }
                },
            }
        }

        if dragging {
            div {
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 9999; cursor: grabbing;",
                oncontextmenu: move |e| e.prevent_default(),
                onmousemove: move |e| {
                    let client = e.client_coordinates();
                    let (x, y) = to_control(client.x, client.y);
                    on_drag.call(PointerEvent { x, y, button: PointerButton::Primary });
                },
                onmouseup: move |e| {
                    let client = e.client_coordinates();
                    let (x, y) = to_control(client.x, client.y);
                    on_release.call(PointerEvent { x, y, button: pointer_button(&e) });
                },
            }
        }
    }
}
