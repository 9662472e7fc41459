//! Row view of the caption list.
//!
//! Shows the same captions the timeline draws and edits them through the
//! store mutators, so changes made here and on the timeline stay in sync.

use dioxus::prelude::*;

use crate::constants::*;
use crate::state::{Alignment, Caption, CaptionId, ScreenLocation, Timestamp};

use super::common::{TextField, TimestampField};

const HEADER_CELL: &str = "font-size: 10px; font-weight: 500; text-transform: uppercase; letter-spacing: 0.5px;";
const GRID_COLUMNS: &str = "100px 100px 130px 80px 120px 1fr";
const SPEAKER_LIST_ID: &str = "speaker-names";
const SELECT_STYLE: &str = "font-size: 12px; padding: 3px 4px; border-radius: 4px;";

#[component]
pub fn CaptionList(
    captions: Vec<Caption>,
    selected: Option<CaptionId>,
    playhead_time: f64,
    location_labels: Vec<String>,
    speaker_names: Vec<String>,
    on_select: EventHandler<CaptionId>,
    on_begin_change: EventHandler<(CaptionId, Timestamp)>,
    on_end_change: EventHandler<(CaptionId, Timestamp)>,
    on_location_change: EventHandler<(CaptionId, ScreenLocation)>,
    on_alignment_change: EventHandler<(CaptionId, Alignment)>,
    on_speaker_change: EventHandler<(CaptionId, String)>,
    on_text_change: EventHandler<(CaptionId, String)>,
    on_insert: EventHandler<MouseEvent>,
    on_delete: EventHandler<CaptionId>,
    on_move_up: EventHandler<CaptionId>,
    on_move_down: EventHandler<CaptionId>,
    on_focus_change: EventHandler<bool>,
) -> Element {
    let count = captions.len();
    let selected_index = selected.and_then(|id| captions.iter().position(|c| c.id == id));
    let can_move_up = selected_index.is_some_and(|index| index > 0);
    let can_move_down = selected_index.is_some_and(|index| index + 1 < count);
    let small_btn = format!(
        "height: 22px; padding: 0 8px; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; background: transparent; color: {TEXT_SECONDARY}; font-size: 11px; cursor: pointer;"
    );

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                flex: 1; min-height: {CAPTION_LIST_MIN_HEIGHT}px;
                background-color: {BG_ELEVATED};
                border-bottom: 1px solid {BORDER_DEFAULT};
                overflow: hidden;
            ",

            // Header
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: 32px; padding: 0 14px; flex-shrink: 0;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                ",
                span { style: "{HEADER_CELL} color: {TEXT_MUTED};", "Captions ({count})" }
                div {
                    style: "display: flex; gap: 6px;",
                    button {
                        class: "collapse-btn",
                        style: "height: 22px; padding: 0 8px; border: 1px dashed {BORDER_DEFAULT}; border-radius: 4px; background: transparent; color: {TEXT_SECONDARY}; font-size: 11px; cursor: pointer;",
                        title: "Insert caption (Insert)",
                        onclick: move |e| on_insert.call(e),
                        span { style: "color: {ACCENT_CAPTION};", "+" }
                        " Caption"
                    }
                    button {
                        class: "collapse-btn",
                        style: "height: 22px; padding: 0 8px; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; background: transparent; color: {TEXT_SECONDARY}; font-size: 11px; cursor: pointer;",
                        title: "Delete caption (Delete)",
                        disabled: selected.is_none(),
                        onclick: move |_| {
                            if let Some(id) = selected {
                                on_delete.call(id);
                            }
                        },
                        "Delete"
                    }
                    button {
                        class: "collapse-btn",
                        style: "{small_btn}",
                        title: "Move caption up (Alt+Up)",
                        disabled: !can_move_up,
                        onclick: move |_| {
                            if let Some(id) = selected {
                                on_move_up.call(id);
                            }
                        },
                        "Up"
                    }
                    button {
                        class: "collapse-btn",
                        style: "{small_btn}",
                        title: "Move caption down (Alt+Down)",
                        disabled: !can_move_down,
                        onclick: move |_| {
                            if let Some(id) = selected {
                                on_move_down.call(id);
                            }
                        },
                        "Down"
                    }
                }
            }

            datalist {
                id: SPEAKER_LIST_ID,
                for name in speaker_names.iter() {
                    option { key: "{name}", value: "{name}" }
                }
            }

            // Column titles
            div {
                style: "display: grid; grid-template-columns: {GRID_COLUMNS}; gap: 8px; padding: 6px 14px; flex-shrink: 0; border-bottom: 1px solid {BORDER_SUBTLE};",
                span { style: "{HEADER_CELL} color: {TEXT_MUTED};", "Begin" }
                span { style: "{HEADER_CELL} color: {TEXT_MUTED};", "End" }
                span { style: "{HEADER_CELL} color: {TEXT_MUTED};", "Location" }
                span { style: "{HEADER_CELL} color: {TEXT_MUTED};", "Align" }
                span { style: "{HEADER_CELL} color: {TEXT_MUTED};", "Speaker" }
                span { style: "{HEADER_CELL} color: {TEXT_MUTED};", "Text" }
            }

            div {
                style: "flex: 1; overflow-y: auto;",
                if captions.is_empty() {
                    div {
                        style: "padding: 16px 14px; font-size: 12px; color: {TEXT_DIM};",
                        "No captions. Press Insert to add one."
                    }
                }
                for caption in captions.iter() {
                    CaptionRow {
                        key: "{caption.id}",
                        caption: caption.clone(),
                        selected: selected == Some(caption.id),
                        active: caption.contains(playhead_time),
                        location_labels: location_labels.clone(),
                        on_select,
                        on_begin_change,
                        on_end_change,
                        on_location_change,
                        on_alignment_change,
                        on_speaker_change,
                        on_text_change,
                        on_focus_change,
                    }
                }
            }
        }
    }
}

#[component]
fn CaptionRow(
    caption: Caption,
    selected: bool,
    active: bool,
    location_labels: Vec<String>,
    on_select: EventHandler<CaptionId>,
    on_begin_change: EventHandler<(CaptionId, Timestamp)>,
    on_end_change: EventHandler<(CaptionId, Timestamp)>,
    on_location_change: EventHandler<(CaptionId, ScreenLocation)>,
    on_alignment_change: EventHandler<(CaptionId, Alignment)>,
    on_speaker_change: EventHandler<(CaptionId, String)>,
    on_text_change: EventHandler<(CaptionId, String)>,
    on_focus_change: EventHandler<bool>,
) -> Element {
    let id = caption.id;
    let current_alignment = caption.alignment;
    let bg = if selected {
        BG_HOVER
    } else if active {
        BG_SURFACE
    } else {
        "transparent"
    };
    let accent = if active { ACCENT_CAPTION } else { "transparent" };
    let current_row = caption.location.row();

    rsx! {
        div {
            style: "
                display: grid; grid-template-columns: {GRID_COLUMNS}; gap: 8px;
                align-items: center; padding: 4px 14px 4px 12px;
                background-color: {bg}; border-left: 2px solid {accent};
                border-bottom: 1px solid {BORDER_SUBTLE};
            ",
            onmousedown: move |_| on_select.call(id),
            TimestampField {
                value: caption.begin,
                on_commit: move |begin| on_begin_change.call((id, begin)),
                on_focus_change,
            }
            TimestampField {
                value: caption.end,
                on_commit: move |end| on_end_change.call((id, end)),
                on_focus_change,
            }
            select {
                style: "{SELECT_STYLE} background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT};",
                onchange: move |e| {
                    if let Ok(row) = e.value().parse::<i64>() {
                        on_location_change.call((id, ScreenLocation::from_row(row)));
                    }
                },
                for location in ScreenLocation::ALL {
                    option {
                        key: "{location.row()}",
                        value: "{location.row()}",
                        selected: location.row() == current_row,
                        {location_labels.get(location.row()).cloned().unwrap_or_default()}
                    }
                }
            }
            select {
                style: "{SELECT_STYLE} background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT};",
                onchange: move |e| {
                    if let Some(alignment) = Alignment::from_label(&e.value()) {
                        on_alignment_change.call((id, alignment));
                    }
                },
                for alignment in Alignment::ALL {
                    option {
                        key: "{alignment.label()}",
                        value: "{alignment.label()}",
                        selected: alignment == current_alignment,
                        "{alignment.label()}"
                    }
                }
            }
            TextField {
                value: caption.speaker.clone(),
                list: SPEAKER_LIST_ID.to_string(),
                on_commit: move |speaker| on_speaker_change.call((id, speaker)),
                on_focus_change,
            }
            TextField {
                value: caption.text().to_string(),
                placeholder: "Caption text".to_string(),
                on_commit: move |text| on_text_change.call((id, text)),
                on_focus_change,
            }
        }
    }
}
