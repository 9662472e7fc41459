//! Root application component
//!
//! This defines the main App component and the overall layout structure.

use dioxus::prelude::*;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::components::{CaptionList, StatusBar, TitleBar};
use crate::constants::*;
use crate::core::playback::{ClockPlayback, PlaybackEngine};
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{CaptionId, Project, TimelineConfig, Timestamp, PROJECT_FILE_NAME};
use crate::timeline::{
    render, MouseInteraction, MouseSelection, PlayheadSynchronizer, TimelineEvent, TimelinePanel,
    Viewport,
};

/// Size of the timeline canvas host as reported by the resize observer.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
struct CanvasSize {
    width: f64,
    height: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct StatusMessage {
    text: String,
    is_error: bool,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Mark the project dirty whenever a caption changes.
fn watch_captions(project: &mut Project, mut dirty: Signal<bool>) {
    project.captions.subscribe(move |change| {
        log::trace!("Caption {} changed: {:?}", change.id, change.kind);
        dirty.set(true);
    });
}

fn new_project() -> Project {
    let mut project = Project::default();
    project.video_length = NEW_PROJECT_VIDEO_LENGTH;
    project
}

fn pick_save_path(project: &Project) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .add_filter("Caption project", &["json"])
        .set_title("Save Captions")
        .set_file_name(PROJECT_FILE_NAME);
    if let Some(dir) = project.project_path.as_ref().and_then(|path| path.parent()) {
        dialog = dialog.set_directory(dir);
    }
    dialog.save_file()
}

fn log_timeline_event(event: &TimelineEvent) {
    match event {
        TimelineEvent::PlayheadChanged(time) => log::debug!("Playhead committed at {:.2}s", time),
        TimelineEvent::CaptionTimestampChanged(id) => log::trace!("Caption {} resized", id),
        TimelineEvent::CaptionMoved(id) => log::trace!("Caption {} moved", id),
    }
}

/// Main application component
#[component]
pub fn App() -> Element {
    let config = use_context::<TimelineConfig>();

    let mut dirty = use_signal(|| false);
    let mut project = use_signal(|| {
        let mut project = new_project();
        watch_captions(&mut project, dirty);
        project
    });
    let mut playback = use_signal(|| ClockPlayback::new(project.peek().video_length));
    let mut viewport = use_signal(|| {
        let mut viewport = Viewport::new(
            config.clone(),
            Viewport::natural_width(&config),
            TIMELINE_DEFAULT_HEIGHT - TIMELINE_HEADER_HEIGHT,
        );
        viewport.set_video_length(project.peek().video_length);
        viewport
    });
    let mut interaction = use_signal(MouseInteraction::new);
    let mut selected = use_signal(|| None::<CaptionId>);
    let mut input_focused = use_signal(|| false);
    let mut status = use_signal(|| StatusMessage::info("Ready"));

    // Timeline resize state
    let mut timeline_height = use_signal(|| TIMELINE_DEFAULT_HEIGHT);
    let mut resizing = use_signal(|| false);
    let mut drag_start_pos = use_signal(|| 0.0_f64);
    let mut drag_start_size = use_signal(|| 0.0_f64);

    let mut canvas_size_eval = use_signal(|| None::<document::Eval>);

    // Playback clock
    let tick_ms = config.playback_tick_ms;
    use_future(move || async move {
        let mut last_tick = Instant::now();
        loop {
            tokio::time::sleep(Duration::from_millis(tick_ms)).await;
            let now = Instant::now();
            let elapsed = now.saturating_duration_since(last_tick);
            last_tick = now;

            if !playback.peek().is_playing() {
                continue;
            }
            playback.write().advance(elapsed);

            // A playhead drag owns the playhead until it is released
            if interaction.peek().selection() == MouseSelection::MovePlayhead {
                continue;
            }
            let engine = playback.read();
            let mut view = viewport.write();
            PlayheadSynchronizer::tick(&*engine, &mut view);
            if !engine.is_playing() {
                view.set_playhead_time(engine.current_time());
            }
        }
    });

    use_effect(move || {
        if canvas_size_eval().is_some() {
            return;
        }
        let eval = document::eval(TIMELINE_CANVAS_SIZE_SCRIPT);
        canvas_size_eval.set(Some(eval));
    });

    use_future(move || async move {
        loop {
            let Some(eval) = canvas_size_eval() else {
                tokio::time::sleep(Duration::from_millis(100)).await;
                continue;
            };
            let mut eval = eval;
            loop {
                match eval.recv::<CanvasSize>().await {
                    Ok(size) => {
                        let (width, height) = (viewport.peek().width(), viewport.peek().height());
                        if (width - size.width).abs() > 0.5 || (height - size.height).abs() > 0.5 {
                            viewport.write().resize(size.width, size.height);
                        }
                    }
                    Err(err) => {
                        log::warn!("Timeline size observer stopped: {:?}", err);
                        break;
                    }
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    });

    // =========================================================================
    // Project actions
    // =========================================================================

    let mut reset_session = move |video_length: f64| {
        playback.set(ClockPlayback::new(video_length));
        interaction.set(MouseInteraction::new());
        selected.set(None);
        let mut view = viewport.write();
        view.set_video_length(video_length);
        view.set_playhead_time(0.0);
        view.set_left_bound(0.0);
    };

    let mut create_project = move || {
        let mut fresh = new_project();
        watch_captions(&mut fresh, dirty);
        let length = fresh.video_length;
        project.set(fresh);
        reset_session(length);
        dirty.set(false);
        status.set(StatusMessage::info("New project"));
    };

    let mut save_project = move |save_as: bool| {
        let known_path = if save_as {
            None
        } else {
            project.read().project_path.clone()
        };
        let result = match known_path {
            Some(path) => project.read().save().map(|()| path),
            None => {
                let Some(path) = pick_save_path(&project.read()) else {
                    return;
                };
                project.write().save_as(&path).map(|()| path)
            }
        };
        match result {
            Ok(path) => {
                dirty.set(false);
                status.set(StatusMessage::info(format!("Saved {}", path.display())));
            }
            Err(err) => {
                log::error!("Failed to save project: {}", err);
                status.set(StatusMessage::error(format!("Save failed: {err}")));
            }
        }
    };

    let mut open_project = move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Caption project", &["json"])
            .set_title("Open Captions")
            .pick_file()
        else {
            return;
        };
        match Project::load(&path) {
            Ok(mut loaded) => {
                watch_captions(&mut loaded, dirty);
                let length = loaded.video_length;
                let name = loaded.name.clone();
                project.set(loaded);
                reset_session(length);
                dirty.set(false);
                status.set(StatusMessage::info(format!("Opened {}", name)));
            }
            Err(err) => {
                log::error!("Failed to open {}: {}", path.display(), err);
                status.set(StatusMessage::error(format!("Open failed: {err}")));
            }
        }
    };

    let mut insert_caption = move || {
        let id = project.write().captions.insert_blank(selected());
        selected.set(Some(id));
    };

    let mut delete_caption = move |id: CaptionId| {
        if project.write().captions.remove(id).is_some() && selected() == Some(id) {
            selected.set(None);
        }
    };

    let mut seek_to = move |time: f64| {
        viewport.write().recenter_on_playhead(time);
        let time = viewport.peek().playhead_time();
        PlayheadSynchronizer::commit_seek(&mut *playback.write(), time);
    };

    let mut set_video_length = move |length: Timestamp| {
        let seconds = length.as_seconds();
        project.write().video_length = seconds;
        playback.write().set_video_length(seconds);
        viewport.write().set_video_length(seconds);
        dirty.set(true);
    };

    // =========================================================================
    // Derived view state
    // =========================================================================

    let scene = {
        let viewport = viewport.read();
        let project = project.read();
        render(&viewport, &project.captions, &project.speakers)
    };
    let (zoom_level, time_width, labels_visible, scroll, playhead_time) = {
        let viewport = viewport.read();
        (
            viewport.zoom_level(),
            viewport.time_width(),
            viewport.draws_location_labels(),
            viewport.scroll(),
            viewport.playhead_time(),
        )
    };
    let (project_name, video_length, captions, speaker_names) = {
        let project = project.read();
        (
            project.name.clone(),
            project.video_length,
            project.captions.captions().to_vec(),
            project.speakers.iter().map(|speaker| speaker.name.clone()).collect::<Vec<_>>(),
        )
    };
    let caption_count = captions.len();
    let is_playing = playback.read().is_playing();
    let dragging = interaction.read().is_dragging();
    let location_labels = config.location_labels.clone();
    let scrollbar_height = config.scrollbar_height;
    let status_message = status();
    let user_select_style = if resizing() { "none" } else { "auto" };

    rsx! {
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; overflow: hidden; background-color: {BG_BASE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 6px; height: 6px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            .collapse-btn {{ opacity: 0.6; transition: opacity 0.15s ease, background-color 0.15s ease; }}
            .collapse-btn:hover {{ opacity: 1; background-color: {BG_HOVER} !important; }}
            .resize-handle {{ transition: background-color 0.15s ease; }}
            .resize-handle:hover {{ background-color: {BORDER_ACCENT} !important; }}
            .resize-handle:active {{ background-color: {BORDER_ACCENT} !important; }}
            "#
        }

        // Main app container
        div {
            class: "app-container",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0;
                user-select: {user_select_style};
                outline: none;
            ",
            onmousemove: move |e| {
                if resizing() {
                    e.prevent_default();
                    let delta = drag_start_pos() - e.client_coordinates().y;
                    let new_h = (drag_start_size() + delta).clamp(TIMELINE_MIN_HEIGHT, TIMELINE_MAX_HEIGHT);
                    timeline_height.set(new_h);
                }
            },
            onmouseup: move |_| resizing.set(false),
            oncontextmenu: move |e| e.prevent_default(),
            // Enable keyboard focus on this container for hotkeys
            tabindex: "0",
            onkeydown: move |e: KeyboardEvent| {
                let hotkey_context = HotkeyContext {
                    has_selection: selected().is_some(),
                    input_focused: input_focused(),
                };

                let modifiers = e.modifiers();
                let shift = modifiers.shift();
                let ctrl = modifiers.ctrl();
                let alt = modifiers.alt();
                let meta = modifiers.meta();

                match handle_hotkey(&e.key(), shift, ctrl, alt, meta, &hotkey_context) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        log::debug!("Hotkey {:?}", action);
                        match action {
                            HotkeyAction::TimelineZoomIn => {
                                viewport.write().zoom_in();
                            }
                            HotkeyAction::TimelineZoomOut => {
                                viewport.write().zoom_out();
                            }
                            HotkeyAction::TimelineZoomReset => viewport.write().zoom_reset(),
                            HotkeyAction::ToggleLocationLabels => viewport.write().toggle_location_labels(),
                            HotkeyAction::PlayPause => playback.write().toggle_play(),
                            HotkeyAction::SaveProject => save_project(false),
                            HotkeyAction::OpenProject => open_project(),
                            HotkeyAction::InsertCaption => insert_caption(),
                            HotkeyAction::DeleteCaption => {
                                if let Some(id) = selected() {
                                    delete_caption(id);
                                }
                            }
                            HotkeyAction::MoveCaptionUp => {
                                if let Some(id) = selected() {
                                    project.write().captions.move_up(id);
                                }
                            }
                            HotkeyAction::MoveCaptionDown => {
                                if let Some(id) = selected() {
                                    project.write().captions.move_down(id);
                                }
                            }
                        }
                    }
                    HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
                }
            },

            TitleBar {
                project_name,
                dirty: dirty(),
                on_new_project: move |_| create_project(),
                on_open: move |_| open_project(),
                on_save: move |_| save_project(false),
                on_save_as: move |_| save_project(true),
                video_length: Timestamp::from_seconds(video_length),
                on_video_length_change: move |length| set_video_length(length),
                on_focus_change: move |focused| input_focused.set(focused),
            }

            CaptionList {
                captions,
                selected: selected(),
                playhead_time,
                location_labels,
                speaker_names,
                on_select: move |id| selected.set(Some(id)),
                on_begin_change: move |(id, begin)| {
                    project.write().captions.set_begin(id, begin);
                },
                on_end_change: move |(id, end)| {
                    project.write().captions.set_end(id, end);
                },
                on_location_change: move |(id, location)| {
                    project.write().captions.set_location(id, location);
                },
                on_alignment_change: move |(id, alignment)| {
                    project.write().captions.set_alignment(id, alignment);
                },
                on_speaker_change: move |(id, speaker): (CaptionId, String)| {
                    let mut project = project.write();
                    project.speakers.get_or_insert(&speaker);
                    project.captions.set_speaker(id, speaker);
                },
                on_text_change: move |(id, text): (CaptionId, String)| {
                    project.write().captions.set_text(id, &text);
                },
                on_insert: move |_| insert_caption(),
                on_delete: move |id| delete_caption(id),
                on_move_up: move |id| {
                    project.write().captions.move_up(id);
                },
                on_move_down: move |id| {
                    project.write().captions.move_down(id);
                },
                on_focus_change: move |focused| input_focused.set(focused),
            }

            // Resize handle between the caption list and the timeline
            div {
                class: "resize-handle",
                style: "height: 4px; flex-shrink: 0; cursor: ns-resize; background-color: {BORDER_DEFAULT};",
                onmousedown: move |e| {
                    e.prevent_default();
                    resizing.set(true);
                    drag_start_pos.set(e.client_coordinates().y);
                    drag_start_size.set(timeline_height());
                },
            }

            TimelinePanel {
                height: timeline_height(),
                scene,
                zoom_level,
                time_width,
                labels_visible,
                scroll,
                scrollbar_height,
                dragging,
                current_time: playhead_time,
                video_length,
                is_playing,
                on_zoom_in: move |_| {
                    viewport.write().zoom_in();
                },
                on_zoom_out: move |_| {
                    viewport.write().zoom_out();
                },
                on_zoom_reset: move |_| viewport.write().zoom_reset(),
                on_toggle_labels: move |_| viewport.write().toggle_location_labels(),
                on_play_pause: move |_| playback.write().toggle_play(),
                on_seek: move |time| seek_to(time),
                on_scroll: move |value| viewport.write().scroll_to(value),
                on_press: move |event| {
                    interaction.write().press(event, &mut viewport.write(), &project.read().captions);
                    if let Some(id) = interaction.peek().active_caption() {
                        selected.set(Some(id));
                    }
                },
                on_drag: move |event| {
                    let changed = interaction
                        .write()
                        .drag(event, &mut viewport.write(), &mut project.write().captions);
                    if let Some(changed) = changed {
                        log_timeline_event(&changed);
                    }
                },
                on_release: move |event| {
                    let committed = interaction.write().release(event, &viewport.read());
                    if let Some(TimelineEvent::PlayheadChanged(time)) = committed {
                        log_timeline_event(&TimelineEvent::PlayheadChanged(time));
                        PlayheadSynchronizer::commit_seek(&mut *playback.write(), time);
                    }
                },
                on_wheel: move |delta: f64| {
                    let step = delta.round() as i64;
                    viewport.write().scroll_by_wheel(step);
                },
            }

            StatusBar {
                message: status_message.text,
                is_error: status_message.is_error,
                caption_count,
                zoom_level,
            }
        }
    }
}
