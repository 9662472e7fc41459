//! Mouse interaction state machine for the timeline.
//!
//! Input arrives as host-independent [`PointerEvent`]s in control
//! coordinates. A press picks an action, drags apply it, and the release
//! commits it and returns to [`MouseSelection::NoAction`].

use crate::state::{CaptionId, CaptionStore, Timestamp};

use super::mapper::CoordinateMapper;
use super::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
    Other,
}

/// A pointer event in control coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn primary(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            button: PointerButton::Primary,
        }
    }
}

/// What the current drag is doing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MouseSelection {
    #[default]
    NoAction,
    MovePlayhead,
    ResizeBegin { caption: CaptionId },
    ResizeEnd { caption: CaptionId },
    /// `click_offset` is the time between the click and the caption begin.
    MoveCaption { caption: CaptionId, click_offset: f64 },
}

/// Notifications for the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineEvent {
    /// Playhead drag committed at this time.
    PlayheadChanged(f64),
    /// Begin or end of a caption changed during a drag.
    CaptionTimestampChanged(CaptionId),
    /// A caption was dragged to a new time or row.
    CaptionMoved(CaptionId),
}

/// Find the action a press at `(x, y)` starts on a caption.
///
/// Only captions in the row under the press are considered. For each, in
/// store order, the begin edge wins over the end edge, which wins over the
/// body. The first caption that matches is taken.
pub fn hit_test(
    captions: &CaptionStore,
    mapper: &CoordinateMapper,
    tolerance: f64,
    x: f64,
    y: f64,
) -> MouseSelection {
    let location = mapper.y_to_location(y);
    for caption in captions.iter().filter(|caption| caption.location == location) {
        let begin_x = mapper.time_to_x(caption.begin.as_seconds());
        if (x - begin_x).abs() <= tolerance {
            return MouseSelection::ResizeBegin { caption: caption.id };
        }

        let end_x = mapper.time_to_x(caption.end.as_seconds());
        if (x - end_x).abs() <= tolerance {
            return MouseSelection::ResizeEnd { caption: caption.id };
        }

        if begin_x <= x && x <= end_x {
            return MouseSelection::MoveCaption {
                caption: caption.id,
                click_offset: mapper.x_to_time(x) - caption.begin.as_seconds(),
            };
        }
    }
    MouseSelection::NoAction
}

/// Press/drag/release handling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseInteraction {
    selection: MouseSelection,
}

impl MouseInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> MouseSelection {
        self.selection
    }

    /// Caption being dragged, if any.
    pub fn active_caption(&self) -> Option<CaptionId> {
        match self.selection {
            MouseSelection::ResizeBegin { caption }
            | MouseSelection::ResizeEnd { caption }
            | MouseSelection::MoveCaption { caption, .. } => Some(caption),
            MouseSelection::NoAction | MouseSelection::MovePlayhead => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.selection != MouseSelection::NoAction
    }

    fn in_playhead_bar(viewport: &Viewport, x: f64, y: f64) -> bool {
        let config = viewport.config();
        let left = viewport.caption_origin_x();
        let right = left + viewport.width() - config.location_label_width;
        (left..right).contains(&x) && (0.0..config.playhead_bar_height()).contains(&y)
    }

    /// Start an action. A press in the playhead bar also moves the playhead there.
    ///
    /// Returns whether anything visible changed.
    pub fn press(&mut self, event: PointerEvent, viewport: &mut Viewport, captions: &CaptionStore) -> bool {
        if event.button != PointerButton::Primary {
            return false;
        }

        let mapper = viewport.mapper();
        if Self::in_playhead_bar(viewport, event.x, event.y) {
            self.selection = MouseSelection::MovePlayhead;
            viewport.set_playhead_time(mapper.x_to_time(event.x));
            return true;
        }

        let tolerance = viewport.config().caption_selection_px;
        self.selection = hit_test(captions, &mapper, tolerance, event.x, event.y);
        if self.selection != MouseSelection::NoAction {
            log::trace!("Timeline press selected {:?}", self.selection);
        }
        false
    }

    /// Apply the current action at the pointer position.
    pub fn drag(
        &mut self,
        event: PointerEvent,
        viewport: &mut Viewport,
        captions: &mut CaptionStore,
    ) -> Option<TimelineEvent> {
        if event.button != PointerButton::Primary {
            return None;
        }

        let mapper = viewport.mapper();
        let time = mapper.x_to_time(event.x).max(0.0);

        let (caption, changed) = match self.selection {
            MouseSelection::NoAction => return None,
            MouseSelection::MovePlayhead => {
                viewport.set_playhead_time(time);
                return None;
            }
            MouseSelection::ResizeBegin { caption } => (
                caption,
                captions
                    .set_begin(caption, Timestamp::from_seconds(time))
                    .then_some(TimelineEvent::CaptionTimestampChanged(caption)),
            ),
            MouseSelection::ResizeEnd { caption } => (
                caption,
                captions
                    .set_end(caption, Timestamp::from_seconds(time))
                    .then_some(TimelineEvent::CaptionTimestampChanged(caption)),
            ),
            MouseSelection::MoveCaption { caption, click_offset } => {
                let begin = Timestamp::from_seconds(time - click_offset);
                let moved = captions.move_caption(caption, begin);
                if moved {
                    captions.set_location(caption, mapper.y_to_location(event.y));
                }
                (caption, moved.then_some(TimelineEvent::CaptionMoved(caption)))
            }
        };

        if changed.is_none() {
            log::debug!("Caption {} disappeared during drag", caption);
            self.selection = MouseSelection::NoAction;
        }
        changed
    }

    /// Finish the current action.
    pub fn release(&mut self, event: PointerEvent, viewport: &Viewport) -> Option<TimelineEvent> {
        if event.button != PointerButton::Primary {
            return None;
        }
        let committed = match self.selection {
            MouseSelection::MovePlayhead => Some(TimelineEvent::PlayheadChanged(viewport.playhead_time())),
            _ => None,
        };
        self.selection = MouseSelection::NoAction;
        committed
    }
}
