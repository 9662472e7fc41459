//! Timeline draw pass.
//!
//! [`render`] turns a viewport and the caption list into a flat [`Scene`]
//! of draw commands in control coordinates. It holds no state; the canvas
//! component paints whatever scene it is handed.

use crate::constants::{
    TIMELINE_END_MARKER, TIMELINE_FONT_SIZE, TIMELINE_GRID, TIMELINE_LABEL_BG, TIMELINE_OUTLINE,
    TIMELINE_PLAYHEAD, TIMELINE_TEXT,
};
use crate::state::{Caption, CaptionStore, ScreenLocation, SpeakerSet};

use super::viewport::Viewport;

/// Rough advance of one character at the timeline font size.
const CHAR_WIDTH: f64 = TIMELINE_FONT_SIZE * 0.6;
const CAPTION_RADIUS: f64 = 4.0;
const CAPTION_TEXT_PADDING: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
        fill: Option<String>,
        stroke: Option<String>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: String,
        width: f64,
        dashed: bool,
    },
    /// `y` is the baseline.
    Text {
        x: f64,
        y: f64,
        text: String,
        color: String,
        anchor: TextAnchor,
        bold: bool,
    },
    Polygon {
        points: Vec<(f64, f64)>,
        fill: String,
    },
}

/// Everything drawn for one frame of the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    /// Outline of the control, kept apart so content redraws leave it alone.
    pub frame: DrawCommand,
    pub commands: Vec<DrawCommand>,
}

/// Captions that get drawn: those overlapping the visible window and at
/// least the configured minimum duration long.
pub fn visible_captions<'a>(
    viewport: &Viewport,
    captions: &'a CaptionStore,
) -> impl Iterator<Item = &'a Caption> {
    let left = viewport.left_bound();
    let right = viewport.right_bound();
    let min_duration = viewport.config().min_drawn_duration;
    captions.iter().filter(move |caption| {
        let begin = caption.begin.as_seconds();
        let end = caption.end.as_seconds();
        let begin_visible = left <= begin && begin <= right;
        let end_visible = left <= end && end <= right;
        let spans_window = begin <= left && right <= end;
        (begin_visible || end_visible || spans_window) && caption.duration() >= min_duration
    })
}

fn fit_text(text: &str, width: f64) -> Option<String> {
    let max_chars = (width / CHAR_WIDTH).floor() as usize;
    if max_chars == 0 || text.is_empty() {
        return None;
    }
    let count = text.chars().count();
    if count <= max_chars {
        return Some(text.to_string());
    }
    if max_chars < 2 {
        return None;
    }
    let mut fitted: String = text.chars().take(max_chars - 1).collect();
    fitted.push('…');
    Some(fitted)
}

/// Caption text cut at the last whole word that fits, falling back to a
/// character cut when even the first word is too long.
fn fit_caption_text(caption: &Caption, width: f64) -> Option<String> {
    let text = caption.text();
    let max_chars = (width / CHAR_WIDTH).floor() as usize;
    if text.chars().count() <= max_chars {
        return fit_text(text, width);
    }
    // one character is kept free for the ellipsis
    let last_whole = caption
        .words()
        .iter()
        .take_while(|word| word.begin_index + word.length < max_chars)
        .last();
    match last_whole {
        Some(word) => {
            let mut fitted: String = text.chars().take(word.begin_index + word.length).collect();
            fitted.push('…');
            Some(fitted)
        }
        None => fit_text(text, width),
    }
}

/// Build the scene for the current viewport.
pub fn render(viewport: &Viewport, captions: &CaptionStore, speakers: &SpeakerSet) -> Scene {
    let config = viewport.config();
    let mapper = viewport.mapper();
    let width = viewport.width();
    let bar = config.playhead_bar_height();
    let half = config.playhead_half_width;
    let available_height = viewport.drawable_height();
    let row_height = viewport.row_height();
    let bottom = bar + available_height;
    let origin_x = viewport.caption_origin_x();

    let frame = DrawCommand::Rect {
        x: 0.0,
        y: 0.0,
        width: (width - 1.0).max(0.0),
        height: (bottom - 1.0).max(0.0),
        radius: 0.0,
        fill: None,
        stroke: Some(TIMELINE_OUTLINE.to_string()),
    };

    let mut commands = Vec::new();

    // Row separators
    for location in ScreenLocation::ALL {
        let y = mapper.row_top(location);
        let first = location.row() == 0;
        commands.push(DrawCommand::Line {
            x1: origin_x,
            y1: y,
            x2: width,
            y2: y,
            color: if first { TIMELINE_OUTLINE } else { TIMELINE_GRID }.to_string(),
            width: 1.0,
            dashed: !first,
        });
    }

    // End of video
    let video_length = viewport.video_length();
    if viewport.left_bound() <= video_length && video_length <= viewport.right_bound() {
        let x = mapper.time_to_x(video_length);
        commands.push(DrawCommand::Line {
            x1: x,
            y1: 0.0,
            x2: x,
            y2: bottom,
            color: TIMELINE_END_MARKER.to_string(),
            width: 2.0,
            dashed: false,
        });
    }

    // Captions
    let overdraw = config.out_of_bounds_draw_limit;
    for caption in visible_captions(viewport, captions) {
        let begin_offset = (caption.begin.as_seconds() - viewport.left_bound()) * viewport.pixels_per_second();
        let end_offset = (caption.end.as_seconds() - viewport.left_bound()) * viewport.pixels_per_second();
        let rel_x = begin_offset.max(-overdraw);
        let rect_width = (end_offset - rel_x).min(width + overdraw);
        let x = origin_x + rel_x;
        let y = mapper.row_top(caption.location) + 1.0;
        let height = (row_height - 2.0).max(0.0);
        let style = speakers.style_for(&caption.speaker);

        commands.push(DrawCommand::Rect {
            x,
            y,
            width: rect_width,
            height,
            radius: CAPTION_RADIUS,
            fill: Some(style.background_color.clone()),
            stroke: Some(TIMELINE_OUTLINE.to_string()),
        });

        // Text starts at the visible part of the caption
        let text_x = x.max(origin_x) + CAPTION_TEXT_PADDING;
        let text_width = x + rect_width - text_x - CAPTION_TEXT_PADDING;
        if height >= TIMELINE_FONT_SIZE {
            if let Some(text) = fit_caption_text(caption, text_width) {
                commands.push(DrawCommand::Text {
                    x: text_x,
                    y: y + height / 2.0 + TIMELINE_FONT_SIZE / 3.0,
                    text,
                    color: style.text_color.clone(),
                    anchor: TextAnchor::Start,
                    bold: style.bold,
                });
            }
        }
    }

    // Axis labels, each centred in a box of the configured width
    let tick_label_width = config.tick_label_width;
    for tick in viewport.tick_times() {
        let x = mapper.time_to_x(tick.as_seconds());
        if x + tick_label_width / 2.0 < origin_x || x - tick_label_width / 2.0 > width {
            continue;
        }
        if let Some(text) = fit_text(&tick.to_string(), tick_label_width) {
            commands.push(DrawCommand::Text {
                x,
                y: bar - half / 2.0 - 1.0,
                text,
                color: TIMELINE_TEXT.to_string(),
                anchor: TextAnchor::Middle,
                bold: false,
            });
        }
        commands.push(DrawCommand::Line {
            x1: x,
            y1: bar - half / 2.0,
            x2: x,
            y2: bar,
            color: TIMELINE_OUTLINE.to_string(),
            width: 1.0,
            dashed: false,
        });
    }

    // Playhead
    let x = mapper.time_to_x(viewport.playhead_time());
    commands.push(DrawCommand::Polygon {
        points: vec![(x - half, 0.0), (x, half), (x + half, 0.0)],
        fill: TIMELINE_PLAYHEAD.to_string(),
    });
    commands.push(DrawCommand::Line {
        x1: x,
        y1: 0.0,
        x2: x,
        y2: bottom,
        color: TIMELINE_PLAYHEAD.to_string(),
        width: 2.0,
        dashed: false,
    });

    // Location labels cover anything drawn left of the caption origin
    if viewport.draws_location_labels() {
        let label_width = config.location_label_width;
        for location in ScreenLocation::ALL {
            let y = mapper.row_top(location);
            let height = if location.row() == ScreenLocation::COUNT - 1 {
                row_height - 1.0
            } else {
                row_height
            };
            commands.push(DrawCommand::Rect {
                x: 0.0,
                y,
                width: label_width,
                height: height.max(0.0),
                radius: 0.0,
                fill: Some(TIMELINE_LABEL_BG.to_string()),
                stroke: Some(TIMELINE_OUTLINE.to_string()),
            });
            commands.push(DrawCommand::Text {
                x: 4.0,
                y: y + row_height / 2.0 + TIMELINE_FONT_SIZE / 3.0,
                text: config.location_label(location).to_string(),
                color: TIMELINE_TEXT.to_string(),
                anchor: TextAnchor::Start,
                bold: false,
            });
        }
    }

    Scene {
        width,
        height: viewport.height(),
        frame,
        commands,
    }
}
