use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use uuid::Uuid;

use super::{Speaker, Timestamp};

/// Unique identifier of a caption within the store.
pub type CaptionId = Uuid;

/// Where on screen a caption is displayed.
///
/// The variant order is the row order on the timeline, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScreenLocation {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    #[default]
    BottomCenter,
    BottomRight,
}

impl ScreenLocation {
    /// All locations in row order.
    pub const ALL: [ScreenLocation; 9] = [
        ScreenLocation::TopLeft,
        ScreenLocation::TopCenter,
        ScreenLocation::TopRight,
        ScreenLocation::MiddleLeft,
        ScreenLocation::MiddleCenter,
        ScreenLocation::MiddleRight,
        ScreenLocation::BottomLeft,
        ScreenLocation::BottomCenter,
        ScreenLocation::BottomRight,
    ];

    /// Number of location rows.
    pub const COUNT: usize = Self::ALL.len();

    /// Row index on the timeline (0 = top).
    pub fn row(self) -> usize {
        self as usize
    }

    /// Location for a row index. Out-of-range rows clamp to the first or last bin.
    pub fn from_row(row: i64) -> Self {
        let clamped = row.clamp(0, Self::COUNT as i64 - 1) as usize;
        Self::ALL[clamped]
    }
}

/// Horizontal text alignment within the caption block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [Alignment::Left, Alignment::Center, Alignment::Right];

    pub fn label(self) -> &'static str {
        match self {
            Alignment::Left => "Left",
            Alignment::Center => "Center",
            Alignment::Right => "Right",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|alignment| alignment.label() == label)
    }
}

/// A single word of caption text and its position in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionWord {
    pub text: String,
    /// Character index of the first letter within the caption text.
    pub begin_index: usize,
    /// Length in characters.
    pub length: usize,
}

/// Width in characters of the separator between two words.
const SPACE_WIDTH: usize = 1;

fn tokenize(text: &str) -> Vec<CaptionWord> {
    let mut words = Vec::new();
    let mut index = 0;
    for word in text.split(' ') {
        let length = word.chars().count();
        if length > 0 {
            words.push(CaptionWord {
                text: word.to_string(),
                begin_index: index,
                length,
            });
        }
        index += length + SPACE_WIDTH;
    }
    words
}

/// A timed caption.
///
/// `begin <= end` is not enforced: a resize drag may invert the interval for
/// a while. Such captions have a negative duration and are skipped when the
/// timeline is drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Caption {
    /// Unique identifier
    pub id: CaptionId,
    pub begin: Timestamp,
    pub end: Timestamp,
    #[serde(default)]
    pub location: ScreenLocation,
    #[serde(default)]
    pub alignment: Alignment,
    /// Name of the speaker; resolved through the project's speaker set.
    #[serde(default = "default_speaker_name")]
    pub speaker: String,
    text: String,
    /// Word list, built on first access after the text changes.
    #[serde(skip)]
    words: OnceCell<Vec<CaptionWord>>,
}

fn default_speaker_name() -> String {
    Speaker::DEFAULT_NAME.to_string()
}

impl Caption {
    /// Create a caption at the given times with the default location and alignment.
    pub fn new(text: &str, speaker: impl Into<String>, begin: Timestamp, end: Timestamp) -> Self {
        let mut caption = Self {
            id: Uuid::new_v4(),
            begin,
            end,
            location: ScreenLocation::default(),
            alignment: Alignment::default(),
            speaker: speaker.into(),
            text: String::new(),
            words: OnceCell::new(),
        };
        caption.set_text(text);
        caption
    }

    /// An empty caption at time zero for the default speaker.
    pub fn blank() -> Self {
        Self::new("", Speaker::DEFAULT_NAME, Timestamp::ZERO, Timestamp::ZERO)
    }

    /// `end - begin` in seconds. May be negative while an edge is being dragged.
    pub fn duration(&self) -> f64 {
        self.end - self.begin
    }

    /// Move the caption so it starts at `begin`, keeping its duration.
    pub fn move_to(&mut self, begin: Timestamp) {
        let duration = self.duration();
        self.begin = begin;
        self.end = Timestamp::from_seconds(begin.as_seconds() + duration);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the caption text. Runs of whitespace collapse to single spaces.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        self.words = OnceCell::new();
    }

    /// The caption text split into positioned words.
    pub fn words(&self) -> &[CaptionWord] {
        self.words.get_or_init(|| tokenize(&self.text))
    }

    /// Whether `time` falls inside `[begin, end]`.
    pub fn contains(&self, time: f64) -> bool {
        self.begin <= time && self.end >= time
    }
}

impl PartialEq for Caption {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.begin == other.begin
            && self.end == other.end
            && self.location == other.location
            && self.alignment == other.alignment
            && self.speaker == other.speaker
            && self.text == other.text
    }
}

impl Default for Caption {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_caption() {
        let caption = Caption::blank();
        assert_eq!(caption.begin, Timestamp::ZERO);
        assert_eq!(caption.end, Timestamp::ZERO);
        assert_eq!(caption.location, ScreenLocation::BottomCenter);
        assert_eq!(caption.alignment, Alignment::Center);
        assert_eq!(caption.speaker, "Default");
        assert!(caption.words().is_empty());
    }

    #[test]
    fn test_words_are_positioned() {
        let caption = Caption::new("  Hello   big world ", "Default", Timestamp::ZERO, Timestamp::ZERO);
        assert_eq!(caption.text(), "Hello big world");
        let words = caption.words();
        assert_eq!(words.len(), 3);
        assert_eq!((words[0].begin_index, words[0].length), (0, 5));
        assert_eq!((words[1].begin_index, words[1].length), (6, 3));
        assert_eq!((words[2].begin_index, words[2].length), (10, 5));
    }

    #[test]
    fn test_set_text_retokenizes() {
        let mut caption = Caption::new("one two", "Default", Timestamp::ZERO, Timestamp::ZERO);
        assert_eq!(caption.words().len(), 2);
        caption.set_text("three");
        assert_eq!(caption.words().len(), 1);
        assert_eq!(caption.words()[0].text, "three");
    }

    #[test]
    fn test_move_to_keeps_duration() {
        let mut caption = Caption::new(
            "x",
            "Default",
            Timestamp::from_seconds(10.0),
            Timestamp::from_seconds(15.0),
        );
        caption.move_to(Timestamp::from_seconds(13.0));
        assert_eq!(caption.begin, Timestamp::from_seconds(13.0));
        assert_eq!(caption.end, Timestamp::from_seconds(18.0));
    }

    #[test]
    fn test_location_rows_clamp() {
        assert_eq!(ScreenLocation::from_row(-4), ScreenLocation::TopLeft);
        assert_eq!(ScreenLocation::from_row(4), ScreenLocation::MiddleCenter);
        assert_eq!(ScreenLocation::from_row(40), ScreenLocation::BottomRight);
        assert_eq!(ScreenLocation::BottomLeft.row(), 6);
    }

    #[test]
    fn test_serialization_rebuilds_words() {
        let caption = Caption::new("Hello world", "Alice", Timestamp::ZERO, Timestamp::from_seconds(2.0));
        let json = serde_json::to_string(&caption).unwrap();
        let parsed: Caption = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.text(), "Hello world");
        assert_eq!(parsed.words().len(), 2);
        assert_eq!(parsed.id, caption.id);
    }

    #[test]
    fn test_alignment_labels() {
        for alignment in Alignment::ALL {
            assert_eq!(Alignment::from_label(alignment.label()), Some(alignment));
        }
        assert_eq!(Alignment::from_label("Justify"), None);
    }
}
