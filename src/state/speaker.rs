use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display styling for a speaker's captions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerStyle {
    /// Caption text colour (hex string, e.g., "#fafafa")
    pub text_color: String,
    /// Caption block colour on the timeline and in the player
    pub background_color: String,
    /// Render caption text in bold
    #[serde(default)]
    pub bold: bool,
}

impl Default for SpeakerStyle {
    fn default() -> Self {
        Self {
            text_color: "#fafafa".to_string(),
            background_color: "#22c55e".to_string(),
            bold: false,
        }
    }
}

/// A named speaker shared by any number of captions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    #[serde(default)]
    pub style: SpeakerStyle,
}

impl Speaker {
    pub const DEFAULT_NAME: &'static str = "Default";
    pub const DESCRIPTION_NAME: &'static str = "Description";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: SpeakerStyle::default(),
        }
    }

    /// The speaker used when none is given.
    pub fn default_speaker() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }

    /// The speaker used for descriptive (non-dialogue) captions.
    pub fn description() -> Self {
        Self {
            name: Self::DESCRIPTION_NAME.to_string(),
            style: SpeakerStyle {
                text_color: "#fafafa".to_string(),
                background_color: "#3b82f6".to_string(),
                bold: false,
            },
        }
    }
}

/// Name → speaker mapping with case-insensitive keys.
///
/// "Default" and "Description" are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Speaker>", into = "Vec<Speaker>")]
pub struct SpeakerSet {
    speakers: BTreeMap<String, Speaker>,
}

fn speaker_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl SpeakerSet {
    pub fn new() -> Self {
        let mut speakers = BTreeMap::new();
        for speaker in [Speaker::default_speaker(), Speaker::description()] {
            speakers.insert(speaker_key(&speaker.name), speaker);
        }
        Self { speakers }
    }

    /// Look up a speaker by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Speaker> {
        self.speakers.get(&speaker_key(name))
    }

    /// Look up a speaker, creating it with default styling if missing.
    pub fn get_or_insert(&mut self, name: &str) -> &Speaker {
        let key = speaker_key(name);
        self.speakers
            .entry(key)
            .or_insert_with(|| Speaker::new(name.trim()))
    }

    /// Insert or replace a speaker. Returns the previous entry with the same key.
    pub fn insert(&mut self, speaker: Speaker) -> Option<Speaker> {
        self.speakers.insert(speaker_key(&speaker.name), speaker)
    }

    /// Styling for a speaker name, falling back to the default speaker.
    pub fn style_for(&self, name: &str) -> SpeakerStyle {
        self.get(name)
            .or_else(|| self.get(Speaker::DEFAULT_NAME))
            .map(|speaker| speaker.style.clone())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Speaker> {
        self.speakers.values()
    }

    pub fn len(&self) -> usize {
        self.speakers.len()
    }
}

impl Default for SpeakerSet {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Speaker>> for SpeakerSet {
    fn from(list: Vec<Speaker>) -> Self {
        let mut set = SpeakerSet::new();
        for speaker in list {
            set.insert(speaker);
        }
        set
    }
}

impl From<SpeakerSet> for Vec<Speaker> {
    fn from(set: SpeakerSet) -> Self {
        set.speakers.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_always_present() {
        let set = SpeakerSet::new();
        assert_eq!(set.len(), 2);
        assert!(set.get("default").is_some());
        assert!(set.get("DESCRIPTION").is_some());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut set = SpeakerSet::new();
        set.get_or_insert("Narrator");
        assert_eq!(set.get("narrator").unwrap().name, "Narrator");
        set.get_or_insert("NARRATOR");
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_style_falls_back_to_default() {
        let set = SpeakerSet::new();
        assert_eq!(set.style_for("Nobody"), SpeakerStyle::default());
        assert_eq!(
            set.style_for("description"),
            Speaker::description().style
        );
    }

    #[test]
    fn test_deserialize_keeps_sentinels() {
        let set: SpeakerSet = serde_json::from_str(r#"[{"name": "Alice"}]"#).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.get("alice").is_some());
    }
}
