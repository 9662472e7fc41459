//! Caption project data model
//!
//! A project ties together the video length, the speaker set and the shared
//! caption list, and is saved as a single JSON file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::{CaptionStore, SpeakerSet};
use crate::error::ProjectError;

/// File name used when a project is saved into a folder.
pub const PROJECT_FILE_NAME: &str = "captions.json";

/// The top-level caption project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    pub name: String,
    /// Length of the captioned video in seconds
    #[serde(default)]
    pub video_length: f64,
    /// Speakers referenced by captions
    #[serde(default)]
    pub speakers: SpeakerSet,
    /// Ordered captions
    #[serde(default)]
    pub captions: CaptionStore,
    /// Where the project was loaded from or last saved to
    #[serde(skip)]
    pub project_path: Option<PathBuf>,
}

impl Project {
    /// Create an empty project
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            video_length: 0.0,
            speakers: SpeakerSet::new(),
            captions: CaptionStore::new(),
            project_path: None,
        }
    }

    // =========================================================================
    // Save/Load
    // =========================================================================

    /// Save the project to the file it was loaded from
    pub fn save(&self) -> Result<(), ProjectError> {
        let path = self.project_path.as_ref().ok_or(ProjectError::MissingPath)?;
        self.save_to(path)
    }

    /// Save the project to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), ProjectError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Saved {} captions to {}", self.captions.len(), path.display());
        Ok(())
    }

    /// Save to a new file and remember it as the project path
    pub fn save_as(&mut self, path: &Path) -> Result<(), ProjectError> {
        self.project_path = Some(path.to_path_buf());
        self.save_to(path)
    }

    /// Load a project from a file
    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        let json = fs::read_to_string(path)?;
        let mut project: Project = serde_json::from_str(&json)?;
        project.video_length = project.video_length.max(0.0);
        project.project_path = Some(path.to_path_buf());
        log::info!("Loaded {} captions from {}", project.captions.len(), path.display());
        Ok(project)
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Caption, Timestamp};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("caption-timeline-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[test]
    fn test_default_project() {
        let project = Project::default();
        assert!(project.captions.is_empty());
        assert_eq!(project.speakers.len(), 2);
        assert_eq!(project.video_length, 0.0);
    }

    #[test]
    fn test_project_serialization() {
        let mut project = Project::new("Test Project");
        project.video_length = 42.0;
        project.speakers.get_or_insert("Narrator");
        project.captions.push(Caption::new(
            "Hello there",
            "Narrator",
            Timestamp::from_seconds(1.0),
            Timestamp::from_seconds(2.5),
        ));
        let json = serde_json::to_string_pretty(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, project.name);
        assert_eq!(parsed.captions.len(), 1);
        assert_eq!(parsed.captions.captions()[0].text(), "Hello there");
        assert!(parsed.speakers.get("narrator").is_some());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path(PROJECT_FILE_NAME);
        let mut project = Project::new("Disk");
        project.video_length = 12.0;
        project.captions.insert_blank(None);
        project.save_as(&path).unwrap();

        let loaded = Project::load(&path).unwrap();
        assert_eq!(loaded.name, "Disk");
        assert_eq!(loaded.captions.len(), 1);
        assert_eq!(loaded.project_path.as_deref(), Some(path.as_path()));

        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir_all(parent);
        }
    }

    #[test]
    fn test_save_without_path_fails() {
        let project = Project::default();
        assert!(matches!(project.save(), Err(ProjectError::MissingPath)));
    }

    #[test]
    fn test_load_rejects_bad_timestamps() {
        let path = temp_path(PROJECT_FILE_NAME);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"{"name": "Bad", "captions": [{"id": "00000000-0000-0000-0000-000000000000", "begin": "1.0", "end": "00:00:02.0", "text": ""}]}"#,
        )
        .unwrap();
        assert!(matches!(Project::load(&path), Err(ProjectError::Json(_))));
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir_all(parent);
        }
    }
}
