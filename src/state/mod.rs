//! State management module
//!
//! This module contains the core data structures for the application:
//! - Timestamp: Caption times with `HH:MM:SS.D` text form
//! - Caption: Timed caption text with a screen location and speaker
//! - Speaker: Shared, case-insensitively named speakers
//! - CaptionStore: The ordered caption list shared by every view
//! - Project: The saved container for all of the above
//! - TimelineConfig: Tuning values for the timeline

mod timestamp;
mod caption;
mod speaker;
mod store;
mod project;
mod settings;

pub use timestamp::Timestamp;
pub use caption::{Alignment, Caption, CaptionId, CaptionWord, ScreenLocation};
pub use speaker::{Speaker, SpeakerSet, SpeakerStyle};
pub use store::{CaptionChange, CaptionChangeKind, CaptionStore, SubscriptionId};
pub use project::{Project, PROJECT_FILE_NAME};
pub use settings::{TimelineConfig, ZoomConfig, CONFIG_FILE_NAME};
