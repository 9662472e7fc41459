//! The shared caption list.
//!
//! The timeline and the caption list panel both read from and write to the
//! same ordered captions. Writes go through the mutators here, and every
//! mutation is reported to the registered observers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Alignment, Caption, CaptionId, ScreenLocation, Timestamp};

/// What changed on a caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionChangeKind {
    Inserted,
    Removed,
    /// Position in the list changed.
    Reordered,
    Begin,
    End,
    /// Begin and end shifted together.
    Moved,
    Location,
    Alignment,
    Speaker,
    Text,
}

/// Notification sent to store observers after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionChange {
    pub id: CaptionId,
    pub kind: CaptionChangeKind,
}

/// Handle returned by [`CaptionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&CaptionChange)>;

/// Ordered caption list owned by the project.
#[derive(Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaptionStore {
    captions: Vec<Caption>,
    #[serde(skip)]
    observers: Vec<(SubscriptionId, Observer)>,
    #[serde(skip)]
    next_subscription: u64,
}

impl fmt::Debug for CaptionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptionStore")
            .field("captions", &self.captions)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Clone for CaptionStore {
    /// Clones the captions only; observers are not copied.
    fn clone(&self) -> Self {
        Self::from_captions(self.captions.clone())
    }
}

impl CaptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_captions(captions: Vec<Caption>) -> Self {
        Self {
            captions,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Register a callback run after every mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&CaptionChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.observers.retain(|(existing, _)| *existing != id);
    }

    fn notify(&mut self, id: CaptionId, kind: CaptionChangeKind) {
        let change = CaptionChange { id, kind };
        for (_, observer) in self.observers.iter_mut() {
            observer(&change);
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn captions(&self) -> &[Caption] {
        &self.captions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Caption> {
        self.captions.iter()
    }

    pub fn get(&self, id: CaptionId) -> Option<&Caption> {
        self.captions.iter().find(|caption| caption.id == id)
    }

    pub fn len(&self) -> usize {
        self.captions.len()
    }

    /// Position of a caption in the list.
    pub fn index_of(&self, id: CaptionId) -> Option<usize> {
        self.captions.iter().position(|caption| caption.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    // =========================================================================
    // Insert / remove
    // =========================================================================

    /// Append a caption and return its id.
    pub fn push(&mut self, caption: Caption) -> CaptionId {
        let id = caption.id;
        self.captions.push(caption);
        self.notify(id, CaptionChangeKind::Inserted);
        id
    }

    /// Insert a caption at `index` (clamped to the list length).
    pub fn insert(&mut self, index: usize, caption: Caption) -> CaptionId {
        let id = caption.id;
        let index = index.min(self.captions.len());
        self.captions.insert(index, caption);
        self.notify(id, CaptionChangeKind::Inserted);
        id
    }

    /// Insert a blank caption at time zero.
    ///
    /// It takes the place of `before` when that caption exists, pushing it
    /// down one row, and goes to the start of the list otherwise.
    pub fn insert_blank(&mut self, before: Option<CaptionId>) -> CaptionId {
        let index = before.and_then(|id| self.index_of(id)).unwrap_or(0);
        self.insert(index, Caption::blank())
    }

    pub fn remove(&mut self, id: CaptionId) -> Option<Caption> {
        let index = self.index_of(id)?;
        let removed = self.captions.remove(index);
        self.notify(id, CaptionChangeKind::Removed);
        Some(removed)
    }

    // =========================================================================
    // Reorder
    // =========================================================================

    /// Swap a caption with the one above it. False at the top or for unknown ids.
    pub fn move_up(&mut self, id: CaptionId) -> bool {
        match self.index_of(id) {
            Some(index) if index > 0 => {
                self.captions.swap(index, index - 1);
                self.notify(id, CaptionChangeKind::Reordered);
                true
            }
            _ => false,
        }
    }

    /// Swap a caption with the one below it. False at the bottom or for unknown ids.
    pub fn move_down(&mut self, id: CaptionId) -> bool {
        match self.index_of(id) {
            Some(index) if index + 1 < self.captions.len() => {
                self.captions.swap(index, index + 1);
                self.notify(id, CaptionChangeKind::Reordered);
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    fn update(
        &mut self,
        id: CaptionId,
        kind: CaptionChangeKind,
        apply: impl FnOnce(&mut Caption),
    ) -> bool {
        let Some(caption) = self.captions.iter_mut().find(|caption| caption.id == id) else {
            return false;
        };
        apply(caption);
        self.notify(id, kind);
        true
    }

    /// Set the begin time. Does not reorder or clamp against `end`.
    pub fn set_begin(&mut self, id: CaptionId, begin: Timestamp) -> bool {
        self.update(id, CaptionChangeKind::Begin, |caption| caption.begin = begin)
    }

    /// Set the end time. Does not clamp against `begin`.
    pub fn set_end(&mut self, id: CaptionId, end: Timestamp) -> bool {
        self.update(id, CaptionChangeKind::End, |caption| caption.end = end)
    }

    /// Move the caption to start at `begin`, keeping its duration.
    pub fn move_caption(&mut self, id: CaptionId, begin: Timestamp) -> bool {
        self.update(id, CaptionChangeKind::Moved, |caption| caption.move_to(begin))
    }

    pub fn set_location(&mut self, id: CaptionId, location: ScreenLocation) -> bool {
        self.update(id, CaptionChangeKind::Location, |caption| caption.location = location)
    }

    pub fn set_alignment(&mut self, id: CaptionId, alignment: Alignment) -> bool {
        self.update(id, CaptionChangeKind::Alignment, |caption| caption.alignment = alignment)
    }

    pub fn set_speaker(&mut self, id: CaptionId, speaker: impl Into<String>) -> bool {
        let speaker = speaker.into();
        self.update(id, CaptionChangeKind::Speaker, |caption| caption.speaker = speaker)
    }

    pub fn set_text(&mut self, id: CaptionId, text: &str) -> bool {
        self.update(id, CaptionChangeKind::Text, |caption| caption.set_text(text))
    }
}
