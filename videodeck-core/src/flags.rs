//! Registry of flagged videos and the reasons they were flagged.

use std::collections::HashMap;

use crate::catalog::VideoId;

/// Mapping from video identifier to the reason it was flagged.
///
/// Presence of an entry means the video is flagged. The registry never
/// consults the catalog; existence checks belong to the caller.
#[derive(Debug, Default)]
pub struct FlagRegistry {
    reasons: HashMap<VideoId, String>,
}

impl FlagRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            reasons: HashMap::new(),
        }
    }

    /// Flags a video. Returns `false` and keeps the stored reason if the
    /// video is already flagged.
    pub fn add(&mut self, video_id: &VideoId, reason: impl Into<String>) -> bool {
        if self.reasons.contains_key(video_id) {
            return false;
        }
        self.reasons.insert(video_id.clone(), reason.into());
        true
    }

    /// Removes a flag. Returns `false` if the video was not flagged.
    pub fn remove(&mut self, video_id: &VideoId) -> bool {
        self.reasons.remove(video_id).is_some()
    }

    pub fn is_flagged(&self, video_id: &VideoId) -> bool {
        self.reasons.contains_key(video_id)
    }

    pub fn reason_for(&self, video_id: &VideoId) -> Option<&str> {
        self.reasons.get(video_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    /// Iterates over `(video_id, reason)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&VideoId, &str)> {
        self.reasons.iter().map(|(id, reason)| (id, reason.as_str()))
    }
}
