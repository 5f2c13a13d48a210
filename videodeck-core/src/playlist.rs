//! Named playlists and the case-insensitive registry that owns them.

use std::collections::HashMap;

use crate::catalog::VideoId;

/// Ordered, duplicate-free list of video identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    name: String,
    contents: Vec<VideoId>,
}

impl Playlist {
    /// Creates an empty playlist. The name keeps the case it was given.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a video. Returns `false` if it is already present.
    pub fn add(&mut self, video_id: &VideoId) -> bool {
        if self.contains(video_id) {
            return false;
        }
        self.contents.push(video_id.clone());
        true
    }

    /// Removes a video. Returns `false` if it is absent.
    pub fn remove(&mut self, video_id: &VideoId) -> bool {
        match self.contents.iter().position(|id| id == video_id) {
            Some(position) => {
                self.contents.remove(position);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.contents.clear();
    }

    /// Video identifiers in insertion order.
    pub fn contents(&self) -> &[VideoId] {
        &self.contents
    }

    pub fn contains(&self, video_id: &VideoId) -> bool {
        self.contents.contains(video_id)
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

/// Playlists keyed by lower-cased name.
///
/// No two playlists may have names that are equal ignoring case. Lookups
/// accept any casing of the name.
#[derive(Debug, Default)]
pub struct PlaylistRegistry {
    playlists: HashMap<String, Playlist>,
}

impl PlaylistRegistry {
    pub fn new() -> Self {
        Self {
            playlists: HashMap::new(),
        }
    }

    fn key(name: &str) -> String {
        name.to_lowercase()
    }

    /// Creates an empty playlist. Returns `false` if the name is taken.
    pub fn create(&mut self, name: &str) -> bool {
        let key = Self::key(name);
        if self.playlists.contains_key(&key) {
            return false;
        }
        self.playlists.insert(key, Playlist::new(name));
        true
    }

    pub fn find(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&Self::key(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.get_mut(&Self::key(name))
    }

    /// Deletes a playlist. Returns `false` if no such playlist exists.
    pub fn delete(&mut self, name: &str) -> bool {
        self.playlists.remove(&Self::key(name)).is_some()
    }

    /// All playlists sorted by their stored name.
    pub fn all(&self) -> Vec<&Playlist> {
        let mut playlists: Vec<&Playlist> = self.playlists.values().collect();
        playlists.sort_by(|a, b| a.name().cmp(b.name()));
        playlists
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> VideoId {
        VideoId::from(raw)
    }

    #[test]
    fn test_playlist_rejects_duplicates() {
        let mut playlist = Playlist::new("Fun");

        assert!(playlist.add(&id("a")));
        assert!(playlist.add(&id("b")));
        assert!(!playlist.add(&id("a")));
        assert_eq!(playlist.contents(), &[id("a"), id("b")]);
    }

    #[test]
    fn test_playlist_remove_and_clear() {
        let mut playlist = Playlist::new("Fun");
        playlist.add(&id("a"));
        playlist.add(&id("b"));
        playlist.add(&id("c"));

        assert!(playlist.remove(&id("b")));
        assert!(!playlist.remove(&id("b")));
        assert_eq!(playlist.contents(), &[id("a"), id("c")]);

        playlist.clear();
        assert!(playlist.is_empty());
        playlist.clear();
        assert!(playlist.is_empty());
    }

    #[test]
    fn test_registry_is_case_insensitive() {
        let mut registry = PlaylistRegistry::new();

        assert!(registry.create("My_Playlist"));
        assert!(!registry.create("my_playlist"));
        assert!(!registry.create("MY_PLAYLIST"));
        assert_eq!(registry.len(), 1);

        let found = registry.find("my_PLAYLIST").unwrap();
        assert_eq!(found.name(), "My_Playlist");
    }

    #[test]
    fn test_registry_find_mut_and_delete() {
        let mut registry = PlaylistRegistry::new();
        registry.create("Fun");

        registry.find_mut("FUN").unwrap().add(&id("v1"));
        assert_eq!(registry.find("fun").unwrap().len(), 1);

        assert!(registry.delete("fUn"));
        assert!(!registry.delete("fun"));
        assert!(registry.find("Fun").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_all_sorted_by_stored_name() {
        let mut registry = PlaylistRegistry::new();
        registry.create("beta");
        registry.create("Alpha");
        registry.create("Gamma");

        let names: Vec<_> = registry.all().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Alpha", "Gamma", "beta"]);
    }
}
