//! Video catalog: read-only source of video records.
//!
//! The player only sees the catalog through [`VideoCatalog`]. [`MemoryCatalog`]
//! is the in-process implementation, loadable from the line format
//! `Title | id | #tag1,#tag2` or from a JSON array of records.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Unique identifier of a video within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Creates a video ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VideoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for VideoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Immutable video record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Video {
    /// Creates a new video record.
    pub fn new(id: impl Into<VideoId>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }

    /// Formats the record as `title (id) [tag1 tag2]`.
    pub fn describe(&self) -> String {
        format!("{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }

    /// Checks whether the video carries `tag`, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}

/// Read-only lookup of video records.
pub trait VideoCatalog {
    /// Looks up a video by identifier.
    fn video(&self, id: &VideoId) -> Option<&Video>;

    /// All records in catalog order.
    fn videos(&self) -> &[Video];

    /// Number of records in the catalog.
    fn len(&self) -> usize {
        self.videos().len()
    }

    /// Whether the catalog holds no records.
    fn is_empty(&self) -> bool {
        self.videos().is_empty()
    }
}

/// Errors raised while building or loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate video id in catalog: {id}")]
    DuplicateId { id: VideoId },
}

/// In-memory catalog preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    videos: Vec<Video>,
    index: HashMap<VideoId, usize>,
}

impl MemoryCatalog {
    /// Builds a catalog from records, keeping their order.
    ///
    /// # Errors
    ///
    /// - `CatalogError::DuplicateId` - If two records share an identifier
    pub fn new(videos: Vec<Video>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(videos.len());
        for (position, video) in videos.iter().enumerate() {
            if index.insert(video.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: video.id.clone(),
                });
            }
        }

        Ok(Self { videos, index })
    }

    /// Parses the pipe-separated line format.
    ///
    /// Each non-blank line is `Title | id` or `Title | id | #tag1,#tag2`.
    ///
    /// # Errors
    ///
    /// - `CatalogError::MalformedLine` - If a line lacks a title or id
    /// - `CatalogError::DuplicateId` - If two lines share an identifier
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let mut videos = Vec::new();

        for (offset, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let line_number = offset + 1;
            let mut fields = line.split('|').map(str::trim);
            let title = fields.next().unwrap_or_default();
            let id = fields.next().unwrap_or_default();
            let tags = fields.next().unwrap_or_default();

            if fields.next().is_some() {
                return Err(CatalogError::MalformedLine {
                    line: line_number,
                    reason: "expected at most three fields".to_string(),
                });
            }
            if title.is_empty() {
                return Err(CatalogError::MalformedLine {
                    line: line_number,
                    reason: "missing title".to_string(),
                });
            }
            if id.is_empty() {
                return Err(CatalogError::MalformedLine {
                    line: line_number,
                    reason: "missing video id".to_string(),
                });
            }

            let tags = tags
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect();

            videos.push(Video::new(id, title, tags));
        }

        Self::new(videos)
    }

    /// Parses a JSON array of video records.
    ///
    /// # Errors
    ///
    /// - `CatalogError::Json` - If the document is not an array of records
    /// - `CatalogError::DuplicateId` - If two records share an identifier
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let videos: Vec<Video> = serde_json::from_str(text)?;
        Self::new(videos)
    }

    /// Loads a catalog file, choosing the format by extension.
    ///
    /// Files ending in `.json` are parsed as JSON; anything else uses the
    /// pipe-separated line format.
    ///
    /// # Errors
    ///
    /// - `CatalogError::Io` - If the file cannot be read
    /// - `CatalogError::MalformedLine` / `CatalogError::Json` - If parsing fails
    /// - `CatalogError::DuplicateId` - If two records share an identifier
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json(&text)?
        } else {
            Self::parse(&text)?
        };

        tracing::info!(
            "Loaded {} videos from {}",
            catalog.videos.len(),
            path.display()
        );

        Ok(catalog)
    }
}

impl VideoCatalog for MemoryCatalog {
    fn video(&self, id: &VideoId) -> Option<&Video> {
        self.index.get(id).map(|&position| &self.videos[position])
    }

    fn videos(&self) -> &[Video] {
        &self.videos
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = "\
Funny Dogs | funny_dogs_video_id | #dog , #animal
Amazing Cats | amazing_cats_video_id | #cat , #animal

Another Cat Video | another_cat_video_id | #cat , #animal
Life at Google | life_at_google_video_id | #google , #career
Video about nothing | nothing_video_id |
";

    #[test]
    fn test_parse_keeps_order_and_tags() {
        let catalog = MemoryCatalog::parse(SAMPLE).unwrap();

        assert_eq!(catalog.len(), 5);
        let ids: Vec<_> = catalog.videos().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "funny_dogs_video_id",
                "amazing_cats_video_id",
                "another_cat_video_id",
                "life_at_google_video_id",
                "nothing_video_id",
            ]
        );

        let cats = catalog.video(&VideoId::from("amazing_cats_video_id")).unwrap();
        assert_eq!(cats.title, "Amazing Cats");
        assert_eq!(cats.tags, vec!["#cat", "#animal"]);

        let nothing = catalog.video(&VideoId::from("nothing_video_id")).unwrap();
        assert!(nothing.tags.is_empty());
        assert_eq!(nothing.describe(), "Video about nothing (nothing_video_id) []");
    }

    #[test]
    fn test_parse_rejects_missing_id() {
        let err = MemoryCatalog::parse("Good | good_id\nNo id here").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = MemoryCatalog::parse("A | same\nB | same").unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { id } if id.as_str() == "same"));
    }

    #[test]
    fn test_unknown_id_lookup() {
        let catalog = MemoryCatalog::parse(SAMPLE).unwrap();
        assert!(catalog.video(&VideoId::from("missing")).is_none());
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let video = Video::new("v", "V", vec!["#Cat".to_string()]);
        assert!(video.has_tag("#cat"));
        assert!(!video.has_tag("cat"));
    }

    #[test]
    fn test_has_tag_folds_unicode_case() {
        let video = Video::new("v1", "Été à Paris", vec!["#Été".to_string()]);
        assert!(video.has_tag("#été"));
        assert!(video.has_tag("#ÉTÉ"));
        assert!(!video.has_tag("#ete"));
    }

    #[test]
    fn test_from_json_defaults_tags() {
        let json = r##"[
            {"id": "a", "title": "Alpha", "tags": ["#x"]},
            {"id": "b", "title": "Beta"}
        ]"##;
        let catalog = MemoryCatalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.video(&VideoId::from("b")).unwrap().tags.is_empty());
    }

    #[tokio::test]
    async fn test_load_line_format_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = MemoryCatalog::load(file.path()).await.unwrap();
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_load_json_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"[{"id": "a", "title": "Alpha", "tags": []}]"#)
            .unwrap();

        let catalog = tokio_test::block_on(MemoryCatalog::load(file.path())).unwrap();
        assert_eq!(catalog.videos()[0].title, "Alpha");
    }

    #[tokio::test]
    async fn test_load_missing_file_reports_path() {
        let err = MemoryCatalog::load(Path::new("/nonexistent/videos.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/videos.txt"));
    }
}
