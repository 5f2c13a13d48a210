//! Player orchestrator.
//!
//! [`Player`] owns the playback state machine together with the flag and
//! playlist registries and answers every user command against a read-only
//! [`VideoCatalog`]. Commands return a [`Report`] of output lines on success
//! or a [`PlayerError`] describing why nothing changed.

mod playlists;
mod search;

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
pub use search::SearchResults;

use crate::catalog::{MemoryCatalog, Video, VideoCatalog, VideoId};
use crate::config::VideodeckConfig;
use crate::error::{Action, PlayerError};
use crate::flags::FlagRegistry;
use crate::playlist::PlaylistRegistry;

/// Output lines produced by a successful command, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Creates a report holding a single line.
    pub fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Observable playback state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackStatus {
    Stopped,
    Playing(VideoId),
    Paused(VideoId),
}

/// Current video and pause flag. `paused` is only meaningful while a video
/// is current and is reset whenever playback stops.
#[derive(Debug, Default)]
struct PlaybackState {
    current: Option<VideoId>,
    paused: bool,
}

/// Stateful facade over catalog, flags, playlists, and playback.
#[derive(Debug)]
pub struct Player<C: VideoCatalog = MemoryCatalog> {
    catalog: C,
    flags: FlagRegistry,
    playlists: PlaylistRegistry,
    state: PlaybackState,
    rng: ChaCha8Rng,
    default_flag_reason: String,
}

impl<C: VideoCatalog> Player<C> {
    /// Creates a player in the stopped state with no flags or playlists.
    pub fn new(catalog: C, config: &VideodeckConfig) -> Self {
        let rng = match config.playback.random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        tracing::debug!(
            "Player created with {} videos (seeded: {})",
            catalog.len(),
            config.playback.random_seed.is_some()
        );

        Self {
            catalog,
            flags: FlagRegistry::new(),
            playlists: PlaylistRegistry::new(),
            state: PlaybackState::default(),
            rng,
            default_flag_reason: config.playback.default_flag_reason.clone(),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn flags(&self) -> &FlagRegistry {
        &self.flags
    }

    pub fn playlists(&self) -> &PlaylistRegistry {
        &self.playlists
    }

    pub fn status(&self) -> PlaybackStatus {
        match (&self.state.current, self.state.paused) {
            (None, _) => PlaybackStatus::Stopped,
            (Some(id), false) => PlaybackStatus::Playing(id.clone()),
            (Some(id), true) => PlaybackStatus::Paused(id.clone()),
        }
    }

    /// The current video record, playing or paused.
    pub fn current_video(&self) -> Option<&Video> {
        self.state
            .current
            .as_ref()
            .and_then(|id| self.catalog.video(id))
    }

    fn title_of<'a>(&'a self, id: &'a VideoId) -> &'a str {
        self.catalog
            .video(id)
            .map_or(id.as_str(), |video| video.title.as_str())
    }

    /// `title (id) [tags]`, with the flag reason appended for flagged videos.
    fn describe_with_flag(&self, video: &Video) -> String {
        match self.flags.reason_for(&video.id) {
            Some(reason) => format!("{} - FLAGGED (reason: {reason})", video.describe()),
            None => video.describe(),
        }
    }

    /// Stops the current video, returning the line to report.
    fn stop_current(&mut self) -> Option<String> {
        let id = self.state.current.take()?;
        self.state.paused = false;
        tracing::info!("Stopped {id}");
        Some(format!("Stopping video: {}", self.title_of(&id)))
    }

    pub fn number_of_videos(&self) -> Report {
        Report::line(format!("{} videos in the library", self.catalog.len()))
    }

    /// Lists every video sorted by title, flagged ones annotated.
    pub fn show_all_videos(&self) -> Report {
        let mut videos: Vec<&Video> = self.catalog.videos().iter().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title));

        let mut report = Report::line("Here's a list of all available videos:");
        for video in videos {
            report.push(self.describe_with_flag(video));
        }
        report
    }

    /// Plays a video, stopping whatever was current first.
    ///
    /// # Errors
    ///
    /// - `PlayerError::VideoNotFound` - If the id is not in the catalog
    /// - `PlayerError::Flagged` - If the video is flagged
    pub fn play_video(&mut self, video_id: &str) -> Result<Report, PlayerError> {
        let id = VideoId::from(video_id);
        let Some(video) = self.catalog.video(&id) else {
            return Err(PlayerError::VideoNotFound {
                action: Action::Play,
            });
        };
        if let Some(reason) = self.flags.reason_for(&id) {
            return Err(PlayerError::Flagged {
                action: Action::Play,
                reason: reason.to_string(),
            });
        }
        let title = video.title.clone();

        let mut report = Report::new();
        if let Some(line) = self.stop_current() {
            report.push(line);
        }

        tracing::info!("Playing {id}");
        self.state.current = Some(id);
        self.state.paused = false;
        report.push(format!("Playing video: {title}"));
        Ok(report)
    }

    /// # Errors
    ///
    /// - `PlayerError::NothingPlaying` - If no video is current
    pub fn stop_video(&mut self) -> Result<Report, PlayerError> {
        self.stop_current()
            .map(Report::line)
            .ok_or(PlayerError::NothingPlaying {
                action: Action::Stop,
            })
    }

    /// Plays a uniformly chosen video among those not flagged.
    ///
    /// # Errors
    ///
    /// - `PlayerError::NoVideosAvailable` - If every video is flagged or the
    ///   catalog is empty
    pub fn play_random_video(&mut self) -> Result<Report, PlayerError> {
        let eligible: Vec<&VideoId> = self
            .catalog
            .videos()
            .iter()
            .map(|video| &video.id)
            .filter(|id| !self.flags.is_flagged(id))
            .collect();

        if eligible.is_empty() {
            return Err(PlayerError::NoVideosAvailable);
        }

        let chosen = eligible[self.rng.random_range(0..eligible.len())].clone();
        tracing::debug!("Random pick {chosen} out of {} eligible", eligible.len());
        self.play_video(chosen.as_str())
    }

    /// # Errors
    ///
    /// - `PlayerError::NothingPlaying` - If no video is current
    /// - `PlayerError::AlreadyPaused` - If the current video is paused
    pub fn pause_video(&mut self) -> Result<Report, PlayerError> {
        let Some(id) = &self.state.current else {
            return Err(PlayerError::NothingPlaying {
                action: Action::Pause,
            });
        };
        let title = self.title_of(id).to_string();

        if self.state.paused {
            return Err(PlayerError::AlreadyPaused { title });
        }

        tracing::info!("Paused {id}");
        self.state.paused = true;
        Ok(Report::line(format!("Pausing video: {title}")))
    }

    /// # Errors
    ///
    /// - `PlayerError::NothingPlaying` - If no video is current
    /// - `PlayerError::NotPaused` - If the current video is playing
    pub fn continue_video(&mut self) -> Result<Report, PlayerError> {
        let Some(id) = &self.state.current else {
            return Err(PlayerError::NothingPlaying {
                action: Action::Continue,
            });
        };

        if !self.state.paused {
            return Err(PlayerError::NotPaused {
                action: Action::Continue,
            });
        }

        tracing::info!("Resumed {id}");
        let line = format!("Continuing video: {}", self.title_of(id));
        self.state.paused = false;
        Ok(Report::line(line))
    }

    pub fn show_playing(&self) -> Report {
        match self.current_video() {
            Some(video) if self.state.paused => Report::line(format!(
                "Currently playing: {} - PAUSED",
                video.describe()
            )),
            Some(video) => Report::line(format!("Currently playing: {}", video.describe())),
            None => Report::line("No video is currently playing"),
        }
    }

    /// Flags a video, stopping it first if it is current. Without a reason
    /// the configured default is recorded.
    ///
    /// # Errors
    ///
    /// - `PlayerError::VideoNotFound` - If the id is not in the catalog
    /// - `PlayerError::AlreadyFlagged` - If the video is already flagged
    pub fn flag_video(
        &mut self,
        video_id: &str,
        reason: Option<&str>,
    ) -> Result<Report, PlayerError> {
        let id = VideoId::from(video_id);
        let Some(video) = self.catalog.video(&id) else {
            return Err(PlayerError::VideoNotFound {
                action: Action::Flag,
            });
        };
        if self.flags.is_flagged(&id) {
            return Err(PlayerError::AlreadyFlagged {
                action: Action::Flag,
            });
        }
        let title = video.title.clone();
        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(self.default_flag_reason.as_str())
            .to_string();

        let mut report = Report::new();
        if self.state.current.as_ref() == Some(&id)
            && let Some(line) = self.stop_current()
        {
            report.push(line);
        }

        tracing::info!("Flagged {id}: {reason}");
        self.flags.add(&id, reason.as_str());
        report.push(format!(
            "Successfully flagged video: {title} (reason: {reason})"
        ));
        Ok(report)
    }

    /// # Errors
    ///
    /// - `PlayerError::VideoNotFound` - If the id is not in the catalog
    /// - `PlayerError::NotFlagged` - If the video carries no flag
    pub fn allow_video(&mut self, video_id: &str) -> Result<Report, PlayerError> {
        let id = VideoId::from(video_id);
        let Some(video) = self.catalog.video(&id) else {
            return Err(PlayerError::VideoNotFound {
                action: Action::Allow,
            });
        };
        if !self.flags.remove(&id) {
            return Err(PlayerError::NotFlagged {
                action: Action::Allow,
            });
        }

        tracing::info!("Removed flag from {id}");
        Ok(Report::line(format!(
            "Successfully removed flag from video: {}",
            video.title
        )))
    }
}
