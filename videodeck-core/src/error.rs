//! Error types for player commands and the crate as a whole.
//!
//! Every refused player command produces a [`PlayerError`] whose `Display`
//! output is the exact message shown to the user.

use std::fmt;

use crate::catalog::CatalogError;

/// The command that was refused, rendered as the `Cannot {action}:` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Play,
    Stop,
    Pause,
    Continue,
    CreatePlaylist,
    AddToPlaylist(String),
    RemoveFromPlaylist(String),
    ShowPlaylist(String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    Flag,
    Allow,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Play => write!(f, "play video"),
            Action::Stop => write!(f, "stop video"),
            Action::Pause => write!(f, "pause video"),
            Action::Continue => write!(f, "continue video"),
            Action::CreatePlaylist => write!(f, "create playlist"),
            Action::AddToPlaylist(name) => write!(f, "add video to {name}"),
            Action::RemoveFromPlaylist(name) => write!(f, "remove video from {name}"),
            Action::ShowPlaylist(name) => write!(f, "show playlist {name}"),
            Action::ClearPlaylist(name) => write!(f, "clear playlist {name}"),
            Action::DeletePlaylist(name) => write!(f, "delete playlist {name}"),
            Action::Flag => write!(f, "flag video"),
            Action::Allow => write!(f, "remove flag from video"),
        }
    }
}

/// Broad classification of a refused command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A video or playlist does not exist.
    NotFound,
    /// A playlist, flag, or playlist entry is already present.
    AlreadyExists,
    /// The command does not apply to the current playback or flag state.
    InvalidState,
    /// The command would operate on flagged content.
    PolicyViolation,
}

/// A player command that could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error("Cannot {action}: Video does not exist")]
    VideoNotFound { action: Action },

    #[error("Cannot {action}: Playlist does not exist")]
    PlaylistNotFound { action: Action },

    #[error("Cannot {action}: Video is not in playlist")]
    VideoNotInPlaylist { action: Action },

    #[error("Cannot {action}: A playlist with the same name already exists")]
    PlaylistExists { action: Action },

    #[error("Cannot {action}: Video already added")]
    VideoAlreadyAdded { action: Action },

    #[error("Cannot {action}: Video is already flagged")]
    AlreadyFlagged { action: Action },

    #[error("Cannot {action}: Video is not flagged")]
    NotFlagged { action: Action },

    #[error("Cannot {action}: No video is currently playing")]
    NothingPlaying { action: Action },

    #[error("Cannot {action}: Video is not paused")]
    NotPaused { action: Action },

    #[error("Video already paused: {title}")]
    AlreadyPaused { title: String },

    #[error("Cannot {action}: Video is currently flagged (reason: {reason})")]
    Flagged { action: Action, reason: String },

    #[error("No videos available")]
    NoVideosAvailable,
}

impl PlayerError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlayerError::VideoNotFound { .. }
            | PlayerError::PlaylistNotFound { .. }
            | PlayerError::VideoNotInPlaylist { .. } => ErrorKind::NotFound,
            PlayerError::PlaylistExists { .. }
            | PlayerError::VideoAlreadyAdded { .. }
            | PlayerError::AlreadyFlagged { .. } => ErrorKind::AlreadyExists,
            PlayerError::NotFlagged { .. }
            | PlayerError::NothingPlaying { .. }
            | PlayerError::NotPaused { .. }
            | PlayerError::AlreadyPaused { .. } => ErrorKind::InvalidState,
            PlayerError::Flagged { .. } | PlayerError::NoVideosAvailable => {
                ErrorKind::PolicyViolation
            }
        }
    }
}

/// Errors that can surface from any Videodeck subsystem.
#[derive(Debug, thiserror::Error)]
pub enum VideodeckError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Player(#[from] PlayerError),

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VideodeckError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            VideodeckError::Catalog(e) => match e {
                CatalogError::Io { path, .. } => {
                    format!("Could not read video catalog: {}", path.display())
                }
                CatalogError::MalformedLine { line, .. } => {
                    format!("Video catalog has an invalid entry on line {line}")
                }
                CatalogError::Json(_) => "Video catalog is not valid JSON".to_string(),
                CatalogError::DuplicateId { id } => {
                    format!("Video catalog lists {id} more than once")
                }
            },
            VideodeckError::Player(e) => e.to_string(),
            VideodeckError::Configuration { reason } => format!("Invalid configuration: {reason}"),
            VideodeckError::Io(e) => format!("File system error: {e}"),
        }
    }

    /// Checks if this error is due to user input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            VideodeckError::Configuration { .. } | VideodeckError::Player(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, VideodeckError>;
