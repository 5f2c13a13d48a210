//! Videodeck Core - in-memory video catalog and player
//!
//! This crate provides the stateful pieces of the player: the read-only
//! video catalog, the flag registry, named playlists, and the player that
//! drives playback and answers every user command.

pub mod catalog;
pub mod config;
pub mod error;
pub mod flags;
pub mod player;
pub mod playlist;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use catalog::{CatalogError, MemoryCatalog, Video, VideoCatalog, VideoId};
pub use config::VideodeckConfig;
pub use error::{Action, ErrorKind, PlayerError, Result, VideodeckError};
pub use flags::FlagRegistry;
pub use player::{PlaybackStatus, Player, Report, SearchResults};
pub use playlist::{Playlist, PlaylistRegistry};
