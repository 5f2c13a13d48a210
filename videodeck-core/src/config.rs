//! Centralized configuration for Videodeck.
//!
//! Tunable parameters live here instead of being hard-coded in the player
//! or the CLI.

use std::path::PathBuf;

use crate::error::{Result, VideodeckError};

/// Central configuration for all Videodeck components.
///
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct VideodeckConfig {
    pub catalog: CatalogConfig,
    pub playback: PlaybackConfig,
}

/// Where the video catalog is loaded from.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog file, line format or `.json`
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("videos.txt"),
        }
    }
}

/// Playback and moderation behavior.
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// Seed for random video selection (None = seeded from the OS)
    pub random_seed: Option<u64>,
    /// Reason recorded when a video is flagged without one
    pub default_flag_reason: String,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            default_flag_reason: "Not supplied".to_string(),
        }
    }
}

impl VideodeckConfig {
    /// Creates configuration with environment variable overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("VIDEODECK_CATALOG_PATH") {
            config.catalog.path = PathBuf::from(path);
        }

        if let Ok(seed) = std::env::var("VIDEODECK_RANDOM_SEED")
            && let Ok(seed_value) = seed.parse::<u64>()
        {
            config.playback.random_seed = Some(seed_value);
        }

        if let Ok(reason) = std::env::var("VIDEODECK_DEFAULT_FLAG_REASON")
            && !reason.trim().is_empty()
        {
            config.playback.default_flag_reason = reason;
        }

        config
    }

    /// Checks that the configuration can start a session.
    ///
    /// # Errors
    ///
    /// - `VideodeckError::Configuration` - If the catalog path or the default
    ///   flag reason is empty
    pub fn validate(&self) -> Result<()> {
        if self.catalog.path.as_os_str().is_empty() {
            return Err(VideodeckError::Configuration {
                reason: "catalog path is empty".to_string(),
            });
        }

        if self.playback.default_flag_reason.trim().is_empty() {
            return Err(VideodeckError::Configuration {
                reason: "default flag reason is blank".to_string(),
            });
        }

        Ok(())
    }

    /// Creates a configuration with deterministic random selection.
    pub fn for_testing() -> Self {
        Self {
            playback: PlaybackConfig {
                random_seed: Some(42),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = VideodeckConfig::default();

        assert_eq!(config.catalog.path, PathBuf::from("videos.txt"));
        assert_eq!(config.playback.random_seed, None);
        assert_eq!(config.playback.default_flag_reason, "Not supplied");
    }

    #[test]
    fn test_testing_preset_is_seeded() {
        let config = VideodeckConfig::for_testing();
        assert_eq!(config.playback.random_seed, Some(42));
        assert_eq!(config.playback.default_flag_reason, "Not supplied");
    }

    #[test]
    fn test_env_override() {
        unsafe {
            std::env::set_var("VIDEODECK_CATALOG_PATH", "/srv/videos.json");
            std::env::set_var("VIDEODECK_RANDOM_SEED", "7");
            std::env::set_var("VIDEODECK_DEFAULT_FLAG_REASON", "Spam");
        }

        let config = VideodeckConfig::from_env();
        assert_eq!(config.catalog.path, PathBuf::from("/srv/videos.json"));
        assert_eq!(config.playback.random_seed, Some(7));
        assert_eq!(config.playback.default_flag_reason, "Spam");

        // Unparseable seed and blank reason fall back to defaults
        unsafe {
            std::env::set_var("VIDEODECK_RANDOM_SEED", "abc");
            std::env::set_var("VIDEODECK_DEFAULT_FLAG_REASON", "   ");
        }

        let config = VideodeckConfig::from_env();
        assert_eq!(config.playback.random_seed, None);
        assert_eq!(config.playback.default_flag_reason, "Not supplied");

        // Cleanup
        unsafe {
            std::env::remove_var("VIDEODECK_CATALOG_PATH");
            std::env::remove_var("VIDEODECK_RANDOM_SEED");
            std::env::remove_var("VIDEODECK_DEFAULT_FLAG_REASON");
        }
    }

    #[test]
    fn test_validate_rejects_empty_settings() {
        assert!(VideodeckConfig::default().validate().is_ok());

        let mut config = VideodeckConfig::default();
        config.catalog.path = PathBuf::new();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, VideodeckError::Configuration { .. }));
        assert!(err.is_user_error());

        let mut config = VideodeckConfig::default();
        config.playback.default_flag_reason = " ".to_string();
        assert!(config.validate().is_err());
    }
}
