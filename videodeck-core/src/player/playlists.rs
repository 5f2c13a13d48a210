//! Playlist commands.
//!
//! Playlist names in messages are echoed as the user typed them in the
//! command, while lookups ignore case.

use super::{Player, Report};
use crate::catalog::{VideoCatalog, VideoId};
use crate::error::{Action, PlayerError};

impl<C: VideoCatalog> Player<C> {
    /// # Errors
    ///
    /// - `PlayerError::PlaylistExists` - If a playlist with the same name,
    ///   ignoring case, already exists
    pub fn create_playlist(&mut self, playlist_name: &str) -> Result<Report, PlayerError> {
        if !self.playlists.create(playlist_name) {
            return Err(PlayerError::PlaylistExists {
                action: Action::CreatePlaylist,
            });
        }

        tracing::info!("Created playlist {playlist_name}");
        Ok(Report::line(format!(
            "Successfully created new playlist: {playlist_name}"
        )))
    }

    /// # Errors
    ///
    /// - `PlayerError::PlaylistNotFound` - If the playlist does not exist
    /// - `PlayerError::VideoNotFound` - If the id is not in the catalog
    /// - `PlayerError::Flagged` - If the video is flagged
    /// - `PlayerError::VideoAlreadyAdded` - If the playlist already holds it
    pub fn add_to_playlist(
        &mut self,
        playlist_name: &str,
        video_id: &str,
    ) -> Result<Report, PlayerError> {
        let action = || Action::AddToPlaylist(playlist_name.to_string());
        let id = VideoId::from(video_id);

        let Some(playlist) = self.playlists.find_mut(playlist_name) else {
            return Err(PlayerError::PlaylistNotFound { action: action() });
        };
        let Some(video) = self.catalog.video(&id) else {
            return Err(PlayerError::VideoNotFound { action: action() });
        };
        if let Some(reason) = self.flags.reason_for(&id) {
            return Err(PlayerError::Flagged {
                action: action(),
                reason: reason.to_string(),
            });
        }
        if !playlist.add(&id) {
            return Err(PlayerError::VideoAlreadyAdded { action: action() });
        }

        tracing::debug!("Added {id} to playlist {}", playlist.name());
        Ok(Report::line(format!(
            "Added video to {playlist_name}: {}",
            video.title
        )))
    }

    pub fn show_all_playlists(&self) -> Report {
        if self.playlists.is_empty() {
            return Report::line("No playlists exist yet");
        }

        let mut report = Report::line("Showing all playlists:");
        for playlist in self.playlists.all() {
            report.push(playlist.name());
        }
        report
    }

    /// Lists the playlist's videos in order, flagged ones annotated.
    ///
    /// # Errors
    ///
    /// - `PlayerError::PlaylistNotFound` - If the playlist does not exist
    pub fn show_playlist(&self, playlist_name: &str) -> Result<Report, PlayerError> {
        let Some(playlist) = self.playlists.find(playlist_name) else {
            return Err(PlayerError::PlaylistNotFound {
                action: Action::ShowPlaylist(playlist_name.to_string()),
            });
        };

        let mut report = Report::line(format!("Showing playlist: {playlist_name}"));
        if playlist.is_empty() {
            report.push("No videos here yet");
            return Ok(report);
        }

        for video in playlist
            .contents()
            .iter()
            .filter_map(|id| self.catalog.video(id))
        {
            report.push(self.describe_with_flag(video));
        }
        Ok(report)
    }

    /// # Errors
    ///
    /// - `PlayerError::PlaylistNotFound` - If the playlist does not exist
    /// - `PlayerError::VideoNotFound` - If the id is not in the catalog
    /// - `PlayerError::VideoNotInPlaylist` - If the playlist does not hold it
    pub fn remove_from_playlist(
        &mut self,
        playlist_name: &str,
        video_id: &str,
    ) -> Result<Report, PlayerError> {
        let action = || Action::RemoveFromPlaylist(playlist_name.to_string());
        let id = VideoId::from(video_id);

        let Some(playlist) = self.playlists.find_mut(playlist_name) else {
            return Err(PlayerError::PlaylistNotFound { action: action() });
        };
        let Some(video) = self.catalog.video(&id) else {
            return Err(PlayerError::VideoNotFound { action: action() });
        };
        if !playlist.remove(&id) {
            return Err(PlayerError::VideoNotInPlaylist { action: action() });
        }

        tracing::debug!("Removed {id} from playlist {}", playlist.name());
        Ok(Report::line(format!(
            "Removed video from {playlist_name}: {}",
            video.title
        )))
    }

    /// # Errors
    ///
    /// - `PlayerError::PlaylistNotFound` - If the playlist does not exist
    pub fn clear_playlist(&mut self, playlist_name: &str) -> Result<Report, PlayerError> {
        let Some(playlist) = self.playlists.find_mut(playlist_name) else {
            return Err(PlayerError::PlaylistNotFound {
                action: Action::ClearPlaylist(playlist_name.to_string()),
            });
        };

        playlist.clear();
        tracing::debug!("Cleared playlist {}", playlist.name());
        Ok(Report::line(format!(
            "Successfully removed all videos from {playlist_name}"
        )))
    }

    /// # Errors
    ///
    /// - `PlayerError::PlaylistNotFound` - If the playlist does not exist
    pub fn delete_playlist(&mut self, playlist_name: &str) -> Result<Report, PlayerError> {
        if !self.playlists.delete(playlist_name) {
            return Err(PlayerError::PlaylistNotFound {
                action: Action::DeletePlaylist(playlist_name.to_string()),
            });
        }

        tracing::info!("Deleted playlist {playlist_name}");
        Ok(Report::line(format!("Deleted playlist: {playlist_name}")))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::player::tests::sample_player;

    #[test]
    fn test_create_playlist_case_insensitive() {
        let mut player = sample_player();

        assert_eq!(
            player.create_playlist("my_PLAYlist").unwrap().lines(),
            &["Successfully created new playlist: my_PLAYlist"]
        );
        let err = player.create_playlist("MY_playlist").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot create playlist: A playlist with the same name already exists"
        );
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(player.playlists().len(), 1);
    }

    #[test]
    fn test_add_to_playlist() {
        let mut player = sample_player();
        player.create_playlist("my_playlist").unwrap();

        assert_eq!(
            player
                .add_to_playlist("MY_playlist", "amazing_cats_video_id")
                .unwrap()
                .lines(),
            &["Added video to MY_playlist: Amazing Cats"]
        );
        assert_eq!(
            player
                .add_to_playlist("my_playlist", "amazing_cats_video_id")
                .unwrap_err()
                .to_string(),
            "Cannot add video to my_playlist: Video already added"
        );
        assert_eq!(
            player
                .add_to_playlist("my_playlist", "nope")
                .unwrap_err()
                .to_string(),
            "Cannot add video to my_playlist: Video does not exist"
        );
        assert_eq!(
            player
                .add_to_playlist("other", "amazing_cats_video_id")
                .unwrap_err()
                .to_string(),
            "Cannot add video to other: Playlist does not exist"
        );
        assert_eq!(player.playlists().find("my_playlist").unwrap().len(), 1);
    }

    #[test]
    fn test_add_flagged_video_to_playlist() {
        let mut player = sample_player();
        player.create_playlist("my_playlist").unwrap();
        player
            .flag_video("amazing_cats_video_id", Some("dont_like_cats"))
            .unwrap();

        let err = player
            .add_to_playlist("my_playlist", "amazing_cats_video_id")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot add video to my_playlist: Video is currently flagged (reason: dont_like_cats)"
        );
        assert_eq!(err.kind(), ErrorKind::PolicyViolation);
    }

    #[test]
    fn test_show_all_playlists() {
        let mut player = sample_player();
        assert_eq!(
            player.show_all_playlists().lines(),
            &["No playlists exist yet"]
        );

        player.create_playlist("my_cool_playlist").unwrap();
        player.create_playlist("another_playlist").unwrap();
        assert_eq!(
            player.show_all_playlists().into_lines(),
            vec!["Showing all playlists:", "another_playlist", "my_cool_playlist"]
        );
    }

    #[test]
    fn test_show_playlist_annotates_flagged_entries() {
        let mut player = sample_player();
        player.create_playlist("my_playlist").unwrap();

        assert_eq!(
            player.show_playlist("my_playlist").unwrap().into_lines(),
            vec!["Showing playlist: my_playlist", "No videos here yet"]
        );

        player
            .add_to_playlist("my_playlist", "amazing_cats_video_id")
            .unwrap();
        player.add_to_playlist("my_playlist", "nothing_video_id").unwrap();
        player
            .flag_video("amazing_cats_video_id", Some("dont_like_cats"))
            .unwrap();

        assert_eq!(
            player.show_playlist("MY_PLAYLIST").unwrap().into_lines(),
            vec![
                "Showing playlist: MY_PLAYLIST",
                "Amazing Cats (amazing_cats_video_id) [#cat #animal] - FLAGGED (reason: dont_like_cats)",
                "Video about nothing (nothing_video_id) []",
            ]
        );

        assert_eq!(
            player.show_playlist("nope").unwrap_err().to_string(),
            "Cannot show playlist nope: Playlist does not exist"
        );
    }

    #[test]
    fn test_remove_from_playlist() {
        let mut player = sample_player();
        player.create_playlist("my_playlist").unwrap();
        player
            .add_to_playlist("my_playlist", "amazing_cats_video_id")
            .unwrap();

        assert_eq!(
            player
                .remove_from_playlist("my_playlist", "amazing_cats_video_id")
                .unwrap()
                .lines(),
            &["Removed video from my_playlist: Amazing Cats"]
        );
        let err = player
            .remove_from_playlist("my_playlist", "amazing_cats_video_id")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot remove video from my_playlist: Video is not in playlist"
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            player
                .remove_from_playlist("my_playlist", "nope")
                .unwrap_err()
                .to_string(),
            "Cannot remove video from my_playlist: Video does not exist"
        );
        assert_eq!(
            player
                .remove_from_playlist("other", "amazing_cats_video_id")
                .unwrap_err()
                .to_string(),
            "Cannot remove video from other: Playlist does not exist"
        );
    }

    #[test]
    fn test_clear_and_delete_playlist() {
        let mut player = sample_player();
        player.create_playlist("my_playlist").unwrap();
        player
            .add_to_playlist("my_playlist", "amazing_cats_video_id")
            .unwrap();

        assert_eq!(
            player.clear_playlist("MY_PLAYLIST").unwrap().lines(),
            &["Successfully removed all videos from MY_PLAYLIST"]
        );
        assert!(player.playlists().find("my_playlist").unwrap().is_empty());
        assert_eq!(
            player.clear_playlist("nope").unwrap_err().to_string(),
            "Cannot clear playlist nope: Playlist does not exist"
        );

        assert_eq!(
            player.delete_playlist("My_Playlist").unwrap().lines(),
            &["Deleted playlist: My_Playlist"]
        );
        assert_eq!(
            player.delete_playlist("my_playlist").unwrap_err().to_string(),
            "Cannot delete playlist my_playlist: Playlist does not exist"
        );
        assert!(player.playlists().is_empty());
    }
}
