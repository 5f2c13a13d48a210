//! Parsing and dispatch of interactive player commands

use videodeck_core::{Player, PlayerError, Report, SearchResults, VideoCatalog};

/// A single line of user input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: String },
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { name: String, video_id: String },
    RemoveFromPlaylist { name: String, video_id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    ShowPlaylist { name: String },
    ShowAllPlaylists,
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo { video_id: String },
    Help,
    Exit,
}

/// Input lines that do not form a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown { verb: String },

    #[error("Missing argument <{argument}> for {verb}")]
    MissingArgument {
        verb: &'static str,
        argument: &'static str,
    },
}

/// Text printed for `HELP`.
pub const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, url and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_uppercase();
        let args: Vec<&str> = words.collect();

        let arg = |position: usize, verb: &'static str, argument: &'static str| {
            args.get(position)
                .map(|value| value.to_string())
                .ok_or(CommandError::MissingArgument { verb, argument })
        };
        // Search terms and tags may span several words.
        let rest = |verb: &'static str, argument: &'static str| {
            if args.is_empty() {
                Err(CommandError::MissingArgument { verb, argument })
            } else {
                Ok(args.join(" "))
            }
        };

        let command = match verb.as_str() {
            "NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
            "PLAY" => Command::Play {
                video_id: arg(0, "PLAY", "video_id")?,
            },
            "PLAY_RANDOM" => Command::PlayRandom,
            "STOP" => Command::Stop,
            "PAUSE" => Command::Pause,
            "CONTINUE" => Command::Continue,
            "SHOW_PLAYING" => Command::ShowPlaying,
            "CREATE_PLAYLIST" => Command::CreatePlaylist {
                name: arg(0, "CREATE_PLAYLIST", "playlist_name")?,
            },
            "ADD_TO_PLAYLIST" => Command::AddToPlaylist {
                name: arg(0, "ADD_TO_PLAYLIST", "playlist_name")?,
                video_id: arg(1, "ADD_TO_PLAYLIST", "video_id")?,
            },
            "REMOVE_FROM_PLAYLIST" => Command::RemoveFromPlaylist {
                name: arg(0, "REMOVE_FROM_PLAYLIST", "playlist_name")?,
                video_id: arg(1, "REMOVE_FROM_PLAYLIST", "video_id")?,
            },
            "CLEAR_PLAYLIST" => Command::ClearPlaylist {
                name: arg(0, "CLEAR_PLAYLIST", "playlist_name")?,
            },
            "DELETE_PLAYLIST" => Command::DeletePlaylist {
                name: arg(0, "DELETE_PLAYLIST", "playlist_name")?,
            },
            "SHOW_PLAYLIST" => Command::ShowPlaylist {
                name: arg(0, "SHOW_PLAYLIST", "playlist_name")?,
            },
            "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
            "SEARCH_VIDEOS" => Command::SearchVideos {
                term: rest("SEARCH_VIDEOS", "search_term")?,
            },
            "SEARCH_VIDEOS_WITH_TAG" => Command::SearchVideosWithTag {
                tag: rest("SEARCH_VIDEOS_WITH_TAG", "tag_name")?,
            },
            "FLAG_VIDEO" => Command::FlagVideo {
                video_id: arg(0, "FLAG_VIDEO", "video_id")?,
                reason: (args.len() > 1).then(|| args[1..].join(" ")),
            },
            "ALLOW_VIDEO" => Command::AllowVideo {
                video_id: arg(0, "ALLOW_VIDEO", "video_id")?,
            },
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(CommandError::Unknown { verb }),
        };

        Ok(command)
    }
}

/// What the command loop should do after a command.
#[derive(Debug)]
pub enum Outcome {
    /// Print the report, or the refusal message.
    Done(Result<Report, PlayerError>),
    /// Print the results and, if there are any, ask which one to play.
    Search(SearchResults),
    Exit,
}

/// Runs a parsed command against the player.
pub fn execute<C: VideoCatalog>(player: &mut Player<C>, command: Command) -> Outcome {
    let result = match command {
        Command::NumberOfVideos => Ok(player.number_of_videos()),
        Command::ShowAllVideos => Ok(player.show_all_videos()),
        Command::Play { video_id } => player.play_video(&video_id),
        Command::PlayRandom => player.play_random_video(),
        Command::Stop => player.stop_video(),
        Command::Pause => player.pause_video(),
        Command::Continue => player.continue_video(),
        Command::ShowPlaying => Ok(player.show_playing()),
        Command::CreatePlaylist { name } => player.create_playlist(&name),
        Command::AddToPlaylist { name, video_id } => player.add_to_playlist(&name, &video_id),
        Command::RemoveFromPlaylist { name, video_id } => {
            player.remove_from_playlist(&name, &video_id)
        }
        Command::ClearPlaylist { name } => player.clear_playlist(&name),
        Command::DeletePlaylist { name } => player.delete_playlist(&name),
        Command::ShowPlaylist { name } => player.show_playlist(&name),
        Command::ShowAllPlaylists => Ok(player.show_all_playlists()),
        Command::SearchVideos { term } => return Outcome::Search(player.search_videos(&term)),
        Command::SearchVideosWithTag { tag } => {
            return Outcome::Search(player.search_videos_tag(&tag));
        }
        Command::FlagVideo { video_id, reason } => {
            player.flag_video(&video_id, reason.as_deref())
        }
        Command::AllowVideo { video_id } => player.allow_video(&video_id),
        Command::Help => Ok(Report::line(HELP_TEXT)),
        Command::Exit => return Outcome::Exit,
    };

    if let Err(err) = &result {
        tracing::debug!(kind = ?err.kind(), "Command refused: {err}");
    }
    Outcome::Done(result)
}
