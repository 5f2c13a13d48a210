//! Videodeck CLI - interactive video player
//!
//! Loads a video catalog and reads player commands from stdin, one per line.

mod commands;

use std::path::PathBuf;

use clap::Parser;
use commands::{Command, Outcome};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use videodeck_core::tracing_setup::{CliLogLevel, init_tracing};
use videodeck_core::{MemoryCatalog, Player, Report, VideodeckConfig, VideodeckError};

#[derive(Parser)]
#[command(name = "videodeck")]
#[command(about = "An interactive in-memory video player")]
struct Cli {
    /// Catalog file (`Title | id | #tags` lines, or a .json array)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Seed for PLAY_RANDOM, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Console log level
    #[arg(long, value_enum, default_value_t = CliLogLevel::Warn)]
    log_level: CliLogLevel,

    /// Directory for the full session log
    #[arg(long)]
    logs_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_tracing_level(), cli.logs_dir.as_deref())
        .map_err(|err| anyhow::anyhow!(VideodeckError::from(err).user_message()))?;

    let mut config = VideodeckConfig::from_env();
    if let Some(path) = cli.catalog {
        config.catalog.path = path;
    }
    if let Some(seed) = cli.seed {
        config.playback.random_seed = Some(seed);
    }

    let mut player = load_player(&config).await.map_err(|err| {
        tracing::error!("Startup failed: {err}");
        anyhow::anyhow!(err.user_message())
    })?;

    println!("Hello and welcome to Videodeck, what would you like to do?");
    println!("Enter HELP for a list of available commands or EXIT to terminate.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                tracing::debug!(?err, "Unparsed input {line:?}");
                println!("{err}");
                continue;
            }
        };

        match commands::execute(&mut player, command) {
            Outcome::Done(Ok(report)) => print_report(&report),
            Outcome::Done(Err(err)) => println!("{err}"),
            Outcome::Search(results) => {
                print_report(&results.report());
                if results.is_empty() {
                    continue;
                }
                let answer = read_answer(&mut lines).await?;
                match player.play_search_choice(&results, &answer) {
                    Some(Ok(report)) => print_report(&report),
                    Some(Err(err)) => println!("{err}"),
                    None => {}
                }
            }
            Outcome::Exit => break,
        }
    }

    println!("Videodeck is now closing...");
    Ok(())
}

/// Validates the configuration and builds a player over its catalog.
async fn load_player(config: &VideodeckConfig) -> videodeck_core::Result<Player> {
    config.validate()?;
    let catalog = MemoryCatalog::load(&config.catalog.path).await?;
    Ok(Player::new(catalog, config))
}

fn print_report(report: &Report) {
    for line in report.lines() {
        println!("{line}");
    }
}

/// Reads the search confirmation. End of input counts as a decline.
async fn read_answer(lines: &mut Lines<BufReader<Stdin>>) -> anyhow::Result<String> {
    Ok(lines.next_line().await?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn test_load_player_reads_catalog() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"Amazing Cats | amazing_cats_video_id | #cat")
            .unwrap();

        let mut config = VideodeckConfig::for_testing();
        config.catalog.path = file.path().to_path_buf();

        let player = load_player(&config).await.unwrap();
        assert_eq!(player.number_of_videos().lines(), &["1 videos in the library"]);
    }

    #[tokio::test]
    async fn test_load_player_reports_startup_failures() {
        let mut config = VideodeckConfig::for_testing();
        config.catalog.path = PathBuf::from("/nonexistent/videos.txt");

        let err = load_player(&config).await.unwrap_err();
        assert!(matches!(err, VideodeckError::Catalog(_)));
        assert_eq!(
            err.user_message(),
            "Could not read video catalog: /nonexistent/videos.txt"
        );

        config.catalog.path = PathBuf::new();
        let err = load_player(&config).await.unwrap_err();
        assert!(matches!(err, VideodeckError::Configuration { .. }));
        assert_eq!(
            err.user_message(),
            "Invalid configuration: catalog path is empty"
        );
    }
}
