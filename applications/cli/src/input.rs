//! Transport bar line commands
//!
//! Each line is parsed with the same clap machinery as the binary's own
//! arguments. Command names are matched case-insensitively.

use crate::error::{CliError, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::num::NonZeroUsize;
use tunebar_playback::PlaybackCommand;

/// One line typed at the transport prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Forward a command to the playback store
    Playback(PlaybackCommand),

    /// Queue the listed tracks and play the n-th (1-based)
    PlayListed(usize),

    /// Search the catalog and list the results
    Search(String),

    /// List trending tracks
    Trending,

    /// List tracks related to the current one
    Related,

    /// Fetch full details of the current track
    Details,

    /// Show the queue
    Queue,

    /// Show recently played tracks
    History,

    /// Save the current track to a playlist (created if missing)
    Save(String),

    /// List saved playlists, or the tracks of one playlist
    Playlists(Option<String>),

    /// Show the current state
    Status,

    Help,
    Quit,
}

#[derive(Parser, Debug)]
#[command(
    name = "tunebar",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true,
    help_template = "commands:\n{subcommands}"
)]
struct Line {
    #[command(subcommand)]
    command: LineCommand,
}

#[derive(Subcommand, Debug)]
enum LineCommand {
    /// Search the catalog
    #[command(visible_alias = "s")]
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// List trending tracks
    Trending,
    /// List tracks related to the current one
    Related,
    /// Play the n-th listed track (queues the whole list), or resume
    #[command(visible_alias = "p")]
    Play { position: Option<NonZeroUsize> },
    /// Resume playback
    Resume,
    /// Pause playback
    Pause,
    /// Toggle playback
    #[command(visible_alias = "t")]
    Toggle,
    /// Skip forward
    #[command(visible_alias = "n")]
    Next,
    /// Skip back
    #[command(visible_alias = "previous")]
    Prev,
    /// Set volume (0-100)
    #[command(visible_alias = "volume")]
    Vol {
        #[arg(allow_negative_numbers = true)]
        level: i32,
    },
    /// Toggle shuffle
    Shuffle,
    /// Cycle repeat mode (off, all, one)
    Repeat,
    /// Show the queue
    #[command(visible_alias = "q")]
    Queue,
    /// Show details of the current track
    #[command(visible_alias = "info")]
    Details,
    /// Show recently played tracks
    History,
    /// Add the current track to a playlist
    Save {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// List playlists, or the tracks of one
    #[command(visible_alias = "pl")]
    Playlists { name: Vec<String> },
    /// Show what is playing
    Status,
    /// Show this help
    #[command(visible_alias = "?")]
    Help,
    /// Exit
    #[command(visible_alias = "exit")]
    Quit,
}

impl From<LineCommand> for Input {
    fn from(command: LineCommand) -> Self {
        match command {
            LineCommand::Search { query } => Input::Search(query.join(" ")),
            LineCommand::Trending => Input::Trending,
            LineCommand::Related => Input::Related,
            LineCommand::Play {
                position: Some(position),
            } => Input::PlayListed(position.get()),
            LineCommand::Play { position: None } | LineCommand::Resume => {
                Input::Playback(PlaybackCommand::SetPlaying(true))
            }
            LineCommand::Pause => Input::Playback(PlaybackCommand::SetPlaying(false)),
            LineCommand::Toggle => Input::Playback(PlaybackCommand::TogglePlay),
            LineCommand::Next => Input::Playback(PlaybackCommand::Next),
            LineCommand::Prev => Input::Playback(PlaybackCommand::Previous),
            LineCommand::Vol { level } => Input::Playback(PlaybackCommand::SetVolume(level)),
            LineCommand::Shuffle => Input::Playback(PlaybackCommand::ToggleShuffle),
            LineCommand::Repeat => Input::Playback(PlaybackCommand::CycleRepeat),
            LineCommand::Queue => Input::Queue,
            LineCommand::Details => Input::Details,
            LineCommand::History => Input::History,
            LineCommand::Save { name } => Input::Save(name.join(" ")),
            LineCommand::Playlists { name } if name.is_empty() => Input::Playlists(None),
            LineCommand::Playlists { name } => Input::Playlists(Some(name.join(" "))),
            LineCommand::Status => Input::Status,
            LineCommand::Help => Input::Help,
            LineCommand::Quit => Input::Quit,
        }
    }
}

impl Input {
    /// Parse one line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(None);
        };
        let command = command.to_ascii_lowercase();

        let args = std::iter::once(command.as_str()).chain(words);
        match Line::try_parse_from(args) {
            Ok(parsed) => Ok(Some(parsed.command.into())),
            Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
                Err(CliError::UnknownCommand(command))
            }
            Err(e) => Err(CliError::invalid_argument(&command, first_line(&e))),
        }
    }
}

/// Help text listing every line command
pub fn help() -> String {
    Line::command().render_help().to_string()
}

/// First line of a clap error without its `error: ` prefix
fn first_line(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
