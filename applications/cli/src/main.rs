/// Tunebar - terminal transport bar for the music catalog
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tunebar_catalog::{Catalog, CatalogClient};
use tunebar_cli::render::{now_playing, playlist_line, track_list};
use tunebar_cli::{AppConfig, Session};
use tunebar_core::PlaylistId;
use tunebar_playback::{PlaybackStore, SharedPlaybackStore};
use tunebar_storage::{PlaylistLibrary, Storage};

#[derive(Parser)]
#[command(name = "tunebar")]
#[command(about = "Search the music catalog and play it from the terminal", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./tunebar.toml if present)
    #[arg(short, long, global = true, env = "TUNEBAR_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive transport bar (default)
    Play,
    /// Show playlists, recently played and trending tracks
    Home,
    /// Search the catalog
    Search {
        /// Search query
        query: String,
        /// Number of results
        #[arg(short = 'n', long)]
        max_results: Option<u32>,
    },
    /// List trending tracks
    Trending,
    /// Show recently played tracks
    History {
        /// Number of tracks
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
        /// Forget the history instead
        #[arg(long)]
        clear: bool,
    },
    /// Manage saved playlists
    Playlists {
        #[command(subcommand)]
        command: Option<PlaylistCommands>,
    },
}

#[derive(Subcommand)]
enum PlaylistCommands {
    /// List playlists grouped by folder
    List,
    /// Create an empty playlist
    Create {
        /// Playlist name
        name: String,
        /// Sidebar folder
        #[arg(short, long)]
        folder: Option<String>,
    },
    /// Show the tracks of a playlist
    Show {
        /// Playlist id
        id: String,
    },
    /// Delete a playlist
    Delete {
        /// Playlist id
        id: String,
    },
}

/// Everything a command needs, built once from the configuration
struct App {
    config: AppConfig,
    storage: Storage,
}

impl App {
    fn new(config: AppConfig) -> anyhow::Result<Self> {
        let storage = Storage::open(&config.storage.data_dir).with_context(|| {
            format!(
                "failed to open data directory {}",
                config.storage.data_dir.display()
            )
        })?;
        Ok(Self { config, storage })
    }

    fn catalog(&self) -> anyhow::Result<CatalogClient> {
        let client = CatalogClient::new(self.config.catalog.clone())
            .context("invalid catalog configuration")?;
        if !client.has_api_key() {
            tracing::warn!("No catalog API key configured, searches return sample tracks");
        }
        Ok(client)
    }

    fn store(&self) -> SharedPlaybackStore {
        PlaybackStore::new(self.config.playback.clone(), self.storage.clone()).into()
    }

    fn library(&self) -> PlaylistLibrary {
        PlaylistLibrary::new(self.storage.clone())
    }

    fn session(&self, store: SharedPlaybackStore) -> anyhow::Result<Session> {
        Ok(Session::new(
            store,
            Arc::new(self.catalog()?),
            self.library(),
            self.config.catalog.max_results,
        ))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the transport output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tunebar=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    let app = App::new(config)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => interactive(&app).await?,
        Commands::Home => {
            let mut session = app.session(app.store())?;
            session.home(&mut std::io::stdout()).await?;
        }
        Commands::Search { query, max_results } => {
            let catalog = app.catalog()?;
            let max_results = max_results.unwrap_or(app.config.catalog.max_results);
            let tracks = catalog.search(&query, max_results).await;
            println!("{}", track_list(&tracks, None));
        }
        Commands::Trending => {
            let tracks = app.catalog()?.trending().await;
            println!("{}", track_list(&tracks, None));
        }
        Commands::History { limit, clear } => {
            let store = PlaybackStore::new(app.config.playback.clone(), app.storage.clone());
            if clear {
                store.clear_history();
                println!("history cleared");
            } else {
                println!("{}", track_list(&store.recently_played(limit), None));
            }
        }
        Commands::Playlists { command } => {
            playlists(&app.library(), command.unwrap_or(PlaylistCommands::List))?;
        }
    }

    Ok(())
}

async fn interactive(app: &App) -> anyhow::Result<()> {
    let mut session = app.session(app.store())?;

    let mut stdout = std::io::stdout();
    writeln!(stdout, "tunebar - type `help` for commands")?;

    session
        .run(
            BufReader::new(tokio::io::stdin()),
            &mut stdout,
            |state| println!("{}", now_playing(state)),
        )
        .await?;
    Ok(())
}

fn playlists(library: &PlaylistLibrary, command: PlaylistCommands) -> anyhow::Result<()> {
    match command {
        PlaylistCommands::List => {
            for (folder, playlists) in library.by_folder() {
                if !folder.is_empty() && !playlists.is_empty() {
                    println!("{folder}/");
                }
                for playlist in &playlists {
                    println!("{}", playlist_line(playlist));
                }
            }
        }
        PlaylistCommands::Create { name, folder } => {
            let playlist = library.create(&name, folder.as_deref())?;
            println!("created {}", playlist_line(&playlist));
        }
        PlaylistCommands::Show { id } => {
            let playlist = library
                .get(&PlaylistId::new(id.clone()))
                .with_context(|| format!("no playlist with id {id}"))?;
            println!("{}", playlist.name);
            println!("{}", track_list(&playlist.tracks, None));
        }
        PlaylistCommands::Delete { id } => {
            if library.delete(&PlaylistId::new(id.clone())) {
                println!("deleted {id}");
            } else {
                anyhow::bail!("no playlist with id {id}");
            }
        }
    }
    Ok(())
}
