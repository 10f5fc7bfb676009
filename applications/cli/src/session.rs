//! Interactive transport session
//!
//! Glues the line commands to the playback store, the catalog and the
//! playlist library. Playback output is not written here: the binary
//! subscribes a printer to the store instead.

use crate::error::{CliError, Result};
use crate::input::{help, Input};
use crate::render::{now_playing, playlist_line, track_list};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};
use tunebar_catalog::Catalog;
use tunebar_core::{Playlist, Track};
use tunebar_playback::{PlaybackCommand, SharedPlaybackStore, Snapshot};
use tunebar_storage::PlaylistLibrary;

/// Entries per shelf on the home screen
pub const HOME_SHELF: usize = 6;

/// Entries shown by `history`
const HISTORY_LIMIT: usize = 20;

/// Whether the loop should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    store: SharedPlaybackStore,
    catalog: Arc<dyn Catalog>,
    library: PlaylistLibrary,
    max_results: u32,
    /// Tracks from the last listing, addressed by `play <n>`
    listed: Vec<Track>,
}

impl Session {
    pub fn new(
        store: SharedPlaybackStore,
        catalog: Arc<dyn Catalog>,
        library: PlaylistLibrary,
        max_results: u32,
    ) -> Self {
        Self {
            store,
            catalog,
            library,
            max_results,
            listed: Vec::new(),
        }
    }

    /// Tracks from the last listing
    pub fn listed(&self) -> &[Track] {
        &self.listed
    }

    /// Handle one input line
    pub async fn handle(&mut self, input: Input, out: &mut impl Write) -> Result<Flow> {
        debug!(?input, "Handling input");

        match input {
            Input::Playback(command) => self.store.dispatch(command),
            Input::PlayListed(position) => self.play_listed(position)?,
            Input::Search(query) => {
                let tracks = self.catalog.search(&query, self.max_results).await;
                self.show_listing(tracks, out)?;
            }
            Input::Trending => {
                let tracks = self.catalog.trending().await;
                self.show_listing(tracks, out)?;
            }
            Input::Related => match self.current_track() {
                Some(track) => {
                    let tracks = self.catalog.related(&track.id).await;
                    self.show_listing(tracks, out)?;
                }
                None => writeln!(out, "nothing is playing")?,
            },
            Input::Details => self.show_details(out).await?,
            Input::Queue => {
                let state = self.store.state();
                writeln!(out, "{}", track_list(&state.queue, state.current_track.as_ref()))?;
            }
            Input::History => {
                let tracks = self.store.recently_played(HISTORY_LIMIT);
                self.show_listing(tracks, out)?;
            }
            Input::Save(name) => self.save_current(&name, out)?,
            Input::Playlists(None) => self.show_playlists(out)?,
            Input::Playlists(Some(name)) => {
                let playlist = self.find_playlist(&name).ok_or_else(|| {
                    CliError::invalid_argument("playlists", format!("no playlist named {name:?}"))
                })?;
                self.show_listing(playlist.tracks, out)?;
            }
            Input::Status => writeln!(out, "{}", now_playing(&self.store.state()))?,
            Input::Help => write!(out, "{}", help())?,
            Input::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Run the transport bar until `quit` or end of input
    ///
    /// `on_change` is subscribed for the whole loop and unsubscribed on every
    /// exit path, including read and write failures. Lines that fail to parse
    /// or to run are reported on `out` and the loop carries on.
    pub async fn run<R, W, F>(&mut self, input: R, out: &mut W, on_change: F) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
        F: FnMut(&Snapshot) + Send + 'static,
    {
        let subscription = self.store.subscribe(on_change);
        info!(%subscription, "Transport bar started");

        let result = self.read_lines(input, out).await;

        self.store.unsubscribe(subscription);
        info!("Transport bar stopped");
        result
    }

    async fn read_lines<R, W>(&mut self, mut input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                return Ok(());
            }

            let parsed = match std::str::from_utf8(&buf) {
                Ok(line) => Input::parse(line),
                Err(_) => {
                    writeln!(out, "error: input is not valid UTF-8")?;
                    continue;
                }
            };
            let command = match parsed {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(out, "error: {e}")?;
                    continue;
                }
            };

            match self.handle(command, out).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(()),
                Err(e) => writeln!(out, "error: {e}")?,
            }
        }
    }

    /// Home screen: playlists, recently played and trending shelves
    pub async fn home(&mut self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Playlists")?;
        let playlists = self.library.recent(HOME_SHELF);
        if playlists.is_empty() {
            writeln!(out, "(no playlists)")?;
        }
        for playlist in &playlists {
            writeln!(out, "{}", playlist_line(playlist))?;
        }

        writeln!(out, "\nRecently played")?;
        let recent = self.store.recently_played(HOME_SHELF);
        writeln!(out, "{}", track_list(&recent, None))?;

        writeln!(out, "\nTrending")?;
        let trending = self.catalog.trending().await;
        self.show_listing(trending, out)
    }

    fn current_track(&self) -> Option<Track> {
        self.store.state().current_track.clone()
    }

    fn play_listed(&mut self, position: usize) -> Result<()> {
        let track = position
            .checked_sub(1)
            .and_then(|index| self.listed.get(index))
            .cloned()
            .ok_or_else(|| {
                CliError::invalid_argument(
                    "play",
                    format!("only {} tracks listed", self.listed.len()),
                )
            })?;

        self.store
            .dispatch(PlaybackCommand::SetQueue(self.listed.clone()));
        self.store.dispatch(PlaybackCommand::PlayTrack(track));
        Ok(())
    }

    fn show_listing(&mut self, tracks: Vec<Track>, out: &mut impl Write) -> Result<()> {
        let current = self.current_track();
        writeln!(out, "{}", track_list(&tracks, current.as_ref()))?;
        self.listed = tracks;
        Ok(())
    }

    async fn show_details(&self, out: &mut impl Write) -> Result<()> {
        let Some(track) = self.current_track() else {
            writeln!(out, "nothing is playing")?;
            return Ok(());
        };

        match self.catalog.get_details(&track.id).await {
            Some(details) => {
                writeln!(out, "{}", details.title)?;
                writeln!(out, "  artist:   {}", details.artist)?;
                writeln!(out, "  duration: {}", details.duration_label)?;
                if let Some(url) = &details.thumbnail_url {
                    writeln!(out, "  artwork:  {url}")?;
                }
            }
            None => writeln!(out, "no details available for {}", track.id)?,
        }
        Ok(())
    }

    fn save_current(&self, name: &str, out: &mut impl Write) -> Result<()> {
        let Some(track) = self.current_track() else {
            writeln!(out, "nothing is playing")?;
            return Ok(());
        };

        let playlist = match self.find_playlist(name) {
            Some(playlist) => playlist,
            None => self.library.create(name, None)?,
        };
        let playlist = self.library.add_track(&playlist.id, track)?;

        writeln!(out, "saved to {}", playlist_line(&playlist))?;
        Ok(())
    }

    fn show_playlists(&self, out: &mut impl Write) -> Result<()> {
        let grouped = self.library.by_folder();
        if grouped.values().all(Vec::is_empty) {
            writeln!(out, "(no playlists)")?;
            return Ok(());
        }

        for (folder, playlists) in grouped {
            if playlists.is_empty() {
                continue;
            }
            if !folder.is_empty() {
                writeln!(out, "{folder}/")?;
            }
            let indent = if folder.is_empty() { "" } else { "  " };
            for playlist in &playlists {
                writeln!(out, "{indent}{}", playlist_line(playlist))?;
            }
        }
        Ok(())
    }

    fn find_playlist(&self, name: &str) -> Option<Playlist> {
        let name = name.trim();
        self.library
            .all()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
