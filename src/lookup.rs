//! Artist lookup orchestration.
//!
//! A lookup is three dependent, blocking requests run in order:
//!
//! ```text
//! token ──> search(name) ──> top tracks(artist.id) [──> audio features(track ids)]
//! ```
//!
//! Token and search failures end the lookup with a [`LookupError`]. Once the
//! artist is known the lookup always succeeds; the top tracks (and audio
//! features) are simply empty if they could not be fetched.

use std::fmt;

use log::debug;
use reqwest::blocking::Client;

use crate::{
    config::Config,
    error::LookupError,
    spotify::{CatalogClient, CredentialProvider},
    types::ArtistLookup,
    utils,
};

/// Step of a lookup that is about to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Authenticating,
    Searching,
    FetchingTopTracks,
    FetchingAudioFeatures,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Stage::Authenticating => "Getting Spotify token...",
            Stage::Searching => "Searching for artist...",
            Stage::FetchingTopTracks => "Getting top tracks...",
            Stage::FetchingAudioFeatures => "Getting audio features...",
        };
        f.write_str(msg)
    }
}

/// Runs artist lookups against Spotify.
///
/// Holds no state between lookups besides its configuration, so one curator
/// can be reused for any number of independent lookups.
#[derive(Debug, Clone)]
pub struct Curator {
    credentials: CredentialProvider,
    catalog: CatalogClient,
    audio_features: bool,
}

impl Curator {
    pub fn new(config: &Config) -> Self {
        let client = Client::new();
        Curator {
            credentials: CredentialProvider::with_client(config, client.clone()),
            catalog: CatalogClient::with_client(config, client),
            audio_features: false,
        }
    }

    /// Also fetch audio features for the top tracks.
    pub fn with_audio_features(mut self, enabled: bool) -> Self {
        self.audio_features = enabled;
        self
    }

    pub fn lookup(&self, name: &str) -> Result<ArtistLookup, LookupError> {
        self.lookup_with(name, |_| {})
    }

    /// Looks up an artist, reporting each [`Stage`] before it starts.
    ///
    /// A blank `name` is rejected with [`LookupError::EmptyName`] before any
    /// request is made.
    pub fn lookup_with<F>(&self, name: &str, mut on_stage: F) -> Result<ArtistLookup, LookupError>
    where
        F: FnMut(Stage),
    {
        let name = utils::normalize_artist_name(name).ok_or(LookupError::EmptyName)?;

        on_stage(Stage::Authenticating);
        let token = self.credentials.get_token()?;

        on_stage(Stage::Searching);
        let artist = self
            .catalog
            .search_artist(&token, name)?
            .ok_or_else(|| LookupError::NotFound(name.to_string()))?;
        debug!("Found artist {} ({})", artist.name, artist.id);

        on_stage(Stage::FetchingTopTracks);
        let top_tracks = self.catalog.top_tracks(&token, &artist.id);

        let track_ids = top_tracks.ids();
        let audio_features = if self.audio_features && !track_ids.is_empty() {
            on_stage(Stage::FetchingAudioFeatures);
            self.catalog.audio_features(&token, &track_ids)
        } else {
            Vec::new()
        };

        Ok(ArtistLookup {
            artist,
            top_tracks,
            audio_features,
        })
    }
}
