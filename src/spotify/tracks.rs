use log::warn;

use crate::{
    error::CatalogError,
    types::{AudioFeatures, AudioFeaturesResponse, TopTracks, TopTracksResponse},
};

use super::{CatalogClient, send_json};

impl CatalogClient {
    /// Fetches an artist's top tracks in the configured market.
    ///
    /// The result keeps at most the first ten tracks, in API order; later
    /// entries are dropped before decoding. A response without a `tracks`
    /// field yields an empty result.
    pub fn fetch_top_tracks(
        &self,
        token: &str,
        artist_id: &str,
    ) -> Result<TopTracks, CatalogError> {
        let request = self
            .get(token, &format!("/artists/{}/top-tracks", artist_id))
            .query(&[("market", self.market())]);

        let response: TopTracksResponse = send_json(request)?;
        Ok(TopTracks::try_from(response)?)
    }

    /// Like [`CatalogClient::fetch_top_tracks`], but any failure (status,
    /// network or an undecodable body) is logged and becomes an empty result.
    pub fn top_tracks(&self, token: &str, artist_id: &str) -> TopTracks {
        match self.fetch_top_tracks(token, artist_id) {
            Ok(tracks) => tracks,
            Err(e) => {
                warn!("Top tracks for artist {} unavailable: {}", artist_id, e);
                TopTracks::default()
            }
        }
    }

    /// Fetches audio features for the given tracks.
    ///
    /// Entries the API reports as `null` are skipped. An empty id list
    /// returns immediately without a request.
    pub fn fetch_audio_features(
        &self,
        token: &str,
        track_ids: &[String],
    ) -> Result<Vec<AudioFeatures>, CatalogError> {
        if track_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = track_ids.join(",");
        let request = self
            .get(token, "/audio-features")
            .query(&[("ids", ids.as_str())]);

        let response: AudioFeaturesResponse = send_json(request)?;
        Ok(response.audio_features.into_iter().flatten().collect())
    }

    /// Degrading form of [`CatalogClient::fetch_audio_features`].
    pub fn audio_features(&self, token: &str, track_ids: &[String]) -> Vec<AudioFeatures> {
        self.fetch_audio_features(token, track_ids)
            .unwrap_or_else(|e| {
                warn!("Audio features unavailable: {}", e);
                Vec::new()
            })
    }
}
