use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils;

/// Maximum number of tracks kept from a top-tracks response.
pub const MAX_TOP_TRACKS: usize = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub artists: ArtistsContainer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistsContainer {
    pub items: Vec<ArtistObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    /// Kept undecoded so entries past the first ten are never parsed.
    #[serde(default)]
    pub tracks: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackObject {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub album: AlbumObject,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumObject {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioFeaturesResponse {
    #[serde(default)]
    pub audio_features: Vec<Option<AudioFeatures>>,
}

/// Artist profile as shown to the user. Optional API fields are already
/// resolved to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistRecord {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
    pub popularity: u32,
    pub followers: u64,
    pub external_url: Option<String>,
}

impl From<ArtistObject> for ArtistRecord {
    fn from(artist: ArtistObject) -> Self {
        ArtistRecord {
            id: artist.id,
            name: artist.name,
            genres: artist.genres.unwrap_or_default(),
            popularity: artist.popularity.unwrap_or(0),
            followers: artist.followers.and_then(|f| f.total).unwrap_or(0),
            external_url: artist
                .external_urls
                .and_then(|urls| urls.spotify)
                .filter(|url| !url.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackRecord {
    pub id: String,
    pub name: String,
    pub album: String,
    pub popularity: u32,
    pub duration_ms: u64,
}

impl From<TrackObject> for TrackRecord {
    fn from(track: TrackObject) -> Self {
        TrackRecord {
            id: track.id.unwrap_or_default(),
            name: track.name,
            album: track.album.name,
            popularity: track.popularity.unwrap_or(0),
            duration_ms: track.duration_ms.unwrap_or(0),
        }
    }
}

/// An artist's top tracks in API order, never more than [`MAX_TOP_TRACKS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TopTracks {
    tracks: Vec<TrackRecord>,
}

impl TopTracks {
    pub fn new<I>(tracks: I) -> Self
    where
        I: IntoIterator<Item = TrackRecord>,
    {
        TopTracks {
            tracks: tracks.into_iter().take(MAX_TOP_TRACKS).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrackRecord> {
        self.tracks.iter()
    }

    pub fn as_slice(&self) -> &[TrackRecord] {
        &self.tracks
    }

    /// Ids of the tracks that have one, in order.
    pub fn ids(&self) -> Vec<String> {
        self.tracks
            .iter()
            .filter(|t| !t.id.is_empty())
            .map(|t| t.id.clone())
            .collect()
    }
}

impl TryFrom<TopTracksResponse> for TopTracks {
    type Error = serde_json::Error;

    fn try_from(response: TopTracksResponse) -> Result<Self, Self::Error> {
        let tracks = response
            .tracks
            .into_iter()
            .take(MAX_TOP_TRACKS)
            .map(|value| serde_json::from_value::<TrackObject>(value).map(TrackRecord::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TopTracks::new(tracks))
    }
}

impl<'a> IntoIterator for &'a TopTracks {
    type Item = &'a TrackRecord;
    type IntoIter = std::slice::Iter<'a, TrackRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: String,
    #[serde(default)]
    pub danceability: f32,
    #[serde(default)]
    pub energy: f32,
    #[serde(default)]
    pub valence: f32,
    #[serde(default)]
    pub acousticness: f32,
    #[serde(default)]
    pub tempo: f32,
}

/// Successful lookup: the artist, their top tracks and, when requested, the
/// audio features of those tracks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistLookup {
    pub artist: ArtistRecord,
    pub top_tracks: TopTracks,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audio_features: Vec<AudioFeatures>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    #[tabled(rename = "Track")]
    pub name: String,
    #[tabled(rename = "Album")]
    pub album: String,
    #[tabled(rename = "Popularity")]
    pub popularity: String,
    #[tabled(rename = "Duration")]
    pub duration: String,
}

impl TrackTableRow {
    pub fn new(position: usize, track: &TrackRecord) -> Self {
        TrackTableRow {
            position,
            name: track.name.clone(),
            album: track.album.clone(),
            popularity: format!("{}/100", track.popularity),
            duration: utils::format_duration(track.duration_ms),
        }
    }
}

#[derive(Tabled)]
pub struct FeaturesTableRow {
    #[tabled(rename = "Track")]
    pub track: String,
    #[tabled(rename = "Dance")]
    pub danceability: String,
    #[tabled(rename = "Energy")]
    pub energy: String,
    #[tabled(rename = "Valence")]
    pub valence: String,
    #[tabled(rename = "Acoustic")]
    pub acousticness: String,
    #[tabled(rename = "BPM")]
    pub tempo: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_defaults_when_optional_fields_are_absent() {
        let artist: ArtistObject = serde_json::from_str(r#"{"id":"a1","name":"Solo"}"#).unwrap();
        let record = ArtistRecord::from(artist);

        assert_eq!(record.id, "a1");
        assert_eq!(record.name, "Solo");
        assert!(record.genres.is_empty());
        assert_eq!(record.popularity, 0);
        assert_eq!(record.followers, 0);
        assert_eq!(record.external_url, None);
    }

    #[test]
    fn artist_null_fields_resolve_to_defaults() {
        let artist: ArtistObject = serde_json::from_str(
            r#"{"id":"a1","name":"Solo","genres":null,"followers":{"total":null},"external_urls":{}}"#,
        )
        .unwrap();
        let record = ArtistRecord::from(artist);

        assert!(record.genres.is_empty());
        assert_eq!(record.followers, 0);
        assert_eq!(record.external_url, None);
    }

    #[test]
    fn artist_without_id_is_rejected() {
        let parsed = serde_json::from_str::<ArtistObject>(r#"{"name":"Nameless"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn top_tracks_keep_first_ten_in_order() {
        let tracks = (1..=15).map(|i| TrackRecord {
            id: format!("t{i}"),
            name: format!("Track {i}"),
            album: "Album".to_string(),
            popularity: 0,
            duration_ms: 0,
        });
        let top = TopTracks::new(tracks);

        assert_eq!(top.len(), MAX_TOP_TRACKS);
        assert_eq!(top.as_slice()[0].id, "t1");
        assert_eq!(top.as_slice()[9].id, "t10");
    }

    #[test]
    fn missing_tracks_field_is_empty() {
        let response: TopTracksResponse = serde_json::from_str("{}").unwrap();
        assert!(TopTracks::try_from(response).unwrap().is_empty());
    }

    #[test]
    fn entries_past_tenth_are_not_decoded() {
        let mut tracks: Vec<serde_json::Value> = (1..=MAX_TOP_TRACKS)
            .map(|i| {
                serde_json::json!({ "id": format!("t{}", i), "name": "x", "album": { "name": "y" } })
            })
            .collect();
        tracks.push(serde_json::json!({ "id": "t11", "album": null }));

        let top = TopTracks::try_from(TopTracksResponse { tracks }).unwrap();

        assert_eq!(top.len(), MAX_TOP_TRACKS);
        assert_eq!(top.as_slice()[9].id, "t10");
    }

    #[test]
    fn malformed_entry_within_first_ten_is_error() {
        let tracks = vec![serde_json::json!({ "id": "t1", "name": "x", "album": null })];

        assert!(TopTracks::try_from(TopTracksResponse { tracks }).is_err());
    }

    #[test]
    fn track_row_formats_popularity_and_duration() {
        let track = TrackRecord {
            id: "t1".to_string(),
            name: "Envolver".to_string(),
            album: "Versions of Me".to_string(),
            popularity: 80,
            duration_ms: 193_000,
        };
        let row = TrackTableRow::new(1, &track);

        assert_eq!(row.popularity, "80/100");
        assert_eq!(row.duration, "3:13");
    }
}
