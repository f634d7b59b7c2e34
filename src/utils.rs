use crate::types::{AudioFeatures, FeaturesTableRow, TopTracks, TrackTableRow};

/// Trims an artist name and rejects blank input.
pub fn normalize_artist_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Formats a track duration as `m:ss`.
pub fn format_duration(duration_ms: u64) -> String {
    let minutes = duration_ms / 60_000;
    let seconds = (duration_ms % 60_000) / 1_000;
    format!("{}:{:02}", minutes, seconds)
}

/// Formats a count with comma thousands separators (`9000000` -> `9,000,000`).
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_genres(genres: &[String]) -> String {
    if genres.is_empty() {
        "No genres available".to_string()
    } else {
        genres.join(", ")
    }
}

pub fn track_table_rows(tracks: &TopTracks) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(i, track)| TrackTableRow::new(i + 1, track))
        .collect()
}

/// Pairs audio features with the track names they belong to. Features for
/// tracks that are not in `tracks` keep their id as the label.
pub fn features_table_rows(
    tracks: &TopTracks,
    features: &[AudioFeatures],
) -> Vec<FeaturesTableRow> {
    features
        .iter()
        .map(|f| {
            let track = tracks
                .iter()
                .find(|t| t.id == f.id)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| f.id.clone());

            FeaturesTableRow {
                track,
                danceability: format!("{:.2}", f.danceability),
                energy: format!("{:.2}", f.energy),
                valence: format!("{:.2}", f.valence),
                acousticness: format!("{:.2}", f.acousticness),
                tempo: format!("{:.0}", f.tempo),
            }
        })
        .collect()
}
