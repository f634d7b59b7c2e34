use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;
use tokio::sync::mpsc;

use crate::{
    config::Config,
    error, info,
    error::LookupError,
    lookup::{Curator, Stage},
    success,
    types::{ArtistLookup, ArtistRecord},
    utils, warning,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct LookupOptions {
    /// Fetch and show audio features of the top tracks.
    pub audio_features: bool,
    /// Print the result as JSON instead of tables.
    pub json: bool,
    /// Open the artist's Spotify page in the browser.
    pub open: bool,
}

/// Looks up `name` and renders the result.
///
/// The blocking lookup runs on a `spawn_blocking` worker. Progress stages are
/// sent back over an unbounded channel and shown on a spinner until the
/// worker finishes and the channel closes.
pub async fn lookup(config: Config, name: String, options: LookupOptions) {
    if utils::normalize_artist_name(&name).is_none() {
        warning!("Please enter an artist name.");
        return;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Starting search...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let (tx, mut rx) = mpsc::unbounded_channel::<Stage>();
    let task = tokio::task::spawn_blocking(move || {
        let curator = Curator::new(&config).with_audio_features(options.audio_features);
        curator.lookup_with(&name, |stage| {
            tx.send(stage).ok();
        })
    });

    while let Some(stage) = rx.recv().await {
        pb.set_message(stage.to_string());
    }

    let outcome = task.await;
    pb.finish_and_clear();

    let found = match outcome {
        Ok(Ok(found)) => found,
        Ok(Err(e)) => return report_failure(e),
        Err(e) => error!("Lookup did not finish. Err: {}", e),
    };

    if options.json {
        print_json(&found);
    } else {
        render(&found, options);
    }

    if options.open {
        open_profile(&found.artist);
    }
}

fn report_failure(err: LookupError) {
    match err {
        LookupError::EmptyName => warning!("Please enter an artist name."),
        LookupError::NotFound(name) => warning!("Artist '{}' not found.", name),
        LookupError::Auth(e) => error!("Could not connect to Spotify. Err: {}", e),
        LookupError::Catalog(e) => error!("Catalog lookup failed. Err: {}", e),
    }
}

fn render(found: &ArtistLookup, options: LookupOptions) {
    let artist = &found.artist;
    info!("Artist: {}", artist.name.bold());
    info!("Genres: {}", utils::format_genres(&artist.genres));
    info!("Popularity: {}/100", artist.popularity);
    info!("Followers: {}", utils::format_count(artist.followers));
    if let Some(url) = &artist.external_url {
        info!("Spotify URL: {}", url);
    }

    if found.top_tracks.is_empty() {
        warning!("Could not retrieve top tracks.");
    } else {
        println!();
        println!("{}", format!("Top {} Tracks", found.top_tracks.len()).bold());
        println!("{}", Table::new(utils::track_table_rows(&found.top_tracks)));
    }

    if options.audio_features {
        if found.audio_features.is_empty() {
            warning!("Could not retrieve audio features.");
        } else {
            println!();
            println!("{}", "Audio Features".bold());
            let rows = utils::features_table_rows(&found.top_tracks, &found.audio_features);
            println!("{}", Table::new(rows));
        }
    }

    success!("Search completed successfully!");
}

fn print_json(found: &ArtistLookup) {
    match serde_json::to_string_pretty(found) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Cannot serialize result. Err: {}", e),
    }
}

fn open_profile(artist: &ArtistRecord) {
    let Some(url) = &artist.external_url else {
        warning!("No Spotify URL available for {}.", artist.name);
        return;
    };

    if webbrowser::open(url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            url
        )
    }
}
