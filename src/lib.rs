//! Spotify Artist Curator Library
//!
//! Looks up an artist on Spotify by name and returns their profile together
//! with their top tracks. The core is synchronous: a [`lookup::Curator`] runs
//! the token exchange, the artist search and the top-tracks request one after
//! the other. The `spotcurator` binary wraps it in a terminal front end.
//!
//! # Modules
//!
//! - `cli` - Command implementations used by the binary
//! - `config` - Configuration values and `.env` loading
//! - `error` - Error types for every layer
//! - `lookup` - The token → search → top tracks orchestration
//! - `spotify` - Blocking Spotify accounts and Web API clients
//! - `types` - Data structures and type definitions
//! - `utils` - Formatting helpers
//!
//! # Example
//!
//! ```
//! use spotcurator::{config::Config, lookup::Curator};
//!
//! let config = Config::from_env()?;
//! let found = Curator::new(&config).lookup("Anitta")?;
//! println!("{} has {} top tracks", found.artist.name, found.top_tracks.len());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lookup;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Followers: {}", followers);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
