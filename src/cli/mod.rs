//! # CLI Module
//!
//! Terminal front end for the artist lookup. The core in [`crate::lookup`] is
//! blocking; the commands here run it on tokio's blocking pool, follow its
//! progress through a channel and render whatever comes back.
//!
//! ## Outcomes
//!
//! Every lookup ends in exactly one of these, each rendered differently:
//!
//! - **Success** - artist block plus a top tracks table (and audio features
//!   when requested); an empty track list only produces a warning
//! - **Not found** - warning, exit status 0
//! - **Could not authenticate** - error, exit status 1
//! - **Catalog lookup failed** - error, exit status 1
//!
//! ## Usage
//!
//! ```bash
//! spotcurator lookup Anitta
//! spotcurator lookup Daft Punk --features
//! spotcurator lookup Anitta --json
//! ```

mod lookup;

pub use lookup::LookupOptions;
pub use lookup::lookup;
