use crate::{
    error::CatalogError,
    types::{ArtistRecord, SearchResponse},
};

use super::{CatalogClient, send_json};

impl CatalogClient {
    /// Searches the catalog for the artist best matching `name`.
    ///
    /// Only the first search result is requested (`limit=1`). Optional fields
    /// missing from the result are filled with defaults, see [`ArtistRecord`].
    ///
    /// # Returns
    ///
    /// - `Ok(Some(artist))` - the first match
    /// - `Ok(None)` - the search succeeded but nothing matched
    /// - `Err(CatalogError)` - non-200 response, timeout, transport failure or
    ///   a body that does not have the expected `artists.items` shape
    pub fn search_artist(
        &self,
        token: &str,
        name: &str,
    ) -> Result<Option<ArtistRecord>, CatalogError> {
        let request = self
            .get(token, "/search")
            .query(&[("q", name), ("type", "artist"), ("limit", "1")]);

        let response: SearchResponse = send_json(request)?;

        Ok(response
            .artists
            .items
            .into_iter()
            .next()
            .map(ArtistRecord::from))
    }
}
