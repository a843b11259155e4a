use crate::state::Artwork;

use super::{CollectionClient, Result};

/// Envelope of the get-by-id endpoint.
#[derive(serde::Deserialize)]
struct RecordEnvelope {
    data: Artwork,
}

impl CollectionClient {
    /// Build the get-by-id URL.
    #[must_use]
    pub fn record_url(&self, id: u64) -> String {
        format!("{}/artworks/{id}", self.base_url)
    }

    /// What: Fetch one full record by id.
    ///
    /// Inputs:
    /// - `id`: Collection identifier
    ///
    /// Output:
    /// - The record; every call goes to the network.
    ///
    /// # Errors
    /// - `NotFound(id)` when the API answers 404
    /// - `Network` on transport failure or other non-success status
    /// - `Decode` when the body has no `data` record
    pub async fn get_by_id(&self, id: u64) -> Result<Artwork> {
        let url = self.record_url(id);
        let body = self.get_body(&url, Some(id)).await?;
        let record = parse_record(&body)?;
        tracing::info!(id, "fetched artwork");
        Ok(record)
    }
}

/// What: Decode a get-by-id response body (`{ "data": { ... } }`).
///
/// # Errors
/// - Returns `Err` when the body is not valid JSON or lacks `data`
pub fn parse_record(body: &str) -> Result<Artwork> {
    let env: RecordEnvelope = serde_json::from_str(body)?;
    Ok(env.data)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    /// What: Record URLs are built under the artworks collection.
    fn record_url_format() {
        let c = CollectionClient::new("https://api.artic.edu/api/v1", Duration::from_secs(5)).expect("client");
        assert_eq!(c.record_url(27992), "https://api.artic.edu/api/v1/artworks/27992");
    }

    #[test]
    /// What: Full records decode from the `data` envelope, ignoring extra fields.
    fn parse_record_reads_envelope() {
        let body = r#"{"data": {"id": 27992, "title": "A Sunday on La Grande Jatte — 1884",
            "artist_display": "Georges Seurat\nFrench, 1859-1891", "dimensions": "207.5 × 308.1 cm",
            "color": {"h": 40}, "is_public_domain": true}, "config": {}}"#;
        let a = parse_record(body).expect("decode record");
        assert_eq!(a.id, 27992);
        assert_eq!(a.dimensions.as_deref(), Some("207.5 × 308.1 cm"));
        assert!(parse_record(r#"{"detail": "not found"}"#).is_err());
    }
}
