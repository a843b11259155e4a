//! Remote collection client for the Art Institute of Chicago API.
//!
//! Wraps the two read endpoints (list/search and get-by-id) and the IIIF
//! image URL template. Every call hits the network; nothing is cached.

use std::time::Duration;

use reqwest::StatusCode;

mod details;
mod error;
mod image;
mod search;

pub use details::parse_record;
pub use error::CatalogError;
pub use image::{IIIF_BASE, image_url};
pub use search::parse_search_page;

type Result<T> = std::result::Result<T, CatalogError>;

/// Comma-separated field list requested from the list/search endpoints.
pub const FIELDS: &str = "id,title,artist_display,date_display,place_of_origin,medium_display,dimensions,credit_line,main_reference_number,image_id,artwork_type_title,style_title,classification_title,department_title,is_public_domain";

/// User agent sent with every request.
const USER_AGENT: &str = concat!("artsea/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one API base URL.
#[derive(Clone, Debug)]
pub struct CollectionClient {
    http: reqwest::Client,
    base_url: String,
}

impl CollectionClient {
    /// What: Build a client for `base_url` with a per-request timeout.
    ///
    /// Inputs:
    /// - `base_url`: API root such as `https://api.artic.edu/api/v1` (trailing `/` tolerated)
    /// - `timeout`: Applied to every request
    ///
    /// Output:
    /// - Client, or `CatalogError::Network` when the TLS/HTTP stack cannot be initialized.
    ///
    /// # Errors
    /// - Returns `Err` when `reqwest` fails to build the underlying client
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CatalogError::Network(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from effective settings.
    ///
    /// # Errors
    /// - Same as [`CollectionClient::new`]
    pub fn from_settings(settings: &crate::theme::Settings) -> Result<Self> {
        Self::new(
            &settings.api_base_url,
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    /// API root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// What: GET `url` and return the body of a successful response.
    ///
    /// Inputs:
    /// - `url`: Fully built request URL
    /// - `record_id`: Set for get-by-id requests so a 404 maps to `NotFound`
    ///
    /// Output:
    /// - Response body text, or a classified error.
    async fn get_body(&self, url: &str, record_id: Option<u64>) -> Result<String> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        let status = resp.status();
        classify_status(status, url, record_id)?;
        let body = resp
            .text()
            .await
            .map_err(|e| CatalogError::Network(format!("Failed to read response: {e}")))?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), url, "fetched");
        Ok(body)
    }
}

/// What: Turn a response status into success or a catalog error.
///
/// Inputs:
/// - `status`: HTTP status of the response
/// - `url`: Requested URL (for the error message)
/// - `record_id`: Record asked for, when the request was a get-by-id
///
/// Output:
/// - `Ok(())` on 2xx; `NotFound(id)` on 404 for a get-by-id; `Network` otherwise.
///
/// # Errors
/// - See Output
pub fn classify_status(status: StatusCode, url: &str, record_id: Option<u64>) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    match record_id {
        Some(id) if status == StatusCode::NOT_FOUND => Err(CatalogError::NotFound(id)),
        _ => Err(CatalogError::Network(format!(
            "HTTP {} from {url}",
            status.as_u16()
        ))),
    }
}
