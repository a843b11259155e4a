use crate::state::SearchPage;
use crate::util::percent_encode;

use super::{CollectionClient, FIELDS, Result};

impl CollectionClient {
    /// What: Build the list or search URL for one page.
    ///
    /// Inputs:
    /// - `query`: Free text; blank lists the collection instead of searching
    /// - `page`: One-based page number
    /// - `limit`: Page size
    ///
    /// Output:
    /// - `{base}/artworks?...` for a blank query, `{base}/artworks/search?q=...&...` otherwise.
    #[must_use]
    pub fn search_url(&self, query: &str, page: u32, limit: u32) -> String {
        let q = query.trim();
        if q.is_empty() {
            format!(
                "{}/artworks?page={page}&limit={limit}&fields={FIELDS}",
                self.base_url
            )
        } else {
            format!(
                "{}/artworks/search?q={}&page={page}&limit={limit}&fields={FIELDS}",
                self.base_url,
                percent_encode(q)
            )
        }
    }

    /// What: Fetch one page of records, listing or searching depending on `query`.
    ///
    /// Inputs:
    /// - `query`: Free text; blank lists the collection
    /// - `page`: One-based page number
    /// - `limit`: Page size
    ///
    /// Output:
    /// - The decoded page (possibly with zero records).
    ///
    /// # Errors
    /// - `Network` on transport failure or non-success status
    /// - `Decode` when the body is not a `{ pagination, data }` object
    pub async fn search(&self, query: &str, page: u32, limit: u32) -> Result<SearchPage> {
        let url = self.search_url(query, page, limit);
        let body = self.get_body(&url, None).await?;
        let parsed = parse_search_page(&body)?;
        tracing::info!(
            query = query.trim(),
            page,
            records = parsed.data.len(),
            total = parsed.pagination.total,
            "fetched artworks page"
        );
        Ok(parsed)
    }
}

/// What: Decode a list/search response body.
///
/// # Errors
/// - Returns `Err` when the body is not valid JSON of the expected shape
pub fn parse_search_page(body: &str) -> Result<SearchPage> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn client() -> CollectionClient {
        CollectionClient::new("https://api.artic.edu/api/v1", Duration::from_secs(5)).expect("client")
    }

    #[test]
    /// What: Blank queries hit the list endpoint, others the search endpoint.
    ///
    /// - Input: `"  "` and `"water lilies"` for page 2, limit 20
    /// - Output: `/artworks?page=2&limit=20...` and `/artworks/search?q=water%20lilies&page=2...`
    fn search_url_switches_endpoint() {
        let c = client();
        let list = c.search_url("  ", 2, 20);
        assert!(list.starts_with("https://api.artic.edu/api/v1/artworks?page=2&limit=20&fields=id,title,"));
        let search = c.search_url("water lilies", 2, 20);
        assert!(search.starts_with(
            "https://api.artic.edu/api/v1/artworks/search?q=water%20lilies&page=2&limit=20&fields="
        ));
        assert!(search.ends_with("is_public_domain"));
    }

    #[test]
    /// What: A realistic response decodes, tolerating nulls and missing pagination keys.
    fn parse_search_page_decodes_response() {
        let body = r#"{
            "pagination": {"total": 2, "limit": 2, "offset": 0, "total_pages": 1, "current_page": 1},
            "data": [
                {"id": 1, "title": "A Sunday on La Grande Jatte", "image_id": "abc", "is_public_domain": true},
                {"id": 2, "title": null, "artist_display": null, "classification_title": "painting"}
            ],
            "info": {"license_text": "..."}
        }"#;
        let page = parse_search_page(body).expect("decode page");
        assert_eq!(page.pagination.total, 2);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].image_id.as_deref(), Some("abc"));
        assert!(page.data[1].title.is_none());

        let sparse = parse_search_page(r#"{"pagination": {"total": 0}, "data": []}"#).expect("decode sparse page");
        assert!(sparse.data.is_empty());
        assert_eq!(sparse.pagination.current_page, 0);
    }

    #[test]
    /// What: Non-JSON bodies are decode errors.
    fn parse_search_page_rejects_garbage() {
        assert!(matches!(
            parse_search_page("<html>oops</html>"),
            Err(super::super::CatalogError::Decode(_))
        ));
    }
}
