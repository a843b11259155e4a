use std::io::Write;

use crate::app::StartOptions;
use crate::sources::{CollectionClient, image_url};
use crate::state::{Artwork, ViewKind, or_unknown};
use crate::theme::Settings;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Render one record as a tab-separated output line.
///
/// Inputs:
/// - `artwork`: Record to render
/// - `image_size`: Pixel width used for the image URL column
///
/// Output:
/// - `id, title, attribution, date, origin, image URL` joined by tabs; blank fields read
///   `Unknown`, a missing image is an empty last column. Newlines inside fields become spaces.
#[must_use]
pub fn format_line(artwork: &Artwork, image_size: u32) -> String {
    let clean = |s: &str| s.replace(['\n', '\t'], " ");
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        artwork.id,
        clean(artwork.display_title()),
        clean(or_unknown(artwork.artist_display.as_ref())),
        clean(or_unknown(artwork.date_display.as_ref())),
        clean(or_unknown(artwork.place_of_origin.as_ref())),
        image_url(artwork.image_id.as_deref(), image_size)
    )
}

/// What: Load one page, apply filters and sort, print the visible records, and return.
///
/// Inputs:
/// - `settings`: Effective settings; the default view decides whether the list sort applies
/// - `options`: Server-side search, filters and page
///
/// Output:
/// - One line per visible record on stdout, a summary line on stderr.
///
/// # Errors
/// - Returns `Err` when the client cannot be built, the fetch fails, or stdout is closed.
pub async fn run_print(settings: Settings, options: StartOptions) -> Result<()> {
    let client = CollectionClient::from_settings(&settings)?;
    let query = options.search.as_deref().unwrap_or_default();
    let page = client
        .search(query, options.page.max(1), settings.page_size)
        .await?;
    let (sort, image_size) = match settings.default_view {
        ViewKind::List => (Some(settings.sort), settings.list_image_size),
        ViewKind::Gallery => (None, settings.gallery_image_size),
    };
    let shown = crate::logic::visible(&page.data, "", &options.filters, sort);

    let mut out = std::io::stdout().lock();
    for artwork in &shown {
        writeln!(out, "{}", format_line(artwork, image_size))?;
    }
    out.flush()?;
    eprintln!(
        "Showing {} of {} artworks (page {} of {}, {} total)",
        shown.len(),
        page.data.len(),
        page.pagination.current_page,
        page.pagination.total_pages,
        page.pagination.total
    );
    Ok(())
}
