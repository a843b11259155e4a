//! Core value types used by artsea state.

use std::collections::{BTreeMap, BTreeSet};

/// Placeholder rendered for any absent or empty display field.
pub const UNKNOWN: &str = "Unknown";

/// One artwork entry from the remote collection.
///
/// Every display field is optional: the API returns `null` (or omits the key)
/// freely, and empty strings are treated the same as missing values.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Artwork {
    /// Unique collection identifier.
    pub id: u64,
    /// Artwork title.
    #[serde(default)]
    pub title: Option<String>,
    /// Attribution line (artist, nationality, life dates).
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Human-readable creation date.
    #[serde(default)]
    pub date_display: Option<String>,
    /// Place of origin.
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Medium description.
    #[serde(default)]
    pub medium_display: Option<String>,
    /// Free-form dimensions text.
    #[serde(default)]
    pub dimensions: Option<String>,
    /// Credit line.
    #[serde(default)]
    pub credit_line: Option<String>,
    /// Museum reference number.
    #[serde(default)]
    pub main_reference_number: Option<String>,
    /// IIIF image identifier.
    #[serde(default)]
    pub image_id: Option<String>,
    /// Artwork type title (e.g. "Painting").
    #[serde(default)]
    pub artwork_type_title: Option<String>,
    /// Style title.
    #[serde(default)]
    pub style_title: Option<String>,
    /// Classification title.
    #[serde(default)]
    pub classification_title: Option<String>,
    /// Department title.
    #[serde(default)]
    pub department_title: Option<String>,
    /// Whether the artwork is in the public domain.
    #[serde(default)]
    pub is_public_domain: Option<bool>,
}

/// What: Return a field value when it carries text.
///
/// Inputs:
/// - `field`: Optional string field of an [`Artwork`].
///
/// Output:
/// - `Some(&str)` for non-empty values; `None` for missing or empty strings.
#[must_use]
pub fn present(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.trim().is_empty())
}

/// What: Render a field for display, substituting [`UNKNOWN`] when it is blank.
#[must_use]
pub fn or_unknown(field: Option<&String>) -> &str {
    present(field).unwrap_or(UNKNOWN)
}

impl AsRef<Self> for Artwork {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl Artwork {
    /// Title for display, falling back to [`UNKNOWN`].
    #[must_use]
    pub fn display_title(&self) -> &str {
        or_unknown(self.title.as_ref())
    }

    /// "Yes"/"No" for the public-domain flag; a missing flag reads as "No".
    #[must_use]
    pub const fn public_domain_label(&self) -> &'static str {
        match self.is_public_domain {
            Some(true) => "Yes",
            _ => "No",
        }
    }
}

/// Pagination metadata as reported by the collection API.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Pagination {
    /// Total number of matching records.
    #[serde(default)]
    pub total: u64,
    /// Page size used for this response.
    #[serde(default)]
    pub limit: u64,
    /// Offset of the first record in this page.
    #[serde(default)]
    pub offset: u64,
    /// Number of pages at this page size.
    #[serde(default)]
    pub total_pages: u64,
    /// One-based page number of this response.
    #[serde(default)]
    pub current_page: u64,
}

/// One page of records as returned by a single list/search request.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchPage {
    /// Pagination metadata.
    #[serde(default)]
    pub pagination: Pagination,
    /// Records in API order.
    #[serde(default)]
    pub data: Vec<Artwork>,
}

/// The full batch of records currently loaded into a view.
///
/// Replaced wholesale on every fetch; never merged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordSet {
    /// Records in the order the API returned them.
    pub records: Vec<Artwork>,
    /// Pagination metadata for the page these records came from.
    pub pagination: Pagination,
}

impl From<SearchPage> for RecordSet {
    fn from(page: SearchPage) -> Self {
        Self {
            records: page.data,
            pagination: page.pagination,
        }
    }
}

/// Load state of a fetched value.
///
/// Loading, failed and loaded are mutually exclusive; a loaded but empty
/// value is still `Loaded`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Fetch<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request failed; holds the user-facing message.
    Failed(String),
    /// The last request succeeded.
    Loaded(T),
}

impl<T> Fetch<T> {
    /// Borrow the loaded value, if any.
    #[must_use]
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(v) => Some(v),
            _ => None,
        }
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Which browse view a user is in (and which one a detail page came from).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ViewKind {
    /// Sortable list of rows.
    #[default]
    List,
    /// Filterable grid of cards.
    Gallery,
}

impl ViewKind {
    /// Stable lowercase name, used in config files, CLI values and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Gallery => "gallery",
        }
    }

    /// Parse a config/CLI value; accepts a few aliases.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" | "browse" | "rows" => Some(Self::List),
            "gallery" | "grid" | "cards" => Some(Self::Gallery),
            _ => None,
        }
    }
}

/// Field a list can be sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    /// Artwork title.
    #[default]
    Title,
    /// Attribution line.
    Artist,
    /// Date string.
    Date,
    /// Place of origin.
    Origin,
}

impl SortField {
    /// All fields in the order Shift+Tab cycles through them.
    pub const ALL: [Self; 4] = [Self::Title, Self::Artist, Self::Date, Self::Origin];

    /// Label shown in the list header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Artist => "Artist",
            Self::Date => "Date",
            Self::Origin => "Origin",
        }
    }

    /// Value of this field on `artwork`, if present.
    #[must_use]
    pub fn value_of(self, artwork: &Artwork) -> Option<&str> {
        let field = match self {
            Self::Title => artwork.title.as_ref(),
            Self::Artist => artwork.artist_display.as_ref(),
            Self::Date => artwork.date_display.as_ref(),
            Self::Origin => artwork.place_of_origin.as_ref(),
        };
        field.map(String::as_str)
    }

    /// Next field in cycle order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Artist,
            Self::Artist => Self::Date,
            Self::Date => Self::Origin,
            Self::Origin => Self::Title,
        }
    }

    /// Parse a config/CLI value. Accepts the API field names too.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Some(Self::Title),
            "artist" | "artist_display" | "attribution" => Some(Self::Artist),
            "date" | "date_display" => Some(Self::Date),
            "origin" | "place_of_origin" | "place" => Some(Self::Origin),
            _ => None,
        }
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// A to Z.
    #[default]
    Asc,
    /// Z to A.
    Desc,
}

impl SortOrder {
    /// The other direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Label shown in the list header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Asc => "Ascending",
            Self::Desc => "Descending",
        }
    }

    /// Parse a config/CLI value.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" | "up" => Some(Self::Asc),
            "desc" | "descending" | "down" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// A chosen sort field plus direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct SortSpec {
    /// Field compared.
    pub field: SortField,
    /// Comparison polarity.
    pub order: SortOrder,
}

/// Categorical filter groups offered by the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterGroup {
    /// Matches `classification_title`.
    Classification,
    /// Matches `department_title`.
    Department,
    /// Matches `artwork_type_title`.
    Type,
}

impl FilterGroup {
    /// Groups in display order.
    pub const ALL: [Self; 3] = [Self::Classification, Self::Department, Self::Type];

    /// Heading shown above the group's toggles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Classification => "Classification",
            Self::Department => "Department",
            Self::Type => "Type",
        }
    }

    /// The record field this group matches against.
    #[must_use]
    pub fn value_of(self, artwork: &Artwork) -> Option<&str> {
        let field = match self {
            Self::Classification => artwork.classification_title.as_ref(),
            Self::Department => artwork.department_title.as_ref(),
            Self::Type => artwork.artwork_type_title.as_ref(),
        };
        present(field)
    }

    /// Parse a CLI group name.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classification" | "class" => Some(Self::Classification),
            "department" | "dept" => Some(Self::Department),
            "type" | "artwork_type" => Some(Self::Type),
            _ => None,
        }
    }
}

/// User's chosen per-group inclusion sets.
///
/// A group with no accepted values imposes no restriction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    groups: BTreeMap<FilterGroup, BTreeSet<String>>,
}

impl FilterSelection {
    /// Accepted values of `group` (empty when unrestricted).
    #[must_use]
    pub fn accepted(&self, group: FilterGroup) -> Option<&BTreeSet<String>> {
        self.groups.get(&group).filter(|s| !s.is_empty())
    }

    /// Whether `value` is currently toggled on in `group`.
    #[must_use]
    pub fn is_selected(&self, group: FilterGroup, value: &str) -> bool {
        self.groups.get(&group).is_some_and(|s| s.contains(value))
    }

    /// Add `value` to `group`, or remove it if already present.
    pub fn toggle(&mut self, group: FilterGroup, value: &str) {
        let set = self.groups.entry(group).or_default();
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        if set.is_empty() {
            self.groups.remove(&group);
        }
    }

    /// Add `value` to `group`.
    pub fn insert(&mut self, group: FilterGroup, value: impl Into<String>) {
        self.groups.entry(group).or_default().insert(value.into());
    }

    /// Drop every selection.
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// True when no group restricts anything.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.groups.values().all(BTreeSet::is_empty)
    }

    /// Whether `artwork` satisfies every non-empty group.
    ///
    /// A missing field never satisfies a non-empty group.
    #[must_use]
    pub fn accepts(&self, artwork: &Artwork) -> bool {
        self.groups.iter().all(|(group, values)| {
            values.is_empty() || group.value_of(artwork).is_some_and(|v| values.contains(v))
        })
    }
}

/// Snapshot of the ordered identifiers a user was looking at, plus position.
///
/// Handed from a browse view to the detail view at navigation time and never
/// recomputed afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavContext {
    /// Identifiers in the exact visible order at navigation time.
    pub ids: Vec<u64>,
    /// Zero-based position of the currently shown record.
    pub index: usize,
    /// View the user came from.
    pub source: ViewKind,
}

/// Record-set request sent to the background records worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordsRequest {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// View that asked for the records.
    pub view: ViewKind,
    /// Server-side search text (empty lists the collection).
    pub query: String,
    /// One-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

/// Outcome of a prior [`RecordsRequest`].
#[derive(Debug)]
pub struct RecordsResult {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Echoed view.
    pub view: ViewKind,
    /// Page or the error that prevented loading it.
    pub result: Result<SearchPage, crate::sources::CatalogError>,
}

/// Single-record request sent to the background detail worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailRequest {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Collection identifier of the record to fetch.
    pub record_id: u64,
}

/// Outcome of a prior [`DetailRequest`].
#[derive(Debug)]
pub struct DetailResult {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Echoed record identifier.
    pub record_id: u64,
    /// Record or the error that prevented loading it.
    pub result: Result<Artwork, crate::sources::CatalogError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Blank and missing fields both render as the Unknown placeholder.
    ///
    /// - Input: `None`, `Some("")`, `Some("  ")`, `Some("Oil")`
    /// - Output: Unknown for the first three, the value for the last
    fn or_unknown_treats_blank_as_missing() {
        assert_eq!(or_unknown(None), UNKNOWN);
        assert_eq!(or_unknown(Some(&String::new())), UNKNOWN);
        assert_eq!(or_unknown(Some(&"  ".to_string())), UNKNOWN);
        assert_eq!(or_unknown(Some(&"Oil".to_string())), "Oil");
    }

    #[test]
    /// What: Toggling the only value of a group off leaves the group unrestricted.
    ///
    /// - Input: Toggle "Painting" on then off
    /// - Output: Selection is unrestricted and accepts a record with no classification
    fn toggle_off_last_value_unrestricts_group() {
        let mut sel = FilterSelection::default();
        sel.toggle(FilterGroup::Classification, "Painting");
        assert!(sel.is_selected(FilterGroup::Classification, "Painting"));
        assert!(!sel.accepts(&Artwork::default()));
        sel.toggle(FilterGroup::Classification, "Painting");
        assert!(sel.is_unrestricted());
        assert!(sel.accepted(FilterGroup::Classification).is_none());
        assert!(sel.accepts(&Artwork::default()));
    }

    #[test]
    /// What: Records decode with nulls and missing keys as `None`.
    ///
    /// - Input: JSON with `title: null` and no `image_id`
    /// - Output: `id` set, optional fields `None`
    fn artwork_decodes_nulls_and_missing_keys() {
        let a: Artwork = serde_json::from_str(
            r#"{"id": 27992, "title": null, "artist_display": "Georges Seurat", "is_public_domain": true}"#,
        )
        .expect("decode artwork");
        assert_eq!(a.id, 27992);
        assert!(a.title.is_none());
        assert!(a.image_id.is_none());
        assert_eq!(a.display_title(), UNKNOWN);
        assert_eq!(a.public_domain_label(), "Yes");
    }

    #[test]
    /// What: Config keys parse with aliases and reject junk.
    fn config_keys_parse() {
        assert_eq!(SortField::from_config_key("artist_display"), Some(SortField::Artist));
        assert_eq!(SortOrder::from_config_key("DESC"), Some(SortOrder::Desc));
        assert_eq!(ViewKind::from_config_key("grid"), Some(ViewKind::Gallery));
        assert_eq!(FilterGroup::from_config_key("dept"), Some(FilterGroup::Department));
        assert_eq!(SortField::from_config_key("popularity"), None);
    }
}
