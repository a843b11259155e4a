use std::collections::BTreeSet;

use crate::state::{Artwork, BrowseState, FilterGroup, FilterSelection, SortSpec};

/// What: Test a record against a free-text query.
///
/// Inputs:
/// - `artwork`: Record to test
/// - `query_lower`: Trimmed, lowercased query (empty matches everything)
///
/// Output:
/// - `true` when the query is a substring of `title artist date origin` (lowercased).
#[must_use]
pub fn matches_query(artwork: &Artwork, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {} {} {}",
        artwork.title.as_deref().unwrap_or_default(),
        artwork.artist_display.as_deref().unwrap_or_default(),
        artwork.date_display.as_deref().unwrap_or_default(),
        artwork.place_of_origin.as_deref().unwrap_or_default()
    )
    .to_lowercase();
    haystack.contains(query_lower)
}

/// What: Derive the visible sequence of a record set.
///
/// Inputs:
/// - `records`: Loaded record set (never mutated)
/// - `query`: Free text typed by the user
/// - `filters`: Per-group accepted values
/// - `sort`: Sort to apply, or `None` to keep record-set order
///
/// Output:
/// - References to every record that satisfies all non-empty filter groups and the
///   query, in sorted (stable) or original order.
///
/// Details:
/// - Pure and deterministic; zero results is a valid outcome.
#[must_use]
pub fn visible<'a>(
    records: &'a [Artwork],
    query: &str,
    filters: &FilterSelection,
    sort: Option<SortSpec>,
) -> Vec<&'a Artwork> {
    let q = query.trim().to_lowercase();
    let mut out: Vec<&Artwork> = records
        .iter()
        .filter(|a| filters.accepts(a) && matches_query(a, &q))
        .collect();
    if let Some(spec) = sort {
        crate::logic::sort_records(&mut out, spec);
    }
    out
}

/// What: Distinct values present in the record set for a filter group.
///
/// Inputs:
/// - `records`: Loaded record set
/// - `group`: Filter group
///
/// Output:
/// - Sorted, de-duplicated, non-empty values; these are the only toggles offered.
#[must_use]
pub fn facet_values(records: &[Artwork], group: FilterGroup) -> Vec<String> {
    records
        .iter()
        .filter_map(|a| group.value_of(a))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// What: Recompute a browse view's visible records, keeping the selection when possible.
///
/// Inputs:
/// - `view`: Browse state whose record set, query, filters or sort changed
///
/// Output:
/// - Updates `view.visible`, `view.selected` and `view.list_state`.
///
/// Details:
/// - Selection is restored by record id when it is still visible; otherwise clamped,
///   or cleared when nothing is visible.
pub fn apply_view_preserve_selection(view: &mut BrowseState) {
    let prev_id = view.selected_record().map(|a| a.id);
    view.visible = view.records.loaded().map_or_else(Vec::new, |rs| {
        visible(&rs.records, &view.query, &view.filters, view.sort)
            .into_iter()
            .cloned()
            .collect()
    });
    if view.visible.is_empty() {
        view.selected = 0;
        view.list_state.select(None);
        return;
    }
    view.selected = prev_id
        .and_then(|id| view.visible.iter().position(|a| a.id == id))
        .unwrap_or_else(|| view.selected.min(view.visible.len() - 1));
    view.list_state.select(Some(view.selected));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Fetch, RecordSet, SortField, SortOrder, ViewKind};

    fn art(id: u64, title: &str) -> Artwork {
        Artwork {
            id,
            title: Some(title.to_string()),
            ..Artwork::default()
        }
    }

    fn classified(id: u64, class: Option<&str>, dept: Option<&str>) -> Artwork {
        Artwork {
            id,
            classification_title: class.map(str::to_string),
            department_title: dept.map(str::to_string),
            ..Artwork::default()
        }
    }

    fn ids(v: &[&Artwork]) -> Vec<u64> {
        v.iter().map(|a| a.id).collect()
    }

    #[test]
    /// What: Query matches any of the four fields regardless of case.
    ///
    /// - Input: "chicago" against attribution "Art Institute of Chicago" and title "Unrelated"
    /// - Output: First matches, second does not
    fn query_is_case_insensitive_substring() {
        let hit = Artwork {
            id: 1,
            title: Some("Untitled".into()),
            artist_display: Some("Art Institute of Chicago".into()),
            ..Artwork::default()
        };
        let miss = art(2, "Unrelated");
        let records = vec![hit, miss];
        let out = visible(&records, "chicago", &FilterSelection::default(), None);
        assert_eq!(ids(&out), vec![1]);
        let out = visible(&records, "  CHICAGO ", &FilterSelection::default(), None);
        assert_eq!(ids(&out), vec![1]);
    }

    #[test]
    /// What: The query can span adjacent fields of the concatenation.
    fn query_spans_joined_fields() {
        let a = Artwork {
            id: 7,
            artist_display: Some("Claude Monet".into()),
            date_display: Some("1906".into()),
            ..Artwork::default()
        };
        assert!(matches_query(&a, "monet 1906"));
        assert!(!matches_query(&a, "monet1906"));
    }

    #[test]
    /// What: Empty selection and empty query return every record in original order.
    fn empty_inputs_return_everything() {
        let records = vec![art(3, "c"), art(1, "a"), art(2, "b")];
        let out = visible(&records, "", &FilterSelection::default(), None);
        assert_eq!(ids(&out), vec![3, 1, 2]);
    }

    #[test]
    /// What: Output is a subset satisfying every non-empty group; missing fields never match.
    ///
    /// - Input: Classification {Painting, Print}, Department {Modern}
    /// - Output: Only records with both fields matching
    fn all_non_empty_groups_must_match() {
        let records = vec![
            classified(1, Some("Painting"), Some("Modern")),
            classified(2, Some("Painting"), Some("Asian Art")),
            classified(3, Some("Print"), Some("Modern")),
            classified(4, None, Some("Modern")),
            classified(5, Some("Sculpture"), Some("Modern")),
        ];
        let mut sel = FilterSelection::default();
        sel.insert(FilterGroup::Classification, "Painting");
        sel.insert(FilterGroup::Classification, "Print");
        sel.insert(FilterGroup::Department, "Modern");
        let out = visible(&records, "", &sel, None);
        assert_eq!(ids(&out), vec![1, 3]);
        for a in &out {
            assert!(records.iter().any(|r| r.id == a.id));
            assert!(sel.accepts(a));
        }
    }

    #[test]
    /// What: Filters, query and sort combine; the input slice is untouched.
    fn combined_filter_query_sort() {
        let mut records = vec![
            classified(1, Some("Painting"), None),
            classified(2, Some("Painting"), None),
            classified(3, Some("Print"), None),
        ];
        records[0].title = Some("Water Lilies".into());
        records[1].title = Some("The Bedroom".into());
        records[2].title = Some("Water Study".into());
        let before = records.clone();
        let mut sel = FilterSelection::default();
        sel.insert(FilterGroup::Classification, "Painting");
        let sort = Some(SortSpec {
            field: SortField::Title,
            order: SortOrder::Asc,
        });
        assert_eq!(ids(&visible(&records, "", &sel, sort)), vec![2, 1]);
        assert_eq!(ids(&visible(&records, "water", &sel, sort)), vec![1]);
        assert!(visible(&records, "nothing matches", &sel, sort).is_empty());
        assert_eq!(records, before);
    }

    #[test]
    /// What: Facet values are sorted, distinct and skip blanks.
    fn facet_values_sorted_distinct() {
        let records = vec![
            classified(1, Some("Print"), None),
            classified(2, Some("Painting"), None),
            classified(3, Some("Print"), None),
            classified(4, Some(""), None),
            classified(5, None, None),
        ];
        assert_eq!(
            facet_values(&records, FilterGroup::Classification),
            vec!["Painting".to_string(), "Print".to_string()]
        );
        assert!(facet_values(&records, FilterGroup::Department).is_empty());
    }

    #[test]
    /// What: Recompute keeps the selected record by id and clears selection when empty.
    fn apply_view_keeps_selection_by_id() {
        let mut view = BrowseState::new(
            ViewKind::List,
            Some(SortSpec {
                field: SortField::Title,
                order: SortOrder::Asc,
            }),
        );
        view.records = Fetch::Loaded(RecordSet {
            records: vec![art(1, "c"), art(2, "a"), art(3, "b")],
            ..RecordSet::default()
        });
        apply_view_preserve_selection(&mut view);
        assert_eq!(view.visible.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2, 3, 1]);
        view.selected = 2;
        view.sort = Some(SortSpec {
            field: SortField::Title,
            order: SortOrder::Desc,
        });
        apply_view_preserve_selection(&mut view);
        assert_eq!(view.selected_record().map(|a| a.id), Some(1));
        assert_eq!(view.selected, 0);

        view.query = "zzz".into();
        apply_view_preserve_selection(&mut view);
        assert!(view.visible.is_empty());
        assert_eq!(view.list_state.selected(), None);
    }
}
