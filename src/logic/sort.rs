use crate::state::{Artwork, SortOrder, SortSpec};

/// Lowercased sort key; missing values sort as the empty string.
fn sort_key(artwork: &Artwork, spec: SortSpec) -> String {
    spec.field
        .value_of(artwork)
        .unwrap_or_default()
        .to_lowercase()
}

/// What: Sort records in place by one field, case-insensitively and stably.
///
/// Inputs:
/// - `records`: Sequence to reorder (typically the filtered visible set)
/// - `spec`: Field and direction
///
/// Output:
/// - `records` reordered; equal keys keep their incoming relative order in both directions.
///
/// Details:
/// - Descending flips the comparison rather than reversing the result, so ties stay stable.
pub fn sort_records<T: AsRef<Artwork>>(records: &mut [T], spec: SortSpec) {
    records.sort_by(|a, b| {
        let ka = sort_key(a.as_ref(), spec);
        let kb = sort_key(b.as_ref(), spec);
        match spec.order {
            SortOrder::Asc => ka.cmp(&kb),
            SortOrder::Desc => kb.cmp(&ka),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SortField;

    fn art(id: u64, title: Option<&str>, artist: Option<&str>) -> Artwork {
        Artwork {
            id,
            title: title.map(str::to_string),
            artist_display: artist.map(str::to_string),
            ..Artwork::default()
        }
    }

    fn ids(v: &[Artwork]) -> Vec<u64> {
        v.iter().map(|a| a.id).collect()
    }

    const fn spec(field: SortField, order: SortOrder) -> SortSpec {
        SortSpec { field, order }
    }

    #[test]
    /// What: Ascending title sort keeps equal titles in their incoming order.
    ///
    /// - Input: [1:"B", 2:"A", 3:"A"]
    /// - Output: [2, 3, 1]
    fn title_ascending_is_stable() {
        let mut v = vec![art(1, Some("B"), None), art(2, Some("A"), None), art(3, Some("A"), None)];
        sort_records(&mut v, spec(SortField::Title, SortOrder::Asc));
        assert_eq!(ids(&v), vec![2, 3, 1]);
    }

    #[test]
    /// What: Descending flips polarity but ties still keep incoming order.
    ///
    /// - Input: [1:"B", 2:"A", 3:"A", 4:"b"]
    /// - Output: [1, 4, 2, 3] (B and b tie case-insensitively)
    fn descending_keeps_ties_stable() {
        let mut v = vec![
            art(1, Some("B"), None),
            art(2, Some("A"), None),
            art(3, Some("A"), None),
            art(4, Some("b"), None),
        ];
        sort_records(&mut v, spec(SortField::Title, SortOrder::Desc));
        assert_eq!(ids(&v), vec![1, 4, 2, 3]);
    }

    #[test]
    /// What: Missing values sort as empty strings (first ascending, last descending).
    fn missing_values_sort_as_empty() {
        let mut v = vec![art(1, None, Some("Monet")), art(2, None, None), art(3, None, Some("degas"))];
        sort_records(&mut v, spec(SortField::Artist, SortOrder::Asc));
        assert_eq!(ids(&v), vec![2, 3, 1]);
        sort_records(&mut v, spec(SortField::Artist, SortOrder::Desc));
        assert_eq!(ids(&v), vec![1, 3, 2]);
    }

    #[test]
    /// What: Sorting twice with the same spec changes nothing the second time.
    fn sorting_is_idempotent() {
        let mut v = vec![
            art(1, Some("zebra"), None),
            art(2, Some("Apple"), None),
            art(3, None, None),
            art(4, Some("apple"), None),
        ];
        let s = spec(SortField::Title, SortOrder::Desc);
        sort_records(&mut v, s);
        let once = ids(&v);
        sort_records(&mut v, s);
        assert_eq!(ids(&v), once);
    }

    #[test]
    /// What: Works on borrowed records too.
    fn sorts_references() {
        let owned = vec![art(1, Some("b"), None), art(2, Some("a"), None)];
        let mut refs: Vec<&Artwork> = owned.iter().collect();
        sort_records(&mut refs, spec(SortField::Title, SortOrder::Asc));
        assert_eq!(refs.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2, 1]);
    }
}
