//! Prev/next navigation over a snapshot of the visible sequence.
//!
//! A [`NavContext`] is taken when the user opens a record from a browse view
//! and travels with the detail page. It is never recomputed from the browse
//! view afterwards, so later filter changes there cannot affect prev/next.

use crate::state::{Artwork, NavContext, ViewKind};

/// What: Snapshot the visible sequence and the activated position.
///
/// Inputs:
/// - `visible`: Records exactly as currently shown (filtered and sorted)
/// - `index`: Zero-based position of the activated record
/// - `source`: View the user is navigating from
///
/// Output:
/// - `Some(NavContext)` with every visible id, or `None` when `index` is out of range.
#[must_use]
pub fn open_from<T: AsRef<Artwork>>(
    visible: &[T],
    index: usize,
    source: ViewKind,
) -> Option<NavContext> {
    if index >= visible.len() {
        return None;
    }
    Some(NavContext {
        ids: visible.iter().map(|a| a.as_ref().id).collect(),
        index,
        source,
    })
}

impl NavContext {
    /// Identifier at the current position.
    #[must_use]
    pub fn current_id(&self) -> Option<u64> {
        self.ids.get(self.index).copied()
    }

    /// Whether a previous record exists.
    #[must_use]
    pub const fn can_prev(&self) -> bool {
        self.index > 0 && self.index < self.ids.len()
    }

    /// Whether a next record exists.
    #[must_use]
    pub const fn can_next(&self) -> bool {
        self.index + 1 < self.ids.len()
    }

    /// What: Move to the previous record.
    ///
    /// Output:
    /// - `Some(id)` of the new current record; `None` (context unchanged) at the start.
    pub fn step_prev(&mut self) -> Option<u64> {
        if !self.can_prev() {
            return None;
        }
        self.index -= 1;
        self.current_id()
    }

    /// What: Move to the next record.
    ///
    /// Output:
    /// - `Some(id)` of the new current record; `None` (context unchanged) at the end.
    pub fn step_next(&mut self) -> Option<u64> {
        if !self.can_next() {
            return None;
        }
        self.index += 1;
        self.current_id()
    }

    /// Human-readable position, e.g. "3 of 41".
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} of {}", self.index + 1, self.ids.len())
    }
}

/// Prev availability for an optional context; a missing context disables it.
#[must_use]
pub fn can_prev(nav: Option<&NavContext>) -> bool {
    nav.is_some_and(NavContext::can_prev)
}

/// Next availability for an optional context; a missing context disables it.
#[must_use]
pub fn can_next(nav: Option<&NavContext>) -> bool {
    nav.is_some_and(NavContext::can_next)
}
