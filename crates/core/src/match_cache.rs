//! Memoization of match results across input events.
//!
//! Re-ranking runs on every keystroke-adjacent event, including ones that do
//! not change the query (cursor keys, for example). The cache keeps the last
//! seen query so those events skip recomputation without losing the previous
//! match list.

use crate::matching::{get_matches, Match};
use crate::memories::Memory;

/// Value type retaining the most recently matched query.
///
/// `last_query` is `None` until the first computation and after every forced
/// recompute, so the first call after a reset always recomputes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchCache {
    last_query: Option<String>,
}

impl MatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes matches for `query` unless it equals the query of the
    /// previous call.
    ///
    /// Returns `None` when the existing match list is still valid and must
    /// not be touched. `force_recompute` clears the retained query first;
    /// callers must force whenever the catalog changes, since an unchanged
    /// query against a changed catalog would otherwise be treated as a hit.
    pub fn update(
        &mut self,
        query: &str,
        memories: &[Memory],
        force_recompute: bool,
    ) -> Option<Vec<Match>> {
        if force_recompute {
            self.last_query = None;
        }

        if self.last_query.as_deref() == Some(query) {
            return None;
        }

        self.last_query = Some(query.to_string());
        Some(get_matches(memories, query))
    }
}
