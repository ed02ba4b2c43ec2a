//! Ordering and filtering of resolved comparisons.
//!
//! # Public API
//! - [`sort_by_commit_time`]: Stable ascending sort on the branch tip's commit time
//! - [`Filters`]: Conjunction of the user's inclusion predicates
//! - [`column_width`]: Width of the branch name column

use crate::core::comparison::{Comparison, Divergence};

/// Narrowest branch name column, even when every name is shorter
pub const MIN_COLUMN_WIDTH: usize = 30;

/// Oldest commit first. Equal timestamps keep their enumeration order.
pub fn sort_by_commit_time(comparisons: &mut [Comparison]) {
    comparisons.sort_by_key(|comparison| comparison.committed_at().timestamp());
}

/// Inclusion predicates. Every `None`/`false` field means no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filters {
    pub ahead: Option<usize>,
    pub behind: Option<usize>,
    pub merged: bool,
    pub unmerged: bool,
}

impl Filters {
    pub fn matches(&self, divergence: &Divergence) -> bool {
        if self.ahead.is_some_and(|ahead| ahead != divergence.ahead) {
            return false;
        }
        if self.behind.is_some_and(|behind| behind != divergence.behind) {
            return false;
        }
        if self.merged && !divergence.is_merged {
            return false;
        }
        if self.unmerged && divergence.is_merged {
            return false;
        }
        true
    }

    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }
}

/// Widest branch name (in characters) across `comparisons`, at least [`MIN_COLUMN_WIDTH`]
pub fn column_width(comparisons: &[Comparison]) -> usize {
    comparisons
        .iter()
        .map(|comparison| comparison.name().chars().count())
        .fold(MIN_COLUMN_WIDTH, usize::max)
}
