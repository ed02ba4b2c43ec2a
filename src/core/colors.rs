//! Row color selection for the branch report.
//!
//! Every row is painted as a whole in the color of its [`RowStyle`].
//!
//! # Color Scheme
//! - **Base**: Bold cyan for the branch everything is compared against
//! - **Head**: Green for the checked-out branch
//! - **Stale**: Red when the tip commit is older than the recency threshold
//! - **Recent**: Yellow for everything else

use crate::core::comparison::Comparison;
use chrono::{DateTime, TimeDelta, Utc};
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Base,
    Head,
    Stale,
    Recent,
}

/// Pick the style for a row. Base wins over checked-out, which wins over recency.
pub fn row_style(
    comparison: &Comparison,
    is_base: bool,
    now: DateTime<Utc>,
    stale_after: TimeDelta,
) -> RowStyle {
    if is_base {
        return RowStyle::Base;
    }
    if comparison.is_head() {
        return RowStyle::Head;
    }

    let is_stale = now
        .checked_sub_signed(stale_after)
        .is_some_and(|cutoff| comparison.committed_at().timestamp() < cutoff.timestamp());
    if is_stale {
        RowStyle::Stale
    } else {
        RowStyle::Recent
    }
}

pub fn paint_row(style: RowStyle, text: &str) -> ColoredString {
    match style {
        RowStyle::Base => text.cyan().bold(),
        RowStyle::Head => text.green(),
        RowStyle::Stale => text.red(),
        RowStyle::Recent => text.yellow(),
    }
}
