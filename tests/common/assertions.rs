//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks for an unresolvable base branch
pub fn base_not_found(name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Base branch '{name}' not found"))
}

/// The single output line mentioning `branch`, if exactly one does
pub fn row_for<'a>(stdout: &'a str, branch: &str) -> Option<&'a str> {
    let needle = format!("| {branch} ");
    let mut rows = stdout.lines().filter(|line| line.contains(&needle));
    let row = rows.next()?;
    rows.next().is_none().then_some(row)
}

/// Whether `stdout` has a row for `branch`
pub fn has_row(stdout: &str, branch: &str) -> bool {
    row_for(stdout, branch).is_some()
}

/// Expected counts section of a row, e.g. `behind:    1 | ahead:    2`
pub fn counts(behind: usize, ahead: usize) -> String {
    format!("behind: {behind:>4} | ahead: {ahead:>4}")
}
