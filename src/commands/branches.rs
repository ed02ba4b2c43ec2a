use crate::core::{
    cache::CacheStore,
    colors::{paint_row, row_style},
    comparison::{BranchTip, CommitGraph, Comparison, Divergence},
    config::GbConfig,
    error::{GbError, Result},
    git::GitRepo,
    ordering::{column_width, sort_by_commit_time, Filters},
    output::print_warning,
};
use chrono::{DateTime, Utc};
use git2::Oid;
use std::collections::HashSet;
use std::env;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M%p";

/// Everything the branches report needs from the command line
#[derive(Debug, Clone, Default)]
pub struct BranchesOptions {
    pub base: Option<String>,
    pub filters: Filters,
    pub clear_cache: bool,
    pub prune_cache: bool,
}

/// Values fixed for the whole run
struct RunContext {
    base_name: String,
    base_oid: Oid,
    now: DateTime<Utc>,
    config: GbConfig,
}

pub fn execute_branches(options: BranchesOptions) -> Result<()> {
    // Check if we're in a git repository
    let current_dir = env::current_dir()?;
    let git_repo = GitRepo::open(&current_dir).map_err(|_| GbError::NotInGitRepo)?;

    let config = GbConfig::load()?;
    let mut cache = open_cache(&git_repo, options.clear_cache);

    let base_name = resolve_base_name(&git_repo, options.base.as_deref(), &config);
    let base_oid = git_repo.resolve_branch(&base_name)?;
    log::debug!("Comparing against '{base_name}' at {base_oid}");

    let context = RunContext {
        base_name,
        base_oid,
        now: Utc::now(),
        config,
    };

    if options.filters.is_active() {
        log::debug!("Applying filters {:?}", options.filters);
    }

    let tips = git_repo.local_branches()?;
    let comparisons = compare_branches(&git_repo, tips, context.base_oid, &mut cache)?;

    for line in render_report(&comparisons, &options.filters, &context) {
        println!("{line}");
    }

    if options.prune_cache {
        let live_keys: HashSet<String> = comparisons.iter().map(Comparison::cache_key).collect();
        let dropped = cache.retain_keys(&live_keys);
        log::debug!("Pruned {dropped} orphaned cache entries");
    }

    if let Err(e) = cache.flush() {
        log::warn!("Cache save failed: {e}");
        print_warning(&e.to_string());
    }

    Ok(())
}

fn open_cache(git_repo: &GitRepo, clear: bool) -> CacheStore {
    let cache_path = git_repo.cache_path();
    if clear {
        if let Err(e) = CacheStore::clear(&cache_path) {
            log::warn!("Cache clear failed: {e}");
            print_warning(&e.to_string());
            return CacheStore::empty(cache_path);
        }
    }
    CacheStore::load(cache_path)
}

/// Command line first, then the repository's configured default, then the user fallback
fn resolve_base_name(git_repo: &GitRepo, requested: Option<&str>, config: &GbConfig) -> String {
    requested
        .map(str::to_string)
        .or_else(|| git_repo.default_branch_name())
        .unwrap_or_else(|| config.default_base_branch.clone())
}

/// Build, resolve and sort one comparison per branch tip. The first graph
/// failure aborts the whole batch.
pub fn compare_branches<G>(
    graph: &G,
    tips: Vec<BranchTip>,
    base_oid: Oid,
    cache: &mut CacheStore,
) -> Result<Vec<Comparison>>
where
    G: CommitGraph + ?Sized,
{
    let seed = &*cache;
    let mut comparisons: Vec<Comparison> = tips
        .into_iter()
        .map(|tip| Comparison::new(tip, base_oid, seed))
        .collect();

    for comparison in &mut comparisons {
        comparison.resolve(graph, cache)?;
    }

    sort_by_commit_time(&mut comparisons);
    Ok(comparisons)
}

/// Comparisons that pass `filters`, plus the base branch regardless of them
pub fn visible_comparisons<'a>(
    comparisons: &'a [Comparison],
    filters: &Filters,
    base_name: &str,
) -> Vec<(&'a Comparison, Divergence)> {
    comparisons
        .iter()
        .filter_map(|comparison| {
            let divergence = comparison.divergence()?;
            let is_base = comparison.name() == base_name;
            (is_base || filters.matches(&divergence)).then_some((comparison, divergence))
        })
        .collect()
}

pub fn format_row(comparison: &Comparison, divergence: &Divergence, width: usize) -> String {
    let merged = if divergence.is_merged { "(merged)" } else { "" };
    let row = format!(
        "{} | {:<width$} | behind: {:>4} | ahead: {:>4} {}",
        comparison.committed_at().format(TIMESTAMP_FORMAT),
        comparison.name(),
        divergence.behind,
        divergence.ahead,
        merged,
    );
    row.trim_end().to_string()
}

fn render_report(comparisons: &[Comparison], filters: &Filters, context: &RunContext) -> Vec<String> {
    // Width covers every branch, not only the ones that survive filtering
    let width = column_width(comparisons);
    let stale_after = context.config.stale_after();

    visible_comparisons(comparisons, filters, &context.base_name)
        .into_iter()
        .map(|(comparison, divergence)| {
            let is_base = comparison.name() == context.base_name;
            let style = row_style(comparison, is_base, context.now, stale_after);
            paint_row(style, &format_row(comparison, &divergence, width)).to_string()
        })
        .collect()
}
