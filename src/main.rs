use clap::Parser;
use git_gb::commands::{execute_branches, BranchesOptions};
use git_gb::core::{error::GbError, ordering::Filters, print_error};
use std::env;

#[derive(Parser)]
#[command(name = "git-gb")]
#[command(about = "Show how every local branch relates to a base branch")]
#[command(version)]
struct Cli {
    /// Branch to compare against (defaults to init.defaultBranch, then "master")
    base: Option<String>,

    /// Only show branches exactly this many commits ahead
    #[arg(long, value_name = "N")]
    ahead: Option<usize>,

    /// Only show branches exactly this many commits behind
    #[arg(long, value_name = "N")]
    behind: Option<usize>,

    /// Only show branches merged into the base
    #[arg(long)]
    merged: bool,

    /// Only show branches not merged into the base
    #[arg(long = "no-merged")]
    no_merged: bool,

    /// Delete the comparison cache before running
    #[arg(long = "clear-cache")]
    clear_cache: bool,

    /// Drop cache entries for branch tips that no longer exist
    #[arg(long = "prune-cache")]
    prune_cache: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let options = BranchesOptions {
        base: cli.base,
        filters: Filters {
            ahead: cli.ahead,
            behind: cli.behind,
            merged: cli.merged,
            unmerged: cli.no_merged,
        },
        clear_cache: cli.clear_cache,
        prune_cache: cli.prune_cache,
    };

    if let Err(e) = execute_branches(options) {
        if let GbError::NotInGitRepo = e {
            print_error("Not in a git repository");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }
}
