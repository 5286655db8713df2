//! `gt comments`: open review threads of the current change in quickfix format.

mod api;
mod error;
mod filter;
mod format;
pub mod models;
mod thread;

use std::collections::BTreeMap;
use std::io::{IsTerminal, Write};

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};

use api::{ChangeTarget, fetch_change, fetch_comments};
use error::{CommentsError, Result};
use filter::filter_resolved;
use format::render;
use thread::linearize;

use crate::infra::gerrit::GerritClient;
use crate::infra::git;
use crate::shared::config::Config;
use models::{Comment, CommentsByFile};

#[derive(Args, Clone, PartialEq, Eq)]
pub struct CommentsArgs {
    /// Also print threads that have been resolved
    #[arg(short = 'a', long = "print-resolved", alias = "print_resolved")]
    pub print_resolved: bool,

    /// Change-Id to query (default: the Change-Id trailer of HEAD)
    #[arg(short = 'c', long = "change")]
    pub change: Option<String>,

    /// Gerrit host URL (overrides gerrit.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Gerrit project (overrides gerrit.project)
    #[arg(long)]
    pub project: Option<String>,

    /// Target branch (overrides gerrit.branch)
    #[arg(long)]
    pub branch: Option<String>,
}

/// Result of processing one file: its comments in output order, or why not.
pub type FileResult = Result<Vec<Comment>>;

pub async fn run(args: &CommentsArgs, config: &Config) -> anyhow::Result<()> {
    let change_id = match &args.change {
        Some(id) => id.clone(),
        None => git::current_change_id(&git::open_repo()?)?,
    };
    let target = ChangeTarget {
        project: args
            .project
            .clone()
            .unwrap_or_else(|| config.gerrit.project.clone()),
        branch: args
            .branch
            .clone()
            .unwrap_or_else(|| config.gerrit.branch.clone()),
        change_id,
    };
    let host = args.host.as_deref().unwrap_or(&config.gerrit.host);
    let client = GerritClient::new(host)?;
    let print_resolved = args.print_resolved || config.comments.print_resolved;

    let mut stdout = std::io::stdout().lock();
    show_comments(&client, &target, print_resolved, &mut stdout).await
}

/// Fetch, thread, filter and print the comments of `target`.
pub async fn show_comments(
    client: &GerritClient,
    target: &ChangeTarget,
    print_resolved: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let spinner = fetch_spinner();
    let fetched = fetch_all(client, target).await;
    spinner.finish_and_clear();
    let by_file = fetched?;

    let results = process_all(by_file, print_resolved);
    report(out, results)?;
    Ok(())
}

async fn fetch_all(client: &GerritClient, target: &ChangeTarget) -> anyhow::Result<CommentsByFile> {
    let change = fetch_change(client, target).await?;
    info!(
        change = %change.id,
        patchset = ?change.current_patchset(),
        "found change"
    );
    let by_file = fetch_comments(client, target).await?;
    info!(files = by_file.len(), "fetched comments");
    if let Some(current) = change.current_patchset() {
        let outdated = by_file
            .values()
            .flatten()
            .filter(|c| c.patch_set < current)
            .count();
        if outdated > 0 {
            info!(outdated, current, "some comments were made on earlier patchsets");
        }
    }
    Ok(by_file)
}

fn fetch_spinner() -> ProgressBar {
    if !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
        .template("{spinner} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message("Fetching comments...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Thread one file's comments and, unless `print_resolved`, drop resolved threads.
pub fn process_file(path: &str, comments: Vec<Comment>, print_resolved: bool) -> FileResult {
    let linearized = linearize(comments);
    if print_resolved {
        return Ok(linearized);
    }
    filter_resolved(linearized).map_err(|source| CommentsError::Consistency {
        path: path.to_string(),
        source,
    })
}

/// Process every file independently, keyed in path order.
pub fn process_all(by_file: CommentsByFile, print_resolved: bool) -> BTreeMap<String, FileResult> {
    by_file
        .into_iter()
        .map(|(path, comments)| {
            let result = process_file(&path, comments, print_resolved);
            (path, result)
        })
        .collect()
}

/// Render every file that processed cleanly. Failed files are logged and
/// turned into a single error once everything else has been written.
pub fn report(out: &mut impl Write, results: BTreeMap<String, FileResult>) -> Result<()> {
    let total = results.len();
    let mut rendered = BTreeMap::new();
    let mut failures = Vec::new();

    for (path, result) in results {
        match result {
            Ok(comments) => {
                rendered.insert(path, comments);
            }
            Err(e) => {
                error!(%path, "{e}");
                failures.push(e.to_string());
            }
        }
    }

    render(out, &rendered)?;
    out.flush()?;

    if failures.is_empty() {
        Ok(())
    } else {
        Err(CommentsError::Inconsistent { failures, total })
    }
}
