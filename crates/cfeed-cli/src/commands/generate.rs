//! Implementation of the `cfeed generate` command.
//!
//! Reads the saved `contest.status` and `contest.standings` responses and
//! writes the resolver event feed as JSONL, to a file or to stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write, stdout};
use std::path::Path;

use anyhow::{Context, Result};

use cfeed_core::{Feed, FeedConfig, FeedError, FeedStats};

use super::util::{load_standings, load_submissions};

/// Loads both responses and builds the feed in memory.
pub fn build(config: &FeedConfig, status_file: &Path, standings_file: &Path) -> Result<Feed> {
    let standings = load_standings(standings_file)?;
    let submissions = load_submissions(status_file)?;

    cfeed_core::generate_from_standings(&standings, &submissions, config)
        .context("failed to generate feed")
}

/// Run the generate command.
///
/// The feed is generated completely before `feed_file` is created, so a
/// failed run leaves no file behind.
pub fn run(
    config: &FeedConfig,
    status_file: &Path,
    standings_file: &Path,
    feed_file: Option<&Path>,
) -> Result<FeedStats> {
    let feed = build(config, status_file, standings_file)?;

    match feed_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create feed file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            feed.write_jsonl(&mut writer)
                .and_then(|()| writer.flush().map_err(FeedError::from))
                .with_context(|| format!("failed to write feed file {}", path.display()))?;
            tracing::info!(path = %path.display(), events = feed.stats.events, "feed written");
        }
        None => write_stdout(&feed)?,
    }

    Ok(feed.stats)
}

fn write_stdout(feed: &Feed) -> Result<()> {
    let stdout = stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let written = feed
        .write_jsonl(&mut writer)
        .and_then(|()| writer.flush().map_err(FeedError::from));

    match written {
        // Handle broken pipe gracefully (e.g., when piped to `head`)
        Err(FeedError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("failed to write feed to stdout"),
    }
}
