//! Loading saved API responses from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use cfeed_core::Standings;
use cfeed_core::objects::Submission;

/// Reads and parses a saved `contest.standings` response.
pub fn load_standings(path: &Path) -> Result<Standings> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("failed to read standings file {}", path.display()))?;
    let standings = cfeed_core::parse_standings(&body)
        .with_context(|| format!("failed to parse standings file {}", path.display()))?;

    tracing::info!(
        contest = standings.contest.id,
        problems = standings.problems.len(),
        rows = standings.rows.len(),
        "loaded standings"
    );
    Ok(standings)
}

/// Reads and parses a saved `contest.status` response.
pub fn load_submissions(path: &Path) -> Result<Vec<Submission>> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("failed to read status file {}", path.display()))?;
    let submissions = cfeed_core::parse_status(&body)
        .with_context(|| format!("failed to parse status file {}", path.display()))?;

    tracing::info!(submissions = submissions.len(), "loaded submissions");
    Ok(submissions)
}
