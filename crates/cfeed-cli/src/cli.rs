//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Codeforces contest to ICPC resolver event feed converter.
///
/// Reads saved Codeforces API responses (`contest.status` and
/// `contest.standings`) and writes an NDJSON event feed for the resolver.
#[derive(Debug, Parser)]
#[command(name = "cfeed", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the resolver event feed.
    Generate {
        /// Saved `contest.status` response (JSON).
        status_file: PathBuf,

        /// Saved `contest.standings` response (JSON).
        standings_file: PathBuf,

        /// Where to write the feed. Defaults to stdout.
        feed_file: Option<PathBuf>,

        /// Also include virtual and out-of-competition participants.
        #[arg(long)]
        unofficial: bool,
    },

    /// List the team identities assigned from the ranklist.
    Teams {
        /// Saved `contest.standings` response (JSON).
        standings_file: PathBuf,

        /// Also include virtual and out-of-competition participants.
        #[arg(long)]
        unofficial: bool,

        /// Output as JSON lines.
        #[arg(long)]
        json: bool,
    },
}
