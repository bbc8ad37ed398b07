//! Contest feed CLI library.
//!
//! This crate provides the CLI interface for generating resolver feeds.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
