//! CLI subcommand implementations.

pub mod generate;
pub mod teams;
mod util;

#[cfg(test)]
mod fixtures;
