//! Core feed engine for turning Codeforces contests into ICPC resolver feeds.
//!
//! This crate contains:
//! - The Codeforces API object model and response parsing
//! - Team identity resolution for teams, ghosts and individuals
//! - Verdict classification and contest timing
//! - Event feed assembly and serialization

pub mod api;
pub mod feed;
mod generator;
pub mod identity;
pub mod objects;
pub mod timing;
pub mod verdict;

#[cfg(test)]
mod test_support;

pub use api::{ApiError, Standings, parse_standings, parse_status};
pub use feed::{Event, EventKind, JudgementTypeId};
pub use generator::{Feed, FeedConfig, FeedError, FeedStats, generate, generate_from_standings};
pub use identity::{IdentityError, ResolvedTeam, TeamIdentityTable};
