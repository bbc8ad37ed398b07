//! Team identity resolution.
//!
//! Formal Codeforces teams already carry a numeric id. Ghosts and individuals
//! don't, so they get sequential indices assigned from the ranklist. The
//! ranklist is the authoritative roster: a submission author that was not
//! seen while building the table is rejected.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::objects::{Party, PartyKind};

/// Participant identity errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The party matches none of the team, ghost, or individual shapes.
    #[error("participant is not a CF team, ghost, or individual: {participant}")]
    Malformed { participant: String },

    /// A formal team without a team name.
    #[error("CF team {team_id} has no team name")]
    TeamWithoutName { team_id: i64 },

    /// A ghost without a team name.
    #[error("ghost participant has no team name")]
    GhostWithoutName,

    /// A ghost that lists members.
    #[error("ghost `{name}` has {members} members, ghosts cannot have team members")]
    GhostWithMembers { name: String, members: usize },

    /// A ghost or individual that is absent from the ranklist.
    #[error("submission by a team not in the ranklist: {kind} `{name}`")]
    NotInRanklist { kind: &'static str, name: String },
}

/// A participant resolved to its feed identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTeam {
    /// Feed team id: `team_<id>`, `ghost_<index>` or `user_<index>`.
    pub id: String,
    /// Team name or user handle.
    pub name: String,
    /// Display name, e.g. `TeamName (member1, member2)`.
    pub full_name: String,
}

/// Generated indices for ghosts and individuals.
#[derive(Debug, Default, Clone)]
pub struct TeamIdentityTable {
    ghosts: HashMap<String, usize>,
    individuals: HashMap<String, usize>,
}

impl TeamIdentityTable {
    /// Builds the table from the (already filtered) ranklist parties.
    ///
    /// Indices are assigned in order of first appearance; a repeated name or
    /// handle keeps its first index.
    pub fn populate<'a, I>(parties: I) -> Result<Self, IdentityError>
    where
        I: IntoIterator<Item = &'a Party>,
    {
        let mut table = Self::default();

        for party in parties {
            match party.kind()? {
                PartyKind::Team { .. } => {}
                PartyKind::Ghost { name } => {
                    let next = table.ghosts.len();
                    table.ghosts.entry(name.to_string()).or_insert(next);
                }
                PartyKind::Individual { handle } => {
                    let next = table.individuals.len();
                    table.individuals.entry(handle.to_string()).or_insert(next);
                }
            }
        }

        Ok(table)
    }

    /// Resolves a party against the table.
    pub fn resolve(&self, party: &Party) -> Result<ResolvedTeam, IdentityError> {
        match party.kind()? {
            PartyKind::Team { id, name, members } => {
                let full_name = if members.is_empty() {
                    name.to_string()
                } else {
                    let handles: Vec<&str> = party.handles().collect();
                    format!("{name} ({})", handles.join(", "))
                };
                Ok(ResolvedTeam {
                    id: format!("team_{id}"),
                    name: name.to_string(),
                    full_name,
                })
            }
            PartyKind::Ghost { name } => {
                let ix = self
                    .ghosts
                    .get(name)
                    .ok_or_else(|| IdentityError::NotInRanklist {
                        kind: "ghost",
                        name: name.to_string(),
                    })?;
                Ok(ResolvedTeam {
                    id: format!("ghost_{ix}"),
                    name: name.to_string(),
                    full_name: name.to_string(),
                })
            }
            PartyKind::Individual { handle } => {
                let ix = self
                    .individuals
                    .get(handle)
                    .ok_or_else(|| IdentityError::NotInRanklist {
                        kind: "user",
                        name: handle.to_string(),
                    })?;
                Ok(ResolvedTeam {
                    id: format!("user_{ix}"),
                    name: handle.to_string(),
                    full_name: handle.to_string(),
                })
            }
        }
    }

    /// Number of distinct ghosts.
    pub fn ghost_count(&self) -> usize {
        self.ghosts.len()
    }

    /// Number of distinct individuals.
    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }
}
