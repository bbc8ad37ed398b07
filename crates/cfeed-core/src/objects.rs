//! Codeforces API objects consumed by the feed engine.
//!
//! Field names follow the API's camelCase JSON. Unknown keys are ignored so
//! that new upstream fields don't break parsing of saved responses; unknown
//! enum values are rejected.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identity::IdentityError;

/// Contest format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContestType {
    Cf,
    Ioi,
    Icpc,
}

/// Contest phase at the time the standings were fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContestPhase {
    Before,
    Coding,
    PendingSystemTest,
    SystemTest,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ContestType,
    pub phase: ContestPhase,
    #[serde(default)]
    pub frozen: bool,
    /// Contest length in seconds.
    pub duration_seconds: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_time_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepared_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icpc_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemType {
    Programming,
    Question,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contest_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problemset_name: Option<String>,
    /// Problem label within the contest, e.g. `A` or `B1`.
    pub index: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProblemType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// How a party took part in the contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipantType {
    Contestant,
    Practice,
    Virtual,
    Manager,
    OutOfCompetition,
}

/// A contest participant: a formal team, a ghost, or an individual.
///
/// The API encodes the three shapes through nullable fields; use
/// [`Party::kind`] to get the validated shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contest_id: Option<i64>,
    #[serde(default)]
    pub members: Vec<Member>,
    pub participant_type: ParticipantType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default)]
    pub ghost: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time_seconds: Option<i64>,
}

/// The validated shape of a [`Party`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyKind<'a> {
    /// A registered Codeforces team.
    Team {
        id: i64,
        name: &'a str,
        members: &'a [Member],
    },
    /// A replayed participant imported into the contest.
    Ghost { name: &'a str },
    /// A single user participating on their own.
    Individual { handle: &'a str },
}

impl Party {
    /// Classifies the party into exactly one of the three participant shapes.
    pub fn kind(&self) -> Result<PartyKind<'_>, IdentityError> {
        if let Some(id) = self.team_id {
            let name = self
                .team_name
                .as_deref()
                .ok_or(IdentityError::TeamWithoutName { team_id: id })?;
            return Ok(PartyKind::Team {
                id,
                name,
                members: &self.members,
            });
        }

        if self.ghost {
            let name = self
                .team_name
                .as_deref()
                .ok_or(IdentityError::GhostWithoutName)?;
            if !self.members.is_empty() {
                return Err(IdentityError::GhostWithMembers {
                    name: name.to_string(),
                    members: self.members.len(),
                });
            }
            return Ok(PartyKind::Ghost { name });
        }

        match self.members.as_slice() {
            [member] => Ok(PartyKind::Individual {
                handle: &member.handle,
            }),
            _ => Err(IdentityError::Malformed {
                participant: self.to_string(),
            }),
        }
    }

    /// Member handles in ranklist order.
    pub fn handles(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.handle.as_str())
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handles: Vec<&str> = self.handles().collect();
        write!(
            f,
            "Party(teamId={}, teamName={}, ghost={}, members=[{}], participantType={:?})",
            self.team_id
                .map_or_else(|| "none".to_string(), |id| id.to_string()),
            self.team_name.as_deref().unwrap_or("none"),
            self.ghost,
            handles.join(", "),
            self.participant_type,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemResultType {
    Preliminary,
    Final,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemResult {
    pub points: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty: Option<i64>,
    pub rejected_attempt_count: i64,
    #[serde(rename = "type")]
    pub kind: ProblemResultType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_submission_time_seconds: Option<i64>,
}

/// One row of the contest standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RanklistRow {
    pub party: Party,
    pub rank: i64,
    pub points: f64,
    pub penalty: i64,
    #[serde(default)]
    pub successful_hack_count: i64,
    #[serde(default)]
    pub unsuccessful_hack_count: i64,
    #[serde(default)]
    pub problem_results: Vec<ProblemResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_submission_time_seconds: Option<i64>,
}

/// Judge verdict for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Failed,
    Ok,
    Partial,
    CompilationError,
    RuntimeError,
    WrongAnswer,
    PresentationError,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    IdlenessLimitExceeded,
    SecurityViolated,
    Crashed,
    InputPreparationCrashed,
    Challenged,
    Skipped,
    Testing,
    Rejected,
}

impl Verdict {
    /// Every verdict the API declares.
    pub const ALL: [Self; 17] = [
        Self::Failed,
        Self::Ok,
        Self::Partial,
        Self::CompilationError,
        Self::RuntimeError,
        Self::WrongAnswer,
        Self::PresentationError,
        Self::TimeLimitExceeded,
        Self::MemoryLimitExceeded,
        Self::IdlenessLimitExceeded,
        Self::SecurityViolated,
        Self::Crashed,
        Self::InputPreparationCrashed,
        Self::Challenged,
        Self::Skipped,
        Self::Testing,
        Self::Rejected,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contest_id: Option<i64>,
    pub creation_time_seconds: i64,
    /// Seconds since the participant's contest start.
    pub relative_time_seconds: i64,
    pub problem: Problem,
    pub author: Party,
    pub programming_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testset: Option<String>,
    #[serde(default)]
    pub passed_test_count: i64,
    #[serde(default)]
    pub time_consumed_millis: i64,
    #[serde(default)]
    pub memory_consumed_bytes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
}
