//! ICPC resolver event feed schema.
//!
//! Each [`Event`] serializes to one compact JSON object:
//! `{"type": <kind>, "id": <id or null>, "data": {...}}`.
//!
//! Payload fields that are `None` are left out of the output, except `id` and
//! `icpc_id` which are always written (as `null` when empty). The resolver
//! treats a missing identity key differently from a null one.

use std::fmt;

use serde::{Serialize, Serializer};

/// Feed event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    State,
    Contest,
    Language,
    JudgementType,
    Problems,
    Groups,
    Organizations,
    Teams,
    Submissions,
    Judgements,
}

impl EventKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Contest => "contest",
            Self::Language => "language",
            Self::JudgementType => "judgement-type",
            Self::Problems => "problems",
            Self::Groups => "groups",
            Self::Organizations => "organizations",
            Self::Teams => "teams",
            Self::Submissions => "submissions",
            Self::Judgements => "judgements",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Judgement types the feed distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum JudgementTypeId {
    #[serde(rename = "AC")]
    Accepted,
    #[serde(rename = "WA")]
    WrongAnswer,
    #[serde(rename = "CE")]
    CompileError,
}

impl JudgementTypeId {
    /// Catalog order.
    pub const ALL: [Self; 3] = [Self::Accepted, Self::WrongAnswer, Self::CompileError];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "AC",
            Self::WrongAnswer => "WA",
            Self::CompileError => "CE",
        }
    }

    /// Whether the judgement solves the problem.
    #[must_use]
    pub const fn solved(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Whether the judgement counts as a penalized attempt.
    #[must_use]
    pub const fn penalty(&self) -> bool {
        matches!(self, Self::WrongAnswer)
    }
}

impl fmt::Display for JudgementTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreboardType {
    #[serde(rename = "pass-fail")]
    PassFail,
}

/// Contest lifecycle timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct State {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frozen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thawed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finalized: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_of_updates: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contest {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoreboard_freeze_duration: Option<String>,
    pub scoreboard_type: ScoreboardType,
    pub penalty_time: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub entry_point_required: bool,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JudgementType {
    pub id: JudgementTypeId,
    pub name: String,
    pub penalty: bool,
    pub solved: bool,
}

impl From<JudgementTypeId> for JudgementType {
    fn from(id: JudgementTypeId) -> Self {
        Self {
            id,
            name: id.as_str().to_string(),
            penalty: id.penalty(),
            solved: id.solved(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub id: String,
    pub label: String,
    pub name: String,
    pub ordinal: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rgb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub test_data_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub id: String,
    pub icpc_id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub group_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub id: String,
    pub language_id: String,
    pub problem_id: String,
    pub team_id: String,
    pub time: String,
    pub contest_time: String,
    pub files: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Judgement {
    pub id: String,
    pub submission_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub judgement_type_id: Option<JudgementTypeId>,
    pub start_time: String,
    pub start_contest_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_contest_time: Option<String>,
}

/// A typed event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EventData {
    State(State),
    Contest(Contest),
    Language(Language),
    JudgementType(JudgementType),
    Problem(Problem),
    Group(Group),
    Organization(Organization),
    Team(Team),
    Submission(Submission),
    Judgement(Judgement),
}

impl EventData {
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::State(_) => EventKind::State,
            Self::Contest(_) => EventKind::Contest,
            Self::Language(_) => EventKind::Language,
            Self::JudgementType(_) => EventKind::JudgementType,
            Self::Problem(_) => EventKind::Problems,
            Self::Group(_) => EventKind::Groups,
            Self::Organization(_) => EventKind::Organizations,
            Self::Team(_) => EventKind::Teams,
            Self::Submission(_) => EventKind::Submissions,
            Self::Judgement(_) => EventKind::Judgements,
        }
    }

    /// The payload's own id, if the payload describes one instance of a
    /// collection.
    pub fn instance_id(&self) -> Option<&str> {
        match self {
            Self::State(_) | Self::Contest(_) => None,
            Self::Language(l) => Some(&l.id),
            Self::JudgementType(j) => Some(j.id.as_str()),
            Self::Problem(p) => Some(&p.id),
            Self::Group(g) => Some(&g.id),
            Self::Organization(o) => Some(&o.id),
            Self::Team(t) => Some(&t.id),
            Self::Submission(s) => Some(&s.id),
            Self::Judgement(j) => Some(&j.id),
        }
    }
}

macro_rules! impl_event_data_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for EventData {
                fn from(data: $variant) -> Self {
                    Self::$variant(data)
                }
            }
        )*
    };
}

impl_event_data_from!(
    State,
    Contest,
    Language,
    JudgementType,
    Problem,
    Group,
    Organization,
    Team,
    Submission,
    Judgement,
);

/// One record of the event feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub id: Option<String>,
    pub data: EventData,
}

impl Event {
    /// Builds an event; singleton payloads get a null id, collection
    /// payloads reuse their own id.
    pub fn new(data: impl Into<EventData>) -> Self {
        let data = data.into();
        Self {
            kind: data.kind(),
            id: data.instance_id().map(String::from),
            data,
        }
    }

    /// Compact single-line JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
