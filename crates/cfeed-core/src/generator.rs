//! Event feed assembly.
//!
//! Turns a contest's standings and submissions into the ordered event list
//! the ICPC resolver replays:
//!
//! 1. contest, language, judgement types, problems, groups, organization
//! 2. one team per eligible ranklist row
//! 3. opening state
//! 4. a submission + judgement pair per judged submission, in input order
//! 5. closing state
//!
//! Generation either produces the whole feed or fails; callers never see a
//! partial event list.

use std::collections::{BTreeMap, HashMap};
use std::io::Write;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::Standings;
use crate::feed::{self, Event, JudgementTypeId, ScoreboardType};
use crate::identity::{IdentityError, ResolvedTeam, TeamIdentityTable};
use crate::objects::{Contest, ParticipantType, Problem, RanklistRow, Submission};
use crate::timing::{self, StateTimes, TimeOutOfRange};
use crate::verdict::{self, Outcome};

/// The single language every submission is filed under.
const LANGUAGE_ID: &str = "0";
const ORGANIZATION_ID: &str = "org_default";
const ORGANIZATION_NAME: &str = "DefaultOrg";

/// Feed generation errors.
#[derive(Debug, Error)]
pub enum FeedError {
    /// A participant could not be resolved.
    #[error(transparent)]
    Identity(#[from] IdentityError),
    /// The contest cannot be turned into a timeline.
    #[error("invalid contest {contest_id}: {reason}")]
    InvalidContest { contest_id: i64, reason: String },
    /// The configuration is inconsistent.
    #[error("invalid feed configuration: {0}")]
    InvalidConfig(String),
    /// A time could not be rendered.
    #[error(transparent)]
    Time(#[from] TimeOutOfRange),
    /// An event failed to serialize.
    #[error("failed to serialize event: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Writing the feed failed.
    #[error("failed to write feed: {0}")]
    Io(#[from] std::io::Error),
}

/// Feed generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Length of the scoreboard freeze before contest end.
    pub freeze_duration_seconds: i64,
    /// Region names, emitted as groups in this order.
    pub regions: Vec<String>,
    /// Admit virtual participants.
    pub include_virtual: bool,
    /// Admit out-of-competition participants.
    pub include_out_of_comp: bool,
    /// Penalty minutes per rejected attempt.
    pub penalty_time: u32,
    /// Region overrides keyed by feed team id (`team_5`, `user_0`, ...).
    /// Teams without an override go to the first region.
    pub team_regions: BTreeMap<String, String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            freeze_duration_seconds: 3600, // 1 hour
            regions: vec!["All".to_string()],
            include_virtual: false,
            include_out_of_comp: false,
            penalty_time: 20,
            team_regions: BTreeMap::new(),
        }
    }
}

impl FeedConfig {
    /// Whether submissions and ranklist rows of this participant type belong
    /// in the feed.
    #[must_use]
    pub const fn participant_allowed(&self, participant_type: ParticipantType) -> bool {
        match participant_type {
            ParticipantType::Contestant => true,
            ParticipantType::Virtual => self.include_virtual,
            ParticipantType::OutOfCompetition => self.include_out_of_comp,
            ParticipantType::Practice | ParticipantType::Manager => false,
        }
    }

    /// Checks the configuration on its own and against the contest length.
    pub fn validate(&self, contest: &Contest) -> Result<(), FeedError> {
        if contest.duration_seconds <= 0 {
            return Err(FeedError::InvalidContest {
                contest_id: contest.id,
                reason: format!(
                    "duration must be positive, got {} seconds",
                    contest.duration_seconds
                ),
            });
        }

        if self.freeze_duration_seconds < 0 {
            return Err(FeedError::InvalidConfig(format!(
                "freeze duration must not be negative, got {}s",
                self.freeze_duration_seconds
            )));
        }
        if self.freeze_duration_seconds > contest.duration_seconds {
            tracing::warn!(
                freeze = self.freeze_duration_seconds,
                duration = contest.duration_seconds,
                "freeze is longer than the contest, scoreboard is frozen from the start"
            );
        }

        if self.regions.is_empty() {
            return Err(FeedError::InvalidConfig(
                "at least one region is required".to_string(),
            ));
        }

        if let Some((team, region)) = self
            .team_regions
            .iter()
            .find(|(_, region)| !self.regions.contains(region))
        {
            return Err(FeedError::InvalidConfig(format!(
                "team {team} is assigned to unknown region `{region}`"
            )));
        }

        Ok(())
    }

    /// Group index for a team.
    fn region_index(&self, team: &ResolvedTeam) -> usize {
        self.team_regions
            .get(&team.id)
            .and_then(|region| self.regions.iter().position(|r| r == region))
            .unwrap_or(0)
    }
}

/// Counters reported after generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedStats {
    pub problems: usize,
    pub teams: usize,
    /// Eligible submissions, including ignored ones.
    pub submissions: usize,
    /// Eligible submissions skipped because of their verdict.
    pub ignored_submissions: usize,
    pub events: usize,
}

/// A generated event feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub events: Vec<Event>,
    pub stats: FeedStats,
}

impl Feed {
    /// One compact JSON string per event, in feed order.
    pub fn to_json_lines(&self) -> Result<Vec<String>, FeedError> {
        self.events
            .iter()
            .map(|event| event.to_json().map_err(FeedError::from))
            .collect()
    }

    /// Writes the feed as newline-delimited JSON.
    pub fn write_jsonl<W: Write>(&self, writer: &mut W) -> Result<(), FeedError> {
        for event in &self.events {
            serde_json::to_writer(&mut *writer, event)?;
            writeln!(writer)?;
        }
        Ok(())
    }
}

/// Generates the event feed for a contest.
///
/// Only participants allowed by `config` are considered, for both the
/// ranklist and the submissions. The eligible ranklist defines the roster;
/// a submission whose author is not on it fails the whole generation.
pub fn generate(
    contest: &Contest,
    problems: &[Problem],
    ranklist: &[RanklistRow],
    submissions: &[Submission],
    config: &FeedConfig,
) -> Result<Feed, FeedError> {
    config.validate(contest)?;

    let ranklist: Vec<&RanklistRow> = ranklist
        .iter()
        .filter(|row| config.participant_allowed(row.party.participant_type))
        .collect();
    let submissions: Vec<&Submission> = submissions
        .iter()
        .filter(|sub| config.participant_allowed(sub.author.participant_type))
        .collect();

    let teams = TeamIdentityTable::populate(ranklist.iter().map(|row| &row.party))?;
    tracing::debug!(
        ghosts = teams.ghost_count(),
        individuals = teams.individual_count(),
        "built team identity table"
    );

    let mut events = Vec::new();

    events.push(Event::new(contest_record(contest, config)?));
    events.push(Event::new(feed::Language {
        id: LANGUAGE_ID.to_string(),
        name: "lang".to_string(),
        entry_point_required: false,
        extensions: Vec::new(),
    }));
    events.extend(
        JudgementTypeId::ALL
            .into_iter()
            .map(|id| Event::new(feed::JudgementType::from(id))),
    );
    events.extend(problem_catalog(problems).into_iter().map(Event::new));
    tracing::info!(problems = problems.len(), "added problems");

    events.extend(config.regions.iter().enumerate().map(|(ix, name)| {
        Event::new(feed::Group {
            id: ix.to_string(),
            icpc_id: Some(ix.to_string()),
            name: name.clone(),
        })
    }));
    events.push(Event::new(feed::Organization {
        id: ORGANIZATION_ID.to_string(),
        name: ORGANIZATION_NAME.to_string(),
    }));

    for row in &ranklist {
        let team = teams.resolve(&row.party)?;
        let region = config.region_index(&team);
        events.push(Event::new(feed::Team {
            id: team.id,
            name: team.full_name,
            group_ids: vec![region.to_string()],
            organization_id: Some(ORGANIZATION_ID.to_string()),
        }));
    }
    tracing::info!(teams = ranklist.len(), "added teams");

    let duration = contest.duration_seconds;
    let freeze = config.freeze_duration_seconds;
    events.push(Event::new(
        StateTimes::compute(duration, freeze, false)?.to_state()?,
    ));

    let mut ignored = 0;
    for sub in &submissions {
        let Outcome::Judged(judgement_type) = verdict::classify(sub.verdict) else {
            tracing::debug!(submission = sub.id, verdict = ?sub.verdict, "ignoring submission");
            ignored += 1;
            continue;
        };

        let team = teams.resolve(&sub.author)?;
        let id = sub.id.to_string();
        let time = timing::epoch_to_iso(sub.relative_time_seconds)?;
        let contest_time = timing::contest_time(sub.relative_time_seconds);

        events.push(Event::new(feed::Submission {
            id: id.clone(),
            language_id: LANGUAGE_ID.to_string(),
            problem_id: sub.problem.index.clone(),
            team_id: team.id,
            time: time.clone(),
            contest_time: contest_time.clone(),
            files: Vec::new(),
        }));
        events.push(Event::new(feed::Judgement {
            id: id.clone(),
            submission_id: id,
            judgement_type_id: Some(judgement_type),
            start_time: time.clone(),
            start_contest_time: contest_time.clone(),
            end_time: Some(time),
            end_contest_time: Some(contest_time),
        }));
    }
    tracing::info!(
        submissions = submissions.len(),
        ignored,
        "added submissions"
    );

    events.push(Event::new(
        StateTimes::compute(duration, freeze, true)?.to_state()?,
    ));

    let stats = FeedStats {
        problems: problems.len(),
        teams: ranklist.len(),
        submissions: submissions.len(),
        ignored_submissions: ignored,
        events: events.len(),
    };
    tracing::info!(events = stats.events, "feed generated");

    Ok(Feed { events, stats })
}

/// Generates the feed from a `contest.standings` result.
pub fn generate_from_standings(
    standings: &Standings,
    submissions: &[Submission],
    config: &FeedConfig,
) -> Result<Feed, FeedError> {
    generate(
        &standings.contest,
        &standings.problems,
        &standings.rows,
        submissions,
        config,
    )
}

fn contest_record(contest: &Contest, config: &FeedConfig) -> Result<feed::Contest, FeedError> {
    Ok(feed::Contest {
        id: format!("cf_contest_{}", contest.id),
        name: contest.name.clone(),
        formal_name: Some(contest.name.clone()),
        start_time: Some(timing::epoch_to_iso(0)?),
        duration: timing::contest_time(contest.duration_seconds),
        scoreboard_freeze_duration: Some(timing::contest_time(config.freeze_duration_seconds)),
        scoreboard_type: ScoreboardType::PassFail,
        penalty_time: config.penalty_time,
    })
}

/// Problem records in input order.
///
/// A problem's ordinal is the position of the first problem with the same
/// index. Duplicate indices are kept as-is.
fn problem_catalog(problems: &[Problem]) -> Vec<feed::Problem> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    problems
        .iter()
        .enumerate()
        .map(|(position, problem)| {
            let ordinal = *first_seen.entry(problem.index.as_str()).or_insert(position);
            if ordinal != position {
                tracing::warn!(
                    index = %problem.index,
                    ordinal,
                    position,
                    "duplicate problem index"
                );
            }
            feed::Problem {
                id: problem.index.clone(),
                label: problem.index.clone(),
                name: problem.name.clone(),
                ordinal,
                rgb: None,
                color: None,
                test_data_count: 1,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::feed::{EventData, EventKind};
    use crate::objects::Verdict;
    use crate::test_support::{
        contest, ghost, individual, problem, row, submission, team, with_type,
    };

    struct Fixture {
        contest: Contest,
        problems: Vec<Problem>,
        ranklist: Vec<RanklistRow>,
        submissions: Vec<Submission>,
    }

    impl Fixture {
        fn generate(&self, config: &FeedConfig) -> Result<Feed, FeedError> {
            generate(
                &self.contest,
                &self.problems,
                &self.ranklist,
                &self.submissions,
                config,
            )
        }
    }

    /// Two problems, team 5 "Alpha" and individual "solo", one AC and one WA.
    fn alpha_and_solo() -> Fixture {
        Fixture {
            contest: contest(7200),
            problems: vec![problem("A", "Sum"), problem("B", "Product")],
            ranklist: vec![row(team(5, "Alpha", &["x", "y"])), row(individual("solo"))],
            submissions: vec![
                submission(1001, team(5, "Alpha", &["x", "y"]), "A", Some(Verdict::Ok), 600),
                submission(1002, individual("solo"), "B", Some(Verdict::WrongAnswer), 1500),
            ],
        }
    }

    fn kinds(feed: &Feed) -> Vec<EventKind> {
        feed.events.iter().map(|e| e.kind).collect()
    }

    fn of_kind(feed: &Feed, kind: EventKind) -> Vec<&Event> {
        feed.events.iter().filter(|e| e.kind == kind).collect()
    }

    fn judgement_types(feed: &Feed) -> Vec<(String, JudgementTypeId)> {
        feed.events
            .iter()
            .filter_map(|e| match &e.data {
                EventData::Judgement(j) => Some((j.id.clone(), j.judgement_type_id?)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn alpha_and_solo_end_to_end() {
        let feed = alpha_and_solo().generate(&FeedConfig::default()).unwrap();

        let team_ids: Vec<_> = of_kind(&feed, EventKind::Teams)
            .iter()
            .map(|e| e.id.clone().unwrap())
            .collect();
        assert_eq!(team_ids, ["team_5", "user_0"]);

        assert_eq!(
            judgement_types(&feed),
            [
                ("1001".to_string(), JudgementTypeId::Accepted),
                ("1002".to_string(), JudgementTypeId::WrongAnswer),
            ]
        );
        assert_eq!(feed.stats.ignored_submissions, 0);
        assert_eq!(feed.stats.teams, 2);
        assert_eq!(feed.stats.events, feed.events.len());
    }

    #[test]
    fn events_follow_fixed_order() {
        use EventKind as K;

        let feed = alpha_and_solo().generate(&FeedConfig::default()).unwrap();

        assert_eq!(
            kinds(&feed),
            [
                K::Contest,
                K::Language,
                K::JudgementType,
                K::JudgementType,
                K::JudgementType,
                K::Problems,
                K::Problems,
                K::Groups,
                K::Organizations,
                K::Teams,
                K::Teams,
                K::State,
                K::Submissions,
                K::Judgements,
                K::Submissions,
                K::Judgements,
                K::State,
            ]
        );
    }

    #[test]
    fn submission_is_followed_by_its_judgement() {
        let feed = alpha_and_solo().generate(&FeedConfig::default()).unwrap();

        let mut seen = HashSet::new();
        for (ix, event) in feed.events.iter().enumerate() {
            if event.kind != EventKind::Submissions {
                continue;
            }
            let next = &feed.events[ix + 1];
            assert_eq!(next.kind, EventKind::Judgements);
            assert_eq!(next.id, event.id);
            assert!(seen.insert(event.id.clone()), "duplicate id {:?}", event.id);
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn submission_payload_uses_relative_time() {
        let feed = alpha_and_solo().generate(&FeedConfig::default()).unwrap();

        let submissions = of_kind(&feed, EventKind::Submissions);
        let EventData::Submission(sub) = &submissions[1].data else {
            panic!("expected a submission payload");
        };
        assert_eq!(sub.team_id, "user_0");
        assert_eq!(sub.problem_id, "B");
        assert_eq!(sub.language_id, "0");
        assert_eq!(sub.time, "1970-01-01T00:25:00.000+00");
        assert_eq!(sub.contest_time, "00:25:00.000");
    }

    #[test]
    fn team_records_use_full_names_and_default_organization() {
        let feed = alpha_and_solo().generate(&FeedConfig::default()).unwrap();

        let teams = of_kind(&feed, EventKind::Teams);
        let EventData::Team(alpha) = &teams[0].data else {
            panic!("expected a team payload");
        };
        assert_eq!(alpha.name, "Alpha (x, y)");
        assert_eq!(alpha.group_ids, ["0"]);
        assert_eq!(alpha.organization_id.as_deref(), Some("org_default"));
    }

    #[test]
    fn contest_record_and_states() {
        let feed = alpha_and_solo().generate(&FeedConfig::default()).unwrap();
        let lines = feed.to_json_lines().unwrap();

        insta::assert_snapshot!(
            &lines[0],
            @r#"{"type":"contest","id":null,"data":{"id":"cf_contest_104491","name":"Test Round","formal_name":"Test Round","start_time":"1970-01-01T00:00:00.000+00","duration":"02:00:00.000","scoreboard_freeze_duration":"01:00:00.000","scoreboard_type":"pass-fail","penalty_time":20}}"#
        );
        insta::assert_snapshot!(
            &lines[11],
            @r#"{"type":"state","id":null,"data":{"started":"1970-01-01T00:00:00.000+00","frozen":"1970-01-01T01:00:00.000+00","thawed":"1970-01-01T02:05:00.000+00"}}"#
        );
        insta::assert_snapshot!(
            &lines[lines.len() - 1],
            @r#"{"type":"state","id":null,"data":{"started":"1970-01-01T00:00:00.000+00","frozen":"1970-01-01T01:00:00.000+00","ended":"1970-01-01T02:00:00.000+00","thawed":"1970-01-01T02:05:00.000+00","finalized":"1970-01-01T02:10:00.000+00","end_of_updates":"1970-01-01T02:15:00.000+00"}}"#
        );
    }

    #[test]
    fn judgement_line_format() {
        let feed = alpha_and_solo().generate(&FeedConfig::default()).unwrap();
        let lines = feed.to_json_lines().unwrap();

        insta::assert_snapshot!(
            &lines[13],
            @r#"{"type":"judgements","id":"1001","data":{"id":"1001","submission_id":"1001","judgement_type_id":"AC","start_time":"1970-01-01T00:10:00.000+00","start_contest_time":"00:10:00.000","end_time":"1970-01-01T00:10:00.000+00","end_contest_time":"00:10:00.000"}}"#
        );
    }

    #[test]
    fn excluded_verdicts_are_counted_not_emitted() {
        let mut fixture = alpha_and_solo();
        fixture.submissions.extend([
            submission(1003, individual("solo"), "A", None, 1600),
            submission(1004, individual("solo"), "A", Some(Verdict::Testing), 1700),
            submission(1005, individual("solo"), "A", Some(Verdict::SecurityViolated), 1800),
            submission(1006, individual("solo"), "A", Some(Verdict::CompilationError), 1900),
        ]);

        let feed = fixture.generate(&FeedConfig::default()).unwrap();

        assert_eq!(feed.stats.submissions, 6);
        assert_eq!(feed.stats.ignored_submissions, 3);
        assert_eq!(of_kind(&feed, EventKind::Submissions).len(), 3);
        assert_eq!(
            judgement_types(&feed)[2],
            ("1006".to_string(), JudgementTypeId::CompileError)
        );
    }

    #[test]
    fn excluded_submissions_skip_identity_checks() {
        let mut fixture = alpha_and_solo();
        fixture
            .submissions
            .push(submission(1003, individual("stranger"), "A", None, 100));

        let feed = fixture.generate(&FeedConfig::default()).unwrap();
        assert_eq!(feed.stats.ignored_submissions, 1);
    }

    #[test]
    fn unknown_author_fails_generation() {
        let mut fixture = alpha_and_solo();
        fixture.submissions.push(submission(
            1003,
            individual("stranger"),
            "A",
            Some(Verdict::Ok),
            100,
        ));

        let err = fixture.generate(&FeedConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            FeedError::Identity(IdentityError::NotInRanklist { kind: "user", .. })
        ));
    }

    #[test]
    fn malformed_ranklist_row_fails_generation() {
        let mut fixture = alpha_and_solo();
        let mut pair = individual("a");
        pair.members.extend(individual("b").members);
        fixture.ranklist.push(row(pair));

        let err = fixture.generate(&FeedConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            FeedError::Identity(IdentityError::Malformed { .. })
        ));
    }

    #[test]
    fn participant_filters() {
        let mut fixture = alpha_and_solo();
        fixture.ranklist.extend([
            row(with_type(individual("virt"), ParticipantType::Virtual)),
            row(with_type(individual("ooc"), ParticipantType::OutOfCompetition)),
            row(with_type(individual("prac"), ParticipantType::Practice)),
            row(with_type(individual("mgr"), ParticipantType::Manager)),
        ]);
        fixture.submissions.extend([
            submission(
                2001,
                with_type(individual("virt"), ParticipantType::Virtual),
                "A",
                Some(Verdict::Ok),
                10,
            ),
            submission(
                2002,
                with_type(individual("prac"), ParticipantType::Practice),
                "A",
                Some(Verdict::Ok),
                10,
            ),
        ]);

        let official = fixture.generate(&FeedConfig::default()).unwrap();
        assert_eq!(official.stats.teams, 2);
        assert_eq!(official.stats.submissions, 2);

        let config = FeedConfig {
            include_virtual: true,
            include_out_of_comp: true,
            ..FeedConfig::default()
        };
        let unofficial = fixture.generate(&config).unwrap();
        let team_ids: Vec<_> = of_kind(&unofficial, EventKind::Teams)
            .iter()
            .map(|e| e.id.clone().unwrap())
            .collect();
        assert_eq!(team_ids, ["team_5", "user_0", "user_1", "user_2"]);
        assert_eq!(unofficial.stats.submissions, 3);
    }

    #[test]
    fn ghosts_from_the_ranklist_can_submit() {
        let fixture = Fixture {
            contest: contest(18_000),
            problems: vec![problem("A", "Sum")],
            ranklist: vec![row(ghost("Team Past")), row(individual("solo"))],
            submissions: vec![submission(1, ghost("Team Past"), "A", Some(Verdict::Ok), 60)],
        };

        let feed = fixture.generate(&FeedConfig::default()).unwrap();
        let submissions = of_kind(&feed, EventKind::Submissions);
        let EventData::Submission(sub) = &submissions[0].data else {
            panic!("expected a submission payload");
        };
        assert_eq!(sub.team_id, "ghost_0");
    }

    #[test]
    fn duplicate_problem_indices_share_first_ordinal() {
        let mut fixture = alpha_and_solo();
        fixture.problems.push(problem("A", "Sum again"));

        let feed = fixture.generate(&FeedConfig::default()).unwrap();
        let ordinals: Vec<_> = of_kind(&feed, EventKind::Problems)
            .iter()
            .map(|e| match &e.data {
                EventData::Problem(p) => (p.id.clone(), p.ordinal),
                other => panic!("unexpected payload {other:?}"),
            })
            .collect();

        assert_eq!(
            ordinals,
            [
                ("A".to_string(), 0),
                ("B".to_string(), 1),
                ("A".to_string(), 0)
            ]
        );
    }

    #[test]
    fn regions_become_groups_and_overrides_apply() {
        let config = FeedConfig {
            regions: vec!["North".to_string(), "South".to_string()],
            team_regions: BTreeMap::from([("user_0".to_string(), "South".to_string())]),
            ..FeedConfig::default()
        };
        let feed = alpha_and_solo().generate(&config).unwrap();

        let groups: Vec<_> = of_kind(&feed, EventKind::Groups)
            .iter()
            .map(|e| e.id.clone().unwrap())
            .collect();
        assert_eq!(groups, ["0", "1"]);

        let group_ids: Vec<_> = of_kind(&feed, EventKind::Teams)
            .iter()
            .map(|e| match &e.data {
                EventData::Team(t) => t.group_ids.clone(),
                other => panic!("unexpected payload {other:?}"),
            })
            .collect();
        assert_eq!(group_ids, [vec!["0".to_string()], vec!["1".to_string()]]);
    }

    #[test]
    fn generation_is_deterministic() {
        let fixture = alpha_and_solo();
        let config = FeedConfig::default();

        let first = fixture.generate(&config).unwrap().to_json_lines().unwrap();
        let second = fixture.generate(&config).unwrap().to_json_lines().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn write_jsonl_emits_one_line_per_event() {
        let feed = alpha_and_solo().generate(&FeedConfig::default()).unwrap();

        let mut out = Vec::new();
        feed.write_jsonl(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(out.lines().count(), feed.events.len());
        assert!(out.ends_with('\n'));
        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            feed.to_json_lines().unwrap()
        );
    }

    #[test]
    fn rejects_non_positive_duration() {
        let mut fixture = alpha_and_solo();
        fixture.contest.duration_seconds = 0;

        let err = fixture.generate(&FeedConfig::default()).unwrap_err();
        assert!(matches!(err, FeedError::InvalidContest { contest_id: 104_491, .. }));
    }

    #[test]
    fn short_contest_under_default_freeze_still_generates() {
        let fixture = Fixture {
            contest: contest(1800),
            problems: vec![problem("A", "Sum")],
            ranklist: vec![row(individual("solo"))],
            submissions: vec![submission(1, individual("solo"), "A", Some(Verdict::Ok), 60)],
        };

        let feed = fixture.generate(&FeedConfig::default()).unwrap();

        let states = of_kind(&feed, EventKind::State);
        let EventData::State(opening) = &states[0].data else {
            panic!("expected a state payload");
        };
        assert_eq!(
            opening.frozen.as_deref(),
            Some("1969-12-31T23:30:00.000+00")
        );
        assert_eq!(judgement_types(&feed).len(), 1);
    }

    #[test]
    fn rejects_negative_freeze() {
        let config = FeedConfig {
            freeze_duration_seconds: -1,
            ..FeedConfig::default()
        };
        let err = alpha_and_solo().generate(&config).unwrap_err();
        assert!(matches!(err, FeedError::InvalidConfig(_)));
    }

    #[test]
    fn huge_duration_fails_instead_of_overflowing() {
        let fixture = Fixture {
            contest: contest(i64::MAX - 100),
            problems: Vec::new(),
            ranklist: Vec::new(),
            submissions: Vec::new(),
        };

        let err = fixture.generate(&FeedConfig::default()).unwrap_err();
        assert!(matches!(err, FeedError::Time(_)));
    }

    #[test]
    fn rejects_missing_regions() {
        let config = FeedConfig {
            regions: Vec::new(),
            ..FeedConfig::default()
        };
        let err = alpha_and_solo().generate(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid feed configuration: at least one region is required"
        );
    }

    #[test]
    fn rejects_override_to_unknown_region() {
        let config = FeedConfig {
            team_regions: BTreeMap::from([("team_5".to_string(), "Mars".to_string())]),
            ..FeedConfig::default()
        };
        let err = alpha_and_solo().generate(&config).unwrap_err();
        assert!(err.to_string().contains("unknown region `Mars`"));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: FeedConfig =
            serde_json::from_str(r#"{"regions": ["East"], "include_virtual": true}"#).unwrap();

        assert_eq!(config.regions, ["East"]);
        assert!(config.include_virtual);
        assert_eq!(config.freeze_duration_seconds, 3600);
        assert_eq!(config.penalty_time, 20);
    }
}
