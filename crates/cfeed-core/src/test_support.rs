//! Fixture builders shared by unit tests.

use crate::objects::{
    Contest, ContestPhase, ContestType, Member, ParticipantType, Party, Problem, ProblemType,
    RanklistRow, Submission, Verdict,
};

fn party(members: &[&str]) -> Party {
    Party {
        contest_id: Some(104_491),
        members: members
            .iter()
            .map(|handle| Member {
                handle: (*handle).to_string(),
                name: None,
            })
            .collect(),
        participant_type: ParticipantType::Contestant,
        team_id: None,
        team_name: None,
        ghost: false,
        room: None,
        start_time_seconds: None,
    }
}

pub fn team(id: i64, name: &str, members: &[&str]) -> Party {
    Party {
        team_id: Some(id),
        team_name: Some(name.to_string()),
        ..party(members)
    }
}

pub fn ghost(name: &str) -> Party {
    Party {
        team_name: Some(name.to_string()),
        ghost: true,
        ..party(&[])
    }
}

pub fn individual(handle: &str) -> Party {
    party(&[handle])
}

pub fn with_type(mut party: Party, participant_type: ParticipantType) -> Party {
    party.participant_type = participant_type;
    party
}

pub fn contest(duration_seconds: i64) -> Contest {
    Contest {
        id: 104_491,
        name: "Test Round".to_string(),
        kind: ContestType::Icpc,
        phase: ContestPhase::Finished,
        frozen: false,
        duration_seconds,
        start_time_seconds: Some(1_692_000_000),
        relative_time_seconds: None,
        prepared_by: None,
        website_url: None,
        description: None,
        difficulty: None,
        icpc_region: None,
        country: None,
        city: None,
        season: None,
    }
}

pub fn problem(index: &str, name: &str) -> Problem {
    Problem {
        contest_id: Some(104_491),
        problemset_name: None,
        index: index.to_string(),
        name: name.to_string(),
        kind: ProblemType::Programming,
        points: None,
        rating: None,
        tags: Vec::new(),
    }
}

pub fn row(party: Party) -> RanklistRow {
    RanklistRow {
        party,
        rank: 1,
        points: 0.0,
        penalty: 0,
        successful_hack_count: 0,
        unsuccessful_hack_count: 0,
        problem_results: Vec::new(),
        last_submission_time_seconds: None,
    }
}

pub fn submission(
    id: i64,
    author: Party,
    index: &str,
    verdict: Option<Verdict>,
    relative_time_seconds: i64,
) -> Submission {
    Submission {
        id,
        contest_id: Some(104_491),
        creation_time_seconds: 1_692_000_000 + relative_time_seconds,
        relative_time_seconds,
        problem: problem(index, index),
        author,
        programming_language: "GNU C++17".to_string(),
        verdict,
        testset: Some("TESTS".to_string()),
        passed_test_count: 0,
        time_consumed_millis: 0,
        memory_consumed_bytes: 0,
        points: None,
    }
}
