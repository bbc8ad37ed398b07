//! Saved API responses for command tests.

use std::path::{Path, PathBuf};

use serde_json::{Value, json};

fn party(members: &[&str], participant_type: &str) -> Value {
    let members: Vec<Value> = members.iter().map(|h| json!({ "handle": h })).collect();
    json!({
        "contestId": 104_491,
        "members": members,
        "participantType": participant_type,
        "ghost": false
    })
}

pub fn team(id: i64, name: &str, members: &[&str]) -> Value {
    let mut party = party(members, "CONTESTANT");
    party["teamId"] = json!(id);
    party["teamName"] = json!(name);
    party
}

pub fn individual(handle: &str, participant_type: &str) -> Value {
    party(&[handle], participant_type)
}

pub fn standings(parties: &[Value]) -> Value {
    let rows: Vec<Value> = parties
        .iter()
        .enumerate()
        .map(|(i, party)| {
            json!({
                "party": party,
                "rank": i + 1,
                "points": 0.0,
                "penalty": 0,
                "successfulHackCount": 0,
                "unsuccessfulHackCount": 0,
                "problemResults": []
            })
        })
        .collect();

    json!({
        "status": "OK",
        "result": {
            "contest": {
                "id": 104_491,
                "name": "Test Round",
                "type": "ICPC",
                "phase": "FINISHED",
                "frozen": false,
                "durationSeconds": 7200,
                "startTimeSeconds": 1_692_000_000
            },
            "problems": [
                {"contestId": 104_491, "index": "A", "name": "Sum", "type": "PROGRAMMING", "tags": []},
                {"contestId": 104_491, "index": "B", "name": "Product", "type": "PROGRAMMING", "tags": []}
            ],
            "rows": rows
        }
    })
}

pub fn submission(id: i64, author: &Value, index: &str, verdict: &str, relative: i64) -> Value {
    json!({
        "id": id,
        "contestId": 104_491,
        "creationTimeSeconds": 1_692_000_000 + relative,
        "relativeTimeSeconds": relative,
        "problem": {"contestId": 104_491, "index": index, "name": index, "type": "PROGRAMMING"},
        "author": author,
        "programmingLanguage": "Rust 2021",
        "verdict": verdict,
        "testset": "TESTS",
        "passedTestCount": 3,
        "timeConsumedMillis": 15,
        "memoryConsumedBytes": 0
    })
}

pub fn status(submissions: Vec<Value>) -> Value {
    json!({ "status": "OK", "result": submissions })
}

pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, value.to_string()).unwrap();
    path
}
