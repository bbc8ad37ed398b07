//! Saved Codeforces API responses.
//!
//! Every API method answers with an envelope:
//! `{"status": "OK", "result": ...}` or `{"status": "FAILED", "comment": "..."}`.
//! This module only parses responses; fetching them is left to the caller.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::objects::{Contest, Problem, RanklistRow, Submission};

/// API response errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API reported a failure.
    #[error("API call failed: {comment}")]
    Failed { comment: String },
    /// The response was OK but carried no result.
    #[error("API response has no result")]
    MissingResult,
    /// The response was not valid JSON for the expected type.
    #[error("invalid API response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiStatus {
    Ok,
    Failed,
}

/// The response envelope shared by all API methods.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ApiStatus,
    pub comment: Option<String>,
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the result of a successful call.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self.status {
            ApiStatus::Ok => self.result.ok_or(ApiError::MissingResult),
            ApiStatus::Failed => Err(ApiError::Failed {
                comment: self.comment.unwrap_or_else(|| "no comment".to_string()),
            }),
        }
    }
}

/// Result of `contest.standings`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Standings {
    pub contest: Contest,
    pub problems: Vec<Problem>,
    pub rows: Vec<RanklistRow>,
}

/// Parses an API response body and unwraps its result.
pub fn parse_response<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let response: ApiResponse<T> = serde_json::from_str(body)?;
    response.into_result()
}

/// Parses a saved `contest.standings` response.
pub fn parse_standings(body: &str) -> Result<Standings, ApiError> {
    parse_response(body)
}

/// Parses a saved `contest.status` response.
pub fn parse_status(body: &str) -> Result<Vec<Submission>, ApiError> {
    parse_response(body)
}
