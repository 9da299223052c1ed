use crate::http::HttpResponse;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

/// Repository entry from the listing endpoint. The API returns many more
/// fields; only `name` matters here, and entries without a string name fail
/// deserialization and are skipped by the caller.
#[derive(Debug, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
}

/// One repository paired with its commit count estimate. Collected in the
/// order repositories were discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCommits {
    pub repo: String,
    pub commits: u64,
}

impl fmt::Display for RepoCommits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Repo: {} Number of commits: {}", self.repo, self.commits)
    }
}

/// Render the line-per-repository report.
pub fn format_repo_commit_counts(results: &[RepoCommits]) -> String {
    results
        .iter()
        .map(RepoCommits::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rate limit snapshot read from `X-RateLimit-*` response headers.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    pub remaining: u32,
    pub limit: u32,
    pub reset_time: DateTime<Utc>,
    pub is_limited: bool,
}

impl RateLimitState {
    /// Returns `None` when the response carries no rate limit headers, so
    /// scripted test transports don't register as exhausted.
    pub fn from_response(response: &HttpResponse) -> Option<Self> {
        let remaining = response
            .header("x-ratelimit-remaining")?
            .parse::<u32>()
            .ok()?;

        let limit = response
            .header("x-ratelimit-limit")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(5000);

        let reset_time = response
            .header("x-ratelimit-reset")
            .and_then(|v| v.parse::<i64>().ok())
            .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0))
            .unwrap_or_else(|| Utc::now() + chrono::Duration::hours(1));

        Some(RateLimitState {
            remaining,
            limit,
            reset_time,
            is_limited: remaining == 0,
        })
    }
}
