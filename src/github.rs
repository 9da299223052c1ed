use crate::error::{CommitCounterError, Result};
use crate::http::{HttpGet, HttpResponse};
use crate::link::parse_link_last_page;
use crate::types::{GitHubRepo, RateLimitState, RepoCommits};
use tracing::{debug, warn};

const API_BASE_URL: &str = "https://api.github.com";
const PER_PAGE: u32 = 100;
const LOW_RATE_LIMIT: u32 = 10;

/// GitHub API client generic over the injected HTTP GET capability.
pub struct GitHubClient<G: HttpGet> {
    transport: G,
}

impl<G: HttpGet> GitHubClient<G> {
    pub fn new(transport: G) -> Self {
        GitHubClient { transport }
    }

    fn check_status(&self, response: &HttpResponse, url: &str) -> Result<()> {
        if response.status >= 400 {
            return Err(CommitCounterError::ApiError {
                status: response.status,
                url: url.to_string(),
            });
        }

        if let Some(rate_limit) = RateLimitState::from_response(response) {
            if rate_limit.remaining < LOW_RATE_LIMIT {
                warn!(
                    remaining = rate_limit.remaining,
                    limit = rate_limit.limit,
                    reset = %rate_limit.reset_time,
                    "GitHub rate limit low"
                );
            }
        }

        Ok(())
    }

    /// Fetch all repository names for a user, traversing every page of the
    /// listing endpoint in order.
    pub async fn fetch_all_repos(&self, user: &str) -> Result<Vec<String>> {
        if user.trim().is_empty() {
            return Err(CommitCounterError::InvalidArgument(
                "user must be a non-empty string".to_string(),
            ));
        }

        let url = format!("{}/users/{}/repos", API_BASE_URL, user);
        let mut repos = Vec::new();
        let mut page: u32 = 1;

        loop {
            let query = [
                ("per_page", PER_PAGE.to_string()),
                ("page", page.to_string()),
            ];
            let response = self.transport.get(&url, &query).await?;
            self.check_status(&response, &url)?;

            let entries = match response.json() {
                serde_json::Value::Array(entries) => entries,
                _ => {
                    return Err(CommitCounterError::UnexpectedResponseFormat(
                        "repository listing is not a JSON array".to_string(),
                    ));
                }
            };

            for entry in entries {
                // Entries without a string "name" are skipped, not fatal.
                if let Ok(repo) = serde_json::from_value::<GitHubRepo>(entry.clone()) {
                    repos.push(repo.name);
                }
            }

            // Last page: fewer entries than the page size (zero included).
            if entries.len() < PER_PAGE as usize {
                break;
            }
            page += 1;
        }

        Ok(repos)
    }

    /// Estimate the number of commits on a repository's default branch.
    ///
    /// Requests the commits endpoint with `per_page=1`, so when the server
    /// reports a `rel="last"` page in the `Link` header, that page number is
    /// the total commit count. Without usable pagination metadata this falls
    /// back to the body length, which under-counts histories longer than one
    /// page but is exact for small repositories.
    pub async fn get_commit_count(&self, user: &str, repo: &str) -> Result<u64> {
        if repo.trim().is_empty() {
            return Err(CommitCounterError::InvalidArgument(
                "repo must be a non-empty string".to_string(),
            ));
        }

        let url = format!("{}/repos/{}/{}/commits", API_BASE_URL, user, repo);
        let query = [("per_page", "1".to_string()), ("page", "1".to_string())];
        let response = self.transport.get(&url, &query).await?;
        self.check_status(&response, &url)?;

        if let Some(link) = response.header("link") {
            if let Some(last_page) = parse_link_last_page(link) {
                return Ok(last_page);
            }
        }

        match response.json() {
            serde_json::Value::Array(commits) => Ok(commits.len() as u64),
            _ => Err(CommitCounterError::UnexpectedResponseFormat(
                "commit listing is not a JSON array".to_string(),
            )),
        }
    }

    /// Enumerate a user's repositories and resolve a commit count for each,
    /// in enumeration order. The first failure aborts the whole call; no
    /// partial results are returned.
    pub async fn get_repo_commit_counts(&self, user: &str) -> Result<Vec<RepoCommits>> {
        let repo_names = self.fetch_all_repos(user).await?;
        debug!(user, repos = repo_names.len(), "resolved repository list");

        let mut results = Vec::with_capacity(repo_names.len());
        // Lookups stay sequential: one request in flight at a time, out of
        // respect for upstream rate limits.
        for repo in repo_names {
            let commits = self.get_commit_count(user, &repo).await?;
            results.push(RepoCommits { repo, commits });
        }

        Ok(results)
    }
}
