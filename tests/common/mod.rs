use async_trait::async_trait;
use github_commit_counter::error::{CommitCounterError, Result};
use github_commit_counter::http::{HttpGet, HttpResponse};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted HTTP transport: hands out preprogrammed responses in order and
/// records every outbound request for later assertions.
pub struct MockTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, value)| value.as_str())
    }
}

impl MockTransport {
    pub fn new(responses: Vec<HttpResponse>) -> Self {
        MockTransport {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpGet for MockTransport {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            query: query
                .iter()
                .map(|(param, value)| (param.to_string(), value.clone()))
                .collect(),
        });

        self.responses.lock().unwrap().pop_front().ok_or_else(|| {
            CommitCounterError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("no scripted response left for {}", url),
            ))
        })
    }
}

pub fn json_response(status: u16, body: Value) -> HttpResponse {
    HttpResponse::new(status, Vec::new(), body)
}

pub fn json_response_with_link(status: u16, link: &str, body: Value) -> HttpResponse {
    HttpResponse::new(status, vec![("Link".to_string(), link.to_string())], body)
}

/// A `Link` header advertising only the final page of a commit listing.
pub fn last_page_link(user: &str, repo: &str, last_page: u64) -> String {
    format!(
        "<https://api.github.com/repos/{}/{}/commits?per_page=1&page={}>; rel=\"last\"",
        user, repo, last_page
    )
}

pub fn repo_listing(names: &[&str]) -> Value {
    Value::Array(names.iter().map(|name| json!({ "name": name })).collect())
}
