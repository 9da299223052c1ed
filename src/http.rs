use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

const USER_AGENT: &str = "github-commit-counter/0.1.0";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// An HTTP response reduced to the pieces the client inspects: status code,
/// headers, and a JSON body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    headers: HashMap<String, String>,
    body: Value,
}

impl HttpResponse {
    pub fn new(status: u16, headers: Vec<(String, String)>, body: Value) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();
        HttpResponse { status, headers, body }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn json(&self) -> &Value {
        &self.body
    }
}

/// The injected HTTP GET capability. Production code uses [`ReqwestGet`];
/// tests substitute a scripted fake so no network calls are made.
#[async_trait]
pub trait HttpGet: Send + Sync {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse>;
}

#[async_trait]
impl<T: HttpGet + ?Sized> HttpGet for &T {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse> {
        (**self).get(url, query).await
    }
}

/// Reqwest-backed transport with an optional GitHub API token.
pub struct ReqwestGet {
    client: Client,
    token: Option<String>,
}

impl ReqwestGet {
    pub fn new(token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(ReqwestGet { client, token })
    }
}

#[async_trait]
impl HttpGet for ReqwestGet {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpResponse> {
        let mut request = self
            .client
            .get(url)
            .query(query)
            .header("Accept", "application/vnd.github.v3+json");

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        // Error responses are not always JSON; the status check downstream
        // never looks at their body, so fall back to Null instead of failing.
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        Ok(HttpResponse::new(status, headers, body))
    }
}
