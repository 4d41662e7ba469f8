//! GitHub API client
//!
//! Minimal client for the GitHub repos endpoint, fetching the star count of
//! a repository. A 404 means the package's home page points at something
//! that is not a real repository.

use super::ApiOutcome;
use crate::Result;
use reqwest::header::HeaderMap;
use serde::Deserialize;

/// Base URL of the production API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// The slice of a GitHub repository document this tool cares about.
#[derive(Debug, Deserialize)]
pub struct RepoStats {
    pub stargazers_count: u64,
}

/// GitHub API client
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a new hosting API client with optional authentication token and base URL
    pub fn new(token: Option<&str>, base_url: impl Into<String>) -> Result<Self> {
        use reqwest::header::{AUTHORIZATION, HeaderValue};

        let mut client_builder = reqwest::Client::builder().user_agent("pypi-rank");

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("Bearer {t}"))?;
            auth_val.set_sensitive(true);

            let mut headers = HeaderMap::new();
            let _ = headers.insert(AUTHORIZATION, auth_val);

            client_builder = client_builder.default_headers(headers);
        }

        Ok(Self {
            client: client_builder.build()?,
            base_url: base_url.into(),
        })
    }

    /// Get the base URL for this client
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch repository stats and classify the result.
    pub async fn repo_stats(&self, owner: &str, repo: &str) -> ApiOutcome<RepoStats> {
        let url = format!("{}/repos/{owner}/{repo}", self.base_url);

        let resp = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => return ApiOutcome::Failed(e.into()),
        };

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return ApiOutcome::NotFound;
        }

        if !status.is_success() {
            let error = resp.error_for_status().expect_err("status is not successful at this point");
            return ApiOutcome::Failed(error.into());
        }

        match resp.json::<RepoStats>().await {
            Ok(stats) => ApiOutcome::Success(stats),
            Err(e) => ApiOutcome::Failed(e.into()),
        }
    }
}
