//! PyPI registry client
//!
//! Minimal client for the PyPI project endpoint, fetching just enough
//! metadata to locate a package's home page.

use super::ApiOutcome;
use crate::Result;
use serde::Deserialize;

/// Base URL of the production registry.
pub const DEFAULT_BASE_URL: &str = "https://pypi.org";

/// The slice of a PyPI project document this tool cares about.
#[derive(Debug, Deserialize)]
struct ProjectDocument {
    info: ProjectInfo,
}

/// Project metadata from the registry.
///
/// `home_page` is JSON `null` for some packages (beautifulsoup4, notably),
/// so absence and null are folded together.
#[derive(Debug, Deserialize)]
pub struct ProjectInfo {
    #[serde(default)]
    pub home_page: Option<String>,
}

impl ProjectInfo {
    /// The home page URL, treating null and empty string as absent.
    #[must_use]
    pub fn home_page(&self) -> Option<&str> {
        self.home_page.as_deref().filter(|s| !s.is_empty())
    }
}

/// PyPI registry API client
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a new registry client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder().user_agent("pypi-rank").build()?,
            base_url: base_url.into(),
        })
    }

    /// Get the base URL for this client
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch project metadata for a package and classify the result.
    pub async fn project(&self, package: &str) -> ApiOutcome<ProjectInfo> {
        let url = format!("{}/pypi/{package}/json", self.base_url);

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

        match resp.json::<ProjectDocument>().await {
            Ok(doc) => ApiOutcome::Success(doc.info),
            Err(e) => ApiOutcome::Failed(e.into()),
        }
    }
}
