use crate::Result;
use core::fmt::{Display, Formatter};
use ohno::bail;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use url::Url;

/// Characters GitHub allows in a repository name.
static REPO_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("regex is valid"));

/// A repository coordinate parsed from a package's home page URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSpec {
    host: Arc<str>,
    owner: Arc<str>,
    repo: Arc<str>,
}

impl RepoSpec {
    /// Parse a home page URL into a repository coordinate.
    ///
    /// The first two path segments become owner and repo; anything deeper
    /// (e.g. `/tree/main/...`) is discarded. A trailing `.git` on the repo
    /// name is stripped, and a leading `www.` on the host is ignored.
    pub fn parse(url: &Url) -> Result<Self> {
        let path_segments: Vec<_> = url.path_segments().map(Iterator::collect).unwrap_or_default();

        if path_segments.len() < 2 {
            bail!("invalid repository URL format: {url}");
        }

        if path_segments[0].is_empty() || path_segments[1].is_empty() {
            bail!("invalid repository URL: empty owner or repo name: {url}");
        }

        let host = url.host_str().unwrap_or_default();
        let host = host.strip_prefix("www.").unwrap_or(host);
        let owner = path_segments[0];
        let repo = path_segments[1].trim_end_matches(".git");

        if !REPO_NAME.is_match(repo) {
            bail!("invalid repository name '{repo}' in URL: {url}");
        }

        Ok(Self {
            host: Arc::from(host),
            owner: Arc::from(owner),
            repo: Arc::from(repo),
        })
    }

    /// Whether this repository lives on github.com.
    #[must_use]
    pub fn is_github(&self) -> bool {
        self.host.as_ref() == "github.com"
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl Display for RepoSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_github_url() {
        let url = Url::parse("https://github.com/pallets/flask").unwrap();
        let spec = RepoSpec::parse(&url).unwrap();

        assert_eq!(spec.owner(), "pallets");
        assert_eq!(spec.repo(), "flask");
        assert!(spec.is_github());
    }

    #[test]
    fn test_parse_strips_www_prefix() {
        let url = Url::parse("https://www.github.com/pallets/flask").unwrap();
        let spec = RepoSpec::parse(&url).unwrap();

        assert_eq!(spec.to_string(), "github.com/pallets/flask");
        assert!(spec.is_github());
    }

    #[test]
    fn test_parse_non_github_host() {
        let url = Url::parse("https://gitlab.com/gitlab-org/gitlab").unwrap();
        let spec = RepoSpec::parse(&url).unwrap();

        assert_eq!(spec.to_string(), "gitlab.com/gitlab-org/gitlab");
        assert!(!spec.is_github());
    }

    #[test]
    fn test_parse_url_with_git_extension() {
        let url = Url::parse("https://github.com/psf/requests.git").unwrap();
        let spec = RepoSpec::parse(&url).unwrap();

        assert_eq!(spec.repo(), "requests"); // .git should be stripped
    }

    #[test]
    fn test_parse_url_with_additional_path_segments() {
        let url = Url::parse("https://github.com/python/cpython/tree/main/Lib").unwrap();
        let spec = RepoSpec::parse(&url).unwrap();

        assert_eq!(spec.owner(), "python");
        assert_eq!(spec.repo(), "cpython");
    }

    #[test]
    fn test_same_repo_different_paths_are_equal() {
        let url1 = Url::parse("https://github.com/python/cpython/tree/main/Lib").unwrap();
        let url2 = Url::parse("https://github.com/python/cpython/tree/main/Doc").unwrap();
        let spec1 = RepoSpec::parse(&url1).unwrap();
        let spec2 = RepoSpec::parse(&url2).unwrap();

        assert_eq!(spec1, spec2);
    }

    #[test]
    fn test_parse_invalid_url_missing_segments() {
        let url = Url::parse("https://github.com/").unwrap();
        let _ = RepoSpec::parse(&url).unwrap_err();
    }

    #[test]
    fn test_parse_invalid_url_only_owner() {
        let url = Url::parse("https://github.com/pallets").unwrap();
        let _ = RepoSpec::parse(&url).unwrap_err();
    }

    #[test]
    fn test_parse_invalid_url_empty_owner() {
        let url = Url::parse("https://github.com//flask").unwrap();
        let _ = RepoSpec::parse(&url).unwrap_err();
    }

    #[test]
    fn test_parse_invalid_url_empty_repo() {
        let url = Url::parse("https://github.com/pallets/").unwrap();
        let _ = RepoSpec::parse(&url).unwrap_err();
    }

    #[test]
    fn test_parse_rejects_bad_repo_name_characters() {
        let url = Url::parse("https://github.com/owner/re%20po").unwrap();
        let _ = RepoSpec::parse(&url).unwrap_err();
    }

    #[test]
    fn test_display_trait() {
        let url = Url::parse("https://github.com/pallets/flask").unwrap();
        let spec = RepoSpec::parse(&url).unwrap();

        assert_eq!(spec.to_string(), "github.com/pallets/flask");
    }
}
