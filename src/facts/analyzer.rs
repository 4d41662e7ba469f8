use super::{ApiOutcome, PackageRef, Pacer, Progress, RepoSpec, hosting, registry};
use core::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use url::Url;

const LOG_TARGET: &str = "  analyzer";

/// One analyzed package: its fixed download count, fetched star count, and
/// the derived downloads-to-stars ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageAnalysis {
    pub name: String,
    pub downloads: u64,
    pub stars: u64,
    pub ratio: f64,
}

/// The outcome of an analysis run: the surviving records plus the names of
/// the packages that had to be dropped.
#[derive(Debug)]
pub struct AnalysisResults {
    pub records: Vec<PackageAnalysis>,
    pub dropped: Vec<String>,
}

/// Runs the sequential analysis loop over the input records.
///
/// Each record costs two stateless GET calls, paced by a fixed delay. A
/// record that cannot be resolved to a real GitHub repository with at least
/// one star is logged and dropped; the loop never aborts on a per-record
/// failure and never retries.
#[derive(Debug)]
pub struct Analyzer {
    registry: registry::Client,
    hosting: hosting::Client,
    pacer: Pacer,
    limit: usize,
}

impl Analyzer {
    #[must_use]
    pub const fn new(registry: registry::Client, hosting: hosting::Client, pacer: Pacer, limit: usize) -> Self {
        Self {
            registry,
            hosting,
            pacer,
            limit,
        }
    }

    /// Analyze input records in order until `limit` packages have been
    /// successfully analyzed or the input is exhausted.
    ///
    /// Returns the surviving records in input order, along with the names of
    /// the dropped packages. Dropped records do not count against the limit.
    pub async fn analyze(self, packages: Vec<PackageRef>, progress: &dyn Progress) -> AnalysisResults {
        let analyzed = Arc::new(AtomicU64::new(0));
        let current = Arc::new(Mutex::new(String::new()));

        progress.set_phase("Analyzing");
        {
            let analyzed = Arc::clone(&analyzed);
            let current = Arc::clone(&current);
            let total = self.limit as u64;
            progress.set_determinate(Box::new(move || {
                let name = current.lock().expect("lock poisoned").clone();
                (total, analyzed.load(Ordering::Relaxed), name)
            }));
        }

        let mut records = Vec::with_capacity(self.limit.min(packages.len()));
        let mut dropped = Vec::new();

        for pkg in packages {
            if records.len() == self.limit {
                break;
            }

            self.pacer.pace().await;
            current.lock().expect("lock poisoned").clone_from(&pkg.name);

            if let Some(record) = self.analyze_package(&pkg).await {
                records.push(record);
                analyzed.store(records.len() as u64, Ordering::Relaxed);
            } else {
                dropped.push(pkg.name);
            }
        }

        AnalysisResults { records, dropped }
    }

    /// Analyze a single package, returning `None` if it must be dropped.
    async fn analyze_package(&self, pkg: &PackageRef) -> Option<PackageAnalysis> {
        log::info!(target: LOG_TARGET, "Querying registry for package '{}'", pkg.name);

        let info = match self.registry.project(&pkg.name).await {
            ApiOutcome::Success(info) => info,
            ApiOutcome::NotFound => {
                log::warn!(target: LOG_TARGET, "Package '{}' not found in the registry, dropping from analysis", pkg.name);
                return None;
            }
            ApiOutcome::Failed(e) => {
                log::error!(target: LOG_TARGET, "Could not fetch registry metadata for '{}': {e:#}", pkg.name);
                return None;
            }
        };

        let Some(home_page) = info.home_page() else {
            log::warn!(target: LOG_TARGET, "Package '{}' has no home page, dropping from analysis", pkg.name);
            return None;
        };

        let url = match Url::parse(home_page) {
            Ok(url) => url,
            Err(e) => {
                log::warn!(
                    target: LOG_TARGET,
                    "Home page for package '{}' ({home_page}) is not a valid URL ({e}), dropping from analysis",
                    pkg.name
                );
                return None;
            }
        };

        let spec = match RepoSpec::parse(&url) {
            Ok(spec) => spec,
            Err(e) => {
                log::warn!(
                    target: LOG_TARGET,
                    "Home page for package '{}' ({home_page}) is not a repository URL ({e:#}), dropping from analysis",
                    pkg.name
                );
                return None;
            }
        };

        if !spec.is_github() {
            log::warn!(
                target: LOG_TARGET,
                "Home page for package '{}' ({home_page}) is not a GitHub URL, dropping from analysis",
                pkg.name
            );
            return None;
        }

        let stats = match self.hosting.repo_stats(spec.owner(), spec.repo()).await {
            ApiOutcome::Success(stats) => stats,
            ApiOutcome::NotFound => {
                log::warn!(
                    target: LOG_TARGET,
                    "Home page for package '{}' ({home_page}) is not a real GitHub repo (404), dropping from analysis",
                    pkg.name
                );
                return None;
            }
            ApiOutcome::Failed(e) => {
                log::error!(target: LOG_TARGET, "Could not fetch repository stats for '{spec}': {e:#}");
                return None;
            }
        };

        if stats.stargazers_count == 0 {
            log::warn!(
                target: LOG_TARGET,
                "Repository '{spec}' for package '{}' has no stars, cannot compute ratio, dropping from analysis",
                pkg.name
            );
            return None;
        }

        let ratio = dl_to_s_ratio(pkg.downloads, stats.stargazers_count);
        log::info!(
            target: LOG_TARGET,
            "Package '{}': {} downloads, {} stars, ratio {ratio:.2}",
            pkg.name,
            pkg.downloads,
            stats.stargazers_count
        );

        Some(PackageAnalysis {
            name: pkg.name.clone(),
            downloads: pkg.downloads,
            stars: stats.stargazers_count,
            ratio,
        })
    }
}

/// Downloads divided by stars. Callers must ensure `stars` is non-zero.
#[expect(clippy::cast_precision_loss, reason = "acceptable for a popularity ratio")]
fn dl_to_s_ratio(downloads: u64, stars: u64) -> f64 {
    downloads as f64 / stars as f64
}
