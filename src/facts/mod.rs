//! Data collection for top PyPI packages
//!
//! This module gathers the information needed to rank a package: its download
//! count comes from the input dump, its home page from the PyPI project
//! endpoint, and its star count from the GitHub repos endpoint.
//!
//! # Implementation Model
//!
//! The [`Analyzer`] walks the input records sequentially, paced by a fixed
//! delay between packages. For each record it makes two stateless GET calls
//! (registry, then hosting) and derives the downloads-to-stars ratio. A record
//! that cannot be resolved to a real GitHub repository is logged and dropped;
//! there are no retries and no caching.

mod analyzer;
mod input;
mod outcome;
mod pacer;
mod progress;
mod repo_spec;

pub mod hosting;
pub mod registry;

pub use analyzer::{AnalysisResults, Analyzer, PackageAnalysis};
pub use input::{PackageRef, load_packages};
pub use outcome::ApiOutcome;
pub use pacer::Pacer;
pub use progress::Progress;
pub use repo_spec::RepoSpec;
