//! End-to-end orchestration of the batch analysis.

use super::Host;
use super::ProgressReporter;
use super::run::{Args, ColorMode, LogLevel};
use crate::Result;
use crate::facts::{Analyzer, Pacer, Progress, hosting, load_packages, registry};
use crate::store::write_analysis;
use camino::Utf8Path;
use core::time::Duration;
use ohno::IntoAppError;
use std::io::Write;

/// Run the whole batch job: load input, analyze, persist, summarize.
pub async fn analyze<H: Host>(host: &mut H, args: &Args) -> Result<()> {
    let token = resolve_github_token(args)?;

    let packages = load_packages(&args.input)?;
    let input_count = packages.len();

    let registry = registry::Client::new(registry::DEFAULT_BASE_URL)?;
    let hosting = hosting::Client::new(token.as_deref(), hosting::DEFAULT_BASE_URL)?;
    let pacer = Pacer::new(Duration::from_millis(args.delay_ms));

    // With logging enabled the bar would garble the log stream, so push its
    // visibility threshold out of reach.
    let progress_delay = if args.log_level == LogLevel::None {
        Duration::from_millis(300)
    } else {
        Duration::from_secs(365 * 24 * 3600)
    };

    let use_colors_for_progress = match args.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            use std::io::{IsTerminal, stderr};
            stderr().is_terminal()
        }
    };

    let progress = ProgressReporter::new(progress_delay, use_colors_for_progress);

    let analyzer = Analyzer::new(registry, hosting, pacer, args.count);
    let results = analyzer.analyze(packages, &progress).await;
    progress.done();

    let analyzed_count = results.records.len();
    write_analysis(&args.output, results.records, args.count)?;

    report(host, input_count, analyzed_count, &results.dropped, &args.output);

    Ok(())
}

/// Write the run summary, sending dropped packages to the error stream.
fn report<H: Host>(host: &mut H, input_count: usize, analyzed_count: usize, dropped: &[String], output: &Utf8Path) {
    if !dropped.is_empty() {
        let _ = writeln!(
            host.error(),
            "Dropped {} package(s): {}",
            dropped.len(),
            dropped.join(", ")
        );
    }

    let _ = writeln!(
        host.output(),
        "Analyzed {analyzed_count} of {input_count} package(s); results written to '{output}'"
    );
}

/// Resolve the GitHub token from the command line or a token file.
fn resolve_github_token(args: &Args) -> Result<Option<String>> {
    if args.github_token.is_some() {
        return Ok(args.github_token.clone());
    }

    args.github_token_file.as_ref().map_or(Ok(None), |path| {
        let token = std::fs::read_to_string(path).into_app_err_with(|| format!("reading GitHub token file '{path}'"))?;
        Ok(Some(token.trim().to_string()))
    })
}
