//! Command-line entry point for pypi-rank

use super::{Host, analyze};
use crate::Result;
use camino::Utf8PathBuf;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, ValueEnum};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

#[derive(Parser, Debug)]
#[command(name = "pypi-rank", version, author)]
#[command(about = "Rank top PyPI packages by their downloads-to-stars ratio")]
#[command(styles = CLAP_STYLES)]
pub struct Args {
    /// Path to the top-packages JSON file
    #[arg(value_name = "INPUT", default_value = "top-pypi-packages.json")]
    pub input: Utf8PathBuf,

    /// SQLite file to write the analysis to
    #[arg(long, short = 'o', value_name = "PATH", default_value = "analysis.sqlite")]
    pub output: Utf8PathBuf,

    /// Number of packages to analyze
    #[arg(long, value_name = "N", default_value_t = 1000)]
    pub count: usize,

    /// Delay between packages, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 250)]
    pub delay_ms: u64,

    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN")]
    pub github_token: Option<String>,

    /// Read the GitHub personal access token from a file
    #[arg(long, value_name = "PATH", conflicts_with = "github_token")]
    pub github_token_file: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Parse command-line arguments and run the analysis.
///
/// This function is designed to be called from main.rs with the program arguments.
///
/// # Errors
///
/// Returns an error if argument parsing fails or if the analysis cannot
/// produce an output database.
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let args = Args::parse_from(args);
    init_logging(args.log_level);
    analyze(host, &args).await
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["pypi-rank"]);
        assert_eq!(args.input, Utf8PathBuf::from("top-pypi-packages.json"));
        assert_eq!(args.output, Utf8PathBuf::from("analysis.sqlite"));
        assert_eq!(args.count, 1000);
        assert_eq!(args.delay_ms, 250);
        assert_eq!(args.color, ColorMode::Auto);
        assert_eq!(args.log_level, LogLevel::None);
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from([
            "pypi-rank",
            "top.json",
            "-o",
            "out.sqlite",
            "--count",
            "25",
            "--delay-ms",
            "0",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.input, Utf8PathBuf::from("top.json"));
        assert_eq!(args.output, Utf8PathBuf::from("out.sqlite"));
        assert_eq!(args.count, 25);
        assert_eq!(args.delay_ms, 0);
        assert_eq!(args.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_token_and_token_file_conflict() {
        let result = Args::try_parse_from([
            "pypi-rank",
            "--github-token",
            "abc",
            "--github-token-file",
            "GITHUB_PAT",
        ]);
        let _ = result.unwrap_err();
    }
}
