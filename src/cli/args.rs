use crate::constants::verbosity;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for chooser.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Options file (.json, .yaml or .yml); flags override its values.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Text shown before the options.
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Allowed options (comma-separated).
    #[arg(short, long, value_delimiter = ',')]
    pub allowed: Vec<String>,

    /// Answer used when the user enters a blank line.
    #[arg(short, long)]
    pub default: Option<String>,

    /// Accept a blank answer even without a default.
    #[arg(short = 'e', long = "allow-empty")]
    pub allow_empty: bool,

    /// Attempts before giving up (values below 1 mean 5).
    #[arg(short, long = "max-attempts", allow_negative_numbers = true)]
    pub max_attempts: Option<i32>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_args() {
        let args = Args::parse_from(["chooser"]);
        assert_eq!(args.config, None);
        assert_eq!(args.prompt, None);
        assert!(args.allowed.is_empty());
        assert!(!args.allow_empty);
        assert_eq!(args.max_attempts, None);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_from([
            "chooser",
            "--config",
            "options.yaml",
            "--prompt",
            "Continue?",
            "--allowed",
            "y,n",
            "--default",
            "y",
            "--allow-empty",
            "--max-attempts",
            "-1",
            "-vv",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("options.yaml")));
        assert_eq!(args.prompt.as_deref(), Some("Continue?"));
        assert_eq!(args.allowed, vec!["y", "n"]);
        assert_eq!(args.default.as_deref(), Some("y"));
        assert!(args.allow_empty);
        assert_eq!(args.max_attempts, Some(-1));
        assert_eq!(args.verbose, 2);
    }
}
