//! Runs the command line flow against in-memory streams.

use chooser::cli::{run_with, Args};
use chooser::Error;
use clap::Parser;
use std::fs;
use tempfile::TempDir;
use test_log::test;

#[test]
fn test_run_with_flags() {
    let args = Args::parse_from(["chooser", "-p", "Deploy?", "-a", "yes,no", "-d", "no"]);
    let mut output = Vec::<u8>::new();

    let answer = run_with(args, &mut "maybe\n\n".as_bytes(), &mut output).unwrap();

    assert_eq!(answer, "no");
    assert_eq!(String::from_utf8(output).unwrap(), "Deploy? [yes/NO]: ".repeat(2));
}

#[test]
fn test_run_with_config_file() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("options.json");
    fs::write(
        &config,
        r#"{"prompt": "Env", "allowed": ["dev", "prod"], "max_attempts": 1}"#,
    )
    .unwrap();

    let args = Args::parse_from(["chooser", "--config", config.to_str().unwrap()]);
    let result = run_with(args, &mut "staging\nprod\n".as_bytes(), &mut Vec::<u8>::new());

    assert!(matches!(result, Err(Error::GaveUpError { attempts: 1 })));
}

#[test]
fn test_run_with_unsupported_config() {
    let args = Args::parse_from(["chooser", "--config", "options.ini"]);
    let mut output = Vec::<u8>::new();

    let result = run_with(args, &mut "a\n".as_bytes(), &mut output);

    assert!(matches!(result, Err(Error::UnsupportedConfigFormatError { .. })));
    assert!(output.is_empty());
}
