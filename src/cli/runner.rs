use crate::{
    chooser::{Chooser, Options},
    cli::Args,
    config::load_options,
    error::Result,
    ioutils::LineSource,
};
use log::info;
use std::io::Write;

/// Runs chooser on the standard streams.
///
/// Prompts go to stderr and the chosen value is printed on stdout, so the
/// answer can be captured by a shell.
pub fn run(args: Args) -> Result<()> {
    let mut stdin = std::io::stdin().lock();
    let mut stderr = std::io::stderr().lock();
    let answer = run_with(args, &mut stdin, &mut stderr)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{answer}")?;
    Ok(())
}

/// Builds the options from `args` and asks using the given streams.
pub fn run_with(
    args: Args,
    input: &mut dyn LineSource,
    output: &mut dyn Write,
) -> Result<String> {
    let options = build_options(args)?;
    info!("Asking with {} allowed options", options.allowed.len());
    Chooser::new(&options).with_input(input).with_output(output).choose()
}

/// Merges the optional config file with the command line flags.
pub fn build_options(args: Args) -> Result<Options> {
    let mut options = match &args.config {
        Some(path) => load_options(path)?,
        None => Options::default(),
    };

    if let Some(prompt) = args.prompt {
        options.prompt = prompt;
    }
    if !args.allowed.is_empty() {
        options.allowed = args.allowed;
    }
    if let Some(default) = args.default {
        options.default = default;
    }
    if args.allow_empty {
        options.allow_empty = true;
    }
    if let Some(max_attempts) = args.max_attempts {
        options.max_attempts = max_attempts;
    }

    Ok(options)
}
